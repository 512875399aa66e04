// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Toast-style user notifications.
//!
//! This module provides the notice collaborator used by the query controller:
//! fire-and-forget messages with a kind and an optional position hint. A
//! single notice is visible at a time; the newest replaces whatever is
//! showing, and the periodic UI tick expires it.

/// How many UI ticks a notice stays visible (ticks arrive every 250 ms).
const NOTICE_TICKS: u8 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NoticeKind {
    Info,
    Success,
    Failure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NoticePosition {
    Centre,
    Bottom,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Notice {
    pub(crate) kind: NoticeKind,
    pub(crate) text: String,
    pub(crate) position: NoticePosition,
}

impl Notice {
    pub(crate) fn info(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            text: text.into(),
            position: NoticePosition::Centre,
        }
    }

    pub(crate) fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
            position: NoticePosition::Centre,
        }
    }

    pub(crate) fn failure(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Failure,
            text: text.into(),
            position: NoticePosition::Centre,
        }
    }

    pub(crate) fn failure_at(text: impl Into<String>, position: NoticePosition) -> Self {
        Self {
            kind: NoticeKind::Failure,
            text: text.into(),
            position,
        }
    }
}

pub(crate) struct NoticeBoard {
    current: Option<Notice>,
    ticks_left: u8,
}

impl NoticeBoard {
    pub(crate) fn new() -> Self {
        Self {
            current: None,
            ticks_left: 0,
        }
    }

    /// Shows a notice, replacing any notice currently displayed.
    pub(crate) fn post(&mut self, notice: Notice) {
        self.current = Some(notice);
        self.ticks_left = NOTICE_TICKS;
    }

    /// Advances the display clock by one UI tick, expiring the current
    /// notice when its time is up.
    pub(crate) fn tick(&mut self) {
        if self.current.is_none() {
            return;
        }
        self.ticks_left = self.ticks_left.saturating_sub(1);
        if self.ticks_left == 0 {
            self.current = None;
        }
    }

    pub(crate) fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_replaces_current_notice() {
        let mut board = NoticeBoard::new();
        board.post(Notice::info("first"));
        board.post(Notice::failure("second"));

        let current = board.current().unwrap();
        assert_eq!(current.text, "second");
        assert_eq!(current.kind, NoticeKind::Failure);
    }

    #[test]
    fn test_notice_expires_after_its_ticks() {
        let mut board = NoticeBoard::new();
        board.post(Notice::info("hello"));

        for _ in 0..NOTICE_TICKS - 1 {
            board.tick();
            assert!(board.current().is_some());
        }
        board.tick();
        assert!(board.current().is_none());
    }

    #[test]
    fn test_reposting_restarts_the_clock() {
        let mut board = NoticeBoard::new();
        board.post(Notice::info("first"));
        for _ in 0..NOTICE_TICKS - 1 {
            board.tick();
        }
        board.post(Notice::info("again"));
        board.tick();
        assert!(board.current().is_some());
    }

    #[test]
    fn test_position_hint_carried_through() {
        let notice =
            Notice::failure_at("end of results", NoticePosition::Bottom);
        assert_eq!(notice.position, NoticePosition::Bottom);
        assert_eq!(Notice::info("x").position, NoticePosition::Centre);
    }
}
