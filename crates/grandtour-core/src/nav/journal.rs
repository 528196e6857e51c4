use std::collections::VecDeque;
use std::fmt;

use serde::Serialize;

use super::view::ViewId;

/// Default number of transitions kept.
pub const DEFAULT_JOURNAL_LIMIT: usize = 32;

/// Largest limit a config file may ask for.
pub const MAX_JOURNAL_LIMIT: usize = 10_000;

/// Operation that produced a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionCause {
    GoTo,
    GoHome,
    Login,
    Logout,
    LoginBack,
}

impl TransitionCause {
    pub fn as_str(self) -> &'static str {
        match self {
            TransitionCause::GoTo => "go_to",
            TransitionCause::GoHome => "go_home",
            TransitionCause::Login => "login",
            TransitionCause::Logout => "logout",
            TransitionCause::LoginBack => "login_back",
        }
    }
}

impl fmt::Display for TransitionCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TransitionRecord {
    pub seq: u64,
    pub from: ViewId,
    pub to: ViewId,
    pub cause: TransitionCause,
}

/// Bounded in-memory log of applied transitions. Oldest entries drop first.
#[derive(Debug, Clone)]
pub struct Journal {
    entries: VecDeque<TransitionRecord>,
    limit: usize,
    next_seq: u64,
}

impl Default for Journal {
    fn default() -> Self {
        Self::with_limit(DEFAULT_JOURNAL_LIMIT)
    }
}

impl Journal {
    /// A limit of 0 disables recording.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(limit.min(DEFAULT_JOURNAL_LIMIT)),
            limit,
            next_seq: 0,
        }
    }

    pub(crate) fn record(&mut self, from: ViewId, to: ViewId, cause: TransitionCause) {
        let seq = self.next_seq;
        self.next_seq = self.next_seq.wrapping_add(1);
        if self.limit == 0 {
            return;
        }
        while self.entries.len() >= self.limit {
            self.entries.pop_front();
        }
        self.entries.push_back(TransitionRecord {
            seq,
            from,
            to,
            cause,
        });
    }

    pub fn entries(&self) -> impl DoubleEndedIterator<Item = &TransitionRecord> {
        self.entries.iter()
    }

    pub fn last(&self) -> Option<&TransitionRecord> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total transitions recorded, including dropped ones.
    pub fn total(&self) -> u64 {
        self.next_seq
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drops_oldest_past_limit() {
        let mut journal = Journal::with_limit(2);
        journal.record(ViewId::Landing, ViewId::Login, TransitionCause::GoTo);
        journal.record(ViewId::Login, ViewId::CrewApp, TransitionCause::Login);
        journal.record(ViewId::CrewApp, ViewId::Landing, TransitionCause::Logout);

        let seqs: Vec<u64> = journal.entries().map(|r| r.seq).collect();
        assert_eq!(seqs, vec![1, 2]);
        assert_eq!(journal.total(), 3);
        assert_eq!(journal.last().map(|r| r.cause), Some(TransitionCause::Logout));
    }

    #[test]
    fn test_zero_limit_records_nothing() {
        let mut journal = Journal::with_limit(0);
        journal.record(ViewId::Landing, ViewId::Login, TransitionCause::GoTo);
        assert!(journal.is_empty());
        assert_eq!(journal.total(), 1);
    }

    #[test]
    fn test_huge_limit_does_not_preallocate() {
        let mut journal = Journal::with_limit(usize::MAX);
        journal.record(ViewId::Landing, ViewId::Login, TransitionCause::GoTo);
        assert_eq!(journal.entries().count(), 1);
    }
}
