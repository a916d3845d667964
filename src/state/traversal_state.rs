/// Traversal state definitions for tracking a domain's crawl progress
///
/// This module defines the lifecycle a single domain traversal moves through.
use std::fmt;

/// Represents the lifecycle state of one domain traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraversalState {
    /// Traversal has been created but its frontier is not seeded yet
    Idle,

    /// Frontier holds at least one pending URL
    Running,

    /// The last pending URL was popped and is being processed; its links may
    /// still refill the frontier
    Draining,

    /// Frontier is exhausted, nothing more will be fetched
    Done,
}

impl TraversalState {
    /// Returns true if moving from `self` to `next` is a legal transition
    ///
    /// ```text
    /// Idle ──> Running <──> Draining ──> Done
    ///   └──────────────────────────────> Done
    /// ```
    pub fn can_transition_to(&self, next: TraversalState) -> bool {
        matches!(
            (self, next),
            (Self::Idle, Self::Running)
                | (Self::Idle, Self::Done)
                | (Self::Running, Self::Draining)
                | (Self::Draining, Self::Running)
                | (Self::Draining, Self::Done)
                | (Self::Running, Self::Done)
        )
    }

    /// Returns the lowercase name used in logs and reports
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Draining => "draining",
            Self::Done => "done",
        }
    }
}

impl fmt::Display for TraversalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
