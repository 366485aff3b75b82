//! Per-address lifecycle states
//!
//! Every discovered address moves through a small state machine:
//! Discovered → Fetching → (Stored | Failed) → LinksExtracted (markup
//! only) → Done. The engine uses these states for tracing and for the
//! end-of-run tally; they are never persisted.

use std::fmt;

/// The state of one address in the crawl
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageState {
    /// Admitted to the frontier, not yet fetched
    Discovered,

    /// Fetch in flight
    Fetching,

    /// Fetched and persisted successfully
    Stored,

    /// Fetch or store failed; subtree abandoned
    Failed,

    /// Stored markup whose links have been extracted
    LinksExtracted,

    /// Processing of this address finished
    Done,
}

impl PageState {
    /// Returns true if no further processing happens in this state
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Failed | Self::Done)
    }
}

impl fmt::Display for PageState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Discovered => "discovered",
            Self::Fetching => "fetching",
            Self::Stored => "stored",
            Self::Failed => "failed",
            Self::LinksExtracted => "links_extracted",
            Self::Done => "done",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_states() {
        assert!(PageState::Failed.is_terminal());
        assert!(PageState::Done.is_terminal());
        assert!(!PageState::Discovered.is_terminal());
        assert!(!PageState::Fetching.is_terminal());
        assert!(!PageState::Stored.is_terminal());
        assert!(!PageState::LinksExtracted.is_terminal());
    }

    #[test]
    fn test_display() {
        assert_eq!(PageState::Stored.to_string(), "stored");
        assert_eq!(PageState::LinksExtracted.to_string(), "links_extracted");
    }
}
