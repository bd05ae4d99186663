use std::fmt;

/// Why the auth probe did not confirm a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    /// The server answered, but with a non-2xx status.
    Rejected { status: u16 },
    /// The request failed before a usable response existed.
    Transport(String),
}

impl RejectReason {
    /// Transport failures are unexpected and get logged; rejections do not.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rejected { status } => write!(f, "rejected with status {}", status),
            Self::Transport(msg) => write!(f, "transport error: {}", msg),
        }
    }
}

/// Result of a single auth probe
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    Authenticated,
    Unauthenticated(RejectReason),
}

impl AuthOutcome {
    /// Classifies an HTTP status: the whole 2xx family counts as authenticated.
    pub fn from_status(status: u16) -> Self {
        if (200..=299).contains(&status) {
            Self::Authenticated
        } else {
            Self::Unauthenticated(RejectReason::Rejected { status })
        }
    }

    pub fn transport(err: impl fmt::Display) -> Self {
        Self::Unauthenticated(RejectReason::Transport(err.to_string()))
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated)
    }
}
