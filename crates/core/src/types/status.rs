//! Adoption request status and the listing filter over it.

use serde::{Deserialize, Serialize};

/// Lifecycle status of an adoption request.
///
/// The set is closed: no other value may be stored on a request. New requests
/// start as `Pending`. `Rejected` and `Completed` are terminal in the sense
/// that the platform takes no automatic follow-up action, though by default
/// an operator may still move a request out of them (the strict transition
/// table in [`RequestStatus::can_transition_to`] is opt-in).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Completed,
}

impl RequestStatus {
    /// All statuses, in the order the admin filter tabs show them.
    pub const ALL: [Self; 4] = [
        Self::Pending,
        Self::Approved,
        Self::Completed,
        Self::Rejected,
    ];

    /// Display label shown to operators (the product speaks pt-BR).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pendente",
            Self::Approved => "Aprovado",
            Self::Rejected => "Rejeitado",
            Self::Completed => "Concluído",
        }
    }

    /// Timeline marker used by the history view.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Completed => "✓",
            Self::Rejected => "✗",
            Self::Pending | Self::Approved => "•",
        }
    }

    /// Whether the platform performs no automatic follow-up in this status.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Rejected | Self::Completed)
    }

    /// Whether the strict transition table allows moving to `to`.
    ///
    /// The table is `pending -> {approved, rejected}`,
    /// `approved -> {completed, rejected}` and nothing out of the terminal
    /// states. It is only consulted when strict transitions are enabled;
    /// by default any status may move to any other.
    #[must_use]
    pub const fn can_transition_to(self, to: Self) -> bool {
        matches!(
            (self, to),
            (Self::Pending, Self::Approved | Self::Rejected)
                | (Self::Approved, Self::Completed | Self::Rejected)
        )
    }
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Approved => write!(f, "approved"),
            Self::Rejected => write!(f, "rejected"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

impl std::str::FromStr for RequestStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            "completed" => Ok(Self::Completed),
            _ => Err(format!("invalid request status: {s}")),
        }
    }
}

/// A request-listing filter: one specific status or the "all" sentinel tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    /// Keep every request.
    #[default]
    All,
    /// Keep only requests in exactly this status.
    Only(RequestStatus),
}

impl StatusFilter {
    /// Whether a request in `status` passes this filter.
    #[must_use]
    pub fn matches(self, status: RequestStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == status,
        }
    }
}

impl From<RequestStatus> for StatusFilter {
    fn from(status: RequestStatus) -> Self {
        Self::Only(status)
    }
}

impl std::fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Only(status) => write!(f, "{status}"),
        }
    }
}

impl std::str::FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(Self::All);
        }
        s.parse::<RequestStatus>().map(Self::Only)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(RequestStatus::Pending.label(), "Pendente");
        assert_eq!(RequestStatus::Approved.label(), "Aprovado");
        assert_eq!(RequestStatus::Rejected.label(), "Rejeitado");
        assert_eq!(RequestStatus::Completed.label(), "Concluído");
    }

    #[test]
    fn test_icons() {
        assert_eq!(RequestStatus::Completed.icon(), "✓");
        assert_eq!(RequestStatus::Rejected.icon(), "✗");
        assert_eq!(RequestStatus::Pending.icon(), "•");
        assert_eq!(RequestStatus::Approved.icon(), "•");
    }

    #[test]
    fn test_default_is_pending() {
        assert_eq!(RequestStatus::default(), RequestStatus::Pending);
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(RequestStatus::Rejected.is_terminal());
        assert!(RequestStatus::Completed.is_terminal());
        assert!(!RequestStatus::Pending.is_terminal());
        assert!(!RequestStatus::Approved.is_terminal());
    }

    #[test]
    fn test_strict_transition_table() {
        use RequestStatus::{Approved, Completed, Pending, Rejected};

        assert!(Pending.can_transition_to(Approved));
        assert!(Pending.can_transition_to(Rejected));
        assert!(!Pending.can_transition_to(Completed));

        assert!(Approved.can_transition_to(Completed));
        assert!(Approved.can_transition_to(Rejected));
        assert!(!Approved.can_transition_to(Pending));

        // Terminal states allow nothing out.
        for to in RequestStatus::ALL {
            assert!(!Rejected.can_transition_to(to));
            assert!(!Completed.can_transition_to(to));
        }
    }

    #[test]
    fn test_display_round_trip() {
        for status in RequestStatus::ALL {
            let parsed: RequestStatus = status.to_string().parse().unwrap();
            assert_eq!(parsed, status);
        }
        assert!("archived".parse::<RequestStatus>().is_err());
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&RequestStatus::Completed).unwrap();
        assert_eq!(json, "\"completed\"");
        let parsed: RequestStatus = serde_json::from_str("\"pending\"").unwrap();
        assert_eq!(parsed, RequestStatus::Pending);
    }

    #[test]
    fn test_filter_matches() {
        assert!(StatusFilter::All.matches(RequestStatus::Pending));
        assert!(StatusFilter::Only(RequestStatus::Approved).matches(RequestStatus::Approved));
        assert!(!StatusFilter::Only(RequestStatus::Approved).matches(RequestStatus::Pending));
    }

    #[test]
    fn test_filter_from_str() {
        assert_eq!("all".parse::<StatusFilter>().unwrap(), StatusFilter::All);
        assert_eq!(
            "rejected".parse::<StatusFilter>().unwrap(),
            StatusFilter::Only(RequestStatus::Rejected)
        );
        assert!("everything".parse::<StatusFilter>().is_err());
    }
}
