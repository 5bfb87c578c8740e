//! Application status transition rules.

use crate::domain::entities::ApplicationStatus;

/// Which status changes a company may make on an application.
///
/// Statuses form an unordered set: under `Permissive` any status may follow
/// any other, so a `HIRED` application can go back to `PENDING`.
/// `TerminalLocked` freezes `HIRED` and `REJECTED` once reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusPolicy {
    #[default]
    Permissive,
    TerminalLocked,
}

/// A status change refused by the active policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Cannot change application status from {from} to {to}")]
pub struct TransitionError {
    pub from: ApplicationStatus,
    pub to: ApplicationStatus,
}

impl StatusPolicy {
    /// `recruitment.strict_status_transitions` selects `TerminalLocked`.
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            Self::TerminalLocked
        } else {
            Self::Permissive
        }
    }

    /// Check a single transition. Re-applying the current status always passes.
    pub fn check(
        &self,
        from: ApplicationStatus,
        to: ApplicationStatus,
    ) -> Result<(), TransitionError> {
        if from == to {
            return Ok(());
        }

        match self {
            Self::Permissive => Ok(()),
            Self::TerminalLocked if from.is_terminal() => Err(TransitionError { from, to }),
            Self::TerminalLocked => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;
    use crate::domain::entities::ApplicationStatus::*;

    // Permissive mirrors the historic behavior: nothing is blocked, including
    // reopening a hired candidate.
    #[test_case(Pending, Hired)]
    #[test_case(Hired, Pending)]
    #[test_case(Rejected, Interview)]
    #[test_case(InReview, Applied)]
    fn test_permissive_allows_everything(from: ApplicationStatus, to: ApplicationStatus) {
        assert!(StatusPolicy::Permissive.check(from, to).is_ok());
    }

    #[test_case(Hired, Pending)]
    #[test_case(Hired, Rejected)]
    #[test_case(Rejected, Interview)]
    fn test_terminal_locked_refuses_leaving_decision(
        from: ApplicationStatus,
        to: ApplicationStatus,
    ) {
        let err = StatusPolicy::TerminalLocked.check(from, to).unwrap_err();
        assert_eq!(err, TransitionError { from, to });
    }

    #[test_case(Pending, InReview)]
    #[test_case(Interview, Hired)]
    #[test_case(Hired, Hired)]
    #[test_case(Rejected, Rejected)]
    fn test_terminal_locked_allows(from: ApplicationStatus, to: ApplicationStatus) {
        assert!(StatusPolicy::TerminalLocked.check(from, to).is_ok());
    }

    #[test]
    fn test_from_strict() {
        assert_eq!(StatusPolicy::from_strict(false), StatusPolicy::Permissive);
        assert_eq!(StatusPolicy::from_strict(true), StatusPolicy::TerminalLocked);
        assert_eq!(StatusPolicy::default(), StatusPolicy::Permissive);
    }

    #[test]
    fn test_error_message() {
        let err = TransitionError {
            from: Hired,
            to: Pending,
        };
        assert_eq!(
            err.to_string(),
            "Cannot change application status from HIRED to PENDING"
        );
    }
}
