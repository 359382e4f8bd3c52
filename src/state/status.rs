//! Submission status of one form

use crate::error::SubmitFailure;

/// Where a form is in its submit cycle
///
/// One instance per form, owned by that form's submission controller.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    /// Waiting for the sink to resolve; further submits are ignored
    Submitting,
    Success,
    Error(SubmitFailure),
}

impl SubmissionStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Submitting => "submitting",
            Self::Success => "success",
            Self::Error(_) => "error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SinkError;

    #[test]
    fn test_default_is_idle() {
        assert_eq!(SubmissionStatus::default(), SubmissionStatus::Idle);
    }

    #[test]
    fn test_only_submitting_blocks() {
        assert!(SubmissionStatus::Submitting.is_submitting());
        assert!(!SubmissionStatus::Idle.is_submitting());
        assert!(!SubmissionStatus::Success.is_submitting());
        assert!(!SubmissionStatus::Error(SubmitFailure::Sink(SinkError::Aborted)).is_submitting());
    }

    #[test]
    fn test_labels() {
        assert_eq!(
            SubmissionStatus::Error(SubmitFailure::Validation).label(),
            "error"
        );
        assert_eq!(SubmissionStatus::Submitting.label(), "submitting");
    }
}
