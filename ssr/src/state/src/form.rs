use consts::copy;
use utils::api::RequestError;

/// Where a form is in its submit cycle.
///
/// Holding the outcome inside the phase means a form can never show an error
/// and a result at the same time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
    Success(String),
    Error(String),
}

impl FormPhase {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error(msg) => Some(msg),
            _ => None,
        }
    }

    pub fn success_message(&self) -> Option<&str> {
        match self {
            Self::Success(msg) => Some(msg),
            _ => None,
        }
    }

    pub(crate) fn fail_validation(&mut self, err: &ValidationError) {
        *self = Self::Error(err.to_string());
    }

    pub(crate) fn fail_request(&mut self, err: &RequestError) {
        *self = Self::Error(format!("Error: {err}"));
    }
}

/// Input rejected before any request is made
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please select a file to upload")]
    NoFileSelected,
    #[error("Please select a valid MP4 file")]
    NotMp4,
    #[error("Please fill in both Video ID and Question fields")]
    EmptyFields,
    #[error("A submission is already in progress")]
    InFlight,
}

/// Label for a submit control given the form's phase
pub fn submit_label(phase: &FormPhase, idle: &'static str, busy: &'static str) -> &'static str {
    if phase.is_submitting() {
        busy
    } else {
        idle
    }
}

pub fn upload_label(phase: &FormPhase) -> &'static str {
    submit_label(phase, copy::UPLOAD_IDLE_LABEL, copy::UPLOAD_BUSY_LABEL)
}

pub fn ask_label(phase: &FormPhase) -> &'static str {
    submit_label(phase, copy::ASK_IDLE_LABEL, copy::ASK_BUSY_LABEL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_accessors_are_exclusive() {
        let ok = FormPhase::Success("ok".into());
        assert_eq!(ok.success_message(), Some("ok"));
        assert_eq!(ok.error_message(), None);

        let err = FormPhase::Error("boom".into());
        assert_eq!(err.error_message(), Some("boom"));
        assert_eq!(err.success_message(), None);

        assert!(FormPhase::Submitting.is_submitting());
        assert!(!FormPhase::Idle.is_submitting());
    }

    #[test]
    fn request_failures_are_prefixed() {
        let mut phase = FormPhase::Submitting;
        phase.fail_request(&RequestError::from_status(500, ""));
        assert_eq!(
            phase.error_message(),
            Some("Error: HTTP error! status: 500")
        );
    }

    #[test]
    fn busy_labels_follow_phase() {
        assert_eq!(upload_label(&FormPhase::Idle), "Upload Video");
        assert_eq!(upload_label(&FormPhase::Submitting), "Uploading...");
        assert_eq!(ask_label(&FormPhase::Error("x".into())), "Ask Question");
        assert_eq!(ask_label(&FormPhase::Submitting), "Thinking...");
    }
}
