use utils::api::{AskRequest, AskResponse, RequestError};

use crate::form::{FormPhase, ValidationError};

/// View model behind the question form. A successful phase holds the answer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuestionState {
    video_id: String,
    question: String,
    phase: FormPhase,
}

impl QuestionState {
    pub fn phase(&self) -> &FormPhase {
        &self.phase
    }

    pub fn video_id(&self) -> &str {
        &self.video_id
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> Option<&str> {
        self.phase.success_message()
    }

    pub fn can_submit(&self) -> bool {
        !self.phase.is_submitting()
    }

    // edits never touch the phase, an in flight request is left alone
    pub fn set_video_id(&mut self, video_id: impl Into<String>) {
        self.video_id = video_id.into();
    }

    pub fn set_question(&mut self, question: impl Into<String>) {
        self.question = question.into();
    }

    /// Validates the fields and moves to `Submitting`, returning the trimmed request
    pub fn begin_submit(&mut self) -> Result<AskRequest, ValidationError> {
        if self.phase.is_submitting() {
            return Err(ValidationError::InFlight);
        }

        let video_id = self.video_id.trim();
        let question = self.question.trim();
        if video_id.is_empty() || question.is_empty() {
            let err = ValidationError::EmptyFields;
            self.phase.fail_validation(&err);
            return Err(err);
        }

        let request = AskRequest {
            video_id: video_id.to_string(),
            question: question.to_string(),
        };
        self.phase = FormPhase::Submitting;
        Ok(request)
    }

    pub fn finish_submit(&mut self, outcome: Result<AskResponse, RequestError>) {
        if !self.phase.is_submitting() {
            log::warn!("question answered without a submission in flight, ignoring");
            return;
        }

        match outcome {
            Ok(res) => self.phase = FormPhase::Success(res.answer_text().to_string()),
            Err(e) => self.phase.fail_request(&e),
        }
    }
}
