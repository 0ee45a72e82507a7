use consts::{MP4_EXTENSION, MP4_MIME};
use utils::{
    api::{RequestError, UploadResponse},
    web::FileMeta,
};

use crate::form::{FormPhase, ValidationError};

/// View model behind the video upload form
#[derive(Clone, Debug)]
pub struct UploadState<F> {
    selected: Option<F>,
    phase: FormPhase,
    video_id: Option<String>,
}

impl<F> Default for UploadState<F> {
    fn default() -> Self {
        Self {
            selected: None,
            phase: FormPhase::Idle,
            video_id: None,
        }
    }
}

impl<F: FileMeta + Clone> UploadState<F> {
    pub fn phase(&self) -> &FormPhase {
        &self.phase
    }

    pub fn selected_file(&self) -> Option<&F> {
        self.selected.as_ref()
    }

    /// Video id shown after the last successful upload
    pub fn video_id(&self) -> Option<&str> {
        self.video_id.as_deref()
    }

    pub fn can_submit(&self) -> bool {
        self.selected.is_some() && !self.phase.is_submitting()
    }

    /// Handles a change of the file input. Anything that is not an MP4 drops
    /// the current selection.
    pub fn select_file(&mut self, file: Option<F>) -> Result<(), ValidationError> {
        if self.phase.is_submitting() {
            return Err(ValidationError::InFlight);
        }

        match file {
            Some(file) if is_mp4(&file) => {
                self.selected = Some(file);
                if self.phase.error_message().is_some() {
                    self.phase = FormPhase::Idle;
                }
                Ok(())
            }
            _ => {
                self.selected = None;
                let err = ValidationError::NotMp4;
                self.phase.fail_validation(&err);
                Err(err)
            }
        }
    }

    /// Moves to `Submitting` and hands back the file to send
    pub fn begin_submit(&mut self) -> Result<F, ValidationError> {
        if self.phase.is_submitting() {
            return Err(ValidationError::InFlight);
        }

        let Some(file) = self.selected.clone() else {
            let err = ValidationError::NoFileSelected;
            self.phase.fail_validation(&err);
            return Err(err);
        };

        self.phase = FormPhase::Submitting;
        self.video_id = None;
        Ok(file)
    }

    pub fn finish_submit(&mut self, outcome: Result<UploadResponse, RequestError>) {
        if !self.phase.is_submitting() {
            log::warn!("upload finished without a submission in flight, ignoring");
            return;
        }

        match outcome {
            Ok(res) => {
                self.video_id = self
                    .selected
                    .take()
                    .map(|file| derive_video_id(file.file_name()));
                self.phase = FormPhase::Success(res.message_text().to_string());
            }
            // the file stays selected so the user can try again
            Err(e) => self.phase.fail_request(&e),
        }
    }
}

/// Advisory check, the server has the final say
pub fn is_mp4(file: &impl FileMeta) -> bool {
    let mime = file.mime_type().trim();
    if mime.eq_ignore_ascii_case(MP4_MIME) {
        return true;
    }
    // some platforms report no type at all for local files
    let untyped = mime.is_empty() || mime.eq_ignore_ascii_case("application/octet-stream");
    untyped && has_mp4_extension(file.file_name())
}

fn has_mp4_extension(name: &str) -> bool {
    name.len() > MP4_EXTENSION.len()
        && name
            .get(name.len() - MP4_EXTENSION.len()..)
            .is_some_and(|ext| ext.eq_ignore_ascii_case(MP4_EXTENSION))
}

/// Display id for an uploaded file: the name without its `.mp4` extension.
///
/// Cosmetic only, nothing guarantees the server stored it under this name.
pub fn derive_video_id(file_name: &str) -> String {
    if has_mp4_extension(file_name) {
        file_name[..file_name.len() - MP4_EXTENSION.len()].to_string()
    } else {
        file_name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct TestFile {
        name: &'static str,
        mime: &'static str,
    }

    impl FileMeta for TestFile {
        fn file_name(&self) -> &str {
            self.name
        }

        fn mime_type(&self) -> &str {
            self.mime
        }
    }

    const CLIP: TestFile = TestFile {
        name: "cat.mp4",
        mime: "video/mp4",
    };

    fn ok(message: &str) -> Result<UploadResponse, RequestError> {
        Ok(UploadResponse {
            message: Some(message.to_string()),
            filename: None,
        })
    }

    #[test]
    fn starts_idle_and_empty() {
        let state = UploadState::<TestFile>::default();
        assert_eq!(state.phase(), &FormPhase::Idle);
        assert!(state.selected_file().is_none());
        assert!(!state.can_submit());
    }

    #[test]
    fn non_mp4_files_are_rejected() {
        let rejected = [
            TestFile { name: "cat.mov", mime: "video/quicktime" },
            TestFile { name: "cat.webm", mime: "video/webm" },
            TestFile { name: "notes.txt", mime: "text/plain" },
            TestFile { name: "cat.mp4.exe", mime: "" },
            TestFile { name: ".mp4", mime: "" },
        ];
        for file in rejected {
            let mut state = UploadState::default();
            assert_eq!(
                state.select_file(Some(file.clone())),
                Err(ValidationError::NotMp4),
                "{file:?}"
            );
            assert!(state.selected_file().is_none());
            assert_eq!(
                state.phase().error_message(),
                Some("Please select a valid MP4 file")
            );
            assert_eq!(
                state.begin_submit(),
                Err(ValidationError::NoFileSelected)
            );
        }
    }

    #[test]
    fn invalid_pick_replaces_a_valid_one() {
        let mut state = UploadState::default();
        state.select_file(Some(CLIP)).unwrap();
        assert!(state
            .select_file(Some(TestFile { name: "a.png", mime: "image/png" }))
            .is_err());
        assert!(state.selected_file().is_none());
        assert!(!state.can_submit());
    }

    #[test]
    fn cancelled_pick_is_an_error() {
        let mut state = UploadState::<TestFile>::default();
        assert_eq!(state.select_file(None), Err(ValidationError::NotMp4));
    }

    #[test]
    fn mp4_detection_by_mime_or_extension() {
        assert!(is_mp4(&CLIP));
        assert!(is_mp4(&TestFile { name: "CLIP.MP4", mime: "" }));
        assert!(is_mp4(&TestFile { name: "clip.mp4", mime: "application/octet-stream" }));
        assert!(is_mp4(&TestFile { name: "renamed", mime: "VIDEO/MP4" }));
        assert!(!is_mp4(&TestFile { name: "clip.mp4", mime: "video/quicktime" }));
    }

    #[test]
    fn valid_pick_clears_previous_error() {
        let mut state = UploadState::default();
        let _ = state.begin_submit();
        assert!(state.phase().error_message().is_some());

        state.select_file(Some(CLIP)).unwrap();
        assert_eq!(state.phase(), &FormPhase::Idle);
        assert!(state.can_submit());
    }

    #[test]
    fn submit_without_file_never_starts_a_request() {
        let mut state = UploadState::<TestFile>::default();
        assert_eq!(state.begin_submit(), Err(ValidationError::NoFileSelected));
        assert_eq!(
            state.phase().error_message(),
            Some("Please select a file to upload")
        );
        assert!(!state.phase().is_submitting());
    }

    #[test]
    fn successful_upload_shows_message_and_clears_file() {
        let mut state = UploadState::default();
        state.select_file(Some(CLIP)).unwrap();

        let sent = state.begin_submit().unwrap();
        assert_eq!(sent, CLIP);
        assert!(state.phase().is_submitting());
        assert!(!state.can_submit());

        state.finish_submit(ok("ok"));
        assert_eq!(state.phase().success_message(), Some("ok"));
        assert_eq!(state.phase().error_message(), None);
        assert!(state.selected_file().is_none());
        assert_eq!(state.video_id(), Some("cat"));
    }

    #[test]
    fn missing_message_uses_fallback() {
        let mut state = UploadState::default();
        state.select_file(Some(CLIP)).unwrap();
        state.begin_submit().unwrap();
        state.finish_submit(Ok(UploadResponse::default()));
        assert_eq!(
            state.phase().success_message(),
            Some("Video uploaded successfully!")
        );
    }

    #[test]
    fn server_error_keeps_file_for_manual_retry() {
        let mut state = UploadState::default();
        state.select_file(Some(CLIP)).unwrap();
        state.begin_submit().unwrap();

        state.finish_submit(Err(RequestError::from_status(500, "")));
        assert_eq!(
            state.phase().error_message(),
            Some("Error: HTTP error! status: 500")
        );
        assert_eq!(state.phase().success_message(), None);
        assert_eq!(state.selected_file(), Some(&CLIP));
        assert!(state.can_submit());

        // retry goes back through Submitting
        state.begin_submit().unwrap();
        assert!(state.phase().is_submitting());
        state.finish_submit(ok("second time lucky"));
        assert_eq!(state.phase().success_message(), Some("second time lucky"));
    }

    #[test]
    fn error_detail_from_body_is_shown() {
        let mut state = UploadState::default();
        state.select_file(Some(CLIP)).unwrap();
        state.begin_submit().unwrap();
        state.finish_submit(Err(RequestError::from_status(
            400,
            r#"{"detail":"Only MP4 files are allowed."}"#,
        )));
        assert_eq!(
            state.phase().error_message(),
            Some("Error: Only MP4 files are allowed.")
        );
    }

    #[test]
    fn second_submit_while_in_flight_is_ignored() {
        let mut state = UploadState::default();
        state.select_file(Some(CLIP)).unwrap();
        state.begin_submit().unwrap();

        assert_eq!(state.begin_submit(), Err(ValidationError::InFlight));
        assert_eq!(state.select_file(None), Err(ValidationError::InFlight));
        assert!(state.phase().is_submitting());
        assert_eq!(state.selected_file(), Some(&CLIP));
    }

    #[test]
    fn stray_completion_is_ignored() {
        let mut state = UploadState::<TestFile>::default();
        state.finish_submit(ok("late"));
        assert_eq!(state.phase(), &FormPhase::Idle);
    }

    #[test]
    fn new_success_replaces_old_video_id() {
        let mut state = UploadState::default();
        state.select_file(Some(CLIP)).unwrap();
        state.begin_submit().unwrap();
        state.finish_submit(ok("ok"));

        state
            .select_file(Some(TestFile { name: "dog.mp4", mime: "video/mp4" }))
            .unwrap();
        // success stays visible while picking the next file
        assert_eq!(state.phase().success_message(), Some("ok"));
        state.begin_submit().unwrap();
        assert_eq!(state.video_id(), None);
        state.finish_submit(ok("ok"));
        assert_eq!(state.video_id(), Some("dog"));
    }

    #[test]
    fn video_id_strips_only_trailing_extension() {
        assert_eq!(derive_video_id("lecture.mp4"), "lecture");
        assert_eq!(derive_video_id("Lecture.MP4"), "Lecture");
        assert_eq!(derive_video_id("my.mp4.backup.mp4"), "my.mp4.backup");
        assert_eq!(derive_video_id("no_extension"), "no_extension");
    }
}
