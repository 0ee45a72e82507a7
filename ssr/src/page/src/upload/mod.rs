mod video_upload;

use component::{
    buttons::SubmitButton,
    card::PageCard,
    nav_link::NavLink,
    notice::{ErrorNotice, SuccessNotice},
};
use leptos::{ev::SubmitEvent, html::Input, prelude::*, task::spawn_local};
use leptos_meta::*;
use state::{api_config::use_api_config, form::upload_label, upload_state::UploadState};
use utils::{
    api::upload_video,
    web::{FileMeta, VideoFile},
};
use video_upload::VideoPicker;

#[component]
pub fn UploadPage() -> impl IntoView {
    let state = RwSignal::new_local(UploadState::<VideoFile>::default());
    let file_ref = NodeRef::<Input>::new();
    let api = use_api_config();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let video = match state.write().begin_submit() {
            Ok(video) => video,
            Err(e) => {
                log::debug!("upload not started: {e}");
                return;
            }
        };

        let api = api.clone();
        spawn_local(async move {
            log::info!("uploading {}", video.file_name());
            let outcome = upload_video(&api, &video).await;
            match &outcome {
                Ok(_) => {
                    log::info!("uploaded {}", video.file_name());
                    if let Some(input) = file_ref.try_get_untracked().flatten() {
                        input.set_value("");
                    }
                }
                Err(e) => log::warn!("upload of {} failed: {e}", video.file_name()),
            }
            // the page may be gone by now, then the outcome is dropped
            state.try_update(|s| s.finish_submit(outcome));
        });
    };

    let error = Signal::derive(move || {
        state.with(|s| s.phase().error_message().map(str::to_string))
    });
    let success = Signal::derive(move || {
        state.with(|s| s.phase().success_message().map(str::to_string))
    });
    let video_id = Signal::derive(move || {
        state.with(|s| s.video_id().map(|id| format!("Video ID: {id}")))
    });
    let disabled = Signal::derive(move || state.with(|s| !s.can_submit()));
    let label = Signal::derive(move || state.with(|s| upload_label(s.phase())));

    view! {
        <Title text="Video Upload" />
        <PageCard heading="Video Upload">
            <form on:submit=on_submit class="mb-5">
                <VideoPicker state=state file_ref=file_ref />
                <SubmitButton disabled=disabled label=label />
            </form>
            <ErrorNotice message=error />
            <SuccessNotice message=success detail=video_id />
            <NavLink href="/">"← Back to Questions"</NavLink>
        </PageCard>
    }
}
