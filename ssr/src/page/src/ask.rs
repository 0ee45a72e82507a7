use component::{
    answer_panel::AnswerPanel, buttons::SubmitButton, card::PageCard, nav_link::NavLink,
    notice::ErrorNotice,
};
use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local};
use leptos_meta::*;
use state::{api_config::use_api_config, form::ask_label, question_state::QuestionState};
use utils::api::ask_question;

const INPUT_CLASS: &str = "p-2.5 w-full text-base rounded border border-gray-300";

#[component]
pub fn QuestionPage() -> impl IntoView {
    let state = RwSignal::new(QuestionState::default());
    let api = use_api_config();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let request = match state.write().begin_submit() {
            Ok(request) => request,
            Err(e) => {
                log::debug!("question not sent: {e}");
                return;
            }
        };

        let api = api.clone();
        spawn_local(async move {
            log::info!("asking about video {}", request.video_id);
            let outcome = ask_question(&api, &request).await;
            if let Err(e) = &outcome {
                log::warn!("question about {} failed: {e}", request.video_id);
            }
            state.try_update(|s| s.finish_submit(outcome));
        });
    };

    let error = Signal::derive(move || {
        state.with(|s| s.phase().error_message().map(str::to_string))
    });
    let answer = Signal::derive(move || state.with(|s| s.answer().map(str::to_string)));
    let disabled = Signal::derive(move || state.with(|s| !s.can_submit()));
    let label = Signal::derive(move || state.with(|s| ask_label(s.phase())));

    view! {
        <Title text="Video QA Chatbot" />
        <PageCard heading="Video QA Chatbot">
            <NavLink href="/upload">"Upload New Video"</NavLink>
            <form on:submit=on_submit class="mb-5">
                <div class="mb-4">
                    <label for="videoId" class="block mb-1">
                        "Video ID:"
                    </label>
                    <input
                        id="videoId"
                        type="text"
                        class=INPUT_CLASS
                        placeholder="Enter video ID"
                        prop:value=move || state.with(|s| s.video_id().to_string())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.set_video_id(value));
                        }
                    />
                </div>
                <div class="mb-4">
                    <label for="question" class="block mb-1">
                        "Question:"
                    </label>
                    <textarea
                        id="question"
                        rows=4
                        class=format!("{INPUT_CLASS} resize-y")
                        placeholder="Ask a question about the video"
                        prop:value=move || state.with(|s| s.question().to_string())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.set_question(value));
                        }
                    ></textarea>
                </div>
                <SubmitButton disabled=disabled label=label />
            </form>
            <ErrorNotice message=error />
            <AnswerPanel answer=answer />
        </PageCard>
    }
}
