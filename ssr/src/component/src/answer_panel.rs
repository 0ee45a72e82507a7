use leptos::prelude::*;

#[component]
pub fn AnswerPanel(#[prop(into)] answer: Signal<Option<String>>) -> impl IntoView {
    move || {
        answer.get().map(|answer| {
            view! {
                <section class="p-4 bg-gray-50 rounded border-2 border-blue-600">
                    <h3 class="mb-2 text-lg font-semibold">"Answer:"</h3>
                    <p class="leading-normal whitespace-pre-wrap">{answer}</p>
                </section>
            }
        })
    }
}
