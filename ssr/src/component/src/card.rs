use leptos::prelude::*;

/// Narrow centered column every page renders into
#[component]
pub fn PageCard(#[prop(into)] heading: String, children: Children) -> impl IntoView {
    view! {
        <main class="p-5 my-12 mx-auto max-w-[600px]">
            <h1 class="mb-8 text-3xl font-semibold text-center">{heading}</h1>
            {children()}
        </main>
    }
}
