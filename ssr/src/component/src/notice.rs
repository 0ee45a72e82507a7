use leptos::prelude::*;

#[component]
pub fn ErrorNotice(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    move || {
        message.get().map(|msg| {
            view! {
                <div
                    role="alert"
                    class="p-3 mb-5 text-red-700 bg-red-50 rounded border border-red-600"
                >
                    {msg}
                </div>
            }
        })
    }
}

/// Green banner with an optional second line underneath the message
#[component]
pub fn SuccessNotice(
    #[prop(into)] message: Signal<Option<String>>,
    #[prop(into)] detail: Signal<Option<String>>,
) -> impl IntoView {
    move || {
        message.get().map(|msg| {
            view! {
                <div
                    role="status"
                    class="p-3 mb-5 text-green-700 bg-green-50 rounded border border-green-600"
                >
                    <p>{msg}</p>
                    {move || detail.get().map(|detail| view! { <p class="mt-1 text-sm">{detail}</p> })}
                </div>
            }
        })
    }
}
