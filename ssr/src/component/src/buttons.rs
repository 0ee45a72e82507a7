use leptos::prelude::*;

/// Full width submit control for a form, greyed out while `disabled`
#[component]
pub fn SubmitButton(
    #[prop(into)] disabled: Signal<bool>,
    #[prop(into)] label: Signal<&'static str>,
) -> impl IntoView {
    view! {
        <button
            type="submit"
            disabled=move || disabled.get()
            class="py-3 w-full text-base text-white bg-blue-600 rounded transition cursor-pointer hover:bg-blue-700 disabled:opacity-70 disabled:cursor-not-allowed"
        >
            {move || label.get()}
        </button>
    }
}
