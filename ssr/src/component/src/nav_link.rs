use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NavLink(#[prop(into)] href: String, children: Children) -> impl IntoView {
    view! {
        <div class="my-5 text-center">
            <A href=href attr:class="text-base text-blue-600 no-underline hover:underline">
                {children()}
            </A>
        </div>
    }
}
