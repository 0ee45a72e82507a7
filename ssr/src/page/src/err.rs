use component::{card::PageCard, nav_link::NavLink};
use leptos::prelude::*;
use leptos_meta::*;

#[component]
pub fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    if let Some(res) = use_context::<leptos_axum::ResponseOptions>() {
        res.set_status(http::StatusCode::NOT_FOUND);
    }

    view! {
        <Title text="Not Found" />
        <PageCard heading="Page not found">
            <p class="text-center">"There is nothing at this address."</p>
            <NavLink href="/">"Ask a question about a video"</NavLink>
        </PageCard>
    }
}
