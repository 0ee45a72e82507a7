use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};
use page::{ask::QuestionPage, err::NotFound, upload::UploadPage};
use state::api_config::provide_api_config;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body class="bg-gray-100">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_api_config();

    view! {
        <Stylesheet id="leptos" href="/pkg/video-qa-web.css" />
        <Router>
            <div class="px-4 min-h-screen font-sans">
                <Routes fallback=NotFound>
                    <Route path=path!("/") view=QuestionPage />
                    <Route path=path!("/upload") view=UploadPage />
                </Routes>
            </div>
        </Router>
    }
}
