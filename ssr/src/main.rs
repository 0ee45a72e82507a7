#![recursion_limit = "256"]
use axum::{
    body::Body as AxumBody,
    extract::State,
    http::Request,
    response::{IntoResponse, Response},
};
use axum::{routing::get, Router};
use sentry_tower::{NewSentryLayer, SentryHttpLayer};
use state::server::AppState;
use tower::ServiceBuilder;
use tracing::instrument;
use video_qa_web::fallback::file_and_error_handler;

use http::{header, HeaderName, Method};
use leptos::prelude::*;
use leptos_axum::handle_server_fns_with_context;
use leptos_axum::{generate_route_list, LeptosRoutes};
use tower_http::cors::{Any, CorsLayer};
use video_qa_web::app::shell;
use video_qa_web::{
    app::App,
    init::{init_sentry, init_tracing, AppStateBuilder},
};

#[instrument(skip(app_state))]
pub async fn server_fn_handler(
    State(app_state): State<AppState>,
    request: Request<AxumBody>,
) -> impl IntoResponse {
    handle_server_fns_with_context(
        move || {
            provide_context(app_state.api.clone());
        },
        request,
    )
    .await
}

#[instrument(skip(state))]
pub async fn leptos_routes_handler(state: State<AppState>, req: Request<AxumBody>) -> Response {
    let State(app_state) = state.clone();
    let handler = leptos_axum::render_route_with_context(
        app_state.routes.clone(),
        move || {
            provide_context(app_state.api.clone());
        },
        move || shell(app_state.leptos_options.clone()),
    );
    handler(state, req).await.into_response()
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("stopping...");
}

async fn main_impl() -> anyhow::Result<()> {
    // get_configuration(None) reads cargo-leptos's LEPTOS_* env values
    let conf = get_configuration(None)?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(App);

    let res = AppStateBuilder::new(leptos_options, routes.clone()).build();
    tracing::info!(
        upload = %res.app_state.api.upload_url()?,
        ask = %res.app_state.api.ask_url()?,
        "video qa endpoints"
    );

    let sentry_tower_layer = ServiceBuilder::new()
        .layer(NewSentryLayer::new_from_top())
        .layer(SentryHttpLayer::with_transaction());

    let app = Router::new()
        .route(
            "/api/{*fn_name}",
            get(server_fn_handler).post(server_fn_handler),
        )
        .layer(
            CorsLayer::new()
                .allow_headers([
                    header::CONTENT_TYPE,
                    header::ACCEPT,
                    HeaderName::from_static("sentry-trace"),
                    HeaderName::from_static("baggage"),
                ])
                .allow_methods([Method::POST, Method::GET, Method::OPTIONS])
                .allow_origin(Any),
        )
        .leptos_routes_with_handler(routes, get(leptos_routes_handler))
        .fallback(file_and_error_handler)
        .layer(sentry_tower_layer)
        .with_state(res.app_state);

    tracing::info!("listening on http://{}", &addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<std::net::SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

fn main() {
    dotenv::dotenv().ok();

    let _guard = init_sentry();
    if let Err(e) = init_tracing() {
        eprintln!("Failed to initialize tracing: {e}");
    }

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Failed to start tokio runtime: {e}");
            std::process::exit(1);
        }
    };

    runtime.block_on(async {
        if let Err(e) = main_impl().await {
            tracing::error!("server error: {e:#}");
            eprintln!("Server error: {e:#}");
            std::process::exit(1);
        }
    });
}
