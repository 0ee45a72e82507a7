pub mod api_config;
pub mod form;
pub mod question_state;
#[cfg(feature = "ssr")]
pub mod server;
pub mod upload_state;
