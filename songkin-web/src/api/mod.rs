//! HTTP API handlers for songkin-web

pub mod buildinfo;
pub mod health;
pub mod recommend;
pub mod songs;
pub mod ui;

pub use buildinfo::get_build_info;
pub use health::health_routes;
pub use recommend::get_recommendations;
pub use songs::list_songs;
pub use ui::{serve_app_js, serve_index};
