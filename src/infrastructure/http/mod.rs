//! HTTP Layer - RESTful API
//!
//! 本家 ENGINE 互換のエンドポイントを提供する

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use routes::create_routes;
pub use server::HttpServer;
pub use state::AppState;
