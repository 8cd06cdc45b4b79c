//! HTTP inbound adapter exposing the `/kanbans` REST endpoints.

pub mod error;
pub mod kanbans;
pub mod schemas;
pub mod state;

pub use error::ApiResult;
