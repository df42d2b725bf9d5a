//! HTTP inbound adapter exposing the REST endpoints.

pub mod catalogue;
pub mod error;
pub mod finance;
pub mod health;
pub mod insights;
pub mod state;
pub mod users;

pub use error::ApiResult;
