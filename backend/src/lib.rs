//! FinPercent backend library modules.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod server;

pub use middleware::RequestId;
