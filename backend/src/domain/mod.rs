//! Domain entities and computation.
//!
//! Everything here is transport agnostic: the HTTP adapter under
//! `inbound::http` maps these types to and from the wire. Mutable state is
//! confined to [`Store`]; the catalogue and insights modules are static data.

pub mod catalogue;
pub mod error;
pub mod finance;
pub mod insights;
pub mod store;
pub mod user;

pub use self::error::Error;
pub use self::finance::{DashboardSummary, FinancialRecord};
pub use self::store::Store;
pub use self::user::User;
