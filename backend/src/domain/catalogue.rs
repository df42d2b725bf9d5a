//! Static reference catalogues: budgeting methods, product features, and the
//! presentation stubs attached to dashboard responses.
//!
//! All of this data is fixed at compile time; the read endpoints over it are
//! idempotent and never touch mutable state.

use serde::Serialize;
use utoipa::ToSchema;

/// A named budgeting methodology shown as reference content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct Method {
    /// Stable identifier used in URLs.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// One-line description.
    pub description: &'static str,
}

/// The fixed method set.
pub const METHODS: [Method; 3] = [
    Method {
        id: "nws",
        name: "NWS",
        description: "Needs, Wants, Savings method",
    },
    Method {
        id: "kakeibo",
        name: "Kakeibo",
        description: "Japanese budgeting method",
    },
    Method {
        id: "stop",
        name: "STOP",
        description: "Savings, Taxes, Operations, Profit method",
    },
];

/// Look up a method by id.
pub fn find_method(id: &str) -> Option<Method> {
    METHODS.iter().copied().find(|method| method.id == id)
}

/// A product capability shown with a status label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct Feature {
    /// Stable identifier used in URLs.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Availability label (`active`, `beta`, `available`).
    pub status: &'static str,
}

/// The fixed feature set.
pub const FEATURES: [Feature; 3] = [
    Feature {
        id: "investment-pooling",
        name: "Investment Pooling",
        status: "active",
    },
    Feature {
        id: "automated-banking",
        name: "Automated Banking",
        status: "beta",
    },
    Feature {
        id: "debt-repayment",
        name: "Debt Repayment",
        status: "available",
    },
];

/// Look up a feature by id.
pub fn find_feature(id: &str) -> Option<Feature> {
    FEATURES.iter().copied().find(|feature| feature.id == id)
}

/// Hardcoded company rating block shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct CompanyStatus {
    /// Rating label.
    pub rating: &'static str,
    /// Score out of 100.
    pub performance_score: u32,
    /// Market position label.
    pub market_position: &'static str,
}

/// Presentation stubs attached to every dashboard response.
///
/// These are configuration, not computed values; handlers receive them via
/// the shared state so the wiring can swap them without touching logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresentationStubs {
    /// Badge label for the user header.
    pub badge_status: &'static str,
    /// Company rating block.
    pub company_status: CompanyStatus,
}

impl Default for PresentationStubs {
    fn default() -> Self {
        Self {
            badge_status: "gold",
            company_status: CompanyStatus {
                rating: "Gold",
                performance_score: 92,
                market_position: "Top 15%",
            },
        }
    }
}
