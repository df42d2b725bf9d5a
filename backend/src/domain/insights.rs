//! Theme, stats, and explore payloads.
//!
//! None of this is backed by mutable state: the theme POST echoes its input,
//! the stats series are deterministic mock data per range, and the explore
//! sections are fixed lists.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// UI colour scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light scheme, the default.
    #[default]
    Light,
    /// Dark scheme.
    Dark,
}

/// Theme preference payload exchanged with the frontend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Theme {
    /// Selected colour scheme.
    pub mode: ThemeMode,
}

/// Accepted windows for the stats endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatsRange {
    /// Last seven days.
    Week,
    /// Last thirty days.
    Month,
    /// Last ninety days.
    Quarter,
    /// Last year.
    Year,
}

/// Error returned when parsing a stats range from its path token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseStatsRangeError;

impl fmt::Display for StatsRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Week => f.write_str("7d"),
            Self::Month => f.write_str("30d"),
            Self::Quarter => f.write_str("90d"),
            Self::Year => f.write_str("1y"),
        }
    }
}

impl fmt::Display for ParseStatsRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid stats range")
    }
}

impl std::error::Error for ParseStatsRangeError {}

impl FromStr for StatsRange {
    type Err = ParseStatsRangeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "7d" => Ok(Self::Week),
            "30d" => Ok(Self::Month),
            "90d" => Ok(Self::Quarter),
            "1y" => Ok(Self::Year),
            _ => Err(ParseStatsRangeError),
        }
    }
}

/// One bucket in a mock stats series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct StatsPoint {
    /// Bucket label.
    pub label: &'static str,
    /// Mock income for the bucket.
    pub income: f64,
    /// Mock expenses for the bucket.
    pub expenses: f64,
}

/// Mock stats payload for one range.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct StatsOverview {
    /// The requested range token.
    pub range: String,
    /// Deterministic series for the range.
    pub points: Vec<StatsPoint>,
}

const WEEK_POINTS: &[StatsPoint] = &[
    StatsPoint { label: "mon", income: 180.0, expenses: 95.5 },
    StatsPoint { label: "tue", income: 180.0, expenses: 120.0 },
    StatsPoint { label: "wed", income: 180.0, expenses: 60.25 },
    StatsPoint { label: "thu", income: 180.0, expenses: 140.0 },
    StatsPoint { label: "fri", income: 420.0, expenses: 210.75 },
    StatsPoint { label: "sat", income: 0.0, expenses: 310.0 },
    StatsPoint { label: "sun", income: 0.0, expenses: 85.0 },
];

const MONTH_POINTS: &[StatsPoint] = &[
    StatsPoint { label: "week 1", income: 1250.0, expenses: 980.5 },
    StatsPoint { label: "week 2", income: 1250.0, expenses: 1105.0 },
    StatsPoint { label: "week 3", income: 1250.0, expenses: 870.25 },
    StatsPoint { label: "week 4", income: 1250.0, expenses: 1240.0 },
];

const QUARTER_POINTS: &[StatsPoint] = &[
    StatsPoint { label: "month 1", income: 5000.0, expenses: 4195.75 },
    StatsPoint { label: "month 2", income: 5000.0, expenses: 4410.0 },
    StatsPoint { label: "month 3", income: 5200.0, expenses: 3980.5 },
];

const YEAR_POINTS: &[StatsPoint] = &[
    StatsPoint { label: "q1", income: 15200.0, expenses: 12586.25 },
    StatsPoint { label: "q2", income: 15000.0, expenses: 13120.0 },
    StatsPoint { label: "q3", income: 15600.0, expenses: 12875.5 },
    StatsPoint { label: "q4", income: 16100.0, expenses: 14230.0 },
];

/// Build the mock stats payload for a range.
pub fn stats_overview(range: StatsRange) -> StatsOverview {
    let points = match range {
        StatsRange::Week => WEEK_POINTS,
        StatsRange::Month => MONTH_POINTS,
        StatsRange::Quarter => QUARTER_POINTS,
        StatsRange::Year => YEAR_POINTS,
    };
    StatsOverview {
        range: range.to_string(),
        points: points.to_vec(),
    }
}

/// Sections of the explore surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExploreSection {
    /// Product features.
    Features,
    /// Budgeting tools.
    Tools,
    /// Editorial insights.
    Insights,
}

/// Error returned when parsing an explore section from its path token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseExploreSectionError;

impl fmt::Display for ExploreSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Features => f.write_str("features"),
            Self::Tools => f.write_str("tools"),
            Self::Insights => f.write_str("insights"),
        }
    }
}

impl fmt::Display for ParseExploreSectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid explore section")
    }
}

impl std::error::Error for ParseExploreSectionError {}

impl FromStr for ExploreSection {
    type Err = ParseExploreSectionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "features" => Ok(Self::Features),
            "tools" => Ok(Self::Tools),
            "insights" => Ok(Self::Insights),
            _ => Err(ParseExploreSectionError),
        }
    }
}

/// A card shown in an explore section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct ExploreEntry {
    /// Stable identifier.
    pub id: &'static str,
    /// Card title.
    pub title: &'static str,
    /// Card body text.
    pub description: &'static str,
}

const FEATURE_ENTRIES: &[ExploreEntry] = &[
    ExploreEntry {
        id: "investment-pooling",
        title: "Investment Pooling",
        description: "Pool investments with other members to reduce fees",
    },
    ExploreEntry {
        id: "automated-banking",
        title: "Automated Banking",
        description: "Route income to budgets automatically on payday",
    },
    ExploreEntry {
        id: "debt-repayment",
        title: "Debt Repayment",
        description: "Snowball and avalanche repayment planners",
    },
];

const TOOL_ENTRIES: &[ExploreEntry] = &[
    ExploreEntry {
        id: "budget-calculator",
        title: "Budget Calculator",
        description: "Split income across needs, wants, and savings",
    },
    ExploreEntry {
        id: "net-worth-tracker",
        title: "Net Worth Tracker",
        description: "Track assets and liabilities over time",
    },
    ExploreEntry {
        id: "savings-goals",
        title: "Savings Goals",
        description: "Set targets and watch progress per goal",
    },
];

const INSIGHT_ENTRIES: &[ExploreEntry] = &[
    ExploreEntry {
        id: "spending-trends",
        title: "Spending Trends",
        description: "Month-over-month category movement",
    },
    ExploreEntry {
        id: "subscription-audit",
        title: "Subscription Audit",
        description: "Recurring charges worth a second look",
    },
    ExploreEntry {
        id: "rate-watch",
        title: "Rate Watch",
        description: "Savings and mortgage rate highlights",
    },
];

/// Fixed entries for an explore section.
pub fn explore_entries(section: ExploreSection) -> &'static [ExploreEntry] {
    match section {
        ExploreSection::Features => FEATURE_ENTRIES,
        ExploreSection::Tools => TOOL_ENTRIES,
        ExploreSection::Insights => INSIGHT_ENTRIES,
    }
}
