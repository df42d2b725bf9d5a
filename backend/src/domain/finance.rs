//! Financial records and dashboard aggregation.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A user's self-reported financial figures.
///
/// `user_id` is an opaque reference; the service does not check that it names
/// an existing user. Negative figures are accepted as submitted — the
/// original contract leaves them unchecked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialRecord {
    /// Server-generated record identifier.
    pub id: String,
    /// Owning user id; unvalidated foreign reference.
    pub user_id: String,
    /// Reported income for the period.
    pub income: f64,
    /// Expense figures keyed by category.
    pub expenses: BTreeMap<String, f64>,
    /// Reported savings.
    pub savings: f64,
    /// Investment figures keyed by category.
    pub investments: BTreeMap<String, f64>,
    /// Submission instant.
    pub created_at: DateTime<Utc>,
}

impl FinancialRecord {
    /// Build a record with a fresh id and timestamp.
    pub fn new(
        user_id: impl Into<String>,
        income: f64,
        expenses: BTreeMap<String, f64>,
        savings: f64,
        investments: BTreeMap<String, f64>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.into(),
            income,
            expenses,
            savings,
            investments,
            created_at: Utc::now(),
        }
    }
}

/// Aggregates derived from a [`FinancialRecord`].
///
/// The zero value doubles as the dashboard summary for users who have not
/// submitted any figures yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, ToSchema)]
pub struct DashboardSummary {
    /// Reported income, echoed for context.
    pub income: f64,
    /// Sum over all expense categories.
    pub total_expenses: f64,
    /// Sum over all investment categories.
    pub total_investments: f64,
    /// Reported savings, echoed for context.
    pub savings: f64,
    /// `income - total_expenses + savings + total_investments`.
    pub net_worth: f64,
    /// Savings as a percentage of income; 0 when income is 0.
    pub savings_rate: f64,
    /// Investments as a percentage of income; 0 when income is 0.
    pub investment_rate: f64,
}

impl DashboardSummary {
    /// Aggregate a financial record.
    ///
    /// Rates are guarded against division by zero: a zero income yields zero
    /// rates rather than NaN or infinity.
    pub fn from_record(record: &FinancialRecord) -> Self {
        let total_expenses: f64 = record.expenses.values().sum();
        let total_investments: f64 = record.investments.values().sum();
        let net_worth = record.income - total_expenses + record.savings + total_investments;
        let (savings_rate, investment_rate) = if record.income == 0.0 {
            (0.0, 0.0)
        } else {
            (
                record.savings / record.income * 100.0,
                total_investments / record.income * 100.0,
            )
        };
        Self {
            income: record.income,
            total_expenses,
            total_investments,
            savings: record.savings,
            net_worth,
            savings_rate,
            investment_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn record(
        income: f64,
        expenses: &[(&str, f64)],
        savings: f64,
        investments: &[(&str, f64)],
    ) -> FinancialRecord {
        let to_map = |pairs: &[(&str, f64)]| {
            pairs
                .iter()
                .map(|(k, v)| ((*k).to_owned(), *v))
                .collect::<BTreeMap<_, _>>()
        };
        FinancialRecord::new("user-1", income, to_map(expenses), savings, to_map(investments))
    }

    #[test]
    fn aggregates_reference_figures() {
        let summary = DashboardSummary::from_record(&record(
            5000.0,
            &[("a", 1500.0), ("b", 500.0)],
            1000.0,
            &[("c", 500.0)],
        ));
        assert_eq!(summary.total_expenses, 2000.0);
        assert_eq!(summary.total_investments, 500.0);
        assert_eq!(summary.net_worth, 4500.0);
        assert_eq!(summary.savings_rate, 20.0);
        assert_eq!(summary.investment_rate, 10.0);
    }

    #[rstest]
    #[case(0.0, 1000.0)]
    #[case(0.0, 0.0)]
    fn zero_income_yields_zero_rates(#[case] income: f64, #[case] savings: f64) {
        let summary =
            DashboardSummary::from_record(&record(income, &[], savings, &[("x", 200.0)]));
        assert_eq!(summary.savings_rate, 0.0);
        assert_eq!(summary.investment_rate, 0.0);
    }

    #[test]
    fn empty_categories_sum_to_zero() {
        let summary = DashboardSummary::from_record(&record(100.0, &[], 0.0, &[]));
        assert_eq!(summary.total_expenses, 0.0);
        assert_eq!(summary.total_investments, 0.0);
        assert_eq!(summary.net_worth, 100.0);
    }

    #[test]
    fn default_summary_is_all_zeroes() {
        let summary = DashboardSummary::default();
        assert_eq!(summary.net_worth, 0.0);
        assert_eq!(summary.savings_rate, 0.0);
    }
}
