//! Investment growth projections
//!
//! Future value of an initial amount plus monthly contributions, and the
//! month-by-month series behind the growth chart.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{future_value, rate_from_percent};

/// Parameters of an investment simulation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InvestmentInput {
    /// Amount invested at month 0
    pub initial_value: f64,
    /// Amount contributed every month
    pub monthly_contribution: f64,
    /// Monthly return as a percentage
    pub monthly_rate: f64,
    /// Investment horizon in months
    pub months: u32,
}

impl InvestmentInput {
    pub fn new(initial_value: f64, monthly_contribution: f64, monthly_rate: f64, months: u32) -> Self {
        Self {
            initial_value,
            monthly_contribution,
            monthly_rate,
            months,
        }
    }

    /// Total deposited after `month` months
    pub fn invested_after(&self, month: u32) -> f64 {
        self.initial_value + self.monthly_contribution * f64::from(month)
    }
}

/// Outcome of an investment simulation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InvestmentResult {
    /// Value at the end of the horizon
    pub final_value: f64,
    /// Sum of all deposits
    pub total_invested: f64,
    /// Earnings on top of the deposits
    pub total_interest: f64,
}

/// One chart point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub month: u32,
    pub accumulated_value: f64,
    pub total_invested: f64,
}

/// Month-by-month projection from month 0 through the horizon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvestmentSeries {
    points: Vec<SeriesPoint>,
}

impl InvestmentSeries {
    /// Number of points (`months + 1`)
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SeriesPoint> {
        self.points.iter()
    }

    /// The month 0 point
    pub fn first(&self) -> Option<&SeriesPoint> {
        self.points.first()
    }

    /// The final month point
    pub fn last(&self) -> Option<&SeriesPoint> {
        self.points.last()
    }

    pub fn points(&self) -> &[SeriesPoint] {
        &self.points
    }
}

impl<'a> IntoIterator for &'a InvestmentSeries {
    type Item = &'a SeriesPoint;
    type IntoIter = std::slice::Iter<'a, SeriesPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Calculates the future value of an investment
///
/// # Arguments
///
/// * `input` - Initial value, monthly contribution, monthly rate (percent) and horizon
///
/// # Returns
///
/// Final value, total invested and earned interest. A zero horizon returns
/// the initial value with no interest.
pub fn calculate_investment(input: &InvestmentInput) -> InvestmentResult {
    if input.months == 0 {
        return InvestmentResult {
            final_value: input.initial_value,
            total_invested: input.initial_value,
            total_interest: 0.0,
        };
    }

    let rate = rate_from_percent(input.monthly_rate);
    let total_invested = input.invested_after(input.months);
    let final_value = future_value(
        input.initial_value,
        input.monthly_contribution,
        rate,
        input.months,
    );

    InvestmentResult {
        final_value,
        total_invested,
        total_interest: final_value - total_invested,
    }
}

/// Builds the projection series, one point per month including month 0
///
/// Every call recomputes the series from scratch.
pub fn build_investment_series(input: &InvestmentInput) -> InvestmentSeries {
    let rate = rate_from_percent(input.monthly_rate);

    let points: Vec<SeriesPoint> = (0..=input.months)
        .map(|month| SeriesPoint {
            month,
            accumulated_value: future_value(
                input.initial_value,
                input.monthly_contribution,
                rate,
                month,
            ),
            total_invested: input.invested_after(month),
        })
        .collect();

    debug!(points = points.len(), "investment series built");
    InvestmentSeries { points }
}
