//! Loan amortization
//!
//! Fixed installments under the Price table (French amortization):
//!
//! ```text
//! installment = principal × [i × (1+i)^n] / [(1+i)^n − 1]
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{compound_growth, rate_from_percent};

/// Parameters of a loan simulation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanInput {
    /// Amount financed
    pub financed_amount: f64,
    /// Monthly interest rate as a percentage
    pub monthly_rate: f64,
    /// Number of monthly installments
    pub months: u32,
}

impl LoanInput {
    pub fn new(financed_amount: f64, monthly_rate: f64, months: u32) -> Self {
        Self {
            financed_amount,
            monthly_rate,
            months,
        }
    }
}

/// Outcome of a loan simulation
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LoanResult {
    /// Fixed monthly installment
    pub installment: f64,
    /// Sum of all installments
    pub total_paid: f64,
    /// Interest paid over the whole term
    pub total_interest: f64,
}

impl LoanResult {
    /// The result returned for a non-positive amount or term
    pub fn zero() -> Self {
        Self::default()
    }

    /// Returns true if this is the zero result
    pub fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

/// Calculates the fixed installment of an amortizing loan
///
/// # Arguments
///
/// * `input` - Financed amount, monthly rate (percent) and term
///
/// # Returns
///
/// The installment with totals. A financed amount `<= 0` or a zero term
/// yields [`LoanResult::zero`]; a zero rate divides the principal evenly.
pub fn calculate_loan(input: &LoanInput) -> LoanResult {
    if input.financed_amount <= 0.0 || input.months == 0 {
        return LoanResult::zero();
    }

    let principal = input.financed_amount;
    let months = f64::from(input.months);
    let rate = rate_from_percent(input.monthly_rate);

    let growth = compound_growth(rate, input.months);
    let installment = if rate == 0.0 || growth == 0.0 {
        principal / months
    } else {
        principal * ((rate * (1.0 + growth)) / growth)
    };

    let total_paid = installment * months;
    debug!(months = input.months, rate = input.monthly_rate, "loan calculated");

    LoanResult {
        installment,
        total_paid,
        total_interest: total_paid - principal,
    }
}
