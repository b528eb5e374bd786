//! Financial Calculators Domain
//!
//! This crate implements the closed-form calculators behind the loan and
//! investment simulators.
//!
//! # Key Concepts
//!
//! - **Loan**: fixed-installment amortization (Price table / annuity)
//! - **Investment**: future value of a lump sum plus monthly contributions
//! - **Series**: month-by-month projection used for charting
//!
//! # Numeric Semantics
//!
//! All arithmetic uses `f64`. The results are display estimates, not ledger
//! amounts, so no fixed-point representation is required. Rates are monthly
//! percentages: `1.0` means 1% per month.

pub mod loan;
pub mod investment;
pub mod formatting;

pub use loan::{LoanInput, LoanResult, calculate_loan};
pub use investment::{
    InvestmentInput, InvestmentResult, InvestmentSeries, SeriesPoint,
    calculate_investment, build_investment_series,
};
pub use formatting::{format_currency, format_percent, parse_number, parse_whole_number};

/// Converts a percentage rate into a fraction
///
/// # Example
///
/// ```rust
/// use domain_finance::rate_from_percent;
///
/// assert_eq!(rate_from_percent(1.0), 0.01);
/// ```
pub fn rate_from_percent(percent: f64) -> f64 {
    percent / 100.0
}

/// Compounding factor `(1 + rate)^months`
pub fn compound_factor(rate: f64, months: u32) -> f64 {
    1.0 + compound_growth(rate, months)
}

/// Growth over the horizon, `(1 + rate)^months - 1`
///
/// Evaluated through `ln_1p`/`exp_m1` so rates far below `f64::EPSILON`
/// still produce a non-zero growth.
pub fn compound_growth(rate: f64, months: u32) -> f64 {
    (f64::from(months) * rate.ln_1p()).exp_m1()
}

/// Future value of `initial` plus `contribution` paid at the end of every month
///
/// # Arguments
///
/// * `initial` - Amount invested at month 0
/// * `contribution` - Amount added every month
/// * `rate` - Monthly rate as a fraction (0.01 for 1%)
/// * `months` - Number of elapsed months
///
/// # Returns
///
/// `initial × (1+rate)^n + contribution × ((1+rate)^n − 1) / rate`, or the
/// plain sum of deposits when `rate` is zero
pub fn future_value(initial: f64, contribution: f64, rate: f64, months: u32) -> f64 {
    if months == 0 {
        return initial;
    }
    let growth = compound_growth(rate, months);
    if rate == 0.0 || growth == 0.0 {
        return initial + contribution * f64::from(months);
    }
    // the annuity factor is at least `months` for any positive rate
    let annuity = (growth / rate).max(f64::from(months));
    initial * (1.0 + growth) + contribution * annuity
}
