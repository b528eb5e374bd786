//! Comprehensive tests for domain_finance

use domain_finance::{
    build_investment_series, calculate_investment, calculate_loan, format_currency,
    format_percent, parse_number, parse_whole_number, InvestmentInput, LoanInput, LoanResult,
};
use test_utils::{assert_approx_eq, investment_input_strategy, loan_input_strategy, FinanceFixtures};

// ============================================================================
// Loan Tests
// ============================================================================

mod loan_tests {
    use super::*;

    #[test]
    fn test_price_table_reference_values() {
        let result = calculate_loan(&FinanceFixtures::price_table_loan());

        assert_approx_eq(result.installment, 8884.88, 0.005);
        assert_approx_eq(result.total_paid, 106_618.55, 0.01);
        assert_approx_eq(result.total_interest, 6_618.55, 0.01);
    }

    #[test]
    fn test_totals_are_consistent() {
        let input = LoanInput::new(35_000.0, 1.89, 48);
        let result = calculate_loan(&input);

        assert_approx_eq(result.total_paid, result.installment * 48.0, 1e-6);
        assert_approx_eq(result.total_interest, result.total_paid - 35_000.0, 1e-6);
    }

    #[test]
    fn test_single_installment_includes_one_month_of_interest() {
        let result = calculate_loan(&LoanInput::new(1000.0, 2.0, 1));
        assert_approx_eq(result.installment, 1020.0, 1e-9);
    }

    #[test]
    fn test_zero_rate_is_exact_division() {
        let result = calculate_loan(&LoanInput::new(10_000.0, 0.0, 3));
        assert_approx_eq(result.installment, 10_000.0 / 3.0, 1e-9);
        assert_approx_eq(result.total_interest, 0.0, 1e-9);
    }

    #[test]
    fn test_interest_free_purchase() {
        let result = calculate_loan(&FinanceFixtures::interest_free_loan());
        assert_approx_eq(result.installment, 250.0, 1e-9);
        assert_approx_eq(result.total_paid, 2_500.0, 1e-9);
    }

    #[test]
    fn test_rate_below_epsilon_keeps_installment_finite() {
        let result = calculate_loan(&LoanInput::new(1200.0, 1e-15, 12));
        assert!(result.installment.is_finite());
        assert_approx_eq(result.installment, 100.0, 1e-9);
        assert_approx_eq(result.total_interest, 0.0, 1e-6);
    }

    #[test]
    fn test_zero_sentinel() {
        assert_eq!(calculate_loan(&LoanInput::new(0.0, 0.0, 0)), LoanResult::zero());
        assert_eq!(calculate_loan(&LoanInput::new(-1.0, 1.0, 10)), LoanResult::zero());
    }

    #[test]
    fn test_serialization() {
        let input = FinanceFixtures::price_table_loan();
        let json = serde_json::to_string(&input).unwrap();
        assert!(json.contains("\"financed_amount\""));
        let back: LoanInput = serde_json::from_str(&json).unwrap();
        assert_eq!(back, input);
    }
}

// ============================================================================
// Investment Tests
// ============================================================================

mod investment_tests {
    use super::*;

    #[test]
    fn test_rate_below_epsilon_keeps_contributions() {
        let result = calculate_investment(&InvestmentInput::new(1000.0, 500.0, 1e-15, 24));
        assert_eq!(result.total_invested, 13_000.0);
        assert!(result.final_value >= result.total_invested);
        assert_approx_eq(result.final_value, 13_000.0, 1e-6);
    }

    #[test]
    fn test_reference_scenario() {
        let result = calculate_investment(&FinanceFixtures::monthly_savings());

        assert_eq!(result.total_invested, 13_000.0);
        // 1000 × 1.01^24 + 500 × (1.01^24 − 1) / 0.01
        assert_approx_eq(result.final_value, 14_756.47, 0.01);
        assert_approx_eq(result.total_interest, result.final_value - 13_000.0, 1e-9);
    }

    #[test]
    fn test_zero_rate_has_no_interest() {
        let result = calculate_investment(&InvestmentInput::new(100.0, 10.0, 0.0, 10));
        assert_eq!(result.final_value, 200.0);
        assert_eq!(result.total_interest, 0.0);
    }

    #[test]
    fn test_lump_sum_only() {
        let result = calculate_investment(&InvestmentInput::new(1000.0, 0.0, 1.0, 12));
        assert_approx_eq(result.final_value, 1126.825030131969, 1e-6);
    }
}

// ============================================================================
// Series Tests
// ============================================================================

mod series_tests {
    use super::*;

    #[test]
    fn test_month_zero_is_initial_value() {
        let series = build_investment_series(&FinanceFixtures::monthly_savings());
        let first = series.first().unwrap();

        assert_eq!(first.month, 0);
        assert_eq!(first.accumulated_value, 1000.0);
        assert_eq!(first.total_invested, 1000.0);
    }

    #[test]
    fn test_months_are_sequential() {
        let series = build_investment_series(&FinanceFixtures::monthly_savings());
        for (index, point) in series.iter().enumerate() {
            assert_eq!(point.month as usize, index);
        }
    }

    #[test]
    fn test_each_call_recomputes() {
        let input = FinanceFixtures::monthly_savings();
        assert_eq!(build_investment_series(&input), build_investment_series(&input));
    }

    #[test]
    fn test_series_serializes_as_array() {
        let series = build_investment_series(&InvestmentInput::new(1.0, 1.0, 0.0, 2));
        let json = serde_json::to_value(&series).unwrap();
        assert_eq!(json.as_array().map(Vec::len), Some(3));
        assert_eq!(json[2]["total_invested"], 3.0);
    }
}

// ============================================================================
// Formatting Tests
// ============================================================================

mod formatting_tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "R$\u{a0}0,00");
        assert_eq!(format_currency(1234.56), "R$\u{a0}1.234,56");
        assert_eq!(format_currency(8884.878867), "R$\u{a0}8.884,88");
        assert_eq!(format_currency(1_000_000.0), "R$\u{a0}1.000.000,00");
        assert_eq!(format_currency(-10.0), "-R$\u{a0}10,00");
    }

    #[test]
    fn test_format_currency_rounds_half_away_from_zero() {
        assert_eq!(format_currency(0.125), "R$\u{a0}0,13");
    }

    #[test]
    fn test_format_currency_non_finite() {
        assert_eq!(format_currency(f64::NAN), "R$\u{a0}0,00");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(1.5), "1,50%");
        assert_eq!(format_percent(0.0), "0,00%");
        assert_eq!(format_percent(1234.5), "1.234,50%");
    }

    #[test]
    fn test_parse_number_pt_br() {
        assert_eq!(parse_number("1.234,56"), 1234.56);
        assert_eq!(parse_number("R$ 1.500,00"), 1500.0);
        assert_eq!(parse_number("0,5"), 0.5);
    }

    #[test]
    fn test_parse_number_plain() {
        assert_eq!(parse_number("100000"), 100_000.0);
        assert_eq!(parse_number("1.5"), 1.5);
        assert_eq!(parse_number("-3"), -3.0);
    }

    #[test]
    fn test_parse_number_malformed_defaults_to_zero() {
        assert_eq!(parse_number(""), 0.0);
        assert_eq!(parse_number("abc"), 0.0);
        assert_eq!(parse_number("-"), 0.0);
    }

    #[test]
    fn test_parse_whole_number() {
        assert_eq!(parse_whole_number("12"), 12);
        assert_eq!(parse_whole_number("12 meses"), 12);
        assert_eq!(parse_whole_number("7,9"), 7);
        assert_eq!(parse_whole_number("x"), 0);
    }
}

// ============================================================================
// Property Tests
// ============================================================================

mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn zero_rate_installment_is_principal_over_months(
            principal in 1.0f64..10_000_000.0f64,
            months in 1u32..600u32
        ) {
            let result = calculate_loan(&LoanInput::new(principal, 0.0, months));
            prop_assert!((result.installment - principal / f64::from(months)).abs() < 1e-9);
        }

        #[test]
        fn loan_interest_is_never_negative(input in loan_input_strategy()) {
            let result = calculate_loan(&input);
            prop_assert!(result.total_interest >= -1e-6);
        }

        #[test]
        fn series_has_one_point_per_month(input in investment_input_strategy()) {
            let series = build_investment_series(&input);
            prop_assert_eq!(series.len(), input.months as usize + 1);
        }

        #[test]
        fn series_is_non_decreasing(input in investment_input_strategy()) {
            let series = build_investment_series(&input);
            let points = series.points();
            for pair in points.windows(2) {
                prop_assert!(pair[1].total_invested >= pair[0].total_invested);
                prop_assert!(pair[1].accumulated_value >= pair[0].accumulated_value);
            }
        }

        #[test]
        fn positive_rate_beats_deposits(
            initial in 1.0f64..100_000.0f64,
            contribution in 0.0f64..10_000.0f64,
            rate in 0.01f64..5.0f64,
            months in 1u32..360u32
        ) {
            let result = calculate_investment(&InvestmentInput::new(initial, contribution, rate, months));
            prop_assert!(result.final_value > result.total_invested);
        }

        #[test]
        fn tiny_rates_never_lose_deposits(
            initial in 0.0f64..100_000.0f64,
            contribution in 0.0f64..10_000.0f64,
            exponent in 6i32..20i32,
            months in 1u32..360u32
        ) {
            let rate = 10f64.powi(-exponent);
            let investment = calculate_investment(&InvestmentInput::new(initial, contribution, rate, months));
            prop_assert!(investment.final_value >= investment.total_invested);

            let loan = calculate_loan(&LoanInput::new(initial + 1.0, rate, months));
            prop_assert!(loan.installment.is_finite());
            prop_assert!(loan.installment > 0.0);
        }
    }
}
