use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::{round2, Money, Rate};
use crate::errors::{AssessmentError, Result};
use crate::input::LoanApplication;

/// approval likelihood band, keyed off the rounded dsr
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalBand {
    /// dsr at or below 40%
    High,
    /// dsr above 40% up to and including 60%
    Medium,
    /// dsr above 60%
    Low,
}

impl ApprovalBand {
    /// classify a dsr percentage that has already been rounded to 2 places
    pub fn from_dsr_percent(dsr_percent: Decimal) -> Self {
        if dsr_percent <= dec!(40) {
            ApprovalBand::High
        } else if dsr_percent <= dec!(60) {
            ApprovalBand::Medium
        } else {
            ApprovalBand::Low
        }
    }

    /// display label
    pub fn label(&self) -> &'static str {
        match self {
            ApprovalBand::High => "High approval likelihood",
            ApprovalBand::Medium => "Medium approval likelihood",
            ApprovalBand::Low => "Low approval likelihood",
        }
    }

    /// lowercase class tag used by the display mapping
    pub fn class_tag(&self) -> &'static str {
        match self {
            ApprovalBand::High => "high",
            ApprovalBand::Medium => "medium",
            ApprovalBand::Low => "low",
        }
    }
}

/// result of one affordability calculation
///
/// produced fresh from an input snapshot; carries no identity or history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    /// simple-interest monthly installment, unrounded
    pub monthly_installment: Money,
    /// debt service ratio as a percentage, rounded to 2 places
    pub dsr_percent: Decimal,
    /// approval likelihood for the rounded dsr
    pub band: ApprovalBand,
}

impl Assessment {
    /// compute from form state; `None` until the readiness guard holds
    ///
    /// the guard requires all four required inputs strictly positive.
    /// existing debt defaults to zero when absent and never gates.
    pub fn of(app: &LoanApplication) -> Option<Self> {
        if !app.is_ready() {
            return None;
        }

        Some(compute(
            app.loan_amount?,
            app.loan_years?,
            app.interest_rate?,
            app.net_income?,
            app.existing_debt_or_zero(),
        ))
    }

    /// validated entry point for programmatic callers
    ///
    /// re-checks the same bounds the form guard enforces, plus a
    /// non-negative existing debt, since nothing upstream has coerced
    /// the values here.
    pub fn calculate(
        loan_amount: Money,
        loan_years: Decimal,
        annual_rate: Rate,
        net_income: Money,
        existing_debt: Money,
    ) -> Result<Self> {
        if !loan_amount.is_positive() {
            return Err(AssessmentError::NonPositiveLoanAmount {
                amount: loan_amount,
            });
        }
        if loan_years <= Decimal::ZERO {
            return Err(AssessmentError::NonPositiveLoanTerm { years: loan_years });
        }
        if !annual_rate.is_positive() {
            return Err(AssessmentError::NonPositiveInterestRate { rate: annual_rate });
        }
        if !net_income.is_positive() {
            return Err(AssessmentError::NonPositiveIncome { income: net_income });
        }
        if existing_debt.is_negative() {
            return Err(AssessmentError::NegativeExistingDebt {
                debt: existing_debt,
            });
        }

        Ok(compute(
            loan_amount,
            loan_years,
            annual_rate,
            net_income,
            existing_debt,
        ))
    }
}

/// simple-interest installment and dsr
///
/// interest is computed once as principal x rate x term and spread evenly
/// across all installments; this is not reducing-balance amortization.
/// callers must have established `loan_years > 0` and `net_income > 0`.
fn compute(
    loan_amount: Money,
    loan_years: Decimal,
    annual_rate: Rate,
    net_income: Money,
    existing_debt: Money,
) -> Assessment {
    let total_interest = loan_amount * annual_rate.as_decimal() * loan_years;
    let total_payable = loan_amount + total_interest;
    let monthly_installment = total_payable / (loan_years * dec!(12));

    let total_monthly_debt = existing_debt + monthly_installment;
    let dsr_percent = round2(total_monthly_debt.as_decimal() / net_income.as_decimal() * dec!(100));

    Assessment {
        monthly_installment,
        dsr_percent,
        band: ApprovalBand::from_dsr_percent(dsr_percent),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready_application() -> LoanApplication {
        LoanApplication::new()
            .with_loan_amount(Money::from_major(50_000))
            .with_loan_years(dec!(9))
            .with_interest_rate(Rate::from_percentage(dec!(3.5)))
            .with_net_income(Money::from_major(5_000))
            .with_existing_debt(Money::from_major(1_500))
    }

    #[test]
    fn test_worked_scenario() {
        // 50,000 at 3.5% over 9 years: interest 15,750, payable 65,750,
        // installment 65,750 / 108; with 1,500 existing debt on 5,000
        // income the dsr lands at 42.18
        let result = ready_application().assess().unwrap();

        assert_eq!(result.monthly_installment.to_cents(), dec!(608.80));
        assert_eq!(result.dsr_percent, dec!(42.18));
        assert_eq!(result.band, ApprovalBand::Medium);
    }

    #[test]
    fn test_missing_required_field_yields_absent_result() {
        let mut app = ready_application();
        app.net_income = None;
        assert_eq!(app.assess(), None);

        let mut app = ready_application();
        app.loan_years = Some(dec!(-1));
        assert_eq!(app.assess(), None);
    }

    #[test]
    fn test_absent_existing_debt_defaults_to_zero() {
        let mut app = ready_application();
        app.existing_debt = None;
        let without = app.assess().unwrap();

        app.existing_debt = Some(Money::ZERO);
        let with_zero = app.assess().unwrap();

        assert_eq!(without, with_zero);
    }

    #[test]
    fn test_installment_invariant_under_existing_debt() {
        let mut app = ready_application();
        let base = app.assess().unwrap();

        app.existing_debt = Some(Money::from_major(3_000));
        let more_debt = app.assess().unwrap();

        assert_eq!(base.monthly_installment, more_debt.monthly_installment);
        assert!(more_debt.dsr_percent > base.dsr_percent);
    }

    #[test]
    fn test_dsr_monotone_in_existing_debt() {
        let mut app = ready_application();
        let mut previous = Decimal::MIN;

        for debt in [0, 500, 1_000, 2_000, 4_000] {
            app.existing_debt = Some(Money::from_major(debt));
            let dsr = app.assess().unwrap().dsr_percent;
            assert!(dsr >= previous);
            previous = dsr;
        }
    }

    #[test]
    fn test_idempotent() {
        let app = ready_application();
        assert_eq!(app.assess(), app.assess());
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(ApprovalBand::from_dsr_percent(dec!(40.00)), ApprovalBand::High);
        assert_eq!(ApprovalBand::from_dsr_percent(dec!(40.01)), ApprovalBand::Medium);
        assert_eq!(ApprovalBand::from_dsr_percent(dec!(60.00)), ApprovalBand::Medium);
        assert_eq!(ApprovalBand::from_dsr_percent(dec!(60.01)), ApprovalBand::Low);
    }

    #[test]
    fn test_band_boundaries_end_to_end() {
        // 10,000 at 5% over 1 year pays exactly 875 per month
        let boundary = |debt: Decimal| {
            Assessment::calculate(
                Money::from_major(10_000),
                dec!(1),
                Rate::from_percentage(dec!(5)),
                Money::from_major(2_500),
                Money::from_decimal(debt),
            )
            .unwrap()
        };

        // total debt 1,000 on 2,500 income: dsr exactly 40.00
        assert_eq!(boundary(dec!(125)).band, ApprovalBand::High);
        assert_eq!(boundary(dec!(125.25)).band, ApprovalBand::Medium);

        // total debt 1,500: dsr exactly 60.00
        assert_eq!(boundary(dec!(625)).band, ApprovalBand::Medium);
        assert_eq!(boundary(dec!(625.25)).band, ApprovalBand::Low);
    }

    #[test]
    fn test_classification_uses_rounded_dsr() {
        // raw dsr 40.002 rounds down to 40.00 and stays in the high band
        let result = Assessment::calculate(
            Money::from_major(10_000),
            dec!(1),
            Rate::from_percentage(dec!(5)),
            Money::from_major(2_500),
            Money::from_decimal(dec!(125.05)),
        )
        .unwrap();

        assert_eq!(result.dsr_percent, dec!(40.00));
        assert_eq!(result.band, ApprovalBand::High);
    }

    #[test]
    fn test_calculate_rejects_non_positive_inputs() {
        let calc = |amount: i64, years: Decimal, rate: Decimal, income: i64, debt: i64| {
            Assessment::calculate(
                Money::from_major(amount),
                years,
                Rate::from_percentage(rate),
                Money::from_major(income),
                Money::from_major(debt),
            )
        };

        assert!(matches!(
            calc(0, dec!(9), dec!(3.5), 5_000, 0),
            Err(AssessmentError::NonPositiveLoanAmount { .. })
        ));
        assert!(matches!(
            calc(50_000, dec!(0), dec!(3.5), 5_000, 0),
            Err(AssessmentError::NonPositiveLoanTerm { .. })
        ));
        assert!(matches!(
            calc(50_000, dec!(9), dec!(0), 5_000, 0),
            Err(AssessmentError::NonPositiveInterestRate { .. })
        ));
        assert!(matches!(
            calc(50_000, dec!(9), dec!(3.5), -5_000, 0),
            Err(AssessmentError::NonPositiveIncome { .. })
        ));
        assert!(matches!(
            calc(50_000, dec!(9), dec!(3.5), 5_000, -100),
            Err(AssessmentError::NegativeExistingDebt { .. })
        ));
    }

    #[test]
    fn test_fractional_term_years() {
        // 18 months expressed as 1.5 years
        let result = Assessment::calculate(
            Money::from_major(12_000),
            dec!(1.5),
            Rate::from_percentage(dec!(4)),
            Money::from_major(4_000),
            Money::ZERO,
        )
        .unwrap();

        // interest 720, payable 12,720 over 18 installments
        assert_eq!(result.monthly_installment.to_cents(), dec!(706.67));
    }

    #[test]
    fn test_dsr_has_at_most_two_decimals() {
        let result = ready_application().assess().unwrap();
        assert!(result.dsr_percent.scale() <= 2);
    }
}
