use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::assessment::Assessment;
use crate::decimal::{Money, Rate};

/// the five entry fields of the calculator form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Field {
    LoanAmount,
    LoanYears,
    InterestRate,
    NetIncome,
    ExistingDebt,
}

/// raw form state of a car-loan affordability check
///
/// required fields hold `None` until a nonzero number is entered; a cleared
/// or unparsable entry falls back to `None` rather than zero. existing debt
/// is the exception: absent means zero and never blocks the calculation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoanApplication {
    /// principal, currency units
    pub loan_amount: Option<Money>,
    /// term in years, fractional allowed
    pub loan_years: Option<Decimal>,
    /// annual rate, entered in percentage points
    pub interest_rate: Option<Rate>,
    /// net monthly income after deductions
    pub net_income: Option<Money>,
    /// existing monthly debt commitments
    pub existing_debt: Option<Money>,
}

impl LoanApplication {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_loan_amount(mut self, amount: Money) -> Self {
        self.loan_amount = Some(amount);
        self
    }

    pub fn with_loan_years(mut self, years: Decimal) -> Self {
        self.loan_years = Some(years);
        self
    }

    pub fn with_interest_rate(mut self, rate: Rate) -> Self {
        self.interest_rate = Some(rate);
        self
    }

    pub fn with_net_income(mut self, income: Money) -> Self {
        self.net_income = Some(income);
        self
    }

    pub fn with_existing_debt(mut self, debt: Money) -> Self {
        self.existing_debt = Some(debt);
        self
    }

    /// apply a raw text entry to a field, mirroring the form's change handlers
    ///
    /// required fields: empty, unparsable, or zero entries coerce to absent;
    /// any other parsed value is kept as typed (negatives included, the
    /// readiness guard rejects them later).
    ///
    /// existing debt: an empty entry coerces to absent (treated as zero),
    /// a non-empty unparsable entry coerces to zero.
    pub fn enter(&mut self, field: Field, raw: &str) {
        let parsed = parse_entry(raw);

        match field {
            Field::LoanAmount => self.loan_amount = required(parsed).map(Money::from_decimal),
            Field::LoanYears => self.loan_years = required(parsed),
            Field::InterestRate => self.interest_rate = required(parsed).map(Rate::from_percentage),
            Field::NetIncome => self.net_income = required(parsed).map(Money::from_decimal),
            Field::ExistingDebt => {
                self.existing_debt = if raw.trim().is_empty() {
                    None
                } else {
                    Some(Money::from_decimal(parsed.unwrap_or(Decimal::ZERO)))
                };
            }
        }
    }

    /// all four required fields present and strictly positive
    pub fn is_ready(&self) -> bool {
        self.loan_amount.is_some_and(|a| a.is_positive())
            && self.loan_years.is_some_and(|y| y > Decimal::ZERO)
            && self.interest_rate.is_some_and(|r| r.is_positive())
            && self.net_income.is_some_and(|i| i.is_positive())
    }

    /// existing debt with absent treated as zero
    pub fn existing_debt_or_zero(&self) -> Money {
        self.existing_debt.unwrap_or(Money::ZERO)
    }

    /// recompute the result for the current snapshot
    ///
    /// `None` until [`is_ready`](Self::is_ready) holds.
    pub fn assess(&self) -> Option<Assessment> {
        Assessment::of(self)
    }
}

/// parse a text entry into a decimal, if it is numeric
fn parse_entry(raw: &str) -> Option<Decimal> {
    Decimal::from_str(raw.trim()).ok()
}

/// required-field coercion: unparsable or zero becomes absent
fn required(parsed: Option<Decimal>) -> Option<Decimal> {
    parsed.filter(|d| !d.is_zero())
}
