use rust_decimal::Decimal;
use thiserror::Error;

use crate::decimal::{Money, Rate};

#[derive(Error, Debug)]
pub enum AssessmentError {
    #[error("loan amount must be positive: {amount}")]
    NonPositiveLoanAmount { amount: Money },

    #[error("loan term must be positive: {years} years")]
    NonPositiveLoanTerm { years: Decimal },

    #[error("interest rate must be positive: {rate}")]
    NonPositiveInterestRate { rate: Rate },

    #[error("net monthly income must be positive: {income}")]
    NonPositiveIncome { income: Money },

    #[error("existing monthly debt cannot be negative: {debt}")]
    NegativeExistingDebt { debt: Money },
}

pub type Result<T> = std::result::Result<T, AssessmentError>;
