use rust_decimal::Decimal;

use crate::assessment::{ApprovalBand, Assessment};
use crate::decimal::Money;
use crate::input::LoanApplication;

/// currency prefix for installment amounts
pub const CURRENCY_PREFIX: &str = "RM";

/// message shown while the required fields are incomplete
pub const INCOMPLETE_MESSAGE: &str =
    "Please complete all loan and income fields to see the result.";

/// format an amount with the currency prefix, 2 decimal places
pub fn format_money(amount: Money) -> String {
    format!("{} {:.2}", CURRENCY_PREFIX, amount.to_cents())
}

/// format a dsr percentage with the percent suffix
pub fn format_percent(percent: Decimal) -> String {
    format!("{}%", percent)
}

impl ApprovalBand {
    /// fixed display color for the band's class tag
    pub fn color(&self) -> &'static str {
        match self {
            ApprovalBand::High => "#28a745",
            ApprovalBand::Medium => "#ffc107",
            ApprovalBand::Low => "#dc3545",
        }
    }
}

/// render the three result rows for a completed calculation
pub fn render_assessment(assessment: &Assessment) -> String {
    format!(
        "Monthly installment: {}\nDebt service ratio (DSR): {}\nBank approval likelihood: {}",
        format_money(assessment.monthly_installment),
        format_percent(assessment.dsr_percent),
        assessment.band.label(),
    )
}

/// render the result panel for the current form state
///
/// falls back to the incomplete-fields message until the guard holds.
pub fn render_report(app: &LoanApplication) -> String {
    match app.assess() {
        Some(assessment) => render_assessment(&assessment),
        None => INCOMPLETE_MESSAGE.to_string(),
    }
}
