/// json state - serialize the form snapshot and its assessment
use loan_affordability_rs::{LoanApplication, Money, Rate};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let app = LoanApplication::new()
        .with_loan_amount(Money::from_major(50_000))
        .with_loan_years(dec!(9))
        .with_interest_rate(Rate::from_percentage(dec!(3.5)))
        .with_net_income(Money::from_major(5_000))
        .with_existing_debt(Money::from_major(1_500));

    println!("application: {}", serde_json::to_string_pretty(&app)?);

    if let Some(assessment) = app.assess() {
        println!("assessment: {}", serde_json::to_string_pretty(&assessment)?);
    }

    Ok(())
}
