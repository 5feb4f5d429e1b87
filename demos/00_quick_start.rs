/// quick start - assess a car loan directly
use loan_affordability_rs::{Assessment, Money, Rate};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RM 50,000 over 9 years at 3.5% p.a., RM 5,000 net income,
    // RM 1,500 existing monthly commitments
    let assessment = Assessment::calculate(
        Money::from_major(50_000),
        dec!(9),
        Rate::from_percentage(dec!(3.5)),
        Money::from_major(5_000),
        Money::from_major(1_500),
    )?;

    println!("Monthly installment: RM {:.2}", assessment.monthly_installment.to_cents());
    println!("DSR: {}%", assessment.dsr_percent);
    println!("Approval likelihood: {}", assessment.band.label());

    Ok(())
}
