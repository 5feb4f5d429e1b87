/// live entry - simulate the form recomputing on every field change
use loan_affordability_rs::display::render_report;
use loan_affordability_rs::{Field, LoanApplication};

fn main() {
    let mut app = LoanApplication::new();

    let entries = [
        (Field::LoanAmount, "50000"),
        (Field::LoanYears, "9"),
        (Field::InterestRate, "3.5"),
        (Field::NetIncome, "5000"),
        (Field::ExistingDebt, "1500"),
    ];

    // the result stays absent until all required fields are positive
    for (field, raw) in entries {
        app.enter(field, raw);
        println!("entered {:?} = {:?}", field, raw);
        println!("{}\n", render_report(&app));
    }

    // clearing a required field drops the result again
    app.enter(Field::NetIncome, "");
    println!("cleared NetIncome");
    println!("{}", render_report(&app));
}
