pub mod assessment;
pub mod decimal;
pub mod display;
pub mod errors;
pub mod input;

// re-export key types
pub use assessment::{ApprovalBand, Assessment};
pub use decimal::{round2, Money, Rate};
pub use errors::{AssessmentError, Result};
pub use input::{Field, LoanApplication};

// re-export external dependencies that users will need
pub use rust_decimal::Decimal;
