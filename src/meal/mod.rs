pub mod aggregate;
pub mod constants;
pub mod ledger;
pub mod scaler;
pub mod warnings;

pub use aggregate::totals;
pub use constants::*;
pub use ledger::MealLedger;
pub use scaler::{GramWeight, ScaledEntry, entry_name, missing_notice, scale};
pub use warnings::{MealWarning, WarningKind, WarningSet, evaluate};
