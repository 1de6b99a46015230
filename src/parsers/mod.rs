pub mod amount;
pub mod dkb;
pub mod rakuten;
pub mod rules;
pub mod shinsei;
pub mod smbc;
pub mod traits;

pub mod prelude {
    pub use super::rakuten::JcbDebit;
    pub use super::rules::{DateRule, Rule, RowParser, apply_date_rule, apply_rule};
    pub use super::smbc::VisaCard;
    pub use super::traits::{DescriptionExtractor, Extracted};
}
