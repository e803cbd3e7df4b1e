pub mod breakdown;
pub mod corporation;
pub mod forms;
pub mod input;
pub mod personal;
pub mod rates;
pub mod schema;
pub mod sole_trader;

// Flat public surface for domain types and functions.
pub use breakdown::{LineItem, TaxCalculationResult, TaxCategory};
pub use corporation::{calculate_corporation_tax, CorporationTaxInput};
pub use forms::{parse_amount, CorporationTaxForm, PersonalTaxForm, SoleTraderTaxForm};
pub use input::{read_forms_json, read_inputs_json, InputError, TaxForm, TaxInput};
pub use personal::{calculate_personal_tax, PersonalTaxInput};
pub use rates::{rate_table, RateEntry};
pub use schema::{describe_forms, describe_inputs, FieldInfo, RecordSchema};
pub use sole_trader::{calculate_sole_trader_tax, SoleTraderTaxInput};
