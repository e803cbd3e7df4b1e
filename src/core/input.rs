use super::breakdown::{TaxCalculationResult, TaxCategory};
use super::corporation::{calculate_corporation_tax, CorporationTaxInput};
use super::forms::{CorporationTaxForm, PersonalTaxForm, SoleTraderTaxForm};
use super::personal::{calculate_personal_tax, PersonalTaxInput};
use super::sole_trader::{calculate_sole_trader_tax, SoleTraderTaxInput};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::io::Read;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid input document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no input received")]
    Empty,
}

/// A calculation request for any category, tagged by `category`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "category", rename_all = "kebab-case")]
pub enum TaxInput {
    Personal(PersonalTaxInput),
    SoleTrader(SoleTraderTaxInput),
    Corporation(CorporationTaxInput),
}

impl TaxInput {
    pub fn category(&self) -> TaxCategory {
        match self {
            TaxInput::Personal(_) => TaxCategory::Personal,
            TaxInput::SoleTrader(_) => TaxCategory::SoleTrader,
            TaxInput::Corporation(_) => TaxCategory::Corporation,
        }
    }

    pub fn calculate(&self) -> TaxCalculationResult {
        match self {
            TaxInput::Personal(input) => calculate_personal_tax(input),
            TaxInput::SoleTrader(input) => calculate_sole_trader_tax(input),
            TaxInput::Corporation(input) => calculate_corporation_tax(input),
        }
    }
}

/// A detailed form for any category, tagged by `category`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "category", rename_all = "kebab-case")]
pub enum TaxForm {
    Personal(PersonalTaxForm),
    SoleTrader(SoleTraderTaxForm),
    Corporation(CorporationTaxForm),
}

impl TaxForm {
    pub fn to_input(&self) -> TaxInput {
        match self {
            TaxForm::Personal(form) => TaxInput::Personal(form.to_input()),
            TaxForm::SoleTrader(form) => TaxInput::SoleTrader(form.to_input()),
            TaxForm::Corporation(form) => TaxInput::Corporation(form.to_input()),
        }
    }
}

fn read_documents<T: DeserializeOwned, R: Read>(mut reader: R) -> Result<Vec<T>, InputError> {
    let mut buffer = String::new();
    reader.read_to_string(&mut buffer)?;

    if buffer.trim().is_empty() {
        return Err(InputError::Empty);
    }

    let documents = match serde_json::from_str::<serde_json::Value>(&buffer)? {
        serde_json::Value::Array(items) => items
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<T>, _>>()?,
        single => vec![serde_json::from_value(single)?],
    };

    log::info!("Read {} input document(s)", documents.len());
    Ok(documents)
}

/// Read one calculation input or an array of them from JSON
pub fn read_inputs_json<R: Read>(reader: R) -> Result<Vec<TaxInput>, InputError> {
    read_documents(reader)
}

/// Read one detailed form or an array of them from JSON
pub fn read_forms_json<R: Read>(reader: R) -> Result<Vec<TaxForm>, InputError> {
    read_documents(reader)
}
