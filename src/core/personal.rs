use super::breakdown::{LineItem, TaxCalculationResult, TaxCategory};
use super::rates::{self, IncomeBand};
use super::schema::FieldInfo;
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use ttax_derive::FieldSchema;

/// Flattened input for an individual's income tax estimate
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema, FieldSchema)]
#[serde(default)]
pub struct PersonalTaxInput {
    /// Salary, wages, bonuses, rental income, dividends and other taxable income
    #[schemars(with = "f64")]
    pub annual_income: Decimal,
    /// Total of all claimed allowances
    #[schemars(with = "f64")]
    pub allowances: Decimal,
    /// Total of pension, national insurance and other deductions
    #[schemars(with = "f64")]
    pub other_deductions: Decimal,
}

const REQUIRED_DOCUMENTS: &[&str] = &[
    "Individual Income Tax Return (Form TD1)",
    "Proof of Income (Pay slips, Employment Contract)",
    "Bank Statements",
    "Receipts for Deductible Expenses",
    "BIR Registration Certificate",
];

/// Estimate personal income tax and health surcharge.
///
/// The health surcharge is levied on gross income, not chargeable income.
pub fn calculate_personal_tax(input: &PersonalTaxInput) -> TaxCalculationResult {
    let claimed = input.allowances.saturating_add(input.other_deductions);
    let chargeable_income = input.annual_income.saturating_sub(claimed);
    let band = IncomeBand::for_chargeable(chargeable_income);
    let income_tax = rates::progressive_income_tax(chargeable_income);
    let health_surcharge = input.annual_income * rates::HEALTH_SURCHARGE_RATE;

    log::debug!(
        "Personal: chargeable {}, income tax {} ({:?} band), health surcharge {}",
        chargeable_income,
        income_tax,
        band,
        health_surcharge
    );

    TaxCalculationResult {
        category: TaxCategory::Personal,
        breakdown: vec![
            LineItem::base("Gross Annual Income", input.annual_income),
            LineItem::deduction("Allowances & Deductions", claimed),
            LineItem::base("Chargeable Income", chargeable_income),
            LineItem::tax("Income Tax", income_tax, band.rate_label()),
            LineItem::tax(
                "Health Surcharge",
                health_surcharge,
                rates::percent_label(rates::HEALTH_SURCHARGE_RATE),
            ),
        ],
        total_tax: income_tax.saturating_add(health_surcharge),
        required_documents: REQUIRED_DOCUMENTS.iter().map(|d| d.to_string()).collect(),
    }
}
