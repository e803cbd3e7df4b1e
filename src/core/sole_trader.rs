use super::breakdown::{LineItem, TaxCalculationResult, TaxCategory};
use super::rates::{self, IncomeBand};
use super::schema::FieldInfo;
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use ttax_derive::FieldSchema;

/// Flattened input for a sole trader's estimate
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema, FieldSchema)]
#[serde(default)]
pub struct SoleTraderTaxInput {
    /// All income from sales, services and business operations before expenses
    #[schemars(with = "f64")]
    pub annual_revenue: Decimal,
    /// Total allowable business expenses
    #[schemars(with = "f64")]
    pub business_expenses: Decimal,
    /// Employees on payroll, excluding the owner
    pub number_of_employees: u32,
    /// Registered for VAT (required above TT$500,000 annual revenue)
    pub has_vat_registration: bool,
}

/// Estimate income tax, business levy, health surcharge and VAT for a sole trader.
pub fn calculate_sole_trader_tax(input: &SoleTraderTaxInput) -> TaxCalculationResult {
    let chargeable_income = input.annual_revenue.saturating_sub(input.business_expenses);
    let band = IncomeBand::for_chargeable(chargeable_income);
    let income_tax = rates::progressive_income_tax(chargeable_income);

    let business_levy = input.annual_revenue * rates::BUSINESS_LEVY_RATE;
    let health_surcharge = input.annual_revenue * rates::HEALTH_SURCHARGE_RATE;
    let vat = if input.has_vat_registration {
        input.annual_revenue * rates::VAT_RATE
    } else {
        Decimal::ZERO
    };

    log::debug!(
        "Sole trader: chargeable {}, income tax {}, levy {}, health surcharge {}, vat {}",
        chargeable_income,
        income_tax,
        business_levy,
        health_surcharge,
        vat
    );

    let mut breakdown = vec![
        LineItem::base("Gross Annual Revenue", input.annual_revenue),
        LineItem::deduction("Business Expenses", input.business_expenses),
        LineItem::base("Chargeable Income", chargeable_income),
        LineItem::tax("Income Tax", income_tax, band.rate_label()),
        LineItem::tax(
            "Business Levy",
            business_levy,
            rates::percent_label(rates::BUSINESS_LEVY_RATE),
        ),
        LineItem::tax(
            "Health Surcharge",
            health_surcharge,
            rates::percent_label(rates::HEALTH_SURCHARGE_RATE),
        ),
    ];

    if input.has_vat_registration {
        breakdown.push(LineItem::tax(
            "VAT (Value Added Tax)",
            vat,
            rates::percent_label(rates::VAT_RATE),
        ));
    }

    TaxCalculationResult {
        category: TaxCategory::SoleTrader,
        breakdown,
        total_tax: income_tax
            .saturating_add(business_levy)
            .saturating_add(health_surcharge)
            .saturating_add(vat),
        required_documents: required_documents(input),
    }
}

fn required_documents(input: &SoleTraderTaxInput) -> Vec<String> {
    let has_employees = input.number_of_employees > 0;
    [
        Some("Individual Income Tax Return (Form TD1)"),
        Some("Business Financial Statements"),
        Some("Profit & Loss Statement"),
        Some("Business Registration Certificate"),
        Some("BIR Registration Certificate"),
        input.has_vat_registration.then_some("VAT Returns"),
        has_employees.then_some("PAYE Returns"),
        has_employees.then_some("TD4 Certificates for Employees"),
        Some("Receipts and Invoices"),
        Some("Bank Statements"),
    ]
    .into_iter()
    .flatten()
    .map(str::to_string)
    .collect()
}
