use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Taxpayer category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum TaxCategory {
    Personal,
    SoleTrader,
    Corporation,
}

impl TaxCategory {
    pub fn display(&self) -> &'static str {
        match self {
            TaxCategory::Personal => "Personal Income Tax",
            TaxCategory::SoleTrader => "Sole Trader",
            TaxCategory::Corporation => "Corporation Tax",
        }
    }
}

impl std::fmt::Display for TaxCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// One line of a calculation breakdown.
///
/// Lines carrying a rate are tax components; the others (gross figures,
/// deductions, chargeable amounts) are shown for context only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LineItem {
    pub label: String,
    #[schemars(with = "f64")]
    pub amount: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<String>,
}

impl LineItem {
    /// A context line without a rate
    pub fn base(label: &str, amount: Decimal) -> Self {
        LineItem {
            label: label.to_string(),
            amount,
            rate: None,
        }
    }

    /// A context line subtracting `amount`, shown as a negative figure.
    ///
    /// A zero deduction is stored as positive zero.
    pub fn deduction(label: &str, amount: Decimal) -> Self {
        let amount = if amount.is_zero() { Decimal::ZERO } else { -amount };
        LineItem::base(label, amount)
    }

    /// A tax, levy or surcharge line
    pub fn tax(label: &str, amount: Decimal, rate: impl Into<String>) -> Self {
        LineItem {
            label: label.to_string(),
            amount,
            rate: Some(rate.into()),
        }
    }

    pub fn is_tax_component(&self) -> bool {
        self.rate.is_some()
    }
}

/// Outcome of a single tax calculation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TaxCalculationResult {
    pub category: TaxCategory,
    pub breakdown: Vec<LineItem>,
    #[schemars(with = "f64")]
    pub total_tax: Decimal,
    pub required_documents: Vec<String>,
}

impl TaxCalculationResult {
    /// Sum of the tax component lines of the breakdown
    pub fn component_total(&self) -> Decimal {
        self.breakdown
            .iter()
            .filter(|item| item.is_tax_component())
            .fold(Decimal::ZERO, |total, item| total.saturating_add(item.amount))
    }

    /// Find a breakdown line by its label
    pub fn line(&self, label: &str) -> Option<&LineItem> {
        self.breakdown.iter().find(|item| item.label == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn component_total_skips_context_lines() {
        let result = TaxCalculationResult {
            category: TaxCategory::Personal,
            breakdown: vec![
                LineItem::base("Gross Annual Income", dec!(100000)),
                LineItem::base("Allowances & Deductions", dec!(-10000)),
                LineItem::tax("Income Tax", dec!(22500), "25%"),
                LineItem::tax("Health Surcharge", dec!(2500), "2.5%"),
            ],
            total_tax: dec!(25000),
            required_documents: vec![],
        };
        assert_eq!(result.component_total(), dec!(25000));
        assert_eq!(result.line("Income Tax").map(|l| l.amount), Some(dec!(22500)));
        assert!(result.line("VAT").is_none());
    }

    #[test]
    fn category_serializes_kebab_case() {
        let json = serde_json::to_string(&TaxCategory::SoleTrader).unwrap();
        assert_eq!(json, "\"sole-trader\"");
        let parsed: TaxCategory = serde_json::from_str("\"corporation\"").unwrap();
        assert_eq!(parsed, TaxCategory::Corporation);
    }

    #[test]
    fn deduction_lines_are_negative_without_negative_zero() {
        assert_eq!(LineItem::deduction("Business Expenses", dec!(200000)).amount, dec!(-200000));

        let zero = LineItem::deduction("Business Expenses", Decimal::ZERO);
        assert!(!zero.amount.is_sign_negative());
        assert_eq!(format!("{:.2}", zero.amount), "0.00");
        assert!(!zero.is_tax_component());
    }

    #[test]
    fn rate_omitted_from_json_when_absent() {
        let json = serde_json::to_string(&LineItem::base("Chargeable Income", dec!(1))).unwrap();
        assert!(!json.contains("rate"));
    }
}
