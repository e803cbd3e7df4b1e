use super::breakdown::{LineItem, TaxCalculationResult, TaxCategory};
use super::rates;
use super::schema::FieldInfo;
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use ttax_derive::FieldSchema;

/// Flattened input for a company's estimate
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema, FieldSchema)]
#[serde(default)]
pub struct CorporationTaxInput {
    /// Total revenue from all business activities, including other income
    #[schemars(with = "f64")]
    pub gross_sales: Decimal,
    /// Total of costs, expenses and allowances deducted from gross sales
    #[schemars(with = "f64")]
    pub allowable_deductions: Decimal,
    /// Oil, gas and petrochemical companies pay corporation tax at 35%
    pub is_petrochemical: bool,
    /// Recently established business
    pub is_new_business: bool,
    /// Complete years the company has been operating
    pub years_in_operation: u32,
}

impl CorporationTaxInput {
    /// New businesses are exempt from the business levy for their first three years
    pub fn is_business_levy_exempt(&self) -> bool {
        self.is_new_business && self.years_in_operation < rates::BUSINESS_LEVY_EXEMPT_YEARS
    }

    pub fn corporation_tax_rate(&self) -> Decimal {
        if self.is_petrochemical {
            rates::PETROCHEMICAL_TAX_RATE
        } else {
            rates::CORPORATION_TAX_RATE
        }
    }
}

const BUSINESS_LEVY_EXEMPT_LABEL: &str = "Exempt (First 3 years)";

const REQUIRED_DOCUMENTS: &[&str] = &[
    "Corporation Tax Return",
    "Audited Financial Statements",
    "Balance Sheet",
    "Profit & Loss Account",
    "Certificate of Incorporation",
    "BIR Registration Certificate",
    "Business Levy Return",
    "Green Fund Levy Return",
    "Health Surcharge Returns",
    "VAT Returns (if applicable)",
    "Supporting Documentation for Deductions",
];

/// Estimate corporation tax and the levies on gross sales.
///
/// The health surcharge is a flat rate on gross sales with no profit threshold.
pub fn calculate_corporation_tax(input: &CorporationTaxInput) -> TaxCalculationResult {
    let chargeable_profit = input.gross_sales.saturating_sub(input.allowable_deductions);
    let tax_rate = input.corporation_tax_rate();
    let corporation_tax = chargeable_profit * tax_rate;

    let levy_exempt = input.is_business_levy_exempt();
    let (business_levy, levy_label) = if levy_exempt {
        (Decimal::ZERO, BUSINESS_LEVY_EXEMPT_LABEL.to_string())
    } else {
        (
            input.gross_sales * rates::BUSINESS_LEVY_RATE,
            rates::percent_label(rates::BUSINESS_LEVY_RATE),
        )
    };

    let green_fund_levy = input.gross_sales * rates::GREEN_FUND_LEVY_RATE;
    let health_surcharge = input.gross_sales * rates::HEALTH_SURCHARGE_RATE;

    log::debug!(
        "Corporation: chargeable {} @ {}, levy {} (exempt: {}), green fund {}, health surcharge {}",
        chargeable_profit,
        tax_rate,
        business_levy,
        levy_exempt,
        green_fund_levy,
        health_surcharge
    );

    TaxCalculationResult {
        category: TaxCategory::Corporation,
        breakdown: vec![
            LineItem::base("Gross Sales/Receipts", input.gross_sales),
            LineItem::deduction("Allowable Deductions", input.allowable_deductions),
            LineItem::base("Chargeable Profit", chargeable_profit),
            LineItem::tax("Corporation Tax", corporation_tax, rates::percent_label(tax_rate)),
            LineItem::tax("Business Levy", business_levy, levy_label),
            LineItem::tax(
                "Green Fund Levy",
                green_fund_levy,
                rates::percent_label(rates::GREEN_FUND_LEVY_RATE),
            ),
            LineItem::tax(
                "Health Surcharge",
                health_surcharge,
                rates::percent_label(rates::HEALTH_SURCHARGE_RATE),
            ),
        ],
        total_tax: corporation_tax
            .saturating_add(business_levy)
            .saturating_add(green_fund_levy)
            .saturating_add(health_surcharge),
        required_documents: REQUIRED_DOCUMENTS.iter().map(|d| d.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::strategy;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn company(gross_sales: Decimal, deductions: Decimal) -> CorporationTaxInput {
        CorporationTaxInput {
            gross_sales,
            allowable_deductions: deductions,
            ..Default::default()
        }
    }

    fn amount(result: &TaxCalculationResult, label: &str) -> Decimal {
        result.line(label).map(|l| l.amount).unwrap()
    }

    fn rate<'a>(result: &'a TaxCalculationResult, label: &str) -> Option<&'a str> {
        result.line(label).and_then(|l| l.rate.as_deref())
    }

    #[test]
    fn standard_company() {
        let result = calculate_corporation_tax(&company(dec!(2000000), dec!(1200000)));
        assert_eq!(amount(&result, "Chargeable Profit"), dec!(800000));
        assert_eq!(amount(&result, "Corporation Tax"), dec!(240000));
        assert_eq!(rate(&result, "Corporation Tax"), Some("30%"));
        assert_eq!(amount(&result, "Business Levy"), dec!(12000));
        assert_eq!(amount(&result, "Green Fund Levy"), dec!(6000));
        assert_eq!(amount(&result, "Health Surcharge"), dec!(50000));
        assert_eq!(result.total_tax, dec!(308000));
    }

    #[test]
    fn new_business_under_three_years_is_levy_exempt() {
        let input = CorporationTaxInput {
            is_new_business: true,
            years_in_operation: 2,
            ..company(dec!(1000000), dec!(0))
        };
        let result = calculate_corporation_tax(&input);
        assert_eq!(amount(&result, "Business Levy"), Decimal::ZERO);
        assert_eq!(rate(&result, "Business Levy"), Some("Exempt (First 3 years)"));
    }

    #[test]
    fn new_business_at_three_years_pays_levy() {
        let input = CorporationTaxInput {
            is_new_business: true,
            years_in_operation: 3,
            ..company(dec!(1000000), dec!(0))
        };
        let result = calculate_corporation_tax(&input);
        assert_eq!(amount(&result, "Business Levy"), dec!(6000));
        assert_eq!(rate(&result, "Business Levy"), Some("0.6%"));
    }

    #[test]
    fn established_business_is_never_exempt() {
        let input = CorporationTaxInput {
            is_new_business: false,
            years_in_operation: 0,
            ..company(dec!(1000000), dec!(0))
        };
        assert!(!input.is_business_levy_exempt());
        assert_eq!(amount(&calculate_corporation_tax(&input), "Business Levy"), dec!(6000));
    }

    #[test]
    fn petrochemical_rate_is_thirty_five_percent() {
        let standard = company(dec!(3000000), dec!(1000000));
        let petrochemical = CorporationTaxInput {
            is_petrochemical: true,
            ..standard.clone()
        };
        let standard = calculate_corporation_tax(&standard);
        let petrochemical = calculate_corporation_tax(&petrochemical);

        assert_eq!(rate(&petrochemical, "Corporation Tax"), Some("35%"));
        assert_eq!(amount(&petrochemical, "Corporation Tax"), dec!(700000));
        assert_eq!(amount(&standard, "Corporation Tax"), dec!(600000));
        assert_eq!(petrochemical.total_tax - standard.total_tax, dec!(100000));
    }

    #[test]
    fn health_surcharge_has_no_threshold() {
        let result = calculate_corporation_tax(&company(dec!(400000), dec!(350000)));
        assert_eq!(amount(&result, "Health Surcharge"), dec!(10000));
    }

    #[test]
    fn loss_making_company_gets_negative_corporation_tax() {
        let result = calculate_corporation_tax(&company(dec!(100000), dec!(200000)));
        assert_eq!(amount(&result, "Chargeable Profit"), dec!(-100000));
        assert_eq!(amount(&result, "Corporation Tax"), dec!(-30000));
    }

    #[test]
    fn no_deductions_shown_as_zero() {
        let result = calculate_corporation_tax(&company(dec!(100000), dec!(0)));
        assert!(!amount(&result, "Allowable Deductions").is_sign_negative());
    }

    #[test]
    fn required_documents_listed() {
        let result = calculate_corporation_tax(&CorporationTaxInput::default());
        assert_eq!(result.category, TaxCategory::Corporation);
        assert_eq!(result.required_documents.len(), 11);
        assert_eq!(result.required_documents[0], "Corporation Tax Return");
    }

    proptest! {
        #[test]
        fn total_matches_tax_components(
            sales in 0u64..100_000_000u64,
            deductions in 0u64..100_000_000u64,
            petrochemical in any::<bool>(),
            new_business in any::<bool>(),
            years in 0u32..10u32,
        ) {
            let input = CorporationTaxInput {
                gross_sales: Decimal::from(sales),
                allowable_deductions: Decimal::from(deductions),
                is_petrochemical: petrochemical,
                is_new_business: new_business,
                years_in_operation: years,
            };
            let result = calculate_corporation_tax(&input);
            prop_assert_eq!(result.total_tax, result.component_total());
        }

        #[test]
        fn never_overflows_on_large_amounts(
            sales in strategy::amount(),
            deductions in strategy::amount(),
            petrochemical in any::<bool>(),
        ) {
            let input = CorporationTaxInput {
                gross_sales: sales,
                allowable_deductions: deductions,
                is_petrochemical: petrochemical,
                ..Default::default()
            };
            let result = calculate_corporation_tax(&input);
            prop_assert_eq!(result.total_tax, result.component_total());
        }

        #[test]
        fn calculation_is_idempotent(sales in 0u64..100_000_000u64, years in 0u32..10u32) {
            let input = CorporationTaxInput {
                gross_sales: Decimal::from(sales),
                is_new_business: true,
                years_in_operation: years,
                ..Default::default()
            };
            prop_assert_eq!(calculate_corporation_tax(&input), calculate_corporation_tax(&input));
        }
    }
}
