//! Detailed form records
//!
//! Each category collects itemised figures that are summed into the single
//! totals the calculation functions take. Form amounts are parsed leniently:
//! anything that is not a number counts as zero.

use super::corporation::CorporationTaxInput;
use super::personal::PersonalTaxInput;
use super::schema::FieldInfo;
use super::sole_trader::SoleTraderTaxInput;
use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use ttax_derive::FieldSchema;

/// Maximum claimable life insurance premiums
pub const LIFE_INSURANCE_CAP: Decimal = dec!(50000);
/// Maximum claimable mortgage interest
pub const MORTGAGE_INTEREST_CAP: Decimal = dec!(25000);
/// Standard personal allowance assumed when a form does not state one
pub const PERSONAL_ALLOWANCE: Decimal = dec!(90000);
/// Allowance per dependent child
pub const DEPENDENT_CHILD_ALLOWANCE: Decimal = dec!(4800);
/// Allowance per child in tertiary education
pub const TERTIARY_EDUCATION_ALLOWANCE: Decimal = dec!(12000);

fn saturating_sum<I: IntoIterator<Item = Decimal>>(amounts: I) -> Decimal {
    amounts
        .into_iter()
        .fold(Decimal::ZERO, |total, amount| total.saturating_add(amount))
}

/// Parse a user-entered amount, treating anything unparseable as zero.
pub fn parse_amount(s: &str) -> Decimal {
    let s = s.trim();
    if s.is_empty() {
        return Decimal::ZERO;
    }
    s.parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(s))
        .unwrap_or_else(|_| {
            log::debug!("Unparseable amount '{}' treated as zero", s);
            Decimal::ZERO
        })
}

fn lenient_amount<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => parse_amount(&n.to_string()),
        serde_json::Value::String(s) => parse_amount(&s),
        _ => Decimal::ZERO,
    })
}

fn lenient_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let amount = lenient_amount(deserializer)?;
    Ok(amount.trunc().to_u32().unwrap_or(0))
}

// ---------------------------------------------------------------------------
// Personal
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema, FieldSchema)]
#[serde(default)]
pub struct PersonalAllowances {
    /// Standard personal allowance of TT$90,000 per year
    #[serde(deserialize_with = "lenient_amount")]
    #[schemars(with = "f64")]
    pub personal_allowance: Decimal,
    /// Up to TT$90,000 if your spouse earns less than TT$90,000
    #[serde(deserialize_with = "lenient_amount")]
    #[schemars(with = "f64")]
    pub spouse_allowance: Decimal,
    /// Children under 18 or full-time students under 25
    #[serde(deserialize_with = "lenient_count")]
    #[schemars(with = "u32")]
    pub dependent_children: u32,
    /// Allowance claimed for dependent children, TT$4,800 per child when a count is given
    #[serde(deserialize_with = "lenient_amount")]
    #[schemars(with = "f64")]
    pub dependent_children_amount: Decimal,
    /// Children enrolled in approved tertiary institutions
    #[serde(deserialize_with = "lenient_count")]
    #[schemars(with = "u32")]
    pub tertiary_education: u32,
    /// Allowance claimed for tertiary education, TT$12,000 per student when a count is given
    #[serde(deserialize_with = "lenient_amount")]
    #[schemars(with = "f64")]
    pub tertiary_education_amount: Decimal,
    /// Annual life insurance premiums (maximum TT$50,000)
    #[serde(deserialize_with = "lenient_amount")]
    #[schemars(with = "f64")]
    pub life_insurance: Decimal,
    /// Annual health or medical insurance premiums
    #[serde(deserialize_with = "lenient_amount")]
    #[schemars(with = "f64")]
    pub health_insurance: Decimal,
    /// Interest on an approved mortgage for your primary residence (maximum TT$25,000)
    #[serde(deserialize_with = "lenient_amount")]
    #[schemars(with = "f64")]
    pub mortgage_interest: Decimal,
}

impl Default for PersonalAllowances {
    fn default() -> Self {
        PersonalAllowances {
            personal_allowance: PERSONAL_ALLOWANCE,
            spouse_allowance: Decimal::ZERO,
            dependent_children: 0,
            dependent_children_amount: Decimal::ZERO,
            tertiary_education: 0,
            tertiary_education_amount: Decimal::ZERO,
            life_insurance: Decimal::ZERO,
            health_insurance: Decimal::ZERO,
            mortgage_interest: Decimal::ZERO,
        }
    }
}

/// Allowance for a per-head count, or the stated amount when no count is given
fn per_head_allowance(count: u32, rate: Decimal, stated: Decimal) -> Decimal {
    if count > 0 {
        Decimal::from(count) * rate
    } else {
        stated
    }
}

impl PersonalAllowances {
    pub fn dependent_children_allowance(&self) -> Decimal {
        per_head_allowance(
            self.dependent_children,
            DEPENDENT_CHILD_ALLOWANCE,
            self.dependent_children_amount,
        )
    }

    pub fn tertiary_education_allowance(&self) -> Decimal {
        per_head_allowance(
            self.tertiary_education,
            TERTIARY_EDUCATION_ALLOWANCE,
            self.tertiary_education_amount,
        )
    }

    pub fn total(&self) -> Decimal {
        saturating_sum([
            self.personal_allowance,
            self.spouse_allowance,
            self.dependent_children_allowance(),
            self.tertiary_education_allowance(),
            self.life_insurance.min(LIFE_INSURANCE_CAP),
            self.health_insurance,
            self.mortgage_interest.min(MORTGAGE_INTEREST_CAP),
        ])
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema, FieldSchema)]
#[serde(default)]
pub struct PersonalDeductions {
    /// Contributions to approved pension plans and retirement funds
    #[serde(deserialize_with = "lenient_amount")]
    #[schemars(with = "f64")]
    pub approved_pension: Decimal,
    /// Employee contributions to the National Insurance Scheme
    #[serde(deserialize_with = "lenient_amount")]
    #[schemars(with = "f64")]
    pub national_insurance: Decimal,
    /// Tuition, books and materials for approved courses
    #[serde(deserialize_with = "lenient_amount")]
    #[schemars(with = "f64")]
    pub education_expenses: Decimal,
    /// Unreimbursed medical and dental expenses
    #[serde(deserialize_with = "lenient_amount")]
    #[schemars(with = "f64")]
    pub medical_expenses: Decimal,
    /// Donations to approved charitable organisations
    #[serde(deserialize_with = "lenient_amount")]
    #[schemars(with = "f64")]
    pub charitable_donations: Decimal,
}

impl PersonalDeductions {
    pub fn total(&self) -> Decimal {
        saturating_sum([
            self.approved_pension,
            self.national_insurance,
            self.education_expenses,
            self.medical_expenses,
            self.charitable_donations,
        ])
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema, FieldSchema)]
#[serde(default)]
pub struct PersonalTaxForm {
    /// Salary, wages, bonuses, rental income, dividends and other taxable income
    #[serde(deserialize_with = "lenient_amount")]
    #[schemars(with = "f64")]
    pub annual_income: Decimal,
    /// Tax allowances
    pub allowances: PersonalAllowances,
    /// Tax deductions
    pub deductions: PersonalDeductions,
}

impl PersonalTaxForm {
    pub fn to_input(&self) -> PersonalTaxInput {
        PersonalTaxInput {
            annual_income: self.annual_income,
            allowances: self.allowances.total(),
            other_deductions: self.deductions.total(),
        }
    }
}

// ---------------------------------------------------------------------------
// Sole trader
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema, FieldSchema)]
#[serde(default)]
pub struct SoleTraderBusinessInfo {
    /// All income from sales, services and business operations before expenses
    #[serde(deserialize_with = "lenient_amount")]
    #[schemars(with = "f64")]
    pub annual_revenue: Decimal,
    /// Raw materials, inventory and manufacturing costs
    #[serde(deserialize_with = "lenient_amount")]
    #[schemars(with = "f64")]
    pub cost_of_goods_sold: Decimal,
    /// General operating expenses
    #[serde(deserialize_with = "lenient_amount")]
    #[schemars(with = "f64")]
    pub operating_expenses: Decimal,
    /// Wages, salaries and bonuses paid to employees, excluding the owner
    #[serde(deserialize_with = "lenient_amount")]
    #[schemars(with = "f64")]
    pub employee_wages: Decimal,
    /// Business premises rent, equipment leasing and property costs
    #[serde(deserialize_with = "lenient_amount")]
    #[schemars(with = "f64")]
    pub rent_expenses: Decimal,
    /// Electricity, water, internet and phone
    #[serde(deserialize_with = "lenient_amount")]
    #[schemars(with = "f64")]
    pub utilities_expenses: Decimal,
    /// Marketing, advertising and website costs
    #[serde(deserialize_with = "lenient_amount")]
    #[schemars(with = "f64")]
    pub advertising_expenses: Decimal,
    /// Fuel, maintenance and insurance for business vehicles
    #[serde(deserialize_with = "lenient_amount")]
    #[schemars(with = "f64")]
    pub vehicle_expenses: Decimal,
    /// Stationery, computer equipment and software
    #[serde(deserialize_with = "lenient_amount")]
    #[schemars(with = "f64")]
    pub office_supplies: Decimal,
    /// Accounting, legal and consulting fees
    #[serde(deserialize_with = "lenient_amount")]
    #[schemars(with = "f64")]
    pub professional_fees: Decimal,
    /// Business liability and property insurance premiums
    #[serde(deserialize_with = "lenient_amount")]
    #[schemars(with = "f64")]
    pub insurance_expenses: Decimal,
    /// Depreciation on equipment, vehicles and property
    #[serde(deserialize_with = "lenient_amount")]
    #[schemars(with = "f64")]
    pub depreciation_expenses: Decimal,
    /// Bank charges, licences, permits and other allowable expenses
    #[serde(deserialize_with = "lenient_amount")]
    #[schemars(with = "f64")]
    pub other_expenses: Decimal,
}

impl SoleTraderBusinessInfo {
    pub fn total_expenses(&self) -> Decimal {
        saturating_sum([
            self.cost_of_goods_sold,
            self.operating_expenses,
            self.employee_wages,
            self.rent_expenses,
            self.utilities_expenses,
            self.advertising_expenses,
            self.vehicle_expenses,
            self.office_supplies,
            self.professional_fees,
            self.insurance_expenses,
            self.depreciation_expenses,
            self.other_expenses,
        ])
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema, FieldSchema)]
#[serde(default)]
pub struct SoleTraderEmploymentInfo {
    /// Employees on payroll, excluding the owner
    #[serde(deserialize_with = "lenient_count")]
    #[schemars(with = "u32")]
    pub number_of_employees: u32,
    /// Wages, salaries and benefits paid to all employees
    #[serde(deserialize_with = "lenient_amount")]
    #[schemars(with = "f64")]
    pub annual_payroll: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema, FieldSchema)]
#[serde(default)]
pub struct SoleTraderRegistrationInfo {
    /// Registered for VAT (required above TT$500,000 annual revenue)
    pub has_vat_registration: bool,
    /// Holds a Board of Inland Revenue certificate of registration
    pub has_bir_certificate: bool,
    /// Date business operations commenced
    pub business_start_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema, FieldSchema)]
#[serde(default)]
pub struct SoleTraderTaxForm {
    /// Revenue and expenses
    pub business_info: SoleTraderBusinessInfo,
    /// Employees and payroll
    pub employment_info: SoleTraderEmploymentInfo,
    /// VAT and BIR registration
    pub registration_info: SoleTraderRegistrationInfo,
}

impl SoleTraderTaxForm {
    pub fn to_input(&self) -> SoleTraderTaxInput {
        SoleTraderTaxInput {
            annual_revenue: self.business_info.annual_revenue,
            business_expenses: self.business_info.total_expenses(),
            number_of_employees: self.employment_info.number_of_employees,
            has_vat_registration: self.registration_info.has_vat_registration,
        }
    }
}

// ---------------------------------------------------------------------------
// Corporation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema, FieldSchema)]
#[serde(default)]
pub struct CorporationFinancials {
    /// Total revenue from all business activities before deductions
    #[serde(deserialize_with = "lenient_amount")]
    #[schemars(with = "f64")]
    pub gross_sales: Decimal,
    /// Raw materials, direct labour and manufacturing overhead
    #[serde(deserialize_with = "lenient_amount")]
    #[schemars(with = "f64")]
    pub cost_of_sales: Decimal,
    /// Administration, salaries, rent, utilities and marketing
    #[serde(deserialize_with = "lenient_amount")]
    #[schemars(with = "f64")]
    pub operating_expenses: Decimal,
    /// Depreciation of buildings, equipment, vehicles and machinery
    #[serde(deserialize_with = "lenient_amount")]
    #[schemars(with = "f64")]
    pub depreciation: Decimal,
    /// Interest on business loans and credit facilities
    #[serde(deserialize_with = "lenient_amount")]
    #[schemars(with = "f64")]
    pub interest_expenses: Decimal,
    /// Investment income, gains on asset sales and other non-operating income
    #[serde(deserialize_with = "lenient_amount")]
    #[schemars(with = "f64")]
    pub other_income: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema, FieldSchema)]
#[serde(default)]
pub struct CorporationDeductions {
    /// Tax depreciation on qualifying capital assets
    #[serde(deserialize_with = "lenient_amount")]
    #[schemars(with = "f64")]
    pub capital_allowances: Decimal,
    /// Accumulated losses from previous years offset against current income
    #[serde(deserialize_with = "lenient_amount")]
    #[schemars(with = "f64")]
    pub losses_carried_forward: Decimal,
    /// Donations to approved charitable organisations
    #[serde(deserialize_with = "lenient_amount")]
    #[schemars(with = "f64")]
    pub donations_to_charities: Decimal,
    /// Qualifying research and development expenses
    #[serde(deserialize_with = "lenient_amount")]
    #[schemars(with = "f64")]
    pub research_and_development: Decimal,
    /// Approved employee training programmes
    #[serde(deserialize_with = "lenient_amount")]
    #[schemars(with = "f64")]
    pub training_expenses: Decimal,
    /// Environmental conservation and pollution control
    #[serde(deserialize_with = "lenient_amount")]
    #[schemars(with = "f64")]
    pub environmental_expenses: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema, FieldSchema)]
#[serde(default)]
pub struct CorporationDetails {
    /// Oil, gas or petrochemical company (35% corporation tax)
    pub is_petrochemical: bool,
    /// Manufacturing business
    pub is_manufacturing: bool,
    /// Recently established business
    pub is_new_business: bool,
    /// Complete years the company has been operating
    #[serde(deserialize_with = "lenient_count")]
    #[schemars(with = "u32")]
    pub years_in_operation: u32,
    /// Has export sales
    pub has_export_sales: bool,
    /// Percentage of total sales from exports
    #[serde(deserialize_with = "lenient_amount")]
    #[schemars(with = "f64")]
    pub export_sales_percentage: Decimal,
    /// Revenue under TT$1M
    pub is_small_business: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema, FieldSchema)]
#[serde(default)]
pub struct CorporationTaxForm {
    /// Financial information for the year
    pub financials: CorporationFinancials,
    /// Deductions and allowances
    pub deductions: CorporationDeductions,
    /// Company details
    pub details: CorporationDetails,
}

impl CorporationTaxForm {
    pub fn to_input(&self) -> CorporationTaxInput {
        let financials = &self.financials;
        let deductions = &self.deductions;
        let allowable_deductions = saturating_sum([
            financials.cost_of_sales,
            financials.operating_expenses,
            financials.depreciation,
            financials.interest_expenses,
            deductions.capital_allowances,
            deductions.losses_carried_forward,
            deductions.donations_to_charities,
            deductions.research_and_development,
            deductions.training_expenses,
            deductions.environmental_expenses,
        ]);

        CorporationTaxInput {
            gross_sales: financials.gross_sales.saturating_add(financials.other_income),
            allowable_deductions,
            is_petrochemical: self.details.is_petrochemical,
            is_new_business: self.details.is_new_business,
            years_in_operation: self.details.years_in_operation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_amount_coerces_failures_to_zero() {
        assert_eq!(parse_amount("1234.50"), dec!(1234.50));
        assert_eq!(parse_amount("  90000 "), dec!(90000));
        assert_eq!(parse_amount("1e6"), dec!(1000000));
        assert_eq!(parse_amount(""), Decimal::ZERO);
        assert_eq!(parse_amount("abc"), Decimal::ZERO);
    }

    #[test]
    fn personal_form_sums_allowances_and_deductions() {
        let form = PersonalTaxForm {
            annual_income: dec!(400000),
            allowances: PersonalAllowances {
                personal_allowance: dec!(90000),
                spouse_allowance: dec!(10000),
                dependent_children: 2,
                dependent_children_amount: dec!(5000),
                tertiary_education: 1,
                tertiary_education_amount: dec!(3000),
                life_insurance: dec!(2000),
                health_insurance: dec!(1000),
                mortgage_interest: dec!(4000),
            },
            deductions: PersonalDeductions {
                approved_pension: dec!(6000),
                national_insurance: dec!(4000),
                education_expenses: dec!(1000),
                medical_expenses: dec!(500),
                charitable_donations: dec!(500),
            },
        };
        let input = form.to_input();
        assert_eq!(input.annual_income, dec!(400000));
        // counts override the stated amounts: 2 x 4,800 and 1 x 12,000
        assert_eq!(input.allowances, dec!(128600));
        assert_eq!(input.other_deductions, dec!(12000));
    }

    #[test]
    fn personal_form_caps_insurance_and_mortgage() {
        let allowances = PersonalAllowances {
            personal_allowance: Decimal::ZERO,
            life_insurance: dec!(80000),
            mortgage_interest: dec!(30000),
            ..Default::default()
        };
        assert_eq!(allowances.total(), dec!(75000));
    }

    #[test]
    fn personal_allowance_defaults_to_standard_amount() {
        assert_eq!(PersonalAllowances::default().total(), dec!(90000));

        let form: PersonalTaxForm = serde_json::from_str(r#"{"annual_income": 500000}"#).unwrap();
        assert_eq!(form.allowances.personal_allowance, dec!(90000));
        assert_eq!(form.to_input().allowances, dec!(90000));
    }

    #[test]
    fn child_allowances_follow_counts() {
        let json = r#"{
            "annual_income": 500000,
            "allowances": { "dependent_children": 2, "tertiary_education": 1 }
        }"#;
        let form: PersonalTaxForm = serde_json::from_str(json).unwrap();
        assert_eq!(form.allowances.dependent_children_allowance(), dec!(9600));
        assert_eq!(form.allowances.tertiary_education_allowance(), dec!(12000));
        assert_eq!(form.to_input().allowances, dec!(111600));
    }

    #[test]
    fn stated_child_amounts_used_without_counts() {
        let allowances = PersonalAllowances {
            dependent_children_amount: dec!(4800),
            tertiary_education_amount: dec!(6000),
            ..Default::default()
        };
        assert_eq!(allowances.total(), dec!(100800));
    }

    #[test]
    fn huge_form_amounts_saturate() {
        let deductions = PersonalDeductions {
            approved_pension: Decimal::MAX,
            national_insurance: Decimal::MAX,
            ..Default::default()
        };
        assert_eq!(deductions.total(), Decimal::MAX);

        let form = CorporationTaxForm {
            financials: CorporationFinancials {
                gross_sales: Decimal::MAX,
                other_income: Decimal::MAX,
                cost_of_sales: Decimal::MAX,
                ..Default::default()
            },
            deductions: CorporationDeductions {
                capital_allowances: Decimal::MAX,
                ..Default::default()
            },
            ..Default::default()
        };
        let input = form.to_input();
        assert_eq!(input.gross_sales, Decimal::MAX);
        assert_eq!(input.allowable_deductions, Decimal::MAX);

        let business_info = SoleTraderBusinessInfo {
            cost_of_goods_sold: Decimal::MAX,
            other_expenses: dec!(1),
            ..Default::default()
        };
        assert_eq!(business_info.total_expenses(), Decimal::MAX);
    }

    #[test]
    fn sole_trader_form_sums_expenses() {
        let form = SoleTraderTaxForm {
            business_info: SoleTraderBusinessInfo {
                annual_revenue: dec!(600000),
                cost_of_goods_sold: dec!(100000),
                employee_wages: dec!(80000),
                rent_expenses: dec!(24000),
                other_expenses: dec!(1000),
                ..Default::default()
            },
            employment_info: SoleTraderEmploymentInfo {
                number_of_employees: 3,
                annual_payroll: dec!(80000),
            },
            registration_info: SoleTraderRegistrationInfo {
                has_vat_registration: true,
                has_bir_certificate: true,
                business_start_date: NaiveDate::from_ymd_opt(2020, 1, 15),
            },
        };
        let input = form.to_input();
        assert_eq!(input.annual_revenue, dec!(600000));
        assert_eq!(input.business_expenses, dec!(205000));
        assert_eq!(input.number_of_employees, 3);
        assert!(input.has_vat_registration);
    }

    #[test]
    fn corporation_form_adds_other_income_to_gross_sales() {
        let form = CorporationTaxForm {
            financials: CorporationFinancials {
                gross_sales: dec!(5000000),
                cost_of_sales: dec!(2000000),
                operating_expenses: dec!(500000),
                depreciation: dec!(100000),
                interest_expenses: dec!(50000),
                other_income: dec!(250000),
            },
            deductions: CorporationDeductions {
                capital_allowances: dec!(75000),
                losses_carried_forward: dec!(25000),
                training_expenses: dec!(10000),
                ..Default::default()
            },
            details: CorporationDetails {
                is_petrochemical: true,
                is_new_business: true,
                years_in_operation: 1,
                is_manufacturing: true,
                ..Default::default()
            },
        };
        let input = form.to_input();
        assert_eq!(input.gross_sales, dec!(5250000));
        assert_eq!(input.allowable_deductions, dec!(2760000));
        assert!(input.is_petrochemical);
        assert!(input.is_business_levy_exempt());
    }

    #[test]
    fn lenient_json_amounts() {
        let json = r#"{
            "annual_income": "250000",
            "allowances": { "personal_allowance": 90000, "spouse_allowance": "n/a" },
            "deductions": { "approved_pension": null }
        }"#;
        let form: PersonalTaxForm = serde_json::from_str(json).unwrap();
        assert_eq!(form.annual_income, dec!(250000));
        assert_eq!(form.allowances.personal_allowance, dec!(90000));
        assert_eq!(form.allowances.spouse_allowance, Decimal::ZERO);
        assert_eq!(form.deductions.approved_pension, Decimal::ZERO);
    }

    #[test]
    fn lenient_json_counts() {
        let json = r#"{ "details": { "years_in_operation": "2", "is_new_business": true } }"#;
        let form: CorporationTaxForm = serde_json::from_str(json).unwrap();
        assert_eq!(form.details.years_in_operation, 2);

        let json = r#"{ "employment_info": { "number_of_employees": -4 } }"#;
        let form: SoleTraderTaxForm = serde_json::from_str(json).unwrap();
        assert_eq!(form.employment_info.number_of_employees, 0);
    }
}
