use super::corporation::CorporationTaxInput;
use super::forms::{
    CorporationDeductions, CorporationDetails, CorporationFinancials, CorporationTaxForm,
    PersonalAllowances, PersonalDeductions, PersonalTaxForm, SoleTraderBusinessInfo,
    SoleTraderEmploymentInfo, SoleTraderRegistrationInfo, SoleTraderTaxForm,
};
use super::personal::PersonalTaxInput;
use super::sole_trader::SoleTraderTaxInput;

/// Description of a single record field, generated by `#[derive(FieldSchema)]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldInfo {
    pub name: &'static str,
    pub type_name: &'static str,
    pub optional: bool,
    pub description: &'static str,
}

/// A named record and its fields
#[derive(Debug, Clone, Copy)]
pub struct RecordSchema {
    pub record: &'static str,
    pub fields: &'static [FieldInfo],
}

/// Fields of the flattened calculation inputs
pub fn describe_inputs() -> Vec<RecordSchema> {
    vec![
        RecordSchema {
            record: "personal",
            fields: PersonalTaxInput::field_schema(),
        },
        RecordSchema {
            record: "sole-trader",
            fields: SoleTraderTaxInput::field_schema(),
        },
        RecordSchema {
            record: "corporation",
            fields: CorporationTaxInput::field_schema(),
        },
    ]
}

/// Fields of the detailed forms, one entry per form section
pub fn describe_forms() -> Vec<RecordSchema> {
    vec![
        RecordSchema {
            record: "personal",
            fields: PersonalTaxForm::field_schema(),
        },
        RecordSchema {
            record: "personal.allowances",
            fields: PersonalAllowances::field_schema(),
        },
        RecordSchema {
            record: "personal.deductions",
            fields: PersonalDeductions::field_schema(),
        },
        RecordSchema {
            record: "sole-trader",
            fields: SoleTraderTaxForm::field_schema(),
        },
        RecordSchema {
            record: "sole-trader.business_info",
            fields: SoleTraderBusinessInfo::field_schema(),
        },
        RecordSchema {
            record: "sole-trader.employment_info",
            fields: SoleTraderEmploymentInfo::field_schema(),
        },
        RecordSchema {
            record: "sole-trader.registration_info",
            fields: SoleTraderRegistrationInfo::field_schema(),
        },
        RecordSchema {
            record: "corporation",
            fields: CorporationTaxForm::field_schema(),
        },
        RecordSchema {
            record: "corporation.financials",
            fields: CorporationFinancials::field_schema(),
        },
        RecordSchema {
            record: "corporation.deductions",
            fields: CorporationDeductions::field_schema(),
        },
        RecordSchema {
            record: "corporation.details",
            fields: CorporationDetails::field_schema(),
        },
    ]
}
