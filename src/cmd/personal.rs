//! Personal command - income tax and health surcharge for an individual

use crate::cmd::report::{print_result, OutputArgs};
use clap::Args;
use rust_decimal::Decimal;
use ttax::core::{calculate_personal_tax, PersonalTaxInput};

#[derive(Args, Debug)]
pub struct PersonalCommand {
    /// Gross annual income (TT$)
    #[arg(short, long, allow_hyphen_values = true)]
    income: Decimal,

    /// Total allowances claimed (TT$)
    #[arg(short, long, default_value_t = Decimal::ZERO, allow_hyphen_values = true)]
    allowances: Decimal,

    /// Total other deductions (TT$)
    #[arg(short, long, default_value_t = Decimal::ZERO, allow_hyphen_values = true)]
    deductions: Decimal,

    #[command(flatten)]
    output: OutputArgs,
}

impl PersonalCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let input = PersonalTaxInput {
            annual_income: self.income,
            allowances: self.allowances,
            other_deductions: self.deductions,
        };
        log::info!("Calculating personal tax for income {}", input.annual_income);
        let result = calculate_personal_tax(&input);
        print_result(&result, self.output.format)
    }
}
