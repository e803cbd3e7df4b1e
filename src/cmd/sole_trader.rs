//! Sole trader command - income tax, business levy, health surcharge and VAT

use crate::cmd::report::{print_result, OutputArgs};
use clap::Args;
use rust_decimal::Decimal;
use ttax::core::{calculate_sole_trader_tax, SoleTraderTaxInput};

#[derive(Args, Debug)]
pub struct SoleTraderCommand {
    /// Gross annual revenue (TT$)
    #[arg(short, long, allow_hyphen_values = true)]
    revenue: Decimal,

    /// Total business expenses (TT$)
    #[arg(short, long, default_value_t = Decimal::ZERO, allow_hyphen_values = true)]
    expenses: Decimal,

    /// Number of employees, excluding the owner
    #[arg(short = 'n', long, default_value_t = 0)]
    employees: u32,

    /// Registered for VAT
    #[arg(long)]
    vat: bool,

    #[command(flatten)]
    output: OutputArgs,
}

impl SoleTraderCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let input = SoleTraderTaxInput {
            annual_revenue: self.revenue,
            business_expenses: self.expenses,
            number_of_employees: self.employees,
            has_vat_registration: self.vat,
        };
        log::info!(
            "Calculating sole trader tax for revenue {} (VAT registered: {})",
            input.annual_revenue,
            input.has_vat_registration
        );
        let result = calculate_sole_trader_tax(&input);
        print_result(&result, self.output.format)
    }
}
