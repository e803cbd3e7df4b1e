//! Corporation command - corporation tax and levies on gross sales

use crate::cmd::report::{print_result, OutputArgs};
use clap::Args;
use rust_decimal::Decimal;
use ttax::core::{calculate_corporation_tax, CorporationTaxInput};

#[derive(Args, Debug)]
pub struct CorporationCommand {
    /// Gross sales and receipts, including other income (TT$)
    #[arg(short, long, allow_hyphen_values = true)]
    gross_sales: Decimal,

    /// Total allowable deductions (TT$)
    #[arg(short, long, default_value_t = Decimal::ZERO, allow_hyphen_values = true)]
    deductions: Decimal,

    /// Oil, gas or petrochemical company (35% rate)
    #[arg(long)]
    petrochemical: bool,

    /// Newly established business
    #[arg(long)]
    new_business: bool,

    /// Complete years in operation
    #[arg(short, long, default_value_t = 0)]
    years: u32,

    #[command(flatten)]
    output: OutputArgs,
}

impl CorporationCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let input = CorporationTaxInput {
            gross_sales: self.gross_sales,
            allowable_deductions: self.deductions,
            is_petrochemical: self.petrochemical,
            is_new_business: self.new_business,
            years_in_operation: self.years,
        };
        log::info!(
            "Calculating corporation tax for gross sales {} (levy exempt: {})",
            input.gross_sales,
            input.is_business_levy_exempt()
        );
        let result = calculate_corporation_tax(&input);
        print_result(&result, self.output.format)
    }
}
