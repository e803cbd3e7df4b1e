//! Rates command - statutory rate table

use clap::Args;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};
use ttax::core::rates::percent_label;
use ttax::core::rate_table;

#[derive(Args, Debug)]
pub struct RatesCommand {
    /// Output as JSON instead of formatted table
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Tabled, Serialize)]
struct RateRow {
    #[tabled(rename = "Tax")]
    name: &'static str,
    #[tabled(rename = "Rate")]
    rate: String,
    #[tabled(rename = "Applies To")]
    applies_to: &'static str,
}

impl RatesCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let rows: Vec<RateRow> = rate_table()
            .into_iter()
            .map(|entry| RateRow {
                name: entry.name,
                rate: percent_label(entry.rate),
                applies_to: entry.applies_to,
            })
            .collect();

        if self.json {
            println!("{}", serde_json::to_string_pretty(&rows)?);
        } else {
            let table = Table::new(&rows)
                .with(Style::rounded())
                .with(Modify::new(Columns::one(1)).with(Alignment::right()))
                .to_string();
            println!();
            println!("TRINIDAD & TOBAGO TAX RATES");
            println!();
            println!("{}", table);
            println!();
        }
        Ok(())
    }
}
