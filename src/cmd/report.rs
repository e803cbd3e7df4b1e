//! Rendering of calculation results as a table, JSON or CSV

use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use serde::Serialize;
use std::io;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};
use ttax::core::TaxCalculationResult;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

#[derive(Args, Debug, Clone, Copy)]
pub struct OutputArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Tabled)]
struct BreakdownRow {
    #[tabled(rename = "Item")]
    label: String,
    #[tabled(rename = "Rate")]
    rate: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Result for JSON output, amounts as two-decimal strings
#[derive(Debug, Serialize)]
struct ResultView {
    category: String,
    breakdown: Vec<LineView>,
    total_tax: String,
    required_documents: Vec<String>,
}

#[derive(Debug, Serialize)]
struct LineView {
    label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    rate: Option<String>,
    amount: String,
}

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    category: String,
    label: &'a str,
    rate: &'a str,
    amount: String,
}

impl From<&TaxCalculationResult> for ResultView {
    fn from(result: &TaxCalculationResult) -> Self {
        ResultView {
            category: category_key(result),
            breakdown: result
                .breakdown
                .iter()
                .map(|item| LineView {
                    label: item.label.clone(),
                    rate: item.rate.clone(),
                    amount: two_places(item.amount),
                })
                .collect(),
            total_tax: two_places(result.total_tax),
            required_documents: result.required_documents.clone(),
        }
    }
}

fn category_key(result: &TaxCalculationResult) -> String {
    serde_json::to_value(result.category)
        .ok()
        .and_then(|v| v.as_str().map(str::to_string))
        .unwrap_or_default()
}

/// Print a single calculation result
pub fn print_result(result: &TaxCalculationResult, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => {
            print_table(result);
            Ok(())
        }
        OutputFormat::Json => {
            let view = ResultView::from(result);
            println!("{}", serde_json::to_string_pretty(&view)?);
            Ok(())
        }
        OutputFormat::Csv => write_csv(std::slice::from_ref(result), io::stdout()),
    }
}

/// Print several results; JSON output is always an array
pub fn print_results(results: &[TaxCalculationResult], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => {
            for result in results {
                print_table(result);
            }
            Ok(())
        }
        OutputFormat::Json => {
            let views: Vec<ResultView> = results.iter().map(ResultView::from).collect();
            println!("{}", serde_json::to_string_pretty(&views)?);
            Ok(())
        }
        OutputFormat::Csv => write_csv(results, io::stdout()),
    }
}

fn print_table(result: &TaxCalculationResult) {
    let rows: Vec<BreakdownRow> = result
        .breakdown
        .iter()
        .map(|item| BreakdownRow {
            label: item.label.clone(),
            rate: item.rate.clone().unwrap_or_default(),
            amount: format_ttd(item.amount),
        })
        .collect();

    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(2..)).with(Alignment::right()))
        .to_string();

    println!();
    println!("TAX CALCULATION SUMMARY ({})", result.category);
    println!();
    println!("{}", table);
    println!();
    println!("TOTAL TAX: {}", format_ttd(result.total_tax));
    println!();
    println!("REQUIRED DOCUMENTS");
    for (i, document) in result.required_documents.iter().enumerate() {
        println!("  {}. {}", i + 1, document);
    }
    println!();
}

fn write_csv<W: io::Write>(results: &[TaxCalculationResult], writer: W) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for result in results {
        let category = category_key(result);
        for item in &result.breakdown {
            wtr.serialize(CsvRow {
                category: category.clone(),
                label: &item.label,
                rate: item.rate.as_deref().unwrap_or(""),
                amount: two_places(item.amount),
            })?;
        }
        wtr.serialize(CsvRow {
            category,
            label: "Total Tax",
            rate: "",
            amount: two_places(result.total_tax),
        })?;
    }
    wtr.flush()?;
    Ok(())
}

/// Plain two-decimal amount for JSON and CSV. Zero never carries a sign.
fn two_places(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    if rounded.is_zero() {
        return format!("{:.2}", Decimal::ZERO);
    }
    format!("{:.2}", rounded)
}

/// Format as Trinidad & Tobago dollars, e.g. TT$1,234.50
pub fn format_ttd(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let digits = format!("{:.2}", rounded.abs());
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    format!("{}TT${}.{}", sign, group_thousands(whole), fraction)
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
