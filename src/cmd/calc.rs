//! Calc command - calculate every input (or form) document in a JSON file

use crate::cmd::open_input;
use crate::cmd::report::{print_results, OutputArgs};
use clap::Args;
use std::path::PathBuf;
use ttax::core::{read_forms_json, read_inputs_json, TaxCalculationResult, TaxInput};

#[derive(Args, Debug)]
pub struct CalcCommand {
    /// JSON file with one document or an array of them. Reads from stdin if not specified.
    #[arg(default_value = "-")]
    file: PathBuf,

    /// Documents are detailed forms rather than flattened inputs
    #[arg(long)]
    form: bool,

    #[command(flatten)]
    output: OutputArgs,
}

impl CalcCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let reader = open_input(&self.file)?;
        let inputs: Vec<TaxInput> = if self.form {
            read_forms_json(reader)?
                .iter()
                .map(|form| form.to_input())
                .collect()
        } else {
            read_inputs_json(reader)?
        };

        let results: Vec<TaxCalculationResult> = inputs
            .iter()
            .map(|input| {
                log::debug!("Calculating {:?}", input);
                input.calculate()
            })
            .collect();
        log::info!("Calculated {} result(s)", results.len());

        print_results(&results, self.output.format)
    }
}
