//! Schema command - print expected input formats

use clap::Args;
use schemars::schema_for;
use ttax::core::{describe_forms, describe_inputs, RecordSchema, TaxForm, TaxInput};

#[derive(Args, Debug)]
pub struct SchemaCommand {
    /// What to print
    #[arg(value_enum, default_value = "json-schema")]
    format: SchemaFormat,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum SchemaFormat {
    /// JSON Schema for calculation input documents
    JsonSchema,
    /// JSON Schema for detailed form documents
    FormJsonSchema,
    /// Field descriptions of the calculation inputs
    Fields,
    /// Field descriptions of the detailed forms
    FormFields,
}

impl SchemaCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        match self.format {
            SchemaFormat::JsonSchema => {
                let schema = schema_for!(TaxInput);
                println!("{}", serde_json::to_string_pretty(&schema)?);
            }
            SchemaFormat::FormJsonSchema => {
                let schema = schema_for!(TaxForm);
                println!("{}", serde_json::to_string_pretty(&schema)?);
            }
            SchemaFormat::Fields => print_fields("Calculation Input Format", &describe_inputs()),
            SchemaFormat::FormFields => print_fields("Form Input Format", &describe_forms()),
        }
        Ok(())
    }
}

fn print_fields(title: &str, records: &[RecordSchema]) {
    println!("{}", title);
    println!("{}", "=".repeat(title.len()));
    for record in records {
        println!();
        println!("[{}]", record.record);
        for field in record.fields {
            let kind = if field.optional {
                format!("{}, optional", field.type_name)
            } else {
                field.type_name.to_string()
            };
            println!("  {:28} ({:20})  {}", field.name, kind, field.description);
        }
    }
    println!();
    println!("Documents are tagged with \"category\": personal, sole-trader or corporation");
}
