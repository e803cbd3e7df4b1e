use clap::{Parser, Subcommand};

mod cmd;

/// Trinidad & Tobago Tax Estimator
#[derive(Parser, Debug)]
#[command(name = "ttax", version, about)]
struct Opts {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Estimate personal income tax and health surcharge
    Personal(cmd::personal::PersonalCommand),
    /// Estimate tax for a sole trader
    SoleTrader(cmd::sole_trader::SoleTraderCommand),
    /// Estimate corporation tax and levies
    Corporation(cmd::corporation::CorporationCommand),
    /// Calculate input or form documents from a JSON file
    Calc(cmd::calc::CalcCommand),
    /// Show the statutory rate table
    Rates(cmd::rates::RatesCommand),
    /// Print the expected input formats
    Schema(cmd::schema::SchemaCommand),
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let opts = Opts::parse();
    match opts.command {
        Command::Personal(personal) => personal.exec(),
        Command::SoleTrader(sole_trader) => sole_trader.exec(),
        Command::Corporation(corporation) => corporation.exec(),
        Command::Calc(calc) => calc.exec(),
        Command::Rates(rates) => rates.exec(),
        Command::Schema(schema) => schema.exec(),
    }
}
