pub mod calc;
pub mod corporation;
pub mod personal;
pub mod rates;
pub mod report;
pub mod schema;
pub mod sole_trader;

use anyhow::Context;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// Open a JSON document file, or stdin with "-"
pub fn open_input(path: &Path) -> anyhow::Result<Box<dyn Read>> {
    if path.as_os_str() == "-" {
        log::debug!("Reading input from stdin");
        Ok(Box::new(io::stdin().lock()))
    } else {
        log::debug!("Reading input from {}", path.display());
        let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
        Ok(Box::new(BufReader::new(file)))
    }
}
