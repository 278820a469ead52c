//! Trade calculator CLI
//!
//! Reads a scenario JSON document (file argument, or stdin when the
//! argument is `-` or absent), computes it against the seed catalog and
//! prints the result JSON. No domain logic lives here.
//!
//! ```text
//! trade-calc scenario.json
//! echo '{"destination":"LUB","volume_mt":700,"buy_price_per_mt":530}' | trade-calc
//! ```

use std::io::Read;
use std::process::ExitCode;

use trade_calculator_core_rs::{Scenario, TradeCalculator};

fn run() -> Result<(), String> {
    let arg = std::env::args().nth(1);

    let input = match arg.as_deref() {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| format!("failed to read stdin: {}", e))?;
            buf
        }
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| format!("failed to read {}: {}", path, e))?,
    };

    let scenario: Scenario =
        serde_json::from_str(&input).map_err(|e| format!("invalid scenario: {}", e))?;

    let calc = TradeCalculator::new();
    let result = calc
        .compute(&scenario)
        .map_err(|e| format!("compute failed: {}", e))?;

    let json = serde_json::to_string_pretty(&result)
        .map_err(|e| format!("failed to serialize result: {}", e))?;
    println!("{}", json);
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {}", message);
            ExitCode::FAILURE
        }
    }
}
