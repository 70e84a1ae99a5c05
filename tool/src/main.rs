//! NR SSB Offset Calculator
//!
//! Computes the `--ssb` subcarrier offset for a UE configuration from the
//! cell's absoluteFrequencySSB and absoluteFrequencyPointA.

use anyhow::Result;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

use common::types::{Arfcn, NrBand, SubcarrierSpacing};
use ssb::{OffsetRequest, SsbError};

/// Calculate the --ssb subcarrier offset for OAI UE configuration.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// AbsoluteFrequencySSB (ARFCN)
    #[arg(long, allow_negative_numbers = true)]
    arfcn_ssb: i64,

    /// AbsoluteFrequencyPointA (ARFCN)
    #[arg(long, allow_negative_numbers = true)]
    arfcn_pointa: i64,

    /// Subcarrier spacing in kHz (15, 30, 60, 120)
    #[arg(long, default_value = "30", value_parser = parse_scs)]
    scs: SubcarrierSpacing,

    /// NR band number (e.g., 78)
    #[arg(long, allow_negative_numbers = true)]
    band: i64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    log_level: String,
}

impl Args {
    fn request(&self) -> OffsetRequest {
        OffsetRequest {
            arfcn_ssb: Arfcn(self.arfcn_ssb),
            arfcn_pointa: Arfcn(self.arfcn_pointa),
            scs: self.scs,
            band: NrBand(self.band),
        }
    }
}

fn parse_scs(value: &str) -> Result<SubcarrierSpacing, String> {
    let khz: u32 = value
        .parse()
        .map_err(|_| format!("'{}' is not a number", value))?;

    SubcarrierSpacing::from_khz(khz)
        .ok_or_else(|| format!("{} kHz is not one of 15, 30, 60, 120", khz))
}

/// Render the single result line printed to stdout
fn outcome_line(outcome: &Result<i128, SsbError>) -> String {
    match outcome {
        Ok(offset) => format!("✅ Calculated --ssb offset: {}", offset),
        Err(e) => format!("❌ Error: {}", e),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr, stdout carries only the result line
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&args.log_level)?,
    };

    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .init();

    let request = args.request();

    info!("SSB offset request:");
    info!("  ARFCN SSB: {}", request.arfcn_ssb);
    info!("  ARFCN Point A: {}", request.arfcn_pointa);
    info!("  Subcarrier spacing: {}", request.scs);
    info!("  Band: n{}", request.band);

    let outcome = request.calculate();
    if let Err(e) = &outcome {
        // Reported on stdout; the process still exits 0
        debug!("Offset calculation failed: {:?}", e);
    }

    println!("{}", outcome_line(&outcome));
    Ok(())
}
