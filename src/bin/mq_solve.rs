//! Minimal CLI: parse a challenge file, run the exhaustive search kernel,
//! verify the result, and report.
//!
//! Usage: `mq-solve [CHALLENGE_FILE]` (defaults to `cha.txt` to stay
//! compatible with the original tool, which hard-coded that filename).
//! Exit code 0 when a solution is found and verified, nonzero otherwise.
//! `RUST_LOG` controls log verbosity the same way it does across this
//! crate's ambient logging.

#![forbid(unsafe_code)]

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use tracing::{error, info};

use mqsolve::{reader, solve, MqError};

fn run() -> Result<bool, MqError> {
    let path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("cha.txt"));

    info!(path = %path.display(), "reading challenge file");
    let system = reader::read_challenge(&path)?;
    info!(n = system.n(), m = system.m(), "parsed system");

    match solve(&system)? {
        Some(sol) => {
            info!(steps = sol.steps, "solution found");
            println!("solution valid");
            println!("step: {}", sol.steps);
            print!("solution: [");
            for (i, bit) in sol.assignment.iter().enumerate() {
                if i > 0 {
                    print!(", ");
                }
                print!("{bit}");
            }
            println!("]");
            Ok(true)
        }
        None => {
            info!("search space exhausted, no solution");
            println!("no solution found");
            Ok(false)
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "mq_solve=info".into()))
        .with_target(false)
        .compact()
        .init();

    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(MqError::VerificationFailure) => {
            error!("enumerator candidate failed verification");
            println!("solution invalid");
            ExitCode::FAILURE
        }
        Err(e) => {
            error!(error = %e, "solve failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
