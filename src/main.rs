use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

mod error;
mod input;
mod token_iterator;
mod two_sum;

use error::Result;
use input::Problem;

const INPUT_FILE: &str = "input.txt";

/// Solves the problem stored at `path`, writing the index pair to `out` if one exists.
fn run<P: AsRef<Path>, W: Write>(path: P, out: &mut W) -> Result<()> {
    let problem = Problem::open(path)?;

    match two_sum::solve(&problem.nums, problem.target) {
        Some(pair) => {
            log::info!("found pair {} for target {}", pair, problem.target);
            writeln!(out, "{}", pair)?;
            out.flush()?;
        }
        None => log::info!("no pair sums to {}", problem.target),
    }
    Ok(())
}

fn main() -> ExitCode {
    if std::env::var("TWO_SUM_LOG").is_ok() {
        let env = env_logger::Env::new()
            .filter("TWO_SUM_LOG")
            .write_style("TWO_SUM_LOG_STYLE");
        env_logger::init_from_env(env);
    }

    let stdout = io::stdout();
    match run(INPUT_FILE, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{:?}", e);
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
