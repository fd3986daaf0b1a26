use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use route_planner::config::{NetworkConfig, sample_network};
use route_planner::domain::{InvalidStop, Stop};
use route_planner::planner::RouteError;
use tracing_subscriber::EnvFilter;

/// Environment variable naming a JSON network definition.
const NETWORK_FILE_VAR: &str = "NETWORK_FILE";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    // Load the network definition, falling back to the built-in sample
    let config = match std::env::var(NETWORK_FILE_VAR) {
        Ok(path) => match NetworkConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load network from {path}: {e}");
                return ExitCode::FAILURE;
            }
        },
        Err(_) => {
            eprintln!("{NETWORK_FILE_VAR} not set, using the sample network.");
            sample_network()
        }
    };
    let planner = config.into_planner();
    eprintln!(
        "Loaded {} stops and {} connections",
        planner.network().graph().len(),
        planner.network().connections().len()
    );

    let stdin = io::stdin();
    let mut input = stdin.lock();

    let origin = match prompt(&mut input, "Origin stop: ") {
        Ok(stop) => stop,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    let destination = match prompt(&mut input, "Destination stop: ") {
        Ok(stop) => stop,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    match planner.find_route(&origin, &destination) {
        Ok(route) => {
            println!("Best route: {route}");
            println!("Total cost: {}", route.cost);
            ExitCode::SUCCESS
        }
        Err(RouteError::NotFound {
            origin,
            destination,
        }) => {
            println!("No route available between {origin} and {destination}");
            ExitCode::FAILURE
        }
    }
}

/// Errors from reading a stop at the console.
#[derive(Debug, thiserror::Error)]
enum PromptError {
    /// Writing the prompt or reading the answer failed
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),

    /// The answer is not a usable stop identifier
    #[error(transparent)]
    Stop(#[from] InvalidStop),
}

/// Print `label` and read one stop identifier from `input`.
fn prompt(input: &mut impl BufRead, label: &str) -> Result<Stop, PromptError> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    Ok(Stop::parse(&line)?)
}
