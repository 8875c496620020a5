//! Command that prints one UUID of the version selected by flags

use std::{env, io, io::Write, process::ExitCode};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use uuidgen::cli::{self, Command};

fn main() -> io::Result<ExitCode> {
    init_tracing();

    let mut args = env::args();
    let program = args.next();
    let program = program.as_deref().unwrap_or("uuid");

    let options = match cli::parse_args(args) {
        Ok(Command::Generate(options)) => options,
        Ok(Command::Help) => {
            print!("{}", cli::usage(program));
            return Ok(ExitCode::SUCCESS);
        }
        Ok(Command::Version) => {
            println!("uuid {}", cli::version_string());
            return Ok(ExitCode::SUCCESS);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            eprint!("{}", cli::usage(program));
            return Ok(ExitCode::FAILURE);
        }
    };

    match cli::run(&options) {
        Ok(uuid) => {
            writeln!(io::stdout().lock(), "{}", uuid)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Sends log events to stderr so that stdout carries nothing but the UUID.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}
