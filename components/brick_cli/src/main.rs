//! Brick CLI
//!
//! Entry point for the compiler and virtual machine. Parses CLI arguments,
//! installs logging and delegates to the Runtime. This is the only place
//! that decides the process exit code.

use std::process::ExitCode;

use brick_cli::{repl, Cli, CliResult, Mode, Runtime};
use clap::{CommandFactory, Parser as ClapParser};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e.diagnostic());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> CliResult<()> {
    let mut runtime = Runtime::from_cli(cli);

    if cli.repl {
        return repl::run_repl(&mut runtime);
    }

    let Some(path) = cli.file.as_deref() else {
        // clap requires FILE without --repl; show usage anyway
        println!("{}", Cli::command().render_usage());
        return Ok(());
    };
    let mode = Mode::for_cli(cli, path)?;
    runtime.dispatch(mode, path)
}

fn setup_logging(cli: &Cli) {
    let formatter = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .with_level(true);

    tracing_subscriber::registry()
        .with(formatter)
        .with(EnvFilter::new(cli.log_directive()))
        .init();
}
