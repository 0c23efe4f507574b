use campusroute_core::cli::{self, Cli};
use campusroute_core::exit::RouteExit;
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

fn main() -> RouteExit {
    let cli = Cli::parse();
    init_logging(cli.global.verbose);

    let result = if let Some(cmd) = cli.command {
        cli::dispatch::execute(cmd, &cli.global)
    } else {
        use clap::CommandFactory;
        let _ = Cli::command().print_help();
        Ok(RouteExit::Success)
    };

    match result {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            cli::dispatch::exit_for_error(&e)
        }
    }
}

/// Diagnostics go to stderr: warnings by default, debug with `--verbose`.
/// `RUST_LOG` takes precedence when set.
fn init_logging(verbose: bool) {
    let default = if verbose { "campusroute_core=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
