//! `ktscan`: drive the Kotlin contextual scanner from the command line.

mod commands;
mod config;
mod error;

use std::sync::Once;

use crate::config::KINDS_ENV;

static TRACING_INIT: Once = Once::new();

/// Install the `RUST_LOG`-filtered subscriber.
///
/// Does nothing unless `RUST_LOG` is set, so the default run prints only the
/// report.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        print_usage();
        return;
    }

    let env_kinds = std::env::var(KINDS_ENV).ok();
    let result = config::parse_args(&args, env_kinds.as_deref())
        .and_then(|command| commands::run(&command));

    match result {
        Ok(report) => print!("{report}"),
        Err(err) => {
            eprintln!("error: {err}");
            if matches!(
                err,
                error::CliError::UnknownCommand(_) | error::CliError::MissingArgument(_)
            ) {
                eprintln!();
                print_usage();
            }
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!("Usage: ktscan <command> [options]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  kinds                         List token kinds and their symbols");
    eprintln!("  probe <file> [--at=N]         Run one scan call at byte offset N");
    eprintln!("  walk <file> [--all]           Replay the scanner over a whole file");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --kinds=<a,b,...>   Requested kinds (also `all`, `none`)");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  {KINDS_ENV}        Default requested kinds (default: semi,block_comment)");
    eprintln!("  RUST_LOG            Scanner trace filter, e.g. kt_scanner=trace");
}
