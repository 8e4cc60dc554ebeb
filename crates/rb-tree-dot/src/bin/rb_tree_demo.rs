//! `rb-tree-demo` renders a random red-black tree before and after a delete.
//!
//! Usage:
//!   rb-tree-demo [--count N] [--seed S] [--max K] [--delete K] [--out DIR]
//!
//! Writes `before_delete.dot` and `after_delete.dot` into `DIR`. Log level is
//! taken from `RB_TREE_LOG` (default `info`).

use rb_tree_dot::{run, DemoConfig, USAGE};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_env("RB_TREE_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    init_tracing();

    let config = match DemoConfig::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}\n\n{USAGE}");
            std::process::exit(2);
        }
    };

    match run(&config) {
        Ok(report) => {
            println!("{}", report.before.display());
            println!("{}", report.after.display());
        }
        Err(e) => {
            tracing::error!(error = %e, "demo failed");
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
