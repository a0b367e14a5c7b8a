//! The Metacognitive Awareness Inventory as step-by-step CLI prompts.
//!
//! Run with: cargo run -p mai-dialoguer-wizard --example inventory_cli [-- --plain]

use mai_dialoguer_wizard::DialoguerFrontend;
use mai_inventory::{MaiScoring, catalog};
use mai_survey::Shell;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let frontend = if std::env::args().any(|arg| arg == "--plain") {
        DialoguerFrontend::plain()
    } else {
        DialoguerFrontend::new()
    };

    let mut shell = Shell::start(catalog()?, MaiScoring);
    match shell.run(&frontend) {
        Ok(report) => {
            println!();
            println!("{report}");
            Ok(())
        }
        Err(err) if err.is_cancelled() => {
            println!("Survey cancelled.");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}
