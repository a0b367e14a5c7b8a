//! The Metacognitive Awareness Inventory in the terminal.
//!
//! Answer the 52 statements page by page, fill in the info form, and the
//! subscale scores are printed once the TUI closes.
//!
//! Run with: cargo run -p mai-ratatui-wizard --example inventory_tui [-- --json]
//!
//! Logs go to stderr; set `RUST_LOG=mai_survey=debug` to follow the flow.

use std::io::{self, BufRead, Write};

use mai_inventory::{MaiScoring, catalog};
use mai_ratatui_wizard::RatatuiFrontend;
use mai_survey::Shell;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let json = std::env::args().any(|arg| arg == "--json");
    let frontend = RatatuiFrontend::new().with_title("Metacognitive Awareness Inventory");
    let mut shell = Shell::start(catalog()?, MaiScoring);

    loop {
        match shell.run(&frontend) {
            Ok(report) => println!("{report}"),
            Err(err) if err.is_cancelled() => {
                println!("Survey cancelled.");
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        }

        if json {
            if let Some(completion) = shell.completion() {
                println!("{}", completion.to_json()?);
            }
        }

        print!("Take the inventory again? [y/N] ");
        io::stdout().flush()?;
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        if !line.trim().eq_ignore_ascii_case("y") {
            return Ok(());
        }
        shell.restart();
    }
}
