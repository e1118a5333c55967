use std::sync::mpsc;

use anyhow::{Context, Result};
use log::info;

use snake_term::app::App;
use snake_term::input;
use snake_term::runner::{run_loop, TICK_INTERVAL};
use snake_term::term::TermManager;

fn main() -> Result<()> {
    env_logger::init();

    run()?;

    println!("\nBye!");
    Ok(())
}

fn run() -> Result<()> {
    // Dropping `term` gives the terminal back on every exit path.
    let mut term = TermManager::new();
    term.setup().context("Failed to set up terminal")?;

    let (keys_tx, keys) = mpsc::channel();
    input::spawn_reader(keys_tx).context("Failed to spawn input reader")?;

    let mut app = App::new();
    run_loop(&mut app, &mut term, &keys, TICK_INTERVAL)?;

    info!("finished with score {}", app.game().score());
    term.restore().context("Failed to restore terminal")?;
    Ok(())
}
