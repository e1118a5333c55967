use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};

use crate::app::App;
use crate::input::Key;
use crate::term::Screen;

pub const TICK_INTERVAL: Duration = Duration::from_millis(200);

/// Drives `app` until it is finished. Pending keys are always applied before
/// the next tick; each tick clears, updates, draws and flushes `screen`.
/// The next tick is due `tick` after the previous one ended.
pub fn run_loop<S: Screen>(
    app: &mut App,
    screen: &mut S,
    keys: &Receiver<Key>,
    tick: Duration,
) -> Result<()> {
    let mut next_tick = Instant::now();

    while !app.finished() {
        let wait = next_tick.saturating_duration_since(Instant::now());
        match keys.recv_timeout(wait) {
            Ok(key) => {
                app.on_key(key);
                continue;
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => bail!("input reader stopped"),
        }

        screen.clear_screen()?;
        app.update();
        app.draw(screen).context("Failed to draw")?;
        screen.flush()?;

        next_tick = Instant::now() + tick;
    }

    Ok(())
}
