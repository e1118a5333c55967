use std::io;
use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};

use crossterm::event::{read, Event, KeyCode, KeyEvent, KeyModifiers};
use log::{debug, error};

use crate::snake::Direction;

/// Logical key, independent of the raw terminal encoding.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Quit,
    Enter,
    Char(char),
    Other,
}

impl Key {
    pub fn direction(self) -> Option<Direction> {
        match self {
            Key::Up => Some(Direction::Up),
            Key::Down => Some(Direction::Down),
            Key::Left => Some(Direction::Left),
            Key::Right => Some(Direction::Right),
            _ => None,
        }
    }
}

impl From<KeyEvent> for Key {
    fn from(ev: KeyEvent) -> Self {
        match ev {
            KeyEvent { code: KeyCode::Char('c'), modifiers }
                if modifiers.contains(KeyModifiers::CONTROL) =>
            {
                Key::Quit
            }
            KeyEvent { code, modifiers: _ } => match code {
                KeyCode::Up => Key::Up,
                KeyCode::Down => Key::Down,
                KeyCode::Left => Key::Left,
                KeyCode::Right => Key::Right,
                KeyCode::Enter => Key::Enter,
                KeyCode::Char('q') => Key::Quit,
                KeyCode::Char(ch) => Key::Char(ch),
                _ => Key::Other,
            }
        }
    }
}

/// Spawns the thread that reads terminal events and forwards every key press
/// to `keys`. The thread stops when the receiver is gone or reading fails.
pub fn spawn_reader(keys: Sender<Key>) -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("input".into())
        .spawn(move || loop {
            match read() {
                Ok(Event::Key(ev)) => {
                    let key = Key::from(ev);
                    debug!("key {:?}", key);
                    if keys.send(key).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    error!("error reading terminal events: {}", e);
                    break;
                }
            }
        })
}
