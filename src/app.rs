use log::info;

use crate::game::{Game, MoveResult};
use crate::input::Key;
use crate::term::Screen;
use crate::{TermInt, FRAME_HEIGHT, FRAME_WIDTH};

const TITLE_ROW: TermInt = 6;
const PROMPT_ROW: TermInt = 8;
const TEXT_COL: TermInt = 4;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AppState {
    Start,
    Playing,
    Dead,
}

/// Title, game and death screens around a single `Game`.
pub struct App {
    state: AppState,
    game: Game,
    finished: bool,
}

impl App {
    pub fn new() -> Self {
        App::with_game(Game::new())
    }

    pub fn with_game(game: Game) -> Self {
        App { state: AppState::Start, game, finished: false }
    }

    pub fn state(&self) -> AppState {
        self.state
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Set once the player asked to quit. Nothing else changes after that.
    pub fn finished(&self) -> bool {
        self.finished
    }

    pub fn on_key(&mut self, key: Key) {
        if self.finished {
            return;
        }

        match (self.state, key) {
            (_, Key::Quit) => {
                info!("quit requested in {:?}", self.state);
                self.finished = true;
            }
            (AppState::Start, _) => self.set_state(AppState::Playing),
            (AppState::Playing, key) => self.game.on_key(key),
            (AppState::Dead, _) => {
                self.game = Game::new();
                self.set_state(AppState::Playing);
            }
        }
    }

    pub fn update(&mut self) {
        if self.finished || self.state != AppState::Playing {
            return;
        }

        match self.game.update() {
            MoveResult::Crashed => {
                info!("snake died with score {}", self.game.score());
                self.set_state(AppState::Dead);
            }
            MoveResult::Ate => info!("score {}", self.game.score()),
            MoveResult::Moved => {}
        }
    }

    pub fn draw<S: Screen>(&self, screen: &mut S) -> crossterm::Result<()> {
        match self.state {
            AppState::Start => {
                screen.draw_borders(FRAME_WIDTH, FRAME_HEIGHT)?;
                screen.print_at(TITLE_ROW, TEXT_COL, "SNAKE")?;
                screen.print_at(PROMPT_ROW, TEXT_COL, "Press Enter to start")?;
            }
            AppState::Playing => self.game.draw(screen)?,
            AppState::Dead => {
                self.game.draw(screen)?;
                screen.print_at(TITLE_ROW, TEXT_COL, "SNAKE is DEAD.")?;
                screen.print_at(PROMPT_ROW, TEXT_COL, "Press Enter to restart")?;
            }
        }

        screen.print_at(FRAME_HEIGHT + 1, 1, "Press 'q' to quit")
    }

    fn set_state(&mut self, state: AppState) {
        info!("{:?} -> {:?}", self.state, state);
        self.state = state;
    }
}

impl Default for App {
    fn default() -> Self {
        App::new()
    }
}
