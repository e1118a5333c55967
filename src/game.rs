use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::input::Key;
use crate::snake::{Direction, Snake};
use crate::term::Screen;
use crate::vec2::Vec2;
use crate::{TermInt, FRAME_HEIGHT, FRAME_WIDTH};

pub const PLAYFIELD_WIDTH: i32 = FRAME_WIDTH as i32 - 2;
pub const PLAYFIELD_HEIGHT: i32 = FRAME_HEIGHT as i32 - 2;

const INITIAL_BODY: [Vec2; 3] = [Vec2::new(2, 0), Vec2::new(1, 0), Vec2::new(0, 0)];
const INITIAL_DIRECTION: Direction = Direction::Right;

const SNAKE_HEAD_CHAR: &str = "O";
const SNAKE_BODY_CHAR: &str = "o";
const FRUIT_CHAR: &str = "@";
const SCORE_ROW: TermInt = 8;

/// Outcome of one `Game::update`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MoveResult {
    Moved,
    Ate,
    Crashed,
}

pub struct Game {
    snake: Snake,
    fruit: Vec2,
    score: u32,
    dead: bool,
    rng: StdRng,
}

impl Game {
    pub fn new() -> Self {
        Game::with_rng(StdRng::from_entropy())
    }

    /// A game whose fruit positions are reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Game::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(mut rng: StdRng) -> Self {
        let fruit = random_fruit_position(&mut rng);
        Game {
            snake: Snake::new(INITIAL_BODY.iter().copied(), INITIAL_DIRECTION),
            fruit,
            score: 0,
            dead: false,
            rng,
        }
    }

    pub fn body(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.snake.body().iter().copied()
    }

    pub fn len(&self) -> usize {
        self.snake.len()
    }

    pub fn direction(&self) -> Direction {
        self.snake.direction()
    }

    pub fn fruit(&self) -> Vec2 {
        self.fruit
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    #[cfg(test)]
    pub(crate) fn set_fruit(&mut self, fruit: Vec2) {
        self.fruit = fruit;
    }

    /// Advances the snake one cell. A crash leaves the body where it was.
    pub fn update(&mut self) -> MoveResult {
        if self.dead {
            return MoveResult::Crashed;
        }

        let new_head = self.snake.next_head();
        if self.is_collided(new_head) {
            debug!("crashed at {:?} with score {}", new_head, self.score);
            self.dead = true;
            return MoveResult::Crashed;
        }

        let old_tail = self.snake.advance(new_head);
        if new_head != self.fruit {
            return MoveResult::Moved;
        }

        // Fruit may land on the body; only the bounds are respected.
        self.snake.grow(old_tail);
        self.score += 1;
        self.fruit = random_fruit_position(&mut self.rng);
        debug!(
            "ate fruit at {:?}, score {}, next fruit {:?}",
            new_head, self.score, self.fruit
        );

        MoveResult::Ate
    }

    /// Out of the playfield, or on any body cell including the tail.
    pub fn is_collided(&self, p: Vec2) -> bool {
        let outside = p.x < 0 || p.x >= PLAYFIELD_WIDTH || p.y < 0 || p.y >= PLAYFIELD_HEIGHT;
        outside || self.snake.occupies(p)
    }

    /// Turns take effect on the next `update`; reversals are ignored.
    pub fn on_key(&mut self, key: Key) {
        if let Some(dir) = key.direction() {
            self.snake.set_direction(dir);
        }
    }

    pub fn draw<S: Screen>(&self, screen: &mut S) -> crossterm::Result<()> {
        screen.draw_borders(FRAME_WIDTH, FRAME_HEIGHT)?;

        for (i, pos) in self.snake.body().iter().enumerate() {
            let (row, col) = to_term_pos(*pos);
            let ch = if i == 0 { SNAKE_HEAD_CHAR } else { SNAKE_BODY_CHAR };
            screen.print_at(row, col, ch)?;
        }

        let (row, col) = to_term_pos(self.fruit);
        screen.print_at(row, col, FRUIT_CHAR)?;

        screen.print_at(SCORE_ROW, FRAME_WIDTH + 4, &format!("Score: {}", self.score))
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

fn random_fruit_position<R: Rng>(rng: &mut R) -> Vec2 {
    Vec2::new(rng.gen_range(0..PLAYFIELD_WIDTH), rng.gen_range(0..PLAYFIELD_HEIGHT))
}

/// Playfield cell to 1-based (row, column), skipping the border.
fn to_term_pos(p: Vec2) -> (TermInt, TermInt) {
    ((p.y + 2) as TermInt, (p.x + 2) as TermInt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::testing::Canvas;
    use std::collections::HashSet;

    fn game() -> Game {
        let mut g = Game::with_seed(7);
        g.fruit = Vec2::new(5, 5);
        g
    }

    fn body(g: &Game) -> Vec<Vec2> {
        g.body().collect()
    }

    fn v(x: i32, y: i32) -> Vec2 {
        Vec2::new(x, y)
    }

    #[test]
    fn fresh_game() {
        let g = Game::with_seed(1);
        assert_eq!(body(&g), vec![v(2, 0), v(1, 0), v(0, 0)]);
        assert_eq!(g.direction(), Direction::Right);
        assert_eq!(g.score(), 0);
        assert!(!g.is_dead());
    }

    #[test]
    fn plain_step_moves_head_and_drops_tail() {
        let mut g = game();
        let res = g.update();

        assert_eq!(res, MoveResult::Moved);
        assert_eq!(body(&g), vec![v(3, 0), v(2, 0), v(1, 0)]);
        assert_eq!(g.score(), 0);
        assert_eq!(g.fruit(), v(5, 5));
    }

    #[test]
    fn reversal_is_ignored() {
        let mut g = game();
        g.on_key(Key::Left);
        assert_eq!(g.direction(), Direction::Right);

        g.update();
        assert_eq!(body(&g)[0], v(3, 0));
    }

    #[test]
    fn turn_applies_on_next_update() {
        let mut g = game();
        g.on_key(Key::Down);
        assert_eq!(g.direction(), Direction::Down);
        assert_eq!(body(&g)[0], v(2, 0));

        g.update();
        assert_eq!(body(&g), vec![v(2, 1), v(2, 0), v(1, 0)]);
    }

    #[test]
    fn non_direction_keys_do_nothing() {
        let mut g = game();
        g.on_key(Key::Enter);
        g.on_key(Key::Char('a'));
        assert_eq!(g.direction(), Direction::Right);
    }

    #[test]
    fn wall_kills_and_keeps_body() {
        let mut g = game();
        g.on_key(Key::Up);
        let before = body(&g);

        assert_eq!(g.update(), MoveResult::Crashed);
        assert!(g.is_dead());
        assert_eq!(body(&g), before);
    }

    #[test]
    fn right_wall_is_at_playfield_width() {
        let mut g = game();
        g.fruit = v(0, 10);
        for _ in 0..(PLAYFIELD_WIDTH - 3) {
            g.update();
            assert!(!g.is_dead());
        }
        assert_eq!(body(&g)[0], v(PLAYFIELD_WIDTH - 1, 0));

        g.update();
        assert!(g.is_dead());
    }

    #[test]
    fn bottom_wall_is_at_playfield_height() {
        let mut g = game();
        g.fruit = v(0, 0);
        g.on_key(Key::Down);
        for _ in 0..(PLAYFIELD_HEIGHT - 1) {
            g.update();
        }
        assert!(!g.is_dead());
        assert_eq!(body(&g)[0], v(2, PLAYFIELD_HEIGHT - 1));

        g.update();
        assert!(g.is_dead());
    }

    #[test]
    fn running_into_the_body_kills() {
        let mut g = game();
        g.snake = Snake::new(vec![v(5, 5), v(5, 4), v(6, 4), v(6, 5), v(6, 6)], Direction::Down);
        g.fruit = v(0, 0);
        g.on_key(Key::Right);

        assert_eq!(g.update(), MoveResult::Crashed);
        assert!(g.is_dead());
        assert_eq!(body(&g)[0], v(5, 5));
    }

    #[test]
    fn following_into_the_tail_kills() {
        let mut g = game();
        g.snake = Snake::new(vec![v(5, 5), v(5, 6), v(6, 6), v(6, 5)], Direction::Right);
        g.fruit = v(0, 0);

        assert!(g.is_collided(v(6, 5)));
        assert_eq!(g.update(), MoveResult::Crashed);
    }

    #[test]
    fn eating_grows_and_scores() {
        let mut g = game();
        g.fruit = v(3, 0);

        assert_eq!(g.update(), MoveResult::Ate);
        assert_eq!(body(&g), vec![v(3, 0), v(2, 0), v(1, 0), v(0, 0)]);
        assert_eq!(g.score(), 1);

        let fruit = g.fruit();
        assert!(fruit.x >= 0 && fruit.x < PLAYFIELD_WIDTH);
        assert!(fruit.y >= 0 && fruit.y < PLAYFIELD_HEIGHT);
    }

    #[test]
    fn fruit_resample_covers_the_whole_playfield() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = HashSet::new();
        for _ in 0..20_000 {
            let p = random_fruit_position(&mut rng);
            assert!(p.x >= 0 && p.x < PLAYFIELD_WIDTH);
            assert!(p.y >= 0 && p.y < PLAYFIELD_HEIGHT);
            seen.insert(p);
        }
        assert_eq!(seen.len(), (PLAYFIELD_WIDTH * PLAYFIELD_HEIGHT) as usize);
    }

    #[test]
    fn seeded_games_agree() {
        assert_eq!(Game::with_seed(3).fruit(), Game::with_seed(3).fruit());
    }

    #[test]
    fn draw_places_cells_inside_the_border() {
        let mut g = game();
        g.score = 12;
        let mut canvas = Canvas::new(40, 22);
        g.draw(&mut canvas).unwrap();

        assert_eq!(canvas.at(1, 1), '+');
        assert_eq!(canvas.at(FRAME_HEIGHT as usize, FRAME_WIDTH as usize), '+');
        assert_eq!(canvas.at(2, 4), 'O');
        assert_eq!(canvas.at(2, 3), 'o');
        assert_eq!(canvas.at(2, 2), 'o');
        assert_eq!(canvas.at(7, 7), '@');
        assert!(canvas.row(SCORE_ROW as usize).ends_with("Score: 12"));
        assert_eq!(canvas.at(SCORE_ROW as usize, FRAME_WIDTH as usize + 4), 'S');
    }
}
