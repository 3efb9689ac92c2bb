//! Game state module - the tick state machine
//!
//! One call to [`GameState::tick`] consumes at most one input and either fully
//! commits the move or rolls the body back to its pre-tick snapshot.

use tracing::{debug, info};

use crate::body::BodyChain;
use crate::collision::{point_collides_with_snake, snake_collided};
use crate::rng::RandomSource;
use crate::types::*;

/// Message shown after the snake crashes.
pub const DEATH_MESSAGE: &str = "You are dead. Press [Enter] to reset.";

/// Message shown when the snake fills the whole board.
pub const WIN_MESSAGE: &str = "You win! Press [Enter] to reset.";

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Dead and the input was not a confirm; nothing changed.
    Idle,
    /// Dead and confirmed; a fresh game started.
    Reset,
    /// The snake moved without eating.
    Moved,
    /// The snake ate the fruit and grew by one.
    Ate,
    /// The move crashed; the body was rolled back.
    Died,
    /// The snake ate the last free cell.
    Won,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board_size: Vector2,
    body: BodyChain,
    fruit: Vector2,
    score: u32,
    alive: bool,
    message: String,
}

impl GameState {
    /// Create a game on a `width x height` board and reset it.
    ///
    /// # Panics
    ///
    /// Panics if the board is smaller than `MIN_BOARD_WIDTH x MIN_BOARD_HEIGHT`.
    pub fn new(width: u16, height: u16, rng: &mut impl RandomSource) -> Self {
        assert!(
            width >= MIN_BOARD_WIDTH && height >= MIN_BOARD_HEIGHT,
            "board {width}x{height} is smaller than {MIN_BOARD_WIDTH}x{MIN_BOARD_HEIGHT}"
        );

        let board_size = Vector2::new(width as i32, height as i32);
        let mut state = Self {
            board_size,
            body: Self::initial_body(board_size),
            fruit: Vector2::default(),
            score: 0,
            alive: true,
            message: String::new(),
        };
        state.reset(rng);
        state
    }

    fn initial_body(board_size: Vector2) -> BodyChain {
        let center = Vector2::new(board_size.x / 2, board_size.y / 2);
        BodyChain::new(center, Direction::Up, INITIAL_SNAKE_LENGTH)
    }

    /// Start a new round: centred snake heading up, score 0, new fruit.
    pub fn reset(&mut self, rng: &mut impl RandomSource) {
        self.alive = true;
        self.score = 0;
        self.message.clear();
        self.body = Self::initial_body(self.board_size);
        self.spawn_fruit(rng);
        debug!(head = ?self.body.head(), fruit = ?self.fruit, "game reset");
    }

    pub fn board_size(&self) -> Vector2 {
        self.board_size
    }

    pub fn body(&self) -> &BodyChain {
        &self.body
    }

    /// Fruit position.
    ///
    /// Always a free cell, except after [`TickOutcome::Won`]: the board is
    /// full then and the eaten fruit is left under the head until the reset.
    pub fn fruit(&self) -> Vector2 {
        self.fruit
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn alive(&self) -> bool {
        self.alive
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Delay before the next tick at the current score.
    pub fn tick_interval_ms(&self) -> u32 {
        tick_interval_ms(self.score)
    }

    #[cfg(test)]
    pub(crate) fn set_fruit(&mut self, fruit: Vector2) {
        self.fruit = fruit;
    }

    #[cfg(test)]
    pub(crate) fn set_body(&mut self, body: BodyChain) {
        self.body = body;
    }

    fn free_cells(&self) -> usize {
        let area = (self.board_size.x as usize) * (self.board_size.y as usize);
        area.saturating_sub(self.body.len())
    }

    /// Place the fruit on a uniformly drawn free cell (rejection sampling).
    ///
    /// Returns `false` without moving the fruit when no free cell is left.
    pub fn spawn_fruit(&mut self, rng: &mut impl RandomSource) -> bool {
        if self.free_cells() == 0 {
            return false;
        }

        // u16 x u16 always fits in u32.
        let width = self.board_size.x as u32;
        let area = width * self.board_size.y as u32;
        loop {
            let i = rng.next_range(area);
            let candidate = Vector2::new((i % width) as i32, (i / width) as i32);
            if !point_collides_with_snake(candidate, &self.body, true) {
                self.fruit = candidate;
                return true;
            }
        }
    }

    /// Advance the game by one step.
    pub fn tick(&mut self, input: Option<GameInput>, rng: &mut impl RandomSource) -> TickOutcome {
        if !self.alive {
            if input == Some(GameInput::Confirm) {
                self.reset(rng);
                return TickOutcome::Reset;
            }
            return TickOutcome::Idle;
        }

        let Some(heading) = self.body.heading() else {
            unreachable!("live snake has no segments");
        };

        // A 180 degree turn would drive the head straight into the neck.
        let direction = match input.and_then(GameInput::direction) {
            Some(d) if d != heading.opposite() => d,
            _ => heading,
        };

        let snapshot = self.body.clone();
        self.body.move_head(direction);

        let mut outcome = TickOutcome::Moved;
        if self.body.head() == self.fruit {
            self.score += 1;
            outcome = TickOutcome::Ate;
        } else {
            self.body.shrink_tail();
        }

        if snake_collided(&self.body, self.board_size) {
            self.body = snapshot;
            self.alive = false;
            self.message = DEATH_MESSAGE.to_string();
            info!(score = self.score, "snake crashed");
            return TickOutcome::Died;
        }

        if outcome == TickOutcome::Ate {
            debug!(score = self.score, length = self.body.len(), "fruit eaten");
            if !self.spawn_fruit(rng) {
                self.alive = false;
                self.message = WIN_MESSAGE.to_string();
                info!(score = self.score, "board filled");
                return TickOutcome::Won;
            }
        }

        outcome
    }
}
