//! Snake rules and state, with no terminal or input dependencies.
//!
//! Every operation that needs randomness takes a [`RandomSource`], so the same
//! draws always replay the same game.
//!
//! # Module Structure
//!
//! - [`body`]: Run-length encoded snake body (head plus straight segments)
//! - [`collision`]: Point-on-line, board bounds, and self-intersection tests
//! - [`game_state`]: The tick state machine with rollback on collision
//! - [`rng`]: Injectable random source and a small deterministic LCG
//!
//! # Game Rules
//!
//! - The snake moves one cell per tick in its current heading
//! - Arrow input turns the snake; a 180 degree turn is ignored
//! - Eating the fruit scores a point and grows the snake by one cell
//! - Leaving the board or hitting the body kills the snake; the fatal move is undone
//! - While dead, only [`GameInput::Confirm`](types::GameInput::Confirm) starts a new round
//!
//! # Example
//!
//! ```
//! use tui_snake_core::{GameState, SimpleRng, TickOutcome};
//! use tui_snake_types::{GameInput, Vector2};
//!
//! let mut rng = SimpleRng::new(12345);
//! let mut game = GameState::new(20, 20, &mut rng);
//! assert_eq!(game.body().head(), Vector2::new(10, 10));
//!
//! let outcome = game.tick(Some(GameInput::Left), &mut rng);
//! assert_ne!(outcome, TickOutcome::Died);
//! assert_eq!(game.body().head(), Vector2::new(9, 10));
//! ```

pub mod body;
pub mod collision;
pub mod game_state;
pub mod rng;

pub use tui_snake_types as types;

pub use body::{BodyChain, Segment};
pub use collision::{point_collides_with_snake, point_inside_area, point_on_line, snake_collided, Line};
pub use game_state::{GameState, TickOutcome, DEATH_MESSAGE, WIN_MESSAGE};
pub use rng::{RandomSource, SimpleRng};
