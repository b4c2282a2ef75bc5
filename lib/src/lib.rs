#![cfg_attr(feature = "unstable", feature(test))]

//! A game engine for Connections-style puzzles.
//!
//! A [`Grid`] holds 16 items split into four hidden groups of four. A [`GameEngine`] tracks a
//! single game on that grid: the player toggles tiles into a selection of up to four, then submits
//! the selection as a guess. Correct guesses solve a group; four incorrect guesses lose the game.
//!
//! ```
//! use rs_connections::*;
//!
//! let mut game = new_game(vec![
//!     vec!["bass", "flounder", "salmon", "trout"],
//!     vec!["ant", "drill", "island", "opal"],
//!     vec!["bucks", "heat", "jazz", "nets"],
//!     vec!["are", "queue", "sea", "why"],
//! ])?;
//!
//! for index in [0, 1, 2, 3] {
//!     game.toggle_selection(index)?;
//! }
//! assert_eq!(game.submit_guess()?, GuessOutcome::Correct(GroupId::new(0).unwrap()));
//! assert_eq!(game.mistakes_remaining(), 4);
//! # Ok::<(), EngineError>(())
//! ```

mod engine;
mod grid;
mod results;
mod script;
mod view;

pub use engine::*;
pub use grid::*;
pub use results::*;
pub use script::*;
pub use view::*;
