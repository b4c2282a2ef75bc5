use crate::grid::GroupId;
use crate::results::GameOutcome;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How a single tile should be shown.
#[derive(Debug, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TileView {
    /// The tile's flat index on the grid.
    pub index: usize,
    pub text: Arc<str>,
    /// The tile's group. Only revealed once that group has been solved.
    pub group_id: Option<GroupId>,
    pub selected: bool,
    pub solved: bool,
}

/// A read-only projection of a game, produced by [`crate::GameEngine::snapshot`].
#[derive(Debug, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameStateView {
    /// Every tile, in grid order.
    pub tiles: Vec<TileView>,
    /// The selected tile indices, in the order they were selected.
    pub selection: Vec<usize>,
    pub mistake_count: usize,
    pub mistakes_remaining: usize,
    /// The solved groups, in the order they were solved.
    pub solved_groups: Vec<GroupId>,
    pub num_guesses: usize,
    pub outcome: Option<GameOutcome>,
}

impl GameStateView {
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Returns `true` iff the game was won.
    pub fn is_won(&self) -> bool {
        self.outcome == Some(GameOutcome::Won)
    }
}
