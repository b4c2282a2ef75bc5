use crate::grid::GroupId;
use crate::grid::GROUP_SIZE;
use crate::grid::GRID_SIZE;
use std::io;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Indicates that an operation on the grid or the game was rejected.
///
/// No state is modified when one of these is returned.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum EngineError {
    /// The answer key did not describe four groups of four non-empty items.
    #[error("Invalid answer key: {0}")]
    InvalidAnswerKey(String),
    /// The given tile index is not on the grid.
    #[error("Tile index {0} is out of range; it must be less than {}", GRID_SIZE)]
    IndexOutOfRange(usize),
    /// The tile at this index belongs to a group that has already been solved.
    #[error("Tile {0} is already part of a solved group")]
    TileAlreadySolved(usize),
    /// A guess was submitted without exactly four tiles selected. Holds the number selected.
    #[error("A guess needs exactly {} tiles, but {0} are selected", GROUP_SIZE)]
    IncompleteSelection(usize),
    /// The game has been won or lost, so no further changes are accepted.
    #[error("The game is already over")]
    GameAlreadyOver,
    /// Reading an answer key failed.
    #[error("Failed to read the answer key: {0}")]
    Io(String),
}

impl From<io::Error> for EngineError {
    fn from(e: io::Error) -> Self {
        EngineError::Io(e.to_string())
    }
}

/// The result of toggling a tile.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SelectionChanged {
    /// The tile at this index was added to the selection.
    Selected(usize),
    /// The tile at this index was removed from the selection.
    Deselected(usize),
    /// Four tiles are already selected, so this tile was not added. Nothing changed.
    SelectionFull,
}

/// The result of evaluating a submitted guess.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GuessOutcome {
    /// All four tiles were in the given group, which is now solved.
    Correct(GroupId),
    /// The tiles were not all in one group. This cost one mistake.
    Incorrect,
}

/// How a finished game ended.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameOutcome {
    /// Every group was solved before running out of mistakes.
    Won,
    /// The player made the maximum number of mistakes.
    Lost,
}
