use crate::grid::*;
use crate::results::*;
use crate::view::*;
use log::{debug, info};
use std::result::Result;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The number of incorrect guesses that ends the game.
pub const MAX_MISTAKES: usize = 4;

/// Builds a grid from the given answer key and starts a new game on it.
///
/// See [`Grid::from_groups`] for the expected shape of the answer key.
pub fn new_game<I, G, S>(groups: I) -> Result<GameEngine, EngineError>
where
    I: IntoIterator<Item = G>,
    G: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Ok(GameEngine::new(Grid::from_groups(groups)?))
}

/// A submitted set of four tiles, recorded whether or not it was correct.
#[derive(Debug, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Guess {
    indices: [usize; GROUP_SIZE],
    group_ids: [GroupId; GROUP_SIZE],
}

impl Guess {
    fn from_selection(grid: &Grid, indices: [usize; GROUP_SIZE]) -> Result<Guess, EngineError> {
        let mut group_ids = [GroupId::default(); GROUP_SIZE];
        for (group_id, index) in group_ids.iter_mut().zip(indices) {
            *group_id = grid.group_of(index)?;
        }
        Ok(Guess { indices, group_ids })
    }

    /// The guessed tile indices, in the order they were selected.
    pub fn indices(&self) -> &[usize; GROUP_SIZE] {
        &self.indices
    }

    /// The group of each guessed tile, in the same order as [`Guess::indices`].
    pub fn group_ids(&self) -> &[GroupId; GROUP_SIZE] {
        &self.group_ids
    }

    /// Returns the group shared by every tile in this guess, if there is one.
    pub fn solved_group(&self) -> Option<GroupId> {
        let first = self.group_ids[0];
        if self.group_ids.iter().all(|group_id| *group_id == first) {
            Some(first)
        } else {
            None
        }
    }

    /// Returns `true` iff every tile in this guess is in the same group.
    pub fn is_correct(&self) -> bool {
        self.solved_group().is_some()
    }

    /// The colour of each guessed tile's group.
    pub fn colors(&self) -> [GroupColor; GROUP_SIZE] {
        self.group_ids.map(GroupId::color)
    }
}

/// Runs a single game on a fixed grid.
///
/// The engine owns all of the mutable state for the game: which tiles are selected, which groups
/// have been solved, how many mistakes have been made, and every guess so far. Once the game is
/// won or lost, every mutating call fails with [`EngineError::GameAlreadyOver`] and the state no
/// longer changes.
///
/// The engine does no locking. Callers that share one engine between threads must serialize
/// access to it themselves, e.g. with a `Mutex`.
#[derive(Debug, Clone)]
pub struct GameEngine {
    grid: Grid,
    /// Selected tile indices, in the order they were selected.
    selection: Vec<usize>,
    mistake_count: usize,
    /// Solved groups, in the order they were solved.
    solved_groups: Vec<GroupId>,
    guess_history: Vec<Guess>,
}

impl GameEngine {
    /// Starts a new game on the given grid.
    pub fn new(grid: Grid) -> GameEngine {
        GameEngine {
            grid,
            selection: Vec::with_capacity(GROUP_SIZE),
            mistake_count: 0,
            solved_groups: Vec::with_capacity(NUM_GROUPS),
            guess_history: Vec::new(),
        }
    }

    /// Selects the tile at the given index, or deselects it if it is already selected.
    ///
    /// If four other tiles are already selected, this returns [`SelectionChanged::SelectionFull`]
    /// and changes nothing.
    pub fn toggle_selection(&mut self, index: usize) -> Result<SelectionChanged, EngineError> {
        let group_id = self.grid.group_of(index)?;
        if self.is_terminal() {
            return Err(EngineError::GameAlreadyOver);
        }
        if self.solved_groups.contains(&group_id) {
            return Err(EngineError::TileAlreadySolved(index));
        }

        if let Some(position) = self.selection.iter().position(|selected| *selected == index) {
            self.selection.remove(position);
            debug!("Deselected tile {}; selection is {:?}", index, self.selection);
            return Ok(SelectionChanged::Deselected(index));
        }
        if self.selection.len() >= GROUP_SIZE {
            debug!("Ignored tile {}; selection is full", index);
            return Ok(SelectionChanged::SelectionFull);
        }
        self.selection.push(index);
        debug!("Selected tile {}; selection is {:?}", index, self.selection);
        Ok(SelectionChanged::Selected(index))
    }

    /// Evaluates the current selection as a guess.
    ///
    /// A correct guess solves its group and clears the selection. An incorrect guess costs a
    /// mistake and leaves the selection in place, so the player can adjust it and try again.
    /// Either way, the guess is appended to the history.
    pub fn submit_guess(&mut self) -> Result<GuessOutcome, EngineError> {
        if self.is_terminal() {
            return Err(EngineError::GameAlreadyOver);
        }
        let indices: [usize; GROUP_SIZE] = self
            .selection
            .as_slice()
            .try_into()
            .map_err(|_| EngineError::IncompleteSelection(self.selection.len()))?;
        let guess = Guess::from_selection(&self.grid, indices)?;

        let outcome = match guess.solved_group() {
            Some(group_id) => {
                self.solved_groups.push(group_id);
                self.selection.clear();
                GuessOutcome::Correct(group_id)
            }
            None => {
                self.mistake_count += 1;
                GuessOutcome::Incorrect
            }
        };
        debug!(
            "Guess {:?} with colors {:?} was {:?}",
            guess.indices(),
            guess.colors(),
            outcome
        );
        self.guess_history.push(guess);

        if let Some(game_outcome) = self.outcome() {
            info!(
                "Game over: {:?} after {} guesses and {} mistakes",
                game_outcome,
                self.guess_history.len(),
                self.mistake_count
            );
        }
        Ok(outcome)
    }

    /// Returns a read-only view of the current state, for rendering.
    pub fn snapshot(&self) -> GameStateView {
        let tiles = self
            .grid
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let solved = self.solved_groups.contains(&item.group_id());
                TileView {
                    index,
                    text: item.shared_text(),
                    group_id: if solved { Some(item.group_id()) } else { None },
                    selected: self.selection.contains(&index),
                    solved,
                }
            })
            .collect();
        GameStateView {
            tiles,
            selection: self.selection.clone(),
            mistake_count: self.mistake_count,
            mistakes_remaining: self.mistakes_remaining(),
            solved_groups: self.solved_groups.clone(),
            num_guesses: self.guess_history.len(),
            outcome: self.outcome(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The selected tile indices, in the order they were selected.
    pub fn selection(&self) -> &[usize] {
        &self.selection
    }

    pub fn mistake_count(&self) -> usize {
        self.mistake_count
    }

    pub fn mistakes_remaining(&self) -> usize {
        MAX_MISTAKES - self.mistake_count
    }

    /// The solved groups, in the order they were solved.
    pub fn solved_groups(&self) -> &[GroupId] {
        &self.solved_groups
    }

    /// Every submitted guess, oldest first.
    pub fn guess_history(&self) -> &[Guess] {
        &self.guess_history
    }

    /// Returns `true` iff the game has been won or lost.
    pub fn is_terminal(&self) -> bool {
        self.outcome().is_some()
    }

    /// Returns how the game ended, or `None` if it is still in progress.
    pub fn outcome(&self) -> Option<GameOutcome> {
        if self.solved_groups.len() == NUM_GROUPS {
            Some(GameOutcome::Won)
        } else if self.mistake_count >= MAX_MISTAKES {
            Some(GameOutcome::Lost)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    fn grid() -> Grid {
        Grid::from_groups([
            ["a1", "a2", "a3", "a4"],
            ["b1", "b2", "b3", "b4"],
            ["c1", "c2", "c3", "c4"],
            ["d1", "d2", "d3", "d4"],
        ])
        .unwrap()
    }

    #[test]
    fn guess_from_selection_records_groups_in_selection_order() -> Result<(), EngineError> {
        let guess = Guess::from_selection(&grid(), [12, 0, 5, 1])?;

        assert_eq!(
            guess.colors(),
            [
                GroupColor::Purple,
                GroupColor::Yellow,
                GroupColor::Green,
                GroupColor::Yellow
            ]
        );
        assert_eq!(guess.solved_group(), None);
        Ok(())
    }

    #[test]
    fn guess_solved_group_when_all_match() -> Result<(), EngineError> {
        let guess = Guess::from_selection(&grid(), [11, 9, 8, 10])?;

        assert_eq!(guess.solved_group(), GroupId::new(2));
        assert!(guess.is_correct());
        Ok(())
    }
}
