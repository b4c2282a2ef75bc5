use crate::results::EngineError;
use std::fmt;
use std::io::BufRead;
use std::result::Result;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The number of groups in a puzzle.
pub const NUM_GROUPS: usize = 4;
/// The number of items in each group.
pub const GROUP_SIZE: usize = 4;
/// The number of tiles on the grid.
pub const GRID_SIZE: usize = NUM_GROUPS * GROUP_SIZE;

/// The colour shown for a group once it has been solved, from easiest to hardest.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GroupColor {
    Yellow,
    Green,
    Blue,
    Purple,
}

impl GroupColor {
    /// The single-letter code for this colour.
    pub fn as_char(self) -> char {
        match self {
            GroupColor::Yellow => 'y',
            GroupColor::Green => 'g',
            GroupColor::Blue => 'b',
            GroupColor::Purple => 'p',
        }
    }
}

impl fmt::Display for GroupColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Identifies one of the groups, by its position in the answer key.
#[derive(Debug, Default, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "u8", into = "u8")
)]
pub struct GroupId(u8);

impl GroupId {
    /// Returns the group at the given position in the answer key, if there is one.
    pub fn new(position: usize) -> Option<GroupId> {
        if position < NUM_GROUPS {
            Some(GroupId(position as u8))
        } else {
            None
        }
    }

    /// The zero-based position of this group in the answer key.
    pub fn position(self) -> usize {
        self.0 as usize
    }

    /// The colour shown for this group once it is solved.
    pub fn color(self) -> GroupColor {
        match self.0 {
            0 => GroupColor::Yellow,
            1 => GroupColor::Green,
            2 => GroupColor::Blue,
            _ => GroupColor::Purple,
        }
    }
}

impl TryFrom<u8> for GroupId {
    type Error = EngineError;

    fn try_from(position: u8) -> Result<Self, Self::Error> {
        GroupId::new(position as usize).ok_or_else(|| {
            EngineError::InvalidAnswerKey(format!(
                "there is no group at position {}; the answer key has {}",
                position, NUM_GROUPS
            ))
        })
    }
}

impl From<GroupId> for u8 {
    fn from(group_id: GroupId) -> u8 {
        group_id.0
    }
}

/// One tile of the puzzle.
#[derive(Debug, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Item {
    text: Arc<str>,
    group_id: GroupId,
}

impl Item {
    /// The label shown on this tile.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub(crate) fn shared_text(&self) -> Arc<str> {
        Arc::clone(&self.text)
    }

    /// The group this tile belongs to.
    pub fn group_id(&self) -> GroupId {
        self.group_id
    }
}

/// The fixed set of tiles for one puzzle.
///
/// Items are laid out in answer-key order: the first group's items occupy indices `0..4`, the
/// second group's `4..8`, and so on. A grid never changes after it is built, so it can be shared
/// freely between readers.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Grid {
    items: Vec<Item>,
}

impl Grid {
    /// Builds a grid from an answer key of exactly four groups with exactly four items each.
    ///
    /// Item labels are trimmed. Returns [`EngineError::InvalidAnswerKey`] if the key has the wrong
    /// shape or contains an empty label.
    ///
    /// ```
    /// use rs_connections::*;
    ///
    /// let grid = Grid::from_groups(vec![
    ///     vec!["bass", "flounder", "salmon", "trout"],
    ///     vec!["ant", "drill", "island", "opal"],
    ///     vec!["bucks", "heat", "jazz", "nets"],
    ///     vec!["are", "queue", "sea", "why"],
    /// ])?;
    /// assert_eq!(grid.item_at(4)?.text(), "ant");
    /// # Ok::<(), EngineError>(())
    /// ```
    pub fn from_groups<I, G, S>(groups: I) -> Result<Grid, EngineError>
    where
        I: IntoIterator<Item = G>,
        G: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut items: Vec<Item> = Vec::with_capacity(GRID_SIZE);
        let mut num_groups = 0;
        for (position, group) in groups.into_iter().enumerate() {
            num_groups += 1;
            let group_id = match GroupId::new(position) {
                Some(id) => id,
                // Keep counting so the error reports how many groups were given.
                None => continue,
            };
            let mut group_size = 0;
            for text in group {
                group_size += 1;
                let text = text.as_ref().trim();
                if text.is_empty() {
                    return Err(EngineError::InvalidAnswerKey(format!(
                        "group {} contains an empty item",
                        position
                    )));
                }
                items.push(Item {
                    text: Arc::from(text),
                    group_id,
                });
            }
            if group_size != GROUP_SIZE {
                return Err(EngineError::InvalidAnswerKey(format!(
                    "group {} has {} items, but every group needs {}",
                    position, group_size, GROUP_SIZE
                )));
            }
        }
        if num_groups != NUM_GROUPS {
            return Err(EngineError::InvalidAnswerKey(format!(
                "found {} groups, but the answer key needs {}",
                num_groups, NUM_GROUPS
            )));
        }
        Ok(Grid { items })
    }

    /// Reads an answer key with one group per line and the items in each group separated by
    /// commas. Blank lines are skipped.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Grid, EngineError> {
        let lines = reader
            .lines()
            .filter(|maybe_line| {
                maybe_line
                    .as_ref()
                    .map_or(true, |line| !line.trim().is_empty())
            })
            .collect::<std::io::Result<Vec<String>>>()?;
        Grid::from_groups(lines.iter().map(|line| line.split(',')))
    }

    /// Returns the item at the given flat index.
    pub fn item_at(&self, index: usize) -> Result<&Item, EngineError> {
        self.items
            .get(index)
            .ok_or(EngineError::IndexOutOfRange(index))
    }

    /// Returns the group of the item at the given flat index.
    pub fn group_of(&self, index: usize) -> Result<GroupId, EngineError> {
        self.item_at(index).map(Item::group_id)
    }

    /// Returns the flat indices of every item in the given group.
    pub fn group_indices(&self, group_id: GroupId) -> [usize; GROUP_SIZE] {
        let start = group_id.position() * GROUP_SIZE;
        std::array::from_fn(|offset| start + offset)
    }

    /// Finds the first tile whose label matches the given text, ignoring case and surrounding
    /// whitespace.
    pub fn index_of(&self, text: &str) -> Option<usize> {
        let text = text.trim();
        self.items
            .iter()
            .position(|item| item.text.eq_ignore_ascii_case(text))
    }

    /// The number of tiles on the grid. Always [`GRID_SIZE`].
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
