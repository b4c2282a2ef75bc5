use crate::engine::GameEngine;
use crate::results::*;
use std::str::FromStr;
use thiserror::Error;

/// A single player input, as fed to the engine by a driver.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Command {
    /// Toggle the tile at this index.
    Toggle(usize),
    /// Submit the current selection as a guess.
    Submit,
}

/// The result of applying one [`Command`].
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CommandResult {
    Toggled(SelectionChanged),
    Guessed(GuessOutcome),
}

/// Indicates that a command script could not be parsed.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ScriptError {
    /// The token at this zero-based position is neither a tile index nor a submit command.
    #[error("Unrecognized command {token:?} at position {position}; expected a tile index or 'g'")]
    InvalidToken { position: usize, token: String },
}

impl FromStr for Command {
    type Err = ScriptError;

    /// Parses a tile index like `"7"`, or `"g"`/`"guess"` for a submit.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let token = token.trim();
        if token.eq_ignore_ascii_case("g") || token.eq_ignore_ascii_case("guess") {
            return Ok(Command::Submit);
        }
        token
            .parse::<usize>()
            .map(Command::Toggle)
            .map_err(|_| ScriptError::InvalidToken {
                position: 0,
                token: token.to_string(),
            })
    }
}

/// Parses a script of commands separated by commas and/or whitespace.
///
/// ```
/// use rs_connections::*;
///
/// let commands = parse_script("0, 1, 2, 3, g")?;
/// assert_eq!(commands.len(), 5);
/// assert_eq!(commands[4], Command::Submit);
/// # Ok::<(), ScriptError>(())
/// ```
pub fn parse_script(script: &str) -> Result<Vec<Command>, ScriptError> {
    script
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(position, token)| {
            token.parse::<Command>().map_err(|e| match e {
                ScriptError::InvalidToken { token, .. } => {
                    ScriptError::InvalidToken { position, token }
                }
            })
        })
        .collect()
}

impl GameEngine {
    /// Applies a single command to this game.
    pub fn apply(&mut self, command: Command) -> Result<CommandResult, EngineError> {
        match command {
            Command::Toggle(index) => self.toggle_selection(index).map(CommandResult::Toggled),
            Command::Submit => self.submit_guess().map(CommandResult::Guessed),
        }
    }
}

/// Applies every command in order and returns the result of each.
///
/// A rejected command does not stop the replay. Replaying the same commands against the same
/// answer key always produces the same results.
pub fn replay<'a, I>(
    engine: &mut GameEngine,
    commands: I,
) -> Vec<Result<CommandResult, EngineError>>
where
    I: IntoIterator<Item = &'a Command>,
{
    commands
        .into_iter()
        .map(|command| engine.apply(*command))
        .collect()
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn command_from_str_accepts_indices_and_guess() {
        assert_eq!("12".parse::<Command>(), Ok(Command::Toggle(12)));
        assert_eq!(" G ".parse::<Command>(), Ok(Command::Submit));
        assert_eq!("guess".parse::<Command>(), Ok(Command::Submit));
    }

    #[test]
    fn command_from_str_rejects_negative_index() {
        assert_eq!(
            "-1".parse::<Command>(),
            Err(ScriptError::InvalidToken {
                position: 0,
                token: "-1".to_string()
            })
        );
    }

    #[test]
    fn parse_script_reports_token_position() {
        assert_eq!(
            parse_script("0 1,,2 x 3"),
            Err(ScriptError::InvalidToken {
                position: 3,
                token: "x".to_string()
            })
        );
    }
}
