//! Text commands accepted by the interactive shell.

use std::str::FromStr;

use thiserror::Error;

/// One user action.
///
/// Card numbers are 1-based, as printed under each card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Go to the card grid.
    Home,
    /// Go to a path such as `/card/3`.
    Open(String),
    /// Show one card by id.
    Card(String),
    /// Go to the reading page.
    Reading,
    /// Begin a reading with the card on the detail page in the Past slot.
    Read,
    /// Shuffle and lay out the spread.
    Start,
    /// Choose a card from the spread.
    Pick(usize),
    Undo,
    /// Reshuffle the cards still in the spread.
    Shuffle,
    /// Discard the reading and return to the instructions.
    Reset,
    /// Turn over a card on the home grid.
    Flip(usize),
    /// Open the detail page of a card on the home grid.
    View(usize),
    /// Return to the previous page.
    Back,
    /// Fetch the deck again.
    Refresh,
    Help,
    Quit,
}

/// Why a line could not be parsed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command `{0}`, type `help` for the list")]
    Unknown(String),
    #[error("`{command}` needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
    #[error("`{0}` is not a card number")]
    InvalidNumber(String),
}

impl Command {
    /// Usage lines for `help`.
    pub const HELP: &'static [(&'static str, &'static str)] = &[
        ("home", "show the card grid"),
        ("open <path>", "go to a path: /, /card/<id>, /reading"),
        ("card <id>", "show one card in full"),
        ("flip <n>", "turn over card n on the grid"),
        ("view <n>", "open card n from the grid"),
        ("back", "return to the previous page"),
        ("reading", "go to the reading page"),
        ("read", "start a reading with the card being viewed"),
        ("start", "shuffle and lay out the spread"),
        ("pick <n>", "choose card n from the spread"),
        ("undo", "take back the last card"),
        ("shuffle", "reshuffle the spread"),
        ("reset", "start the reading over"),
        ("refresh", "load the cards again"),
        ("help", "show this list"),
        ("quit", "leave"),
    ];

    /// Rendered help text.
    #[must_use]
    pub fn help_text() -> String {
        Self::HELP
            .iter()
            .map(|(usage, what)| format!("  {usage:<14} {what}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn number(command: &'static str, arg: Option<&str>) -> Result<usize, CommandError> {
    let arg = arg.ok_or(CommandError::MissingArgument {
        command,
        argument: "a card number",
    })?;
    match arg.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(CommandError::InvalidNumber(arg.to_string())),
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Err(CommandError::Empty);
        };
        let arg = words.next();

        let command = match head.to_ascii_lowercase().as_str() {
            "home" => Command::Home,
            "open" | "go" => Command::Open(
                arg.ok_or(CommandError::MissingArgument {
                    command: "open",
                    argument: "a path",
                })?
                .to_string(),
            ),
            "card" | "show" => Command::Card(
                arg.ok_or(CommandError::MissingArgument {
                    command: "card",
                    argument: "a card id",
                })?
                .to_string(),
            ),
            "reading" => Command::Reading,
            "read" => Command::Read,
            "start" => Command::Start,
            "pick" => Command::Pick(number("pick", arg)?),
            "undo" => Command::Undo,
            "shuffle" => Command::Shuffle,
            "reset" => Command::Reset,
            "flip" => Command::Flip(number("flip", arg)?),
            "view" => Command::View(number("view", arg)?),
            "back" => Command::Back,
            "refresh" | "reload" => Command::Refresh,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(command)
    }
}
