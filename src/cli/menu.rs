//! Menu input parsing
//!
//! Maps one line of operator input to a session `Command`. Choices that need
//! an argument accept it inline (`4 3`, `6 alice`) or ask for it afterwards.

use crate::error::{Error, Result};
use crate::session::Command;
use crate::types::ExportFormat;

/// What a line of menu input asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuInput {
    /// A complete command
    Run(Command),
    /// A command that still needs an argument
    Prompt(PendingArgument),
    /// Show the menu again
    Help,
    /// Blank line
    Empty,
}

/// The argument a menu choice is waiting for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingArgument {
    PageNumber,
    PageSize,
    SearchTerm,
    ExportFormat,
    RecordId,
}

impl PendingArgument {
    /// Prompt shown when asking for this argument
    pub fn prompt(self) -> &'static str {
        match self {
            PendingArgument::PageNumber => "Enter page number: ",
            PendingArgument::PageSize => "Enter new page size (1-100): ",
            PendingArgument::SearchTerm => "Enter search term (name or email): ",
            PendingArgument::ExportFormat => "Export format ((c)sv/(j)son): ",
            PendingArgument::RecordId => "Enter record id: ",
        }
    }
}

/// Parse one line of menu input
pub fn parse_menu_input(line: &str) -> Result<MenuInput> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(MenuInput::Empty);
    }

    let (choice, rest) = match line.split_once(char::is_whitespace) {
        Some((choice, rest)) => (choice, rest.trim()),
        None => (line, ""),
    };

    let with_argument = |pending: PendingArgument| {
        if rest.is_empty() {
            Ok(MenuInput::Prompt(pending))
        } else {
            resolve_pending(pending, rest).map(MenuInput::Run)
        }
    };

    match choice.to_lowercase().as_str() {
        "1" => Ok(MenuInput::Run(Command::ViewPage)),
        "2" | "n" | "next" => Ok(MenuInput::Run(Command::NextPage)),
        "3" | "p" | "prev" => Ok(MenuInput::Run(Command::PreviousPage)),
        "4" => with_argument(PendingArgument::PageNumber),
        "5" => with_argument(PendingArgument::PageSize),
        "6" => with_argument(PendingArgument::SearchTerm),
        "7" => Ok(MenuInput::Run(Command::LoadAll)),
        "8" => Ok(MenuInput::Run(Command::ShowStats)),
        "9" => with_argument(PendingArgument::ExportFormat),
        "l" | "lookup" => with_argument(PendingArgument::RecordId),
        "q" | "quit" | "exit" => Ok(MenuInput::Run(Command::Quit)),
        "h" | "help" | "?" => Ok(MenuInput::Help),
        _ => Err(Error::precondition("Invalid choice. Please try again.")),
    }
}

/// Turn the answer to a prompt into a command
pub fn resolve_pending(pending: PendingArgument, answer: &str) -> Result<Command> {
    let answer = answer.trim();
    match pending {
        PendingArgument::PageNumber => answer
            .parse()
            .map(Command::JumpToPage)
            .map_err(|_| Error::precondition(format!("Invalid page number: '{answer}'"))),
        PendingArgument::PageSize => answer
            .parse()
            .map(Command::ChangePageSize)
            .map_err(|_| Error::precondition(format!("Invalid page size: '{answer}'"))),
        PendingArgument::SearchTerm => Ok(Command::Search(answer.to_string())),
        PendingArgument::ExportFormat => answer.parse::<ExportFormat>().map(Command::Export),
        PendingArgument::RecordId => {
            if answer.is_empty() {
                Err(Error::precondition("record id cannot be blank"))
            } else {
                Ok(Command::Lookup(answer.to_string()))
            }
        }
    }
}
