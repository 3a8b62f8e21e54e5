//! Interactive read-eval-print loop

use super::menu::{parse_menu_input, resolve_pending, MenuInput};
use super::render::{error, render_menu_header, render_outcome, warning, MENU};
use crate::error::{Error, Result};
use crate::session::{Command, Outcome, Session};
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::{debug, warn};

/// Menu-driven terminal front end for a `Session`
pub struct Repl {
    session: Session,
    editor: DefaultEditor,
}

impl Repl {
    pub fn new(session: Session) -> Result<Self> {
        let editor = DefaultEditor::new()
            .map_err(|e| Error::Other(format!("cannot open terminal: {e}")))?;
        Ok(Self { session, editor })
    }

    /// Run until the operator quits or closes input
    pub async fn run(&mut self) -> Result<()> {
        println!(
            "{}",
            "═══ Collection Explorer - interactive session ═══"
                .bold()
                .blue()
        );
        println!("Loading initial data...\n");
        self.dispatch(Command::ViewPage).await;

        loop {
            println!("\n{}", render_menu_header(&self.session));
            println!("\n{}\n{MENU}", "Options:".bold());

            let line = match self.editor.readline("\nChoice: ") {
                Ok(line) => line,
                Err(ReadlineError::Interrupted) => {
                    println!("{}", "CTRL-C detected. Type 'q' to quit.".yellow());
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    self.dispatch(Command::Quit).await;
                    return Ok(());
                }
                Err(e) => return Err(Error::Other(format!("input error: {e}"))),
            };
            let _ = self.editor.add_history_entry(line.as_str());

            let command = match parse_menu_input(&line) {
                Ok(MenuInput::Run(command)) => command,
                Ok(MenuInput::Prompt(pending)) => match self.editor.readline(pending.prompt()) {
                    Ok(answer) => match resolve_pending(pending, &answer) {
                        Ok(command) => command,
                        Err(e) => {
                            println!("{}", error(&e.to_string()));
                            continue;
                        }
                    },
                    Err(ReadlineError::Interrupted | ReadlineError::Eof) => continue,
                    Err(e) => return Err(Error::Other(format!("input error: {e}"))),
                },
                Ok(MenuInput::Help | MenuInput::Empty) => continue,
                Err(e) => {
                    println!("{}", error(&e.to_string()));
                    continue;
                }
            };

            let quitting = command == Command::Quit;
            self.dispatch(command).await;
            if quitting {
                return Ok(());
            }
        }
    }

    /// Execute one command and print its outcome or error
    async fn dispatch(&mut self, command: Command) {
        let result = if command == Command::LoadAll {
            self.load_all_with_interrupt().await
        } else {
            self.session.execute(command).await
        };

        match result {
            Ok(outcome) => println!("{}", render_outcome(&outcome)),
            Err(e) => {
                debug!(error = %e, "Command failed");
                println!("{}", error(&e.to_string()));
                if e.is_rate_limited() {
                    println!(
                        "{}",
                        warning("Rate limit hit. Waited before reporting; issue the command again.")
                    );
                }
            }
        }
    }

    /// Run `LoadAll` with Ctrl+C wired to cooperative cancellation
    async fn load_all_with_interrupt(&mut self) -> Result<Outcome> {
        println!(
            "{}",
            "Loading all records... This may take a while.".yellow()
        );
        println!("Press Ctrl+C to cancel\n");

        let token = self.session.cancel_token();
        let watcher = tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                warn!("Interrupt received; stopping after the current page");
                token.cancel();
            }
        });

        let result = self.session.execute(Command::LoadAll).await;
        watcher.abort();
        result
    }
}
