//! # Console
//!
//! Terminal input and output for the desk: asking for missing tariff
//! values, and the interactive shell.
//!
//! ## Shell Line Handling
//! ```text
//! tariffs> add "New York" 1200 15
//!    │
//!    │ split_line (whitespace, double quotes group words)
//!    ▼
//! ["add", "New York", "1200", "15"]
//!    │
//!    │ clap (same Action enum as the command line)
//!    ▼
//! dispatch ──► Outcome shown / ApiError warned ──► next prompt
//! ```
//!
//! Tables go to stdout; prompts, warnings and errors go to stderr.

use std::io::{self, BufRead, IsTerminal, Write};

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use tariff_core::validation::{
    validate_direction, validate_discount, validate_price, ValidationResult,
};
use tariff_core::TariffInput;
use tracing::{debug, warn};

use crate::commands::{dispatch, Action};
use crate::error::{ApiError, ApiResult, ErrorCode};
use crate::state::Session;

/// Line-oriented user interaction.
pub trait Console {
    /// Shows `label` and reads one line, without its line ending.
    /// `None` once input has ended.
    fn ask(&mut self, label: &str) -> io::Result<Option<String>>;

    /// Shows a result.
    fn show(&mut self, text: &str);

    /// Shows a warning or an error.
    fn warn(&mut self, text: &str);

    /// Whether a person is typing; invalid values are asked for again only
    /// then.
    fn is_interactive(&self) -> bool;
}

/// Console on the process's standard streams.
#[derive(Debug)]
pub struct StdConsole {
    interactive: bool,
}

impl StdConsole {
    pub fn new() -> Self {
        StdConsole {
            interactive: io::stdin().is_terminal(),
        }
    }
}

impl Default for StdConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for StdConsole {
    fn ask(&mut self, label: &str) -> io::Result<Option<String>> {
        {
            let mut stderr = io::stderr().lock();
            write!(stderr, "{} ", label)?;
            stderr.flush()?;
        }

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn show(&mut self, text: &str) {
        println!("{}", text);
    }

    fn warn(&mut self, text: &str) {
        eprintln!("{}", text);
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}

/// Completes a tariff from the values given and, for the rest, from the
/// console.
///
/// ## Behavior
/// - Fields are taken in order: direction, price, discount
/// - An invalid value is reported and asked for again when the console is
///   interactive; otherwise it fails the action with `VALIDATION_ERROR`
/// - `Ok(None)` when input ends before all three values are known
pub fn collect_entry<C: Console>(
    console: &mut C,
    direction: Option<String>,
    price: Option<String>,
    discount: Option<String>,
) -> ApiResult<Option<TariffInput>> {
    let Some(direction) = collect_field(console, "Direction:", direction, validate_direction)?
    else {
        return Ok(None);
    };
    let Some(price) = collect_field(console, "Price:", price, validate_price)? else {
        return Ok(None);
    };
    let Some(discount) = collect_field(console, "Discount (%):", discount, validate_discount)?
    else {
        return Ok(None);
    };

    Ok(Some(TariffInput {
        direction,
        price,
        discount,
    }))
}

fn collect_field<C: Console, T>(
    console: &mut C,
    label: &str,
    given: Option<String>,
    validate: fn(&str) -> ValidationResult<T>,
) -> ApiResult<Option<T>> {
    let mut pending = given;

    loop {
        let text = match pending.take() {
            Some(text) => text,
            None => match console.ask(label).map_err(read_error)? {
                Some(text) => text,
                None => return Ok(None),
            },
        };

        match validate(&text) {
            Ok(value) => return Ok(Some(value)),
            Err(err) if console.is_interactive() => {
                debug!(field = err.field(), "Asking again after invalid input");
                console.warn(&format!("Invalid input: {}", err));
            }
            Err(err) => return Err(err.into()),
        }
    }
}

fn read_error(err: io::Error) -> ApiError {
    ApiError::new(ErrorCode::IoError, format!("Failed to read input: {}", err))
}

// =============================================================================
// Shell
// =============================================================================

/// One shell line.
#[derive(Debug, Parser)]
#[command(
    name = "tariff-desk",
    no_binary_name = true,
    disable_version_flag = true,
    override_usage = "<ACTION> [ARGS]..."
)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Debug, Subcommand)]
enum ShellCommand {
    #[command(flatten)]
    Action(Action),

    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

/// Reads and runs actions until `quit` or end of input.
///
/// Action errors are reported and the shell carries on; only a failure to
/// read input ends it early.
pub async fn run_shell<C: Console>(session: &mut Session, console: &mut C) -> io::Result<()> {
    if console.is_interactive() {
        console.warn("Tariff desk. Type `help` for the list of actions.");
    }

    loop {
        let label = format!("{}>", session.active_partition());
        let Some(line) = console.ask(&label)? else {
            break;
        };

        let words = match split_line(&line) {
            Ok(words) => words,
            Err(message) => {
                console.warn(&message);
                continue;
            }
        };

        if words.is_empty() {
            continue;
        }

        let command = match ShellLine::try_parse_from(words) {
            Ok(parsed) => parsed.command,
            Err(err) => {
                match err.kind() {
                    ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                        console.show(err.to_string().trim_end())
                    }
                    _ => console.warn(err.to_string().trim_end()),
                }
                continue;
            }
        };

        let action = match command {
            ShellCommand::Quit => break,
            ShellCommand::Action(action) => action,
        };

        match dispatch(session, action, console).await {
            Ok(outcome) => console.show(&outcome.to_string()),
            Err(err) => {
                warn!(code = %err.code, "Action failed: {}", err);
                console.warn(&format!("Error: {}", err));
            }
        }
    }

    debug!("Shell finished");
    Ok(())
}

/// Splits a shell line into words. Double quotes group words containing
/// spaces; `""` is an empty word.
fn split_line(line: &str) -> Result<Vec<String>, String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quoted = false;

    for c in line.chars() {
        match c {
            '"' => {
                quoted = !quoted;
                in_word = true;
            }
            c if c.is_whitespace() && !quoted => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            c => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if quoted {
        return Err("Unterminated quote".to_string());
    }

    if in_word {
        words.push(current);
    }

    Ok(words)
}
