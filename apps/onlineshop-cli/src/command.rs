//! # Commands
//!
//! Parses one input line into a [`Command`].
//!
//! ## Line Format
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  <Name> <arg> <arg> ...        (whitespace separated, no quoting)       │
//! │                                                                         │
//! │  AddComputer      type id manufacturer model price                      │
//! │  AddPeripheral    computerId id type manufacturer model price           │
//! │                   performance connectionType                            │
//! │  RemovePeripheral type computerId                                       │
//! │  AddComponent     computerId id type manufacturer model price           │
//! │                   performance generation                                │
//! │  RemoveComponent  type computerId                                       │
//! │  BuyComputer      id                                                    │
//! │  BuyBest          budget                                                │
//! │  GetComputerData  id                                                    │
//! │  Close                                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Kind tags are passed through as text; the registry decides whether they
//! name a known kind.

use std::str::FromStr;

use thiserror::Error;

/// A parsed input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    AddComputer {
        kind: String,
        id: i32,
        manufacturer: String,
        model: String,
        price: f64,
    },
    AddPeripheral {
        computer_id: i32,
        id: i32,
        kind: String,
        manufacturer: String,
        model: String,
        price: f64,
        overall_performance: f64,
        connection_type: String,
    },
    RemovePeripheral {
        kind: String,
        computer_id: i32,
    },
    AddComponent {
        computer_id: i32,
        id: i32,
        kind: String,
        manufacturer: String,
        model: String,
        price: f64,
        overall_performance: f64,
        generation: i32,
    },
    RemoveComponent {
        kind: String,
        computer_id: i32,
    },
    BuyComputer {
        id: i32,
    },
    BuyBest {
        budget: f64,
    },
    GetComputerData {
        id: i32,
    },
    Close,
}

/// Why a line could not be turned into a [`Command`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("empty command line")]
    Empty,

    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    #[error("{command} expects {expected} argument(s), got {found}")]
    Arity {
        command: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("{command}: {field} must be a number, got '{value}'")]
    InvalidNumber {
        command: &'static str,
        field: &'static str,
        value: String,
    },
}

/// Positional access to a command's arguments.
struct Args<'a> {
    command: &'static str,
    tokens: std::slice::Iter<'a, &'a str>,
}

impl<'a> Args<'a> {
    fn new(command: &'static str, tokens: &'a [&'a str], expected: usize) -> Result<Self, ParseError> {
        if tokens.len() != expected {
            return Err(ParseError::Arity {
                command,
                expected,
                found: tokens.len(),
            });
        }
        Ok(Args {
            command,
            tokens: tokens.iter(),
        })
    }

    // Arity is checked up front, so the iterator never runs dry.
    fn next(&mut self) -> &'a str {
        self.tokens.next().copied().unwrap_or_default()
    }

    fn text(&mut self) -> String {
        self.next().to_string()
    }

    fn number<T: FromStr>(&mut self, field: &'static str) -> Result<T, ParseError> {
        let value = self.next();
        value.parse().map_err(|_| ParseError::InvalidNumber {
            command: self.command,
            field,
            value: value.to_string(),
        })
    }
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let (name, rest) = tokens.split_first().ok_or(ParseError::Empty)?;

        match *name {
            "AddComputer" => {
                let mut args = Args::new("AddComputer", rest, 5)?;
                Ok(Command::AddComputer {
                    kind: args.text(),
                    id: args.number("id")?,
                    manufacturer: args.text(),
                    model: args.text(),
                    price: args.number("price")?,
                })
            }
            "AddPeripheral" => {
                let mut args = Args::new("AddPeripheral", rest, 8)?;
                Ok(Command::AddPeripheral {
                    computer_id: args.number("computer id")?,
                    id: args.number("id")?,
                    kind: args.text(),
                    manufacturer: args.text(),
                    model: args.text(),
                    price: args.number("price")?,
                    overall_performance: args.number("overall performance")?,
                    connection_type: args.text(),
                })
            }
            "RemovePeripheral" => {
                let mut args = Args::new("RemovePeripheral", rest, 2)?;
                Ok(Command::RemovePeripheral {
                    kind: args.text(),
                    computer_id: args.number("computer id")?,
                })
            }
            "AddComponent" => {
                let mut args = Args::new("AddComponent", rest, 8)?;
                Ok(Command::AddComponent {
                    computer_id: args.number("computer id")?,
                    id: args.number("id")?,
                    kind: args.text(),
                    manufacturer: args.text(),
                    model: args.text(),
                    price: args.number("price")?,
                    overall_performance: args.number("overall performance")?,
                    generation: args.number("generation")?,
                })
            }
            "RemoveComponent" => {
                let mut args = Args::new("RemoveComponent", rest, 2)?;
                Ok(Command::RemoveComponent {
                    kind: args.text(),
                    computer_id: args.number("computer id")?,
                })
            }
            "BuyComputer" => {
                let mut args = Args::new("BuyComputer", rest, 1)?;
                Ok(Command::BuyComputer {
                    id: args.number("id")?,
                })
            }
            "BuyBest" => {
                let mut args = Args::new("BuyBest", rest, 1)?;
                Ok(Command::BuyBest {
                    budget: args.number("budget")?,
                })
            }
            "GetComputerData" => {
                let mut args = Args::new("GetComputerData", rest, 1)?;
                Ok(Command::GetComputerData {
                    id: args.number("id")?,
                })
            }
            "Close" => {
                Args::new("Close", rest, 0)?;
                Ok(Command::Close)
            }
            other => Err(ParseError::UnknownCommand(other.to_string())),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
