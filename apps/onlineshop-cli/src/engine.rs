//! # Engine
//!
//! Feeds parsed commands to the [`Registry`] and writes the results.
//!
//! ## Session Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  read line ──► blank? ──yes──► skip                                     │
//! │      │                                                                  │
//! │      no                                                                 │
//! │      ▼                                                                  │
//! │  parse Command ──► Close? ──yes──► stop                                 │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  execute on Registry ──► Reply / CliError ──► write one result          │
//! │      │                                                                  │
//! │      └── failed and stop_on_error? ──► stop                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};

use serde::Serialize;
use tracing::{debug, warn};

use onlineshop_core::{Confirmation, Registry};

use crate::command::Command;
use crate::config::{OutputFormat, ShopConfig};
use crate::error::{CliError, CliResult, ErrorReport};

/// Successful result of one command.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// An add/remove went through.
    Confirmed(Confirmation),
    /// A computer summary (purchase or data query).
    Summary(String),
    /// `Close` was read.
    Closed,
}

/// Counters for a finished session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SessionStats {
    pub executed: usize,
    pub failed: usize,
}

/// One JSON output line.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonLine<'a> {
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    confirmation: Option<&'a Confirmation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorReport>,
}

/// Owns the registry for the length of a session.
#[derive(Debug, Default)]
pub struct Engine {
    registry: Registry,
}

impl Engine {
    pub fn new() -> Self {
        Engine::default()
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Runs a single command against the registry.
    pub fn execute(&mut self, command: Command) -> CliResult<Reply> {
        let reply = match command {
            Command::AddComputer {
                kind,
                id,
                manufacturer,
                model,
                price,
            } => Reply::Confirmed(
                self.registry
                    .add_computer(&kind, id, &manufacturer, &model, price)?,
            ),
            Command::AddPeripheral {
                computer_id,
                id,
                kind,
                manufacturer,
                model,
                price,
                overall_performance,
                connection_type,
            } => Reply::Confirmed(self.registry.add_peripheral(
                computer_id,
                id,
                &kind,
                &manufacturer,
                &model,
                price,
                overall_performance,
                &connection_type,
            )?),
            Command::RemovePeripheral { kind, computer_id } => {
                Reply::Confirmed(self.registry.remove_peripheral(&kind, computer_id)?)
            }
            Command::AddComponent {
                computer_id,
                id,
                kind,
                manufacturer,
                model,
                price,
                overall_performance,
                generation,
            } => Reply::Confirmed(self.registry.add_component(
                computer_id,
                id,
                &kind,
                &manufacturer,
                &model,
                price,
                overall_performance,
                generation,
            )?),
            Command::RemoveComponent { kind, computer_id } => {
                Reply::Confirmed(self.registry.remove_component(&kind, computer_id)?)
            }
            Command::BuyComputer { id } => Reply::Summary(self.registry.buy_computer(id)?),
            Command::BuyBest { budget } => Reply::Summary(self.registry.buy_best_computer(budget)?),
            Command::GetComputerData { id } => {
                Reply::Summary(self.registry.get_computer_data(id)?)
            }
            Command::Close => Reply::Closed,
        };
        Ok(reply)
    }

    /// Parses and runs one input line.
    pub fn execute_line(&mut self, line: &str) -> CliResult<Reply> {
        let command: Command = line.parse()?;
        debug!(?command, "executing command");
        self.execute(command)
    }

    /// Processes `input` line by line until EOF or `Close`, writing one result
    /// per command to `output`.
    ///
    /// Command failures are written as results; only I/O failures end the
    /// session with an error.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        mut output: W,
        config: &ShopConfig,
    ) -> CliResult<SessionStats> {
        let mut stats = SessionStats::default();

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let result = self.execute_line(&line);
            if matches!(result, Ok(Reply::Closed)) {
                debug!("close requested");
                break;
            }

            stats.executed += 1;
            if let Err(err) = &result {
                stats.failed += 1;
                warn!(code = ?err.code(), error = %err, line = %line.trim(), "command failed");
            }
            write_result(&mut output, config.output, &result)?;

            if result.is_err() && config.stop_on_error {
                warn!("stopping after first failed command");
                break;
            }
        }

        output.flush()?;
        Ok(stats)
    }
}

fn write_result<W: Write>(
    output: &mut W,
    format: OutputFormat,
    result: &CliResult<Reply>,
) -> CliResult<()> {
    match format {
        OutputFormat::Text => match result {
            Ok(Reply::Confirmed(confirmation)) => writeln!(output, "{}", confirmation)?,
            Ok(Reply::Summary(summary)) => writeln!(output, "{}", summary)?,
            Ok(Reply::Closed) => {}
            Err(err) => writeln!(output, "{}", err)?,
        },
        OutputFormat::Json => {
            let line = match result {
                Ok(Reply::Confirmed(confirmation)) => JsonLine {
                    ok: true,
                    confirmation: Some(confirmation),
                    summary: None,
                    error: None,
                },
                Ok(Reply::Summary(summary)) => JsonLine {
                    ok: true,
                    confirmation: None,
                    summary: Some(summary),
                    error: None,
                },
                Ok(Reply::Closed) => return Ok(()),
                Err(err) => JsonLine {
                    ok: false,
                    confirmation: None,
                    summary: None,
                    error: Some(err.report()),
                },
            };
            serde_json::to_writer(&mut *output, &line).map_err(std::io::Error::from)?;
            writeln!(output)?;
        }
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
