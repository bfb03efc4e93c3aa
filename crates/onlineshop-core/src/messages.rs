//! # Confirmations
//!
//! Structured success results of the registry's mutating operations.
//!
//! A front end can print the `Display` text or serialize the value; the
//! registry itself never formats output for a specific channel.

use serde::Serialize;
use std::fmt;

use crate::types::{ComponentKind, PeripheralKind};

/// What a successful add/remove did.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Confirmation {
    ComputerAdded {
        id: i32,
    },
    ComponentAdded {
        kind: ComponentKind,
        id: i32,
        computer_id: i32,
    },
    ComponentRemoved {
        kind: ComponentKind,
        id: i32,
    },
    PeripheralAdded {
        kind: PeripheralKind,
        id: i32,
        computer_id: i32,
    },
    PeripheralRemoved {
        kind: PeripheralKind,
        id: i32,
    },
}

impl fmt::Display for Confirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Confirmation::ComputerAdded { id } => {
                write!(f, "Computer with id {} added successfully.", id)
            }
            Confirmation::ComponentAdded { kind, id, computer_id } => write!(
                f,
                "Component {} with id {} added successfully in computer with id {}.",
                kind, id, computer_id
            ),
            Confirmation::PeripheralAdded { kind, id, computer_id } => write!(
                f,
                "Peripheral {} with id {} added successfully in computer with id {}.",
                kind, id, computer_id
            ),
            Confirmation::ComponentRemoved { kind, id } => {
                write!(f, "Successfully removed {} with id {}.", kind, id)
            }
            Confirmation::PeripheralRemoved { kind, id } => {
                write!(f, "Successfully removed {} with id {}.", kind, id)
            }
        }
    }
}
