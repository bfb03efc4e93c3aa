//! # Error Types
//!
//! Domain-specific error types for onlineshop-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  onlineshop-core errors (this file)                                    │
//! │  └── ShopError        - Registry rule violations                       │
//! │                                                                         │
//! │  onlineshop-cli errors (separate crate)                                │
//! │  └── CliError         - Parse/config/IO failures + wrapped ShopError   │
//! │                                                                         │
//! │  Flow: ShopError → CliError → printed message / JSON error object      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. The `Display` text IS the user-facing message
//! 3. Every failure is detected before the registry is mutated

use serde::Serialize;
use thiserror::Error;

use crate::types::{ComputerKind, Namespace};

// =============================================================================
// Shop Error
// =============================================================================

/// Registry rule violations.
///
/// None of these are transient: retrying the same call yields the same error.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(tag = "error", rename_all = "snake_case")]
pub enum ShopError {
    /// The id is already taken in its namespace.
    ///
    /// ## When This Occurs
    /// - `add_computer` with an id already registered as a computer
    /// - `add_component` / `add_peripheral` with an id already installed
    ///   somewhere in the shop (ids are global within their namespace)
    #[error("{namespace} with this id already exists.")]
    DuplicateId { namespace: Namespace, id: i32 },

    /// The referenced computer is not in the registry.
    #[error("Computer with this id does not exist.")]
    UnknownComputer { id: i32 },

    /// The type tag names no known computer/component/peripheral kind.
    #[error("{namespace} type is invalid.")]
    UnknownVariant { namespace: Namespace, tag: String },

    /// A remove was requested for a kind the computer does not have installed.
    ///
    /// `kind` keeps the raw tag the caller sent, so a misspelled tag is
    /// reported the same way as a missing item.
    #[error("{namespace} {kind} does not exist in {computer_kind} with Id {computer_id}.")]
    NoSuchInstalledItem {
        namespace: Namespace,
        kind: String,
        computer_kind: ComputerKind,
        computer_id: i32,
    },

    /// No computer's effective price fits the budget.
    #[error("Can't buy a computer with a budget of ${budget:.2}.")]
    BudgetExceeded { budget: f64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with ShopError.
pub type ShopResult<T> = Result<T, ShopError>;

// =============================================================================
// Unit Tests
// =============================================================================
