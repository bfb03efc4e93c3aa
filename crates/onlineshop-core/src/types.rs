//! # Kind Types
//!
//! The closed sets of kinds the shop knows about, and the id namespaces.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Kinds                                           │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌──────────────────────┐   ┌─────────────────┐  │
//! │  │  ComputerKind   │   │   ComponentKind      │   │ PeripheralKind  │  │
//! │  │  ─────────────  │   │  ──────────────────  │   │  ─────────────  │  │
//! │  │  DesktopComputer│   │  CentralProcessing.. │   │  Headset        │  │
//! │  │    base 15.0    │   │  Motherboard         │   │  Keyboard       │  │
//! │  │  Laptop         │   │  PowerSupply   ×1.05 │   │  Monitor        │  │
//! │  │    base 10.0    │   │  RandomAccessMemory  │   │  Mouse          │  │
//! │  └─────────────────┘   │  SolidStateDrive     │   └─────────────────┘  │
//! │                        │  VideoCard           │                        │
//! │                        └──────────────────────┘                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every kind parses from, and prints as, its exact tag (`"PowerSupply"`).
//! Parsing is case-sensitive.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ShopError;

// =============================================================================
// Namespace
// =============================================================================

/// One of the three independent id spaces.
///
/// A component and a peripheral may share an id; two components may not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Namespace {
    Computer,
    Component,
    Peripheral,
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Namespace::Computer => write!(f, "Computer"),
            Namespace::Component => write!(f, "Component"),
            Namespace::Peripheral => write!(f, "Peripheral"),
        }
    }
}

// =============================================================================
// Computer Kind
// =============================================================================

/// The two computer variants. They differ only in base performance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComputerKind {
    DesktopComputer,
    Laptop,
}

impl ComputerKind {
    pub const ALL: [ComputerKind; 2] = [ComputerKind::DesktopComputer, ComputerKind::Laptop];

    /// Performance a bare computer of this kind starts with.
    pub const fn base_performance(&self) -> f64 {
        match self {
            ComputerKind::DesktopComputer => 15.0,
            ComputerKind::Laptop => 10.0,
        }
    }

    pub const fn tag(&self) -> &'static str {
        match self {
            ComputerKind::DesktopComputer => "DesktopComputer",
            ComputerKind::Laptop => "Laptop",
        }
    }
}

impl fmt::Display for ComputerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ComputerKind {
    type Err = ShopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DesktopComputer" => Ok(ComputerKind::DesktopComputer),
            "Laptop" => Ok(ComputerKind::Laptop),
            other => Err(ShopError::UnknownVariant {
                namespace: Namespace::Computer,
                tag: other.to_string(),
            }),
        }
    }
}

// =============================================================================
// Component Kind
// =============================================================================

/// The six installable parts. A computer holds at most one of each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentKind {
    CentralProcessingUnit,
    Motherboard,
    PowerSupply,
    RandomAccessMemory,
    SolidStateDrive,
    VideoCard,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 6] = [
        ComponentKind::CentralProcessingUnit,
        ComponentKind::Motherboard,
        ComponentKind::PowerSupply,
        ComponentKind::RandomAccessMemory,
        ComponentKind::SolidStateDrive,
        ComponentKind::VideoCard,
    ];

    /// Factor applied to the supplied performance when the part is built.
    pub const fn multiplier(&self) -> f64 {
        match self {
            ComponentKind::CentralProcessingUnit => 1.25,
            ComponentKind::Motherboard => 1.25,
            ComponentKind::PowerSupply => 1.05,
            ComponentKind::RandomAccessMemory => 1.20,
            ComponentKind::SolidStateDrive => 1.20,
            ComponentKind::VideoCard => 1.15,
        }
    }

    pub const fn tag(&self) -> &'static str {
        match self {
            ComponentKind::CentralProcessingUnit => "CentralProcessingUnit",
            ComponentKind::Motherboard => "Motherboard",
            ComponentKind::PowerSupply => "PowerSupply",
            ComponentKind::RandomAccessMemory => "RandomAccessMemory",
            ComponentKind::SolidStateDrive => "SolidStateDrive",
            ComponentKind::VideoCard => "VideoCard",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ComponentKind {
    type Err = ShopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ComponentKind::ALL
            .into_iter()
            .find(|kind| kind.tag() == s)
            .ok_or_else(|| ShopError::UnknownVariant {
                namespace: Namespace::Component,
                tag: s.to_string(),
            })
    }
}

// =============================================================================
// Peripheral Kind
// =============================================================================

/// The four installable accessories. A computer holds at most one of each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PeripheralKind {
    Headset,
    Keyboard,
    Monitor,
    Mouse,
}

impl PeripheralKind {
    pub const ALL: [PeripheralKind; 4] = [
        PeripheralKind::Headset,
        PeripheralKind::Keyboard,
        PeripheralKind::Monitor,
        PeripheralKind::Mouse,
    ];

    /// Factor applied to the supplied performance when the accessory is built.
    ///
    /// Accessories keep the rating they are sold with.
    pub const fn multiplier(&self) -> f64 {
        match self {
            PeripheralKind::Headset
            | PeripheralKind::Keyboard
            | PeripheralKind::Monitor
            | PeripheralKind::Mouse => 1.0,
        }
    }

    pub const fn tag(&self) -> &'static str {
        match self {
            PeripheralKind::Headset => "Headset",
            PeripheralKind::Keyboard => "Keyboard",
            PeripheralKind::Monitor => "Monitor",
            PeripheralKind::Mouse => "Mouse",
        }
    }
}

impl fmt::Display for PeripheralKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for PeripheralKind {
    type Err = ShopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PeripheralKind::ALL
            .into_iter()
            .find(|kind| kind.tag() == s)
            .ok_or_else(|| ShopError::UnknownVariant {
                namespace: Namespace::Peripheral,
                tag: s.to_string(),
            })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
