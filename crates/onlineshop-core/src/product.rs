//! # Products
//!
//! The sellable items: the shared [`ProductInfo`] record, the [`Product`]
//! accessor trait, and the two installable families ([`Component`],
//! [`Peripheral`]). [`Computer`](crate::computer::Computer) lives in its own
//! module because it aggregates the other two.
//!
//! ## Composition Instead of Inheritance
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   Component  = ProductInfo + ComponentKind  + generation                │
//! │   Peripheral = ProductInfo + PeripheralKind + connection_type           │
//! │   Computer   = ProductInfo + ComputerKind   + installed slots           │
//! │                                                                         │
//! │   All three implement `Product` (id, price, performance, ...)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Performance multipliers are applied exactly once, in the constructors.

use serde::Serialize;
use std::fmt;

use crate::types::{ComponentKind, PeripheralKind};

// =============================================================================
// Product Info
// =============================================================================

/// Identity and attributes shared by every sellable item.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInfo {
    pub id: i32,
    pub manufacturer: String,
    pub model: String,
    pub price: f64,
    pub overall_performance: f64,
}

impl ProductInfo {
    pub fn new(
        id: i32,
        manufacturer: impl Into<String>,
        model: impl Into<String>,
        price: f64,
        overall_performance: f64,
    ) -> Self {
        ProductInfo {
            id,
            manufacturer: manufacturer.into(),
            model: model.into(),
            price,
            overall_performance,
        }
    }
}

// =============================================================================
// Product Trait
// =============================================================================

/// Read access common to everything the shop sells.
///
/// `price` and `overall_performance` default to the item's own values;
/// aggregates override them to include what is installed.
pub trait Product {
    fn info(&self) -> &ProductInfo;

    fn id(&self) -> i32 {
        self.info().id
    }

    fn manufacturer(&self) -> &str {
        &self.info().manufacturer
    }

    fn model(&self) -> &str {
        &self.info().model
    }

    fn price(&self) -> f64 {
        self.info().price
    }

    fn overall_performance(&self) -> f64 {
        self.info().overall_performance
    }
}

/// Writes the one-line summary every product starts with.
pub(crate) fn write_headline(
    f: &mut fmt::Formatter<'_>,
    product: &impl Product,
    kind: impl fmt::Display,
) -> fmt::Result {
    write!(
        f,
        "Overall Performance: {:.2}. Price: {:.2} - {}: {} {} (Id: {})",
        product.overall_performance(),
        product.price(),
        kind,
        product.manufacturer(),
        product.model(),
        product.id()
    )
}

// =============================================================================
// Component
// =============================================================================

/// An installable part (CPU, PSU, ...).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    pub kind: ComponentKind,
    #[serde(flatten)]
    pub info: ProductInfo,
    pub generation: i32,
}

impl Component {
    /// Builds a component, scaling `overall_performance` by the kind's
    /// multiplier.
    pub fn new(
        kind: ComponentKind,
        id: i32,
        manufacturer: impl Into<String>,
        model: impl Into<String>,
        price: f64,
        overall_performance: f64,
        generation: i32,
    ) -> Self {
        Component {
            kind,
            info: ProductInfo::new(
                id,
                manufacturer,
                model,
                price,
                overall_performance * kind.multiplier(),
            ),
            generation,
        }
    }
}

impl Product for Component {
    fn info(&self) -> &ProductInfo {
        &self.info
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_headline(f, self, self.kind)?;
        write!(f, " Generation: {}", self.generation)
    }
}

// =============================================================================
// Peripheral
// =============================================================================

/// An installable accessory (keyboard, monitor, ...).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Peripheral {
    pub kind: PeripheralKind,
    #[serde(flatten)]
    pub info: ProductInfo,
    /// Free-form, e.g. "USB" or "Bluetooth".
    pub connection_type: String,
}

impl Peripheral {
    /// Builds a peripheral, scaling `overall_performance` by the kind's
    /// multiplier.
    pub fn new(
        kind: PeripheralKind,
        id: i32,
        manufacturer: impl Into<String>,
        model: impl Into<String>,
        price: f64,
        overall_performance: f64,
        connection_type: impl Into<String>,
    ) -> Self {
        Peripheral {
            kind,
            info: ProductInfo::new(
                id,
                manufacturer,
                model,
                price,
                overall_performance * kind.multiplier(),
            ),
            connection_type: connection_type.into(),
        }
    }
}

impl Product for Peripheral {
    fn info(&self) -> &ProductInfo {
        &self.info
    }
}

impl fmt::Display for Peripheral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_headline(f, self, self.kind)?;
        write!(f, " Connection Type: {}", self.connection_type)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
