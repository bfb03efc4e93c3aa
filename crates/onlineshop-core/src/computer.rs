//! # Computer Aggregate
//!
//! A computer owns its installed components and peripherals.
//!
//! ## Slots
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Computer (Laptop #3)                                                   │
//! │                                                                         │
//! │  components:   [ CPU #10 ][ PowerSupply #11 ][ VideoCard #12 ]          │
//! │  peripherals:  [ Mouse #10 ][ Monitor #14 ]                             │
//! │                                                                         │
//! │  • at most one entry per kind in each list                              │
//! │  • installing a kind that is already present replaces it in place       │
//! │  • lists keep installation order (used for rendering)                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Effective Values
//! - price       = own price + Σ component prices + Σ peripheral prices
//! - performance = own (base) performance + Σ component performances
//!                 + Σ peripheral performances

use std::fmt;

use crate::product::{write_headline, Component, Peripheral, Product, ProductInfo};
use crate::types::{ComponentKind, ComputerKind, PeripheralKind};

/// A desktop or laptop with its installed parts.
#[derive(Debug, Clone, PartialEq)]
pub struct Computer {
    kind: ComputerKind,
    info: ProductInfo,
    components: Vec<Component>,
    peripherals: Vec<Peripheral>,
}

impl Computer {
    /// Creates a bare computer. Its own performance is the kind's base value.
    pub fn new(
        kind: ComputerKind,
        id: i32,
        manufacturer: impl Into<String>,
        model: impl Into<String>,
        price: f64,
    ) -> Self {
        Computer {
            kind,
            info: ProductInfo::new(id, manufacturer, model, price, kind.base_performance()),
            components: Vec::new(),
            peripherals: Vec::new(),
        }
    }

    pub fn kind(&self) -> ComputerKind {
        self.kind
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn peripherals(&self) -> &[Peripheral] {
        &self.peripherals
    }

    pub fn component(&self, kind: ComponentKind) -> Option<&Component> {
        self.components.iter().find(|c| c.kind == kind)
    }

    pub fn peripheral(&self, kind: PeripheralKind) -> Option<&Peripheral> {
        self.peripherals.iter().find(|p| p.kind == kind)
    }

    /// Installs a component, returning the one of the same kind it displaced.
    pub fn install_component(&mut self, component: Component) -> Option<Component> {
        match self.components.iter().position(|c| c.kind == component.kind) {
            Some(i) => Some(std::mem::replace(&mut self.components[i], component)),
            None => {
                self.components.push(component);
                None
            }
        }
    }

    /// Removes the component of `kind`, if one is installed.
    pub fn uninstall_component(&mut self, kind: ComponentKind) -> Option<Component> {
        let i = self.components.iter().position(|c| c.kind == kind)?;
        Some(self.components.remove(i))
    }

    /// Installs a peripheral, returning the one of the same kind it displaced.
    pub fn install_peripheral(&mut self, peripheral: Peripheral) -> Option<Peripheral> {
        match self.peripherals.iter().position(|p| p.kind == peripheral.kind) {
            Some(i) => Some(std::mem::replace(&mut self.peripherals[i], peripheral)),
            None => {
                self.peripherals.push(peripheral);
                None
            }
        }
    }

    /// Removes the peripheral of `kind`, if one is installed.
    pub fn uninstall_peripheral(&mut self, kind: PeripheralKind) -> Option<Peripheral> {
        let i = self.peripherals.iter().position(|p| p.kind == kind)?;
        Some(self.peripherals.remove(i))
    }

    /// Price of the bare computer, without anything installed.
    pub fn own_price(&self) -> f64 {
        self.info.price
    }

    /// Mean performance of the installed peripherals; 0.0 when there are none.
    pub fn average_peripheral_performance(&self) -> f64 {
        if self.peripherals.is_empty() {
            return 0.0;
        }
        let total: f64 = self.peripherals.iter().map(Product::overall_performance).sum();
        total / self.peripherals.len() as f64
    }
}

impl Product for Computer {
    fn info(&self) -> &ProductInfo {
        &self.info
    }

    fn price(&self) -> f64 {
        self.info.price
            + self.components.iter().map(Product::price).sum::<f64>()
            + self.peripherals.iter().map(Product::price).sum::<f64>()
    }

    fn overall_performance(&self) -> f64 {
        self.info.overall_performance
            + self
                .components
                .iter()
                .map(Product::overall_performance)
                .sum::<f64>()
            + self
                .peripherals
                .iter()
                .map(Product::overall_performance)
                .sum::<f64>()
    }
}

/// The full summary printed on purchase and on data queries.
///
/// ```text
/// Overall Performance: 120.00. Price: 1500.00 - Laptop: Dell XPS (Id: 1)
///  Components (1):
///   Overall Performance: 105.00. Price: 100.00 - PowerSupply: ... Generation: 3
///  Peripherals (0); Average Overall Performance (0.00):
/// ```
impl fmt::Display for Computer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_headline(f, self, self.kind)?;
        write!(f, "\n Components ({}):", self.components.len())?;
        for component in &self.components {
            write!(f, "\n  {}", component)?;
        }
        write!(
            f,
            "\n Peripherals ({}); Average Overall Performance ({:.2}):",
            self.peripherals.len(),
            self.average_peripheral_performance()
        )?;
        for peripheral in &self.peripherals {
            write!(f, "\n  {}", peripheral)?;
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
