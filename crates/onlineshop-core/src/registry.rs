//! # Registry
//!
//! The single coordinating service of the shop. It owns every computer and
//! keeps a flat index of every installed component and peripheral.
//!
//! ## State
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Registry                                       │
//! │                                                                         │
//! │  computers   : IndexMap<i32, Computer>    ◄── owns the slots            │
//! │  components  : IndexMap<i32, Component>   ◄── global component ids      │
//! │  peripherals : IndexMap<i32, Peripheral>  ◄── global peripheral ids     │
//! │                                                                         │
//! │  An installed item is in the global map iff it is in some computer,     │
//! │  except after buy_best_computer (see below).                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Operation Flow
//! ```text
//! add_peripheral(computer_id, id, "Mouse", ...)
//!      │
//!      ├── computer missing?        → UnknownComputer
//!      ├── peripheral id taken?     → DuplicateId(Peripheral)
//!      ├── "Mouse" not a kind?      → UnknownVariant(Peripheral)
//!      │
//!      ▼   (nothing mutated before this point)
//! install into computer ──► insert into global map ──► Confirmation
//! ```
//!
//! ## Purchases
//! - `buy_computer` only renders; the computer stays in the registry.
//! - `buy_best_computer` removes the winning computer, but its installed
//!   items keep their entries in the global maps. Their ids stay taken.

use indexmap::IndexMap;

use crate::computer::Computer;
use crate::error::{ShopError, ShopResult};
use crate::messages::Confirmation;
use crate::product::{Component, Peripheral, Product};
use crate::types::{ComponentKind, ComputerKind, Namespace, PeripheralKind};

/// In-memory catalog of computers, components and peripherals.
#[derive(Debug, Default, Clone)]
pub struct Registry {
    computers: IndexMap<i32, Computer>,
    components: IndexMap<i32, Component>,
    peripherals: IndexMap<i32, Peripheral>,
}

impl Registry {
    pub fn new() -> Self {
        Registry::default()
    }

    // =========================================================================
    // Computers
    // =========================================================================

    /// Registers a bare computer of the kind named by `kind`.
    pub fn add_computer(
        &mut self,
        kind: &str,
        id: i32,
        manufacturer: &str,
        model: &str,
        price: f64,
    ) -> ShopResult<Confirmation> {
        if self.computers.contains_key(&id) {
            return Err(ShopError::DuplicateId {
                namespace: Namespace::Computer,
                id,
            });
        }
        let kind: ComputerKind = kind.parse()?;

        self.computers
            .insert(id, Computer::new(kind, id, manufacturer, model, price));

        Ok(Confirmation::ComputerAdded { id })
    }

    // =========================================================================
    // Peripherals
    // =========================================================================

    /// Builds a peripheral and installs it on `computer_id`.
    ///
    /// A peripheral of the same kind already on that computer is replaced and
    /// its id is released.
    #[allow(clippy::too_many_arguments)]
    pub fn add_peripheral(
        &mut self,
        computer_id: i32,
        id: i32,
        kind: &str,
        manufacturer: &str,
        model: &str,
        price: f64,
        overall_performance: f64,
        connection_type: &str,
    ) -> ShopResult<Confirmation> {
        let computer = self
            .computers
            .get_mut(&computer_id)
            .ok_or(ShopError::UnknownComputer { id: computer_id })?;
        if self.peripherals.contains_key(&id) {
            return Err(ShopError::DuplicateId {
                namespace: Namespace::Peripheral,
                id,
            });
        }
        let kind: PeripheralKind = kind.parse()?;

        let peripheral = Peripheral::new(
            kind,
            id,
            manufacturer,
            model,
            price,
            overall_performance,
            connection_type,
        );
        if let Some(displaced) = computer.install_peripheral(peripheral.clone()) {
            self.peripherals.shift_remove(&displaced.id());
        }
        self.peripherals.insert(id, peripheral);

        Ok(Confirmation::PeripheralAdded {
            kind,
            id,
            computer_id,
        })
    }

    /// Uninstalls the peripheral of the kind named by `kind` from
    /// `computer_id` and releases its id.
    pub fn remove_peripheral(&mut self, kind: &str, computer_id: i32) -> ShopResult<Confirmation> {
        let computer = self
            .computers
            .get_mut(&computer_id)
            .ok_or(ShopError::UnknownComputer { id: computer_id })?;
        let computer_kind = computer.kind();

        let removed = kind
            .parse::<PeripheralKind>()
            .ok()
            .and_then(|k| computer.uninstall_peripheral(k))
            .ok_or_else(|| ShopError::NoSuchInstalledItem {
                namespace: Namespace::Peripheral,
                kind: kind.to_string(),
                computer_kind,
                computer_id,
            })?;
        self.peripherals.shift_remove(&removed.id());

        Ok(Confirmation::PeripheralRemoved {
            kind: removed.kind,
            id: removed.id(),
        })
    }

    // =========================================================================
    // Components
    // =========================================================================

    /// Builds a component and installs it on `computer_id`.
    ///
    /// A component of the same kind already on that computer is replaced and
    /// its id is released.
    #[allow(clippy::too_many_arguments)]
    pub fn add_component(
        &mut self,
        computer_id: i32,
        id: i32,
        kind: &str,
        manufacturer: &str,
        model: &str,
        price: f64,
        overall_performance: f64,
        generation: i32,
    ) -> ShopResult<Confirmation> {
        let computer = self
            .computers
            .get_mut(&computer_id)
            .ok_or(ShopError::UnknownComputer { id: computer_id })?;
        if self.components.contains_key(&id) {
            return Err(ShopError::DuplicateId {
                namespace: Namespace::Component,
                id,
            });
        }
        let kind: ComponentKind = kind.parse()?;

        let component = Component::new(
            kind,
            id,
            manufacturer,
            model,
            price,
            overall_performance,
            generation,
        );
        if let Some(displaced) = computer.install_component(component.clone()) {
            self.components.shift_remove(&displaced.id());
        }
        self.components.insert(id, component);

        Ok(Confirmation::ComponentAdded {
            kind,
            id,
            computer_id,
        })
    }

    /// Uninstalls the component of the kind named by `kind` from
    /// `computer_id` and releases its id.
    pub fn remove_component(&mut self, kind: &str, computer_id: i32) -> ShopResult<Confirmation> {
        let computer = self
            .computers
            .get_mut(&computer_id)
            .ok_or(ShopError::UnknownComputer { id: computer_id })?;
        let computer_kind = computer.kind();

        let removed = kind
            .parse::<ComponentKind>()
            .ok()
            .and_then(|k| computer.uninstall_component(k))
            .ok_or_else(|| ShopError::NoSuchInstalledItem {
                namespace: Namespace::Component,
                kind: kind.to_string(),
                computer_kind,
                computer_id,
            })?;
        self.components.shift_remove(&removed.id());

        Ok(Confirmation::ComponentRemoved {
            kind: removed.kind,
            id: removed.id(),
        })
    }

    // =========================================================================
    // Purchases & Queries
    // =========================================================================

    /// Renders the computer for purchase. The computer is not removed.
    pub fn buy_computer(&self, id: i32) -> ShopResult<String> {
        self.get_computer_data(id)
    }

    /// Sells the best-performing computer whose effective price fits
    /// `budget`, removing it from the registry.
    ///
    /// Ties go to the computer registered first. The sold computer's
    /// components and peripherals stay in the global maps.
    pub fn buy_best_computer(&mut self, budget: f64) -> ShopResult<String> {
        let mut candidates: Vec<&Computer> = self
            .computers
            .values()
            .filter(|c| c.price() <= budget)
            .collect();
        // sort_by is stable: equal performance keeps registration order
        candidates.sort_by(|a, b| b.overall_performance().total_cmp(&a.overall_performance()));

        let id = candidates
            .first()
            .map(|c| c.id())
            .ok_or(ShopError::BudgetExceeded { budget })?;
        let computer = self
            .computers
            .shift_remove(&id)
            .ok_or(ShopError::UnknownComputer { id })?;

        Ok(computer.to_string())
    }

    /// Renders the computer's summary.
    pub fn get_computer_data(&self, id: i32) -> ShopResult<String> {
        self.computers
            .get(&id)
            .map(Computer::to_string)
            .ok_or(ShopError::UnknownComputer { id })
    }

    // =========================================================================
    // Read Accessors
    // =========================================================================

    pub fn computer(&self, id: i32) -> Option<&Computer> {
        self.computers.get(&id)
    }

    pub fn component(&self, id: i32) -> Option<&Component> {
        self.components.get(&id)
    }

    pub fn peripheral(&self, id: i32) -> Option<&Peripheral> {
        self.peripherals.get(&id)
    }

    /// Computers in registration order.
    pub fn computers(&self) -> impl Iterator<Item = &Computer> {
        self.computers.values()
    }

    pub fn computer_count(&self) -> usize {
        self.computers.len()
    }

    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    pub fn peripheral_count(&self) -> usize {
        self.peripherals.len()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Registry with one laptop (id 1, price 1000).
    fn shop() -> Registry {
        let mut registry = Registry::new();
        registry
            .add_computer("Laptop", 1, "Dell", "XPS", 1000.0)
            .unwrap();
        registry
    }

    fn add_psu(registry: &mut Registry, computer_id: i32, id: i32) -> ShopResult<Confirmation> {
        registry.add_component(computer_id, id, "PowerSupply", "Corsair", "RM750", 100.0, 100.0, 3)
    }

    fn add_mouse(registry: &mut Registry, computer_id: i32, id: i32) -> ShopResult<Confirmation> {
        registry.add_peripheral(computer_id, id, "Mouse", "Logitech", "G502", 50.0, 20.0, "USB")
    }

    // -------------------------------------------------------------------------
    // add_computer
    // -------------------------------------------------------------------------

    #[test]
    fn test_add_computer_confirms_id() {
        let mut registry = Registry::new();
        let confirmation = registry
            .add_computer("DesktopComputer", 7, "HP", "Omen", 900.0)
            .unwrap();
        assert_eq!(confirmation, Confirmation::ComputerAdded { id: 7 });
        assert_eq!(registry.computer_count(), 1);
    }

    #[test]
    fn test_add_computer_duplicate_id_fails_regardless_of_fields() {
        let mut registry = shop();
        let err = registry
            .add_computer("DesktopComputer", 1, "Other", "Thing", 5.0)
            .unwrap_err();
        assert_eq!(
            err,
            ShopError::DuplicateId {
                namespace: Namespace::Computer,
                id: 1
            }
        );
        // duplicate id is checked before the kind tag
        let err = registry.add_computer("Tablet", 1, "X", "Y", 1.0).unwrap_err();
        assert!(matches!(err, ShopError::DuplicateId { .. }));
        assert_eq!(registry.computer_count(), 1);
    }

    #[test]
    fn test_add_computer_unknown_kind() {
        let mut registry = Registry::new();
        let err = registry.add_computer("Tablet", 1, "X", "Y", 1.0).unwrap_err();
        assert_eq!(err.to_string(), "Computer type is invalid.");
        assert_eq!(registry.computer_count(), 0);
    }

    #[test]
    fn test_add_then_get_reflects_supplied_fields() {
        let mut registry = Registry::new();
        registry
            .add_computer("DesktopComputer", 3, "Lenovo", "Legion", 1234.5)
            .unwrap();
        let data = registry.get_computer_data(3).unwrap();
        assert!(data.starts_with(
            "Overall Performance: 15.00. Price: 1234.50 - DesktopComputer: Lenovo Legion (Id: 3)"
        ));
    }

    // -------------------------------------------------------------------------
    // peripherals
    // -------------------------------------------------------------------------

    #[test]
    fn test_add_peripheral_installs_and_indexes() {
        let mut registry = shop();
        let confirmation = add_mouse(&mut registry, 1, 10).unwrap();
        assert_eq!(
            confirmation.to_string(),
            "Peripheral Mouse with id 10 added successfully in computer with id 1."
        );
        assert_eq!(registry.peripheral(10).map(|p| p.kind), Some(PeripheralKind::Mouse));
        let computer = registry.computer(1).unwrap();
        assert_eq!(computer.price(), 1050.0);
    }

    #[test]
    fn test_add_peripheral_check_order() {
        let mut registry = shop();
        add_mouse(&mut registry, 1, 10).unwrap();

        // missing computer wins over everything
        let err = registry
            .add_peripheral(99, 10, "Nope", "A", "B", 1.0, 1.0, "USB")
            .unwrap_err();
        assert_eq!(err, ShopError::UnknownComputer { id: 99 });

        // then the id namespace
        let err = registry
            .add_peripheral(1, 10, "Nope", "A", "B", 1.0, 1.0, "USB")
            .unwrap_err();
        assert_eq!(err.to_string(), "Peripheral with this id already exists.");

        // then the kind tag
        let err = registry
            .add_peripheral(1, 11, "Nope", "A", "B", 1.0, 1.0, "USB")
            .unwrap_err();
        assert_eq!(err.to_string(), "Peripheral type is invalid.");

        assert_eq!(registry.peripheral_count(), 1);
        assert_eq!(registry.computer(1).unwrap().peripherals().len(), 1);
    }

    #[test]
    fn test_peripheral_id_is_global_across_computers() {
        let mut registry = shop();
        registry.add_computer("DesktopComputer", 2, "HP", "Omen", 800.0).unwrap();
        add_mouse(&mut registry, 1, 10).unwrap();

        let err = registry
            .add_peripheral(2, 10, "Keyboard", "Razer", "Huntsman", 80.0, 30.0, "USB")
            .unwrap_err();
        assert!(matches!(
            err,
            ShopError::DuplicateId {
                namespace: Namespace::Peripheral,
                id: 10
            }
        ));
    }

    #[test]
    fn test_namespaces_are_independent() {
        let mut registry = shop();
        add_psu(&mut registry, 1, 1).unwrap();
        add_mouse(&mut registry, 1, 1).unwrap();

        assert!(registry.component(1).is_some());
        assert!(registry.peripheral(1).is_some());
        assert!(registry.computer(1).is_some());
    }

    #[test]
    fn test_same_kind_peripheral_replaces_and_releases_old_id() {
        let mut registry = shop();
        add_mouse(&mut registry, 1, 10).unwrap();
        registry
            .add_peripheral(1, 11, "Mouse", "Razer", "Viper", 70.0, 25.0, "Bluetooth")
            .unwrap();

        let computer = registry.computer(1).unwrap();
        assert_eq!(computer.peripherals().len(), 1);
        assert_eq!(computer.peripheral(PeripheralKind::Mouse).map(|p| p.id()), Some(11));
        assert!(registry.peripheral(10).is_none());
        assert!(registry.peripheral(11).is_some());

        // the released id can be used again
        add_mouse(&mut registry, 1, 10).unwrap();
    }

    #[test]
    fn test_remove_peripheral() {
        let mut registry = shop();
        add_mouse(&mut registry, 1, 10).unwrap();

        let confirmation = registry.remove_peripheral("Mouse", 1).unwrap();
        assert_eq!(confirmation.to_string(), "Successfully removed Mouse with id 10.");
        assert_eq!(registry.peripheral_count(), 0);
        assert!(registry.computer(1).unwrap().peripherals().is_empty());
    }

    #[test]
    fn test_remove_peripheral_failures() {
        let mut registry = shop();
        add_mouse(&mut registry, 1, 10).unwrap();

        let err = registry.remove_peripheral("Mouse", 2).unwrap_err();
        assert_eq!(err, ShopError::UnknownComputer { id: 2 });

        let err = registry.remove_peripheral("Monitor", 1).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Peripheral Monitor does not exist in Laptop with Id 1."
        );

        // an unknown tag can't be installed, so it is reported as missing
        let err = registry.remove_peripheral("Trackball", 1).unwrap_err();
        assert!(matches!(err, ShopError::NoSuchInstalledItem { ref kind, .. } if kind == "Trackball"));

        assert_eq!(registry.peripheral_count(), 1);
    }

    // -------------------------------------------------------------------------
    // components
    // -------------------------------------------------------------------------

    #[test]
    fn test_power_supply_performance_is_scaled() {
        let mut registry = shop();
        add_psu(&mut registry, 1, 1).unwrap();
        let psu = registry.component(1).unwrap();
        assert!((psu.overall_performance() - 105.0).abs() < 1e-9);
    }

    #[test]
    fn test_add_component_check_order() {
        let mut registry = shop();
        add_psu(&mut registry, 1, 1).unwrap();

        let err = registry
            .add_component(5, 1, "Nope", "A", "B", 1.0, 1.0, 1)
            .unwrap_err();
        assert_eq!(err, ShopError::UnknownComputer { id: 5 });

        let err = registry
            .add_component(1, 1, "Nope", "A", "B", 1.0, 1.0, 1)
            .unwrap_err();
        assert_eq!(err.to_string(), "Component with this id already exists.");

        let err = registry
            .add_component(1, 2, "Nope", "A", "B", 1.0, 1.0, 1)
            .unwrap_err();
        assert_eq!(err.to_string(), "Component type is invalid.");

        assert_eq!(registry.component_count(), 1);
    }

    #[test]
    fn test_add_then_remove_component_restores_totals() {
        let mut registry = shop();
        let before = registry.computer(1).unwrap().clone();

        add_psu(&mut registry, 1, 4).unwrap();
        let confirmation = registry.remove_component("PowerSupply", 1).unwrap();
        assert_eq!(
            confirmation,
            Confirmation::ComponentRemoved {
                kind: ComponentKind::PowerSupply,
                id: 4
            }
        );

        let after = registry.computer(1).unwrap();
        assert_eq!(after.price(), before.price());
        assert_eq!(after.overall_performance(), before.overall_performance());
        assert_eq!(registry.component_count(), 0);
    }

    #[test]
    fn test_remove_component_not_installed() {
        let mut registry = shop();
        let err = registry.remove_component("VideoCard", 1).unwrap_err();
        assert_eq!(
            err,
            ShopError::NoSuchInstalledItem {
                namespace: Namespace::Component,
                kind: "VideoCard".to_string(),
                computer_kind: ComputerKind::Laptop,
                computer_id: 1,
            }
        );
    }

    // -------------------------------------------------------------------------
    // purchases
    // -------------------------------------------------------------------------

    #[test]
    fn test_buy_computer_is_not_destructive() {
        let mut registry = shop();
        add_psu(&mut registry, 1, 1).unwrap();

        let summary = registry.buy_computer(1).unwrap();
        assert_eq!(summary, registry.get_computer_data(1).unwrap());
        assert!(registry.computer(1).is_some());

        assert_eq!(
            registry.buy_computer(8).unwrap_err(),
            ShopError::UnknownComputer { id: 8 }
        );
    }

    #[test]
    fn test_buy_best_on_empty_registry() {
        let mut registry = Registry::new();
        let err = registry.buy_best_computer(500.0).unwrap_err();
        assert_eq!(err, ShopError::BudgetExceeded { budget: 500.0 });
    }

    #[test]
    fn test_buy_best_picks_highest_performance_and_removes_it() {
        let mut registry = Registry::new();
        registry.add_computer("Laptop", 1, "A", "One", 100.0).unwrap();
        registry.add_computer("Laptop", 2, "B", "Two", 100.0).unwrap();
        // id 1 → 10 + 40 = 50, id 2 → 10 + 70 = 80
        registry
            .add_peripheral(1, 1, "Monitor", "M", "X", 10.0, 40.0, "HDMI")
            .unwrap();
        registry
            .add_peripheral(2, 2, "Monitor", "M", "Y", 10.0, 70.0, "HDMI")
            .unwrap();

        let summary = registry.buy_best_computer(1000.0).unwrap();
        assert!(summary.starts_with("Overall Performance: 80.00."));
        assert!(summary.contains("(Id: 2)"));

        assert_eq!(
            registry.get_computer_data(2).unwrap_err(),
            ShopError::UnknownComputer { id: 2 }
        );
        assert!(registry.get_computer_data(1).is_ok());
    }

    #[test]
    fn test_buy_best_respects_effective_price() {
        let mut registry = Registry::new();
        registry.add_computer("DesktopComputer", 1, "A", "Fast", 400.0).unwrap();
        registry.add_computer("Laptop", 2, "B", "Slow", 300.0).unwrap();
        // pushes computer 1 to 500 effective
        add_psu(&mut registry, 1, 1).unwrap();

        let summary = registry.buy_best_computer(450.0).unwrap();
        assert!(summary.contains("(Id: 2)"));
        assert_eq!(registry.computer_count(), 1);
    }

    #[test]
    fn test_buy_best_tie_goes_to_first_registered() {
        let mut registry = Registry::new();
        registry.add_computer("Laptop", 5, "A", "First", 100.0).unwrap();
        registry.add_computer("Laptop", 3, "B", "Second", 100.0).unwrap();

        let summary = registry.buy_best_computer(100.0).unwrap();
        assert!(summary.contains("(Id: 5)"));
        let summary = registry.buy_best_computer(100.0).unwrap();
        assert!(summary.contains("(Id: 3)"));
    }

    #[test]
    fn test_buy_best_leaves_attachments_indexed() {
        let mut registry = shop();
        add_psu(&mut registry, 1, 1).unwrap();
        add_mouse(&mut registry, 1, 1).unwrap();

        registry.buy_best_computer(10_000.0).unwrap();

        assert_eq!(registry.computer_count(), 0);
        assert!(registry.component(1).is_some());
        assert!(registry.peripheral(1).is_some());
    }

    #[test]
    fn test_budget_below_every_price() {
        let mut registry = shop();
        let err = registry.buy_best_computer(999.99).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Can't buy a computer with a budget of $999.99."
        );
        assert_eq!(registry.computer_count(), 1);
    }

    // -------------------------------------------------------------------------
    // properties
    // -------------------------------------------------------------------------

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn component_kind() -> impl Strategy<Value = ComponentKind> {
            proptest::sample::select(ComponentKind::ALL.to_vec())
        }

        proptest! {
            #[test]
            fn prop_install_then_remove_is_identity(
                kind in component_kind(),
                price in 0.0f64..10_000.0,
                performance in 0.0f64..1_000.0,
                generation in 0i32..20,
            ) {
                let mut registry = shop();
                registry.add_computer("DesktopComputer", 2, "HP", "Omen", 700.0).unwrap();
                add_mouse(&mut registry, 2, 1).unwrap();
                let before = registry.get_computer_data(2).unwrap();
                let components_before = registry.component_count();

                registry
                    .add_component(2, 2, kind.tag(), "Maker", "Part", price, performance, generation)
                    .unwrap();
                registry.remove_component(kind.tag(), 2).unwrap();

                prop_assert_eq!(registry.get_computer_data(2).unwrap(), before);
                prop_assert_eq!(registry.component_count(), components_before);
            }

            #[test]
            fn prop_buy_best_never_exceeds_budget(
                prices in proptest::collection::vec(0.0f64..2_000.0, 0..8),
                budget in 0.0f64..2_000.0,
            ) {
                let mut registry = Registry::new();
                for (i, price) in prices.iter().enumerate() {
                    let kind = ComputerKind::ALL[i % 2];
                    registry.add_computer(kind.tag(), i as i32, "M", "X", *price).unwrap();
                }
                let best_expected = registry
                    .computers()
                    .filter(|c| c.price() <= budget)
                    .map(|c| c.overall_performance())
                    .fold(None, |acc: Option<f64>, p| Some(acc.map_or(p, |a| a.max(p))));

                match registry.buy_best_computer(budget) {
                    Ok(summary) => {
                        let expected = best_expected.unwrap();
                        let headline = format!("Overall Performance: {:.2}.", expected);
                        prop_assert!(summary.starts_with(&headline));
                        prop_assert_eq!(registry.computer_count(), prices.len() - 1);
                    }
                    Err(err) => {
                        prop_assert!(best_expected.is_none());
                        prop_assert_eq!(err, ShopError::BudgetExceeded { budget });
                    }
                }
            }
        }
    }
}
