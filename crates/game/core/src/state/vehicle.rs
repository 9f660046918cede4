//! Wagon, cargo, and part condition.

/// Cargo categories carried in the wagon.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ItemKind {
    /// Pounds of food.
    Food,
    /// Sets of clothing.
    Clothing,
    /// Boxes of bullets.
    Ammunition,
    Oxen,
    SpareWheel,
    SpareAxle,
    SpareTongue,
    /// Money in cents.
    Money,
}

/// Quantities of every cargo kind.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory {
    pub food: u32,
    pub clothing: u32,
    pub ammunition: u32,
    pub oxen: u32,
    pub spare_wheels: u32,
    pub spare_axles: u32,
    pub spare_tongues: u32,
    pub money: u32,
}

impl Inventory {
    pub fn quantity(&self, kind: ItemKind) -> u32 {
        match kind {
            ItemKind::Food => self.food,
            ItemKind::Clothing => self.clothing,
            ItemKind::Ammunition => self.ammunition,
            ItemKind::Oxen => self.oxen,
            ItemKind::SpareWheel => self.spare_wheels,
            ItemKind::SpareAxle => self.spare_axles,
            ItemKind::SpareTongue => self.spare_tongues,
            ItemKind::Money => self.money,
        }
    }

    fn slot_mut(&mut self, kind: ItemKind) -> &mut u32 {
        match kind {
            ItemKind::Food => &mut self.food,
            ItemKind::Clothing => &mut self.clothing,
            ItemKind::Ammunition => &mut self.ammunition,
            ItemKind::Oxen => &mut self.oxen,
            ItemKind::SpareWheel => &mut self.spare_wheels,
            ItemKind::SpareAxle => &mut self.spare_axles,
            ItemKind::SpareTongue => &mut self.spare_tongues,
            ItemKind::Money => &mut self.money,
        }
    }

    pub fn add(&mut self, kind: ItemKind, amount: u32) {
        let slot = self.slot_mut(kind);
        *slot = slot.saturating_add(amount);
    }

    /// Removes up to `amount` and returns how much was actually removed.
    pub fn remove(&mut self, kind: ItemKind, amount: u32) -> u32 {
        let slot = self.slot_mut(kind);
        let removed = amount.min(*slot);
        *slot -= removed;
        removed
    }
}

/// Breakable wagon parts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum VehiclePart {
    Wheel,
    Axle,
    Tongue,
}

impl VehiclePart {
    /// Cargo kind that replaces this part.
    pub const fn spare(self) -> ItemKind {
        match self {
            VehiclePart::Wheel => ItemKind::SpareWheel,
            VehiclePart::Axle => ItemKind::SpareAxle,
            VehiclePart::Tongue => ItemKind::SpareTongue,
        }
    }

    pub const ALL: [VehiclePart; 3] = [VehiclePart::Wheel, VehiclePart::Axle, VehiclePart::Tongue];
}

/// Broken flags for each wagon part.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PartCondition {
    pub wheel_broken: bool,
    pub axle_broken: bool,
    pub tongue_broken: bool,
}

impl PartCondition {
    pub fn is_broken(&self, part: VehiclePart) -> bool {
        match part {
            VehiclePart::Wheel => self.wheel_broken,
            VehiclePart::Axle => self.axle_broken,
            VehiclePart::Tongue => self.tongue_broken,
        }
    }

    fn set(&mut self, part: VehiclePart, broken: bool) {
        match part {
            VehiclePart::Wheel => self.wheel_broken = broken,
            VehiclePart::Axle => self.axle_broken = broken,
            VehiclePart::Tongue => self.tongue_broken = broken,
        }
    }

    pub fn any_broken(&self) -> bool {
        self.wheel_broken || self.axle_broken || self.tongue_broken
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum VehicleStatus {
    #[default]
    Stopped,
    Moving,
    /// A part is broken with no spare to fit.
    Disabled,
}

/// The wagon.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vehicle {
    pub inventory: Inventory,
    pub parts: PartCondition,
    pub status: VehicleStatus,
}

impl Vehicle {
    /// Standard outfit bought at the general store before departure.
    pub fn outfitted() -> Self {
        Self {
            inventory: Inventory {
                food: 1000,
                clothing: 10,
                ammunition: 20,
                oxen: 6,
                spare_wheels: 1,
                spare_axles: 1,
                spare_tongues: 1,
                money: 20_000,
            },
            parts: PartCondition::default(),
            status: VehicleStatus::Stopped,
        }
    }

    /// Breaks a part. A spare is fitted straight away when one is on hand.
    ///
    /// Returns true if a spare was used, false if the wagon is now disabled.
    pub fn break_part(&mut self, part: VehiclePart) -> bool {
        if self.inventory.remove(part.spare(), 1) == 1 {
            return true;
        }
        self.parts.set(part, true);
        self.status = VehicleStatus::Disabled;
        false
    }

    /// Fits spares to every broken part that has one available.
    ///
    /// Returns the parts repaired. The wagon leaves `Disabled` once nothing
    /// remains broken.
    pub fn try_repair(&mut self) -> Vec<VehiclePart> {
        let mut repaired = Vec::new();
        for part in VehiclePart::ALL {
            if self.parts.is_broken(part) && self.inventory.remove(part.spare(), 1) == 1 {
                self.parts.set(part, false);
                repaired.push(part);
            }
        }
        if !self.parts.any_broken() && self.status == VehicleStatus::Disabled {
            self.status = VehicleStatus::Stopped;
        }
        repaired
    }

    /// True when the wagon has oxen and no broken parts.
    pub fn can_travel(&self) -> bool {
        self.inventory.oxen > 0 && !self.parts.any_broken()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn remove_is_bounded_by_stock() {
        let mut inv = Inventory::default();
        inv.add(ItemKind::Food, 30);
        assert_eq!(inv.remove(ItemKind::Food, 50), 30);
        assert_eq!(inv.quantity(ItemKind::Food), 0);
    }

    #[test]
    fn every_kind_round_trips_through_slots() {
        let mut inv = Inventory::default();
        for (n, kind) in ItemKind::iter().enumerate() {
            inv.add(kind, n as u32 + 1);
        }
        for (n, kind) in ItemKind::iter().enumerate() {
            assert_eq!(inv.quantity(kind), n as u32 + 1);
        }
    }

    #[test]
    fn broken_part_uses_spare_first() {
        let mut wagon = Vehicle::outfitted();
        assert!(wagon.break_part(VehiclePart::Axle));
        assert_eq!(wagon.inventory.spare_axles, 0);
        assert!(wagon.can_travel());

        assert!(!wagon.break_part(VehiclePart::Axle));
        assert_eq!(wagon.status, VehicleStatus::Disabled);
        assert!(!wagon.can_travel());
    }

    #[test]
    fn repair_clears_disabled_when_spare_found() {
        let mut wagon = Vehicle::outfitted();
        wagon.inventory.spare_wheels = 0;
        wagon.break_part(VehiclePart::Wheel);
        assert!(wagon.try_repair().is_empty());

        wagon.inventory.add(ItemKind::SpareWheel, 1);
        assert_eq!(wagon.try_repair(), vec![VehiclePart::Wheel]);
        assert_eq!(wagon.status, VehicleStatus::Stopped);
        assert!(wagon.can_travel());
    }
}
