//! Entities that live on the play desk: [`Food`] and [`Ameba`].
//!
//! Both implement the two capability traits, [`EnergyItem`] and
//! [`PositionItem`]. Code that does not care which kind it holds works with
//! the borrowed union [`DeskEntity`].
//!
//! Deletion is a tombstone. `mark_deleted` only flips a flag; the desk
//! purges tombstoned foods during cleanup at the end of a step.

use std::sync::Arc;

use ameba_types::{AmebaId, EntityKind, EntitySnapshot, FoodId, Position};
use rust_decimal::Decimal;

use crate::params::AmebaParams;
use crate::policy::DecisionPolicy;

/// Anything that carries energy and can be logically deleted.
pub trait EnergyItem {
    /// Current energy value.
    fn energy(&self) -> Decimal;

    /// Tombstone this item. It stays in its collection until cleanup.
    fn mark_deleted(&mut self);

    /// Whether this item has been tombstoned.
    fn is_deleted(&self) -> bool;
}

/// Anything that occupies a cell.
pub trait PositionItem {
    /// Current cell.
    fn position(&self) -> Position;
}

// ---------------------------------------------------------------------------
// Food
// ---------------------------------------------------------------------------

/// A stationary energy source. Energy and position never change after
/// creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Food {
    id: FoodId,
    energy: Decimal,
    position: Position,
    deleted: bool,
}

impl Food {
    /// Create a live food item.
    pub fn new(energy: Decimal, position: Position) -> Self {
        Self {
            id: FoodId::new(),
            energy,
            position,
            deleted: false,
        }
    }

    /// This food's identifier.
    pub const fn id(&self) -> FoodId {
        self.id
    }
}

impl EnergyItem for Food {
    fn energy(&self) -> Decimal {
        self.energy
    }

    fn mark_deleted(&mut self) {
        self.deleted = true;
    }

    fn is_deleted(&self) -> bool {
        self.deleted
    }
}

impl PositionItem for Food {
    fn position(&self) -> Position {
        self.position
    }
}

// ---------------------------------------------------------------------------
// Ameba
// ---------------------------------------------------------------------------

/// A moving agent. Its position and energy are updated by the desk's move
/// resolution; the ameba itself only holds state and its policy.
///
/// The decision policy is shared, not owned: several amebas (or several
/// desks) may hold the same policy instance.
#[derive(Clone)]
pub struct Ameba {
    id: AmebaId,
    params: AmebaParams,
    position: Position,
    energy: Decimal,
    policy: Arc<dyn DecisionPolicy>,
    deleted: bool,
}

impl Ameba {
    /// Create a live ameba.
    pub fn new(
        params: AmebaParams,
        position: Position,
        energy: Decimal,
        policy: Arc<dyn DecisionPolicy>,
    ) -> Self {
        Self {
            id: AmebaId::new(),
            params,
            position,
            energy,
            policy,
            deleted: false,
        }
    }

    /// This ameba's identifier.
    pub const fn id(&self) -> AmebaId {
        self.id
    }

    /// Visibility and cost parameters.
    pub const fn params(&self) -> &AmebaParams {
        &self.params
    }

    /// The policy that chooses this ameba's moves.
    pub fn policy(&self) -> &dyn DecisionPolicy {
        self.policy.as_ref()
    }

    pub(crate) const fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    pub(crate) const fn set_energy(&mut self, energy: Decimal) {
        self.energy = energy;
    }
}

impl core::fmt::Debug for Ameba {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Ameba")
            .field("id", &self.id)
            .field("position", &self.position)
            .field("energy", &self.energy)
            .field("policy", &self.policy.name())
            .field("deleted", &self.deleted)
            .finish_non_exhaustive()
    }
}

impl EnergyItem for Ameba {
    fn energy(&self) -> Decimal {
        self.energy
    }

    fn mark_deleted(&mut self) {
        self.deleted = true;
    }

    fn is_deleted(&self) -> bool {
        self.deleted
    }
}

impl PositionItem for Ameba {
    fn position(&self) -> Position {
        self.position
    }
}

// ---------------------------------------------------------------------------
// DeskEntity
// ---------------------------------------------------------------------------

/// A borrowed view of any entity on the desk.
#[derive(Debug, Clone, Copy)]
pub enum DeskEntity<'a> {
    /// A food item.
    Food(&'a Food),
    /// An ameba.
    Ameba(&'a Ameba),
}

impl DeskEntity<'_> {
    /// Which kind of entity this is.
    pub const fn kind(&self) -> EntityKind {
        match self {
            Self::Food(_) => EntityKind::Food,
            Self::Ameba(_) => EntityKind::Ameba,
        }
    }

    /// Current energy.
    pub fn energy(&self) -> Decimal {
        match self {
            Self::Food(food) => food.energy(),
            Self::Ameba(ameba) => ameba.energy(),
        }
    }

    /// Whether the entity has been tombstoned.
    pub fn is_deleted(&self) -> bool {
        match self {
            Self::Food(food) => food.is_deleted(),
            Self::Ameba(ameba) => ameba.is_deleted(),
        }
    }

    /// An owned snapshot for reporting.
    pub fn snapshot(&self) -> EntitySnapshot {
        EntitySnapshot {
            kind: self.kind(),
            energy: self.energy(),
            position: self.position(),
        }
    }
}

impl PositionItem for DeskEntity<'_> {
    fn position(&self) -> Position {
        match self {
            Self::Food(food) => food.position(),
            Self::Ameba(ameba) => ameba.position(),
        }
    }
}
