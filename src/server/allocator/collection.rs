use sea_orm::EntityTrait;
use std::fmt;

/// The record collections that receive allocator-assigned ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Drones,
    Missions,
    Schedules,
}

impl Collection {
    /// Position of the collection's lock in the allocator.
    pub(super) fn index(self) -> usize {
        match self {
            Collection::Drones => 0,
            Collection::Missions => 1,
            Collection::Schedules => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Collection::Drones => "drones",
            Collection::Missions => "missions",
            Collection::Schedules => "schedules",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An entity whose rows are keyed by an allocator-assigned integer `id`.
pub trait KeyedEntity: EntityTrait {
    const COLLECTION: Collection;

    fn id_column() -> Self::Column;
}

impl KeyedEntity for entity::drone::Entity {
    const COLLECTION: Collection = Collection::Drones;

    fn id_column() -> Self::Column {
        entity::drone::Column::Id
    }
}

impl KeyedEntity for entity::mission::Entity {
    const COLLECTION: Collection = Collection::Missions;

    fn id_column() -> Self::Column {
        entity::mission::Column::Id
    }
}

impl KeyedEntity for entity::schedule::Entity {
    const COLLECTION: Collection = Collection::Schedules;

    fn id_column() -> Self::Column {
        entity::schedule::Column::Id
    }
}
