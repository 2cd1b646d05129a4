//! Generic in-memory record store with insertion-order iteration.

use serde::{Deserialize, Serialize};

use crate::domain::{Bus, Client, Credit, Person};

/// Exposes a stable integer identifier for entities held in a store.
pub trait Record {
    fn id(&self) -> u32;
    fn assign_id(&mut self, id: u32);
}

/// Entities whose status can be flipped in place by `transition`.
pub trait Stateful {
    type State: Copy + PartialEq;

    fn status(&self) -> Self::State;
    fn set_status(&mut self, status: Self::State);
}

/// An ordered collection of uniquely identified records. Ids are assigned
/// sequentially on `add`; lookups are linear scans, matching the access
/// pattern of a small single-user registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityStore<T: Record> {
    records: Vec<T>,
}

impl<T: Record> Default for EntityStore<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<T: Record> EntityStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// The id the next `add` will assign: `max(existing) + 1`, or 1 if empty.
    pub fn next_id(&self) -> u32 {
        self.records.iter().map(Record::id).max().unwrap_or(0) + 1
    }

    /// Assigns the next unique id, appends the record, and returns the id.
    pub fn add(&mut self, mut record: T) -> u32 {
        let id = self.next_id();
        record.assign_id(id);
        self.records.push(record);
        id
    }

    /// Returns the first record matching `predicate`, if any.
    pub fn find(&self, predicate: impl Fn(&T) -> bool) -> Option<&T> {
        self.records.iter().find(|record| predicate(record))
    }

    pub fn get(&self, id: u32) -> Option<&T> {
        self.find(|record| record.id() == id)
    }

    /// Removes and returns the record with `id`; `None` signals not-found.
    pub fn remove(&mut self, id: u32) -> Option<T> {
        let index = self.records.iter().position(|record| record.id() == id)?;
        Some(self.records.remove(index))
    }

    /// Iterates over all records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.records.iter()
    }

    /// Lazy, restartable iteration filtered by `predicate`, insertion order.
    pub fn filtered<'a, P>(&'a self, predicate: P) -> impl Iterator<Item = &'a T>
    where
        P: Fn(&T) -> bool + 'a,
    {
        self.records.iter().filter(move |record| predicate(record))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<T: Record + Stateful> EntityStore<T> {
    /// Moves the record with `id` from `from` to `to`. Returns `false` when
    /// the record is missing or not currently in `from`; no state changes.
    pub fn transition(&mut self, id: u32, from: T::State, to: T::State) -> bool {
        match self
            .records
            .iter_mut()
            .find(|record| record.id() == id && record.status() == from)
        {
            Some(record) => {
                record.set_status(to);
                true
            }
            None => false,
        }
    }
}

/// The aggregate of all record stores held by one session.
#[derive(Debug, Clone, Default)]
pub struct Depot {
    pub buses: EntityStore<Bus>,
    pub clients: EntityStore<Client>,
    pub credits: EntityStore<Credit>,
    pub people: EntityStore<Person>,
}

impl Depot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_records(&self) -> usize {
        self.buses.len() + self.clients.len() + self.credits.len() + self.people.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BusStatus;

    #[test]
    fn add_assigns_strictly_increasing_ids() {
        let mut store = EntityStore::new();
        let first = store.add(Bus::new("Smith", 7));
        let second = store.add(Bus::new("Jones", 3));
        let third = store.add(Bus::new("Brown", 7));
        assert_eq!((first, second, third), (1, 2, 3));
    }

    #[test]
    fn ids_do_not_collide_after_removal() {
        let mut store = EntityStore::new();
        store.add(Bus::new("Smith", 7));
        let second = store.add(Bus::new("Jones", 3));
        store.remove(1);
        let next = store.add(Bus::new("Brown", 1));
        assert!(next > second);
        assert!(store.get(next).is_some());
    }

    #[test]
    fn remove_then_get_returns_none() {
        let mut store = EntityStore::new();
        let id = store.add(Bus::new("Smith", 7));
        let removed = store.remove(id).unwrap();
        assert_eq!(removed.driver, "Smith");
        assert!(store.get(id).is_none());
        assert!(store.remove(id).is_none());
    }

    #[test]
    fn filtered_preserves_insertion_order() {
        let mut store = EntityStore::new();
        store.add(Bus::new("Smith", 7));
        store.add(Bus::new("Jones", 3));
        store.add(Bus::new("Brown", 7));
        let drivers: Vec<_> = store
            .filtered(|bus| bus.route == 7)
            .map(|bus| bus.driver.as_str())
            .collect();
        assert_eq!(drivers, ["Smith", "Brown"]);
    }

    #[test]
    fn transition_succeeds_exactly_once_until_reversed() {
        let mut store = EntityStore::new();
        let id = store.add(Bus::new("Smith", 7));

        assert!(store.transition(id, BusStatus::InPark, BusStatus::OnRoute));
        assert!(!store.transition(id, BusStatus::InPark, BusStatus::OnRoute));

        assert!(store.transition(id, BusStatus::OnRoute, BusStatus::InPark));
        assert!(store.transition(id, BusStatus::InPark, BusStatus::OnRoute));
    }

    #[test]
    fn transition_on_missing_id_is_false() {
        let mut store: EntityStore<Bus> = EntityStore::new();
        assert!(!store.transition(42, BusStatus::InPark, BusStatus::OnRoute));
    }
}
