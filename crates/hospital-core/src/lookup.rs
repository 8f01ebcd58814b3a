//! Read-through lookup tables for client-side foreign-key joins.
//!
//! Pages that show denormalised names (a consultation row shows its patient
//! and doctor, not their ids) fetch the referenced lists once at mount and
//! join locally. A missing id renders the [`MISSING_LABEL`] sentinel rather
//! than failing; the backend owns referential integrity, not this client.

use hospital_api::ApiResult;
use hospital_types::EntityId;
use hospital_wire::Identified;
use std::collections::HashMap;

/// Sentinel rendered when a referenced record is absent from the local lookup.
pub const MISSING_LABEL: &str = "N/A";

/// An id-keyed join table built from one fetched list.
#[derive(Debug, Clone)]
pub struct Lookup<E> {
    by_id: HashMap<EntityId, E>,
}

impl<E: Identified> Lookup<E> {
    /// Build a lookup from a fetched list. Later duplicates win, matching
    /// "last fetch wins" semantics elsewhere in the client.
    pub fn from_items(items: Vec<E>) -> Self {
        let by_id = items.into_iter().map(|item| (item.id(), item)).collect();
        Self { by_id }
    }

    /// An empty lookup; every join through it misses.
    pub fn empty() -> Self {
        Self {
            by_id: HashMap::new(),
        }
    }

    /// Look up a referenced record.
    pub fn get(&self, id: EntityId) -> Option<&E> {
        self.by_id.get(&id)
    }

    /// Render the referenced record through `render`, or the miss sentinel.
    pub fn display<F>(&self, id: EntityId, render: F) -> String
    where
        F: FnOnce(&E) -> String,
    {
        match self.by_id.get(&id) {
            Some(item) => render(item),
            None => MISSING_LABEL.to_owned(),
        }
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

impl<E: Identified> Default for Lookup<E> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Build a lookup from a secondary mount-time fetch.
///
/// Lookup fetches are non-fatal: the primary list must still render when a
/// secondary fetch fails, so failures are logged and an empty lookup (every
/// join shows `N/A`) is returned.
pub fn lookup_from_fetch<E: Identified>(result: ApiResult<Vec<E>>, label: &str) -> Lookup<E> {
    match result {
        Ok(items) => Lookup::from_items(items),
        Err(err) => {
            tracing::warn!("failed to load {} for lookup: {}", label, err);
            Lookup::empty()
        }
    }
}
