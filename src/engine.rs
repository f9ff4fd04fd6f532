//! Checklist Engine
//!
//! Verification state machine for one pack session. Top-level items move from
//! pending to verified exactly once; a group is verified either directly or
//! when its last sub-item is verified. Logical state is committed synchronously
//! and persisted through a [`StateStore`]; presentation reacts to the queued
//! [`ChecklistEvent`]s.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use crate::models::{Item, Pack};

/// Persistence seam for the verified set, called after every change
pub trait StateStore {
    fn save(&mut self, verified: &BTreeSet<usize>);
}

/// Notifications for the rendering layer, drained with
/// [`ChecklistEngine::drain_events`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChecklistEvent {
    /// A sub-item was checked but its group is still pending
    SubItemVerified { index: usize, sub_id: String },
    /// A top-level item (simple or group) is resolved and can leave the view
    ItemVerified { index: usize },
    /// Nothing left pending. Emitted at most once per session.
    PackComplete,
}

pub struct ChecklistEngine<S: StateStore> {
    pack_name: String,
    item_total: usize,
    /// Unresolved items by index; resolved items are dropped from here
    pending: BTreeMap<usize, Item>,
    verified: BTreeSet<usize>,
    pending_count: usize,
    complete_emitted: bool,
    events: VecDeque<ChecklistEvent>,
    store: S,
}

impl<S: StateStore> ChecklistEngine<S> {
    /// Start a session for `pack`, skipping items already in `pre_verified`.
    ///
    /// Indices past the end of the pack are dropped from the verified set.
    /// A non-empty pack with nothing left pending queues `PackComplete`
    /// immediately.
    pub fn initialize(pack: &Pack, pre_verified: BTreeSet<usize>, store: S) -> Self {
        let item_total = pack.items.len();
        let verified: BTreeSet<usize> = pre_verified
            .into_iter()
            .filter(|&index| index < item_total)
            .collect();

        let pending: BTreeMap<usize, Item> = pack
            .items
            .iter()
            .enumerate()
            .filter(|(index, _)| !verified.contains(index))
            .map(|(index, item)| (index, item.clone()))
            .collect();

        let mut engine = Self {
            pack_name: pack.name.clone(),
            item_total,
            pending_count: pending.len(),
            pending,
            verified,
            complete_emitted: false,
            events: VecDeque::new(),
            store,
        };

        log::info!(
            "[ENGINE] Pack {:?}: {} items, {} pending",
            pack.id,
            item_total,
            engine.pending_count
        );

        if engine.pending_count == 0 && item_total > 0 {
            engine.emit_complete();
        }
        engine
    }

    /// Checkbox click on a top-level item, dispatched by kind
    pub fn verify(&mut self, index: usize) -> bool {
        match self.pending.get(&index) {
            Some(Item::Simple(_)) => self.verify_simple(index),
            Some(Item::Group(_)) => self.verify_group(index),
            None => false,
        }
    }

    /// Verify a simple item. No-op for unknown, resolved or group indices.
    pub fn verify_simple(&mut self, index: usize) -> bool {
        if !matches!(self.pending.get(&index), Some(Item::Simple(_))) {
            return false;
        }
        self.commit(index);
        true
    }

    /// Verify a whole group at once, marking every sub-item
    pub fn verify_group(&mut self, index: usize) -> bool {
        let Some(Item::Group(group)) = self.pending.get_mut(&index) else {
            return false;
        };
        for sub in group.sub_items.iter_mut() {
            sub.verified = true;
        }
        self.commit(index);
        true
    }

    /// Verify one sub-item; the group resolves when its last sub-item does
    pub fn verify_sub_item(&mut self, group_index: usize, sub_id: &str) -> bool {
        let Some(Item::Group(group)) = self.pending.get_mut(&group_index) else {
            return false;
        };
        let Some(sub) = group.sub_item_mut(sub_id) else {
            return false;
        };
        if sub.verified {
            return false;
        }
        sub.verified = true;
        let group_complete = group.is_complete();

        self.events.push_back(ChecklistEvent::SubItemVerified {
            index: group_index,
            sub_id: sub_id.to_string(),
        });
        if group_complete {
            self.commit(group_index);
        }
        true
    }

    /// Terminal transition shared by every verification path
    fn commit(&mut self, index: usize) {
        self.pending.remove(&index);
        self.verified.insert(index);
        self.pending_count = self.pending_count.saturating_sub(1);
        debug_assert_eq!(self.pending_count, self.item_total - self.verified.len());

        self.store.save(&self.verified);
        log::debug!("[ENGINE] Item {} verified, {} pending", index, self.pending_count);

        self.events.push_back(ChecklistEvent::ItemVerified { index });
        if self.pending_count == 0 {
            self.emit_complete();
        }
    }

    fn emit_complete(&mut self) {
        if self.complete_emitted {
            return;
        }
        self.complete_emitted = true;
        log::info!("[ENGINE] Pack {:?} complete", self.pack_name);
        self.events.push_back(ChecklistEvent::PackComplete);
    }

    pub fn drain_events(&mut self) -> Vec<ChecklistEvent> {
        self.events.drain(..).collect()
    }

    pub fn pending_count(&self) -> usize {
        self.pending_count
    }

    #[cfg(test)]
    pub fn verified(&self) -> &BTreeSet<usize> {
        &self.verified
    }

    #[cfg(test)]
    pub fn is_verified(&self, index: usize) -> bool {
        self.verified.contains(&index)
    }

    #[cfg(test)]
    pub fn is_complete(&self) -> bool {
        self.complete_emitted
    }

    pub fn pack_name(&self) -> &str {
        &self.pack_name
    }

    /// Unresolved items in ascending index order
    pub fn pending_items(&self) -> impl Iterator<Item = (usize, &Item)> + '_ {
        self.pending.iter().map(|(index, item)| (*index, item))
    }
}
