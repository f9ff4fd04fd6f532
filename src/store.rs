//! Checklist View State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Holds only what
//! the checklist view renders; the authoritative verification state lives in
//! the engine.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{sub_item_prefix, Item};

/// Display data for one top-level row
#[derive(Clone, Debug, PartialEq)]
pub struct ItemRow {
    pub index: usize,
    pub name: String,
    pub kind: RowKind,
}

#[derive(Clone, Debug, PartialEq)]
pub enum RowKind {
    Simple { quantity: String },
    Group { sub_items: Vec<SubItemRow> },
}

#[derive(Clone, Debug, PartialEq)]
pub struct SubItemRow {
    pub id: String,
    pub name: String,
    pub quantity: String,
}

impl ItemRow {
    pub fn from_item(index: usize, item: &Item) -> Self {
        let kind = match item {
            Item::Simple(simple) => RowKind::Simple {
                quantity: simple.quantity_label(),
            },
            Item::Group(group) => RowKind::Group {
                sub_items: group
                    .sub_items
                    .iter()
                    .map(|sub| SubItemRow {
                        id: sub.id.clone(),
                        name: sub.name.clone(),
                        quantity: sub.quantity_label(),
                    })
                    .collect(),
            },
        };
        Self {
            index,
            name: item.name().to_string(),
            kind,
        }
    }
}

/// Checklist view state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct ChecklistState {
    pub pack_name: String,
    /// Rows still on screen, in pack order
    pub rows: Vec<ItemRow>,
    /// Rows verified and playing their exit transition
    pub leaving: Vec<usize>,
    /// Sub-items checked inside groups that are still pending
    pub verified_subs: Vec<String>,
    /// Engine pending count after the last transition
    pub pending_count: usize,
    /// Pack finished, completion message visible
    pub complete: bool,
    /// Load error shown in place of the list
    pub error: Option<String>,
}

/// Type alias for the store
pub type ChecklistStore = Store<ChecklistState>;

/// Get the checklist store from context
pub fn use_checklist_store() -> ChecklistStore {
    expect_context::<ChecklistStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_load_pack(store: &ChecklistStore, pack_name: String, rows: Vec<ItemRow>) {
    *store.pack_name().write() = pack_name;
    *store.rows().write() = rows;
}

pub fn store_set_error(store: &ChecklistStore, message: String) {
    *store.error().write() = Some(message);
}

pub fn store_mark_sub_verified(store: &ChecklistStore, sub_id: String) {
    store.verified_subs().write().push(sub_id);
}

/// Start the exit transition of a row
pub fn store_mark_leaving(store: &ChecklistStore, index: usize) {
    store.leaving().update(|leaving| {
        if !leaving.contains(&index) {
            leaving.push(index);
        }
    });
}

/// Remove a row once its exit transition is over
pub fn store_remove_row(store: &ChecklistStore, index: usize) {
    store.rows().write().retain(|row| row.index != index);
    store.leaving().write().retain(|i| *i != index);
    let prefix = sub_item_prefix(index);
    store.verified_subs().write().retain(|id| !id.starts_with(&prefix));
}

pub fn store_set_pending(store: &ChecklistStore, pending: usize) {
    *store.pending_count().write() = pending;
}

pub fn store_set_complete(store: &ChecklistStore) {
    *store.complete().write() = true;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GroupItem, Quantity, SimpleItem, SubItem};

    #[test]
    fn test_row_from_simple_item() {
        let item = Item::Simple(SimpleItem {
            name: "Water".to_string(),
            quantity: Some(Quantity::Number(serde_json::Number::from(6u64))),
            unit: Some("L".to_string()),
        });
        let row = ItemRow::from_item(3, &item);
        assert_eq!(row.index, 3);
        assert_eq!(row.name, "Water");
        assert_eq!(row.kind, RowKind::Simple { quantity: "6 L".to_string() });
    }

    #[test]
    fn test_row_from_group_item() {
        let item = Item::Group(GroupItem {
            name: "Gloves".to_string(),
            sub_items: vec![SubItem {
                id: "sub-1-0".to_string(),
                name: "Nitrile".to_string(),
                quantity: Some(Quantity::Text("10".to_string())),
                unit: Some("pairs".to_string()),
                verified: false,
            }],
        });
        let row = ItemRow::from_item(1, &item);
        match row.kind {
            RowKind::Group { sub_items } => {
                assert_eq!(sub_items.len(), 1);
                assert_eq!(sub_items[0].id, "sub-1-0");
                assert_eq!(sub_items[0].quantity, "10 pairs");
            }
            RowKind::Simple { .. } => panic!("expected a group row"),
        }
    }

    fn row(index: usize) -> ItemRow {
        ItemRow {
            index,
            name: format!("Item {}", index),
            kind: RowKind::Simple { quantity: String::new() },
        }
    }

    #[test]
    fn test_mark_leaving_once() {
        let store: ChecklistStore = Store::new(ChecklistState::default());
        store_load_pack(&store, "Pack".to_string(), vec![row(0), row(1)]);

        store_mark_leaving(&store, 1);
        store_mark_leaving(&store, 1);
        assert_eq!(store.leaving().get_untracked(), vec![1]);
    }

    #[test]
    fn test_remove_row_drops_its_sub_items() {
        let store: ChecklistStore = Store::new(ChecklistState::default());
        store_load_pack(&store, "Pack".to_string(), vec![row(1), row(11)]);
        for id in ["sub-1-0", "sub-1-1", "sub-11-0"] {
            store_mark_sub_verified(&store, id.to_string());
        }

        store_mark_leaving(&store, 1);
        store_remove_row(&store, 1);

        let remaining: Vec<usize> = store.rows().get_untracked().iter().map(|r| r.index).collect();
        assert_eq!(remaining, vec![11]);
        assert!(store.leaving().get_untracked().is_empty());
        assert_eq!(store.verified_subs().get_untracked(), vec!["sub-11-0".to_string()]);
    }
}
