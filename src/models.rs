//! Checklist Models
//!
//! Data structures for the pack catalog.

use std::fmt;

use serde::Deserialize;

/// Top-level catalog document (`packs.json`)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Catalog {
    pub packs: Vec<Pack>,
}

impl Catalog {
    /// Find a pack by its id
    pub fn find(&self, pack_id: &str) -> Option<&Pack> {
        self.packs.iter().find(|pack| pack.id == pack_id)
    }
}

/// A named, ordered collection of checklist items
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawPack")]
pub struct Pack {
    pub id: String,
    pub name: String,
    pub items: Vec<Item>,
}

/// Checklist entry, addressed by its position in `Pack::items`
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Simple(SimpleItem),
    Group(GroupItem),
}

impl Item {
    pub fn name(&self) -> &str {
        match self {
            Item::Simple(item) => &item.name,
            Item::Group(group) => &group.name,
        }
    }

    #[cfg(test)]
    pub fn is_group(&self) -> bool {
        matches!(self, Item::Group(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimpleItem {
    pub name: String,
    pub quantity: Option<Quantity>,
    pub unit: Option<String>,
}

impl SimpleItem {
    pub fn quantity_label(&self) -> String {
        quantity_label(self.quantity.as_ref(), self.unit.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupItem {
    pub name: String,
    pub sub_items: Vec<SubItem>,
}

impl GroupItem {
    /// Every sub-item verified (vacuously true for an empty group)
    pub fn is_complete(&self) -> bool {
        self.sub_items.iter().all(|sub| sub.verified)
    }

    pub fn sub_item_mut(&mut self, sub_id: &str) -> Option<&mut SubItem> {
        self.sub_items.iter_mut().find(|sub| sub.id == sub_id)
    }
}

/// Child entry of a group. `id` is assigned when the catalog is decoded.
#[derive(Debug, Clone, PartialEq)]
pub struct SubItem {
    pub id: String,
    pub name: String,
    pub quantity: Option<Quantity>,
    pub unit: Option<String>,
    pub verified: bool,
}

impl SubItem {
    pub fn quantity_label(&self) -> String {
        quantity_label(self.quantity.as_ref(), self.unit.as_deref())
    }
}

/// Quantity as written in the catalog: a number or free text
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Quantity {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::Number(n) => write!(f, "{}", n),
            Quantity::Text(s) => f.write_str(s),
        }
    }
}

/// `"<quantity>"` or `"<quantity> <unit>"`
pub fn quantity_label(quantity: Option<&Quantity>, unit: Option<&str>) -> String {
    let quantity = quantity.map(|q| q.to_string()).unwrap_or_default();
    match unit.filter(|u| !u.is_empty()) {
        Some(unit) => format!("{} {}", quantity, unit),
        None => quantity,
    }
}

/// Sub-item id, unique within its group
pub fn sub_item_id(item_index: usize, sub_index: usize) -> String {
    format!("{}{}", sub_item_prefix(item_index), sub_index)
}

/// Prefix shared by every sub-item id of one group
pub fn sub_item_prefix(item_index: usize) -> String {
    format!("sub-{}-", item_index)
}

// ========================
// Wire Format
// ========================
// Field names are accepted in English and in the legacy Spanish spelling.

#[derive(Deserialize)]
struct RawPack {
    id: String,
    #[serde(alias = "nombre")]
    name: String,
    #[serde(default)]
    items: Vec<RawItem>,
}

#[derive(Deserialize)]
struct RawItem {
    #[serde(alias = "nombre")]
    name: String,
    #[serde(default, alias = "cantidad")]
    quantity: Option<Quantity>,
    #[serde(default, alias = "unidad")]
    unit: Option<String>,
    #[serde(default, rename = "isGroup", alias = "esGrupo")]
    is_group: Option<bool>,
    #[serde(default, rename = "subItems", alias = "items")]
    sub_items: Option<Vec<RawSubItem>>,
}

#[derive(Deserialize)]
struct RawSubItem {
    #[serde(alias = "nombre")]
    name: String,
    #[serde(default, alias = "cantidad")]
    quantity: Option<Quantity>,
    #[serde(default, alias = "unidad")]
    unit: Option<String>,
}

impl From<RawPack> for Pack {
    fn from(raw: RawPack) -> Self {
        let items = raw
            .items
            .into_iter()
            .enumerate()
            .map(|(index, item)| item.into_item(index))
            .collect();
        Pack {
            id: raw.id,
            name: raw.name,
            items,
        }
    }
}

impl RawItem {
    fn into_item(self, index: usize) -> Item {
        match (self.is_group, self.sub_items) {
            (Some(false), _) | (_, None) => Item::Simple(SimpleItem {
                name: self.name,
                quantity: self.quantity,
                unit: self.unit,
            }),
            (_, Some(subs)) => Item::Group(GroupItem {
                name: self.name,
                sub_items: subs
                    .into_iter()
                    .enumerate()
                    .map(|(sub_index, sub)| SubItem {
                        id: sub_item_id(index, sub_index),
                        name: sub.name,
                        quantity: sub.quantity,
                        unit: sub.unit,
                        verified: false,
                    })
                    .collect(),
            }),
        }
    }
}
