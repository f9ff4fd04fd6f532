//! Checklist Row Components
//!
//! A simple item with its checkbox, and a group with a header checkbox plus
//! one clickable row per sub-item.

use leptos::prelude::*;

use crate::store::{use_checklist_store, ChecklistStateStoreFields, SubItemRow};

fn row_class(base: &'static str, verified: bool) -> String {
    if verified {
        format!("{} verified", base)
    } else {
        base.to_string()
    }
}

#[component]
pub fn SimpleItemRow(
    index: usize,
    name: String,
    quantity: String,
    #[prop(into)] on_verify: Callback<usize>,
) -> impl IntoView {
    let store = use_checklist_store();
    let leaving = move || store.leaving().read().contains(&index);

    view! {
        <li class=move || row_class("checklist-item", leaving()) data-index=index.to_string()>
            <div class="checkbox" on:click=move |_| on_verify.run(index)></div>
            <div class="item-info">
                <span class="item-name">{name}</span>
            </div>
            <span class="item-quantity">{quantity}</span>
        </li>
    }
}

#[component]
pub fn GroupItemRow(
    index: usize,
    name: String,
    sub_items: Vec<SubItemRow>,
    #[prop(into)] on_verify: Callback<usize>,
    #[prop(into)] on_verify_sub: Callback<(usize, String)>,
) -> impl IntoView {
    let store = use_checklist_store();
    let leaving = move || store.leaving().read().contains(&index);

    let sub_rows = sub_items
        .into_iter()
        .map(|sub| {
            let class_id = sub.id.clone();
            let click_id = sub.id.clone();
            let is_verified = move || store.verified_subs().read().contains(&class_id);
            view! {
                <li
                    class=move || row_class("subitem-entry", is_verified())
                    data-subid=sub.id
                    on:click=move |_| on_verify_sub.run((index, click_id.clone()))
                >
                    <span class="subitem-name">{sub.name}</span>
                    <span class="subitem-quantity">{sub.quantity}</span>
                </li>
            }
        })
        .collect_view();

    view! {
        <li class=move || row_class("checklist-group", leaving()) data-index=index.to_string()>
            <div class="group-header">
                <div class="checkbox" on:click=move |_| on_verify.run(index)></div>
                <span class="group-name">{name}</span>
            </div>
            <ul class="subitems-list">{sub_rows}</ul>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_class() {
        assert_eq!(row_class("checklist-item", false), "checklist-item");
        assert_eq!(row_class("subitem-entry", true), "subitem-entry verified");
    }
}
