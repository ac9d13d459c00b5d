//! Café list screen: filterable, paginated table with row actions.

use dioxus::prelude::*;

use api::{CafeClient, CafeSummary, CollectionCache};
use ui::{page_count, page_slice, ActionButton, ButtonKind, DataTable, Paginator, TextField};

use crate::Route;

const PAGE_SIZE: usize = 10;

#[component]
pub fn CafeList() -> Element {
    let nav = use_navigator();
    let mut cache = use_signal(CollectionCache::<CafeSummary>::new);
    let mut location_filter = use_signal(String::new);
    let mut page = use_signal(|| 0usize);

    let cafes = use_resource(move || async move {
        // Reading the generation subscribes this task to invalidations. The
        // rows are peeked, not read, so filling the cache below retriggers
        // the task once and the rerun settles on the cached copy.
        let _generation = cache.read().generation();
        let mut snapshot = cache.peek().clone();
        let rows = snapshot
            .get_or_fetch(|| async { CafeClient::default().list(None).await })
            .await;
        if let Ok(rows) = &rows {
            if cache.peek().rows().is_none() {
                cache.write().fill(rows.clone());
            }
        }
        rows
    });

    let on_delete = move |id: String| {
        if !ui::confirm("Are you sure you want to delete this cafe?") {
            return;
        }
        spawn(async move {
            match CafeClient::default().delete(&id).await {
                Ok(()) => cache.write().invalidate(),
                Err(err) => {
                    tracing::error!("failed to delete cafe {id}: {err}");
                    ui::alert("Failed to delete café. Please try again.");
                }
            }
        });
    };

    let body = match &*cafes.read() {
        None => rsx! {
            p { class: "status", "Loading..." }
        },
        Some(Err(_)) => rsx! {
            p { class: "status status-error", "Error loading cafes" }
        },
        Some(Ok(rows)) => {
            // The location filter is applied in memory after fetch; it is a
            // substring match, not a server-side guarantee.
            let needle = location_filter().to_lowercase();
            let filtered: Vec<CafeSummary> = rows
                .iter()
                .filter(|cafe| cafe.location.to_lowercase().contains(&needle))
                .cloned()
                .collect();
            let pages = page_count(filtered.len(), PAGE_SIZE);
            let visible = page_slice(&filtered, page(), PAGE_SIZE);
            rsx! {
                DataTable {
                    columns: vec![
                        "Logo".to_string(),
                        "Name".to_string(),
                        "Description".to_string(),
                        "Employees".to_string(),
                        "Location".to_string(),
                        "Actions".to_string(),
                    ],
                    row_count: visible.len(),
                    empty_message: "No cafes available",
                    for cafe in visible {
                        CafeRow { key: "{cafe.id}", cafe: cafe.clone(), on_delete: on_delete }
                    }
                }
                Paginator {
                    page: page(),
                    page_count: pages,
                    on_prev: move |_| page.set(page().saturating_sub(1)),
                    on_next: move |_| {
                        if page() + 1 < pages {
                            page.set(page() + 1);
                        }
                    },
                }
            }
        }
    };

    rsx! {
        div {
            class: "cafe-list",
            div {
                class: "list-toolbar",
                TextField {
                    label: "Filter by Location",
                    value: location_filter(),
                    oninput: move |evt: FormEvent| {
                        location_filter.set(evt.value());
                        page.set(0);
                    },
                }
                ActionButton {
                    label: "Add New Café",
                    onclick: move |_| {
                        nav.push(Route::AddCafe {});
                    },
                }
            }
            {body}
        }
    }
}

#[component]
fn CafeRow(cafe: CafeSummary, on_delete: EventHandler<String>) -> Element {
    let nav = use_navigator();
    let employees_label = format!("View Employees ({})", cafe.employee_count);
    let cafe_name = cafe.name.clone();
    let edit_id = cafe.id.clone();
    let delete_id = cafe.id.clone();
    rsx! {
        tr {
            td {
                if let Some(logo) = &cafe.logo {
                    img { class: "cafe-logo", src: "{logo}", alt: "logo" }
                }
            }
            td { "{cafe.name}" }
            td { "{cafe.description}" }
            td {
                ActionButton {
                    label: employees_label,
                    kind: ButtonKind::Secondary,
                    onclick: move |_| {
                        nav.push(Route::EmployeesByCafe { cafe: cafe_name.clone() });
                    },
                }
            }
            td { "{cafe.location}" }
            td {
                class: "row-actions",
                ActionButton {
                    label: "Edit",
                    onclick: move |_| {
                        nav.push(Route::EditCafe { id: edit_id.clone() });
                    },
                }
                ActionButton {
                    label: "Delete",
                    kind: ButtonKind::Danger,
                    onclick: move |_| on_delete.call(delete_id.clone()),
                }
            }
        }
    }
}
