//! Employee directory screen.
//!
//! Fetches employees and cafés together: employee list rows carry only the
//! café *name*, so the café collection is joined in to recover the id for
//! display. The canonical association is always `cafe_id`.

use std::collections::HashMap;

use dioxus::prelude::*;

use api::{CafeClient, CafeSummary, CollectionCache, EmployeeClient, EmployeeSummary};
use ui::{ActionButton, ButtonKind, DataTable};

use crate::Route;

/// Map café name to café id for the display join. Unknown names (e.g. an
/// employee whose café was deleted) fall through to "Unknown" at render.
fn cafe_index(cafes: &[CafeSummary]) -> HashMap<String, String> {
    cafes
        .iter()
        .map(|cafe| (cafe.name.clone(), cafe.id.clone()))
        .collect()
}

#[component]
pub fn EmployeeList(cafe: String) -> Element {
    let nav = use_navigator();
    let mut cache = use_signal(CollectionCache::<EmployeeSummary>::new);
    let filter = if cafe.is_empty() { None } else { Some(cafe) };

    let employees = use_resource(move || {
        let filter = filter.clone();
        async move {
            // Same cache discipline as the café list: generation subscribes,
            // rows are peeked, misses fetch and fill.
            let _generation = cache.read().generation();
            let mut snapshot = cache.peek().clone();
            let rows = snapshot
                .get_or_fetch(move || async move {
                    EmployeeClient::default().list(filter.as_deref()).await
                })
                .await;
            if let Ok(rows) = &rows {
                if cache.peek().rows().is_none() {
                    cache.write().fill(rows.clone());
                }
            }
            rows
        }
    });
    let cafes = use_resource(move || async move { CafeClient::default().list(None).await });

    let on_delete = move |id: String| {
        if !ui::confirm("Are you sure you want to delete this employee?") {
            return;
        }
        spawn(async move {
            match EmployeeClient::default().delete(&id).await {
                Ok(()) => cache.write().invalidate(),
                Err(err) => {
                    tracing::error!("failed to delete employee {id}: {err}");
                    ui::alert("Failed to delete employee. Please try again.");
                }
            }
        });
    };

    let body = match (&*employees.read(), &*cafes.read()) {
        (None, _) | (_, None) => rsx! {
            p { class: "status", "Loading..." }
        },
        (Some(Err(_)), _) | (_, Some(Err(_))) => rsx! {
            p { class: "status status-error", "Error loading data." }
        },
        (Some(Ok(rows)), Some(Ok(cafe_rows))) => {
            let index = cafe_index(cafe_rows);
            let rows = rows.clone();
            rsx! {
                DataTable {
                    columns: vec![
                        "Employee ID".to_string(),
                        "Name".to_string(),
                        "Email Address".to_string(),
                        "Phone Number".to_string(),
                        "Days Worked".to_string(),
                        "Café ID".to_string(),
                        "Café Name".to_string(),
                        "Actions".to_string(),
                    ],
                    row_count: rows.len(),
                    empty_message: "No employees available",
                    for employee in rows {
                        EmployeeRow {
                            key: "{employee.id}",
                            cafe_id: index.get(&employee.cafe).cloned().unwrap_or_else(|| "Unknown".to_string()),
                            employee: employee.clone(),
                            on_delete: on_delete,
                        }
                    }
                }
            }
        }
    };

    rsx! {
        div {
            class: "employee-list",
            div {
                class: "list-toolbar",
                ActionButton {
                    label: "Add New Employee",
                    onclick: move |_| {
                        nav.push(Route::AddEmployee {});
                    },
                }
            }
            {body}
        }
    }
}

#[component]
fn EmployeeRow(
    employee: EmployeeSummary,
    cafe_id: String,
    on_delete: EventHandler<String>,
) -> Element {
    let nav = use_navigator();
    let edit_id = employee.id.clone();
    let delete_id = employee.id.clone();
    rsx! {
        tr {
            td { "{employee.id}" }
            td { "{employee.name}" }
            td { "{employee.email_address}" }
            td { "{employee.phone_number}" }
            td { "{employee.days_worked}" }
            td { "{cafe_id}" }
            td { "{employee.cafe}" }
            td {
                class: "row-actions",
                ActionButton {
                    label: "Edit",
                    onclick: move |_| {
                        nav.push(Route::EditEmployee { id: edit_id.clone() });
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

#[cfg(test)]
mod tests {
    use super::*;

    fn cafe(id: &str, name: &str) -> CafeSummary {
        CafeSummary {
            id: id.to_string(),
            name: name.to_string(),
            description: String::new(),
            logo: None,
            location: "Downtown".to_string(),
            employee_count: 0,
        }
    }

    #[test]
    fn test_cafe_index_maps_name_to_id() {
        let index = cafe_index(&[cafe("c1", "Espresso Lane"), cafe("c2", "Beanery")]);
        assert_eq!(index.get("Espresso Lane"), Some(&"c1".to_string()));
        assert_eq!(index.get("Beanery"), Some(&"c2".to_string()));
        assert_eq!(index.get("Gone"), None);
    }
}
