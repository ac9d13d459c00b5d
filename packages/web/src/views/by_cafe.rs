//! Read-only roster of one café's employees, reached from the café list.

use dioxus::prelude::*;

use api::EmployeeClient;
use ui::{ActionButton, ButtonKind, DataTable};

use crate::Route;

#[component]
pub fn EmployeesByCafe(cafe: String) -> Element {
    let nav = use_navigator();
    let filter = if cafe.is_empty() { None } else { Some(cafe.clone()) };

    let employees = use_resource(move || {
        let filter = filter.clone();
        async move { EmployeeClient::default().list(filter.as_deref()).await }
    });

    let body = match &*employees.read() {
        None => rsx! {
            p { class: "status", "Loading..." }
        },
        Some(Err(_)) => rsx! {
            p { class: "status status-error", "Error loading employees" }
        },
        Some(Ok(rows)) => {
            let rows = rows.clone();
            rsx! {
                DataTable {
                    columns: vec![
                        "ID".to_string(),
                        "Name".to_string(),
                        "Email".to_string(),
                        "Phone".to_string(),
                        "Gender".to_string(),
                        "Start Date".to_string(),
                        "Days Worked".to_string(),
                    ],
                    row_count: rows.len(),
                    empty_message: "No employees available",
                    for employee in rows {
                        tr {
                            key: "{employee.id}",
                            td { "{employee.id}" }
                            td { "{employee.name}" }
                            td { "{employee.email_address}" }
                            td { "{employee.phone_number}" }
                            td { "{employee.gender}" }
                            td { "{employee.start_date}" }
                            td { "{employee.days_worked}" }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        div {
            class: "employee-by-cafe",
            h2 { "Employees for Café: {cafe}" }
            ActionButton {
                label: "Back to Cafes",
                kind: ButtonKind::Secondary,
                onclick: move |_| {
                    nav.push(Route::CafeList {});
                },
            }
            {body}
        }
    }
}
