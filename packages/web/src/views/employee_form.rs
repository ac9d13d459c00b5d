//! Employee add/edit screens.
//!
//! Unlike the café forms these validate name, email and phone per keystroke,
//! and a submit with outstanding errors is blocked with a generic alert.
//! The add screen selects a café by name and derives `cafe_id` from the
//! fetched café list; the edit screen selects by id directly.

use chrono::NaiveDate;
use dioxus::prelude::*;

use api::{CafeClient, EmployeeClient, Gender, NewEmployee};
use ui::validate;
use ui::{ActionButton, ButtonKind, SelectField, TextField};

use crate::Route;

#[component]
pub fn AddEmployee() -> Element {
    let nav = use_navigator();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut gender = use_signal(String::new);
    let mut start_date = use_signal(String::new);
    let mut selected_cafe = use_signal(String::new);
    let mut cafe_id = use_signal(String::new);
    let mut name_error = use_signal(|| Option::<String>::None);
    let mut email_error = use_signal(|| Option::<String>::None);
    let mut phone_error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    let cafes = use_resource(move || async move { CafeClient::default().list(None).await });

    let handle_cafe_change = move |evt: FormEvent| {
        let chosen = evt.value();
        selected_cafe.set(chosen.clone());
        if let Some(Ok(rows)) = &*cafes.read() {
            if let Some(cafe) = rows.iter().find(|cafe| cafe.name == chosen) {
                cafe_id.set(cafe.id.clone());
            }
        }
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();

        if name_error().is_some() || email_error().is_some() || phone_error().is_some() {
            ui::alert("Please fix the errors in the form before submitting.");
            return;
        }
        let name_err = validate::required("Name", &name());
        if name_err.is_some() {
            name_error.set(name_err);
            return;
        }
        let phone_err = validate::phone(&phone());
        if phone_err.is_some() {
            phone_error.set(phone_err);
            return;
        }
        let email_err = validate::email(&email());
        if email_err.is_some() {
            email_error.set(email_err);
            return;
        }
        let Some(gender) = Gender::parse(&gender()) else {
            ui::alert("Please select a gender.");
            return;
        };
        let Ok(start) = NaiveDate::parse_from_str(&start_date(), "%Y-%m-%d") else {
            ui::alert("Please choose a start date.");
            return;
        };
        if cafe_id().is_empty() {
            ui::alert("Please select a café.");
            return;
        }

        let payload = NewEmployee {
            name: name(),
            email_address: email(),
            phone_number: phone(),
            gender,
            start_date: start,
            cafe_id: cafe_id(),
        };
        submitting.set(true);
        spawn(async move {
            match EmployeeClient::default().create(&payload).await {
                Ok(created) => {
                    tracing::debug!(employee_id = %created.employee_id, "employee created");
                    nav.push(Route::EmployeeList {
                        cafe: String::new(),
                    });
                }
                Err(err) => {
                    tracing::error!("failed to create employee: {err}");
                    ui::alert("Failed to create employee. Please try again.");
                    submitting.set(false);
                }
            }
        });
    };

    let gender_options: Vec<(String, String)> = Gender::ALL
        .iter()
        .map(|g| (g.as_str().to_string(), g.as_str().to_string()))
        .collect();
    let cafe_options: Vec<(String, String)> = match &*cafes.read() {
        Some(Ok(rows)) => rows
            .iter()
            .map(|cafe| (cafe.name.clone(), cafe.name.clone()))
            .collect(),
        _ => Vec::new(),
    };

    rsx! {
        div {
            class: "form-page",
            h1 { "Add New Employee" }
            form {
                novalidate: true,
                onsubmit: handle_submit,
                TextField {
                    label: "Name",
                    value: name(),
                    error: name_error(),
                    oninput: move |evt: FormEvent| {
                        let value = evt.value();
                        name_error.set(validate::required("Name", &value));
                        name.set(value);
                    },
                }
                TextField {
                    label: "Email Address",
                    value: email(),
                    error: email_error(),
                    oninput: move |evt: FormEvent| {
                        let value = evt.value();
                        email_error.set(validate::email(&value));
                        email.set(value);
                    },
                }
                TextField {
                    label: "Phone Number",
                    value: phone(),
                    error: phone_error(),
                    oninput: move |evt: FormEvent| {
                        let value = evt.value();
                        phone_error.set(validate::phone(&value));
                        phone.set(value);
                    },
                }
                SelectField {
                    label: "Gender",
                    value: gender(),
                    options: gender_options,
                    placeholder: Some("Select gender".to_string()),
                    onchange: move |evt: FormEvent| gender.set(evt.value()),
                }
                TextField {
                    label: "Start Date",
                    value: start_date(),
                    input_type: "date",
                    oninput: move |evt: FormEvent| start_date.set(evt.value()),
                }
                SelectField {
                    label: "Café Name",
                    value: selected_cafe(),
                    options: cafe_options,
                    placeholder: Some("Select a café".to_string()),
                    onchange: handle_cafe_change,
                }
                TextField {
                    label: "Café ID",
                    value: cafe_id(),
                    disabled: true,
                    oninput: move |_| {},
                }
                div {
                    class: "form-actions",
                    ActionButton {
                        label: "Add Employee",
                        submit: true,
                        disabled: submitting(),
                    }
                    ActionButton {
                        label: "Cancel",
                        kind: ButtonKind::Secondary,
                        onclick: move |_| {
                            nav.push(Route::EmployeeList {
                                cafe: String::new(),
                            });
                        },
                    }
                }
            }
        }
    }
}

#[component]
pub fn EditEmployee(id: String) -> Element {
    let nav = use_navigator();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut gender = use_signal(String::new);
    let mut start_date = use_signal(String::new);
    let mut cafe_id = use_signal(String::new);
    let mut days_worked = use_signal(String::new);
    let mut name_error = use_signal(|| Option::<String>::None);
    let mut email_error = use_signal(|| Option::<String>::None);
    let mut phone_error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);
    let mut prefilled = use_signal(|| false);

    let employee_id = id.clone();
    let loaded = use_resource(move || {
        let id = employee_id.clone();
        async move { EmployeeClient::default().get(&id).await }
    });
    let cafes = use_resource(move || async move { CafeClient::default().list(None).await });

    use_effect(move || {
        if prefilled() {
            return;
        }
        if let Some(Ok(employee)) = &*loaded.read() {
            name.set(employee.name.clone());
            email.set(employee.email_address.clone());
            phone.set(employee.phone_number.clone());
            gender.set(employee.gender.as_str().to_string());
            start_date.set(employee.start_date.format("%Y-%m-%d").to_string());
            cafe_id.set(employee.cafe_id.clone().unwrap_or_default());
            days_worked.set(employee.days_worked.to_string());
            prefilled.set(true);
        }
    });

    let submit_id = id.clone();
    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let name_err = validate::required("Name", &name());
        if name_err.is_some() {
            name_error.set(name_err);
            return;
        }
        let phone_err = validate::phone(&phone());
        if phone_err.is_some() {
            phone_error.set(phone_err);
            return;
        }
        let email_err = validate::email(&email());
        if email_err.is_some() {
            email_error.set(email_err);
            return;
        }
        let Some(gender) = Gender::parse(&gender()) else {
            ui::alert("Please select a gender.");
            return;
        };
        let Ok(start) = NaiveDate::parse_from_str(&start_date(), "%Y-%m-%d") else {
            ui::alert("Please choose a start date.");
            return;
        };
        if cafe_id().is_empty() {
            ui::alert("Please select a café.");
            return;
        }

        let payload = NewEmployee {
            name: name(),
            email_address: email(),
            phone_number: phone(),
            gender,
            start_date: start,
            cafe_id: cafe_id(),
        };
        submitting.set(true);
        let id = submit_id.clone();
        spawn(async move {
            match EmployeeClient::default().update(&id, &payload).await {
                Ok(()) => {
                    nav.push(Route::EmployeeList {
                        cafe: String::new(),
                    });
                }
                Err(err) => {
                    tracing::error!("failed to update employee {id}: {err}");
                    ui::alert("Failed to update employee. Please try again.");
                    submitting.set(false);
                }
            }
        });
    };

    let loading = matches!(
        (&*loaded.read(), &*cafes.read()),
        (None, _) | (_, None)
    );
    let load_error = matches!(
        (&*loaded.read(), &*cafes.read()),
        (Some(Err(_)), _) | (_, Some(Err(_)))
    );

    if loading {
        return rsx! {
            p { class: "status", "Loading..." }
        };
    }
    if load_error {
        return rsx! {
            p { class: "status status-error", "Error loading data." }
        };
    }

    let gender_options: Vec<(String, String)> = Gender::ALL
        .iter()
        .map(|g| (g.as_str().to_string(), g.as_str().to_string()))
        .collect();
    let cafe_options: Vec<(String, String)> = match &*cafes.read() {
        Some(Ok(rows)) => rows
            .iter()
            .map(|cafe| (cafe.id.clone(), cafe.name.clone()))
            .collect(),
        _ => Vec::new(),
    };

    rsx! {
        div {
            class: "form-page",
            h1 { "Edit Employee" }
            form {
                novalidate: true,
                onsubmit: handle_submit,
                TextField {
                    label: "Name",
                    value: name(),
                    error: name_error(),
                    oninput: move |evt: FormEvent| {
                        let value = evt.value();
                        name_error.set(validate::required("Name", &value));
                        name.set(value);
                    },
                }
                TextField {
                    label: "Email Address",
                    value: email(),
                    error: email_error(),
                    oninput: move |evt: FormEvent| {
                        let value = evt.value();
                        email_error.set(validate::email(&value));
                        email.set(value);
                    },
                }
                TextField {
                    label: "Phone Number",
                    value: phone(),
                    error: phone_error(),
                    oninput: move |evt: FormEvent| {
                        let value = evt.value();
                        phone_error.set(validate::phone(&value));
                        phone.set(value);
                    },
                }
                SelectField {
                    label: "Gender",
                    value: gender(),
                    options: gender_options,
                    onchange: move |evt: FormEvent| gender.set(evt.value()),
                }
                TextField {
                    label: "Start Date",
                    value: start_date(),
                    input_type: "date",
                    oninput: move |evt: FormEvent| start_date.set(evt.value()),
                }
                SelectField {
                    label: "Café",
                    value: cafe_id(),
                    options: cafe_options,
                    placeholder: Some("Select a café".to_string()),
                    onchange: move |evt: FormEvent| cafe_id.set(evt.value()),
                }
                TextField {
                    label: "Days Worked",
                    value: days_worked(),
                    disabled: true,
                    oninput: move |_| {},
                }
                div {
                    class: "form-actions",
                    ActionButton {
                        label: "Save Changes",
                        submit: true,
                        disabled: submitting(),
                    }
                    ActionButton {
                        label: "Cancel",
                        kind: ButtonKind::Secondary,
                        onclick: move |_| {
                            nav.push(Route::EmployeeList {
                                cafe: String::new(),
                            });
                        },
                    }
                }
            }
        }
    }
}
