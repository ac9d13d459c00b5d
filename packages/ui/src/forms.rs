//! Stateless form controls. All state lives in the owning screen; these
//! components only pass values and events through.

use dioxus::prelude::*;

/// Labelled text input with inline error/helper text below the field.
///
/// When `error` is set it replaces the helper text, matching how the
/// original screens surface validation failures.
#[component]
pub fn TextField(
    label: String,
    value: String,
    oninput: EventHandler<FormEvent>,
    #[props(default)] error: Option<String>,
    #[props(default)] helper: Option<String>,
    #[props(default = false)] multiline: bool,
    #[props(default = false)] disabled: bool,
    #[props(default = "text".to_string())] input_type: String,
) -> Element {
    rsx! {
        div {
            class: "form-field",
            label { class: "field-label", "{label}" }
            if multiline {
                textarea {
                    class: "field-input",
                    rows: 4,
                    value: "{value}",
                    disabled: disabled,
                    oninput: move |evt| oninput.call(evt),
                }
            } else {
                input {
                    class: "field-input",
                    r#type: "{input_type}",
                    value: "{value}",
                    disabled: disabled,
                    oninput: move |evt| oninput.call(evt),
                }
            }
            if let Some(err) = &error {
                span { class: "field-error", "{err}" }
            } else if let Some(help) = &helper {
                span { class: "field-helper", "{help}" }
            }
        }
    }
}

/// Labelled select with `(value, label)` options.
#[component]
pub fn SelectField(
    label: String,
    value: String,
    options: Vec<(String, String)>,
    onchange: EventHandler<FormEvent>,
    #[props(default)] placeholder: Option<String>,
    #[props(default)] error: Option<String>,
) -> Element {
    rsx! {
        div {
            class: "form-field",
            label { class: "field-label", "{label}" }
            select {
                class: "field-input",
                value: "{value}",
                onchange: move |evt| onchange.call(evt),
                if let Some(hint) = &placeholder {
                    option { value: "", disabled: true, selected: value.is_empty(), "{hint}" }
                }
                for (val, text) in &options {
                    option {
                        key: "{val}",
                        value: "{val}",
                        selected: *val == value,
                        "{text}"
                    }
                }
            }
            if let Some(err) = &error {
                span { class: "field-error", "{err}" }
            }
        }
    }
}

/// Visual weight of an [`ActionButton`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonKind {
    Primary,
    Secondary,
    Danger,
}

impl ButtonKind {
    fn class(self) -> &'static str {
        match self {
            ButtonKind::Primary => "btn btn-primary",
            ButtonKind::Secondary => "btn btn-secondary",
            ButtonKind::Danger => "btn btn-danger",
        }
    }
}

#[component]
pub fn ActionButton(
    label: String,
    #[props(default)] onclick: EventHandler<MouseEvent>,
    #[props(default = ButtonKind::Primary)] kind: ButtonKind,
    #[props(default = false)] disabled: bool,
    #[props(default = false)] submit: bool,
) -> Element {
    let button_type = if submit { "submit" } else { "button" };
    rsx! {
        button {
            class: "{kind.class()}",
            r#type: "{button_type}",
            disabled: disabled,
            onclick: move |evt| onclick.call(evt),
            "{label}"
        }
    }
}
