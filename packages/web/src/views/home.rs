use dioxus::prelude::*;

/// Static landing copy.
#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            class: "home",
            h1 { "Welcome to Our Application!" }
            p { "This is the homepage. Use the navigation menu to explore the site." }
            p { "Click on \"Cafés\" to view the list of cafés, or \"Employees\" to view the employee directory." }
        }
    }
}
