use dioxus::prelude::*;

/// Shared layout header. Navigation links are passed as children because the
/// route table lives in the web crate.
#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        header {
            class: "navbar",
            h1 { class: "navbar-title", "Café Admin" }
            nav {
                ul { class: "navbar-links", {children} }
            }
        }
    }
}
