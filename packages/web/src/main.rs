use dioxus::prelude::*;

use ui::Navbar;
use views::{
    AddCafe, AddEmployee, CafeList, EditCafe, EditEmployee, EmployeeList, EmployeesByCafe, Home,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Layout)]
    #[route("/")]
    CafeList {},
    #[route("/home")]
    Home {},
    #[route("/cafe/add")]
    AddCafe {},
    #[route("/edit?:id")]
    EditCafe { id: String },
    #[route("/cafe/employee?:cafe")]
    EmployeesByCafe { cafe: String },
    #[route("/employee?:cafe")]
    EmployeeList { cafe: String },
    #[route("/employee/add")]
    AddEmployee {},
    #[route("/employee/edit/:id")]
    EditEmployee { id: String },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}

/// Shared shell: header navigation above the routed page.
#[component]
fn Layout() -> Element {
    rsx! {
        Navbar {
            li {
                Link { to: Route::CafeList {}, "Cafés" }
            }
            li {
                Link { to: Route::EmployeeList { cafe: String::new() }, "Employees" }
            }
        }
        main {
            class: "page",
            Outlet::<Route> {}
        }
    }
}
