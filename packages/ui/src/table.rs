//! Tabular presentation: a dumb table shell plus in-memory pagination
//! helpers. The screens slice their own rows; the table never fetches.

use dioxus::prelude::*;

/// Table shell with a header row and an empty-state message. Rows are
/// supplied as children so each screen controls its own cells and actions.
#[component]
pub fn DataTable(
    columns: Vec<String>,
    row_count: usize,
    #[props(default = "No rows".to_string())] empty_message: String,
    children: Element,
) -> Element {
    let span = columns.len();
    rsx! {
        table {
            class: "data-table",
            thead {
                tr {
                    for col in &columns {
                        th { key: "{col}", "{col}" }
                    }
                }
            }
            tbody {
                if row_count == 0 {
                    tr {
                        td { colspan: "{span}", class: "empty-row", "{empty_message}" }
                    }
                } else {
                    {children}
                }
            }
        }
    }
}

/// Prev/next pager. Hidden entirely when there is a single page.
#[component]
pub fn Paginator(
    page: usize,
    page_count: usize,
    on_prev: EventHandler<()>,
    on_next: EventHandler<()>,
) -> Element {
    if page_count <= 1 {
        return rsx! {};
    }
    rsx! {
        div {
            class: "paginator",
            button {
                class: "btn btn-secondary",
                disabled: page == 0,
                onclick: move |_| on_prev.call(()),
                "Previous"
            }
            span { class: "paginator-label", "Page {page + 1} of {page_count}" }
            button {
                class: "btn btn-secondary",
                disabled: page + 1 >= page_count,
                onclick: move |_| on_next.call(()),
                "Next"
            }
        }
    }
}

/// Number of pages needed for `total` rows.
pub fn page_count(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size).max(1)
}

/// The rows visible on `page`, clamped to the last page when the collection
/// shrank under the current index (e.g. after a delete).
pub fn page_slice<T: Clone>(rows: &[T], page: usize, page_size: usize) -> Vec<T> {
    let page = page.min(page_count(rows.len(), page_size) - 1);
    rows.iter()
        .skip(page * page_size)
        .take(page_size)
        .cloned()
        .collect()
}
