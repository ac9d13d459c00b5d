//! Dirty-flag tracking and navigation-away confirmation.
//!
//! The dirty flag is advisory only: it gates a browser confirmation before
//! in-app navigation and blocks tab close via `beforeunload` while set.
//! Nothing here is transactional.

use dioxus::prelude::*;

/// Signal marking unsaved form edits. On the web target this also registers
/// a `beforeunload` listener for the lifetime of the screen so closing the
/// tab with a dirty form prompts the browser's own confirmation.
pub fn use_dirty_flag() -> Signal<bool> {
    let dirty = use_signal(|| false);

    #[cfg(target_arch = "wasm32")]
    {
        use std::rc::Rc;
        use wasm_bindgen::prelude::*;
        use wasm_bindgen::JsCast;

        let listener = use_hook(|| {
            let closure = Closure::<dyn FnMut(web_sys::BeforeUnloadEvent)>::new(
                move |evt: web_sys::BeforeUnloadEvent| {
                    if *dirty.peek() {
                        evt.prevent_default();
                        evt.set_return_value("");
                    }
                },
            );
            if let Some(window) = web_sys::window() {
                let _ = window.add_event_listener_with_callback(
                    "beforeunload",
                    closure.as_ref().unchecked_ref(),
                );
            }
            Rc::new(closure)
        });

        use_drop(move || {
            if let Some(window) = web_sys::window() {
                let _ = window.remove_event_listener_with_callback(
                    "beforeunload",
                    listener.as_ref().unchecked_ref(),
                );
            }
        });
    }

    dirty
}

/// Whether the user may leave a form. Clean forms leave freely; dirty forms
/// leave only if `confirm` says so. Declining keeps the draft untouched.
pub fn can_discard(dirty: bool, confirm: impl FnOnce() -> bool) -> bool {
    !dirty || confirm()
}

/// Blocking yes/no prompt. `window.confirm` on the web target; auto-accept
/// elsewhere so native test builds never hang.
pub fn confirm(message: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!(message, "confirm prompt auto-accepted off-web");
        true
    }
}

/// Transient user notification. `window.alert` on the web target.
pub fn alert(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::info!(message, "alert");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_form_leaves_without_prompting() {
        // The confirmation callback must not even run.
        assert!(can_discard(false, || panic!("prompted on a clean form")));
    }

    #[test]
    fn test_dirty_form_stays_when_declined() {
        assert!(!can_discard(true, || false));
    }

    #[test]
    fn test_dirty_form_leaves_when_confirmed() {
        assert!(can_discard(true, || true));
    }
}
