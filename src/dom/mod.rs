//! Browser glue. Looks up the page elements, feeds events to the
//! [`UiController`](crate::controller::UiController) and writes the views it
//! returns back into the DOM.

#[cfg(target_arch = "wasm32")]
mod bind;
#[cfg(target_arch = "wasm32")]
mod elements;
#[cfg(target_arch = "wasm32")]
mod storage;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use web_sys::{ Document, Event, EventTarget, Window };

#[cfg(target_arch = "wasm32")]
use crate::configs::load_site_config;
#[cfg(target_arch = "wasm32")]
use crate::error::DomError;

/// Id of the optional `<script type="application/json">` holding config overrides.
#[cfg(target_arch = "wasm32")]
pub const CONFIG_ELEMENT_ID: &str = "site-config";

/// `document.readyState` is a plain string; only `"loading"` means the
/// markup is not parsed yet.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub(crate) fn still_loading(ready_state: &str) -> bool {
    ready_state == "loading"
}

/// Wires the page once the document is parsed.
#[cfg(target_arch = "wasm32")]
pub fn run() -> Result<(), DomError> {
    let window = web_sys::window().ok_or(DomError::MissingWindow)?;
    let document = window.document().ok_or(DomError::MissingDocument)?;

    if still_loading(&document.ready_state()) {
        let ready_window = window.clone();
        let ready_document = document.clone();
        listen(&document, "DOMContentLoaded", move |_| {
            if let Err(e) = wire(&ready_window, &ready_document) {
                log::error!("Failed to wire page: {}", e);
            }
        })
    } else {
        wire(&window, &document)
    }
}

#[cfg(target_arch = "wasm32")]
fn wire(window: &Window, document: &Document) -> Result<(), DomError> {
    let raw = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content());
    let config = load_site_config(raw.as_deref());
    bind::bind(window, document, config)
}

#[cfg(target_arch = "wasm32")]
/// Attaches `handler` for the lifetime of the page.
pub(crate) fn listen<F>(target: &EventTarget, kind: &str, handler: F) -> Result<(), DomError>
    where F: FnMut(Event) + 'static
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_loading_state_defers_wiring() {
        assert!(still_loading("loading"));
        assert!(!still_loading("interactive"));
        assert!(!still_loading("complete"));
    }
}
