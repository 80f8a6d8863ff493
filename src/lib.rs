mod configs;
mod contact;
mod controller;
mod error;
mod state;
mod utils;
mod dom;

pub use crate::configs::{ load_site_config, SiteConfig };
pub use crate::contact::{ is_valid_email, ContactForm, ContactMessage, SUCCESS_MESSAGE };
pub use crate::controller::{ SubmitOutcome, UiController };
pub use crate::error::{ ContactError, DomError };
pub use crate::state::*;
pub use crate::utils::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() -> Result<(), wasm_bindgen::JsValue> {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("Logger already set: {}", e).into());
    }

    dom::run()?;
    Ok(())
}
