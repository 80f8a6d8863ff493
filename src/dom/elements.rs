use wasm_bindgen::JsCast;
use web_sys::{ Document, Element, HtmlElement, HtmlFormElement, HtmlImageElement };

use crate::configs::SiteConfig;

pub struct NavElements {
    pub toggle: HtmlElement,
    pub menu: HtmlElement,
    pub links: Vec<Element>,
}

pub struct ModalElements {
    pub overlay: HtmlElement,
    pub image: HtmlImageElement,
    pub caption: HtmlElement,
    pub close: Element,
    pub clickable: Vec<HtmlImageElement>,
}

/// The page elements each feature needs. A feature whose elements are not all
/// present is `None` and is never wired.
pub struct PageElements {
    pub body: HtmlElement,
    pub theme_toggle: Option<HtmlElement>,
    pub nav: Option<NavElements>,
    pub modal: Option<ModalElements>,
    pub contact_form: Option<HtmlFormElement>,
}

impl PageElements {
    pub fn find(document: &Document, config: &SiteConfig) -> Option<Self> {
        let body = document.body()?;

        let theme_toggle = by_id::<HtmlElement>(document, &config.theme_toggle_id);

        let nav = match (
            by_id::<HtmlElement>(document, &config.mobile_toggle_id),
            by_id::<HtmlElement>(document, &config.nav_menu_id),
        ) {
            (Some(toggle), Some(menu)) => Some(NavElements {
                toggle,
                menu,
                links: all::<Element>(document, &config.nav_link_selector),
            }),
            _ => None,
        };
        log::debug!("Mobile toggle found: {}", nav.is_some());

        let modal = find_modal(document, config);
        log::debug!("Image modal found: {}", modal.is_some());

        let contact_form = by_id::<HtmlFormElement>(document, &config.contact_form_id);

        Some(Self {
            body,
            theme_toggle,
            nav,
            modal,
            contact_form,
        })
    }
}

fn find_modal(document: &Document, config: &SiteConfig) -> Option<ModalElements> {
    Some(ModalElements {
        overlay: by_id::<HtmlElement>(document, &config.modal_id)?,
        image: by_id::<HtmlImageElement>(document, &config.modal_image_id)?,
        caption: by_id::<HtmlElement>(document, &config.caption_id)?,
        close: document.query_selector(&config.modal_close_selector).ok().flatten()?,
        clickable: all::<HtmlImageElement>(document, &config.clickable_image_selector),
    })
}

fn by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    let element = document.get_element_by_id(id)?;
    match element.dyn_into::<T>() {
        Ok(element) => Some(element),
        Err(_) => {
            log::warn!("#{} has an unexpected element type, skipping", id);
            None
        }
    }
}

fn all<T: JsCast>(document: &Document, selector: &str) -> Vec<T> {
    let list = match document.query_selector_all(selector) {
        Ok(list) => list,
        Err(e) => {
            log::warn!("Invalid selector {}: {:?}", selector, e);
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}
