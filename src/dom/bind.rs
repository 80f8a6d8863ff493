use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{ Document, Event, FormData, HtmlElement, HtmlFormElement, HtmlImageElement, KeyboardEvent, Node, Window };

use super::elements::PageElements;
use super::listen;
use super::storage::BrowserStore;
use crate::configs::SiteConfig;
use crate::contact::ContactForm;
use crate::controller::{ SubmitOutcome, UiController };
use crate::error::DomError;
use crate::state::menu::{ MENU_OPEN_CLASS, TOGGLE_ACTIVE_CLASS };
use crate::state::{ ClickedImage, ImageKind, MenuView, ModalView };
use crate::utils::{ ThemeView, LIGHT_CLASS };

type SharedController = Rc<RefCell<UiController<BrowserStore>>>;

/// Builds the controller and attaches every listener the page supports.
pub fn bind(window: &Window, document: &Document, config: SiteConfig) -> Result<(), DomError> {
    let elements = match PageElements::find(document, &config) {
        Some(elements) => Rc::new(elements),
        None => {
            log::warn!("Document has no body, nothing to wire");
            return Ok(());
        }
    };
    let controller: SharedController = Rc::new(RefCell::new(UiController::new(config, BrowserStore::open(window))));

    bind_theme(&controller, &elements)?;
    bind_menu(window, document, &controller, &elements)?;
    bind_modal(document, &controller, &elements)?;
    bind_contact(window, &controller, &elements)?;

    log::info!("Page behaviour wired");
    Ok(())
}

fn bind_theme(controller: &SharedController, elements: &Rc<PageElements>) -> Result<(), DomError> {
    let toggle = match elements.theme_toggle.clone() {
        Some(toggle) => toggle,
        None => {
            log::debug!("No theme toggle on this page");
            return Ok(());
        }
    };
    apply_theme(&elements.body, &toggle, controller.borrow().theme_view());

    let controller = controller.clone();
    let elements = elements.clone();
    let target = toggle.clone();
    listen(&target, "click", move |_| {
        let view = controller.borrow_mut().toggle_theme();
        apply_theme(&elements.body, &toggle, view);
    })
}

fn bind_menu(
    window: &Window,
    document: &Document,
    controller: &SharedController,
    elements: &Rc<PageElements>
) -> Result<(), DomError> {
    // Attached even without a mobile menu; the handler then does nothing.
    {
        let controller = controller.clone();
        let elements = elements.clone();
        listen(document, "click", move |event: Event| {
            let nav = match elements.nav.as_ref() {
                Some(nav) => nav,
                None => return,
            };
            let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
            let inside_toggle = nav.toggle.contains(target.as_ref());
            let inside_menu = nav.menu.contains(target.as_ref());
            let view = controller.borrow_mut().document_clicked(inside_toggle, inside_menu);
            if let Some(view) = view {
                apply_menu(&elements, view);
            }
        })?;
    }

    let nav = match elements.nav.as_ref() {
        Some(nav) => nav,
        None => {
            log::debug!("No mobile navigation on this page");
            return Ok(());
        }
    };

    {
        let controller = controller.clone();
        let elements = elements.clone();
        listen(&nav.toggle, "click", move |_| {
            let view = controller.borrow_mut().toggle_menu();
            apply_menu(&elements, view);
        })?;
    }

    for link in &nav.links {
        let controller = controller.clone();
        let elements = elements.clone();
        listen(link, "click", move |_| {
            let view = controller.borrow_mut().nav_link_clicked();
            apply_menu(&elements, view);
        })?;
    }

    let controller = controller.clone();
    let elements = elements.clone();
    let viewport = window.clone();
    listen(window, "resize", move |_| {
        let width = match viewport.inner_width().ok().and_then(|w| w.as_f64()) {
            Some(width) => width,
            None => return,
        };
        let view = controller.borrow_mut().viewport_resized(width);
        if let Some(view) = view {
            apply_menu(&elements, view);
        }
    })
}

fn bind_modal(document: &Document, controller: &SharedController, elements: &Rc<PageElements>) -> Result<(), DomError> {
    // Attached even without a modal; the controller never opens one then.
    {
        let controller = controller.clone();
        let elements = elements.clone();
        listen(document, "keydown", move |event: Event| {
            let key = match event.dyn_ref::<KeyboardEvent>() {
                Some(event) => event.key(),
                None => return,
            };
            let view = controller.borrow_mut().key_pressed(&key);
            if let Some(view) = view {
                apply_modal(&elements, &view);
            }
        })?;
    }

    let modal = match elements.modal.as_ref() {
        Some(modal) => modal,
        None => {
            log::debug!("No image modal on this page");
            return Ok(());
        }
    };

    for image in &modal.clickable {
        if let Err(e) = image.style().set_property("cursor", "pointer") {
            log::warn!("Failed to set pointer cursor: {:?}", e);
        }
        let controller = controller.clone();
        let elements = elements.clone();
        let clicked = image.clone();
        listen(image, "click", move |_| {
            let details = read_clicked_image(&clicked, controller.borrow().config());
            let view = controller.borrow_mut().image_clicked(&details);
            apply_modal(&elements, &view);
        })?;
    }

    {
        let controller = controller.clone();
        let elements = elements.clone();
        listen(&modal.close, "click", move |_| {
            let view = controller.borrow_mut().close_modal();
            apply_modal(&elements, &view);
        })?;
    }

    let controller = controller.clone();
    let elements = elements.clone();
    listen(&modal.overlay, "click", move |event: Event| {
        let target_is_overlay = match (event.target(), elements.modal.as_ref()) {
            (Some(target), Some(modal)) => js_sys::Object::is(&target, &modal.overlay),
            _ => false,
        };
        let view = controller.borrow_mut().overlay_clicked(target_is_overlay);
        if let Some(view) = view {
            apply_modal(&elements, &view);
        }
    })
}

fn bind_contact(window: &Window, controller: &SharedController, elements: &Rc<PageElements>) -> Result<(), DomError> {
    let form = match elements.contact_form.clone() {
        Some(form) => form,
        None => {
            log::debug!("No contact form on this page");
            return Ok(());
        }
    };

    let controller = controller.clone();
    let window = window.clone();
    let target = form.clone();
    listen(&target, "submit", move |event: Event| {
        event.prevent_default();
        if let Err(e) = submit_contact(&window, &form, &controller) {
            log::error!("Contact form submission failed: {}", e);
        }
    })
}

fn submit_contact(window: &Window, form: &HtmlFormElement, controller: &SharedController) -> Result<(), DomError> {
    let data = FormData::new_with_form(form)?;
    let field = |name: &str| data.get(name).as_string();
    let contact = ContactForm {
        name: field("name"),
        email: field("email"),
        subject: field("subject"),
        message: field("message"),
    };

    let outcome = controller.borrow().submit_contact(&contact);
    match outcome {
        SubmitOutcome::Rejected(e) => window.alert_with_message(&e.to_string())?,
        SubmitOutcome::Sent { mailto, confirmation } => {
            window.location().set_href(&mailto)?;
            window.alert_with_message(confirmation)?;
            form.reset();
        }
    }
    Ok(())
}

fn read_clicked_image(image: &HtmlImageElement, config: &SiteConfig) -> ClickedImage {
    let kind = ImageKind::from_class_list(&image.class_name(), config);
    let label = kind.label_selector(config).and_then(|selector| {
        let label = image.parent_element()?.query_selector(selector).ok().flatten()?;
        label.dyn_into::<HtmlElement>().ok().map(|label| label.inner_text())
    });
    ClickedImage {
        kind,
        src: image.src(),
        alt: image.alt(),
        label,
    }
}

fn apply_theme(body: &HtmlElement, toggle: &HtmlElement, view: ThemeView) {
    if let Err(e) = body.class_list().toggle_with_force(LIGHT_CLASS, view.light_class) {
        log::error!("Failed to update theme class: {:?}", e);
    }
    toggle.set_text_content(Some(view.icon));
}

fn apply_menu(elements: &PageElements, view: MenuView) {
    let nav = match elements.nav.as_ref() {
        Some(nav) => nav,
        None => return,
    };
    let result = nav.toggle
        .class_list()
        .toggle_with_force(TOGGLE_ACTIVE_CLASS, view.open)
        .and_then(|_| nav.menu.class_list().toggle_with_force(MENU_OPEN_CLASS, view.open))
        .and_then(|_| nav.toggle.set_attribute("aria-expanded", view.aria_expanded()))
        .and_then(|_| elements.body.style().set_property("overflow", view.body_overflow()));
    if let Err(e) = result {
        log::error!("Failed to update mobile menu: {:?}", e);
    }
}

fn apply_modal(elements: &PageElements, view: &ModalView) {
    let modal = match elements.modal.as_ref() {
        Some(modal) => modal,
        None => return,
    };
    if let ModalView::Shown(content) = view {
        modal.image.set_src(&content.src);
        modal.image.set_alt(&content.alt);
        modal.caption.set_inner_text(&content.caption);
    }
    if let Err(e) = modal.overlay.style().set_property("display", view.display()) {
        log::error!("Failed to update image modal: {:?}", e);
    }
}
