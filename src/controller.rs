use crate::configs::SiteConfig;
use crate::contact::{ ContactForm, SUCCESS_MESSAGE };
use crate::error::ContactError;
use crate::state::{ ClickedImage, MenuState, MenuView, ModalState, ModalView };
use crate::utils::{ PreferenceStore, ThemePreference, ThemeView };

/// Result of a contact form submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Rejected(ContactError),
    Sent {
        mailto: String,
        confirmation: &'static str,
    },
}

/// Owns every piece of interactive page state.
///
/// Each handler takes the facts of one browser event and returns the view the
/// page should now show. The DOM layer never decides anything itself.
pub struct UiController<S: PreferenceStore> {
    config: SiteConfig,
    store: S,
    theme: ThemePreference,
    menu: MenuState,
    modal: ModalState,
}

impl<S: PreferenceStore> UiController<S> {
    pub fn new(config: SiteConfig, store: S) -> Self {
        let theme = ThemePreference::from_stored(store.load(&config.storage_key).as_deref());
        log::debug!("Initial theme: {}", theme);
        Self {
            config,
            store,
            theme,
            menu: MenuState::default(),
            modal: ModalState::default(),
        }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn theme(&self) -> ThemePreference {
        self.theme
    }

    pub fn theme_view(&self) -> ThemeView {
        self.theme.view()
    }

    pub fn toggle_theme(&mut self) -> ThemeView {
        self.theme = self.theme.flipped();
        self.store.save(&self.config.storage_key, self.theme.as_str());
        log::debug!("Theme switched to {}", self.theme);
        self.theme.view()
    }

    pub fn menu_open(&self) -> bool {
        self.menu.is_open()
    }

    pub fn toggle_menu(&mut self) -> MenuView {
        self.menu.toggle()
    }

    pub fn nav_link_clicked(&mut self) -> MenuView {
        self.menu.close()
    }

    /// Any click outside both the menu toggle and the menu closes the menu.
    pub fn document_clicked(&mut self, inside_toggle: bool, inside_menu: bool) -> Option<MenuView> {
        (!inside_toggle && !inside_menu).then(|| self.menu.close())
    }

    pub fn viewport_resized(&mut self, width: f64) -> Option<MenuView> {
        (width > self.config.mobile_breakpoint).then(|| self.menu.close())
    }

    pub fn modal_open(&self) -> bool {
        self.modal.is_open()
    }

    pub fn modal_view(&self) -> ModalView {
        self.modal.view()
    }

    pub fn image_clicked(&mut self, image: &ClickedImage) -> ModalView {
        self.modal.open(image, &self.config.profile_caption)
    }

    pub fn close_modal(&mut self) -> ModalView {
        self.modal.close()
    }

    pub fn overlay_clicked(&mut self, target_is_overlay: bool) -> Option<ModalView> {
        self.modal.overlay_clicked(target_is_overlay)
    }

    pub fn key_pressed(&mut self, key: &str) -> Option<ModalView> {
        self.modal.key_pressed(key)
    }

    pub fn submit_contact(&self, form: &ContactForm) -> SubmitOutcome {
        match form.validate() {
            Ok(message) => {
                log::info!("Contact form accepted, handing off to mail client");
                SubmitOutcome::Sent {
                    mailto: message.mailto_link(&self.config.recipient),
                    confirmation: SUCCESS_MESSAGE,
                }
            }
            Err(e) => {
                log::debug!("Contact form rejected: {:?}", e);
                SubmitOutcome::Rejected(e)
            }
        }
    }
}
