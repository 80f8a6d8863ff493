use serde::Deserialize;

/// Element ids, selectors and constants the page script depends on.
///
/// Every field has a default matching the shipped markup, so a page only
/// needs to embed the fields it changes.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub storage_key: String,
    pub theme_toggle_id: String,
    pub mobile_toggle_id: String,
    pub nav_menu_id: String,
    pub nav_link_selector: String,
    pub modal_id: String,
    pub modal_image_id: String,
    pub caption_id: String,
    pub modal_close_selector: String,
    pub clickable_image_selector: String,
    pub certificate_image_class: String,
    pub project_image_class: String,
    pub profile_image_class: String,
    pub certificate_label_selector: String,
    pub project_label_selector: String,
    pub contact_form_id: String,
    pub mobile_breakpoint: f64,
    pub recipient: String,
    pub profile_caption: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            storage_key: "theme".to_string(),
            theme_toggle_id: "night-mode-toggle".to_string(),
            mobile_toggle_id: "mobile-toggle".to_string(),
            nav_menu_id: "nav-menu".to_string(),
            nav_link_selector: ".nav a".to_string(),
            modal_id: "image-modal".to_string(),
            modal_image_id: "modal-img".to_string(),
            caption_id: "caption".to_string(),
            modal_close_selector: ".modal .close".to_string(),
            clickable_image_selector: ".certificate-img, .project-img, .profile-img".to_string(),
            certificate_image_class: "certificate-img".to_string(),
            project_image_class: "project-img".to_string(),
            profile_image_class: "profile-img".to_string(),
            certificate_label_selector: ".certificate-label".to_string(),
            project_label_selector: ".project-label".to_string(),
            contact_form_id: "contact-form".to_string(),
            mobile_breakpoint: 768.0,
            recipient: "eng.omar.rady@gmail.com".to_string(),
            profile_caption: "Omar Rady - Profile Photo".to_string(),
        }
    }
}

impl SiteConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.storage_key.trim().is_empty() {
            return Err("storage_key must not be empty".to_string());
        }
        if self.clickable_image_selector.trim().is_empty() {
            return Err("clickable_image_selector must not be empty".to_string());
        }
        if !(self.mobile_breakpoint > 0.0) {
            return Err(format!("mobile_breakpoint must be positive, got {}", self.mobile_breakpoint));
        }
        if !crate::contact::is_valid_email(&self.recipient) {
            return Err(format!("recipient is not an email address: {}", self.recipient));
        }
        Ok(())
    }
}

/// Builds the config from the page's embedded JSON, if any.
///
/// Malformed or invalid overrides are logged and replaced by the defaults so
/// the page keeps working.
pub fn load_site_config(raw: Option<&str>) -> SiteConfig {
    let raw = match raw.map(str::trim) {
        Some(raw) if !raw.is_empty() => raw,
        _ => {
            log::debug!("No site config embedded, using defaults");
            return SiteConfig::default();
        }
    };

    let config = match serde_json::from_str::<SiteConfig>(raw) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Site config is not valid JSON, using defaults: {}", e);
            return SiteConfig::default();
        }
    };

    match config.validate() {
        Ok(()) => {
            log::info!("Loaded site config (storage key: {})", config.storage_key);
            config
        }
        Err(e) => {
            log::warn!("Site config rejected, using defaults: {}", e);
            SiteConfig::default()
        }
    }
}
