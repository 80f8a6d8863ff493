//! Click-to-enlarge image overlay.
//!
//! The overlay is either hidden or showing exactly one image with a caption.
//! Captions come from the clicked image's kind: certificates and projects use
//! the label element next to them, the profile photo uses a fixed string.

use crate::configs::SiteConfig;

pub const ESCAPE_KEY: &str = "Escape";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageKind {
    Certificate,
    Project,
    Profile,
    Other,
}

impl ImageKind {
    /// Classifies an image by its `class` attribute. The first matching kind
    /// wins when an element carries several.
    pub fn from_class_list(class_list: &str, config: &SiteConfig) -> Self {
        let has = |name: &str| class_list.split_whitespace().any(|c| c == name);
        if has(&config.certificate_image_class) {
            Self::Certificate
        } else if has(&config.project_image_class) {
            Self::Project
        } else if has(&config.profile_image_class) {
            Self::Profile
        } else {
            Self::Other
        }
    }

    /// Selector of the sibling element holding this kind's caption.
    pub fn label_selector<'a>(&self, config: &'a SiteConfig) -> Option<&'a str> {
        match self {
            Self::Certificate => Some(config.certificate_label_selector.as_str()),
            Self::Project => Some(config.project_label_selector.as_str()),
            Self::Profile | Self::Other => None,
        }
    }
}

/// Everything read off a clicked image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClickedImage {
    pub kind: ImageKind,
    pub src: String,
    pub alt: String,
    pub label: Option<String>,
}

impl ClickedImage {
    pub fn caption(&self, profile_caption: &str) -> String {
        let primary = match self.kind {
            ImageKind::Certificate | ImageKind::Project => self.label.as_deref().unwrap_or(&self.alt),
            ImageKind::Profile => profile_caption,
            ImageKind::Other => self.alt.as_str(),
        };

        [primary, self.alt.as_str(), file_name(&self.src)]
            .into_iter()
            .map(str::trim)
            .find(|text| !text.is_empty())
            .unwrap_or_default()
            .to_string()
    }
}

fn file_name(src: &str) -> &str {
    let path = src.split(['?', '#']).next().unwrap_or_default();
    path.rsplit('/').next().unwrap_or_default()
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    shown: Option<ModalContent>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModalContent {
    pub src: String,
    pub alt: String,
    pub caption: String,
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        self.shown.is_some()
    }

    pub fn open(&mut self, image: &ClickedImage, profile_caption: &str) -> ModalView {
        let content = ModalContent {
            src: image.src.clone(),
            alt: image.alt.clone(),
            caption: image.caption(profile_caption),
        };
        log::debug!("Opening image modal: {} ({})", content.src, content.caption);
        self.shown = Some(content);
        self.view()
    }

    pub fn close(&mut self) -> ModalView {
        self.shown = None;
        self.view()
    }

    /// Only a click landing on the overlay itself closes it; clicks on the
    /// enlarged image bubble up with a different target.
    pub fn overlay_clicked(&mut self, target_is_overlay: bool) -> Option<ModalView> {
        target_is_overlay.then(|| self.close())
    }

    pub fn key_pressed(&mut self, key: &str) -> Option<ModalView> {
        (key == ESCAPE_KEY && self.is_open()).then(|| self.close())
    }

    pub fn view(&self) -> ModalView {
        match &self.shown {
            Some(content) => ModalView::Shown(content.clone()),
            None => ModalView::Hidden,
        }
    }
}

/// DOM projection of [`ModalState`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModalView {
    Hidden,
    Shown(ModalContent),
}

impl ModalView {
    pub fn display(&self) -> &'static str {
        match self {
            ModalView::Hidden => "none",
            ModalView::Shown(_) => "block",
        }
    }
}
