mod common;

use portfolio_ui::modal::ESCAPE_KEY;
use portfolio_ui::{
    ContactError,
    ContactForm,
    ImageKind,
    MemoryStore,
    ModalView,
    PreferenceStore,
    SiteConfig,
    SubmitOutcome,
    ThemePreference,
    UiController,
    SUCCESS_MESSAGE,
};

fn filled_form(email: &str) -> ContactForm {
    ContactForm {
        name: Some("Jane Doe".to_string()),
        email: Some(email.to_string()),
        subject: Some("Hello there".to_string()),
        message: Some("Loved the portfolio.\nLet's talk!".to_string()),
    }
}

#[test]
fn test_persisted_theme_matches_view_after_each_toggle() {
    let mut ui = common::controller();
    for _ in 0..5 {
        let view = ui.toggle_theme();
        let stored = ui.store().load("theme");
        let expected = ThemePreference::from_stored(stored.as_deref());
        assert_eq!(expected, ui.theme());
        assert_eq!(view, expected.view());
    }
}

#[test]
fn test_stored_preference_survives_reload() {
    common::setup();
    let mut first = UiController::new(SiteConfig::default(), MemoryStore::default());
    first.toggle_theme();
    let store = first.store().clone();

    let second = UiController::new(SiteConfig::default(), store);
    assert_eq!(second.theme(), ThemePreference::Light);
}

#[test]
fn test_custom_storage_key() {
    common::setup();
    let config = SiteConfig { storage_key: "portfolio-theme".to_string(), ..SiteConfig::default() };
    let mut ui = UiController::new(config, MemoryStore::with_entry("theme", "light"));
    assert_eq!(ui.theme(), ThemePreference::Dark);

    ui.toggle_theme();
    assert_eq!(ui.store().load("portfolio-theme").as_deref(), Some("light"));
    assert_eq!(ui.store().load("theme").as_deref(), Some("light"));
}

#[test]
fn test_qualifying_images_get_source_and_caption() {
    for kind in [ImageKind::Certificate, ImageKind::Project, ImageKind::Profile] {
        for label in [Some("Label text"), None] {
            let mut ui = common::controller();
            match ui.image_clicked(&common::clicked(kind, label)) {
                ModalView::Shown(content) => {
                    assert_eq!(content.src, "images/photo.jpg");
                    assert!(!content.caption.is_empty());
                }
                ModalView::Hidden => panic!("modal stayed hidden for {:?}", kind),
            }
        }
    }
}

#[test]
fn test_profile_caption_comes_from_config() {
    let mut ui = common::controller();
    let view = ui.image_clicked(&common::clicked(ImageKind::Profile, Some("ignored")));
    assert!(matches!(view, ModalView::Shown(ref c) if c.caption == "Omar Rady - Profile Photo"));
}

#[test]
fn test_modal_closes_on_escape_background_and_close_control() {
    let mut ui = common::controller();
    let image = common::clicked(ImageKind::Project, Some("Weather app"));

    ui.image_clicked(&image);
    assert_eq!(ui.key_pressed(ESCAPE_KEY), Some(ModalView::Hidden));
    assert!(!ui.modal_open());

    ui.image_clicked(&image);
    assert_eq!(ui.overlay_clicked(false), None);
    assert!(ui.modal_open());
    assert_eq!(ui.overlay_clicked(true), Some(ModalView::Hidden));

    ui.image_clicked(&image);
    assert_eq!(ui.close_modal(), ModalView::Hidden);
    assert_eq!(ui.modal_view().display(), "none");
}

#[test]
fn test_escape_without_open_modal_is_ignored() {
    let mut ui = common::controller();
    assert_eq!(ui.key_pressed(ESCAPE_KEY), None);
}

#[test]
fn test_resize_above_breakpoint_closes_menu() {
    let mut ui = common::controller();
    let view = ui.toggle_menu();
    assert_eq!(view.aria_expanded(), "true");

    assert_eq!(ui.viewport_resized(500.0), None);
    assert!(ui.menu_open());

    let view = ui.viewport_resized(1024.0).expect("menu should close");
    assert!(!view.open);
    assert_eq!(view.aria_expanded(), "false");
    assert_eq!(view.body_overflow(), "");
    assert!(!ui.menu_open());
}

#[test]
fn test_nav_link_closes_menu() {
    let mut ui = common::controller();
    ui.toggle_menu();
    assert!(!ui.nav_link_clicked().open);
    assert!(!ui.nav_link_clicked().open);
}

#[test]
fn test_empty_field_never_yields_mailto() {
    let ui = common::controller();
    let blanks: [fn(&mut ContactForm); 4] = [
        |f| f.name = Some(String::new()),
        |f| f.email = None,
        |f| f.subject = Some(String::new()),
        |f| f.message = None,
    ];
    for blank in blanks {
        let mut form = filled_form("a@b.com");
        blank(&mut form);
        assert!(matches!(ui.submit_contact(&form), SubmitOutcome::Rejected(ContactError::MissingFields(_))));
    }
}

#[test]
fn test_invalid_email_never_yields_mailto() {
    let ui = common::controller();
    assert_eq!(
        ui.submit_contact(&filled_form("a@b")),
        SubmitOutcome::Rejected(ContactError::InvalidEmail("a@b".to_string()))
    );
}

#[test]
fn test_valid_submission_builds_encoded_mailto() {
    let ui = common::controller();
    match ui.submit_contact(&filled_form("a@b.com")) {
        SubmitOutcome::Sent { mailto, confirmation } => {
            assert!(mailto.starts_with("mailto:eng.omar.rady@gmail.com?subject=Hello%20there&body="));
            assert!(mailto.contains("Email%3A%20a%40b.com"));
            assert!(mailto.contains("Message%3A%0ALoved%20the%20portfolio.%0ALet%27s%20talk%21"));
            assert_eq!(confirmation, SUCCESS_MESSAGE);
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
}

#[test]
fn test_recipient_comes_from_config() {
    common::setup();
    let config = SiteConfig { recipient: "hello@example.dev".to_string(), ..SiteConfig::default() };
    let ui = UiController::new(config, MemoryStore::default());
    match ui.submit_contact(&filled_form("a@b.com")) {
        SubmitOutcome::Sent { mailto, .. } => assert!(mailto.starts_with("mailto:hello@example.dev?")),
        other => panic!("unexpected outcome: {:?}", other),
    }
}
