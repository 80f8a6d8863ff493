use portfolio_ui::{ ClickedImage, ImageKind, MemoryStore, SiteConfig, UiController };

#[allow(dead_code)]
pub fn setup() {
    let _ = env_logger::builder().is_test(true).filter_level(log::LevelFilter::Debug).try_init();
}

#[allow(dead_code)]
pub fn controller() -> UiController<MemoryStore> {
    setup();
    UiController::new(SiteConfig::default(), MemoryStore::default())
}

#[allow(dead_code)]
pub fn clicked(kind: ImageKind, label: Option<&str>) -> ClickedImage {
    ClickedImage {
        kind,
        src: "images/photo.jpg".to_string(),
        alt: "A photo".to_string(),
        label: label.map(str::to_string),
    }
}
