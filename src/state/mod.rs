pub mod menu;
pub mod modal;

pub use menu::{ MenuState, MenuView };
pub use modal::{ ClickedImage, ImageKind, ModalContent, ModalState, ModalView };
