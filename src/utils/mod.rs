mod theme_state;

pub use theme_state::*;
