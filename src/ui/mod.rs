pub mod button;
pub mod layout;
pub mod textbox;

pub use button::{Button, ButtonKind};
pub use layout::*;
pub use textbox::TextBox;
