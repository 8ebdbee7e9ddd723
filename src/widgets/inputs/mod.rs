pub mod button;
pub mod text;
pub mod text_edit;

pub use button::ButtonInput;
pub use text::TextInput;
