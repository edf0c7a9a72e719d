pub mod controller;
pub mod display;
pub mod selector;
pub mod text;

pub use controller::FormController;
pub use display::{DisplaySink, ResultField, SubmitLabel};
pub use selector::TeamSelector;
pub use text::FormText;
