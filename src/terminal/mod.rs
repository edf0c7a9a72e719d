pub mod display;
pub mod session;

pub use display::TerminalDisplay;
pub use session::Session;
