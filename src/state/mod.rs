pub mod input;
pub mod session;

pub use input::Key;
pub use session::{HudSnapshot, Session};
