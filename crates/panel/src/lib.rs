pub mod session;
pub mod player;

pub use session::*;
pub use player::*;
