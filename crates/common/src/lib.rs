pub mod error;
pub mod config;
pub mod bytesize;

pub use error::*;
pub use config::*;
pub use bytesize::*;
