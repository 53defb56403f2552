pub mod client;
pub mod delete;
pub mod error;
pub mod forms;
pub mod response;
pub mod transfer;

pub use client::*;
pub use delete::*;
pub use error::*;
pub use response::*;
