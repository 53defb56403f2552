pub mod row;
pub mod selection;
pub mod toolbar;
pub mod sort;
pub mod nav;

pub use row::*;
pub use selection::*;
pub use toolbar::*;
pub use sort::*;
pub use nav::*;
