pub mod block;
pub mod common;
pub mod page;

pub use block::*;
pub use common::*;
pub use page::*;
