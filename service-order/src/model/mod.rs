//! Data model types

mod contract;
mod document;
mod order;
mod page;

pub use contract::*;
pub use document::*;
pub use order::*;
pub use page::*;
