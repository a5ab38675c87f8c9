pub mod fixtures;
pub mod mapping;
pub mod normalize;
pub mod revert;

pub use crate::domain::model::{Customer, CustomerPage, MappingEntry};
pub use crate::domain::ports::{ApprovalPrompt, CustomerApi, MappingSink};
pub use crate::utils::error::Result;
