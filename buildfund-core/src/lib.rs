pub mod catalog;
mod error;
pub mod models;

pub use crate::catalog::Catalog;
pub use crate::error::CatalogError;
pub use crate::models::{BudgetCategory, FileHandle, Lender, Project};
