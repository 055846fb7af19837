mod budget;
mod lenders;
mod projects;

pub use budget::BudgetCategory;
pub use lenders::Lender;
pub use projects::{derive_title, FileHandle, Project, DEFAULT_PROJECT_TITLE};
