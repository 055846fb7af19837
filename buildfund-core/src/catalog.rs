//! Static directory data: lenders and budget categories.
//!
//! The built-in seed is used unless a JSON catalog file replaces it. Either
//! list may be omitted from the file, in which case the seed list is kept.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::CatalogError;
use crate::models::{BudgetCategory, Lender};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default = "seed_lenders")]
    pub lenders: Vec<Lender>,
    #[serde(default = "seed_budget")]
    pub budget: Vec<BudgetCategory>,
}

impl Catalog {
    pub fn seed() -> Self {
        Self {
            lenders: seed_lenders(),
            budget: seed_budget(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seed()
    }
}

fn seed_lenders() -> Vec<Lender> {
    vec![
        Lender::new("l1", "NorthPeak Lending", "8.5%", "$250,000", "3-5 days"),
        Lender::new("l2", "Cedar Ridge Capital", "9.2%", "$400,000", "1-2 weeks"),
        Lender::new("l3", "Granite Finance", "7.9%", "$150,000", "48 hours"),
        Lender::new("l4", "Summit Builders Bank", "8.1%", "$300,000", "4-7 days"),
        Lender::new("l5", "UrbanWorks Credit", "10.0%", "$500,000", "2 weeks"),
        Lender::new("l6", "Horizon Funding", "8.9%", "$350,000", "5 days"),
    ]
}

fn seed_budget() -> Vec<BudgetCategory> {
    vec![
        BudgetCategory::new("labor", "Labor", 125_000, 250_000),
        BudgetCategory::new("materials", "Materials", 90_000, 200_000),
        BudgetCategory::new("permits", "Permits", 12_000, 30_000),
        BudgetCategory::new("misc", "Miscellaneous", 8_000, 20_000),
    ]
}
