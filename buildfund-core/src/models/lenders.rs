use serde::{Deserialize, Serialize};

/// A lender directory entry. All figures are display strings, never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lender {
    pub id: String,
    pub name: String,
    pub rate: String,
    pub amount: String,
    #[serde(alias = "time")]
    pub approval_time: String,
}

impl Lender {
    pub fn new(id: &str, name: &str, rate: &str, amount: &str, approval_time: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            rate: rate.to_string(),
            amount: amount.to_string(),
            approval_time: approval_time.to_string(),
        }
    }
}
