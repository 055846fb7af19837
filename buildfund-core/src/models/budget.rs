use serde::{Deserialize, Serialize};

/// A tracked spend-vs-total line item, in whole dollars.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetCategory {
    pub key: String,
    pub label: String,
    pub spent: i64,
    pub total: i64,
}

impl BudgetCategory {
    pub fn new(key: &str, label: &str, spent: i64, total: i64) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            spent,
            total,
        }
    }

    /// Percentage of the total already spent, rounded half-up and capped at 100.
    ///
    /// There is no lower bound: a negative `spent` gives a negative percentage.
    /// A zero `total` reads as fully spent when anything was spent, otherwise 0.
    pub fn percent_spent(&self) -> i64 {
        if self.total == 0 {
            return if self.spent > 0 { 100 } else { 0 };
        }

        let ratio = self.spent as f64 / self.total as f64;
        let pct = (ratio * 100.0 + 0.5).floor() as i64;
        pct.min(100)
    }
}
