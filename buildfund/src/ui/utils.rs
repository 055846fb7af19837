use buildfund_core::Project;
use chrono::{DateTime, Local};

/// Format a whole number with comma thousands separators (e.g. -1,250,000)
pub fn fmt_thousands(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(c);
    }

    if amount < 0 {
        formatted.insert(0, '-');
    }
    formatted
}

/// Whole-dollar amount, symbol first: `$125,000`
pub fn fmt_dollars(amount: i64) -> String {
    format!("${}", fmt_thousands(amount))
}

/// Budget header figures: `$125,000 / $250,000 (50%)`
pub fn fmt_budget_figures(spent: i64, total: i64, percent: i64) -> String {
    format!("{} / {} ({}%)", fmt_dollars(spent), fmt_dollars(total), percent)
}

pub fn fmt_created(created_at: &DateTime<Local>) -> String {
    created_at.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Meta line under a project title: `3 files • Created 2026-10-18 09:12:44`
pub fn fmt_project_meta(project: &Project) -> String {
    let count = project.file_count();
    let noun = if count == 1 { "file" } else { "files" };
    format!(
        "{} {} • Created {}",
        count,
        noun,
        fmt_created(&project.created_at)
    )
}
