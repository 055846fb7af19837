pub mod budget_screen;
pub mod dashboard_screen;
pub mod draw_request_screen;
pub mod lenders_screen;
pub mod upload_screen;

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The closed set of screens. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenId {
    Dashboard,
    UploadProject,
    LoanMatching,
    DrawRequest,
    BudgetTracker,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown screen id '{0}'")]
pub struct UnknownScreen(pub String);

impl ScreenId {
    /// Navigation order
    pub const ALL: [ScreenId; 5] = [
        ScreenId::Dashboard,
        ScreenId::UploadProject,
        ScreenId::LoanMatching,
        ScreenId::DrawRequest,
        ScreenId::BudgetTracker,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::UploadProject => "upload-project",
            Self::LoanMatching => "loan-matching",
            Self::DrawRequest => "draw-request",
            Self::BudgetTracker => "budget-tracker",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::UploadProject => "Upload Project",
            Self::LoanMatching => "Loan Matching",
            Self::DrawRequest => "Draw Request",
            Self::BudgetTracker => "Budget Tracker",
        }
    }

    pub fn position(&self) -> usize {
        Self::ALL
            .iter()
            .position(|screen| screen == self)
            .unwrap_or_default()
    }

    /// Screen at a zero-based navigation position
    pub fn from_position(position: usize) -> Option<Self> {
        Self::ALL.get(position).copied()
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ScreenId {
    type Err = UnknownScreen;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|screen| screen.id() == s)
            .ok_or_else(|| UnknownScreen(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_markup_ids() {
        for screen in ScreenId::ALL {
            assert_eq!(screen.id().parse::<ScreenId>(), Ok(screen));
        }
    }

    #[test]
    fn rejects_unknown_ids() {
        assert_eq!(
            "Dashboard".parse::<ScreenId>(),
            Err(UnknownScreen("Dashboard".to_string()))
        );
        assert!("".parse::<ScreenId>().is_err());
    }

    #[test]
    fn cycling_wraps_around() {
        assert_eq!(ScreenId::BudgetTracker.next(), ScreenId::Dashboard);
        assert_eq!(ScreenId::Dashboard.prev(), ScreenId::BudgetTracker);
        assert_eq!(ScreenId::from_position(2), Some(ScreenId::LoanMatching));
        assert_eq!(ScreenId::from_position(5), None);
    }
}
