//! Modal dialog content.
//!
//! Every button in a modal is a close control; the modal holds a reference
//! into the owned lender list rather than a copy of the record.

use buildfund_core::Lender;

pub const TERMS_NOTE: &str =
    "Terms are illustrative. Future enhancement: configure fractional funding and syndication.";

pub const INVITE_TEXT: &str = "Send invitations to collaborators (GCs, subs, PMs). Coming soon.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalContent {
    LenderTerms { lender_index: usize },
    InviteTeam,
}

impl ModalContent {
    pub fn title(&self) -> &'static str {
        match self {
            Self::LenderTerms { .. } => " Loan Terms ",
            Self::InviteTeam => " Invite Team ",
        }
    }

    pub fn buttons(&self) -> &'static [&'static str] {
        match self {
            Self::LenderTerms { .. } => &["Proceed", "Close"],
            Self::InviteTeam => &["Okay"],
        }
    }

    /// Text lines of the modal body. `None` if the lender is gone.
    pub fn body_lines(&self, lenders: &[Lender]) -> Option<Vec<String>> {
        match self {
            Self::LenderTerms { lender_index } => lenders.get(*lender_index).map(terms_lines),
            Self::InviteTeam => Some(vec![INVITE_TEXT.to_string()]),
        }
    }
}

/// Fixed terms template for a lender
pub fn terms_lines(lender: &Lender) -> Vec<String> {
    vec![
        lender.name.clone(),
        format!("Interest: {}", lender.rate),
        format!("Funding: {}", lender.amount),
        format!("Approval: {}", lender.approval_time),
        TERMS_NOTE.to_string(),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalState {
    pub content: ModalContent,
    pub focused_button: usize,
}

impl ModalState {
    pub fn new(content: ModalContent) -> Self {
        Self {
            content,
            focused_button: 0,
        }
    }

    pub fn focus_next(&mut self) {
        let count = self.content.buttons().len();
        self.focused_button = (self.focused_button + 1) % count;
    }

    pub fn focus_prev(&mut self) {
        let count = self.content.buttons().len();
        self.focused_button = (self.focused_button + count - 1) % count;
    }

    pub fn focused_label(&self) -> &'static str {
        self.content.buttons()[self.focused_button]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use buildfund_core::Catalog;

    #[test]
    fn terms_body_carries_lender_figures() {
        let lenders = Catalog::seed().lenders;
        let body = ModalContent::LenderTerms { lender_index: 2 }
            .body_lines(&lenders)
            .unwrap()
            .join("\n");

        for expected in ["Granite Finance", "7.9%", "$150,000", "48 hours"] {
            assert!(body.contains(expected), "missing {expected} in {body}");
        }
    }

    #[test]
    fn terms_body_for_missing_lender_is_none() {
        assert!(ModalContent::LenderTerms { lender_index: 9 }
            .body_lines(&[])
            .is_none());
    }

    #[test]
    fn button_focus_wraps() {
        let mut modal = ModalState::new(ModalContent::LenderTerms { lender_index: 0 });
        assert_eq!(modal.focused_label(), "Proceed");
        modal.focus_next();
        assert_eq!(modal.focused_label(), "Close");
        modal.focus_next();
        assert_eq!(modal.focused_label(), "Proceed");
        modal.focus_prev();
        assert_eq!(modal.focused_label(), "Close");

        let mut invite = ModalState::new(ModalContent::InviteTeam);
        invite.focus_next();
        assert_eq!(invite.focused_label(), "Okay");
    }
}
