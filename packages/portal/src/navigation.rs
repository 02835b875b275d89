//! Which screen the auth container shows.
//!
//! The credential form sits at the root of a small stack; legal documents are
//! pushed on top of it and popped with "back".

use crate::legal::LegalDocument;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Screen {
    #[default]
    Form,
    Terms,
    Agreement,
    Privacy,
}

impl Screen {
    pub fn legal_document(self) -> Option<LegalDocument> {
        match self {
            Screen::Form => None,
            Screen::Terms => Some(LegalDocument::Terms),
            Screen::Agreement => Some(LegalDocument::UserAgreement),
            Screen::Privacy => Some(LegalDocument::Privacy),
        }
    }
}

impl From<LegalDocument> for Screen {
    fn from(document: LegalDocument) -> Self {
        match document {
            LegalDocument::Terms => Screen::Terms,
            LegalDocument::UserAgreement => Screen::Agreement,
            LegalDocument::Privacy => Screen::Privacy,
        }
    }
}

/// Screen stack rooted at [`Screen::Form`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigator {
    stack: Vec<Screen>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            stack: vec![Screen::Form],
        }
    }

    pub fn current(&self) -> Screen {
        self.stack.last().copied().unwrap_or_default()
    }

    /// Show `screen`. Opening the screen that is already shown does nothing.
    pub fn open(&mut self, screen: Screen) {
        if self.current() == screen {
            return;
        }
        if screen == Screen::Form {
            self.stack.truncate(1);
            return;
        }
        tracing::debug!(?screen, "navigating");
        self.stack.push(screen);
    }

    /// Go back one screen. Returns `false` at the root, where backing out
    /// means leaving the form altogether.
    pub fn back(&mut self) -> bool {
        if self.stack.len() <= 1 {
            return false;
        }
        self.stack.pop();
        true
    }
}
