//! # Help centre FAQ
//!
//! A fixed list of [`FaqEntry`] items and [`filter_faqs`], which narrows it by
//! category and by a free-text query matched case-insensitively against both
//! question and answer.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FaqCategory {
    Account,
    Transfers,
    Security,
    Developers,
}

impl FaqCategory {
    pub const ALL: [FaqCategory; 4] = [
        FaqCategory::Account,
        FaqCategory::Transfers,
        FaqCategory::Security,
        FaqCategory::Developers,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FaqCategory::Account => "Account",
            FaqCategory::Transfers => "Transfers",
            FaqCategory::Security => "Security",
            FaqCategory::Developers => "Developers",
        }
    }

    /// Inverse of [`label`](Self::label), used for `<select>` values.
    pub fn from_label(label: &str) -> Option<Self> {
        FaqCategory::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl fmt::Display for FaqCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaqEntry {
    pub id: &'static str,
    pub category: FaqCategory,
    pub question: &'static str,
    pub answer: &'static str,
}

impl FaqEntry {
    fn matches(&self, needle: &str) -> bool {
        self.question.to_lowercase().contains(needle) || self.answer.to_lowercase().contains(needle)
    }
}

/// Entries matching `query` (blank matches everything) within `category`
/// (`None` for all categories), in the order given.
pub fn filter_faqs<'a>(
    entries: &'a [FaqEntry],
    query: &str,
    category: Option<FaqCategory>,
) -> Vec<&'a FaqEntry> {
    let needle = query.trim().to_lowercase();
    entries
        .iter()
        .filter(|e| category.is_none_or(|c| e.category == c))
        .filter(|e| needle.is_empty() || e.matches(&needle))
        .collect()
}

pub static FAQS: &[FaqEntry] = &[
    FaqEntry {
        id: "open-account",
        category: FaqCategory::Account,
        question: "How do I open an account?",
        answer: "Choose Sign Up, enter your details and accept the Terms of Service and Privacy Policy. Verification usually takes a few minutes.",
    },
    FaqEntry {
        id: "supported-countries",
        category: FaqCategory::Account,
        question: "Which countries are supported?",
        answer: "Residents of the countries listed in the registration form can open an account. Each country has a default account currency.",
    },
    FaqEntry {
        id: "close-account",
        category: FaqCategory::Account,
        question: "How do I close my account?",
        answer: "Withdraw any remaining balance, then choose Close Account in settings.",
    },
    FaqEntry {
        id: "transfer-time",
        category: FaqCategory::Transfers,
        question: "How long does an international transfer take?",
        answer: "Most transfers arrive within one business day. Some currency routes can take up to three business days.",
    },
    FaqEntry {
        id: "transfer-fees",
        category: FaqCategory::Transfers,
        question: "What fees do you charge?",
        answer: "The fee and exchange rate are shown before you confirm. There are no hidden charges.",
    },
    FaqEntry {
        id: "transfer-limits",
        category: FaqCategory::Transfers,
        question: "Are there transfer limits?",
        answer: "Limits depend on your verification level and are listed on the account limits page.",
    },
    FaqEntry {
        id: "strong-password",
        category: FaqCategory::Security,
        question: "What makes a strong password?",
        answer: "Use at least 12 characters mixing upper and lower case letters, numbers and symbols. The strength meter shows Weak, Medium or Strong as you type.",
    },
    FaqEntry {
        id: "two-factor",
        category: FaqCategory::Security,
        question: "Do you support two-factor authentication?",
        answer: "Yes. Enable an authenticator app in security settings to protect sign-ins and payments.",
    },
    FaqEntry {
        id: "api-keys",
        category: FaqCategory::Developers,
        question: "How do I get API keys?",
        answer: "Create a sandbox key in the developer portal. Production keys are issued after your integration is reviewed.",
    },
    FaqEntry {
        id: "webhooks",
        category: FaqCategory::Developers,
        question: "How do webhooks work?",
        answer: "Register an HTTPS endpoint and we will POST signed events for transfers and account changes.",
    },
];
