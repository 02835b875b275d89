//! Step-by-step guides and progress through them.

use std::collections::BTreeSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GuideStep {
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Guide {
    pub slug: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub steps: &'static [GuideStep],
}

pub fn find_guide(slug: &str) -> Option<&'static Guide> {
    GUIDES.iter().find(|g| g.slug == slug)
}

/// Position in a guide and which steps the user has marked done.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GuideProgress {
    total: usize,
    current: usize,
    completed: BTreeSet<usize>,
}

impl GuideProgress {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            ..Self::default()
        }
    }

    pub fn for_guide(guide: &Guide) -> Self {
        Self::new(guide.steps.len())
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Zero-based index of the step being shown.
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 >= self.total
    }

    pub fn is_completed(&self, step: usize) -> bool {
        self.completed.contains(&step)
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    pub fn next(&mut self) {
        if !self.is_last() {
            self.current += 1;
        }
    }

    pub fn previous(&mut self) {
        self.current = self.current.saturating_sub(1);
    }

    /// Jump to `step`; out-of-range indices are ignored.
    pub fn go_to(&mut self, step: usize) {
        if step < self.total {
            self.current = step;
        }
    }

    /// Mark the current step done and move on. Stays put on the last step.
    pub fn complete_current(&mut self) {
        if self.total == 0 {
            return;
        }
        self.completed.insert(self.current);
        self.next();
    }

    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.completed.len() == self.total
    }

    /// Completed share, rounded down.
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        (self.completed.len() * 100 / self.total) as u8
    }

    pub fn restart(&mut self) {
        self.current = 0;
        self.completed.clear();
    }
}

pub static GUIDES: &[Guide] = &[
    Guide {
        slug: "getting-started",
        title: "Getting started",
        summary: "Open and verify your CipherLuma account.",
        steps: &[
            GuideStep {
                title: "Create your account",
                body: "Choose Sign Up and fill in your name, country, phone number and date of birth.",
            },
            GuideStep {
                title: "Choose a strong password",
                body: "The strength meter must show at least Medium before you can continue.",
            },
            GuideStep {
                title: "Accept the terms",
                body: "Read and accept the Terms of Service and the Privacy Policy.",
            },
            GuideStep {
                title: "Verify your identity",
                body: "Upload a photo ID when prompted. Most checks finish within minutes.",
            },
        ],
    },
    Guide {
        slug: "first-transfer",
        title: "Your first transfer",
        summary: "Send money abroad in a few steps.",
        steps: &[
            GuideStep {
                title: "Add a recipient",
                body: "Enter the recipient's name and bank details.",
            },
            GuideStep {
                title: "Enter the amount",
                body: "Pick the currencies and review the exchange rate and fee.",
            },
            GuideStep {
                title: "Confirm and track",
                body: "Confirm the transfer and follow its status from the activity page.",
            },
        ],
    },
    Guide {
        slug: "api-quickstart",
        title: "API quickstart",
        summary: "Make your first sandbox API call.",
        steps: &[
            GuideStep {
                title: "Create a sandbox key",
                body: "Generate a key in the developer portal. Sandbox keys never move real money.",
            },
            GuideStep {
                title: "Call the balance endpoint",
                body: "Send an authenticated GET request to /v1/balances with your key.",
            },
            GuideStep {
                title: "Register a webhook",
                body: "Add an HTTPS endpoint to receive signed transfer events.",
            },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_walks_to_the_end() {
        let mut progress = GuideProgress::new(3);
        progress.complete_current();
        progress.complete_current();
        assert_eq!(progress.current(), 2);
        assert!(!progress.is_complete());
        assert_eq!(progress.percent(), 66);

        progress.complete_current();
        assert_eq!(progress.current(), 2);
        assert!(progress.is_complete());
        assert_eq!(progress.percent(), 100);
    }

    #[test]
    fn test_navigation_is_clamped() {
        let mut progress = GuideProgress::new(2);
        progress.previous();
        assert_eq!(progress.current(), 0);
        assert!(progress.is_first());
        progress.next();
        progress.next();
        assert_eq!(progress.current(), 1);
        assert!(progress.is_last());
        progress.go_to(5);
        assert_eq!(progress.current(), 1);
        progress.go_to(0);
        assert_eq!(progress.current(), 0);
    }

    #[test]
    fn test_completing_a_step_twice_counts_once() {
        let mut progress = GuideProgress::new(2);
        progress.go_to(1);
        progress.complete_current();
        progress.complete_current();
        assert_eq!(progress.completed_count(), 1);
        assert!(progress.is_completed(1));
        assert!(!progress.is_completed(0));
    }

    #[test]
    fn test_empty_guide() {
        let mut progress = GuideProgress::new(0);
        progress.complete_current();
        assert_eq!(progress.percent(), 0);
        assert!(!progress.is_complete());
    }

    #[test]
    fn test_restart_clears_progress() {
        let mut progress = GuideProgress::new(2);
        progress.complete_current();
        progress.restart();
        assert_eq!(progress, GuideProgress::new(2));
    }

    #[test]
    fn test_find_guide() {
        let guide = find_guide("first-transfer").unwrap();
        assert_eq!(GuideProgress::for_guide(guide).total(), 3);
        assert!(find_guide("missing").is_none());
    }
}
