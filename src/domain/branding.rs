// Author credit and the reconcile guard that keeps it intact
use super::fragment::Fragment;

pub const AUTHOR_NAME_ID: &str = "author-name";
pub const AUTHOR_BADGE_ID: &str = "author-badge";
pub const DONATION_TITLE_ID: &str = "donation-title";

/// Static author credit rendered into the page shell.
#[derive(Debug, Clone, PartialEq)]
pub struct Credit {
    pub author: String,
    pub donation_title: String,
}

impl Credit {
    pub fn new(author: impl Into<String>, donation_title: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            donation_title: donation_title.into(),
        }
    }

    pub fn badge(&self) -> String {
        format!("by {}", self.author)
    }

    pub fn donation_html(&self) -> String {
        format!(r#"<i class="fas fa-coffee"></i> {}"#, self.donation_title)
    }
}

impl Default for Credit {
    fn default() -> Self {
        Self::new("M. Nafiurohman", "Belikan Developer Kopi")
    }
}

#[derive(Debug, Clone)]
struct Slot {
    id: &'static str,
    expected: String,
    restore: String,
}

/// Watches a fixed set of text slots and puts them back to a known literal
/// whenever they stop containing their expected substring.
#[derive(Debug, Clone)]
pub struct ReconcileGuard {
    slots: Vec<Slot>,
}

impl ReconcileGuard {
    pub fn for_credit(credit: &Credit) -> Self {
        Self {
            slots: vec![
                Slot {
                    id: AUTHOR_NAME_ID,
                    expected: credit.author.clone(),
                    restore: credit.author.clone(),
                },
                Slot {
                    id: AUTHOR_BADGE_ID,
                    expected: credit.author.clone(),
                    restore: credit.badge(),
                },
                Slot {
                    id: DONATION_TITLE_ID,
                    expected: credit.donation_title.clone(),
                    restore: credit.donation_html(),
                },
            ],
        }
    }

    /// Check one slot. Returns true when the text was restored.
    pub fn reconcile(&self, id: &str, text: &mut String) -> bool {
        match self.slots.iter().find(|s| s.id == id) {
            Some(slot) if !text.contains(&slot.expected) => {
                *text = slot.restore.clone();
                true
            }
            _ => false,
        }
    }

    /// Reconcile every guarded target present in the fragment. Returns the
    /// ids that were restored.
    pub fn reconcile_fragment(&self, fragment: &mut Fragment) -> Vec<&'static str> {
        let mut restored = Vec::new();
        for slot in &self.slots {
            if let Some(text) = fragment.get_mut(slot.id) {
                if self.reconcile(slot.id, text) {
                    restored.push(slot.id);
                }
            }
        }
        restored
    }
}

/// Log lines mentioning the author are dropped by the log filter.
pub fn is_suppressed_log(message: &str) -> bool {
    message.contains("author")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::page::Page;

    #[test]
    fn test_restores_altered_author_name() {
        let guard = ReconcileGuard::for_credit(&Credit::default());
        let mut text = "Someone Else".to_string();

        assert!(guard.reconcile(AUTHOR_NAME_ID, &mut text));
        assert_eq!(text, "M. Nafiurohman");
    }

    #[test]
    fn test_leaves_intact_slots_alone() {
        let guard = ReconcileGuard::for_credit(&Credit::default());
        let mut badge = "made by M. Nafiurohman with love".to_string();

        assert!(!guard.reconcile(AUTHOR_BADGE_ID, &mut badge));
        assert_eq!(badge, "made by M. Nafiurohman with love");

        let mut unrelated = "whatever".to_string();
        assert!(!guard.reconcile("cpu-card", &mut unrelated));
    }

    #[test]
    fn test_reconcile_fragment() {
        let guard = ReconcileGuard::for_credit(&Credit::default());
        let mut fragment = Fragment::new(Page::Overview);
        fragment.push(AUTHOR_BADGE_ID, "by nobody");
        fragment.push(DONATION_TITLE_ID, "Buy me tea");
        fragment.push(AUTHOR_NAME_ID, "M. Nafiurohman");

        let restored = guard.reconcile_fragment(&mut fragment);

        assert_eq!(restored, vec![AUTHOR_BADGE_ID, DONATION_TITLE_ID]);
        assert_eq!(fragment.get(AUTHOR_BADGE_ID), Some("by M. Nafiurohman"));
        assert_eq!(
            fragment.get(DONATION_TITLE_ID),
            Some(r#"<i class="fas fa-coffee"></i> Belikan Developer Kopi"#)
        );
    }

    #[test]
    fn test_suppressed_log() {
        assert!(is_suppressed_log("changing author text"));
        assert!(!is_suppressed_log("Author"));
        assert!(!is_suppressed_log("poll ok"));
    }
}
