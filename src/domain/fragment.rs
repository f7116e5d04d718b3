// Rendered output of one page: DOM targets and their replacement HTML
use super::page::Page;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Target {
    pub id: String,
    pub html: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fragment {
    pub page: Page,
    /// Sequence number of the fetch this fragment was built from.
    pub seq: u64,
    pub targets: Vec<Target>,
}

impl Fragment {
    pub fn new(page: Page) -> Self {
        Self {
            page,
            seq: 0,
            targets: Vec::new(),
        }
    }

    pub fn with_seq(mut self, seq: u64) -> Self {
        self.seq = seq;
        self
    }

    pub fn push(&mut self, id: impl Into<String>, html: impl Into<String>) {
        self.targets.push(Target {
            id: id.into(),
            html: html.into(),
        });
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.targets
            .iter()
            .find(|t| t.id == id)
            .map(|t| t.html.as_str())
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut String> {
        self.targets
            .iter_mut()
            .find(|t| t.id == id)
            .map(|t| &mut t.html)
    }
}
