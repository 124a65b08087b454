use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct FaqFile {
    pub(crate) items: Vec<FaqItem>,
}

/// Single-open accordion. The first question starts expanded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaqAccordion {
    pub open: Option<usize>,
}

impl Default for FaqAccordion {
    fn default() -> Self {
        Self { open: Some(0) }
    }
}

impl FaqAccordion {
    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Opens `index`, or collapses it if it is already the open one.
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.is_open(index) { None } else { Some(index) };
    }
}
