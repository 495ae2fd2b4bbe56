//! Read Counter
//!
//! Counts "Read More" expansions across the home screen. It lives in
//! [`AppState`](crate::egui_app::AppState) and is handed to whoever needs it
//! by `&mut`; nothing persists it.

/// Number of descriptions the user has expanded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadCounter {
    count: u64,
}

impl ReadCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self) {
        self.count = self.count.saturating_add(1);
    }

    pub fn reset(&mut self) {
        self.count = 0;
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// Text of the floating badge
    pub fn label(&self) -> String {
        format!("{} reads", self.count)
    }
}
