//! Per-turn announcement state.

use super::category::Category;

/// Whether the current turn has announced a category, and which.
///
/// The announced cell always lives in the Announced column, so the category
/// alone identifies it. A fresh turn starts with nothing announced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AnnouncementState {
    declared: Option<Category>,
}

impl AnnouncementState {
    /// No announcement.
    pub const fn none() -> Self {
        AnnouncementState { declared: None }
    }

    /// An active announcement of `category`.
    pub const fn declared(category: Category) -> Self {
        AnnouncementState { declared: Some(category) }
    }

    /// The announced category, if any.
    pub const fn active(&self) -> Option<Category> {
        self.declared
    }

    pub const fn is_active(&self) -> bool {
        self.declared.is_some()
    }

    /// True if `category` is the announced one.
    pub fn is(&self, category: Category) -> bool {
        self.declared == Some(category)
    }

    /// Records an announcement, replacing any earlier one.
    pub fn declare(&mut self, category: Category) {
        self.declared = Some(category);
    }

    /// Drops the announcement at the end of a turn.
    pub fn clear(&mut self) {
        self.declared = None;
    }
}
