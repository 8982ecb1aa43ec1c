//! Picker state: selection, favorites and the modal prompt flow.
//!
//! All transitions are synchronous and happen on the UI loop. Unknown ids
//! are ignored rather than treated as errors.
//!
//! ```text
//! Idle ──tap (not favorite)──▶ Added ──▶ Notice ──dismiss──▶ Idle
//! Idle ──tap (favorite)──────▶ ConfirmRemove ──confirm──▶ Notice ──▶ Idle
//!                                            └─cancel───▶ Idle
//! ```

use std::collections::HashSet;

use crate::catalog::{Catalog, EmojiEntry, EntryId};

/// Button highlighted in a confirmation prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptChoice {
    Cancel,
    Confirm,
}

impl PromptChoice {
    pub fn other(self) -> Self {
        match self {
            PromptChoice::Cancel => PromptChoice::Confirm,
            PromptChoice::Confirm => PromptChoice::Cancel,
        }
    }
}

/// Title + body text of a dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub title: String,
    pub message: String,
}

impl Prompt {
    fn remove_favorite(entry: &EmojiEntry) -> Self {
        Self {
            title: "Remove Favorite?".to_string(),
            message: format!("Do you want to remove {} from your favorites?", entry.glyph),
        }
    }

    fn removed(entry: &EmojiEntry) -> Self {
        Self {
            title: "Removed".to_string(),
            message: format!("{} removed from favorites.", entry.glyph),
        }
    }

    fn added(entry: &EmojiEntry) -> Self {
        Self {
            title: "Success".to_string(),
            message: format!("{} has been added to your favorites!", entry.glyph),
        }
    }
}

/// Dialog currently covering the picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    None,
    /// Waiting for the user to confirm removal of a favorite
    ConfirmRemove {
        id: EntryId,
        prompt: Prompt,
        choice: PromptChoice,
    },
    /// Acknowledgment after a favorite was added or removed
    Notice(Prompt),
}

/// Result of a favorite toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteOutcome {
    Added,
    ConfirmPending,
    Ignored,
}

/// Owns the catalog and everything the user can change about it
#[derive(Debug)]
pub struct Picker {
    catalog: Catalog,
    selected: Option<EntryId>,
    favorites: HashSet<EntryId>,
    modal: Modal,
    show_notices: bool,
}

impl Picker {
    pub fn new(catalog: Catalog, show_notices: bool) -> Self {
        Self {
            catalog,
            selected: None,
            favorites: HashSet::new(),
            modal: Modal::None,
            show_notices,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selected(&self) -> Option<EntryId> {
        self.selected
    }

    pub fn selected_entry(&self) -> Option<&EmojiEntry> {
        self.selected().and_then(|id| self.catalog.get(id))
    }

    pub fn is_selected(&self, id: EntryId) -> bool {
        self.selected == Some(id)
    }

    pub fn is_favorite(&self, id: EntryId) -> bool {
        self.favorites.contains(&id)
    }

    pub fn favorite_count(&self) -> usize {
        self.favorites.len()
    }

    /// Favorited entries in catalog order
    pub fn favorites_summary(&self) -> Vec<&EmojiEntry> {
        self.catalog
            .iter()
            .filter(|e| self.favorites.contains(&e.id))
            .collect()
    }

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    /// True while a dialog blocks the picker underneath
    pub fn is_blocked(&self) -> bool {
        !matches!(self.modal, Modal::None)
    }

    /// Select an entry, or clear the selection if it is already selected
    pub fn toggle_select(&mut self, id: EntryId) {
        if self.is_blocked() {
            return;
        }
        let Some(entry) = self.catalog.get(id) else {
            tracing::warn!("Ignoring selection of unknown entry {}", id);
            return;
        };
        tracing::debug!("Selected object is: {:?}", entry);

        if self.selected == Some(id) {
            self.selected = None;
        } else {
            self.selected = Some(id);
        }
    }

    /// Add a favorite immediately, or ask before removing one
    pub fn toggle_favorite(&mut self, id: EntryId) -> FavoriteOutcome {
        if self.is_blocked() {
            return FavoriteOutcome::Ignored;
        }
        let Some(entry) = self.catalog.get(id) else {
            tracing::warn!("Ignoring favorite toggle of unknown entry {}", id);
            return FavoriteOutcome::Ignored;
        };

        if self.favorites.contains(&id) {
            self.modal = Modal::ConfirmRemove {
                id,
                prompt: Prompt::remove_favorite(entry),
                choice: PromptChoice::Cancel,
            };
            FavoriteOutcome::ConfirmPending
        } else {
            let notice = Prompt::added(entry);
            self.favorites.insert(id);
            tracing::info!("Added {} to favorites", entry.name);
            self.show_notice(notice);
            FavoriteOutcome::Added
        }
    }

    /// Confirm a pending removal. Returns false if nothing was pending.
    pub fn confirm_removal(&mut self) -> bool {
        let Modal::ConfirmRemove { id, .. } = self.modal else {
            return false;
        };
        self.modal = Modal::None;

        if !self.favorites.remove(&id) {
            return false;
        }
        if self.selected == Some(id) {
            self.selected = None;
        }

        if let Some(entry) = self.catalog.get(id) {
            tracing::info!("Removed {} from favorites", entry.name);
            let notice = Prompt::removed(entry);
            self.show_notice(notice);
        }
        true
    }

    /// Cancel a pending removal without touching any state
    pub fn cancel_removal(&mut self) {
        if matches!(self.modal, Modal::ConfirmRemove { .. }) {
            self.modal = Modal::None;
        }
    }

    /// Move the highlighted prompt button
    pub fn set_prompt_choice(&mut self, new_choice: PromptChoice) {
        if let Modal::ConfirmRemove { ref mut choice, .. } = self.modal {
            *choice = new_choice;
        }
    }

    pub fn prompt_choice(&self) -> Option<PromptChoice> {
        match self.modal {
            Modal::ConfirmRemove { choice, .. } => Some(choice),
            _ => None,
        }
    }

    /// Run whichever prompt button is highlighted
    pub fn activate_prompt_choice(&mut self) {
        match self.prompt_choice() {
            Some(PromptChoice::Confirm) => {
                self.confirm_removal();
            }
            Some(PromptChoice::Cancel) => self.cancel_removal(),
            None => {}
        }
    }

    pub fn dismiss_notice(&mut self) {
        if matches!(self.modal, Modal::Notice(_)) {
            self.modal = Modal::None;
        }
    }

    fn show_notice(&mut self, notice: Prompt) {
        if self.show_notices {
            self.modal = Modal::Notice(notice);
        }
    }
}
