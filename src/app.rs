use ratatui::layout::{Position, Rect};

use crate::catalog::{EmojiEntry, EntryId};
use crate::config::AppearanceConfig;
use crate::input::Action;
use crate::picker::{Modal, Picker, PromptChoice};
use crate::ui::{GridLayout, Theme};

/// Clickable regions recorded by the last draw
#[derive(Debug, Default, Clone)]
pub struct HitRegions {
    pub cards: Vec<(Rect, EntryId)>,
    pub favorites: Vec<(Rect, EntryId)>,
    pub buttons: Vec<(Rect, PromptChoice)>,
}

impl HitRegions {
    pub fn clear(&mut self) {
        self.cards.clear();
        self.favorites.clear();
        self.buttons.clear();
    }

    fn find<T: Copy>(regions: &[(Rect, T)], pos: Position) -> Option<T> {
        regions
            .iter()
            .find(|(rect, _)| rect.contains(pos))
            .map(|(_, value)| *value)
    }
}

/// Application state
pub struct App {
    /// Selection, favorites, dialogs
    picker: Picker,
    /// Index of the keyboard-focused card
    focused: usize,
    /// Grid fitted to the last drawn area
    grid: GridLayout,
    theme: Theme,
    appearance: AppearanceConfig,
    hits: HitRegions,
    should_quit: bool,
}

impl App {
    pub fn new(picker: Picker, theme: Theme, appearance: AppearanceConfig, start_focus: usize) -> Self {
        let focused = start_focus.min(picker.catalog().len().saturating_sub(1));
        Self {
            picker,
            focused,
            grid: GridLayout::default(),
            theme,
            appearance,
            hits: HitRegions::default(),
            should_quit: false,
        }
    }

    pub fn picker(&self) -> &Picker {
        &self.picker
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn appearance(&self) -> &AppearanceConfig {
        &self.appearance
    }

    pub fn focused_index(&self) -> usize {
        self.focused
    }

    pub fn focused_entry(&self) -> Option<&EmojiEntry> {
        self.picker.catalog().entry_at(self.focused)
    }

    pub fn set_grid_layout(&mut self, grid: GridLayout) {
        self.grid = grid;
    }

    pub fn hits_mut(&mut self) -> &mut HitRegions {
        &mut self.hits
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Apply one user action
    pub fn apply(&mut self, action: Action) {
        let total = self.picker.catalog().len();
        let grid = self.grid;

        match action {
            Action::Quit => self.should_quit = true,
            Action::FocusLeft => self.focused = grid.move_left(self.focused),
            Action::FocusRight => self.focused = grid.move_right(self.focused, total),
            Action::FocusUp => self.focused = grid.move_up(self.focused),
            Action::FocusDown => self.focused = grid.move_down(self.focused, total),
            Action::FocusHome => self.focused = 0,
            Action::FocusEnd => self.focused = grid.move_end(total),
            Action::FocusNext => self.focused = grid.tab_next(self.focused, total),
            Action::FocusPrev => self.focused = grid.tab_prev(self.focused, total),
            Action::ToggleSelect => {
                if let Some(id) = self.focused_entry().map(|e| e.id) {
                    self.picker.toggle_select(id);
                }
            }
            Action::ToggleFavorite => {
                if let Some(id) = self.focused_entry().map(|e| e.id) {
                    self.picker.toggle_favorite(id);
                }
            }
            Action::ConfirmRemoval => {
                self.picker.confirm_removal();
            }
            Action::CancelRemoval => self.picker.cancel_removal(),
            Action::SwitchChoice => {
                if let Some(choice) = self.picker.prompt_choice() {
                    self.picker.set_prompt_choice(choice.other());
                }
            }
            Action::ActivateChoice => self.picker.activate_prompt_choice(),
            Action::DismissNotice => self.picker.dismiss_notice(),
            Action::Click { column, row } => self.click(Position::new(column, row)),
        }
    }

    /// Route a click through the regions of the last frame
    fn click(&mut self, pos: Position) {
        if self.picker.prompt_choice().is_some() {
            match HitRegions::find(&self.hits.buttons, pos) {
                Some(PromptChoice::Confirm) => {
                    self.picker.confirm_removal();
                }
                Some(PromptChoice::Cancel) => self.picker.cancel_removal(),
                None => {}
            }
        } else if matches!(self.picker.modal(), Modal::Notice(_)) {
            self.picker.dismiss_notice();
        } else if let Some(id) = HitRegions::find(&self.hits.favorites, pos) {
            // The indicator sits inside the card, so it wins
            self.focus_entry(id);
            self.picker.toggle_favorite(id);
        } else if let Some(id) = HitRegions::find(&self.hits.cards, pos) {
            self.focus_entry(id);
            self.picker.toggle_select(id);
        }
    }

    fn focus_entry(&mut self, id: EntryId) {
        if let Some(index) = self.picker.catalog().position(id) {
            self.focused = index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn app() -> App {
        App::new(
            Picker::new(Catalog::builtin(), true),
            Theme::default(),
            AppearanceConfig::default(),
            0,
        )
    }

    #[test]
    fn test_start_focus_clamped() {
        let app = App::new(
            Picker::new(Catalog::builtin(), true),
            Theme::default(),
            AppearanceConfig::default(),
            99,
        );
        assert_eq!(app.focused_index(), 4);
    }

    #[test]
    fn test_keyboard_flow() {
        let mut app = app();
        app.apply(Action::FocusRight);
        app.apply(Action::ToggleFavorite);
        assert!(app.picker().is_favorite(2));
        app.apply(Action::DismissNotice);

        app.apply(Action::ToggleFavorite);
        assert_eq!(app.picker().prompt_choice(), Some(PromptChoice::Cancel));
        app.apply(Action::SwitchChoice);
        app.apply(Action::ActivateChoice);
        assert!(!app.picker().is_favorite(2));
        assert!(matches!(app.picker().modal(), Modal::Notice(_)));
    }

    #[test]
    fn test_select_focused() {
        let mut app = app();
        app.apply(Action::FocusEnd);
        app.apply(Action::ToggleSelect);
        assert_eq!(app.picker().selected(), Some(5));
        app.apply(Action::FocusHome);
        assert_eq!(app.focused_index(), 0);
    }

    #[test]
    fn test_click_regions() {
        let mut app = app();
        let card = Rect::new(0, 0, 14, 5);
        let heart = Rect::new(10, 1, 3, 1);
        app.hits_mut().cards.push((card, 3));
        app.hits_mut().favorites.push((heart, 3));

        app.apply(Action::Click { column: 2, row: 2 });
        assert_eq!(app.picker().selected(), Some(3));
        assert_eq!(app.focused_index(), 2);

        app.apply(Action::Click { column: 11, row: 1 });
        assert!(app.picker().is_favorite(3));
        // Heart click does not touch selection
        assert_eq!(app.picker().selected(), Some(3));

        // Any click dismisses the notice
        app.apply(Action::Click { column: 40, row: 40 });
        assert!(!app.picker().is_blocked());
    }

    #[test]
    fn test_click_prompt_buttons() {
        let mut app = app();
        app.apply(Action::ToggleFavorite);
        app.apply(Action::DismissNotice);
        app.apply(Action::ToggleFavorite);

        app.hits_mut().buttons.push((Rect::new(5, 5, 10, 1), PromptChoice::Cancel));
        app.hits_mut().buttons.push((Rect::new(20, 5, 7, 1), PromptChoice::Confirm));

        // Outside both buttons: still pending
        app.apply(Action::Click { column: 0, row: 0 });
        assert!(app.picker().prompt_choice().is_some());

        app.apply(Action::Click { column: 21, row: 5 });
        assert!(!app.picker().is_favorite(1));
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        assert!(!app.should_quit());
        app.apply(Action::Quit);
        assert!(app.should_quit());
    }
}
