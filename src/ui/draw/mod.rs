//! Drawing functions for the TUI
//!
//! - `picker` - Header, favorites strip, card grid, status bar
//! - `dialog` - Confirmation prompt and notices drawn on top

mod dialog;
mod picker;

use ratatui::Frame;

use crate::app::App;
use crate::picker::Modal;

use dialog::{draw_confirm, draw_notice};
use picker::draw_picker;

/// Main draw function. Also records click regions for the next event.
pub fn draw(f: &mut Frame, app: &mut App) {
    app.hits_mut().clear();
    draw_picker(f, app);

    let modal = app.picker().modal().clone();
    match modal {
        Modal::None => {}
        Modal::ConfirmRemove { prompt, choice, .. } => draw_confirm(f, app, &prompt, choice),
        Modal::Notice(prompt) => draw_notice(f, app, &prompt),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, EmojiEntry};
    use crate::config::AppearanceConfig;
    use crate::input::Action;
    use crate::picker::Picker;
    use crate::ui::Theme;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn app(show_notices: bool) -> App {
        App::new(
            Picker::new(Catalog::builtin(), show_notices),
            Theme::default(),
            AppearanceConfig::default(),
            0,
        )
    }

    fn buffer_to_string(buf: &Buffer) -> String {
        let mut lines = Vec::new();
        for y in 0..buf.area.height {
            let mut line = String::new();
            for x in 0..buf.area.width {
                line.push_str(buf[(x, y)].symbol());
            }
            lines.push(line);
        }
        lines.join("\n")
    }

    fn render(app: &mut App) -> String {
        render_sized(app, 60, 24)
    }

    fn render_sized(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    /// 20 entries, 😀 onwards, all double width
    fn long_catalog_app() -> App {
        let entries = (0..20u32)
            .map(|i| {
                let glyph = char::from_u32(0x1F600 + i).unwrap().to_string();
                EmojiEntry::new(i + 1, format!("e{}", i), glyph)
            })
            .collect();
        let catalog = Catalog::new(entries).unwrap();
        App::new(
            Picker::new(catalog, false),
            Theme::default(),
            AppearanceConfig::default(),
            0,
        )
    }

    fn favorite_all(app: &mut App) {
        for _ in 0..app.picker().catalog().len() {
            app.apply(Action::ToggleFavorite);
            app.apply(Action::FocusNext);
        }
    }

    /// Rows inside the summary box: below the counter and its top border,
    /// down to its bottom border
    fn summary_rows(screen: &str) -> Vec<String> {
        screen
            .lines()
            .skip_while(|l| !l.contains("Favorites:"))
            .skip(2)
            .take_while(|l| !l.contains('└'))
            .map(str::to_string)
            .collect()
    }

    fn count_long_glyphs(rows: &[String]) -> usize {
        rows.iter()
            .flat_map(|row| row.chars())
            .filter(|c| (0x1F600..0x1F614).contains(&(*c as u32)))
            .count()
    }

    fn summary_line(screen: &str) -> String {
        screen
            .lines()
            .skip_while(|l| !l.contains("Your Favorite Emojis:"))
            .nth(1)
            .unwrap_or_default()
            .to_string()
    }

    #[test]
    fn test_initial_screen() {
        let mut app = app(true);
        let screen = render(&mut app);

        assert!(screen.contains("EMOJI PICKER"));
        assert!(screen.contains("Favorites: 0"));
        assert!(screen.contains("Your Favorite Emojis:"));
        assert!(screen.contains("No favorites yet"));
        for name in ["good", "perfect", "smile", "love", "star"] {
            assert!(screen.contains(name), "missing card {}", name);
        }
        assert_eq!(app.hits_mut().cards.len(), 5);
        assert_eq!(app.hits_mut().favorites.len(), 5);
    }

    #[test]
    fn test_add_favorite_renders_summary() {
        let mut app = app(false);
        app.apply(Action::FocusRight);
        app.apply(Action::ToggleFavorite);
        let screen = render(&mut app);

        assert!(screen.contains("Favorites: 1"));
        let summary = summary_line(&screen);
        assert!(summary.contains("💯"));
        assert!(!summary.contains("👌"));
        assert!(!screen.contains("Remove Favorite?"));
    }

    #[test]
    fn test_confirm_prompt_rendered() {
        let mut app = app(false);
        app.apply(Action::FocusRight);
        app.apply(Action::ToggleFavorite);
        app.apply(Action::ToggleFavorite);
        let screen = render(&mut app);

        assert!(screen.contains("Remove Favorite?"));
        assert!(screen.contains("Do you want to remove 💯"));
        assert!(screen.contains("Cancel"));
        assert!(screen.contains("Yes"));
        assert_eq!(app.hits_mut().buttons.len(), 2);

        app.apply(Action::ConfirmRemoval);
        let screen = render(&mut app);
        assert!(screen.contains("Favorites: 0"));
        assert!(screen.contains("No favorites yet"));
    }

    #[test]
    fn test_notice_rendered() {
        let mut app = app(true);
        app.apply(Action::ToggleFavorite);
        let screen = render(&mut app);
        assert!(screen.contains("Success"));
        assert!(screen.contains("has been added to your favorites!"));
    }

    #[test]
    fn test_click_card_after_draw() {
        let mut app = app(true);
        render(&mut app);
        let (rect, id) = app.hits_mut().cards[2];
        app.apply(Action::Click {
            column: rect.x + 1,
            row: rect.y + rect.height - 2,
        });
        assert_eq!(app.picker().selected(), Some(id));
        assert_eq!(id, 3);
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let mut app = app(true);
        app.apply(Action::ToggleFavorite);
        let mut terminal = Terminal::new(TestBackend::new(8, 3)).unwrap();
        terminal.draw(|f| draw(f, &mut app)).unwrap();
    }

    #[test]
    fn test_summary_wraps_long_catalog() {
        let mut app = long_catalog_app();
        favorite_all(&mut app);
        assert_eq!(app.picker().favorite_count(), 20);

        let screen = render(&mut app);
        assert!(screen.contains("Favorites: 20"));

        // 56 columns hold 14 glyphs, the rest wrap onto a second row
        let rows = summary_rows(&screen);
        assert_eq!(rows.len(), 2);
        assert_eq!(count_long_glyphs(&rows), 20);
        assert!(rows.iter().all(|row| !row.contains('+')));
        assert!(rows[0].contains('😀'));
        assert!(rows[1].contains('😓'));
    }

    #[test]
    fn test_summary_overflow_marker_on_narrow_terminal() {
        let mut app = long_catalog_app();
        favorite_all(&mut app);

        // Room for two rows of four; the second gives one up for the marker
        let screen = render_sized(&mut app, 20, 14);
        let rows = summary_rows(&screen);
        assert_eq!(rows.len(), 2);
        assert!(rows[1].contains("+13"));
        assert_eq!(count_long_glyphs(&rows) + 13, 20);
    }

    #[test]
    fn test_summary_keeps_every_builtin_on_narrow_terminal() {
        let mut app = app(false);
        favorite_all(&mut app);

        let screen = render_sized(&mut app, 20, 14);
        let rows = summary_rows(&screen).join("\n");
        for glyph in ["👌", "💯", "😊", "❤", "⭐"] {
            assert!(rows.contains(glyph), "missing {} in summary", glyph);
        }
        assert!(!rows.contains('+'));
    }
}
