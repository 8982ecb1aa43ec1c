//! Emoji card widget
//!
//! Renders each catalog entry as a bordered card:
//! - favorite indicator in the top-right corner
//! - glyph, centred
//! - name, centred and dimmed

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::theme::Theme;
use crate::catalog::EmojiEntry;

/// Emoji card widget
pub struct EmojiCard<'a> {
    entry: &'a EmojiEntry,
    theme: &'a Theme,
    selected: bool,
    favorite: bool,
    focused: bool,
    favorite_glyph: &'a str,
    unfavorite_glyph: &'a str,
}

impl<'a> EmojiCard<'a> {
    pub fn new(entry: &'a EmojiEntry, theme: &'a Theme) -> Self {
        Self {
            entry,
            theme,
            selected: false,
            favorite: false,
            focused: false,
            favorite_glyph: "❤️",
            unfavorite_glyph: "🤍",
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn favorite(mut self, favorite: bool) -> Self {
        self.favorite = favorite;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn indicators(mut self, favorite_glyph: &'a str, unfavorite_glyph: &'a str) -> Self {
        self.favorite_glyph = favorite_glyph;
        self.unfavorite_glyph = unfavorite_glyph;
        self
    }

    fn indicator(&self) -> &'a str {
        if self.favorite {
            self.favorite_glyph
        } else {
            self.unfavorite_glyph
        }
    }

    /// Clickable area of the favorite indicator for a card drawn at `area`
    pub fn indicator_area(area: Rect) -> Rect {
        let inner = Block::default().borders(Borders::ALL).inner(area);
        // Padded by one cell on each side to be forgiving of wide glyphs
        let width = 4.min(inner.width);
        Rect {
            x: inner.right().saturating_sub(width),
            y: inner.y,
            width,
            height: inner.height.min(1),
        }
    }
}

impl Widget for EmojiCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 3 || area.height < 3 {
            return;
        }

        let (bg, fg) = if self.selected {
            (self.theme.selection_bg, self.theme.selection_fg)
        } else {
            (self.theme.background, self.theme.foreground)
        };
        let (border_type, border_color) = match (self.selected, self.focused) {
            (true, _) => (BorderType::Thick, self.theme.selection_border),
            (false, true) => (BorderType::Double, self.theme.focus),
            (false, false) => (BorderType::Rounded, self.theme.card_border),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(bg));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }
        let width = inner.width as usize;

        // Row 0: favorite indicator, right-aligned
        let indicator = self.indicator();
        let indicator_x = inner.right().saturating_sub(indicator.width() as u16 + 1);
        let indicator_style = Style::default().fg(self.theme.favorite).bg(bg);
        buf.set_string(indicator_x.max(inner.x), inner.y, indicator, indicator_style);

        // Row 1: glyph
        if inner.height >= 2 {
            let glyph = truncate(&self.entry.glyph, width);
            let style = Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD);
            buf.set_string(centered_x(inner, &glyph), inner.y + 1, &glyph, style);
        }

        // Row 2: name
        if inner.height >= 3 {
            let name = truncate(&self.entry.name, width);
            let name_fg = if self.selected { fg } else { self.theme.dimmed };
            let style = Style::default().fg(name_fg).bg(bg);
            buf.set_string(centered_x(inner, &name), inner.y + 2, &name, style);
        }
    }
}

fn centered_x(area: Rect, text: &str) -> u16 {
    let width = text.width() as u16;
    area.x + area.width.saturating_sub(width) / 2
}

/// Truncate to `max_width` display cells, ending in an ellipsis when cut
pub fn truncate(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 1 {
        return "…".to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
