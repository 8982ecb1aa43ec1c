//! Picker screen drawing
//!
//! - Header and favorites counter
//! - Favorites summary strip
//! - Card grid
//! - Status bar

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::ui::emoji_card::EmojiCard;
use crate::ui::layout::{GridLayout, CARD_GAP, CARD_HEIGHT, CARD_WIDTH};
use crate::ui::theme::Theme;

/// Space between glyphs in the favorites strip
const SUMMARY_SEPARATOR: &str = "  ";
/// Rows besides the summary: header, counter, one card row, status bar
const FIXED_ROWS: u16 = 1 + 1 + CARD_HEIGHT + 1;

/// Draw the whole picker screen
pub(crate) fn draw_picker(f: &mut Frame, app: &mut App) {
    let area = f.area();
    let theme = app.theme().clone();

    let outer = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.card_border))
        .title(app.appearance().title.clone())
        .style(Style::default().bg(theme.background));
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    // Summary grows with wrapped rows, but always leaves one card row
    let glyphs: Vec<&str> = app
        .picker()
        .favorites_summary()
        .into_iter()
        .map(|e| e.glyph.as_str())
        .collect();
    let max_rows = inner.height.saturating_sub(FIXED_ROWS + 2).max(1) as usize;
    let summary_rows = pack_summary(&glyphs, inner.width.saturating_sub(2) as usize, max_rows);
    let summary_height = summary_rows.len().max(1) as u16 + 2;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),              // Header
            Constraint::Length(1),              // Favorites counter
            Constraint::Length(summary_height), // Favorites summary
            Constraint::Min(CARD_HEIGHT),       // Card grid
            Constraint::Length(1),              // Status bar
        ])
        .split(inner);

    draw_header(f, app, chunks[0], chunks[1], &theme);
    draw_summary(f, &summary_rows, chunks[2], &theme);
    draw_grid(f, app, chunks[3], &theme);
    draw_status_bar(f, app, chunks[4], &theme);
}

fn draw_header(f: &mut Frame, app: &App, title_area: Rect, counter_area: Rect, theme: &Theme) {
    let header = Paragraph::new("EMOJI PICKER")
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(theme.accent)
                .bg(theme.background)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(header, title_area);

    let counter = Paragraph::new(format!("Favorites: {}", app.picker().favorite_count()))
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme.foreground).bg(theme.background));
    f.render_widget(counter, counter_area);
}

/// Favorited glyphs in catalog order, one line per packed row
fn draw_summary(f: &mut Frame, rows: &[String], area: Rect, theme: &Theme) {
    let lines: Vec<Line> = if rows.is_empty() {
        vec![Line::from(Span::styled(
            "No favorites yet",
            Style::default().fg(theme.dimmed),
        ))]
    } else {
        rows.iter()
            .map(|row| Line::from(Span::styled(row.clone(), Style::default().fg(theme.foreground))))
            .collect()
    };

    let summary = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.dimmed))
            .title(Span::styled(
                "Your Favorite Emojis:",
                Style::default().fg(theme.accent),
            ))
            .title_alignment(Alignment::Center)
            .style(Style::default().bg(theme.background)),
    );
    f.render_widget(summary, area);
}

/// Pack glyphs into rows no wider than `width`, like a wrapping flex row.
/// When more than `max_rows` rows are needed the last kept row ends in a
/// `+N` marker counting the glyphs left out.
fn pack_summary(glyphs: &[&str], width: usize, max_rows: usize) -> Vec<String> {
    let width = width.max(1);
    let sep = SUMMARY_SEPARATOR.width();

    let mut rows: Vec<Vec<&str>> = Vec::new();
    let mut row_width = 0;
    for &glyph in glyphs {
        let w = glyph.width();
        match rows.last_mut() {
            Some(row) if row_width + sep + w <= width => {
                row.push(glyph);
                row_width += sep + w;
            }
            _ => {
                rows.push(vec![glyph]);
                row_width = w;
            }
        }
    }

    let max_rows = max_rows.max(1);
    if rows.len() > max_rows {
        rows.truncate(max_rows);
        let shown: usize = rows.iter().map(Vec::len).sum();
        let mut hidden = glyphs.len() - shown;

        if let Some(last) = rows.last_mut() {
            loop {
                let marker_width = format!("+{}", hidden).width();
                let used: usize = last.iter().map(|g| g.width()).sum::<usize>()
                    + sep * last.len();
                if last.is_empty() || used + marker_width <= width {
                    break;
                }
                last.pop();
                hidden += 1;
            }
            let marker = format!("+{}", hidden);
            let mut text = last.join(SUMMARY_SEPARATOR);
            if !text.is_empty() {
                text.push_str(SUMMARY_SEPARATOR);
            }
            text.push_str(&marker);
            return rows
                .iter()
                .take(max_rows - 1)
                .map(|row| row.join(SUMMARY_SEPARATOR))
                .chain(std::iter::once(text))
                .collect();
        }
    }

    rows.iter().map(|row| row.join(SUMMARY_SEPARATOR)).collect()
}

/// Draw the cards, centred, one page at a time
fn draw_grid(f: &mut Frame, app: &mut App, area: Rect, theme: &Theme) {
    let grid = GridLayout::fit(area.width, area.height);
    app.set_grid_layout(grid);

    if area.width < CARD_WIDTH || area.height < CARD_HEIGHT {
        return;
    }

    let total = app.picker().catalog().len();
    let visible = grid.visible_range(app.focused_index(), total);
    let offset_x = area.width.saturating_sub(grid.row_width(total)) / 2;
    let appearance = app.appearance().clone();

    let mut cards = Vec::with_capacity(visible.len());
    for (local_idx, global_idx) in visible.enumerate() {
        let (row, col) = grid.index_to_position(local_idx);
        let card_area = Rect {
            x: area.x + offset_x + col * (CARD_WIDTH + CARD_GAP),
            y: area.y + row * CARD_HEIGHT,
            width: CARD_WIDTH,
            height: CARD_HEIGHT,
        };

        // Skip anything that would spill past the grid area
        if card_area.right() > area.right() || card_area.bottom() > area.bottom() {
            continue;
        }
        cards.push((card_area, global_idx));
    }

    let picker = app.picker();
    let mut hits = Vec::with_capacity(cards.len());
    for (card_area, index) in cards {
        let Some(entry) = picker.catalog().entry_at(index) else {
            continue;
        };
        let card = EmojiCard::new(entry, theme)
            .selected(picker.is_selected(entry.id))
            .favorite(picker.is_favorite(entry.id))
            .focused(index == app.focused_index())
            .indicators(&appearance.favorite_glyph, &appearance.unfavorite_glyph);
        f.render_widget(card, card_area);
        hits.push((card_area, entry.id));
    }

    let regions = app.hits_mut();
    for (card_area, id) in hits {
        regions.cards.push((card_area, id));
        regions.favorites.push((EmojiCard::indicator_area(card_area), id));
    }
}

fn draw_status_bar(f: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let selected = match app.picker().selected_entry() {
        Some(entry) => format!(" Selected: {} {}", entry.glyph, entry.name),
        None => " Nothing selected".to_string(),
    };
    let status = format!(
        "{} | ←↑↓→: move | Enter: select | f: favorite | q: quit",
        selected
    );

    let status_bar =
        Paragraph::new(status).style(Style::default().fg(theme.dimmed).bg(theme.background));
    f.render_widget(status_bar, area);
}
