//! Modal dialogs drawn over the picker

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::picker::{Prompt, PromptChoice};
use crate::ui::theme::Theme;

const DIALOG_WIDTH: u16 = 52;
const DIALOG_HEIGHT: u16 = 7;
const BUTTON_GAP: u16 = 3;

/// Remove-favorite confirmation with Cancel / Yes buttons
pub(crate) fn draw_confirm(f: &mut Frame, app: &mut App, prompt: &Prompt, choice: PromptChoice) {
    let theme = app.theme().clone();
    let Some(inner) = draw_frame(f, prompt, &theme) else {
        return;
    };

    let buttons = [(" Cancel ", PromptChoice::Cancel), (" Yes ", PromptChoice::Confirm)];
    let labels: Vec<String> = buttons.iter().map(|(text, _)| format!("[{}]", text)).collect();
    let total: u16 = labels.iter().map(|l| l.width() as u16).sum::<u16>() + BUTTON_GAP;
    if total > inner.width || inner.height == 0 {
        return;
    }

    let y = inner.bottom() - 1;
    let mut x = inner.x + (inner.width - total) / 2;
    for (label, (_, button)) in labels.iter().zip(buttons) {
        let width = label.width() as u16;
        let area = Rect::new(x, y, width, 1);

        let style = if button == choice {
            Style::default()
                .fg(theme.dialog_bg)
                .bg(theme.dialog_border)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.foreground).bg(theme.dialog_bg)
        };
        f.render_widget(Paragraph::new(label.as_str()).style(style), area);
        app.hits_mut().buttons.push((area, button));

        x += width + BUTTON_GAP;
    }
}

/// Acknowledgment after a favorite changed
pub(crate) fn draw_notice(f: &mut Frame, app: &App, prompt: &Prompt) {
    let theme = app.theme();
    let Some(inner) = draw_frame(f, prompt, theme) else {
        return;
    };
    if inner.height == 0 {
        return;
    }

    let hint = Paragraph::new("[ OK ]")
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(theme.dialog_bg)
                .bg(theme.dialog_border)
                .add_modifier(Modifier::BOLD),
        );
    let ok_width = 6.min(inner.width);
    let area = Rect::new(
        inner.x + (inner.width - ok_width) / 2,
        inner.bottom() - 1,
        ok_width,
        1,
    );
    f.render_widget(hint, area);
}

/// Clear a centred box, draw border + title + message.
/// Returns the inner area, or None when the screen is too small.
fn draw_frame(f: &mut Frame, prompt: &Prompt, theme: &Theme) -> Option<Rect> {
    let area = centered(f.area(), DIALOG_WIDTH, DIALOG_HEIGHT);
    if area.width < 3 || area.height < 3 {
        return None;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.dialog_border))
        .title(format!(" {} ", prompt.title))
        .title_alignment(Alignment::Center)
        .style(Style::default().bg(theme.dialog_bg));
    let inner = block.inner(area);

    f.render_widget(Clear, area);
    f.render_widget(block, area);

    // Message above a blank row and the button row
    let message_area = Rect {
        height: inner.height.saturating_sub(2).max(1).min(inner.height),
        ..inner
    };
    let message = Paragraph::new(prompt.message.as_str())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(theme.foreground).bg(theme.dialog_bg));
    f.render_widget(message, message_area);

    Some(inner)
}

/// Centre a `width` x `height` box in `area`, shrinking it to fit
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
