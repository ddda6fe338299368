// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Render the status line.
//!
//! The left side describes what is being shown, the right side shows either
//! activity or the most recent problem.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    App,
    render::icons::{ICON_WARNING, SPINNER},
};

pub(crate) fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let gallery = &app.gallery;

    let [left, right] =
        Layout::horizontal([Constraint::Min(0), Constraint::Percentage(50)]).areas(area);

    let subject = if gallery.query_text().is_empty() {
        "Latest photos".to_string()
    } else {
        format!("\"{}\"", gallery.query_text())
    };

    let mut spans = vec![
        Span::styled(format!(" {subject}"), Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD)),
        Span::styled(
            format!("  {} photos  page {}", gallery.results().len(), gallery.page_number()),
            Style::default().fg(theme.muted_fg),
        ),
    ];
    if !gallery.has_more() {
        spans.push(Span::styled("  end of results", Style::default().fg(theme.muted_fg)));
    }

    let style = Style::default().bg(theme.status_bg);
    f.render_widget(Paragraph::new(Line::from(spans)).style(style), left);

    let activity = match app.notice.as_deref().or(gallery.last_error()) {
        Some(problem) => Line::from(format!("{ICON_WARNING} {problem} "))
            .style(Style::default().fg(theme.error_fg)),
        None if gallery.in_flight() > 0 => {
            let frame = SPINNER[app.tick % SPINNER.len()];
            Line::from(format!("{frame} loading "))
                .style(Style::default().fg(theme.muted_fg))
        }
        None => Line::from("/ search  hjkl move  o open  i inspect  q quit ")
            .style(Style::default().fg(theme.muted_fg)),
    };

    f.render_widget(
        Paragraph::new(activity).alignment(Alignment::Right).style(style),
        right,
    );
}
