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

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Padding, Paragraph, Wrap},
};

use crate::{config::ACCESS_KEY_VAR, error::DEVELOPERS_URL, theme::Theme};

/// Explains how to supply an access key. Shown for the whole session when the
/// application was started without one.
pub(crate) fn draw_credential_required(f: &mut Frame, area: Rect, theme: &Theme) {
    let [popup] = Layout::horizontal([Constraint::Max(64)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::vertical([Constraint::Length(11)])
        .flex(Flex::Center)
        .areas(popup);

    let lines = vec![
        Line::from("An Unsplash access key is required")
            .style(Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD)),
        Line::from(""),
        Line::from("Register an application at").style(Style::default().fg(theme.text_fg)),
        Line::from(DEVELOPERS_URL).style(Style::default().fg(theme.author_fg)),
        Line::from(""),
        Line::from(format!("then restart with {ACCESS_KEY_VAR} set to its access key."))
            .style(Style::default().fg(theme.text_fg)),
        Line::from(""),
        Line::from("Press q to quit").style(Style::default().fg(theme.muted_fg)),
    ];

    let block = Block::bordered()
        .border_style(Style::default().fg(theme.error_fg))
        .padding(Padding::horizontal(1));

    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block),
        popup,
    );
}
