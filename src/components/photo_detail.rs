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

//! A popup showing the API JSON of one photo.

use crossterm::event::{Event, KeyCode};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::Style,
    widgets::{Block, Clear, Paragraph},
};

use crate::{
    model::Photo,
    render::Render,
    schema::{SchemaError, SchemaRegistry, convert},
    theme::Theme,
};

pub(crate) struct PhotoDetail {
    title: String,
    text: String,
    line_count: u16,
    scroll: u16,
}

impl PhotoDetail {
    pub(crate) fn new(photo: &Photo, registry: &SchemaRegistry) -> Result<Self, SchemaError> {
        let text = convert::photo_to_json(photo, registry)?;
        let line_count = u16::try_from(text.lines().count()).unwrap_or(u16::MAX);

        Ok(Self {
            title: format!(" {}  {} ", photo.id, photo.created_at.instant().format("%Y-%m-%d")),
            text,
            line_count,
            scroll: 0,
        })
    }

    /// Returns `false` once the popup should close.
    pub(crate) fn handle_event(&mut self, event: &Event) -> bool {
        let Event::Key(key_event) = event else {
            return true;
        };

        match key_event.code {
            KeyCode::Esc | KeyCode::Char('i') | KeyCode::Char('q') => return false,
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll = (self.scroll + 1).min(self.line_count.saturating_sub(1));
            }
            KeyCode::Char('k') | KeyCode::Up => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::Char('g') => self.scroll = 0,
            _ => {}
        }

        true
    }
}

impl Render for PhotoDetail {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let [popup] = Layout::horizontal([Constraint::Percentage(70)])
            .flex(Flex::Center)
            .areas(area);
        let [popup] = Layout::vertical([Constraint::Percentage(80)])
            .flex(Flex::Center)
            .areas(popup);

        let block = Block::bordered()
            .title(self.title.as_str())
            .border_style(Style::default().fg(theme.accent_colour))
            .style(Style::default().bg(theme.status_bg));

        let paragraph = Paragraph::new(self.text.as_str())
            .style(Style::default().fg(theme.text_fg))
            .scroll((self.scroll, 0))
            .block(block);

        f.render_widget(Clear, popup);
        f.render_widget(paragraph, popup);
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;
    use crate::{model::fixtures, schema::ExtraKeys};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn detail_shows_wire_json() {
        let detail =
            PhotoDetail::new(&fixtures::photo("a"), SchemaRegistry::photo(ExtraKeys::Accept))
                .unwrap();

        assert!(detail.text.contains("\"download_location\""));
        assert!(detail.text.contains("\"self\""));
        assert_eq!(detail.title, " a  2016-05-03 ");
    }

    #[test]
    fn scrolling_is_bounded_and_escape_closes() {
        let mut detail =
            PhotoDetail::new(&fixtures::photo("a"), SchemaRegistry::photo(ExtraKeys::Accept))
                .unwrap();

        assert!(detail.handle_event(&key(KeyCode::Char('k'))));
        assert_eq!(detail.scroll, 0);

        for _ in 0..1_000 {
            detail.handle_event(&key(KeyCode::Char('j')));
        }
        assert_eq!(detail.scroll, detail.line_count - 1);

        assert!(!detail.handle_event(&key(KeyCode::Esc)));
    }
}
