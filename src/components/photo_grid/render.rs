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

//! UI rendering logic for the photo grid.
//!
//! Each photo is drawn as a bordered tile: a swatch of its dominant colour,
//! its caption, its author, then likes and dimensions.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph},
};

use crate::{
    components::photo_grid::PhotoGrid,
    model::Photo,
    render::{
        Render,
        icons::{ICON_LIKES, ICON_SWATCH},
    },
    theme::Theme,
    util::format::{format_count, truncate},
};

const TILE_WIDTH: u16 = 30;
const TILE_HEIGHT: u16 = 6;

impl Render for PhotoGrid<'_> {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let (grid_area, loading_area) = if self.loading && area.height > 1 {
            let grid = Rect {
                height: area.height - 1,
                ..area
            };
            let loading = Rect {
                y: area.y + area.height - 1,
                height: 1,
                ..area
            };
            (grid, Some(loading))
        } else {
            (area, None)
        };

        if self.photos.is_empty() {
            if !self.loading {
                let empty = Paragraph::new("No photos")
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(theme.muted_fg));
                f.render_widget(empty, grid_area);
            }
        } else {
            self.draw_tiles(f, grid_area, theme);
        }

        if let Some(loading_area) = loading_area {
            let loading = Paragraph::new("Loading...")
                .alignment(Alignment::Center)
                .style(Style::default().fg(theme.muted_fg));
            f.render_widget(loading, loading_area);
        }
    }
}

impl PhotoGrid<'_> {
    fn draw_tiles(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        self.state.columns = usize::from((area.width / TILE_WIDTH).max(1));
        let visible_rows = usize::from((area.height / TILE_HEIGHT).max(1));

        // Keep the selected row on screen
        if let Some(selected) = self.state.selected {
            let row = self.row_of(selected.min(self.photos.len() - 1));
            if row < self.state.offset {
                self.state.offset = row;
            } else if row >= self.state.offset + visible_rows {
                self.state.offset = row + 1 - visible_rows;
            }
        }

        let columns = self.state.columns;
        let tile_width = area.width / columns as u16;
        let first = self.state.offset * columns;
        let last = (first + visible_rows * columns).min(self.photos.len());

        for (index, photo) in self.photos.iter().enumerate().take(last).skip(first) {
            let position = index - first;
            let x = area.x + (position % columns) as u16 * tile_width;
            let y = area.y + (position / columns) as u16 * TILE_HEIGHT;
            let tile = Rect {
                x,
                y,
                width: tile_width,
                height: TILE_HEIGHT.min(area.bottom().saturating_sub(y)),
            };

            draw_tile(f, tile, photo, self.state.selected == Some(index), theme);
        }
    }
}

fn draw_tile(f: &mut Frame, area: Rect, photo: &Photo, selected: bool, theme: &Theme) {
    let (border_type, border_style) = if selected {
        (
            BorderType::Thick,
            Style::default().fg(theme.accent_colour),
        )
    } else {
        (BorderType::Rounded, Style::default().fg(theme.border_colour))
    };

    let block = Block::bordered()
        .border_type(border_type)
        .border_style(border_style);

    let width = usize::from(area.width.saturating_sub(2));
    let swatch_colour = Theme::from_hex(&photo.color).unwrap_or(theme.muted_fg);

    let lines = vec![
        Line::from(vec![
            Span::styled(ICON_SWATCH.repeat(width.saturating_sub(8)), Style::default().fg(swatch_colour)),
            Span::styled(format!(" {}", photo.color), Style::default().fg(theme.muted_fg)),
        ]),
        Line::from(truncate(photo.caption(), width))
            .style(Style::default().fg(theme.text_fg).add_modifier(Modifier::BOLD)),
        Line::from(truncate(&format!("by {}", photo.user.name), width))
            .style(Style::default().fg(theme.author_fg)),
        Line::from(vec![
            Span::styled(format!("{ICON_LIKES} {}", format_count(photo.likes)), Style::default().fg(theme.likes_fg)),
            Span::styled(
                format!("  {}×{}", photo.width, photo.height),
                Style::default().fg(theme.muted_fg),
            ),
        ]),
    ];

    f.render_widget(Paragraph::new(lines).block(block), area);
}
