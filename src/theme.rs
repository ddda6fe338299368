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

//! Visual styling and color configuration for the TUI.
//!
//! This module defines the application's color palette and converts colors
//! between Ratatui's representation and the hexadecimal strings used both by
//! terminal escape sequences and by the API's `color` field.

use std::ops::Range;

use ratatui::style::Color;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) status_bg: Color,

    pub(crate) text_fg: Color,
    pub(crate) muted_fg: Color,
    pub(crate) author_fg: Color,
    pub(crate) likes_fg: Color,
    pub(crate) error_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(17, 17, 17),
            accent_colour: Color::Rgb(255, 255, 255),
            border_colour: Color::Rgb(68, 68, 68),
            status_bg: Color::Rgb(34, 34, 34),

            text_fg: Color::Rgb(230, 230, 230),
            muted_fg: Color::Rgb(140, 140, 140),
            author_fg: Color::Rgb(179, 157, 219),
            likes_fg: Color::Rgb(239, 83, 80),
            error_fg: Color::Rgb(255, 110, 64),
        }
    }

    /// Converts a [`Color::Rgb`] into a CSS-style hexadecimal string.
    ///
    /// # Panics
    ///
    /// Panics if the provided color is not a [`Color::Rgb`] variant.
    pub(crate) fn to_hex(colour: Color) -> String {
        match colour {
            Color::Rgb(r, g, b) => format!("#{:02x}{:02x}{:02x}", r, g, b),
            _ => panic!("Unexpected non-RGB colour"),
        }
    }

    /// Parses a `#rrggbb` string, as found in a photo's dominant colour.
    pub(crate) fn from_hex(hex: &str) -> Option<Color> {
        let digits = hex.strip_prefix('#')?;
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }

        let channel = |range: Range<usize>| u8::from_str_radix(&digits[range], 16).ok();

        Some(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}
