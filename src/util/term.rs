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

//! Terminal background control.
//!
//! Uses OSC (Operating System Command) escape sequences, which most modern
//! terminals (XTerm, iTerm2, Alacritty, Kitty) understand. Terminals that do
//! not simply ignore them.

use std::io::{self, Write};

/// Sets the terminal background to `hex_color` (e.g. `"#111111"`) with OSC 11.
pub(crate) fn set_terminal_bg(out: &mut impl Write, hex_color: &str) -> io::Result<()> {
    write!(out, "\x1b]11;{hex_color}\x07")?;
    out.flush()
}

/// Reverts the background to the user's own configuration with OSC 111.
pub(crate) fn reset_terminal_bg(out: &mut impl Write) -> io::Result<()> {
    write!(out, "\x1b]111\x07")?;
    out.flush()
}
