//! Rendering engine for fixed-height banner fonts.
//!
//! A banner font is a flat sequence of text rows: one block of `height`
//! rows per printable ASCII character (codes 32 through 126), in ascending
//! code order, with no delimiters between blocks. This crate loads such a
//! definition from a [`FontSource`], builds a [`GlyphTable`] from it, and
//! renders input text by concatenating the per-character blocks row by row.
//!
//! ```
//! let banner = rowfont::render_text(&rowfont::BuiltinFonts, "Hello", "standard").unwrap();
//! assert_eq!(banner.lines().count(), 8);
//! ```
//!
//! Multi-line input is supported: the literal two-character sequence `\n`
//! is treated as a line break, carriage returns are stripped, and a blank
//! input line produces a single blank output line rather than a full block
//! of empty rows.

use thiserror::Error;

mod font;
mod render;
mod table;

pub use font::{BuiltinFonts, DirFonts, FontSource, read_font_file};
pub use render::{render_line, render_text};
pub use table::{Glyph, GlyphTable};

/// First character code covered by a font.
pub const FIRST_CHAR: u32 = 32;
/// Number of characters a font must cover (codes 32 through 126).
pub const CHAR_COUNT: usize = 95;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("no font named `{0}` is available")]
    FontNotFound(String),
    #[error("failed to read font file `{}`: {}", .0.display(), .1)]
    FontUnreadable(std::path::PathBuf, #[source] std::io::Error),
    #[error("font definition has {0} rows, which cannot be split into 95 glyphs of equal height")]
    MalformedFont(usize),
    #[error("character {0:?} (code {code}) is outside the range supported by this font", code = *.0 as u32)]
    UnsupportedCharacter(char),
}
