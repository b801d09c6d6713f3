use crate::font::FontSource;
use crate::{CHAR_COUNT, FIRST_CHAR, RenderError};

/// The fixed-height block of text rows that draws one character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    rows: Vec<String>,
}

impl Glyph {
    /// The rows of this glyph, top to bottom.
    pub fn rows(&self) -> &[String] {
        &self.rows
    }
}

/// Glyphs for every printable ASCII character (codes 32 through 126),
/// all sharing one fixed height.
pub struct GlyphTable {
    height: usize,
    glyphs: Vec<Glyph>,
}

impl GlyphTable {
    /// Look up a font by name and build its glyph table.
    pub fn build(source: &dyn FontSource, name: &str) -> Result<Self, RenderError> {
        let definition = source.read(name)?;
        let table = Self::from_rows(&definition)?;
        log::debug!(
            "built glyph table for font `{}` (height {})",
            name,
            table.height
        );
        Ok(table)
    }

    /// Partition a flat font definition into glyphs.
    ///
    /// The definition must consist of exactly one block of rows per covered
    /// character, in ascending code order starting at 32. Block boundaries
    /// are positional, so the row count has to divide evenly into 95 blocks;
    /// anything else means the blocks would be assigned to the wrong codes
    /// and is rejected as [`RenderError::MalformedFont`].
    pub fn from_rows(definition: &[String]) -> Result<Self, RenderError> {
        if definition.is_empty() || definition.len() % CHAR_COUNT != 0 {
            return Err(RenderError::MalformedFont(definition.len()));
        }
        let height = definition.len() / CHAR_COUNT;
        let glyphs = definition
            .chunks_exact(height)
            .map(|rows| Glyph {
                rows: rows.to_vec(),
            })
            .collect();
        Ok(GlyphTable { height, glyphs })
    }

    /// The fixed number of rows in every glyph of this font.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The glyph for `c`, or `None` if `c` is outside the covered range.
    pub fn glyph(&self, c: char) -> Option<&Glyph> {
        let index = (c as u32).checked_sub(FIRST_CHAR)? as usize;
        self.glyphs.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A minimal valid definition: every glyph is `height` copies of its
    /// own character.
    pub(crate) fn marker_font(height: usize) -> Vec<String> {
        (FIRST_CHAR..FIRST_CHAR + CHAR_COUNT as u32)
            .flat_map(|code| {
                let c = char::from_u32(code).unwrap();
                std::iter::repeat_n(c.to_string(), height)
            })
            .collect()
    }

    #[test]
    fn assigns_blocks_to_ascending_codes() {
        let table = GlyphTable::from_rows(&marker_font(3)).unwrap();
        assert_eq!(table.height(), 3);
        assert_eq!(table.glyph(' ').unwrap().rows(), [" ", " ", " "]);
        assert_eq!(table.glyph('A').unwrap().rows(), ["A", "A", "A"]);
        assert_eq!(table.glyph('~').unwrap().rows(), ["~", "~", "~"]);
    }

    #[test]
    fn every_printable_code_resolves() {
        let table = GlyphTable::from_rows(&marker_font(2)).unwrap();
        for code in FIRST_CHAR..FIRST_CHAR + CHAR_COUNT as u32 {
            let c = char::from_u32(code).unwrap();
            let glyph = table.glyph(c).unwrap();
            assert_eq!(glyph.rows().len(), table.height());
        }
    }

    #[test]
    fn codes_outside_the_range_do_not_resolve() {
        let table = GlyphTable::from_rows(&marker_font(2)).unwrap();
        assert!(table.glyph('\t').is_none());
        assert!(table.glyph('\x7f').is_none());
        assert!(table.glyph('é').is_none());
    }

    #[test]
    fn misaligned_row_count_is_malformed() {
        let mut definition = marker_font(2);
        definition.pop();
        let result = GlyphTable::from_rows(&definition);
        assert!(matches!(result, Err(RenderError::MalformedFont(189))));
    }

    #[test]
    fn empty_definition_is_malformed() {
        let result = GlyphTable::from_rows(&[]);
        assert!(matches!(result, Err(RenderError::MalformedFont(0))));
    }

    #[test]
    fn builtin_fonts_build_ragged_free_tables() {
        for name in ["standard", "shadow"] {
            let table = GlyphTable::build(&crate::BuiltinFonts, name).unwrap();
            assert_eq!(table.height(), 8, "font `{name}`");
            for code in FIRST_CHAR..FIRST_CHAR + CHAR_COUNT as u32 {
                let c = char::from_u32(code).unwrap();
                assert_eq!(table.glyph(c).unwrap().rows().len(), 8);
            }
        }
    }
}
