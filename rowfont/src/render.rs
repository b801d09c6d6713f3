use crate::RenderError;
use crate::font::FontSource;
use crate::table::GlyphTable;

/// Render one line of text into its banner rows.
///
/// The result always has exactly `table.height()` rows; row `r` is the
/// left-to-right concatenation of row `r` of every character's glyph, with
/// no separator added between adjacent glyphs. An empty line renders as
/// `height` empty rows.
///
/// A character outside the table's range fails the whole line with
/// [`RenderError::UnsupportedCharacter`] instead of being substituted, so
/// the caller can reject the input rather than emit a corrupted banner.
pub fn render_line(line: &str, table: &GlyphTable) -> Result<Vec<String>, RenderError> {
    let mut rows = vec![String::new(); table.height()];
    for c in line.chars() {
        let glyph = table
            .glyph(c)
            .ok_or(RenderError::UnsupportedCharacter(c))?;
        for (row, glyph_row) in rows.iter_mut().zip(glyph.rows()) {
            row.push_str(glyph_row);
        }
    }
    Ok(rows)
}

/// Render input text into a complete banner using the named font.
///
/// The literal two-character sequence `\n` marks a line break and carriage
/// returns are stripped; the remaining logical lines are rendered with one
/// glyph table, built once per call. A blank or whitespace-only logical
/// line contributes a single blank output line, not `height` empty rows,
/// so paragraph gaps stay one line tall.
///
/// The returned string carries no trailing newline beyond what joining the
/// rows produces.
pub fn render_text(
    source: &dyn FontSource,
    input: &str,
    font_name: &str,
) -> Result<String, RenderError> {
    let table = GlyphTable::build(source, font_name)?;

    let input = input.replace("\\n", "\n").replace('\r', "");

    let mut output = Vec::new();
    for line in input.split('\n') {
        if line.trim().is_empty() {
            output.push(String::new());
            continue;
        }
        output.extend(render_line(line, &table)?);
    }
    Ok(output.join("\n"))
}
