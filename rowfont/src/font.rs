use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::RenderError;

const STANDARD: &str = include_str!("../fonts/standard.txt");
const SHADOW: &str = include_str!("../fonts/shadow.txt");

/// A source of raw font definitions, looked up by name.
///
/// Implementations may serve fonts from embedded data, the filesystem, or
/// anywhere else. A lookup either yields the complete, ordered row sequence
/// of the definition or fails with [`RenderError::FontNotFound`].
pub trait FontSource {
    fn read(&self, name: &str) -> Result<Vec<String>, RenderError>;
}

/// The fonts compiled into this crate: `standard` and `shadow`.
pub struct BuiltinFonts;

impl FontSource for BuiltinFonts {
    fn read(&self, name: &str) -> Result<Vec<String>, RenderError> {
        let data = match name {
            "standard" => STANDARD,
            "shadow" => SHADOW,
            _ => return Err(RenderError::FontNotFound(name.to_string())),
        };
        Ok(data.lines().map(str::to_string).collect())
    }
}

/// Serves fonts stored as `<name>.txt` files in a directory.
pub struct DirFonts {
    dir: PathBuf,
}

impl DirFonts {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        DirFonts { dir: dir.into() }
    }
}

impl FontSource for DirFonts {
    fn read(&self, name: &str) -> Result<Vec<String>, RenderError> {
        let path = self.dir.join(format!("{name}.txt"));
        match read_font_file(&path) {
            Err(RenderError::FontUnreadable(_, err)) if err.kind() == ErrorKind::NotFound => {
                Err(RenderError::FontNotFound(name.to_string()))
            }
            other => other,
        }
    }
}

/// Read a font definition from an explicit file path.
pub fn read_font_file(path: &Path) -> Result<Vec<String>, RenderError> {
    let data = fs::read_to_string(path)
        .map_err(|err| RenderError::FontUnreadable(path.to_path_buf(), err))?;
    Ok(data.lines().map(str::to_string).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CHAR_COUNT;

    #[test]
    fn builtin_fonts_cover_the_printable_range() {
        for name in ["standard", "shadow"] {
            let rows = BuiltinFonts.read(name).unwrap();
            assert_eq!(rows.len(), CHAR_COUNT * 8, "font `{name}`");
        }
    }

    #[test]
    fn unknown_builtin_name_is_font_not_found() {
        let result = BuiltinFonts.read("graffiti");
        assert!(matches!(result, Err(RenderError::FontNotFound(name)) if name == "graffiti"));
    }

    #[test]
    fn missing_font_file_is_font_not_found() {
        let source = DirFonts::new("/nonexistent/fonts");
        let result = source.read("standard");
        assert!(matches!(result, Err(RenderError::FontNotFound(_))));
    }
}
