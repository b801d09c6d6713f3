use std::env;
use std::path::{Path, PathBuf};

use rowfont::{BuiltinFonts, DirFonts, FontSource, RenderError, read_font_file};

const FONT_DIR_VAR: &str = "BANNERLET_FONT_DIR";
const DEFAULT_FONT_DIR: &str = "/etc/bannerlet/fonts";

/// Resolves font names against every place bannerlet knows about, in order:
/// a literal file path, the font directory, then the embedded fonts.
pub struct Catalog {
    dir: DirFonts,
}

impl Catalog {
    pub fn new(dir_override: Option<PathBuf>) -> Self {
        let dir = dir_override
            .or_else(|| env::var_os(FONT_DIR_VAR).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_FONT_DIR));
        Catalog {
            dir: DirFonts::new(dir),
        }
    }
}

impl FontSource for Catalog {
    fn read(&self, name: &str) -> Result<Vec<String>, RenderError> {
        let path = Path::new(name);
        if path.is_file() {
            return read_font_file(path);
        }

        match self.dir.read(name) {
            Err(RenderError::FontNotFound(_)) => {}
            other => return other,
        }

        BuiltinFonts.read(name)
    }
}
