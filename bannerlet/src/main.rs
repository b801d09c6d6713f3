//! # bannerlet
//!
//! A simple program that renders text as multi-row ASCII banners.
//!
//! ## Usage
//!
//! ```sh
//! bannerlet Hello world
//! bannerlet --font shadow "Hello world"
//! bannerlet --output banner.txt "first line\nsecond line"
//! ```
//!
//! The literal sequence `\n` inside the text starts a new banner line, and
//! a blank line in the input stays a single blank line in the output.
//!
//! ## Font Resolution
//!
//! When you pick a font with the `-f` flag, bannerlet uses the following
//! strategy to find it:
//!
//! 1. Try to interpret the name as a path to a font file.
//! 2. Try `<name>.txt` in the font directory (`--font-dir`, else the
//!    `BANNERLET_FONT_DIR` environment variable, else `/etc/bannerlet/fonts`).
//! 3. Try the fonts built into bannerlet (`standard`, `shadow`).

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use env_logger::Builder;

use catalog::Catalog;
mod catalog;

/// Render text as a multi-row ASCII banner
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[clap(after_help = "
\x1b[1;4mFONT RESOLUTION:\x1b[0m
  bannerlet uses the following strategy to find fonts:
  1. Try to interpret the name as a path to a font file.
  2. Try `<name>.txt` in the font directory (`--font-dir`, else `BANNERLET_FONT_DIR`, else `/etc/bannerlet/fonts`).
  3. Try the fonts built into bannerlet (`standard`, `shadow`).
")]
struct Args {
    /// The text that should get rendered
    #[arg(required = true)]
    text: Vec<String>,

    /// The font to render with
    #[arg(short, long, default_value = "standard")]
    font: String,

    /// Directory to look up fonts in
    #[arg(long)]
    font_dir: Option<PathBuf>,

    /// Write the banner to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    Builder::from_default_env()
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .format_module_path(false)
        .init();

    let args = Args::parse();
    let catalog = Catalog::new(args.font_dir);

    let input_text: String = args.text.join(" ");
    let banner = match rowfont::render_text(&catalog, &input_text, &args.font) {
        Ok(banner) => banner,
        Err(err) => {
            log::error!("{}", err);
            return 1.into();
        }
    };

    match args.output {
        Some(path) => {
            if let Err(err) = std::fs::write(&path, &banner) {
                log::error!("failed to write `{}`: {}", path.display(), err);
                return 1.into();
            }
        }
        None => println!("{}", banner),
    }
    0.into()
}
