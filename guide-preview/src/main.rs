//! Guide Preview: renders one guidebook frame without a window.
//!
//! Loads every `.md` file of a directory, opens the book at the requested
//! screen size and prints the resulting draw commands as JSON.  Useful for
//! checking page layout and chrome placement from a shell.
//!
//! ```text
//! guide-preview <pages-dir> [width] [height] [--page /path.md]
//!               [--bookmark /path.md]... [--config guide.json] [--shaped]
//! ```

use std::error::Error;
use std::path::PathBuf;

use log::info;

use guide_book::{GuideBook, MemoryPages};
use guide_core::GuideConfig;
use guide_render::FrameStats;
use guide_text::{CosmicMetrics, FixedMetrics, TextMetrics};

const USAGE: &str = "usage: guide-preview <pages-dir> [width] [height] [--page PATH] \
                     [--bookmark PATH]... [--config FILE] [--shaped]";

/// Parsed command line.
#[derive(Debug)]
struct Options {
    pages_dir: PathBuf,
    width: i32,
    height: i32,
    page: Option<String>,
    bookmarks: Vec<String>,
    config: Option<PathBuf>,
    shaped: bool,
}

impl Options {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self, String> {
        let mut positional = Vec::new();
        let mut page = None;
        let mut bookmarks = Vec::new();
        let mut config = None;
        let mut shaped = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--page" => page = Some(args.next().ok_or("--page needs a path")?),
                "--bookmark" => bookmarks.push(args.next().ok_or("--bookmark needs a path")?),
                "--config" => config = Some(PathBuf::from(args.next().ok_or("--config needs a file")?)),
                "--shaped" => shaped = true,
                "-h" | "--help" => return Err(USAGE.to_owned()),
                _ => positional.push(arg),
            }
        }

        let mut positional = positional.into_iter();
        let pages_dir = positional.next().map(PathBuf::from).ok_or(USAGE)?;
        let width = parse_dimension(positional.next(), 1280)?;
        let height = parse_dimension(positional.next(), 800)?;
        if let Some(extra) = positional.next() {
            return Err(format!("unexpected argument {extra:?}\n{USAGE}"));
        }

        Ok(Self {
            pages_dir,
            width,
            height,
            page,
            bookmarks,
            config,
            shaped,
        })
    }
}

fn parse_dimension(arg: Option<String>, default: i32) -> Result<i32, String> {
    match arg {
        None => Ok(default),
        Some(text) => match text.parse::<i32>() {
            Ok(value) if value > 0 => Ok(value),
            _ => Err(format!("invalid screen dimension {text:?}")),
        },
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let options = Options::parse(std::env::args().skip(1))?;
    let config = match &options.config {
        Some(path) => GuideConfig::load(path)?,
        None => GuideConfig::default(),
    };
    let pages = MemoryPages::load_dir(&options.pages_dir)?;
    info!(
        "Loaded {} pages from {}",
        pages.len(),
        options.pages_dir.display()
    );

    let metrics: Box<dyn TextMetrics> = if options.shaped {
        Box::new(CosmicMetrics::new(9.0, 12.0))
    } else {
        Box::new(FixedMetrics::default())
    };
    let mut book = GuideBook::new(config, pages, metrics, options.width, options.height)?;
    for path in &options.bookmarks {
        if !book.add_bookmark(path) {
            log::warn!("Could not bookmark {path}");
        }
    }
    if let Some(path) = &options.page {
        book.set_page(path);
    }

    let frame = book.render(-1, -1, 0.0);
    let stats: FrameStats = frame.stats();
    info!(
        "Rendered {} at {}×{}: {} quads, {} solids, {} texts, {} draw calls",
        book.active_page().path(),
        options.width,
        options.height,
        stats.quad_count,
        stats.solid_count,
        stats.text_count,
        stats.draw_calls
    );

    println!("{}", serde_json::to_string_pretty(&frame)?);
    Ok(())
}
