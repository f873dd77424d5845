use std::fs;
use std::path::{Path, PathBuf};

use crate::blocks::{load_blocks, load_page, Block};
use crate::config::SiteConfig;
use crate::error::{BlockError, Result};
use crate::pages::PageIndex;
use crate::render::{render_body, render_page};
use crate::validate::{ensure_valid, validate_blocks};

fn load_pages(path: Option<&Path>) -> Result<PageIndex> {
    match path {
        Some(p) => PageIndex::load(p),
        None => Ok(PageIndex::default()),
    }
}

/// Print to stdout, or write to `output` when given
fn emit(html: &str, output: Option<PathBuf>) -> Result<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, html)?;
            eprintln!("Wrote {}", path.display());
        }
        None => println!("{}", html),
    }
    Ok(())
}

fn check(blocks: &[Block], pages: &PageIndex, skip_validation: bool) -> Result<()> {
    if skip_validation {
        for problem in validate_blocks(blocks, pages) {
            eprintln!("Warning: {}", problem);
        }
        Ok(())
    } else {
        ensure_valid(blocks, pages)
    }
}

pub fn handle_render(
    file: PathBuf,
    pages: Option<PathBuf>,
    output: Option<PathBuf>,
    skip_validation: bool,
) -> Result<()> {
    let blocks = load_blocks(&file)?;
    let pages = load_pages(pages.as_deref())?;

    check(&blocks, &pages, skip_validation)?;

    let html = render_body(&blocks, &pages);
    emit(&html, output)
}

pub fn handle_page(
    file: PathBuf,
    pages: Option<PathBuf>,
    config: Option<PathBuf>,
    output: Option<PathBuf>,
    skip_validation: bool,
) -> Result<()> {
    let page = load_page(&file)?;
    let pages = load_pages(pages.as_deref())?;
    let config = SiteConfig::load_or_default(config.as_deref())?;

    check(&page.body, &pages, skip_validation)?;

    let html = render_page(&page, &pages, &config);
    emit(html.trim_end(), output)
}

pub fn handle_validate(file: PathBuf, page: bool, pages: Option<PathBuf>, json: bool) -> Result<()> {
    let blocks = if page {
        load_page(&file)?.body
    } else {
        load_blocks(&file)?
    };
    let pages = load_pages(pages.as_deref())?;

    let problems = validate_blocks(&blocks, &pages);

    if json {
        println!("{}", serde_json::to_string_pretty(&problems)?);
    } else if problems.is_empty() {
        println!("{}: {} block(s), no problems found.", file.display(), blocks.len());
    } else {
        println!("{}: {} problem(s)\n", file.display(), problems.len());
        for problem in &problems {
            println!("  {}", problem);
        }
    }

    if problems.is_empty() {
        Ok(())
    } else {
        // The list was already printed above
        Err(BlockError::ValidationFailed(problems.len()))
    }
}
