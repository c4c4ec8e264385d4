use globwalk::{GlobError, GlobWalker};
use image::imageops;
use std::fs;
use std::path::{Path, PathBuf};

pub mod arguments;
pub mod error;
pub mod quadrant;

use crate::arguments::Config;
use crate::error::SplitError;
use crate::quadrant::quadrants;

fn build_glob_walker(root: &Path, name: &str) -> Result<GlobWalker, GlobError> {
    globwalk::GlobWalkerBuilder::from_patterns(root, &[format!("**/{name}")])
        .follow_links(true)
        .case_insensitive(true)
        .build()
}

/// Returns the first match for `name` in traversal order, trying each search
/// root in turn. Roots that do not exist are skipped.
fn locate(name: &str, roots: &[PathBuf]) -> Result<PathBuf, SplitError> {
    for root in roots {
        if !root.is_dir() {
            continue;
        }

        let walker = build_glob_walker(root, name)?;
        let mut matches = walker.into_iter().filter_map(Result::ok);

        if let Some(entry) = matches.next() {
            return Ok(entry.path().to_path_buf());
        }
    }

    Err(SplitError::NotFound {
        name: name.to_string(),
        roots: roots.to_vec(),
    })
}

pub fn run(config: &Config) -> Result<(), SplitError> {
    let mut roots = vec![config.path.clone()];
    roots.extend(config.fallback.clone());

    let source = locate(&config.name, &roots)?;

    fs::create_dir_all(&config.output)?;

    // JPEG output cannot carry an alpha channel, so flatten to RGB up front.
    let img = image::open(&source)?.to_rgb8();
    let (width, height) = img.dimensions();

    for quad in quadrants(width, height)? {
        let tile = imageops::crop_imm(
            &img,
            quad.rect.left,
            quad.rect.top,
            quad.rect.width(),
            quad.rect.height(),
        )
        .to_image();

        tile.save(config.output.join(quad.file_name()))?;
    }

    println!(
        "Success: Split {} into 4 images in {}",
        source.display(),
        config.output.display()
    );

    Ok(())
}
