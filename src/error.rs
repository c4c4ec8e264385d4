use std::path::PathBuf;
use thiserror::Error;

/// Crate-wide error type. Every failure is fatal; the entry point maps each
/// variant to a process exit code via [`SplitError::exit_code`].
#[derive(Debug, Error)]
pub enum SplitError {
    /// The source image was not found in any search root.
    #[error("could not find {name:?} under {}", format_roots(.roots))]
    NotFound { name: String, roots: Vec<PathBuf> },

    /// The search pattern did not compile.
    #[error("invalid search pattern: {0}")]
    Pattern(#[from] globwalk::GlobError),

    /// Decoding the source or encoding a tile failed.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// Creating the output directory or writing a tile failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The decoded source has a zero dimension.
    #[error("cannot split a {width}x{height} image into quadrants")]
    EmptyImage { width: u32, height: u32 },
}

impl SplitError {
    /// A missing source exits with 1, matching the one failure the original
    /// tool coded explicitly. Everything else exits with 2.
    pub fn exit_code(&self) -> i32 {
        match self {
            SplitError::NotFound { .. } => 1,
            _ => 2,
        }
    }
}

fn format_roots(roots: &[PathBuf]) -> String {
    roots
        .iter()
        .map(|root| format!("{:?}", root))
        .collect::<Vec<_>>()
        .join(" or ")
}
