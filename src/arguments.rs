use clap::Parser;
use directories::UserDirs;
use std::path::PathBuf;

/// Basename the original upload is stored under.
pub const DEFAULT_SOURCE_NAME: &str = "media__1771040804991.jpg";

/// Directory under the home directory searched when the working tree has no match.
pub const FALLBACK_DIR_NAME: &str = ".gemini";

pub const DEFAULT_OUTPUT_DIR: &str = "src/assets/carousel";

#[derive(Parser, Debug, Default)]
#[clap(
    version,
    about = "A tool to split one source image into a 2x2 grid of story tiles."
)]
pub struct Arguments {
    /// File name of the source image to search for
    #[clap(
        short,
        long,
        default_value = DEFAULT_SOURCE_NAME,
        help = "File name of the source image to search for"
    )]
    pub name: String,

    /// Directory tree searched first for the source image
    #[clap(
        short,
        long,
        default_value = ".",
        help = "Directory tree searched first for the source image"
    )]
    pub path: PathBuf,

    /// Directory tree searched when nothing matches under --path [default: ~/.gemini]
    #[clap(
        short,
        long,
        help = "Directory tree searched when nothing matches under --path"
    )]
    pub fallback: Option<PathBuf>,

    /// Directory the four tiles are written to
    #[clap(
        short,
        long,
        default_value = DEFAULT_OUTPUT_DIR,
        help = "Directory the four tiles are written to"
    )]
    pub output: PathBuf,
}

/// Validated arguments, with the fallback root resolved.
#[derive(Debug, PartialEq)]
pub struct Config {
    pub name: String,
    pub path: PathBuf,
    pub fallback: Option<PathBuf>,
    pub output: PathBuf,
}

impl Arguments {
    pub fn validate(&self) -> Result<Config, String> {
        if !self.path.exists() {
            return Err(format!("The path {:?} does not exist.", self.path));
        }
        if !self.path.is_dir() {
            return Err(format!("{:?} is not a directory.", self.path));
        }
        if self.name.is_empty() {
            return Err(String::from("The source file name must not be empty"));
        }
        if self.name.contains('/') || self.name.contains('\\') {
            return Err(format!(
                "{:?} is not a bare file name; pass the search root with --path instead",
                self.name
            ));
        }

        let fallback = self.fallback.clone().or_else(default_fallback_root);

        Ok(Config {
            name: self.name.clone(),
            path: self.path.clone(),
            fallback,
            output: self.output.clone(),
        })
    }
}

// None when no home directory can be determined; the locator then skips the
// fallback step entirely.
fn default_fallback_root() -> Option<PathBuf> {
    UserDirs::new().map(|dirs| dirs.home_dir().join(FALLBACK_DIR_NAME))
}
