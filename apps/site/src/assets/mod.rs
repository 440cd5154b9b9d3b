// Static site assets: stylesheet, resume document and profile photo.
// Everything is read once at startup; a missing or broken asset aborts before any rendering.

pub mod loader;

use std::fmt;
use std::path::{Path, PathBuf};

use bytes::Bytes;
use image::ImageFormat;
use thiserror::Error;

pub use loader::load_assets;

pub const STYLESHEET_PATH: &str = "styles/main.css";
pub const RESUME_PATH: &str = "assets/burakork-resume.pdf";
pub const PHOTO_PATH: &str = "p.jpg";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Stylesheet,
    Resume,
    Photo,
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AssetKind::Stylesheet => "stylesheet",
            AssetKind::Resume => "resume",
            AssetKind::Photo => "profile photo",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("{kind} not found at {}", path.display())]
    Missing { kind: AssetKind, path: PathBuf },

    #[error("failed to read {kind} at {}: {source}", path.display())]
    Read {
        kind: AssetKind,
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("profile photo at {} could not be decoded: {source}", path.display())]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
}

/// The three asset locations, resolved against a site root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPaths {
    pub stylesheet: PathBuf,
    pub resume: PathBuf,
    pub photo: PathBuf,
}

impl AssetPaths {
    pub fn under(root: &Path) -> Self {
        Self {
            stylesheet: root.join(STYLESHEET_PATH),
            resume: root.join(RESUME_PATH),
            photo: root.join(PHOTO_PATH),
        }
    }
}

/// A binary document served back verbatim under its original file name.
#[derive(Debug, Clone)]
pub struct Document {
    pub file_name: String,
    pub data: Bytes,
}

#[derive(Debug, Clone)]
pub struct Photo {
    pub file_name: String,
    pub format: ImageFormat,
    pub width: u32,
    pub height: u32,
    pub data: Bytes,
}

impl Photo {
    pub fn content_type(&self) -> &'static str {
        self.format.to_mime_type()
    }
}

#[derive(Debug, Clone)]
pub struct LoadedAssets {
    pub stylesheet: String,
    pub resume: Document,
    pub photo: Photo,
}
