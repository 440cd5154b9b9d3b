use std::io;
use std::path::Path;

use bytes::Bytes;
use tracing::info;

use crate::assets::{AssetError, AssetKind, AssetPaths, Document, LoadedAssets, Photo};

/// Reads all three assets. Fails on the first missing, unreadable or undecodable one.
pub fn load_assets(paths: &AssetPaths) -> Result<LoadedAssets, AssetError> {
    let stylesheet = std::fs::read_to_string(&paths.stylesheet)
        .map_err(|source| read_error(AssetKind::Stylesheet, &paths.stylesheet, source))?;
    info!(
        "Loaded stylesheet {} ({} bytes)",
        paths.stylesheet.display(),
        stylesheet.len()
    );

    let resume = Document {
        file_name: file_name_of(&paths.resume),
        data: read_bytes(AssetKind::Resume, &paths.resume)?,
    };
    info!(
        "Loaded resume {} ({} bytes)",
        paths.resume.display(),
        resume.data.len()
    );

    let photo = load_photo(&paths.photo)?;
    info!(
        "Loaded profile photo {} ({:?} {}x{})",
        paths.photo.display(),
        photo.format,
        photo.width,
        photo.height
    );

    Ok(LoadedAssets {
        stylesheet,
        resume,
        photo,
    })
}

fn load_photo(path: &Path) -> Result<Photo, AssetError> {
    let data = read_bytes(AssetKind::Photo, path)?;

    let decode_error = |source| AssetError::Decode {
        path: path.to_path_buf(),
        source,
    };
    let format = image::guess_format(&data).map_err(decode_error)?;
    let decoded = image::load_from_memory_with_format(&data, format).map_err(decode_error)?;

    Ok(Photo {
        file_name: file_name_of(path),
        format,
        width: decoded.width(),
        height: decoded.height(),
        data,
    })
}

fn read_bytes(kind: AssetKind, path: &Path) -> Result<Bytes, AssetError> {
    std::fs::read(path)
        .map(Bytes::from)
        .map_err(|source| read_error(kind, path, source))
}

fn read_error(kind: AssetKind, path: &Path, source: io::Error) -> AssetError {
    if source.kind() == io::ErrorKind::NotFound {
        AssetError::Missing {
            kind,
            path: path.to_path_buf(),
        }
    } else {
        AssetError::Read {
            kind,
            path: path.to_path_buf(),
            source,
        }
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
