//! Image input resolution and validation
//!
//! Nothing here touches the network: every check runs before a request is
//! issued.

use std::path::{Path, PathBuf};
use tuners_types::{Error, ImagePayload, ImageSource, Result};
use url::Url;

/// Image extensions offered by the file picker
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif", "bmp"];

/// Pick the image to classify. A file wins over a URL; a blank URL counts as
/// no URL.
pub fn resolve_source(file: Option<PathBuf>, url: Option<&str>) -> Result<ImageSource> {
    if let Some(path) = file {
        return Ok(ImageSource::File(path));
    }

    match url.map(str::trim) {
        Some(url) if !url.is_empty() => Ok(ImageSource::Url(url.to_string())),
        _ => Err(Error::NoInput),
    }
}

/// Parse an image URL; only http(s) is accepted
pub fn parse_image_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim())?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(Error::InvalidUrl(format!(
            "unsupported scheme `{}` in {}",
            scheme, raw
        ))),
    }
}

/// Read an image file and check that its contents look like an image
pub fn read_image_file(path: &Path) -> Result<Vec<u8>> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }

    if !path.is_file() {
        return Err(Error::InvalidImageFormat(format!(
            "{} is not a file",
            path.display()
        )));
    }

    let bytes = std::fs::read(path)?;
    if bytes.is_empty() {
        return Err(Error::InvalidImageFormat(format!(
            "{} is empty",
            path.display()
        )));
    }

    image::guess_format(&bytes).map_err(|_| {
        Error::InvalidImageFormat(format!("{} is not a recognised image", path.display()))
    })?;

    Ok(bytes)
}

/// Validate a source and turn it into a request payload
pub fn load_payload(source: &ImageSource) -> Result<ImagePayload> {
    match source {
        ImageSource::File(path) => read_image_file(path).map(ImagePayload::Bytes),
        ImageSource::Url(raw) => parse_image_url(raw).map(ImagePayload::Url),
    }
}
