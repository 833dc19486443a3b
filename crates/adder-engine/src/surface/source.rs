use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use image::imageops::FilterType;

use crate::paint::{Color, ColorError};

use super::Surface;

/// Everything the surface provider knows how to turn into a bitmap.
#[derive(Debug, Clone)]
pub enum SurfaceSource {
    Color(Color),
    Surface(Surface),
    Path(PathBuf),
    /// Encoded image bytes (PNG, JPEG, ...).
    Bytes(Vec<u8>),
    /// Remote reference; resolved by the loader's [`Fetch`] implementation.
    Network(String),
}

const IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "bmp", "gif", "ico", "tif", "tiff", "webp",
];

impl SurfaceSource {
    /// Classifies a user supplied string.
    ///
    /// - `#rrggbb` or `r,g,b` is a color (channel errors are reported as
    ///   [`SurfaceError::ColorRange`])
    /// - `http://`, `https://` and `ftp://` are network references
    /// - anything with a known image extension is a path
    pub fn parse(s: &str) -> Result<Self, SurfaceError> {
        let s = s.trim();
        if s.starts_with('#') || s.contains(',') {
            return Color::parse(s)
                .map(SurfaceSource::Color)
                .map_err(SurfaceError::ColorRange);
        }
        if ["http://", "https://", "ftp://"].iter().any(|p| s.starts_with(p)) {
            return Ok(SurfaceSource::Network(s.to_string()));
        }
        let known = Path::new(s)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| IMAGE_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
            .unwrap_or(false);
        if known {
            Ok(SurfaceSource::Path(PathBuf::from(s)))
        } else {
            Err(SurfaceError::Unsupported(format!("not a color, url or image path: {s:?}")))
        }
    }
}

impl From<Color> for SurfaceSource {
    fn from(c: Color) -> Self {
        SurfaceSource::Color(c)
    }
}

impl From<Surface> for SurfaceSource {
    fn from(s: Surface) -> Self {
        SurfaceSource::Surface(s)
    }
}

/// Retrieves the bytes behind a [`SurfaceSource::Network`] reference.
///
/// The engine ships no implementation; applications plug in whatever
/// downloader they use.
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, SurfaceError>;
}

/// Error returned by [`SurfaceLoader`].
#[derive(Debug)]
pub enum SurfaceError {
    /// The source kind or image format cannot be handled.
    Unsupported(String),
    /// A color source had invalid channels.
    ColorRange(ColorError),
    Io { path: PathBuf, source: io::Error },
    Decode(image::ImageError),
    /// The injected fetcher failed.
    Fetch(String),
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceError::Unsupported(msg) => write!(f, "unsupported surface source: {msg}"),
            SurfaceError::ColorRange(e) => write!(f, "invalid color source: {e}"),
            SurfaceError::Io { path, source } => write!(f, "failed to read {}: {source}", path.display()),
            SurfaceError::Decode(e) => write!(f, "failed to decode image: {e}"),
            SurfaceError::Fetch(msg) => write!(f, "failed to fetch image: {msg}"),
        }
    }
}

impl std::error::Error for SurfaceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SurfaceError::ColorRange(e) => Some(e),
            SurfaceError::Io { source, .. } => Some(source),
            SurfaceError::Decode(e) => Some(e),
            _ => None,
        }
    }
}

impl From<image::ImageError> for SurfaceError {
    fn from(e: image::ImageError) -> Self {
        match e {
            image::ImageError::Unsupported(u) => SurfaceError::Unsupported(u.to_string()),
            other => SurfaceError::Decode(other),
        }
    }
}

/// Surface provider.
#[derive(Default)]
pub struct SurfaceLoader {
    fetcher: Option<Box<dyn Fetch>>,
}

impl SurfaceLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables [`SurfaceSource::Network`] sources.
    pub fn with_fetcher(mut self, fetcher: impl Fetch + 'static) -> Self {
        self.fetcher = Some(Box::new(fetcher));
        self
    }

    /// Loads `source` at its natural size. Colors produce a 1×1 surface.
    pub fn load(&self, source: SurfaceSource) -> Result<Surface, SurfaceError> {
        match source {
            SurfaceSource::Color(c) => Ok(Surface::filled(1, 1, c)),
            SurfaceSource::Surface(s) => Ok(s),
            SurfaceSource::Path(path) => {
                let bytes = std::fs::read(&path).map_err(|source| SurfaceError::Io { path: path.clone(), source })?;
                log::debug!("decoding image {} ({} bytes)", path.display(), bytes.len());
                decode(&bytes)
            }
            SurfaceSource::Bytes(bytes) => decode(&bytes),
            SurfaceSource::Network(url) => {
                let Some(fetcher) = &self.fetcher else {
                    return Err(SurfaceError::Unsupported(format!("no fetcher configured for {url}")));
                };
                let bytes = fetcher.fetch(&url)?;
                log::debug!("fetched {url} ({} bytes)", bytes.len());
                decode(&bytes)
            }
        }
    }

    /// Loads `source` and fits it to exactly `width × height`.
    ///
    /// Colors fill the whole area; bitmaps of a different size are resampled.
    pub fn load_fitted(&self, source: SurfaceSource, width: u32, height: u32) -> Result<Surface, SurfaceError> {
        if let SurfaceSource::Color(c) = source {
            return Ok(Surface::filled(width, height, c));
        }
        let surface = self.load(source)?;
        if surface.width() == width && surface.height() == height {
            return Ok(surface);
        }
        let resized = image::imageops::resize(surface.image(), width, height, FilterType::Triangle);
        Ok(Surface::from_image(resized))
    }
}

fn decode(bytes: &[u8]) -> Result<Surface, SurfaceError> {
    let img = image::load_from_memory(bytes)?;
    Ok(Surface::from_image(img.to_rgba8()))
}
