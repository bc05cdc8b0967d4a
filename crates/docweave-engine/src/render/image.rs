use std::path::PathBuf;

use super::FetchError;

/// Decides whether an image can be shown and what `src` to emit for it.
pub trait ImageResolver {
    fn resolve(&self, url: &str) -> Result<String, FetchError>;
}

/// Accepts every URL unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughResolver;

impl ImageResolver for PassthroughResolver {
    fn resolve(&self, url: &str) -> Result<String, FetchError> {
        Ok(url.to_string())
    }
}

/// Checks local image paths on disk.
///
/// `http(s)://` and `data:` URLs pass unchanged. Any other scheme is
/// unsupported. Everything else is a path, resolved against `root` when one
/// is set, and must name an existing file.
#[derive(Debug, Clone, Default)]
pub struct LocalImageResolver {
    root: Option<PathBuf>,
}

impl LocalImageResolver {
    const REMOTE_PREFIXES: [&'static str; 3] = ["http://", "https://", "data:"];

    pub fn new(root: Option<PathBuf>) -> Self {
        Self { root }
    }

    fn is_remote(url: &str) -> bool {
        let lower = url.to_ascii_lowercase();
        Self::REMOTE_PREFIXES.iter().any(|p| lower.starts_with(p))
    }
}

impl ImageResolver for LocalImageResolver {
    fn resolve(&self, url: &str) -> Result<String, FetchError> {
        if Self::is_remote(url) {
            return Ok(url.to_string());
        }
        if url.contains("://") {
            return Err(FetchError::Unsupported(url.to_string()));
        }

        let path = match &self.root {
            Some(root) => root.join(url),
            None => PathBuf::from(url),
        };
        if path.is_file() {
            log::debug!("resolved image {url} to {}", path.display());
            Ok(url.to_string())
        } else {
            Err(FetchError::NotFound(path))
        }
    }
}
