//! Transport trait and the built-in transports
//!
//! The loader never picks a transport itself; callers inject one.

use async_trait::async_trait;
use std::collections::HashMap;
use std::io;
use std::path::PathBuf;

/// Retrieves document text from a location.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Whether this transport can retrieve `location` at all
    fn handles(&self, location: &str) -> bool;

    /// Retrieve the text at `location`
    async fn fetch(&self, location: &str) -> io::Result<String>;
}

/// Reads local files: plain paths and `file://` URLs.
///
/// A URL may name the local host (`file://localhost/...`) and may
/// percent-encode its path (`%20` for a space). Other hosts are not read.
#[derive(Debug, Clone, Default)]
pub struct FileTransport {
    root: Option<PathBuf>,
}

impl FileTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve relative paths against `root`
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    fn resolve(&self, location: &str) -> PathBuf {
        let path = match location.strip_prefix("file://") {
            Some(url_path) => {
                let url_path = url_path.strip_prefix("localhost").unwrap_or(url_path);
                PathBuf::from(percent_decode(url_path))
            }
            None => PathBuf::from(location),
        };
        match &self.root {
            Some(root) if path.is_relative() => root.join(path),
            _ => path,
        }
    }
}

/// Decode `%XX` escapes; malformed escapes are kept as written
fn percent_decode(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        let escape = (bytes[i] == b'%')
            .then(|| text.get(i + 1..i + 3))
            .flatten()
            .filter(|hex| hex.bytes().all(|b| b.is_ascii_hexdigit()))
            .and_then(|hex| u8::from_str_radix(hex, 16).ok());
        match escape {
            Some(byte) => {
                decoded.push(byte);
                i += 3;
            }
            None => {
                decoded.push(bytes[i]);
                i += 1;
            }
        }
    }
    String::from_utf8(decoded).unwrap_or_else(|_| text.to_string())
}

#[async_trait]
impl Transport for FileTransport {
    fn handles(&self, location: &str) -> bool {
        location.starts_with("file://") || !location.contains("://")
    }

    async fn fetch(&self, location: &str) -> io::Result<String> {
        tokio::fs::read_to_string(self.resolve(location)).await
    }
}

/// Serves documents from memory, keyed by location.
#[derive(Debug, Clone, Default)]
pub struct StaticTransport {
    documents: HashMap<String, String>,
}

impl StaticTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, location: impl Into<String>, text: impl Into<String>) -> Self {
        self.documents.insert(location.into(), text.into());
        self
    }
}

#[async_trait]
impl Transport for StaticTransport {
    fn handles(&self, location: &str) -> bool {
        self.documents.contains_key(location)
    }

    async fn fetch(&self, location: &str) -> io::Result<String> {
        self.documents.get(location).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("no document at {location}"))
        })
    }
}
