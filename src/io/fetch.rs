//! Archive download and extraction.
//!
//! Downloads go through the `ArchiveFetcher` trait so the fetch-and-sort flow
//! can run against in-memory archives. `HttpFetcher` is the blocking `reqwest`
//! implementation used by the CLI.
use std::io::Cursor;
use std::path::Path;

use tracing::{debug, info};
use zip::ZipArchive;

use crate::error::Result;

pub trait ArchiveFetcher {
    /// Fetch the raw archive bytes behind `url`.
    fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("texprep/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

impl ArchiveFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.client.get(url).send()?.error_for_status()?;
        let bytes = response.bytes()?;
        debug!("Fetched {} bytes from {}", bytes.len(), url);
        Ok(bytes.to_vec())
    }
}

/// Extract every entry of a zip archive into `dest`. Returns the entry count.
pub fn extract_zip(bytes: &[u8], dest: &Path) -> Result<usize> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;
    let entries = archive.len();
    archive.extract(dest)?;
    info!("Extracted {} entries into {:?}", entries, dest);
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    fn zip_of(files: &[(&str, &[u8])]) -> Vec<u8> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        for (name, data) in files {
            writer.start_file(*name, SimpleFileOptions::default()).unwrap();
            writer.write_all(data).unwrap();
        }
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn test_extract_keeps_directory_structure() {
        let dir = tempfile::tempdir().unwrap();
        let bytes = zip_of(&[("Rock/Rock_Normal.png", b"n"), ("Rock/readme.txt", b"r")]);
        assert_eq!(extract_zip(&bytes, dir.path()).unwrap(), 2);
        assert_eq!(std::fs::read(dir.path().join("Rock/Rock_Normal.png")).unwrap(), b"n");
        assert!(dir.path().join("Rock/readme.txt").is_file());
    }

    #[test]
    fn test_garbage_is_an_archive_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = extract_zip(b"not a zip", dir.path()).unwrap_err();
        assert!(matches!(err, crate::Error::Archive(_)));
    }
}
