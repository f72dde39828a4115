//! Chunked installer download.

use std::fs::{self, File};
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::error::{NvduError, Result};

const CHUNK_SIZE: usize = 8 * 1024;

/// Result of a finished download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadOutcome {
    pub path: PathBuf,
    pub bytes: u64,
    pub expected: Option<u64>,
}

/// Target file name: last path segment of the URL
pub fn file_name_from_url(url: &str) -> Result<String> {
    let parsed =
        Url::parse(url).map_err(|e| NvduError::download(format!("invalid URL '{}': {}", url, e)))?;

    parsed
        .path_segments()
        .and_then(|mut segments| segments.next_back())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .ok_or_else(|| NvduError::download(format!("URL '{}' has no file name", url)))
}

/// Copy `reader` into `dest` chunk by chunk
///
/// `on_progress(written, expected)` is called after every chunk. When
/// `cancel` is raised, or fewer than `expected` bytes arrive, the partial
/// file is removed and an error returned.
pub fn write_stream<R: Read>(
    mut reader: R,
    dest: &Path,
    expected: Option<u64>,
    cancel: &AtomicBool,
    mut on_progress: impl FnMut(u64, Option<u64>),
) -> Result<DownloadOutcome> {
    let file = File::create(dest)?;
    let mut writer = BufWriter::new(file);
    let mut buffer = vec![0u8; CHUNK_SIZE];
    let mut written: u64 = 0;

    let result = loop {
        if cancel.load(Ordering::Relaxed) {
            break Err(NvduError::download("download cancelled"));
        }

        let n = match reader.read(&mut buffer) {
            Ok(0) => break Ok(()),
            Ok(n) => n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => break Err(e.into()),
        };

        if let Err(e) = writer.write_all(&buffer[..n]) {
            break Err(e.into());
        }
        written += n as u64;
        on_progress(written, expected);
    };

    let result = result
        .and_then(|_| writer.flush().map_err(NvduError::from))
        .and_then(|_| match expected {
            Some(expected) if expected != written => Err(NvduError::download(format!(
                "download incomplete: received {} of {} bytes",
                written, expected
            ))),
            _ => Ok(()),
        });
    drop(writer);

    if let Err(e) = result {
        let _ = fs::remove_file(dest);
        return Err(e);
    }

    Ok(DownloadOutcome {
        path: dest.to_path_buf(),
        bytes: written,
        expected,
    })
}

/// Downloads installers into a directory
pub struct Downloader {
    client: reqwest::blocking::Client,
    dir: PathBuf,
    cancel: Arc<AtomicBool>,
}

impl Downloader {
    pub fn new(dir: PathBuf) -> Result<Self> {
        // Installers are several hundred MB, only bound the connect phase
        let client = reqwest::blocking::Client::builder()
            .connect_timeout(Duration::from_secs(30))
            .timeout(None)
            .build()?;

        Ok(Self {
            client,
            dir,
            cancel: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Flag that aborts an ongoing download when set
    pub fn cancel_flag(&self) -> Arc<AtomicBool> {
        self.cancel.clone()
    }

    pub fn download(
        &self,
        url: &str,
        on_progress: impl FnMut(u64, Option<u64>),
    ) -> Result<DownloadOutcome> {
        let file_name = file_name_from_url(url)?;
        fs::create_dir_all(&self.dir)?;
        let dest = self.dir.join(file_name);

        log::info!("Downloading {} to {:?}", url, dest);

        let response = self.client.get(url).send()?;
        if !response.status().is_success() {
            return Err(NvduError::download(format!(
                "server returned status {} for {}",
                response.status(),
                url
            )));
        }

        let expected = response.content_length().filter(|len| *len > 0);
        write_stream(response, &dest, expected, &self.cancel, on_progress)
    }
}
