use std::path::{Path, PathBuf};
use std::time::Duration;

use engine_logging::engine_warn;

use crate::fetch::map_reqwest_error;
use crate::filename::image_filename;
use crate::persist::{AtomicFileWriter, PersistError};
use crate::{FailureKind, FetchError, ImageRef};

const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),
    #[error("write failed: {0}")]
    Persist(#[from] PersistError),
}

/// Best-effort image download: single attempt, short timeout, no retries
/// and no integrity check. Returns the written path on success, `None` on
/// any failure (which is logged, never propagated).
pub async fn download_image(
    image: &ImageRef,
    page_url: &str,
    index: usize,
    images_dir: &Path,
) -> Option<PathBuf> {
    let filename = image_filename(page_url, index);
    match try_download(&image.source_url, images_dir, &filename).await {
        Ok(path) => Some(path),
        Err(err) => {
            engine_warn!("Error downloading image {}: {}", image.source_url, err);
            None
        }
    }
}

async fn try_download(
    source_url: &str,
    images_dir: &Path,
    filename: &str,
) -> Result<PathBuf, DownloadError> {
    let client = reqwest::Client::builder()
        .timeout(DOWNLOAD_TIMEOUT)
        .build()
        .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;

    let response = client
        .get(source_url)
        .send()
        .await
        .map_err(map_reqwest_error)?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::new(
            FailureKind::HttpStatus(status.as_u16()),
            status.to_string(),
        )
        .into());
    }

    let bytes = response.bytes().await.map_err(map_reqwest_error)?;
    let writer = AtomicFileWriter::new(images_dir.to_path_buf());
    let path = writer.write(filename, &bytes)?;
    Ok(path)
}
