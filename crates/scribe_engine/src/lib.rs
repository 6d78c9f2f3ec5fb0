//! Scribe engine: IO pipeline for scraping and persisting page content.
mod clean;
mod decode;
mod extract;
mod fetch;
mod filename;
mod harvest;
mod images;
mod persist;
mod types;

pub use clean::clean_text;
pub use decode::{decode_page, DecodeError, DecodedPage};
pub use extract::ContentExtractor;
pub use fetch::{FetchSettings, PageFetcher, ReqwestFetcher};
pub use filename::{image_filename, paper_filename};
pub use harvest::Harvester;
pub use images::{download_image, DownloadError};
pub use persist::{ensure_output_dir, AtomicFileWriter, PersistError};
pub use types::{
    ExtractedItem, FailureKind, FetchError, FetchMetadata, FetchOutput, ImageRef, RawPageResult,
};
