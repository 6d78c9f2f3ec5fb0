use std::fmt;

/// One fragment pulled from a rendered page. Immutable once produced;
/// text is always non-empty because the extraction thresholds filter
/// short fragments out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractedItem {
    /// Heading element, `level` is always 1..=6.
    Heading { level: u8, text: String },
    /// Preformatted or code element.
    Code { text: String },
    /// Paragraph from a main-content container.
    Paragraph { text: String },
}

impl ExtractedItem {
    pub fn text(&self) -> &str {
        match self {
            ExtractedItem::Heading { text, .. } => text,
            ExtractedItem::Code { text } => text,
            ExtractedItem::Paragraph { text } => text,
        }
    }
}

/// Reference to an image found on a page. Dimensions come from the
/// element attributes; missing or unparseable values are 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    pub source_url: String,
    pub alt_text: String,
    pub width: u32,
    pub height: u32,
}

/// Everything extracted from one URL, in document order per rule.
/// Empty on any fetch or extraction failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawPageResult {
    pub items: Vec<ExtractedItem>,
    pub images: Vec<ImageRef>,
}

impl RawPageResult {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.images.is_empty()
    }

    /// Item texts joined with explicit newlines, ready for the cleaner.
    pub fn joined_text(&self) -> String {
        let lines: Vec<&str> = self.items.iter().map(|item| item.text()).collect();
        lines.join("\n")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutput {
    pub bytes: Vec<u8>,
    pub metadata: FetchMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchMetadata {
    pub original_url: String,
    pub final_url: String,
    pub redirect_count: usize,
    pub content_type: Option<String>,
    pub byte_len: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for FetchError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    RedirectLimitExceeded,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    UnsupportedContentType { content_type: String },
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::RedirectLimitExceeded => write!(f, "redirect limit exceeded"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::UnsupportedContentType { content_type } => {
                write!(f, "unsupported content type {content_type}")
            }
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
