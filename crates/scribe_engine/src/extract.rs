use scraper::{ElementRef, Html, Selector};

use crate::{ExtractedItem, ImageRef, RawPageResult};

const MIN_HEADING_CHARS: usize = 10;
const MIN_CODE_CHARS: usize = 20;
const MIN_PARAGRAPH_CHARS: usize = 50;
const MAX_PARAGRAPH_CHARS: usize = 500;
const MIN_IMAGE_DIMENSION: u32 = 100;

const HEADING_SELECTOR: &str = "h1, h2, h3, h4, h5, h6";
const CODE_SELECTOR: &str = "pre, code";
const PARAGRAPH_SELECTOR: &str = "main p, article p, .content p, .documentation p";
const IMAGE_SELECTOR: &str = "img";

/// Read-only extraction pass over one parsed document.
///
/// Three independent rules (headings, code blocks, main-content paragraphs)
/// plus image references. Each rule walks the document in order; duplicates
/// from overlapping selectors are kept rather than collapsed.
#[derive(Debug, Default, Clone, Copy)]
pub struct ContentExtractor;

impl ContentExtractor {
    pub fn extract(&self, html: &str) -> RawPageResult {
        let doc = Html::parse_document(html);
        let mut result = RawPageResult::default();

        if let Ok(sel) = Selector::parse(HEADING_SELECTOR) {
            for element in doc.select(&sel) {
                let text = trimmed_text(element);
                if text.chars().count() > MIN_HEADING_CHARS {
                    result.items.push(ExtractedItem::Heading {
                        level: heading_level(element),
                        text,
                    });
                }
            }
        }

        if let Ok(sel) = Selector::parse(CODE_SELECTOR) {
            for element in doc.select(&sel) {
                let text = trimmed_text(element);
                if text.chars().count() > MIN_CODE_CHARS {
                    result.items.push(ExtractedItem::Code { text });
                }
            }
        }

        if let Ok(sel) = Selector::parse(PARAGRAPH_SELECTOR) {
            for element in doc.select(&sel) {
                let text = trimmed_text(element);
                let len = text.chars().count();
                if len > MIN_PARAGRAPH_CHARS && len < MAX_PARAGRAPH_CHARS {
                    result.items.push(ExtractedItem::Paragraph { text });
                }
            }
        }

        if let Ok(sel) = Selector::parse(IMAGE_SELECTOR) {
            for element in doc.select(&sel) {
                if let Some(image) = image_ref(element) {
                    result.images.push(image);
                }
            }
        }

        result
    }
}

fn trimmed_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

fn heading_level(element: ElementRef) -> u8 {
    // Tag is one of h1..h6 by selector construction.
    match element.value().name() {
        "h1" => 1,
        "h2" => 2,
        "h3" => 3,
        "h4" => 4,
        "h5" => 5,
        _ => 6,
    }
}

fn image_ref(element: ElementRef) -> Option<ImageRef> {
    let src = element.value().attr("src").map(str::trim).unwrap_or("");
    if src.is_empty() {
        return None;
    }
    let width = dimension_attr(element, "width");
    let height = dimension_attr(element, "height");
    if width <= MIN_IMAGE_DIMENSION && height <= MIN_IMAGE_DIMENSION {
        return None;
    }
    Some(ImageRef {
        source_url: src.to_string(),
        alt_text: element.value().attr("alt").unwrap_or("").to_string(),
        width,
        height,
    })
}

fn dimension_attr(element: ElementRef, name: &str) -> u32 {
    element
        .value()
        .attr(name)
        .and_then(|value| value.trim().parse::<u32>().ok())
        .unwrap_or(0)
}
