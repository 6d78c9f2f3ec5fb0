//! One-shot paper generator: scrape the fixed source list, clean the text,
//! render the selected topic's template and write the result to disk.

use std::path::Path;

use engine_logging::{engine_error, engine_info, LogDestination};
use rand::rngs::StdRng;
use rand::SeedableRng;
use scribe_core::{matches_keywords, render_focus_paper, select_topic, Topic};
use scribe_engine::{
    clean_text, download_image, paper_filename, AtomicFileWriter, FetchSettings, Harvester,
    RawPageResult, ReqwestFetcher,
};

/// Documentation sources for scraped excerpts. Only the first
/// `SOURCES_PER_RUN` are visited on a given run.
const SOURCES: &[&str] = &[
    "https://modelcontextprotocol.io/docs",
    "https://github.com/modelcontextprotocol/servers",
    "https://github.com/modelcontextprotocol/clients",
    "https://docs.anthropic.com/claude/docs/mcp",
    "https://github.com/anthropics/anthropic-sdk-python",
];
const SOURCES_PER_RUN: usize = 3;
const IMAGES_PER_SOURCE: usize = 2;

const OUTPUT_DIR: &str = "output";
const IMAGES_SUBDIR: &str = "images";

fn main() {
    engine_logging::initialize(LogDestination::Terminal);

    // Captured once and threaded through; never re-read during the run.
    let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

    let mut rng = StdRng::from_entropy();
    let topic = select_topic(&mut rng);
    engine_info!("Selected topic: {} ({})", topic.title, topic.focus);

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(err) => {
            engine_error!("Failed to start runtime: {}", err);
            return;
        }
    };

    let (excerpt, image_count) = runtime.block_on(run_scrape(topic));
    let paper = render_focus_paper(topic, &timestamp, &excerpt);

    let writer = AtomicFileWriter::new(OUTPUT_DIR.into());
    match writer.write(&paper_filename(topic.title), paper.as_bytes()) {
        Ok(path) => engine_info!("Wrote paper to {:?}", path),
        Err(err) => engine_error!("Failed to write paper: {}", err),
    }

    println!("Generated: {}", topic.title);
    println!("Focus: {}", topic.focus);
    println!("Content length: {}", paper.len());
    println!("Images downloaded: {image_count}");
}

/// Visit the sources sequentially; return the aggregated excerpt and the
/// number of images written. Failed pages contribute nothing.
async fn run_scrape(topic: &Topic) -> (String, usize) {
    let harvester = Harvester::new(ReqwestFetcher::new(FetchSettings::default()));
    let images_dir = Path::new(OUTPUT_DIR).join(IMAGES_SUBDIR);

    let mut excerpt = String::new();
    let mut image_count = 0;

    for url in &SOURCES[..SOURCES_PER_RUN] {
        engine_info!("Scraping: {}", url);
        let result = harvester.harvest_page(url).await;

        let cleaned = clean_text(&page_text(&result, topic));
        if !cleaned.is_empty() {
            excerpt.push_str(&format!("\n\nSource: {url}\n{cleaned}\n"));
        }

        for (index, image) in result.images.iter().take(IMAGES_PER_SOURCE).enumerate() {
            if download_image(image, url, index, &images_dir).await.is_some() {
                image_count += 1;
            }
        }
    }

    (excerpt, image_count)
}

/// Flatten a page's items into newline-joined text, preferring fragments
/// relevant to the topic's keywords. A page with no relevant fragment
/// falls back to everything it yielded.
fn page_text(result: &RawPageResult, topic: &Topic) -> String {
    let relevant: Vec<&str> = result
        .items
        .iter()
        .map(|item| item.text())
        .filter(|text| matches_keywords(topic, text))
        .collect();
    if relevant.is_empty() {
        result.joined_text()
    } else {
        relevant.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scribe_core::topic_catalogue;
    use scribe_engine::ExtractedItem;

    #[test]
    fn page_text_prefers_keyword_matches() {
        let topic = &topic_catalogue()[0]; // architecture
        let result = RawPageResult {
            items: vec![
                ExtractedItem::Paragraph {
                    text: "The protocol architecture separates concerns cleanly".into(),
                },
                ExtractedItem::Paragraph {
                    text: "Unrelated marketing copy".into(),
                },
            ],
            images: vec![],
        };
        assert_eq!(
            page_text(&result, topic),
            "The protocol architecture separates concerns cleanly"
        );
    }

    #[test]
    fn page_text_falls_back_to_all_items() {
        let topic = &topic_catalogue()[0];
        let result = RawPageResult {
            items: vec![ExtractedItem::Paragraph {
                text: "Nothing matching the keyword list".into(),
            }],
            images: vec![],
        };
        assert_eq!(page_text(&result, topic), "Nothing matching the keyword list");
    }
}
