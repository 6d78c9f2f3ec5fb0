use pretty_assertions::assert_eq;
use scribe_engine::{clean_text, decode_page, ContentExtractor};

#[test]
fn decode_extract_clean_is_deterministic() {
    let bytes: &[u8] = br#"
        <html><body>
            <main>
                <p>The protocol specification describes message framing in enough detail to reimplement it.</p>
                <p>Menu</p>
                <p>All rights reserved under copyright, see the legal page for the full licensing details.</p>
            </main>
        </body></html>
    "#;

    let decoded = decode_page(bytes, Some("text/html; charset=utf-8")).unwrap();
    let result = ContentExtractor.extract(&decoded.html);
    let lines: Vec<String> = result
        .items
        .iter()
        .map(|item| item.text().to_string())
        .collect();
    let cleaned = clean_text(&lines.join("\n"));

    // "Menu" is below the paragraph length floor and never extracted; the
    // copyright paragraph survives extraction but the cleaner denies it.
    assert_eq!(
        cleaned,
        "The protocol specification describes message framing in enough detail to reimplement it."
    );

    let again = clean_text(&cleaned);
    assert_eq!(again, cleaned);
}

#[test]
fn cleaner_output_respects_all_keep_conditions() {
    let noisy: String = (0..40)
        .map(|i| {
            format!("Observation {i} about throughput characteristics under sustained load\n")
        })
        .collect();
    let with_noise = format!("{noisy}Subscribe to our newsletter for more updates and offers\nshort\n");

    let cleaned = clean_text(&with_noise);
    assert!(cleaned.lines().count() <= 10);
    for line in cleaned.lines() {
        assert!(line.chars().count() > 30);
        assert!(!line.to_lowercase().contains("subscribe"));
    }
}
