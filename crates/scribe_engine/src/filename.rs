use sha2::{Digest, Sha256};

/// Windows-safe, deterministic paper filename: `{sanitized_title}--{short_hash(title)}.md`
pub fn paper_filename(title: &str) -> String {
    let sanitized = sanitize_title(title);
    let hash = short_hash(title);
    format!("{sanitized}--{hash}.md")
}

/// Deterministic image filename keyed on the page URL and the image's
/// position on that page: `mcp_{short_hash(page_url)}_{index}.jpg`
pub fn image_filename(page_url: &str, index: usize) -> String {
    format!("mcp_{}_{index}.jpg", short_hash(page_url))
}

fn sanitize_title(input: &str) -> String {
    let mut cleaned: String = input
        .chars()
        .map(|c| if is_forbidden(c) { '_' } else { c })
        .collect();
    cleaned = cleaned.trim_matches(&['_', ' ', '.'][..]).to_string();
    if cleaned.is_empty() {
        cleaned = "untitled".to_string();
    }
    // Collapse multiple underscores
    let mut compacted = String::with_capacity(cleaned.len());
    let mut prev_underscore = false;
    for c in cleaned.chars() {
        if c == '_' {
            if !prev_underscore {
                compacted.push(c);
            }
            prev_underscore = true;
        } else {
            compacted.push(c);
            prev_underscore = false;
        }
    }
    let mut final_name = compacted;
    if final_name.len() > 80 {
        final_name.truncate(80);
    }
    if is_reserved_windows_name(&final_name) {
        final_name.push('_');
    }
    final_name
}

fn is_forbidden(c: char) -> bool {
    matches!(c,
        '\\' | '/' | ':' | '*' | '?' | '"' | '<' | '>' | '|' | '\0'..='\u{1F}'
    )
}

fn is_reserved_windows_name(name: &str) -> bool {
    const RESERVED: &[&str] = &[
        "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
        "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
    ];
    RESERVED.iter().any(|r| r.eq_ignore_ascii_case(name))
}

fn short_hash(input: &str) -> String {
    let digest = Sha256::digest(input.as_bytes());
    let mut hex = String::with_capacity(8);
    for byte in digest.iter().take(4) {
        use std::fmt::Write;
        let _ = write!(&mut hex, "{byte:02x}");
    }
    hex
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paper_filename_is_deterministic_and_safe() {
        let first = paper_filename("My: Title?/Bad");
        assert!(first.starts_with("My_ Title_Bad--"));
        assert!(first.ends_with(".md"));
        assert_eq!(first, paper_filename("My: Title?/Bad"));
    }

    #[test]
    fn reserved_windows_names_are_patched() {
        assert!(paper_filename("CON").starts_with("CON_"));
    }

    #[test]
    fn image_filenames_differ_by_page_and_index() {
        let a0 = image_filename("https://example.com/a", 0);
        let a1 = image_filename("https://example.com/a", 1);
        let b0 = image_filename("https://example.com/b", 0);
        assert_ne!(a0, a1);
        assert_ne!(a0, b0);
        assert!(a0.starts_with("mcp_") && a0.ends_with("_0.jpg"));
    }
}
