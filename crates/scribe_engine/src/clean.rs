/// Lines containing any of these (case-insensitive) are boilerplate.
const DENYLIST: &[&str] = &[
    "menu",
    "navigation",
    "footer",
    "copyright",
    "privacy policy",
    "terms of service",
    "cookie",
    "subscribe",
    "follow us",
];

const MIN_LINE_CHARS: usize = 30;
const MAX_LINES: usize = 10;

/// Denoise scraped text into a short excerpt.
///
/// Works line by line over whatever separators the caller joined with:
/// each line is trimmed, internal whitespace runs collapse to single
/// spaces, lines that are too short or match the denylist are dropped,
/// and at most the first 10 survivors are kept in original order.
///
/// Pure and idempotent: cleaning already-cleaned text is a no-op.
pub fn clean_text(text: &str) -> String {
    let survivors: Vec<String> = text
        .lines()
        .map(collapse_whitespace)
        .filter(|line| line.chars().count() > MIN_LINE_CHARS)
        .filter(|line| !matches_denylist(line))
        .take(MAX_LINES)
        .collect();
    survivors.join("\n")
}

fn collapse_whitespace(line: &str) -> String {
    line.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn matches_denylist(line: &str) -> bool {
    let lowered = line.to_lowercase();
    DENYLIST.iter().any(|phrase| lowered.contains(phrase))
}
