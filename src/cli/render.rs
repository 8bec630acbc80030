//! Console rendering of bundles and records.

use rand::seq::SliceRandom;
use rand::thread_rng;

use crate::core::{CategoryReport, Source};
use crate::domain::{Fact, Joke, Quote, ResultBundle, SocialPost, Stats};

/// Max characters of a fact extract shown on screen
pub const EXTRACT_PREVIEW_CHARS: usize = 200;

const RULE: &str = "============================================================";

/// Truncate on a char boundary, appending "..." when cut
pub fn truncate_extract(extract: &str, max_chars: usize) -> String {
    match extract.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &extract[..idx]),
        None => extract.to_string(),
    }
}

/// "total_reddit_posts" -> "Total Reddit Posts"
pub fn title_case_metric(key: &str) -> String {
    key.split('_')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn quote(q: &Quote) -> String {
    format!("{}\n   — {}", q.text, q.author)
}

pub fn joke(j: &Joke) -> String {
    format!("{}\n   → {} [{}]", j.setup, j.punchline, j.category)
}

pub fn fact(f: &Fact) -> String {
    format!(
        "{}\n   {}\n   {}",
        f.title,
        truncate_extract(&f.extract, EXTRACT_PREVIEW_CHARS),
        f.source_url
    )
}

pub fn social_post(p: &SocialPost) -> String {
    format!(
        "{}\n   by u/{} | {} points\n   {}",
        p.title, p.author, p.score, p.url
    )
}

/// Numbered listing of records, one blank line apart
pub fn listing<T>(records: &[T], render: fn(&T) -> String) -> String {
    records
        .iter()
        .enumerate()
        .map(|(i, r)| format!("{}. {}", i + 1, render(r)))
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn stats(stats: &Stats) -> String {
    stats
        .counts()
        .iter()
        .map(|(key, value)| format!("   {}: {}", title_case_metric(key), value))
        .collect::<Vec<_>>()
        .join("\n")
}

/// One random record per non-empty category plus the stats
pub fn summary(bundle: &ResultBundle) -> String {
    let mut rng = thread_rng();
    let mut out = vec![RULE.to_string(), "CONTENT SUMMARY".to_string(), RULE.to_string()];

    if let Some(q) = bundle.quotes.choose(&mut rng) {
        out.push(format!("\nRANDOM QUOTE:\n   {}", quote(q)));
        if !q.tags.is_empty() {
            out.push(format!("   Tags: {}", q.tags.join(", ")));
        }
    }
    if let Some(j) = bundle.jokes.choose(&mut rng) {
        out.push(format!("\nRANDOM JOKE:\n   {}", joke(j)));
    }
    if let Some(f) = bundle.facts.choose(&mut rng) {
        out.push(format!("\nRANDOM FACT:\n   {}", fact(f)));
    }
    if let Some(p) = bundle.social_posts.choose(&mut rng) {
        out.push(format!("\nTRENDING:\n   {}", social_post(p)));
    }

    out.push(format!("\nSTATISTICS:\n{}", stats(&bundle.stats)));
    out.push(RULE.to_string());
    out.join("\n")
}

/// One line per category describing where its records came from
pub fn reports(reports: &[CategoryReport]) -> String {
    reports
        .iter()
        .map(|r| {
            let origin = match r.source {
                Source::Live => "live".to_string(),
                Source::Fallback => "fallback".to_string(),
                Source::Unavailable => "unavailable".to_string(),
            };
            match &r.error {
                Some(err) => format!("   {}: {} {} ({})", r.category, r.collected, origin, err),
                None => format!("   {}: {} {}", r.category, r.collected, origin),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_extract() {
        assert_eq!(truncate_extract("short", 200), "short");
        assert_eq!(truncate_extract("abcdef", 3), "abc...");
        // Multi-byte characters are not split
        assert_eq!(truncate_extract("ééééé", 2), "éé...");
    }

    #[test]
    fn test_title_case_metric() {
        assert_eq!(title_case_metric("total_reddit_posts"), "Total Reddit Posts");
        assert_eq!(title_case_metric("total_quotes"), "Total Quotes");
    }

    #[test]
    fn test_summary_skips_scrape_time() {
        let mut bundle = ResultBundle::new();
        bundle.replace_quotes(vec![Quote::new("q", "a", vec!["t".to_string()])]);
        let text = summary(&bundle);

        assert!(text.contains("Total Quotes: 1"));
        assert!(text.contains("Tags: t"));
        assert!(!text.contains("Scrape Time"));
        assert!(!text.contains("RANDOM JOKE"));
    }

    #[test]
    fn test_listing_numbers_records() {
        let jokes = vec![Joke::new("a", "b", "general"), Joke::new("c", "d", "pun")];
        let text = listing(&jokes, joke);

        assert!(text.starts_with("1. a"));
        assert!(text.contains("2. c"));
    }
}
