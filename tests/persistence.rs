//! Persistence Integration Tests
//!
//! Bundle file layout and round-trips through disk.

use inspire::domain::DEFAULT_BUNDLE_FILE;
use inspire::{Fact, Joke, Quote, ResultBundle, SocialPost};
use tempfile::TempDir;

fn populated_bundle() -> ResultBundle {
    let mut bundle = ResultBundle::new();
    bundle.replace_quotes(vec![Quote::new(
        "“Le cœur a ses raisons.”",
        "Blaise Pascal",
        vec!["heart".to_string(), "reason".to_string()],
    )]);
    bundle.replace_jokes(vec![Joke::new("Setup?", "Punchline!", "general")]);
    bundle.replace_facts(vec![Fact::new(
        "Crab",
        "A long extract that must never be truncated in storage. ".repeat(10),
        "https://en.wikipedia.org/wiki/Crab",
    )]);
    bundle.replace_social_posts(vec![SocialPost {
        title: "TIL".to_string(),
        author: "ferris".to_string(),
        score: 7,
        url: "https://reddit.com/r/todayilearned/1".to_string(),
        origin_group: "todayilearned".to_string(),
    }]);
    bundle
}

#[tokio::test]
async fn test_save_and_load_round_trip() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested").join(DEFAULT_BUNDLE_FILE);

    let bundle = populated_bundle();
    bundle.save(&path).await.unwrap();
    let loaded = ResultBundle::load(&path).await.unwrap();

    assert_eq!(loaded.quotes, bundle.quotes);
    assert_eq!(loaded.jokes, bundle.jokes);
    assert_eq!(loaded.facts, bundle.facts);
    assert_eq!(loaded.social_posts, bundle.social_posts);
    assert_eq!(loaded.stats.total_quotes, 1);
    assert_eq!(loaded.facts[0].extract.len(), bundle.facts[0].extract.len());
}

#[tokio::test]
async fn test_file_layout_is_readable_json() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("out.json");

    populated_bundle().save(&path).await.unwrap();
    let raw = std::fs::read_to_string(&path).unwrap();

    // Non-ASCII kept literally, two-space indentation
    assert!(raw.contains("“Le cœur a ses raisons.”"));
    assert!(raw.starts_with("{\n  \"timestamp\""));

    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["jokes"][0]["type"], "general");
    assert_eq!(value["facts"][0]["url"], "https://en.wikipedia.org/wiki/Crab");
    assert_eq!(value["reddit_posts"][0]["subreddit"], "todayilearned");
    assert_eq!(value["stats"]["total_reddit_posts"], 1);
    assert!(value["stats"]["scrape_time"].is_string());
}

#[tokio::test]
async fn test_load_or_new_without_file() {
    let temp = TempDir::new().unwrap();
    let bundle = ResultBundle::load_or_new(&temp.path().join("missing.json"))
        .await
        .unwrap();

    assert!(bundle.is_empty());
}

#[tokio::test]
async fn test_load_invalid_file_is_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert!(ResultBundle::load(&path).await.is_err());
}

#[test]
fn test_minimal_document_parses_with_defaults() {
    let bundle = ResultBundle::from_json(
        r#"{"timestamp": "2024-01-01T00:00:00Z", "quotes": [{"text": "q", "author": "a"}]}"#,
    )
    .unwrap();

    assert_eq!(bundle.quotes[0].tags, Vec::<String>::new());
    assert!(bundle.jokes.is_empty());
    assert_eq!(bundle.stats.total_quotes, 0);
}

#[test]
fn test_document_with_blank_quote_text_is_rejected() {
    let result = ResultBundle::from_json(
        r#"{"timestamp": "2024-01-01T00:00:00Z", "quotes": [{"text": "", "author": "a"}]}"#,
    );

    assert!(result.is_err());
}
