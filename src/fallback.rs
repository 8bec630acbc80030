//! Bundled fallback datasets.
//!
//! Substituted when a live fetch for quotes, jokes or facts fails. Social
//! posts deliberately have no fallback set.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::{Fact, Joke, Quote};

fn tags(list: &[&str]) -> Vec<String> {
    list.iter().map(|t| t.to_string()).collect()
}

/// Hand-curated quotes
pub fn quotes() -> Vec<Quote> {
    vec![
        Quote::new(
            "\"The only way to do great work is to love what you do.\"",
            "Steve Jobs",
            tags(&["inspiration", "work", "passion"]),
        ),
        Quote::new(
            "\"Innovation distinguishes between a leader and a follower.\"",
            "Steve Jobs",
            tags(&["innovation", "leadership"]),
        ),
        Quote::new(
            "\"Life is what happens when you're busy making other plans.\"",
            "John Lennon",
            tags(&["life", "planning"]),
        ),
        Quote::new(
            "\"The future belongs to those who believe in the beauty of their dreams.\"",
            "Eleanor Roosevelt",
            tags(&["future", "dreams", "inspiration"]),
        ),
        Quote::new(
            "\"It is during our darkest moments that we must focus to see the light.\"",
            "Aristotle",
            tags(&["inspirational", "hope"]),
        ),
    ]
}

/// Hand-curated jokes
pub fn jokes() -> Vec<Joke> {
    vec![
        Joke::new(
            "Why do programmers prefer dark mode?",
            "Because light attracts bugs!",
            "programming",
        ),
        Joke::new(
            "Why did the scarecrow win an award?",
            "Because he was outstanding in his field!",
            "general",
        ),
        Joke::new(
            "What do you call a bear with no teeth?",
            "A gummy bear!",
            "general",
        ),
    ]
}

/// Hand-curated facts
pub fn facts() -> Vec<Fact> {
    vec![
        Fact::new(
            "Rust (programming language)",
            "Rust is a general-purpose programming language emphasizing performance, \
             type safety and concurrency. It enforces memory safety without a garbage \
             collector through its ownership and borrowing rules.",
            "https://en.wikipedia.org/wiki/Rust_(programming_language)",
        ),
        Fact::new(
            "Web scraping",
            "Web scraping is the process of extracting data from websites. It involves \
             fetching a web page and extracting useful information from it, often for \
             analysis or data collection purposes.",
            "https://en.wikipedia.org/wiki/Web_scraping",
        ),
        Fact::new(
            "HTML",
            "HyperText Markup Language is the standard markup language for documents \
             designed to be displayed in a web browser. Browsers parse it into a \
             document tree that scripts and styles can address.",
            "https://en.wikipedia.org/wiki/HTML",
        ),
    ]
}

/// Draw `min(count, pool.len())` distinct elements uniformly at random.
pub fn sample<T: Clone, R: Rng + ?Sized>(pool: &[T], count: usize, rng: &mut R) -> Vec<T> {
    pool.choose_multiple(rng, count.min(pool.len()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_datasets_are_nonempty_and_valid() {
        assert_eq!(quotes().len(), 5);
        assert_eq!(jokes().len(), 3);
        assert_eq!(facts().len(), 3);
        assert!(quotes().iter().all(|q| !q.text.is_empty()));
    }

    #[test]
    fn test_sample_caps_at_pool_size() {
        let mut rng = StdRng::seed_from_u64(7);
        let pool = jokes();

        assert_eq!(sample(&pool, 10, &mut rng).len(), 3);
        assert_eq!(sample(&pool, 2, &mut rng).len(), 2);
        assert!(sample(&pool, 0, &mut rng).is_empty());
    }

    #[test]
    fn test_sample_has_no_duplicates() {
        let pool = quotes();

        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let drawn = sample(&pool, 4, &mut rng);

            for (i, q) in drawn.iter().enumerate() {
                assert!(pool.contains(q));
                assert!(!drawn[i + 1..].contains(q), "duplicate in draw: {:?}", q);
            }
        }
    }
}
