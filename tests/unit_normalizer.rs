// Text normalizer properties: case folding, stopword removal, order,
// determinism and the edge cases that must produce empty output.

use spamsieve::text::normalizer::{Normalizer, TextPipeline};
use spamsieve::text::normalize;
use spamsieve::text::porter::PorterMode;
use spamsieve::text::stopwords::{StopwordList, StopwordSet};

fn tokens(s: &str) -> Vec<&str> {
    s.split_whitespace().collect()
}

#[test]
fn empty_and_punctuation_only_input_yield_empty_output() {
    assert_eq!(normalize(""), "");
    assert_eq!(normalize("!!! ,,, ..."), "");
    assert_eq!(normalize("?!-_/\\@#"), "");
}

#[test]
fn normalization_is_deterministic() {
    let input = "URGENT! You have won a £1000 cash award. Call 09061701461 now!";
    assert_eq!(normalize(input), normalize(input));
}

#[test]
fn running_runs_runner_share_a_stem_and_none_are_dropped() {
    let out = normalize("Running runs runner");
    let stems = tokens(&out);
    assert_eq!(stems.len(), 3);
    assert_eq!(stems[0], "run");
    assert_eq!(stems[1], "run");
    assert!(stems[2].starts_with("run"));
}

#[test]
fn common_stopwords_are_removed() {
    let out = normalize("the quick fox and the dog");
    let stems = tokens(&out);
    assert!(!stems.contains(&"the"));
    assert!(!stems.contains(&"and"));
    assert_eq!(out, "quick fox dog");
}

#[test]
fn normalization_is_case_insensitive() {
    assert_eq!(normalize("FREE"), normalize("free"));
    assert_eq!(normalize("Claim Your PRIZE"), normalize("claim your prize"));
}

#[test]
fn surviving_stems_keep_source_order() {
    assert_eq!(normalize("cats and dogs"), "cat dog");
    assert_eq!(normalize("dogs and cats"), "dog cat");
}

#[test]
fn spam_scenario() {
    // "your" and "now" are both in the NLTK stopword list.
    assert_eq!(
        normalize("WINNER!! Claim your FREE prize NOW"),
        "winner claim free prize"
    );
}

#[test]
fn digits_survive_as_tokens() {
    assert_eq!(normalize("Call 09061701461"), "call 09061701461");
    assert_eq!(normalize("txt 2 win"), "txt 2 win");
}

#[test]
fn contractions_split_and_fragments_are_dropped() {
    // "don" and "t" are both NLTK stopwords once the apostrophe splits them.
    assert_eq!(normalize("I don't know"), "know");
}

#[test]
fn contractions_built_from_stopwords_vanish() {
    // "can" and "t" are both stopwords, so nothing of "can't" survives.
    assert_eq!(normalize("I can't"), "");
    assert_eq!(normalize("I won't go"), "go");
}

#[test]
fn joined_tokens_split_into_fragments() {
    assert_eq!(normalize("e-mail"), "e mail");
    assert_eq!(normalize("1,000"), "1 000");
    assert_eq!(normalize("www.x.com"), "www x com");
}

#[test]
fn output_has_no_extra_whitespace() {
    let out = normalize("  hello   ,   world  !!  ");
    assert_eq!(out, "hello world");
    assert!(!out.starts_with(' ') && !out.ends_with(' '));
}

#[test]
fn default_normalizer_matches_explicit_default_pipeline() {
    let normalizer = Normalizer::new(TextPipeline::default());
    let input = "Meetings were rescheduled for tomorrow";
    assert_eq!(normalizer.normalize(input), normalize(input));
    assert_eq!(normalizer.pipeline().to_string(), "nltk-english-179 + porter-nltk");
}

#[test]
fn alternative_pipeline_changes_output() {
    let original = Normalizer::new(TextPipeline {
        stopwords: StopwordList::NltkEnglish,
        stemmer: PorterMode::Original,
    });
    assert_eq!(original.normalize("dying"), "dy");
    assert_eq!(normalize("dying"), "die");
}

#[test]
fn iso_stopwords_are_a_superset_of_the_basics() {
    let iso = StopwordSet::shared(StopwordList::IsoEnglish);
    for word in ["the", "and", "a", "is", "your"] {
        assert!(iso.contains(word), "{word} missing from iso-english");
    }
    let normalizer = Normalizer::new(TextPipeline {
        stopwords: StopwordList::IsoEnglish,
        stemmer: PorterMode::NltkExtensions,
    });
    let out = normalizer.normalize("the fox and the dog");
    assert!(!tokens(&out).contains(&"the"));
    assert!(!tokens(&out).contains(&"and"));
}
