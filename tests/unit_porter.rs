// Porter stemmer: known input/output pairs for the NLTK rule table.

use spamsieve::text::porter::{PorterMode, PorterStemmer};
use spamsieve::text::traits::Stemmer;

fn stem(word: &str) -> String {
    PorterStemmer::new(PorterMode::NltkExtensions).stem(word)
}

#[test]
fn step1a_plurals() {
    assert_eq!(stem("caresses"), "caress");
    assert_eq!(stem("ponies"), "poni");
    assert_eq!(stem("cats"), "cat");
    assert_eq!(stem("caress"), "caress");
}

#[test]
fn step1b_ed_and_ing() {
    assert_eq!(stem("feed"), "feed");
    assert_eq!(stem("agreed"), "agre");
    assert_eq!(stem("hopping"), "hop");
    assert_eq!(stem("filing"), "file");
    assert_eq!(stem("running"), "run");
    assert_eq!(stem("meetings"), "meet");
}

#[test]
fn step1c_y_to_i() {
    assert_eq!(stem("happy"), "happi");
}

#[test]
fn steps_2_through_4_suffixes() {
    assert_eq!(stem("relational"), "relat");
    assert_eq!(stem("conditional"), "condit");
    assert_eq!(stem("generalization"), "gener");
    assert_eq!(stem("triplicate"), "triplic");
    assert_eq!(stem("electrical"), "electr");
    assert_eq!(stem("adjustment"), "adjust");
}

#[test]
fn step5_trailing_e_and_double_l() {
    assert_eq!(stem("probate"), "probat");
    assert_eq!(stem("controll"), "control");
    assert_eq!(stem("roll"), "roll");
}

#[test]
fn related_forms_share_a_stem() {
    assert_eq!(stem("runs"), "run");
    assert_eq!(stem("runner"), "runner");
}

#[test]
fn nltk_irregular_forms() {
    assert_eq!(stem("dying"), "die");
    assert_eq!(stem("sky"), "sky");
    assert_eq!(stem("skies"), "sky");
}

#[test]
fn numbers_and_short_words_are_untouched() {
    assert_eq!(stem("2024"), "2024");
    assert_eq!(stem("as"), "as");
    assert_eq!(stem("u"), "u");
}

#[test]
fn stemmer_reports_its_pipeline_id() {
    assert_eq!(PorterStemmer::default().id(), "porter-nltk");
    assert_eq!(PorterStemmer::new(PorterMode::Original).id(), "porter-original");
}
