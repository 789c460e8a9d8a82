// Porter stemmer.
//
// Implements M.F. Porter, "An algorithm for suffix stripping" (1980), in two
// rule tables:
//
//   - `NltkExtensions` (default): the variant NLTK's PorterStemmer uses by
//     default. Spam models are almost always fitted with it, so serving must
//     reproduce it exactly.
//   - `Original`: the published algorithm with no departures.
//
// Words are handled as char slices. Vowels are a/e/i/o/u, plus `y` when it
// follows a consonant; every other character, digits and non-ASCII letters
// included, counts as a consonant. Within a rule list the first matching
// suffix ends the step even if its condition fails.

use serde::{Deserialize, Serialize};

use super::traits::Stemmer;

const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

/// Which Porter rule table to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PorterMode {
    #[default]
    #[serde(rename = "porter-nltk")]
    NltkExtensions,
    #[serde(rename = "porter-original")]
    Original,
}

impl PorterMode {
    pub fn id(self) -> &'static str {
        match self {
            PorterMode::NltkExtensions => "porter-nltk",
            PorterMode::Original => "porter-original",
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PorterStemmer {
    mode: PorterMode,
}

/// Result of scanning a rule list.
enum RuleOutcome {
    Applied(Vec<char>),
    /// A suffix matched but its condition did not hold.
    Blocked,
    NoMatch,
}

impl PorterStemmer {
    pub fn new(mode: PorterMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> PorterMode {
        self.mode
    }

    fn nltk(&self) -> bool {
        self.mode == PorterMode::NltkExtensions
    }

    fn step1a(&self, word: Vec<char>) -> Vec<char> {
        if self.nltk() && word.len() == 4 && ends_with(&word, "ies") {
            return replace_suffix(&word, "ies", "ie");
        }

        const RULES: [(&str, &str); 4] = [("sses", "ss"), ("ies", "i"), ("ss", "ss"), ("s", "")];
        match apply_rules(&word, &RULES, |_| true) {
            RuleOutcome::Applied(w) => w,
            _ => word,
        }
    }

    fn step1b(&self, word: Vec<char>) -> Vec<char> {
        if self.nltk() && ends_with(&word, "ied") {
            let replacement = if word.len() == 4 { "ie" } else { "i" };
            return replace_suffix(&word, "ied", replacement);
        }

        if ends_with(&word, "eed") {
            let stem = &word[..word.len() - 3];
            return if measure(stem) > 0 {
                append(stem, "ee")
            } else {
                word
            };
        }

        let stem = ["ed", "ing"].iter().find_map(|suffix| {
            if !ends_with(&word, suffix) {
                return None;
            }
            let stem = &word[..word.len() - suffix.len()];
            contains_vowel(stem).then(|| stem.to_vec())
        });
        let Some(mut stem) = stem else {
            return word;
        };

        for (suffix, replacement) in [("at", "ate"), ("bl", "ble"), ("iz", "ize")] {
            if ends_with(&stem, suffix) {
                return replace_suffix(&stem, suffix, replacement);
            }
        }

        if ends_double_consonant(&stem) {
            if !matches!(stem[stem.len() - 1], 'l' | 's' | 'z') {
                stem.pop();
            }
            return stem;
        }

        if measure(&stem) == 1 && self.ends_cvc(&stem) {
            stem.push('e');
        }
        stem
    }

    fn step1c(&self, word: Vec<char>) -> Vec<char> {
        if !ends_with(&word, "y") {
            return word;
        }
        let stem = &word[..word.len() - 1];
        let applies = if self.nltk() {
            stem.len() > 1 && is_consonant(stem, stem.len() - 1)
        } else {
            contains_vowel(stem)
        };
        if applies {
            append(stem, "i")
        } else {
            word
        }
    }

    fn step2(&self, word: Vec<char>) -> Vec<char> {
        // NLTK applies ALLI -> AL up front and feeds the result back through
        // the step, instead of after (A)BLI as published.
        if self.nltk()
            && ends_with(&word, "alli")
            && measure(&word[..word.len() - 4]) > 0
        {
            return self.step2(replace_suffix(&word, "alli", "al"));
        }

        let bli = if self.nltk() {
            ("bli", "ble")
        } else {
            ("abli", "able")
        };
        let mut rules = vec![
            ("ational", "ate"),
            ("tional", "tion"),
            ("enci", "ence"),
            ("anci", "ance"),
            ("izer", "ize"),
            bli,
            ("alli", "al"),
            ("entli", "ent"),
            ("eli", "e"),
            ("ousli", "ous"),
            ("ization", "ize"),
            ("ation", "ate"),
            ("ator", "ate"),
            ("alism", "al"),
            ("iveness", "ive"),
            ("fulness", "ful"),
            ("ousness", "ous"),
            ("aliti", "al"),
            ("iviti", "ive"),
            ("biliti", "ble"),
        ];
        if self.nltk() {
            rules.push(("fulli", "ful"));
        }

        match apply_rules(&word, &rules, |stem| measure(stem) > 0) {
            RuleOutcome::Applied(w) => w,
            RuleOutcome::Blocked => word,
            RuleOutcome::NoMatch => {
                // LOGI -> LOG keeps the `l` with the stem when measuring, so
                // short stems like "geo" and "theo" still qualify.
                if self.nltk()
                    && ends_with(&word, "logi")
                    && measure(&word[..word.len() - 3]) > 0
                {
                    let mut w = word;
                    w.pop();
                    w
                } else {
                    word
                }
            }
        }
    }

    fn step3(&self, word: Vec<char>) -> Vec<char> {
        const RULES: [(&str, &str); 7] = [
            ("icate", "ic"),
            ("ative", ""),
            ("alize", "al"),
            ("iciti", "ic"),
            ("ical", "ic"),
            ("ful", ""),
            ("ness", ""),
        ];
        match apply_rules(&word, &RULES, |stem| measure(stem) > 0) {
            RuleOutcome::Applied(w) => w,
            _ => word,
        }
    }

    fn step4(&self, word: Vec<char>) -> Vec<char> {
        // ION is the only suffix ending in `n`, so checking it after the
        // rest of the list preserves first-match order.
        const RULES: [(&str, &str); 18] = [
            ("al", ""),
            ("ance", ""),
            ("ence", ""),
            ("er", ""),
            ("ic", ""),
            ("able", ""),
            ("ible", ""),
            ("ant", ""),
            ("ement", ""),
            ("ment", ""),
            ("ent", ""),
            ("ou", ""),
            ("ism", ""),
            ("ate", ""),
            ("iti", ""),
            ("ous", ""),
            ("ive", ""),
            ("ize", ""),
        ];
        match apply_rules(&word, &RULES, |stem| measure(stem) > 1) {
            RuleOutcome::Applied(w) => w,
            RuleOutcome::Blocked => word,
            RuleOutcome::NoMatch => {
                if ends_with(&word, "ion") {
                    let stem = &word[..word.len() - 3];
                    let ends_s_or_t = matches!(stem.last(), Some('s' | 't'));
                    if measure(stem) > 1 && ends_s_or_t {
                        return stem.to_vec();
                    }
                }
                word
            }
        }
    }

    fn step5a(&self, word: Vec<char>) -> Vec<char> {
        if !ends_with(&word, "e") {
            return word;
        }
        let stem = &word[..word.len() - 1];
        let m = measure(stem);
        if m > 1 || (m == 1 && !self.ends_cvc(stem)) {
            stem.to_vec()
        } else {
            word
        }
    }

    fn step5b(&self, mut word: Vec<char>) -> Vec<char> {
        if ends_with(&word, "ll") && measure(&word[..word.len() - 1]) > 1 {
            word.pop();
        }
        word
    }

    /// `*o`: the stem ends consonant-vowel-consonant and the last consonant
    /// is not w, x or y. NLTK also accepts a two-letter vowel-consonant stem.
    fn ends_cvc(&self, word: &[char]) -> bool {
        let n = word.len();
        let classic = n >= 3
            && is_consonant(word, n - 3)
            && !is_consonant(word, n - 2)
            && is_consonant(word, n - 1)
            && !matches!(word[n - 1], 'w' | 'x' | 'y');
        let short = self.nltk() && n == 2 && !is_consonant(word, 0) && is_consonant(word, 1);
        classic || short
    }
}

impl Stemmer for PorterStemmer {
    fn stem(&self, word: &str) -> String {
        let lower = word.to_lowercase();

        if self.nltk() {
            if let Some(irregular) = irregular_form(&lower) {
                return irregular.to_string();
            }
            if lower.chars().count() <= 2 {
                return lower;
            }
        }

        let mut w: Vec<char> = lower.chars().collect();
        w = self.step1a(w);
        w = self.step1b(w);
        w = self.step1c(w);
        w = self.step2(w);
        w = self.step3(w);
        w = self.step4(w);
        w = self.step5a(w);
        w = self.step5b(w);
        w.into_iter().collect()
    }

    fn id(&self) -> &'static str {
        self.mode.id()
    }
}

/// Irregular forms NLTK maps directly instead of running the rules.
fn irregular_form(word: &str) -> Option<&'static str> {
    match word {
        "sky" | "skies" => Some("sky"),
        "dying" => Some("die"),
        "lying" => Some("lie"),
        "tying" => Some("tie"),
        "news" => Some("news"),
        "inning" | "innings" => Some("inning"),
        "outing" | "outings" => Some("outing"),
        "canning" | "cannings" => Some("canning"),
        "howe" => Some("howe"),
        "proceed" => Some("proceed"),
        "exceed" => Some("exceed"),
        "succeed" => Some("succeed"),
        _ => None,
    }
}

fn is_consonant(word: &[char], i: usize) -> bool {
    let c = word[i];
    if VOWELS.contains(&c) {
        return false;
    }
    if c == 'y' {
        return i == 0 || !is_consonant(word, i - 1);
    }
    true
}

/// Porter's m: the number of vowel-run → consonant-run transitions.
fn measure(stem: &[char]) -> usize {
    let mut m = 0;
    let mut prev_vowel = false;
    for i in 0..stem.len() {
        let vowel = !is_consonant(stem, i);
        if prev_vowel && !vowel {
            m += 1;
        }
        prev_vowel = vowel;
    }
    m
}

fn contains_vowel(stem: &[char]) -> bool {
    (0..stem.len()).any(|i| !is_consonant(stem, i))
}

fn ends_double_consonant(word: &[char]) -> bool {
    let n = word.len();
    n >= 2 && word[n - 1] == word[n - 2] && is_consonant(word, n - 1)
}

// Suffixes are ASCII, so byte length equals char length.
fn ends_with(word: &[char], suffix: &str) -> bool {
    word.len() >= suffix.len() && word[word.len() - suffix.len()..].iter().copied().eq(suffix.chars())
}

fn append(stem: &[char], tail: &str) -> Vec<char> {
    let mut w = stem.to_vec();
    w.extend(tail.chars());
    w
}

fn replace_suffix(word: &[char], suffix: &str, replacement: &str) -> Vec<char> {
    append(&word[..word.len() - suffix.len()], replacement)
}

fn apply_rules(
    word: &[char],
    rules: &[(&str, &str)],
    condition: impl Fn(&[char]) -> bool,
) -> RuleOutcome {
    for &(suffix, replacement) in rules {
        if ends_with(word, suffix) {
            let stem = &word[..word.len() - suffix.len()];
            return if condition(stem) {
                RuleOutcome::Applied(append(stem, replacement))
            } else {
                RuleOutcome::Blocked
            };
        }
    }
    RuleOutcome::NoMatch
}
