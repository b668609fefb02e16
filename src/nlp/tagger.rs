//! Part-of-speech tagging collaborator
//!
//! The scorer only consumes one bit per word: is the tag noun-like or
//! adjective-like? [`PosTagger`] is the seam an external tagging service
//! plugs into; [`HeuristicTagger`] is the bundled suffix-based
//! implementation. Taggers are constructed once per process and passed by
//! reference into the scorer, never re-instantiated per phrase.

/// Part-of-speech tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PosTag {
    Noun,
    ProperNoun,
    Adjective,
    Verb,
    Adverb,
    Pronoun,
    Determiner,
    Preposition,
    Conjunction,
    Numeral,
    Particle,
    Other,
}

impl PosTag {
    /// Check if this tag is noun-class (common or proper)
    pub fn is_noun_like(&self) -> bool {
        matches!(self, PosTag::Noun | PosTag::ProperNoun)
    }

    /// Check if this tag is adjective-class
    pub fn is_adjective_like(&self) -> bool {
        matches!(self, PosTag::Adjective)
    }
}

/// A per-word grammatical tagger.
///
/// Implementations must be cheap to call per word; any heavy model loading
/// belongs in construction, done once per process.
pub trait PosTagger: Sync + std::fmt::Debug {
    /// Tag a single word
    fn tag_word(&self, word: &str) -> PosTag;

    /// Check if every word of the phrase tags noun-like or adjective-like.
    ///
    /// This is the contract the statistical scorer's POS boost consumes.
    fn is_noun_adjective_phrase(&self, phrase: &str) -> bool {
        phrase.split_whitespace().all(|word| {
            let tag = self.tag_word(word);
            tag.is_noun_like() || tag.is_adjective_like()
        })
    }
}

/// Suffix- and function-word-based heuristic tagger.
///
/// Intentionally simple: it exists so the POS-filtered model runs without
/// an external tagging service. Accuracy is traded for zero setup cost.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicTagger;

impl HeuristicTagger {
    /// Create a new heuristic tagger
    pub fn new() -> Self {
        Self
    }

    fn function_word_pos(lower: &str) -> Option<PosTag> {
        let pos = match lower {
            // Determiners
            "a" | "an" | "the" | "this" | "that" | "these" | "those" | "some" | "any"
            | "each" | "every" | "no" => PosTag::Determiner,
            // Conjunctions
            "and" | "or" | "but" | "nor" | "so" | "yet" | "if" | "because" | "while"
            | "although" | "when" | "unless" | "until" | "since" => PosTag::Conjunction,
            // Prepositions
            "of" | "to" | "in" | "for" | "on" | "with" | "at" | "from" | "by" | "about"
            | "as" | "into" | "through" | "after" | "over" | "between" | "during"
            | "without" | "before" | "under" | "among" => PosTag::Preposition,
            // Pronouns
            "i" | "you" | "he" | "she" | "it" | "we" | "they" | "me" | "him" | "her"
            | "us" | "them" => PosTag::Pronoun,
            "not" | "n't" => PosTag::Particle,
            _ => return None,
        };
        Some(pos)
    }
}

impl PosTagger for HeuristicTagger {
    fn tag_word(&self, word: &str) -> PosTag {
        let lower = word.to_lowercase();

        if let Some(pos) = Self::function_word_pos(&lower) {
            return pos;
        }

        // Capitalized word (proper noun or sentence start)
        if word
            .chars()
            .next()
            .map(|c| c.is_uppercase())
            .unwrap_or(false)
            && word.chars().skip(1).all(|c| c.is_lowercase())
        {
            return PosTag::ProperNoun;
        }

        // Common adjective suffixes
        if lower.ends_with("ful")
            || lower.ends_with("less")
            || lower.ends_with("ous")
            || lower.ends_with("ive")
            || lower.ends_with("able")
            || lower.ends_with("ible")
            || lower.ends_with("al")
            || lower.ends_with("ic")
        {
            return PosTag::Adjective;
        }

        // Common verb suffixes
        if lower.ends_with("ing") || lower.ends_with("ed") || lower.ends_with("ize") {
            return PosTag::Verb;
        }

        // Common adverb suffix
        if lower.ends_with("ly") {
            return PosTag::Adverb;
        }

        // Numbers
        if word
            .chars()
            .all(|c| c.is_ascii_digit() || c == '.' || c == ',')
        {
            return PosTag::Numeral;
        }

        // Default to noun (most content words are nouns)
        PosTag::Noun
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noun_and_adjective_classes() {
        assert!(PosTag::Noun.is_noun_like());
        assert!(PosTag::ProperNoun.is_noun_like());
        assert!(!PosTag::Verb.is_noun_like());
        assert!(PosTag::Adjective.is_adjective_like());
        assert!(!PosTag::Noun.is_adjective_like());
    }

    #[test]
    fn test_heuristic_suffixes() {
        let tagger = HeuristicTagger::new();
        assert_eq!(tagger.tag_word("semantic"), PosTag::Adjective);
        assert_eq!(tagger.tag_word("learning"), PosTag::Verb);
        assert_eq!(tagger.tag_word("quickly"), PosTag::Adverb);
        assert_eq!(tagger.tag_word("network"), PosTag::Noun);
        assert_eq!(tagger.tag_word("42"), PosTag::Numeral);
        assert_eq!(tagger.tag_word("Turing"), PosTag::ProperNoun);
    }

    #[test]
    fn test_function_words() {
        let tagger = HeuristicTagger::new();
        assert_eq!(tagger.tag_word("the"), PosTag::Determiner);
        assert_eq!(tagger.tag_word("of"), PosTag::Preposition);
        assert_eq!(tagger.tag_word("and"), PosTag::Conjunction);
    }

    #[test]
    fn test_noun_adjective_phrase() {
        let tagger = HeuristicTagger::new();
        assert!(tagger.is_noun_adjective_phrase("semantic network"));
        assert!(tagger.is_noun_adjective_phrase("network"));
        // "of" is a preposition, so the phrase fails the check
        assert!(!tagger.is_noun_adjective_phrase("network of networks"));
        // "learning" tags as a verb
        assert!(!tagger.is_noun_adjective_phrase("machine learning"));
    }
}
