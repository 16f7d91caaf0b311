//! Sentence pair and alignment data structures
//!
//! These mirror the JSON shape delivered by the alignment backend. The data is
//! treated as already validated; the renderer only guards against dangling
//! token references.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::layer::LayerType;

/// Languages supported by the alignment backend
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    /// Basque
    Eu,
    /// English
    En,
    /// Spanish
    Es,
    /// French
    Fr,
}

impl LanguageCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageCode::Eu => "eu",
            LanguageCode::En => "en",
            LanguageCode::Es => "es",
            LanguageCode::Fr => "fr",
        }
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which row of the visualization a token belongs to
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TokenSide {
    Source,
    Target,
}

impl TokenSide {
    /// Value used for the `data-token-type` attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenSide::Source => "source",
            TokenSide::Target => "target",
        }
    }

    pub fn opposite(&self) -> TokenSide {
        match self {
            TokenSide::Source => TokenSide::Target,
            TokenSide::Target => TokenSide::Source,
        }
    }

    pub fn parse(value: &str) -> Option<TokenSide> {
        match value {
            "source" => Some(TokenSide::Source),
            "target" => Some(TokenSide::Target),
            _ => None,
        }
    }
}

/// A single analysed word
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Token {
    /// Identifier, unique within its sentence side (e.g. "s3", "t1")
    pub id: String,

    /// Surface form as it appears in the sentence
    pub form: String,

    pub lemma: String,

    /// Universal POS tag
    #[serde(rename = "pos")]
    pub part_of_speech: String,

    /// Morphological features ("Case=Erg", "Number=Sing", ...)
    #[serde(default)]
    pub features: Vec<String>,
}

/// A sentence split into tokens, in surface order
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TokenizedSentence {
    #[serde(rename = "lang")]
    pub language: LanguageCode,

    pub text: String,

    pub tokens: Vec<Token>,
}

impl TokenizedSentence {
    pub fn contains_token(&self, id: &str) -> bool {
        self.tokens.iter().any(|token| token.id == id)
    }
}

/// Many-to-many correspondence between source and target tokens
///
/// Id lists keep their wire order: the first id that resolves to a measured
/// position supplies the vertical anchor of its side.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Alignment {
    #[serde(rename = "source")]
    pub source_token_ids: Vec<String>,

    #[serde(rename = "target")]
    pub target_token_ids: Vec<String>,

    /// Human readable description, e.g. "cat→katu"
    pub label: String,
}

impl Alignment {
    pub fn new(source: &[&str], target: &[&str], label: &str) -> Self {
        Self {
            source_token_ids: source.iter().map(|id| id.to_string()).collect(),
            target_token_ids: target.iter().map(|id| id.to_string()).collect(),
            label: label.to_string(),
        }
    }

    /// Token ids on the given side of the alignment
    pub fn token_ids(&self, side: TokenSide) -> &[String] {
        match side {
            TokenSide::Source => &self.source_token_ids,
            TokenSide::Target => &self.target_token_ids,
        }
    }

    pub fn touches(&self, token_id: &str, side: TokenSide) -> bool {
        self.token_ids(side).iter().any(|id| id == token_id)
    }
}

/// Alignments per analysis layer; each list is in insertion order
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct AlignmentLayers {
    #[serde(default)]
    pub lexical: Vec<Alignment>,

    #[serde(default)]
    pub grammatical_relations: Vec<Alignment>,

    #[serde(default)]
    pub features: Vec<Alignment>,
}

impl AlignmentLayers {
    pub fn get(&self, layer: LayerType) -> &[Alignment] {
        match layer {
            LayerType::Lexical => &self.lexical,
            LayerType::GrammaticalRelations => &self.grammatical_relations,
            LayerType::Features => &self.features,
        }
    }
}

/// The unit the renderer displays: one sentence and its translation
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SentencePair {
    pub id: String,
    pub source: TokenizedSentence,
    pub target: TokenizedSentence,
    pub layers: AlignmentLayers,
}

impl SentencePair {
    pub fn sentence(&self, side: TokenSide) -> &TokenizedSentence {
        match side {
            TokenSide::Source => &self.source,
            TokenSide::Target => &self.target,
        }
    }

    pub fn alignments(&self, layer: LayerType) -> &[Alignment] {
        self.layers.get(layer)
    }

    /// Whether every id of the alignment exists in its sentence
    ///
    /// Dangling alignments are still accepted; they simply never resolve to
    /// geometry and so produce no ribbon.
    pub fn is_fully_referenced(&self, alignment: &Alignment) -> bool {
        alignment.source_token_ids.iter().all(|id| self.source.contains_token(id))
            && alignment.target_token_ids.iter().all(|id| self.target.contains_token(id))
    }
}

/// Envelope holding every sentence pair of one response or fixture file
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct AlignmentData {
    pub sentences: Vec<SentencePair>,
}

impl AlignmentData {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn sentence(&self, id: &str) -> Option<&SentencePair> {
        self.sentences.iter().find(|pair| pair.id == id)
    }

    pub fn first(&self) -> Option<&SentencePair> {
        self.sentences.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAIR_JSON: &str = r#"{
        "id": "p1",
        "source": {
            "lang": "en",
            "text": "the cat",
            "tokens": [
                {"id": "s1", "form": "the", "lemma": "the", "pos": "DET"},
                {"id": "s2", "form": "cat", "lemma": "cat", "pos": "NOUN", "features": ["Number=Sing"]}
            ]
        },
        "target": {
            "lang": "eu",
            "text": "katua",
            "tokens": [
                {"id": "t1", "form": "katu", "lemma": "katu", "pos": "NOUN"},
                {"id": "t2", "form": "a", "lemma": "a", "pos": "DET"}
            ]
        },
        "layers": {
            "lexical": [{"source": ["s2"], "target": ["t1"], "label": "cat→katu"}]
        }
    }"#;

    #[test]
    fn test_deserialize_wire_names() {
        let pair: SentencePair = serde_json::from_str(PAIR_JSON).unwrap();
        assert_eq!(pair.source.language, LanguageCode::En);
        assert_eq!(pair.target.language, LanguageCode::Eu);
        assert_eq!(pair.source.tokens[1].part_of_speech, "NOUN");
        assert_eq!(pair.source.tokens[1].features, vec!["Number=Sing"]);
        assert!(pair.source.tokens[0].features.is_empty());
        assert_eq!(pair.layers.lexical[0].source_token_ids, vec!["s2"]);
    }

    #[test]
    fn test_missing_layers_default_to_empty() {
        let pair: SentencePair = serde_json::from_str(PAIR_JSON).unwrap();
        assert!(pair.alignments(LayerType::GrammaticalRelations).is_empty());
        assert!(pair.alignments(LayerType::Features).is_empty());
        assert_eq!(pair.alignments(LayerType::Lexical).len(), 1);
    }

    #[test]
    fn test_dangling_reference_detection() {
        let pair: SentencePair = serde_json::from_str(PAIR_JSON).unwrap();
        assert!(pair.is_fully_referenced(&pair.layers.lexical[0]));
        assert!(!pair.is_fully_referenced(&Alignment::new(&["s1"], &["t9"], "dangling")));
    }

    #[test]
    fn test_envelope_lookup() {
        let json = format!(r#"{{"sentences": [{}]}}"#, PAIR_JSON);
        let data = AlignmentData::from_json(&json).unwrap();
        assert_eq!(data.first().map(|p| p.id.as_str()), Some("p1"));
        assert!(data.sentence("p1").is_some());
        assert!(data.sentence("missing").is_none());
    }

    #[test]
    fn test_side_helpers() {
        assert_eq!(TokenSide::Source.opposite(), TokenSide::Target);
        assert_eq!(TokenSide::parse("target"), Some(TokenSide::Target));
        assert_eq!(TokenSide::parse("middle"), None);
        let alignment = Alignment::new(&["s1", "s2"], &["t1"], "x");
        assert!(alignment.touches("s2", TokenSide::Source));
        assert!(!alignment.touches("s2", TokenSide::Target));
    }
}
