//! Response models of the Wordnik API.
//!
//! These types describe the result shapes the tools expect. They are used to
//! check a response before it is pretty-printed; the printed output is the
//! response itself, so fields not listed here are kept. Every field is
//! optional because the API omits empty values.

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Definition {
    pub example_uses: Option<Vec<Value>>,
    pub extended_text: Option<String>,
    pub sequence: Option<String>,
    pub text_prons: Option<Vec<Value>>,
    pub notes: Option<Vec<Value>>,
    pub attribution_url: Option<String>,
    pub text: Option<String>,
    pub seq_string: Option<String>,
    pub attribution_text: Option<String>,
    pub related_words: Option<Vec<Value>>,
    pub citations: Option<Vec<Value>>,
    pub word: Option<String>,
    pub score: Option<f64>,
    pub source_dictionary: Option<String>,
    pub labels: Option<Vec<Value>>,
    pub part_of_speech: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioFile {
    pub comment_count: Option<i64>,
    pub created_at: Option<String>,
    pub created_by: Option<String>,
    pub file_url: Option<String>,
    pub id: Option<i64>,
    pub vote_count: Option<i64>,
    pub attribution_text: Option<String>,
    pub description: Option<String>,
    pub vote_weighted_average: Option<f64>,
    pub duration: Option<f64>,
    pub audio_type: Option<String>,
    pub vote_average: Option<f64>,
    pub word: Option<String>,
    pub attribution_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bigram {
    pub count: Option<i64>,
    pub gram1: Option<String>,
    pub gram2: Option<String>,
    pub mi: Option<f64>,
    pub wlmi: Option<f64>,
}

/// `scrabbleScore` returns a bare `{"value": n}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ScrabbleScore {
    pub value: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Frequency {
    pub year: Option<i64>,
    pub count: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrequencySummary {
    pub unknown_year_count: Option<i64>,
    pub word: Option<String>,
    pub frequency: Option<Vec<Frequency>>,
    pub frequency_string: Option<String>,
    pub total_count: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordObject {
    pub word: Option<String>,
    pub canonical_form: Option<String>,
    pub id: Option<i64>,
    pub original_word: Option<String>,
    pub suggestions: Option<Vec<String>>,
    pub vulgar: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordSearchResult {
    pub lexicality: Option<f64>,
    pub word: Option<String>,
    pub count: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordSearchResults {
    pub total_results: Option<i64>,
    pub search_results: Option<Vec<WordSearchResult>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentProvider {
    pub id: Option<i64>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sentence {
    pub scored_words: Option<Vec<Value>>,
    pub display: Option<String>,
    pub document_metadata_id: Option<i64>,
    pub has_scored_words: Option<bool>,
    pub id: Option<i64>,
    pub rating: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredWord {
    pub lemma: Option<String>,
    pub score: Option<f64>,
    pub stopword: Option<bool>,
    pub word_type: Option<String>,
    pub base_word_score: Option<f64>,
    pub part_of_speech: Option<String>,
    pub position: Option<i64>,
    pub sentence_id: Option<i64>,
    pub word: Option<String>,
    pub doc_term_count: Option<i64>,
    pub id: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Example {
    pub id: Option<i64>,
    pub rating: Option<f64>,
    pub text: Option<String>,
    pub year: Option<i64>,
    pub url: Option<String>,
    pub word: Option<String>,
    pub example_id: Option<i64>,
    pub sentence: Option<Sentence>,
    pub document_id: Option<i64>,
    pub provider: Option<ContentProvider>,
    pub score: Option<ScoredWord>,
    pub title: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleSearchResults {
    pub examples: Option<Vec<Example>>,
    pub facets: Option<Vec<Value>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Syllable {
    pub text: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub seq: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Related {
    pub label1: Option<String>,
    pub label2: Option<String>,
    pub label3: Option<String>,
    pub label4: Option<String>,
    pub relationship_type: Option<String>,
    pub words: Option<Vec<String>>,
    pub gram: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordOfTheDay {
    pub publish_date: Option<String>,
    pub content_provider: Option<ContentProvider>,
    pub examples: Option<Vec<Value>>,
    pub id: Option<i64>,
    pub created_by: Option<String>,
    pub html_extra: Option<String>,
    pub note: Option<String>,
    pub word: Option<String>,
    pub definitions: Option<Vec<Value>>,
    pub category: Option<String>,
    pub created_at: Option<String>,
    pub parent_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextPron {
    pub raw: Option<String>,
    pub raw_type: Option<String>,
    pub seq: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefinitionSearchResults {
    pub results: Option<Vec<Value>>,
    pub total_results: Option<i64>,
}
