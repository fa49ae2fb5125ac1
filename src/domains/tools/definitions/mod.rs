//! Tool definitions module.
//!
//! One function per remote endpoint, grouped by API resource:
//! - `word`: `word.json/{word}/...` lookups for a single word
//! - `words`: `words.json/...` searches, random words and word of the day
//!
//! Each function only declares data (name, path, parameters, result model);
//! the behaviour is shared by the engine.

pub mod models;
pub mod word;
pub mod words;

use super::engine::{
    HttpMethod, ParameterSpec, ResultShape, SchemaDescriptor, SchemaError, ToolDefinition,
};

pub(crate) const USE_CANONICAL: &str = "If true will try to return the correct word root ('cats' -> 'cat'). If false returns exactly what was requested.";
pub(crate) const LIMIT: &str = "Maximum number of results to return";
pub(crate) const SKIP: &str = "Results to skip";
pub(crate) const INCLUDE_TAGS: &str = "Return a closed set of XML tags in response";
pub(crate) const MIN_CORPUS_COUNT: &str = "Minimum corpus frequency for terms";
pub(crate) const MAX_CORPUS_COUNT: &str = "Maximum corpus frequency for terms";
pub(crate) const MIN_LENGTH: &str = "Minimum word length";
pub(crate) const MAX_LENGTH: &str = "Maximum word length";
pub(crate) const SORT_BY: &str = "Attribute to sort by";
pub(crate) const SORT_ORDER: &str = "Sort direction";
pub(crate) const HAS_DICTIONARY_DEF: &str = "Only return words with dictionary definitions";

macro_rules! pos_description {
    ($lead:literal) => {
        concat!(
            $lead,
            " (allowable values are noun, adjective, verb, adverb, interjection, pronoun, preposition, abbreviation, affix, article, auxiliary-verb, conjunction, definite-article, family-name, given-name, idiom, imperative, noun-plural, noun-posessive, past-participle, phrasal-prefix, proper-noun, proper-noun-plural, proper-noun-posessive, suffix, verb-intransitive, verb-transitive)"
        )
    };
}

pub(crate) const INCLUDE_POS_CSV: &str = pos_description!("CSV part-of-speech values to include");
pub(crate) const EXCLUDE_POS_CSV: &str = pos_description!("CSV part-of-speech values to exclude");
pub(crate) const INCLUDE_POS: &str =
    pos_description!("Only include these comma-delimited parts of speech");
pub(crate) const EXCLUDE_POS: &str = pos_description!("Exclude these comma-delimited parts of speech");

/// Declare a `GET` endpoint.
pub(crate) fn get(
    name: &'static str,
    description: &'static str,
    path: &'static str,
    parameters: Vec<ParameterSpec>,
    shape: ResultShape,
) -> Result<ToolDefinition, SchemaError> {
    let schema = SchemaDescriptor::new(name, description, HttpMethod::Get, path, parameters)?;
    Ok(ToolDefinition::new(schema, shape))
}

/// All tool definitions, in registry order.
pub fn catalog() -> Result<Vec<ToolDefinition>, SchemaError> {
    Ok(vec![
        word::phrases()?,
        word::scrabble_score()?,
        word::definitions()?,
        word::frequency()?,
        word::audio()?,
        words::random_words()?,
        words::search()?,
        word::examples()?,
        word::hyphenation()?,
        words::random_word()?,
        word::etymologies()?,
        word::related_words()?,
        words::word_of_the_day()?,
        word::pronunciations()?,
        words::reverse_dictionary()?,
        word::top_example()?,
    ])
}
