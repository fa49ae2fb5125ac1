//! Lookups for a single word: `word.json/{word}/...`.

use super::models::{
    AudioFile, Bigram, Definition, Example, ExampleSearchResults, FrequencySummary, Related,
    ScrabbleScore, Syllable, TextPron,
};
use super::{INCLUDE_TAGS, LIMIT, SKIP, USE_CANONICAL, get};
use crate::domains::tools::engine::{
    ParamKind, ParameterSpec, ResultShape, SchemaError, ToolDefinition,
};

const SOURCE_DICTIONARIES: &str = "Source dictionary to return definitions from.  If 'all' is received, results are returned from all sources. If multiple values are received (e.g. 'century,wiktionary'), results are returned from the first specified dictionary that has definitions. If left blank, results are returned from the first dictionary that has definitions. By default, dictionaries are searched in this order: ahd-5, wiktionary, webster, century, wordnet";

fn word(description: &'static str) -> ParameterSpec {
    ParameterSpec::path("word", description)
}

fn use_canonical() -> ParameterSpec {
    ParameterSpec::query("useCanonical", ParamKind::String, USE_CANONICAL)
}

fn limit() -> ParameterSpec {
    ParameterSpec::query("limit", ParamKind::Number, LIMIT)
}

pub fn phrases() -> Result<ToolDefinition, SchemaError> {
    get(
        "get_word_json_word_phrases",
        "Fetches bi-gram phrases for a word",
        "word.json/{word}/phrases",
        vec![
            word("Word to fetch phrases for"),
            use_canonical(),
            limit(),
            ParameterSpec::query("wlmi", ParamKind::Number, "Minimum WLMI for the phrase"),
        ],
        ResultShape::of::<Vec<Bigram>>(),
    )
}

pub fn scrabble_score() -> Result<ToolDefinition, SchemaError> {
    get(
        "get_word_json_word_scrabbleScore",
        "Returns the Scrabble score for a word",
        "word.json/{word}/scrabbleScore",
        vec![word("Word to get scrabble score for.")],
        ResultShape::of::<ScrabbleScore>(),
    )
}

pub fn definitions() -> Result<ToolDefinition, SchemaError> {
    get(
        "get_word_json_word_definitions",
        "Return definitions for a word",
        "word.json/{word}/definitions",
        vec![
            word("Word to return definitions for"),
            limit(),
            ParameterSpec::query("partOfSpeech", ParamKind::String, "CSV list of part-of-speech types"),
            ParameterSpec::query(
                "includeRelated",
                ParamKind::String,
                "Return related words with definitions",
            ),
            ParameterSpec::query("sourceDictionaries", ParamKind::Array, SOURCE_DICTIONARIES),
            use_canonical(),
            ParameterSpec::query("includeTags", ParamKind::String, INCLUDE_TAGS),
        ],
        ResultShape::of::<Vec<Definition>>(),
    )
}

pub fn frequency() -> Result<ToolDefinition, SchemaError> {
    get(
        "get_word_json_word_frequency",
        "Returns word usage over time",
        "word.json/{word}/frequency",
        vec![
            word("Word to return"),
            use_canonical(),
            ParameterSpec::query("startYear", ParamKind::Number, "Starting Year"),
            ParameterSpec::query("endYear", ParamKind::Number, "Ending Year"),
        ],
        ResultShape::of::<FrequencySummary>(),
    )
}

pub fn audio() -> Result<ToolDefinition, SchemaError> {
    get(
        "get_word_json_word_audio",
        "Fetches audio metadata for a word.",
        "word.json/{word}/audio",
        vec![word("Word to get audio for."), use_canonical(), limit()],
        ResultShape::of::<Vec<AudioFile>>(),
    )
}

pub fn examples() -> Result<ToolDefinition, SchemaError> {
    get(
        "get_word_json_word_examples",
        "Returns examples for a word",
        "word.json/{word}/examples",
        vec![
            word("Word to return examples for"),
            ParameterSpec::query(
                "includeDuplicates",
                ParamKind::String,
                "Show duplicate examples from different sources",
            ),
            use_canonical(),
            ParameterSpec::query("skip", ParamKind::Number, SKIP),
            limit(),
        ],
        ResultShape::of::<ExampleSearchResults>(),
    )
}

pub fn hyphenation() -> Result<ToolDefinition, SchemaError> {
    get(
        "get_word_json_word_hyphenation",
        "Returns syllable information for a word",
        "word.json/{word}/hyphenation",
        vec![
            word("Word to get syllables for"),
            use_canonical(),
            ParameterSpec::query(
                "sourceDictionary",
                ParamKind::String,
                "Get from a single dictionary. Valid options: ahd-5, century, wiktionary, webster, and wordnet.",
            ),
            limit(),
        ],
        ResultShape::of::<Vec<Syllable>>(),
    )
}

pub fn etymologies() -> Result<ToolDefinition, SchemaError> {
    get(
        "get_word_json_word_etymologies",
        "Fetches etymology data",
        "word.json/{word}/etymologies",
        vec![word("Word to return"), use_canonical()],
        ResultShape::of::<Vec<String>>(),
    )
}

pub fn related_words() -> Result<ToolDefinition, SchemaError> {
    get(
        "get_word_json_word_relatedWords",
        "Given a word as a string, returns relationships from the Word Graph",
        "word.json/{word}/relatedWords",
        vec![
            word("Word to fetch relationships for"),
            use_canonical(),
            ParameterSpec::query(
                "relationshipTypes",
                ParamKind::String,
                "Limits the total results per type of relationship type",
            ),
            ParameterSpec::query(
                "limitPerRelationshipType",
                ParamKind::Number,
                "Restrict to the supplied relationship types",
            ),
        ],
        ResultShape::of::<Vec<Related>>(),
    )
}

pub fn pronunciations() -> Result<ToolDefinition, SchemaError> {
    get(
        "get_word_json_word_pronunciations",
        "Returns text pronunciations for a given word",
        "word.json/{word}/pronunciations",
        vec![
            word("Word to get pronunciations for"),
            use_canonical(),
            ParameterSpec::query("sourceDictionary", ParamKind::String, "Get from a single dictionary"),
            ParameterSpec::query("typeFormat", ParamKind::String, "Text pronunciation type"),
            limit(),
        ],
        ResultShape::of::<Vec<TextPron>>(),
    )
}

pub fn top_example() -> Result<ToolDefinition, SchemaError> {
    get(
        "get_word_json_word_topExample",
        "Returns a top example for a word",
        "word.json/{word}/topExample",
        vec![word("Word to fetch examples for"), use_canonical()],
        ResultShape::of::<Example>(),
    )
}
