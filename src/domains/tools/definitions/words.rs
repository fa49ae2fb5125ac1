//! Searches across the word list: `words.json/...`.

use super::models::{DefinitionSearchResults, WordObject, WordOfTheDay, WordSearchResults};
use super::{
    EXCLUDE_POS, EXCLUDE_POS_CSV, HAS_DICTIONARY_DEF, INCLUDE_POS, INCLUDE_POS_CSV, INCLUDE_TAGS,
    LIMIT, MAX_CORPUS_COUNT, MAX_LENGTH, MIN_CORPUS_COUNT, MIN_LENGTH, SKIP, SORT_BY, SORT_ORDER,
    get,
};
use crate::domains::tools::engine::{
    ParamKind, ParameterSpec, ResultShape, SchemaError, ToolDefinition,
};

/// Filters shared by `randomWord` and `randomWords`.
fn random_filters() -> Vec<ParameterSpec> {
    vec![
        ParameterSpec::query("hasDictionaryDef", ParamKind::String, HAS_DICTIONARY_DEF),
        ParameterSpec::query("includePartOfSpeech", ParamKind::String, INCLUDE_POS_CSV),
        ParameterSpec::query("excludePartOfSpeech", ParamKind::String, EXCLUDE_POS_CSV),
        ParameterSpec::query("minCorpusCount", ParamKind::Number, MIN_CORPUS_COUNT),
        ParameterSpec::query("maxCorpusCount", ParamKind::Number, MAX_CORPUS_COUNT),
        ParameterSpec::query("minDictionaryCount", ParamKind::Number, "Minimum dictionary count"),
        ParameterSpec::query("maxDictionaryCount", ParamKind::Number, "Maximum dictionary count"),
        ParameterSpec::query("minLength", ParamKind::Number, MIN_LENGTH),
        ParameterSpec::query("maxLength", ParamKind::Number, MAX_LENGTH),
    ]
}

pub fn random_words() -> Result<ToolDefinition, SchemaError> {
    let mut parameters = random_filters();
    parameters.extend([
        ParameterSpec::query("sortBy", ParamKind::String, SORT_BY),
        ParameterSpec::query("sortOrder", ParamKind::String, SORT_ORDER),
        ParameterSpec::query("limit", ParamKind::Number, LIMIT),
    ]);

    get(
        "get_words_json_randomWords",
        "Returns an array of random WordObjects",
        "words.json/randomWords",
        parameters,
        ResultShape::of::<Vec<WordObject>>(),
    )
}

pub fn random_word() -> Result<ToolDefinition, SchemaError> {
    get(
        "get_words_json_randomWord",
        "Returns a single random WordObject",
        "words.json/randomWord",
        random_filters(),
        ResultShape::of::<WordObject>(),
    )
}

pub fn search() -> Result<ToolDefinition, SchemaError> {
    get(
        "get_words_json_search_query",
        "Searches words",
        "words.json/search/{query}",
        vec![
            ParameterSpec::query(
                "allowRegex",
                ParamKind::String,
                "Search term is a Regular Expression",
            ),
            ParameterSpec::path("query", "Search query"),
            ParameterSpec::query("caseSensitive", ParamKind::String, "Search case sensitive"),
            ParameterSpec::query("includePartOfSpeech", ParamKind::String, INCLUDE_POS),
            ParameterSpec::query("excludePartOfSpeech", ParamKind::String, EXCLUDE_POS),
            ParameterSpec::query("minCorpusCount", ParamKind::Number, MIN_CORPUS_COUNT),
            ParameterSpec::query("maxCorpusCount", ParamKind::Number, MAX_CORPUS_COUNT),
            ParameterSpec::query(
                "minDictionaryCount",
                ParamKind::Number,
                "Minimum number of dictionary entries for words returned",
            ),
            ParameterSpec::query(
                "maxDictionaryCount",
                ParamKind::Number,
                "Maximum dictionary definition count",
            ),
            ParameterSpec::query("minLength", ParamKind::Number, MIN_LENGTH),
            ParameterSpec::query("maxLength", ParamKind::Number, MAX_LENGTH),
            ParameterSpec::query("skip", ParamKind::Number, SKIP),
            ParameterSpec::query("limit", ParamKind::Number, LIMIT),
        ],
        ResultShape::of::<WordSearchResults>(),
    )
}

pub fn word_of_the_day() -> Result<ToolDefinition, SchemaError> {
    get(
        "get_words_json_wordOfTheDay",
        "Returns a specific WordOfTheDay",
        "words.json/wordOfTheDay",
        vec![ParameterSpec::query(
            "date",
            ParamKind::String,
            "Fetches by date in yyyy-MM-dd",
        )],
        ResultShape::of::<WordOfTheDay>(),
    )
}

pub fn reverse_dictionary() -> Result<ToolDefinition, SchemaError> {
    get(
        "get_words_json_reverseDictionary",
        "Reverse dictionary search",
        "words.json/reverseDictionary",
        vec![
            ParameterSpec::query("query", ParamKind::String, "Search term").required(),
            ParameterSpec::query(
                "findSenseForWord",
                ParamKind::String,
                "Restricts words and finds closest sense",
            ),
            ParameterSpec::query(
                "includeSourceDictionaries",
                ParamKind::String,
                "Only include these comma-delimited source dictionaries",
            ),
            ParameterSpec::query(
                "excludeSourceDictionaries",
                ParamKind::String,
                "Exclude these comma-delimited source dictionaries",
            ),
            ParameterSpec::query("includePartOfSpeech", ParamKind::String, INCLUDE_POS),
            ParameterSpec::query("excludePartOfSpeech", ParamKind::String, EXCLUDE_POS),
            ParameterSpec::query("minCorpusCount", ParamKind::Number, MIN_CORPUS_COUNT),
            ParameterSpec::query("maxCorpusCount", ParamKind::Number, MAX_CORPUS_COUNT),
            ParameterSpec::query("minLength", ParamKind::Number, MIN_LENGTH),
            ParameterSpec::query("maxLength", ParamKind::Number, MAX_LENGTH),
            ParameterSpec::query("expandTerms", ParamKind::String, "Expand terms"),
            ParameterSpec::query("includeTags", ParamKind::String, INCLUDE_TAGS),
            ParameterSpec::query("sortBy", ParamKind::String, SORT_BY),
            ParameterSpec::query("sortOrder", ParamKind::String, SORT_ORDER),
            ParameterSpec::query("skip", ParamKind::String, SKIP),
            ParameterSpec::query("limit", ParamKind::Number, LIMIT),
        ],
        ResultShape::of::<DefinitionSearchResults>(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::engine::ParamLocation;

    #[test]
    fn test_random_words_extends_random_word() {
        let single = random_word().unwrap();
        let many = random_words().unwrap();
        let single_keys: Vec<_> = single.schema.parameters().iter().map(|p| p.key).collect();
        let many_keys: Vec<_> = many.schema.parameters().iter().map(|p| p.key).collect();

        assert_eq!(single_keys.len(), 9);
        assert_eq!(&many_keys[..9], &single_keys[..]);
        assert_eq!(&many_keys[9..], &["sortBy", "sortOrder", "limit"]);
    }

    #[test]
    fn test_search_query_is_path_parameter() {
        let definition = search().unwrap();
        let query = definition.schema.parameter("query").unwrap();
        assert_eq!(query.location, ParamLocation::Path);
        assert!(query.required);
        assert_eq!(definition.schema.parameters()[0].key, "allowRegex");
    }

    #[test]
    fn test_reverse_dictionary_query_is_required_query_parameter() {
        let definition = reverse_dictionary().unwrap();
        let query = definition.schema.parameter("query").unwrap();
        assert_eq!(query.location, ParamLocation::Query);
        assert!(query.required);
        assert_eq!(
            definition.schema.parameter("skip").unwrap().kind,
            ParamKind::String
        );
        assert_eq!(definition.schema.parameter("limit").unwrap().kind, ParamKind::Number);
    }

    #[test]
    fn test_word_of_the_day_has_optional_date() {
        let definition = word_of_the_day().unwrap();
        let date = definition.schema.parameter("date").unwrap();
        assert!(!date.required);
        assert_eq!(definition.schema.input_schema().get("required"), None);
    }
}
