use serde::{Deserialize, Serialize};

use crate::{corpus::CorpusSource, trie::Suggestion};

pub const DEFAULT_ADDRESS: &str = "127.0.0.1:3000";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub app: AppConfig,
    #[serde(default)]
    pub corpus: Vec<CorpusSource>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub select_on_exact_match: Option<bool>,
}

/// Where a suggestion list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionType {
    /// Blank query: the overall best words.
    Top,
    /// Words completing the query prefix.
    Autocomplete,
}

#[derive(Debug, Serialize)]
pub struct SuggestResults {
    #[serde(rename = "type")]
    pub kind: SuggestionType,
    pub suggestions: Vec<Suggestion>,
}

#[derive(Debug, Deserialize, Default)]
pub struct SuggestQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Deserialize)]
pub struct SelectRequest {
    pub word: String,
}

#[derive(Debug, Serialize)]
pub struct SelectResult {
    pub word: String,
    pub selected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<Suggestion>,
}

#[derive(Debug, Serialize)]
pub struct WordInfo {
    pub word: String,
    pub valid_prefix: bool,
    pub complete_word: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_frequency: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_frequency: Option<u64>,
}

#[derive(Debug, Default, Serialize)]
pub struct Stats {
    pub words: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn s(word: &str, search: u64, data: u64) -> Suggestion {
        Suggestion {
            word: word.to_string(),
            search_frequency: search,
            data_frequency: data,
        }
    }

    #[test]
    fn suggest_results_json() {
        let res = SuggestResults {
            kind: SuggestionType::Autocomplete,
            suggestions: vec![s("apple", 2, 10), s("app", 0, 20)],
        };
        assert_eq!(
            serde_json::to_value(&res).expect("json"),
            json!({
                "type": "autocomplete",
                "suggestions": [
                    { "word": "apple", "search_frequency": 2, "data_frequency": 10 },
                    { "word": "app", "search_frequency": 0, "data_frequency": 20 }
                ]
            })
        );

        let res = SuggestResults {
            kind: SuggestionType::Top,
            suggestions: Vec::new(),
        };
        assert_eq!(
            serde_json::to_value(&res).expect("json"),
            json!({ "type": "top", "suggestions": [] })
        );
    }

    #[test]
    fn word_info_json_skips_missing_counters() {
        let info = WordInfo {
            word: "appl".to_string(),
            valid_prefix: true,
            complete_word: false,
            search_frequency: None,
            data_frequency: None,
        };
        assert_eq!(
            serde_json::to_value(&info).expect("json"),
            json!({ "word": "appl", "valid_prefix": true, "complete_word": false })
        );

        let info = WordInfo {
            word: "app".to_string(),
            valid_prefix: true,
            complete_word: true,
            search_frequency: Some(1),
            data_frequency: Some(20),
        };
        assert_eq!(
            serde_json::to_value(&info).expect("json"),
            json!({
                "word": "app",
                "valid_prefix": true,
                "complete_word": true,
                "search_frequency": 1,
                "data_frequency": 20
            })
        );
    }

    #[test]
    fn select_result_json() {
        let res = SelectResult {
            word: "zebra".to_string(),
            selected: false,
            suggestion: None,
        };
        assert_eq!(
            serde_json::to_value(&res).expect("json"),
            json!({ "word": "zebra", "selected": false })
        );

        let res = SelectResult {
            word: "apple".to_string(),
            selected: true,
            suggestion: Some(s("apple", 1, 10)),
        };
        assert_eq!(
            serde_json::to_value(&res).expect("json"),
            json!({
                "word": "apple",
                "selected": true,
                "suggestion": { "word": "apple", "search_frequency": 1, "data_frequency": 10 }
            })
        );
    }

    #[test]
    fn select_request_from_json() {
        let req: SelectRequest = serde_json::from_str(r#"{"word":"apple"}"#).expect("json");
        assert_eq!(req.word, "apple");
    }
}
