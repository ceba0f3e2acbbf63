use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};

use super::{json, ApiResp, Ctx, Result};
use crate::models::{
    SelectRequest, SelectResult, Stats, SuggestQuery, SuggestResults, SuggestionType, WordInfo,
};

/// GET /api/suggest?q= - Ranked completions for a prefix.
/// A blank query returns the overall top words.
pub async fn suggest(
    State(ctx): State<Arc<Ctx>>,
    Query(query): Query<SuggestQuery>,
) -> Result<ApiResp<SuggestResults>> {
    if query.q.trim().is_empty() {
        let trie = ctx.trie.read()?;
        return Ok(json(SuggestResults {
            kind: SuggestionType::Top,
            suggestions: trie.suggest(""),
        }));
    }

    // Typing out a whole known word counts as picking it. Only exact hits
    // take the write lock.
    let exact = ctx.consts.select_on_exact_match && ctx.trie.read()?.is_complete_word(&query.q);
    if exact {
        let mut trie = ctx.trie.write()?;
        if trie.record_selection(&query.q) {
            log::debug!("exact match selection: {}", query.q);
        }
    }

    let trie = ctx.trie.read()?;
    Ok(json(SuggestResults {
        kind: SuggestionType::Autocomplete,
        suggestions: trie.suggest(&query.q),
    }))
}

/// POST /api/select - Record that a user picked a word. Unknown (or empty)
/// words are a no-op with `selected: false`.
pub async fn select(
    State(ctx): State<Arc<Ctx>>,
    Json(req): Json<SelectRequest>,
) -> Result<ApiResp<SelectResult>> {
    let mut trie = ctx.trie.write()?;
    let selected = trie.record_selection(&req.word);
    if selected {
        log::debug!("selection: {}", req.word);
    }

    Ok(json(SelectResult {
        suggestion: trie.get(&req.word),
        word: req.word,
        selected,
    }))
}

/// GET /api/words/{word} - Prefix and word existence checks.
pub async fn get_word(
    State(ctx): State<Arc<Ctx>>,
    Path(word): Path<String>,
) -> Result<ApiResp<WordInfo>> {
    let trie = ctx.trie.read()?;
    let counts = trie.get(&word);

    Ok(json(WordInfo {
        valid_prefix: trie.is_valid_prefix(&word),
        complete_word: trie.is_complete_word(&word),
        search_frequency: counts.as_ref().map(|s| s.search_frequency),
        data_frequency: counts.as_ref().map(|s| s.data_frequency),
        word,
    }))
}

/// GET /api/stats
pub async fn get_stats(State(ctx): State<Arc<Ctx>>) -> Result<ApiResp<Stats>> {
    let trie = ctx.trie.read()?;
    Ok(json(Stats { words: trie.len() }))
}
