//! Keyword candidates: content words in argument or modifier position.

use std::collections::HashMap;

use syntagma_doc::{Document, TokenRef};

/// Whether a token looks like a keyword of its sentence.
///
/// Nouns governed by a preposition, infinitive or coordination, verbs in
/// argument or root position, adjectives modifying a noun. Numbers and
/// currencies never qualify.
pub fn is_keyword(token: TokenRef<'_>) -> bool {
    if token.is_numeral() || token.is_currency() {
        return false;
    }

    let head_pos = token.head().map_or("root", |head| head.token().pos.as_str());
    let pos = token.pos.as_str();
    let dep = token.dep.as_str();

    let noun = pos == "NC"
        && matches!(dep, "prep" | "obj" | "dep_coord")
        && matches!(head_pos, "P" | "VINF" | "P+D" | "CC");
    let verb = matches!(pos, "V" | "VPP" | "VINF")
        && matches!(dep, "obj" | "suj" | "root")
        && matches!(head_pos, "V" | "CS" | "VPR" | "root");
    let adjective = pos == "ADJ" && dep == "mod" && head_pos == "NC";

    noun || verb || adjective
}

/// Keyword counts over the document, most frequent first, ties by word.
pub fn extract(document: &Document) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for sentence in document {
        for token in sentence.iter().filter(|token| is_keyword(*token)) {
            *counts.entry(token.token().word.as_str()).or_default() += 1;
        }
    }

    let mut counts: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(word, count)| (word.to_string(), count))
        .collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    counts
}
