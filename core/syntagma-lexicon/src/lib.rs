//! Closed-lexicon classifiers over surface words.
//!
//! None of these can fail: a word that matches nothing is simply not a
//! numeral or not a currency.

use once_cell::sync::Lazy;
use regex::Regex;

/// French cardinal number words.
pub const NUMERALS: &[&str] = &[
    "un", "deux", "trois", "quatre", "cinq", "six", "sept", "huit", "neuf", "dix", "onze",
    "douze", "treize", "quatorze", "quinze", "seize", "vingt", "trente", "quarante",
    "cinquante", "soixante", "cent", "cents", "mil", "mille", "million", "millions",
    "milliard", "milliards",
];

/// Currency names and symbols recognised at the start of a word.
pub const CURRENCIES: &[&str] = &["euros", "Francs", "francs", "EUROS", "$", "€"];

// Anchored at the start only: "12h30" and "3,5kg" count as numerals.
static DECIMAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+[,.]?[0-9]*([eE][0-9]+)?").expect("valid decimal pattern"));

/// True for French cardinal words and for words starting with a decimal number.
///
/// "un" is excluded because it is far more often the indefinite article.
pub fn is_numeral(word: &str) -> bool {
    if word != "un" && NUMERALS.contains(&word) {
        return true;
    }
    DECIMAL.is_match(word)
}

/// True when the word starts with a currency name or symbol.
pub fn is_currency(word: &str) -> bool {
    CURRENCIES.iter().any(|currency| word.starts_with(currency))
}
