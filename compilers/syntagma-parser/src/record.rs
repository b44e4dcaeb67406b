//! Single-line grammar of the analyzer output.
//!
//! A token line is tab separated:
//! `id  word  lemma  pos  <pos>  feats  head  dep  [...]`
//! Field 4 (the fine-grained tag) and anything after field 7 are ignored.

use log::warn;
use nom::{
    bytes::complete::take_till,
    character::complete::char,
    combinator::{all_consuming, opt},
    multi::separated_list0,
    sequence::{pair, preceded},
    IResult,
};
use syntagma_doc::{Features, Token};
use syntagma_protocol::{Result, SyntagmaError, TokenId};

pub const FIELD_COUNT: usize = 8;

/// Placeholder the analyzer writes for an empty column.
const EMPTY: &str = "_";

type Segment<'a> = (&'a str, Option<Vec<&'a str>>);

fn attribute(input: &str) -> IResult<&str, &str> {
    take_till(|c| c == '=' || c == '|')(input)
}

fn values(input: &str) -> IResult<&str, Vec<&str>> {
    separated_list0(char(','), take_till(|c| c == ',' || c == '|'))(input)
}

fn segment(input: &str) -> IResult<&str, Segment<'_>> {
    pair(attribute, opt(preceded(char('='), values)))(input)
}

fn segments(input: &str) -> IResult<&str, Vec<Segment<'_>>> {
    all_consuming(separated_list0(char('|'), segment))(input)
}

/// Parses `attr1=v1,v2|attr2=v3`.
///
/// Empty segments and empty values are dropped; a segment without `=` carries
/// no value and is skipped with a warning.
pub fn parse_features(input: &str) -> Features {
    let input = input.trim();
    if input.is_empty() || input == EMPTY {
        return Features::new();
    }

    let parsed = match segments(input) {
        Ok((_, parsed)) => parsed,
        Err(err) => {
            // Every character is accepted by one of the branches above.
            warn!("unreadable feature string '{}': {}", input, err);
            return Features::new();
        }
    };

    let mut features = Features::new();
    for (name, values) in parsed {
        match values {
            _ if name.is_empty() => {}
            None => warn!("feature '{}' has no value, skipped", name),
            Some(values) => {
                let values: Vec<String> = values
                    .into_iter()
                    .filter(|value| !value.is_empty())
                    .map(str::to_string)
                    .collect();
                features.insert(name, values);
            }
        }
    }
    features
}

fn number<T: std::str::FromStr>(field: &str, what: &str, line: usize) -> Result<T> {
    field.trim().parse().map_err(|_| SyntagmaError::MalformedRecord {
        line,
        reason: format!("invalid {} '{}'", what, field),
    })
}

/// Parses one non-blank token line. `line` is 1-based, for error reporting.
pub fn parse_record(record: &str, line: usize) -> Result<Token> {
    let fields: Vec<&str> = record.split('\t').collect();
    if fields.len() < FIELD_COUNT {
        return Err(SyntagmaError::MalformedRecord {
            line,
            reason: format!(
                "expected {} tab-separated fields, found {}",
                FIELD_COUNT,
                fields.len()
            ),
        });
    }

    let id: u32 = number(fields[0], "token id", line)?;
    let head: i64 = number(fields[6], "head id", line)?;

    Ok(Token::new(
        TokenId(id),
        fields[1],
        fields[2],
        fields[3],
        parse_features(fields[5]),
        head,
        fields[7].trim(),
    ))
}
