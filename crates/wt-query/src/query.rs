//! Keyword-slicing helpers over SQL query strings.
//!
//! Keywords are matched case-insensitively and only as whole words, so a
//! column called `from_date` does not end the field list.

use wt_core::errors::{Error, Result};

const SELECT: &str = "select";
const FROM: &str = "from";
const WHERE: &str = "where";
const AS: &str = "as";

/// Names of the fields selected by `query`, with aliases resolved and the
/// first letter capitalized.
///
/// # Errors
/// [`Error::Query`] if `SELECT` or `FROM` is missing or a field is empty.
///
/// # Example
/// ```
/// let fields = wt_query::query_fields("SELECT id, name AS label FROM users").unwrap();
/// assert_eq!(fields, ["Id", "Label"]);
/// ```
pub fn query_fields(query: &str) -> Result<Vec<String>> {
    let lower = query.to_ascii_lowercase();
    let select = find_keyword(&lower, SELECT, 0).ok_or_else(|| missing("SELECT", query))?;
    let list_start = select + SELECT.len();
    let from = find_keyword(&lower, FROM, list_start).ok_or_else(|| missing("FROM", query))?;

    let fields = query[list_start..from]
        .split(',')
        .map(|raw| {
            let field = raw.trim();
            let name = alias_or_name(field)
                .ok_or_else(|| Error::Query(format!("empty field in query: \"{query}\"")))?;
            Ok(capitalize(name))
        })
        .collect::<Result<Vec<_>>>()?;
    tracing::trace!(?fields, "extracted query fields");
    Ok(fields)
}

/// Name of the table queried, without schema changes and without its alias.
///
/// # Errors
/// [`Error::Query`] if `FROM` is missing or not followed by a table name.
pub fn table_name(query: &str) -> Result<String> {
    table_span(query).map(|(start, end)| query[start..end].to_owned())
}

/// Prefix the queried table with `schema.`.
///
/// # Errors
/// Same as [`table_name`].
///
/// # Example
/// ```
/// let q = wt_query::add_schema_to_query("SELECT * FROM users u WHERE u.id = 1", "crm").unwrap();
/// assert_eq!(q, "SELECT * FROM crm.users u WHERE u.id = 1");
/// ```
pub fn add_schema_to_query(query: &str, schema: &str) -> Result<String> {
    let (start, _) = table_span(query)?;
    Ok(format!("{}{schema}.{}", &query[..start], &query[start..]))
}

/// Byte span of the table name: the first token between `FROM` and `WHERE`
/// (or the end of the query), ignoring a trailing `;`.
fn table_span(query: &str) -> Result<(usize, usize)> {
    let lower = query.to_ascii_lowercase();
    let from = find_keyword(&lower, FROM, 0).ok_or_else(|| missing("FROM", query))?;
    let after_from = from + FROM.len();
    let stop = find_keyword(&lower, WHERE, after_from).unwrap_or(query.len());

    let clause = &query[after_from..stop];
    let offset = clause.len() - clause.trim_start().len();
    let token_len = clause[offset..]
        .find(|c: char| c.is_whitespace() || c == ';')
        .unwrap_or(clause.len() - offset);
    if token_len == 0 {
        return Err(Error::Query(format!(
            "no table name after \"FROM\" in query: \"{query}\""
        )));
    }
    let start = after_from + offset;
    Ok((start, start + token_len))
}

/// Position of `keyword` in `lower` at or after `from`, as a whole word.
fn find_keyword(lower: &str, keyword: &str, from: usize) -> Option<usize> {
    let bytes = lower.as_bytes();
    let mut search = from;
    while let Some(pos) = lower.get(search..)?.find(keyword) {
        let at = search + pos;
        let end = at + keyword.len();
        let before_ok = at == 0 || !is_word_byte(bytes[at - 1]);
        let after_ok = end == bytes.len() || !is_word_byte(bytes[end]);
        if before_ok && after_ok {
            return Some(at);
        }
        search = end;
    }
    None
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// `expr AS alias` → `alias`; a field without `AS` is returned as is.
fn alias_or_name(field: &str) -> Option<&str> {
    let lower = field.to_ascii_lowercase();
    let name = match find_keyword(&lower, AS, 0) {
        Some(at) => field[at + AS.len()..].trim(),
        None => field,
    };
    (!name.is_empty()).then_some(name)
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn missing(keyword: &str, query: &str) -> Error {
    Error::Query(format!(
        "\"{keyword}\" statement not found in query: \"{query}\""
    ))
}
