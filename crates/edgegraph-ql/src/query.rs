use crate::Params;

use serde::Serialize;

/// A built query: text with `$name` placeholders and the values bound to
/// them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Query {
    pub text: String,
    pub params: Params,
}

impl Query {
    pub(crate) fn new(text: String, params: Params) -> Query {
        Query { text, params }
    }

    /// Names of the placeholders in the text, in order of appearance.
    pub fn placeholders(&self) -> Vec<&str> {
        placeholders(&self.text).map(|(_, name)| name).collect()
    }

    /// Returns the text with every bound parameter inlined as a quoted
    /// literal.
    ///
    /// For reading only. Values are not escaped, so the result must never be
    /// sent to a database.
    pub fn debug_string(&self) -> String {
        let mut out = String::with_capacity(self.text.len());
        let mut last = 0;

        for (start, name) in placeholders(&self.text) {
            let Some(value) = self.params.get(name) else {
                continue;
            };

            out.push_str(&self.text[last..start]);
            out.push('\'');
            out.push_str(&value.to_string());
            out.push('\'');
            last = start + 1 + name.len();
        }

        out.push_str(&self.text[last..]);
        out
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Yields `(offset of '$', name)` for every `$name` token. A whole name is
/// matched, so `$a` never matches inside `$a__b`.
fn placeholders(text: &str) -> impl Iterator<Item = (usize, &str)> + '_ {
    text.match_indices('$').filter_map(move |(start, _)| {
        let rest = &text[start + 1..];
        let len = rest
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .unwrap_or(rest.len());

        (len > 0).then(|| (start, &rest[..len]))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use edgegraph_core::stmt::Value;

    #[test]
    fn placeholder_scan_matches_whole_names() {
        let text = "filter .a = <str>$a and .b = <str>$a__b\n";
        let found: Vec<_> = placeholders(text).map(|(_, name)| name).collect();
        assert_eq!(found, ["a", "a__b"]);
    }

    #[test]
    fn lone_dollar_is_ignored() {
        let found: Vec<_> = placeholders("cost $ 5").collect();
        assert!(found.is_empty());
    }

    #[test]
    fn debug_string_inlines_values() {
        let mut params = Params::new();
        params.insert_for_test("a", Value::from("x"));
        params.insert_for_test("a__b", Value::from(3i64));

        let query = Query::new(
            "filter .a = <str>$a and .b = <int64>$a__b".to_string(),
            params,
        );

        assert_eq!(
            query.debug_string(),
            "filter .a = <str>'x' and .b = <int64>'3'"
        );
    }
}
