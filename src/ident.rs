/// Longest identifier PostgreSQL keeps before truncating (`NAMEDATALEN - 1`).
pub const NAMEDATALEN_MAX: usize = 63;

/// Quotes an identifier for direct use in SQL text.
///
/// The result is always double-quoted, so case and reserved words survive.
/// Embedded `"` are doubled and NUL bytes, which PostgreSQL cannot store,
/// are dropped.
pub fn quote(ident: &str) -> String {
    let mut quoted = String::with_capacity(ident.len() + 2);
    quoted.push('"');
    for c in ident.chars() {
        match c {
            '\0' => {}
            '"' => quoted.push_str("\"\""),
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

/// Quotes a table name, qualified by `schema` unless it is empty.
pub fn qualify(schema: &str, table: &str) -> String {
    if schema.is_empty() {
        quote(table)
    } else {
        format!("{}.{}", quote(schema), quote(table))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn quote_wraps_plain_names() {
        assert_eq!(quote("cpu"), r#""cpu""#);
        assert_eq!(quote("Mixed Case"), r#""Mixed Case""#);
    }
    #[test]
    fn quote_doubles_embedded_quotes() {
        assert_eq!(quote(r#"a"b"#), r#""a""b""#);
        assert_eq!(quote(r#"x"); DROP TABLE t; --"#), r#""x""); DROP TABLE t; --""#);
    }
    #[test]
    fn quote_strips_nul() {
        assert_eq!(quote("a\0b"), r#""ab""#);
    }
    #[test]
    fn qualify_with_and_without_schema() {
        assert_eq!(qualify("", "cpu"), r#""cpu""#);
        assert_eq!(qualify("metrics", "cpu"), r#""metrics"."cpu""#);
    }
}
