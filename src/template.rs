use super::*;
use const_format::concatcp;

/// Placeholder replaced by the quoted, possibly schema-qualified table name.
#[rustfmt::skip]
pub const TABLE:              &str = "{TABLE}";
/// Placeholder replaced by the comma-separated column definitions.
#[rustfmt::skip]
pub const COLUMNS:            &str = "{COLUMNS}";
/// Default template for metric tables.
#[rustfmt::skip]
pub const TABLE_TEMPLATE:     &str = concatcp!("CREATE TABLE IF NOT EXISTS ", TABLE, "(", COLUMNS, ")");
/// Default template for tag tables, keyed by their id column.
#[rustfmt::skip]
pub const TAG_TABLE_TEMPLATE: &str = concatcp!("CREATE TABLE IF NOT EXISTS ", TABLE, "(", COLUMNS, ", PRIMARY KEY(tag_id))");

/// Which of the two configured templates a table is created from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    /// Time, tag, and field columns stored together.
    Metric,
    /// Distinct tag combinations referenced from metric rows by id.
    Tags,
}

/// Column definitions in column order: `"name" type,"name" type`.
pub fn columns_clause(columns: &TargetColumns) -> String {
    columns
        .iter()
        .map(|(name, ty, _)| format!("{} {}", quote(name), ty))
        .collect::<Vec<_>>()
        .join(",")
}

/// Substitutes both placeholders in `template`. Everything else is kept as is.
pub fn render(template: &str, table: &str, columns: &str) -> String {
    template.replace(TABLE, table).replace(COLUMNS, columns)
}

#[cfg(test)]
mod tests {
    use super::*;
    fn metric() -> TargetColumns {
        let mut columns = TargetColumns::new(false);
        columns
            .push("time", PgDataType::TIMESTAMPTZ, ColumnRole::Time)
            .push("t", PgDataType::TEXT, ColumnRole::Tag)
            .push("f", PgDataType::FLOAT8, ColumnRole::Field);
        columns
    }
    #[test]
    fn default_templates() {
        assert_eq!(
            TABLE_TEMPLATE,
            "CREATE TABLE IF NOT EXISTS {TABLE}({COLUMNS})"
        );
        assert_eq!(
            TAG_TABLE_TEMPLATE,
            "CREATE TABLE IF NOT EXISTS {TABLE}({COLUMNS}, PRIMARY KEY(tag_id))"
        );
    }
    #[test]
    fn columns_clause_keeps_order() {
        assert_eq!(
            columns_clause(&metric()),
            r#""time" timestamptz,"t" text,"f" float8"#
        );
    }
    #[test]
    fn render_substitutes_placeholders() {
        let sql = render(TABLE_TEMPLATE, r#""t""#, &columns_clause(&metric()));
        assert_eq!(
            sql,
            r#"CREATE TABLE IF NOT EXISTS "t"("time" timestamptz,"t" text,"f" float8)"#
        );
    }
    #[test]
    fn render_passes_other_text_through() {
        let template = "CREATE TABLE {TABLE} ({COLUMNS}); COMMENT ON TABLE {TABLE} IS '{x}'";
        assert_eq!(
            render(template, "a", "b int"),
            "CREATE TABLE a (b int); COMMENT ON TABLE a IS '{x}'"
        );
    }
}
