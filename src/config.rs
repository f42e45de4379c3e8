use super::*;

/// Schema used when none is configured.
pub const DEFAULT_SCHEMA: &str = "public";

/// Destination settings read by a [`TableManager`].
///
/// Templates are trusted configuration: only `{TABLE}` and `{COLUMNS}` are
/// substituted and the rest is sent to the database as written.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::Args))]
pub struct Config {
    /// Schema that tables are created in; empty leaves names unqualified.
    #[cfg_attr(feature = "cli", arg(long, default_value = DEFAULT_SCHEMA))]
    pub schema: String,
    /// Template for metric tables.
    #[cfg_attr(feature = "cli", arg(long, default_value = TABLE_TEMPLATE))]
    pub table_template: String,
    /// Template for tag tables.
    #[cfg_attr(feature = "cli", arg(long, default_value = TAG_TABLE_TEMPLATE))]
    pub tag_table_template: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schema: DEFAULT_SCHEMA.to_string(),
            table_template: TABLE_TEMPLATE.to_string(),
            tag_table_template: TAG_TABLE_TEMPLATE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.schema, "public");
        assert!(config.table_template.contains(TABLE));
        assert!(config.tag_table_template.contains(COLUMNS));
        assert_ne!(config.table_template, config.tag_table_template);
    }
}
