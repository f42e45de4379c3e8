use super::*;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Catalog probe for a table in an explicit schema.
#[rustfmt::skip]
const EXISTS_IN:      &str = "SELECT tablename FROM pg_tables WHERE tablename = $1 AND schemaname = $2";
/// Catalog probe for a table in the session's current schema.
#[rustfmt::skip]
const EXISTS_CURRENT: &str = "SELECT tablename FROM pg_tables WHERE tablename = $1 AND schemaname = current_schema()";

/// Makes sure destination tables exist before rows are copied into them.
///
/// One manager serves one destination. It remembers every table whose
/// existence it has settled, either by probing the catalog or by creating
/// the table, so steady-state writers reach the database only for data.
///
/// # Cache
///
/// Entries are only ever added. A table found missing is cached as `false`
/// until [`create_table`](Self::create_table) succeeds; once `true` an entry
/// never goes back. Probe failures are not cached, so the next call probes
/// again.
///
/// # Concurrency
///
/// Safe to share across writer tasks. Two tasks creating the same table may
/// both send the statement; the template's `IF NOT EXISTS` absorbs the race.
pub struct TableManager<W> {
    db: W,
    schema: String,
    table_template: String,
    tag_table_template: String,
    tables: RwLock<HashMap<String, bool>>,
}

impl<W> TableManager<W>
where
    W: Wrapper,
{
    pub fn new(
        db: W,
        schema: impl Into<String>,
        table_template: impl Into<String>,
        tag_table_template: impl Into<String>,
    ) -> Self {
        Self {
            db,
            schema: schema.into(),
            table_template: table_template.into(),
            tag_table_template: tag_table_template.into(),
            tables: RwLock::new(HashMap::new()),
        }
    }

    pub fn from_config(db: W, config: &Config) -> Self {
        Self::new(
            db,
            config.schema.as_str(),
            config.table_template.as_str(),
            config.tag_table_template.as_str(),
        )
    }

    pub fn schema(&self) -> &str {
        &self.schema
    }
    pub fn table_template(&self) -> &str {
        &self.table_template
    }
    pub fn tag_table_template(&self) -> &str {
        &self.tag_table_template
    }
    pub fn template(&self, kind: TableKind) -> &str {
        match kind {
            TableKind::Metric => &self.table_template,
            TableKind::Tags => &self.tag_table_template,
        }
    }

    /// What the cache currently holds for `table`, without touching the database.
    pub async fn cached(&self, table: &str) -> Option<bool> {
        self.tables.read().await.get(table).copied()
    }

    /// Whether `table` is known to exist.
    ///
    /// Answers from the cache when it can. Otherwise probes the catalog:
    /// exactly one matching row means the table exists, any other count means
    /// it does not, and both answers are cached. A failed probe answers
    /// `false` and leaves the cache alone.
    pub async fn exists(&self, table: &str) -> bool {
        if let Some(known) = self.cached(table).await {
            log::debug!("table existence cached ({}): {}", table, known);
            return known;
        }
        let probe = if self.schema.is_empty() {
            self.db.exec(EXISTS_CURRENT, &[&table]).await
        } else {
            self.db.exec(EXISTS_IN, &[&table, &self.schema]).await
        };
        match probe {
            Err(e) => {
                log::warn!("table existence probe failed ({}): {}", table, e);
                false
            }
            Ok(rows) => {
                let found = rows == 1;
                let mut tables = self.tables.write().await;
                // a concurrent create may have landed while the probe was in flight
                let known = tables.entry(table.to_string()).or_insert(false);
                *known |= found;
                log::debug!("table existence probed ({}): {}", table, *known);
                *known
            }
        }
    }

    /// The `CREATE TABLE` statement for `table` with `columns`.
    ///
    /// Picks the template by table kind, then fills `{TABLE}` with the quoted,
    /// schema-qualified name and `{COLUMNS}` with every column in order.
    pub fn statement(&self, table: &str, columns: &TargetColumns) -> String {
        render(
            self.template(columns.kind()),
            &qualify(&self.schema, table),
            &columns_clause(columns),
        )
    }

    /// Creates `table` and records it as existing.
    ///
    /// A database error is returned as is and the cache is left unchanged.
    pub async fn create_table(&self, table: &str, columns: &TargetColumns) -> Result<(), W::Error> {
        std::iter::once(table)
            .chain(columns.names().iter().map(String::as_str))
            .filter(|name| name.len() > NAMEDATALEN_MAX)
            .for_each(|name| log::warn!("identifier will be truncated by postgres ({})", name));
        let ref sql = self.statement(table, columns);
        log::debug!("creating table ({}): {}", table, sql);
        self.db.exec(sql, &[]).await?;
        self.tables.write().await.insert(table.to_string(), true);
        log::info!("created table ({})", table);
        Ok(())
    }

    /// Creates `table` unless it is already known to exist.
    pub async fn ensure(&self, table: &str, columns: &TargetColumns) -> Result<(), W::Error> {
        if self.exists(table).await {
            Ok(())
        } else {
            self.create_table(table, columns).await
        }
    }
}
