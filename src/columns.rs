use super::*;
use std::collections::HashMap;

/// What a column holds for the metric it was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnRole {
    Time,
    Tag,
    Field,
    /// Foreign id linking a metric row to its row in the tag table.
    TagsId,
}

impl std::str::FromStr for ColumnRole {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "time" => Ok(Self::Time),
            "tag" => Ok(Self::Tag),
            "field" => Ok(Self::Field),
            "tag_id" | "tags_id" => Ok(Self::TagsId),
            _ => Err(format!("unknown column role: {}", s)),
        }
    }
}

/// SQL type name of a column, emitted verbatim into DDL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PgDataType(String);

#[rustfmt::skip]
impl PgDataType {
    pub const TIMESTAMPTZ: &'static str = "timestamptz";
    pub const TEXT:        &'static str = "text";
    pub const FLOAT8:      &'static str = "float8";
    pub const INT8:        &'static str = "int8";
    pub const BOOL:        &'static str = "boolean";
    pub const SERIAL:      &'static str = "serial";
    pub const JSONB:       &'static str = "jsonb";
}

impl PgDataType {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PgDataType {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for PgDataType {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for PgDataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Columns of one destination table, in the order they are materialized.
///
/// The three sequences are positionally aligned and `names` holds no
/// duplicates; [`push`](TargetColumns::push) is the only way to grow the set,
/// so both hold by construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TargetColumns {
    names: Vec<String>,
    data_types: Vec<PgDataType>,
    roles: Vec<ColumnRole>,
    target: HashMap<String, usize>,
    tag_table: bool,
}

impl TargetColumns {
    pub fn new(tag_table: bool) -> Self {
        Self {
            tag_table,
            ..Self::default()
        }
    }
    /// Appends a column. A name already present is left where it is and the
    /// new definition is dropped.
    pub fn push(
        &mut self,
        name: impl Into<String>,
        data_type: impl Into<PgDataType>,
        role: ColumnRole,
    ) -> &mut Self {
        let name = name.into();
        if !self.target.contains_key(&name) {
            self.target.insert(name.clone(), self.names.len());
            self.names.push(name);
            self.data_types.push(data_type.into());
            self.roles.push(role);
        }
        self
    }
    pub fn names(&self) -> &[String] {
        &self.names
    }
    pub fn data_types(&self) -> &[PgDataType] {
        &self.data_types
    }
    pub fn roles(&self) -> &[ColumnRole] {
        &self.roles
    }
    /// Position of a column by name.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.target.get(name).copied()
    }
    pub fn is_tag_table(&self) -> bool {
        self.tag_table
    }
    pub fn kind(&self) -> TableKind {
        if self.tag_table {
            TableKind::Tags
        } else {
            TableKind::Metric
        }
    }
    pub fn has_tags_id(&self) -> bool {
        self.roles.contains(&ColumnRole::TagsId)
    }
    pub fn len(&self) -> usize {
        self.names.len()
    }
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
    /// Iterates `(name, type, role)` in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PgDataType, ColumnRole)> {
        self.names
            .iter()
            .zip(self.data_types.iter())
            .zip(self.roles.iter())
            .map(|((n, t), r)| (n.as_str(), t, *r))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn push_keeps_order_and_alignment() {
        let mut columns = TargetColumns::new(false);
        columns
            .push("time", PgDataType::TIMESTAMPTZ, ColumnRole::Time)
            .push("host", PgDataType::TEXT, ColumnRole::Tag)
            .push("usage", PgDataType::FLOAT8, ColumnRole::Field);
        assert_eq!(columns.names(), ["time", "host", "usage"]);
        assert_eq!(columns.data_types()[2].as_str(), "float8");
        assert_eq!(columns.roles()[1], ColumnRole::Tag);
        assert_eq!(columns.position("usage"), Some(2));
        assert_eq!(columns.kind(), TableKind::Metric);
    }
    #[test]
    fn push_ignores_duplicate_names() {
        let mut columns = TargetColumns::new(false);
        columns
            .push("host", PgDataType::TEXT, ColumnRole::Tag)
            .push("host", PgDataType::INT8, ColumnRole::Field);
        assert_eq!(columns.len(), 1);
        assert_eq!(columns.data_types()[0].as_str(), "text");
        assert_eq!(columns.roles(), [ColumnRole::Tag]);
    }
    #[test]
    fn tag_table_reports_tags_id() {
        let mut columns = TargetColumns::new(true);
        assert!(columns.is_empty());
        assert!(!columns.has_tags_id());
        columns.push("tag_id", PgDataType::SERIAL, ColumnRole::TagsId);
        assert!(columns.has_tags_id());
        assert_eq!(columns.kind(), TableKind::Tags);
    }
    #[test]
    fn role_from_str() {
        assert_eq!("time".parse::<ColumnRole>(), Ok(ColumnRole::Time));
        assert_eq!("Field".parse::<ColumnRole>(), Ok(ColumnRole::Field));
        assert_eq!("tag_id".parse::<ColumnRole>(), Ok(ColumnRole::TagsId));
        assert!("value".parse::<ColumnRole>().is_err());
    }
}
