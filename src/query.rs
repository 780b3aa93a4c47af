//! Dynamic SQL for filtered, paginated reads and partial updates.
//!
//! Statements are assembled with [`sqlx::QueryBuilder`]: identifiers come only
//! from the static [`OwnerTable`] descriptors and [`ValueKind`] metadata, and
//! every caller-supplied value is a bound parameter.

use crate::domain::OwnerKind;
use crate::models::{PageRequest, Patch};
use crate::store::ValueKind;
use sqlx::{Encode, Postgres, QueryBuilder, Type};

/// Describes one owner table for query composition.
#[derive(Debug)]
pub struct OwnerTable {
    pub table: &'static str,
    pub alias: &'static str,
    pub id_column: &'static str,
    pub kind: OwnerKind,
    /// Stable sort key; the identity column is appended as a final tie-break
    pub sort_columns: &'static [&'static str],
}

pub static PERSON_TABLE: OwnerTable = OwnerTable {
    table: "person",
    alias: "p",
    id_column: "person_id",
    kind: OwnerKind::Person,
    sort_columns: &["last_name", "first_name"],
};

pub static ORGANIZATION_TABLE: OwnerTable = OwnerTable {
    table: "organization",
    alias: "o",
    id_column: "organization_id",
    kind: OwnerKind::Organization,
    sort_columns: &["name"],
};

fn value_alias(kind: ValueKind) -> &'static str {
    match kind {
        ValueKind::Email => "e",
        ValueKind::Phone => "ph",
        ValueKind::Address => "a",
    }
}

fn link_alias(kind: ValueKind) -> &'static str {
    match kind {
        ValueKind::Email => "ce",
        ValueKind::Phone => "cp",
        ValueKind::Address => "ca",
    }
}

/// `%value%` for a case-insensitive partial match.
fn contains_pattern(value: &str) -> String {
    format!("%{}%", value)
}

/// One predicate of a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// `owner.column ILIKE '%value%'`
    Contains { column: &'static str, value: String },
    /// `owner.column = value`
    Equals { column: &'static str, value: i32 },
    /// Joins through the link table, then `value.column ILIKE '%value%'`
    ContactContains {
        kind: ValueKind,
        column: &'static str,
        value: String,
    },
}

/// Conjunctive search over one owner table.
///
/// Produces a count statement and a page statement that share the same
/// joins and `WHERE` clause.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    table: &'static OwnerTable,
    filters: Vec<Filter>,
}

impl SearchQuery {
    pub fn new(table: &'static OwnerTable) -> Self {
        Self {
            table,
            filters: Vec::new(),
        }
    }

    /// Add a partial match on an owner column. `None` adds nothing; an empty
    /// string is kept and matches every row.
    pub fn contains(mut self, column: &'static str, value: Option<&str>) -> Self {
        if let Some(value) = value {
            self.filters.push(Filter::Contains {
                column,
                value: value.to_string(),
            });
        }
        self
    }

    /// Add an exact match on an integer owner column.
    pub fn equals(mut self, column: &'static str, value: Option<i32>) -> Self {
        if let Some(value) = value {
            self.filters.push(Filter::Equals { column, value });
        }
        self
    }

    /// Add a partial match on a column of a linked contact value.
    pub fn contact_contains(
        mut self,
        kind: ValueKind,
        column: &'static str,
        value: Option<&str>,
    ) -> Self {
        if let Some(value) = value {
            self.filters.push(Filter::ContactContains {
                kind,
                column,
                value: value.to_string(),
            });
        }
        self
    }

    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    /// `SELECT COUNT(DISTINCT id) FROM ...`
    pub fn count(&self) -> QueryBuilder<'static, Postgres> {
        let t = self.table;
        let mut builder = QueryBuilder::new(format!(
            "SELECT COUNT(DISTINCT {}.{}) ",
            t.alias, t.id_column
        ));
        self.push_from(&mut builder);
        builder
    }

    /// Identities of one page of matching owners, in sort order.
    pub fn page(&self, request: PageRequest) -> QueryBuilder<'static, Postgres> {
        let t = self.table;
        let mut builder = QueryBuilder::new(format!("SELECT DISTINCT {}.{}", t.alias, t.id_column));
        for column in t.sort_columns {
            builder.push(format!(", {}.{}", t.alias, column));
        }
        builder.push(" ");
        self.push_from(&mut builder);

        builder.push(" ORDER BY ");
        for column in t.sort_columns {
            builder.push(format!("{}.{}, ", t.alias, column));
        }
        builder.push(format!("{}.{}", t.alias, t.id_column));

        builder.push(" LIMIT ");
        builder.push_bind(request.limit());
        builder.push(" OFFSET ");
        builder.push_bind(request.offset());
        builder
    }

    fn push_from(&self, builder: &mut QueryBuilder<'static, Postgres>) {
        let t = self.table;
        builder.push(format!("FROM {} {}", t.table, t.alias));

        let mut joined: Vec<ValueKind> = Vec::new();
        for filter in &self.filters {
            if let Filter::ContactContains { kind, .. } = filter {
                if joined.contains(kind) {
                    continue;
                }
                joined.push(*kind);
                let (link, value) = (link_alias(*kind), value_alias(*kind));
                builder.push(format!(
                    " JOIN {} {} ON {}.contact_id = {}.{} AND {}.contact_entity_type = ",
                    kind.link_table(),
                    link,
                    link,
                    t.alias,
                    t.id_column,
                    link
                ));
                builder.push_bind(t.kind);
                builder.push(format!(
                    " JOIN {} {} ON {}.{} = {}.{}",
                    kind.value_table(),
                    value,
                    value,
                    kind.id_column(),
                    link,
                    kind.id_column()
                ));
            }
        }

        for (i, filter) in self.filters.iter().enumerate() {
            builder.push(if i == 0 { " WHERE " } else { " AND " });
            match filter {
                Filter::Contains { column, value } => {
                    builder.push(format!("{}.{} ILIKE ", t.alias, column));
                    builder.push_bind(contains_pattern(value));
                }
                Filter::Equals { column, value } => {
                    builder.push(format!("{}.{} = ", t.alias, column));
                    builder.push_bind(*value);
                }
                Filter::ContactContains {
                    kind,
                    column,
                    value,
                } => {
                    builder.push(format!("{}.{} ILIKE ", value_alias(*kind), column));
                    builder.push_bind(contains_pattern(value));
                }
            }
        }
    }
}

/// `UPDATE table SET ...` touching only the columns explicitly provided.
pub struct UpdateStatement<'args> {
    builder: QueryBuilder<'args, Postgres>,
    assignments: usize,
}

impl<'args> UpdateStatement<'args> {
    pub fn new(table: &str) -> Self {
        Self {
            builder: QueryBuilder::new(format!("UPDATE {} SET ", table)),
            assignments: 0,
        }
    }

    /// Assign `column = value`.
    pub fn set<T>(&mut self, column: &str, value: T) -> &mut Self
    where
        T: 'args + Encode<'args, Postgres> + Type<Postgres>,
    {
        if self.assignments > 0 {
            self.builder.push(", ");
        }
        self.builder.push(column).push(" = ").push_bind(value);
        self.assignments += 1;
        self
    }

    /// Assign a required column when a new value was provided.
    pub fn set_some<T>(&mut self, column: &str, value: &Option<T>) -> &mut Self
    where
        T: 'args + Clone + Encode<'args, Postgres> + Type<Postgres>,
    {
        if let Some(value) = value {
            self.set(column, value.clone());
        }
        self
    }

    /// Assign or clear a nullable column according to `patch`.
    pub fn set_patch<T>(&mut self, column: &str, patch: &Patch<T>) -> &mut Self
    where
        T: 'args + Clone + Encode<'args, Postgres> + Type<Postgres>,
    {
        if let Some(value) = patch.as_update() {
            self.set(column, value.cloned());
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.assignments == 0
    }

    /// Finish with `WHERE id_column = id`, or `None` when nothing was assigned.
    pub fn finish(mut self, id_column: &str, id: i32) -> Option<QueryBuilder<'args, Postgres>> {
        if self.is_empty() {
            return None;
        }
        self.builder.push(" WHERE ").push(id_column).push(" = ").push_bind(id);
        Some(self.builder)
    }
}
