//! Relational schema model.
//!
//! Built once per run by the schema builder and only read afterwards by
//! the renderer.

use std::fmt;

/// Column name assumed for tables without a primary key constraint.
pub const DEFAULT_PRIMARY_KEY: &str = "id";

/// Complete relational schema for one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    pub tables: Vec<Table>,
    pub enums: Vec<Enum>,
    pub sequences: Vec<Sequence>,
}

impl Schema {
    /// Get table by name
    pub fn table_by_name(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|table| table.name == name)
    }

    /// Get enum by name
    pub fn enum_by_name(&self, name: &str) -> Option<&Enum> {
        self.enums.iter().find(|e| e.name == name)
    }
}

/// Sequence definition. Nothing in a proto file maps to one, so the
/// builder never creates them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    pub name: String,
    pub start: i64,
    pub increment: i64,
    pub min_value: i64,
    pub max_value: i64,
}

/// Enumerated type; values keep declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enum {
    pub name: String,
    pub values: Vec<String>,
}

/// Table definition including constraints
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub name: String,
    pub columns: Vec<Column>,
    pub constraints: Vec<Constraint>,
    pub indexes: Vec<Index>,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// First column of the first primary key constraint, or
    /// [`DEFAULT_PRIMARY_KEY`] when the table has none.
    pub fn primary_key(&self) -> &str {
        self.constraints
            .iter()
            .filter(|c| c.kind == ConstraintKind::PrimaryKey)
            .find_map(|c| c.columns.first())
            .map(String::as_str)
            .unwrap_or(DEFAULT_PRIMARY_KEY)
    }
}

/// Index information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Index {
    pub name: String,
    pub columns: Vec<String>,
    pub unique: bool,
}

/// Column definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub column_type: ColumnType,
    pub not_null: bool,
    /// SQL literal, already quoted when the column type needs it.
    pub default: Option<String>,
}

impl Column {
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
            not_null: false,
            default: None,
        }
    }

    pub fn not_null(mut self) -> Self {
        self.not_null = true;
        self
    }

    pub fn with_default(mut self, literal: impl Into<String>) -> Self {
        self.default = Some(literal.into());
        self
    }
}

/// SQL column type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColumnType {
    Integer,
    Text,
    TextArray,
    Serial,
    Date,
    Timestamp,
    Varchar,
    VarcharArray,
    Jsonb,
    Uuid,
    Bytes,
    Float,
    Boolean,
    /// User defined enum type, by name.
    Enum(String),
}

impl ColumnType {
    pub fn as_sql(&self) -> &str {
        match self {
            ColumnType::Integer => "INTEGER",
            ColumnType::Text => "TEXT",
            ColumnType::TextArray => "TEXT[]",
            ColumnType::Serial => "SERIAL",
            ColumnType::Date => "DATE",
            ColumnType::Timestamp => "TIMESTAMPTZ",
            ColumnType::Varchar => "VARCHAR",
            ColumnType::VarcharArray => "VARCHAR[]",
            ColumnType::Jsonb => "JSONB",
            ColumnType::Uuid => "UUID",
            ColumnType::Bytes => "BYTES",
            ColumnType::Float => "FLOAT",
            ColumnType::Boolean => "BOOLEAN",
            ColumnType::Enum(name) => name,
        }
    }

    /// Whether default literals of this type are written without quotes.
    pub fn takes_bare_literal(&self) -> bool {
        matches!(
            self,
            ColumnType::Integer | ColumnType::Float | ColumnType::Boolean
        )
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

/// Table level constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint {
    pub kind: ConstraintKind,
    pub columns: Vec<String>,
    /// Target of a foreign key; `None` for the other kinds.
    pub reference: Option<Reference>,
}

impl Constraint {
    pub fn primary_key(column: impl Into<String>) -> Self {
        Self {
            kind: ConstraintKind::PrimaryKey,
            columns: vec![column.into()],
            reference: None,
        }
    }

    pub fn unique(column: impl Into<String>) -> Self {
        Self {
            kind: ConstraintKind::Unique,
            columns: vec![column.into()],
            reference: None,
        }
    }

    pub fn foreign_key(column: impl Into<String>, reference: Reference) -> Self {
        Self {
            kind: ConstraintKind::ForeignKey,
            columns: vec![column.into()],
            reference: Some(reference),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintKind {
    PrimaryKey,
    ForeignKey,
    Unique,
}

impl ConstraintKind {
    pub fn as_sql(&self) -> &'static str {
        match self {
            ConstraintKind::PrimaryKey => "PRIMARY KEY",
            ConstraintKind::ForeignKey => "FOREIGN KEY",
            ConstraintKind::Unique => "UNIQUE",
        }
    }
}

/// Foreign key target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    pub table: String,
    pub columns: Vec<String>,
    pub on_delete: ForeignKeyAction,
    pub on_update: ForeignKeyAction,
}

impl Reference {
    /// Reference to a single column with `NO ACTION` on delete and update.
    pub fn new(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            columns: vec![column.into()],
            on_delete: ForeignKeyAction::default(),
            on_update: ForeignKeyAction::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ForeignKeyAction {
    #[default]
    NoAction,
    Restrict,
    Cascade,
    SetNull,
    SetDefault,
}

impl ForeignKeyAction {
    pub fn as_sql(&self) -> &'static str {
        match self {
            ForeignKeyAction::NoAction => "NO ACTION",
            ForeignKeyAction::Restrict => "RESTRICT",
            ForeignKeyAction::Cascade => "CASCADE",
            ForeignKeyAction::SetNull => "SET NULL",
            ForeignKeyAction::SetDefault => "SET DEFAULT",
        }
    }
}
