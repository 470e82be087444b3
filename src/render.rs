//! SQL text generation.
//!
//! Two documents are produced: the schema (types, sequences, tables and
//! indexes) and, per proto file, the sqlc CRUD queries of its tables. Both
//! start with the same generated-code header. Output depends only on the
//! order of the model, so equal input renders byte for byte equal text.

use std::fmt::Write;

use tracing::warn;

use crate::error::{Error, Result};
use crate::model::{Column, Constraint, ConstraintKind, Enum, Index, Schema, Sequence, Table};
use crate::options::Options;
use crate::verify;

const GENERATED_HEADER: &str = "-- Code generated by protoc-gen-sqlc. DO NOT EDIT.";

/// Source files listed in a document header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderParams {
    pub sources: Vec<String>,
}

impl HeaderParams {
    pub fn new<S: Into<String>>(sources: impl IntoIterator<Item = S>) -> Self {
        Self {
            sources: sources.into_iter().map(Into::into).collect(),
        }
    }
}

/// CRUD queries for one table.
#[derive(Debug, Clone, Copy)]
pub struct CrudParams<'a> {
    /// Name used in the sqlc query annotations, e.g. `GetBook`.
    pub go_name: &'a str,
    pub primary_key: &'a str,
    pub table: &'a Table,
}

impl<'a> CrudParams<'a> {
    /// Queries named after the table, keyed on its primary key.
    pub fn for_table(table: &'a Table) -> Self {
        Self {
            go_name: &table.name,
            primary_key: table.primary_key(),
            table,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Renderer {
    verify: bool,
}

impl Renderer {
    pub fn new(options: &Options) -> Self {
        Self {
            verify: options.verify,
        }
    }

    /// Render the schema document.
    pub fn render_schema(&self, schema: &Schema, header: &HeaderParams) -> Result<String> {
        let mut statements = Vec::new();

        for e in &schema.enums {
            statements.push(create_type(e)?);
        }
        for sequence in &schema.sequences {
            statements.push(create_sequence(sequence)?);
        }

        let mut ddl = Vec::new();
        for table in &schema.tables {
            ddl.push(create_table(table)?);
        }
        for table in &schema.tables {
            for index in &table.indexes {
                ddl.push(create_index(table, index)?);
            }
        }

        if self.verify {
            verify::verify_tables(schema, &ddl.concat())?;
        }

        statements.extend(ddl);
        document(header, statements)
    }

    /// Render the CRUD document for a single table.
    pub fn render_crud(&self, header: &HeaderParams, params: &CrudParams<'_>) -> Result<String> {
        self.render_queries(header, std::slice::from_ref(params))
    }

    /// Render one CRUD document covering several tables, in order.
    pub fn render_queries(&self, header: &HeaderParams, tables: &[CrudParams<'_>]) -> Result<String> {
        let mut statements = Vec::with_capacity(tables.len() * 5);
        for params in tables {
            statements.extend(crud_statements(params)?);
        }
        document(header, statements)
    }
}

fn document(header: &HeaderParams, statements: Vec<String>) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "{GENERATED_HEADER}")?;
    if !header.sources.is_empty() {
        writeln!(out, "-- source:")?;
        for source in &header.sources {
            writeln!(out, "--   {source}")?;
        }
    }
    for statement in statements {
        out.push('\n');
        out.push_str(&statement);
    }
    Ok(out)
}

fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

fn create_type(e: &Enum) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "CREATE TYPE {} AS ENUM (", e.name)?;
    let values: Vec<_> = e.values.iter().map(|v| format!("  {}", quote(v))).collect();
    if !values.is_empty() {
        writeln!(out, "{}", values.join(",\n"))?;
    }
    writeln!(out, ");")?;
    Ok(out)
}

fn create_sequence(sequence: &Sequence) -> Result<String> {
    let mut out = String::new();
    writeln!(
        out,
        "CREATE SEQUENCE {} START WITH {} INCREMENT BY {} MINVALUE {} MAXVALUE {};",
        sequence.name, sequence.start, sequence.increment, sequence.min_value, sequence.max_value
    )?;
    Ok(out)
}

fn create_table(table: &Table) -> Result<String> {
    let mut lines = Vec::with_capacity(table.columns.len() + table.constraints.len());
    for column in &table.columns {
        lines.push(column_definition(column));
    }
    for constraint in &table.constraints {
        lines.push(table_constraint(table, constraint)?);
    }

    let mut out = String::new();
    writeln!(out, "CREATE TABLE {} (", table.name)?;
    for (i, line) in lines.iter().enumerate() {
        let separator = if i + 1 < lines.len() { "," } else { "" };
        writeln!(out, "  {line}{separator}")?;
    }
    writeln!(out, ");")?;
    Ok(out)
}

fn column_definition(column: &Column) -> String {
    let mut line = format!("{} {}", column.name, column.column_type);
    if column.not_null {
        line.push_str(" NOT NULL");
    }
    if let Some(default) = &column.default {
        line.push_str(" DEFAULT ");
        line.push_str(default);
    }
    line
}

fn table_constraint(table: &Table, constraint: &Constraint) -> Result<String> {
    if constraint.columns.is_empty() {
        return Err(Error::Render(format!(
            "{} constraint on table {} has no columns",
            constraint.kind.as_sql(),
            table.name
        )));
    }

    let columns = constraint.columns.join(", ");
    let clause = match constraint.kind {
        ConstraintKind::PrimaryKey | ConstraintKind::Unique => {
            format!("{} ({columns})", constraint.kind.as_sql())
        }
        ConstraintKind::ForeignKey => {
            let reference = constraint
                .reference
                .as_ref()
                .filter(|r| !r.columns.is_empty())
                .ok_or_else(|| {
                    Error::Render(format!(
                        "foreign key ({columns}) on table {} has no reference",
                        table.name
                    ))
                })?;
            format!(
                "FOREIGN KEY ({columns}) REFERENCES {} ({}) ON DELETE {} ON UPDATE {}",
                reference.table,
                reference.columns.join(", "),
                reference.on_delete.as_sql(),
                reference.on_update.as_sql()
            )
        }
    };
    Ok(clause)
}

fn create_index(table: &Table, index: &Index) -> Result<String> {
    if index.columns.is_empty() {
        return Err(Error::Render(format!(
            "index {} on table {} has no columns",
            index.name, table.name
        )));
    }

    let mut out = String::new();
    writeln!(
        out,
        "CREATE {}INDEX {} ON {} ({});",
        if index.unique { "UNIQUE " } else { "" },
        index.name,
        table.name,
        index.columns.join(", ")
    )?;
    Ok(out)
}

/// Create, Get, List, Update and Delete, in that order. Placeholders follow
/// column order; `$1` is the primary key in Get, Update and Delete.
///
/// A table without columns gets no statements, and one whose only column
/// is the primary key gets no Update. Both are logged and skipped.
fn crud_statements(params: &CrudParams<'_>) -> Result<Vec<String>> {
    let CrudParams {
        go_name,
        primary_key,
        table,
    } = *params;

    if table.columns.is_empty() {
        warn!(table = %table.name, "skip queries for table without columns");
        return Ok(Vec::new());
    }

    let columns: Vec<&str> = table.columns.iter().map(|c| c.name.as_str()).collect();
    let column_list = columns.join(", ");
    let placeholders = (1..=columns.len())
        .map(|n| format!("${n}"))
        .collect::<Vec<_>>()
        .join(", ");

    let assignments: Vec<String> = columns
        .iter()
        .filter(|name| **name != primary_key)
        .enumerate()
        .map(|(i, name)| format!("  {name} = ${}", i + 2))
        .collect();

    let name = &table.name;
    let mut create = String::new();
    writeln!(create, "-- name: Create{go_name} :one")?;
    writeln!(create, "INSERT INTO {name} (")?;
    writeln!(create, "  {column_list}")?;
    writeln!(create, ") VALUES (")?;
    writeln!(create, "  {placeholders}")?;
    writeln!(create, ")")?;
    writeln!(create, "RETURNING {column_list};")?;

    let mut get = String::new();
    writeln!(get, "-- name: Get{go_name} :one")?;
    writeln!(get, "SELECT {column_list} FROM {name}")?;
    writeln!(get, "WHERE {primary_key} = $1 LIMIT 1;")?;

    let mut list = String::new();
    writeln!(list, "-- name: List{go_name} :many")?;
    writeln!(list, "SELECT {column_list} FROM {name}")?;
    writeln!(list, "ORDER BY {primary_key};")?;

    let mut statements = vec![create, get, list];

    if assignments.is_empty() {
        warn!(
            table = %name,
            primary_key,
            "skip update query for table without non-key columns"
        );
    } else {
        let mut update = String::new();
        writeln!(update, "-- name: Update{go_name} :one")?;
        writeln!(update, "UPDATE {name} SET")?;
        writeln!(update, "{}", assignments.join(",\n"))?;
        writeln!(update, "WHERE {primary_key} = $1")?;
        writeln!(update, "RETURNING {column_list};")?;
        statements.push(update);
    }

    let mut delete = String::new();
    writeln!(delete, "-- name: Delete{go_name} :exec")?;
    writeln!(delete, "DELETE FROM {name}")?;
    writeln!(delete, "WHERE {primary_key} = $1;")?;
    statements.push(delete);

    Ok(statements)
}
