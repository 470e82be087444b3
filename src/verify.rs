//! Generated DDL verification.
//!
//! Parses rendered `CREATE TABLE` and `CREATE INDEX` statements back with
//! sqlparser and checks that they describe the tables of the model they
//! were rendered from.

use sqlparser::ast::{ColumnOption, ObjectName, Statement, TableConstraint};
use sqlparser::dialect::PostgreSqlDialect;
use sqlparser::parser::Parser;
use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::model::{ConstraintKind, Schema, Table};

/// Tables recovered from parsed DDL
#[derive(Debug, Default)]
pub struct SchemaDef {
    tables: HashMap<String, TableDef>,
}

impl SchemaDef {
    /// Parse PostgreSQL DDL
    pub fn parse(sql: &str) -> Result<Self> {
        let statements = Parser::parse_sql(&PostgreSqlDialect {}, sql)?;
        let mut schema = Self::default();

        for statement in statements {
            match statement {
                Statement::CreateTable(create_table) => {
                    schema.parse_create_table(
                        create_table.name,
                        create_table.columns,
                        create_table.constraints,
                    );
                }
                Statement::CreateIndex(create_index) => {
                    schema.parse_create_index(
                        create_index.name,
                        create_index.table_name,
                        create_index.columns,
                        create_index.unique,
                    );
                }
                _ => {}
            }
        }

        Ok(schema)
    }

    /// Get table by name
    pub fn get_table(&self, name: &str) -> Option<&TableDef> {
        self.tables.get(name)
    }

    fn parse_create_table(
        &mut self,
        name: ObjectName,
        columns: Vec<sqlparser::ast::ColumnDef>,
        constraints: Vec<TableConstraint>,
    ) {
        let table_name = object_name_to_string(&name);
        let mut table = TableDef {
            name: table_name.clone(),
            ..Default::default()
        };

        for column in &columns {
            let not_null = column
                .options
                .iter()
                .any(|opt| matches!(opt.option, ColumnOption::NotNull));

            table.columns.push(ColumnDef {
                name: column.name.to_string(),
                nullable: !not_null,
            });
        }

        for constraint in constraints {
            match constraint {
                TableConstraint::PrimaryKey { columns, .. } => {
                    table
                        .primary_keys
                        .push(columns.iter().map(|c| c.to_string()).collect());
                }
                TableConstraint::ForeignKey {
                    columns,
                    foreign_table,
                    referred_columns,
                    on_delete,
                    on_update,
                    ..
                } => {
                    table.foreign_keys.push(ForeignKeyDef {
                        columns: columns.iter().map(|c| c.to_string()).collect(),
                        referenced_table: object_name_to_string(&foreign_table),
                        referenced_columns: referred_columns
                            .iter()
                            .map(|c| c.to_string())
                            .collect(),
                        on_delete: on_delete.as_ref().map(|a| a.to_string()),
                        on_update: on_update.as_ref().map(|a| a.to_string()),
                    });
                }
                TableConstraint::Unique { columns, .. } => {
                    table
                        .unique
                        .push(columns.iter().map(|c| c.to_string()).collect());
                }
                _ => {}
            }
        }

        self.tables.insert(table_name, table);
    }

    fn parse_create_index(
        &mut self,
        name: Option<ObjectName>,
        table_name: ObjectName,
        indices: Vec<sqlparser::ast::IndexColumn>,
        unique: bool,
    ) {
        let Some(index_name) = name else {
            return;
        };

        let index = IndexDef {
            name: object_name_to_string(&index_name),
            columns: indices
                .iter()
                .map(|index| format!("{}", index.column))
                .collect(),
            unique,
        };

        if let Some(table) = self.tables.get_mut(&object_name_to_string(&table_name)) {
            table.indexes.push(index);
        }
    }
}

/// Column as parsed back from DDL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDef {
    pub name: String,
    pub nullable: bool,
}

/// Table as parsed back from DDL
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableDef {
    pub name: String,
    pub columns: Vec<ColumnDef>,
    /// Column lists of every PRIMARY KEY clause.
    pub primary_keys: Vec<Vec<String>>,
    pub foreign_keys: Vec<ForeignKeyDef>,
    /// Column lists of every UNIQUE clause.
    pub unique: Vec<Vec<String>>,
    pub indexes: Vec<IndexDef>,
}

/// Index information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexDef {
    pub name: String,
    pub columns: Vec<String>,
    pub unique: bool,
}

/// Foreign key constraint information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKeyDef {
    pub columns: Vec<String>,
    pub referenced_table: String,
    pub referenced_columns: Vec<String>,
    pub on_delete: Option<String>,
    pub on_update: Option<String>,
}

/// Convert ObjectName to a simple string
fn object_name_to_string(name: &ObjectName) -> String {
    name.0
        .iter()
        .map(|ident| ident.to_string())
        .collect::<Vec<_>>()
        .join(".")
}

/// Check that `ddl`, rendered from `schema`, parses and matches its tables.
pub fn verify_tables(schema: &Schema, ddl: &str) -> Result<()> {
    let parsed = SchemaDef::parse(ddl)?;
    for table in &schema.tables {
        let def = parsed
            .get_table(&table.name)
            .ok_or_else(|| Error::Verify(format!("table {} is missing", table.name)))?;
        verify_table(table, def)?;
    }
    Ok(())
}

fn verify_table(table: &Table, def: &TableDef) -> Result<()> {
    let fail = |what: String| -> Result<()> {
        Err(Error::Verify(format!("table {}: {what}", table.name)))
    };

    let expected: Vec<(&str, bool)> = table
        .columns
        .iter()
        .map(|c| (c.name.as_str(), !c.not_null))
        .collect();
    let actual: Vec<(&str, bool)> = def
        .columns
        .iter()
        .map(|c| (c.name.as_str(), c.nullable))
        .collect();
    if expected != actual {
        return fail(format!("columns {actual:?} do not match {expected:?}"));
    }

    let primary_keys: Vec<&Vec<String>> = table
        .constraints
        .iter()
        .filter(|c| c.kind == ConstraintKind::PrimaryKey)
        .map(|c| &c.columns)
        .collect();
    if primary_keys.len() > 1 {
        return fail(format!("{} primary keys declared", primary_keys.len()));
    }
    if primary_keys != def.primary_keys.iter().collect::<Vec<_>>() {
        return fail(format!("primary key {:?} does not match", def.primary_keys));
    }

    let unique: Vec<&Vec<String>> = table
        .constraints
        .iter()
        .filter(|c| c.kind == ConstraintKind::Unique)
        .map(|c| &c.columns)
        .collect();
    if unique != def.unique.iter().collect::<Vec<_>>() {
        return fail(format!("unique constraints {:?} do not match", def.unique));
    }

    let references: Vec<ForeignKeyDef> = table
        .constraints
        .iter()
        .filter_map(|c| {
            let reference = c.reference.as_ref()?;
            Some(ForeignKeyDef {
                columns: c.columns.clone(),
                referenced_table: reference.table.clone(),
                referenced_columns: reference.columns.clone(),
                on_delete: Some(reference.on_delete.as_sql().to_string()),
                on_update: Some(reference.on_update.as_sql().to_string()),
            })
        })
        .collect();
    if references != def.foreign_keys {
        return fail(format!("foreign keys {:?} do not match", def.foreign_keys));
    }

    let indexes: Vec<IndexDef> = table
        .indexes
        .iter()
        .map(|index| IndexDef {
            name: index.name.clone(),
            columns: index.columns.clone(),
            unique: index.unique,
        })
        .collect();
    if indexes != def.indexes {
        return fail(format!("indexes {:?} do not match", def.indexes));
    }

    Ok(())
}
