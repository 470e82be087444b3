//! Schema construction from the descriptor arena.

use tracing::debug;

use crate::constraints::extract_constraints;
use crate::descriptor::{DescriptorPool, EnumId, FileId, MessageId};
use crate::diagnostic::Outcome;
use crate::error::Error;
use crate::extensions::{apply_extensions, format_default};
use crate::model::{Column, ColumnType, Enum, Schema, Table};
use crate::types::map_type;

/// Which proto file each table's message was declared in.
///
/// Entries keep insertion order, which follows the order files were
/// requested in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileIndex {
    entries: Vec<(String, String)>,
}

impl FileIndex {
    fn insert(&mut self, message: &str, file: &str) {
        self.entries.push((message.to_string(), file.to_string()));
    }

    /// Source file of a message.
    pub fn file_of(&self, message: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(m, _)| m == message)
            .map(|(_, f)| f.as_str())
    }

    /// Messages declared in `file`, in declaration order.
    pub fn messages_in<'a>(&'a self, file: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.entries
            .iter()
            .filter(move |(_, f)| f == file)
            .map(|(m, _)| m.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Everything the renderer needs from one build.
#[derive(Debug, Clone, Default)]
pub struct BuildOutput {
    pub schema: Schema,
    pub files_by_message: FileIndex,
    /// Files that declared at least one message, in request order.
    pub sources: Vec<String>,
}

/// Walks the requested files and collects enums and tables.
pub struct SchemaBuilder<'a> {
    pool: &'a DescriptorPool,
    outcome: Outcome<BuildOutput>,
}

impl<'a> SchemaBuilder<'a> {
    pub fn new(pool: &'a DescriptorPool) -> Self {
        Self {
            pool,
            outcome: Outcome::new(BuildOutput::default()),
        }
    }

    /// Build the schema for `files_to_generate`, keeping their order.
    ///
    /// Files without top-level messages are skipped. A definition that
    /// cannot be built is reported and skipped; the rest still build.
    pub fn build<S: AsRef<str>>(mut self, files_to_generate: &[S]) -> Outcome<BuildOutput> {
        for name in files_to_generate {
            let name = name.as_ref();
            let Some(file) = self.pool.file_by_name(name) else {
                self.outcome.push(
                    name,
                    Error::InvalidInput("file is not part of the request".to_string()),
                );
                continue;
            };
            self.build_file(file);
        }

        self.check_enum_columns();
        self.outcome
    }

    fn build_file(&mut self, id: FileId) {
        let pool = self.pool;
        let file = pool.file(id);

        if file.messages.is_empty() {
            debug!(name = %file.name, "skip generating file because it has no messages");
            return;
        }

        debug!(name = %file.name, "processing file");
        self.outcome.value.sources.push(file.name.clone());

        for enum_id in &file.enums {
            self.build_enum(*enum_id);
        }
        for message_id in &file.messages {
            self.build_nested_enums(*message_id);
        }
        for message_id in &file.messages {
            self.build_message(*message_id);
        }
    }

    fn build_nested_enums(&mut self, id: MessageId) {
        let pool = self.pool;
        let message = pool.message(id);
        for enum_id in &message.nested_enums {
            self.build_enum(*enum_id);
        }
        for nested in &message.nested_messages {
            self.build_nested_enums(*nested);
        }
    }

    fn build_enum(&mut self, id: EnumId) {
        let pool = self.pool;
        let node = pool.enum_node(id);

        if node.name.is_empty() {
            self.outcome.push(
                node.full_name.clone(),
                Error::InvalidInput("enum has no name".to_string()),
            );
            return;
        }

        let schema = &self.outcome.value.schema;
        if schema.enum_by_name(&node.name).is_some() {
            self.outcome.push(
                node.full_name.clone(),
                Error::Duplicate {
                    kind: "enum",
                    name: node.name.clone(),
                },
            );
            return;
        }

        self.outcome.value.schema.enums.push(Enum {
            name: node.name.clone(),
            values: node.values.clone(),
        });
    }

    /// Build a table for the message, then for its nested messages,
    /// depth first.
    fn build_message(&mut self, id: MessageId) {
        let pool = self.pool;
        let message = pool.message(id);

        if message.map_entry {
            debug!(name = %message.full_name, "skip map entry message");
            return;
        }

        if let Some(table) = self.build_table(id) {
            let file = &pool.file(message.file).name;
            let output = &mut self.outcome.value;
            output.files_by_message.insert(&table.name, file);
            output.schema.tables.push(table);
        }

        for nested in &message.nested_messages {
            self.build_message(*nested);
        }
    }

    fn build_table(&mut self, id: MessageId) -> Option<Table> {
        let pool = self.pool;
        let message = pool.message(id);

        if message.name.is_empty() {
            self.outcome.push(
                message.full_name.clone(),
                Error::InvalidInput("message has no name".to_string()),
            );
            return None;
        }

        if self.outcome.value.schema.table_by_name(&message.name).is_some() {
            self.outcome.push(
                message.full_name.clone(),
                Error::Duplicate {
                    kind: "table",
                    name: message.name.clone(),
                },
            );
            return None;
        }

        let mut table = Table::new(message.name.clone());

        for field in &message.fields {
            let column_type = match map_type(field, pool) {
                Ok(column_type) => column_type,
                Err(err) => {
                    self.outcome
                        .push(format!("{}.{}", message.name, field.name), err);
                    continue;
                }
            };

            let mut column = Column::new(field.name.clone(), column_type);
            if let Some(options) = &field.options {
                for diagnostic in apply_extensions(options, &mut column) {
                    self.outcome.push(
                        format!("{}.{}", message.name, diagnostic.subject),
                        diagnostic.error,
                    );
                }
            }

            if let Some(literal) = column.default.take() {
                column.default = Some(format_default(&literal, &column.column_type));
            }

            table.columns.push(column);
        }

        let constraints = extract_constraints(message);
        for diagnostic in constraints.diagnostics {
            self.outcome.push(
                format!("{}.{}", message.name, diagnostic.subject),
                diagnostic.error,
            );
        }
        table.constraints = constraints.value;

        Some(table)
    }

    /// Report enum columns whose type is not created by this schema.
    fn check_enum_columns(&mut self) {
        let schema = &self.outcome.value.schema;
        let mut missing = Vec::new();

        for table in &schema.tables {
            for column in &table.columns {
                if let ColumnType::Enum(name) = &column.column_type {
                    if schema.enum_by_name(name).is_none() {
                        missing.push((format!("{}.{}", table.name, column.name), name.clone()));
                    }
                }
            }
        }

        for (subject, name) in missing {
            self.outcome.push(subject, Error::UndefinedEnum(name));
        }
    }
}
