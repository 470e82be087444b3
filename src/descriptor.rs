//! Immutable descriptor arena.
//!
//! The files of a [`CodeGeneratorRequest`](crate::plugin::CodeGeneratorRequest)
//! are flattened once into vectors of file, message and enum nodes that refer
//! to each other by id. Type references (`.pkg.Outer.Inner`) resolve through a
//! fully qualified name index.

use std::collections::HashMap;

use crate::plugin::field_descriptor_proto::{Label, Type};
use crate::plugin::{
    DescriptorProto, EnumDescriptorProto, FieldDescriptorProto, FieldOptions, FileDescriptorProto,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnumId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum TypeRef {
    Message(MessageId),
    Enum(EnumId),
}

#[derive(Debug, Clone)]
pub struct FileNode {
    pub name: String,
    /// Top-level messages in declaration order.
    pub messages: Vec<MessageId>,
    /// Top-level enums in declaration order.
    pub enums: Vec<EnumId>,
}

#[derive(Debug, Clone)]
pub struct MessageNode {
    /// Declared name; empty when the descriptor carries none.
    pub name: String,
    pub full_name: String,
    pub file: FileId,
    pub fields: Vec<FieldNode>,
    pub nested_messages: Vec<MessageId>,
    pub nested_enums: Vec<EnumId>,
    /// Synthetic message generated for a map field.
    pub map_entry: bool,
}

#[derive(Debug, Clone)]
pub struct EnumNode {
    pub name: String,
    pub full_name: String,
    pub file: FileId,
    pub values: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct FieldNode {
    pub name: String,
    /// `None` when the descriptor carries no type or one this crate does
    /// not know.
    pub kind: Option<Type>,
    pub repeated: bool,
    /// Fully qualified type name for enum and message fields.
    pub type_name: Option<String>,
    pub options: Option<FieldOptions>,
}

impl FieldNode {
    fn from_proto(field: &FieldDescriptorProto) -> Self {
        Self {
            name: field.name.clone().unwrap_or_default(),
            kind: field.r#type.and_then(|t| Type::try_from(t).ok()),
            repeated: field.label == Some(Label::Repeated as i32),
            type_name: field.type_name.clone().filter(|name| !name.is_empty()),
            options: field.options.clone(),
        }
    }
}

/// Arena over every file in a generation request.
#[derive(Debug, Default)]
pub struct DescriptorPool {
    files: Vec<FileNode>,
    messages: Vec<MessageNode>,
    enums: Vec<EnumNode>,
    by_type_name: HashMap<String, TypeRef>,
    by_file_name: HashMap<String, FileId>,
}

impl DescriptorPool {
    pub fn new(files: &[FileDescriptorProto]) -> Self {
        let mut pool = Self::default();
        for file in files {
            pool.add_file(file);
        }
        pool
    }

    fn add_file(&mut self, file: &FileDescriptorProto) {
        let id = FileId(self.files.len());
        let name = file.name.clone().unwrap_or_default();
        let scope = match file.package.as_deref() {
            Some(package) if !package.is_empty() => format!(".{package}"),
            _ => String::new(),
        };

        self.files.push(FileNode {
            name: name.clone(),
            messages: Vec::new(),
            enums: Vec::new(),
        });
        self.by_file_name.entry(name).or_insert(id);

        let enums = file
            .enum_type
            .iter()
            .map(|e| self.add_enum(id, &scope, e))
            .collect();
        let messages = file
            .message_type
            .iter()
            .map(|m| self.add_message(id, &scope, m))
            .collect();

        let node = &mut self.files[id.0];
        node.enums = enums;
        node.messages = messages;
    }

    fn add_enum(&mut self, file: FileId, scope: &str, proto: &EnumDescriptorProto) -> EnumId {
        let id = EnumId(self.enums.len());
        let name = proto.name.clone().unwrap_or_default();
        let full_name = format!("{scope}.{name}");

        self.enums.push(EnumNode {
            name,
            full_name: full_name.clone(),
            file,
            values: proto
                .value
                .iter()
                .map(|v| v.name.clone().unwrap_or_default())
                .collect(),
        });
        self.by_type_name
            .entry(full_name)
            .or_insert(TypeRef::Enum(id));
        id
    }

    fn add_message(&mut self, file: FileId, scope: &str, proto: &DescriptorProto) -> MessageId {
        let id = MessageId(self.messages.len());
        let name = proto.name.clone().unwrap_or_default();
        let full_name = format!("{scope}.{name}");

        // Reserve the slot first so a parent always precedes its children.
        self.messages.push(MessageNode {
            name,
            full_name: full_name.clone(),
            file,
            fields: proto.field.iter().map(FieldNode::from_proto).collect(),
            nested_messages: Vec::new(),
            nested_enums: Vec::new(),
            map_entry: proto
                .options
                .as_ref()
                .and_then(|o| o.map_entry)
                .unwrap_or(false),
        });
        self.by_type_name
            .entry(full_name.clone())
            .or_insert(TypeRef::Message(id));

        let nested_enums = proto
            .enum_type
            .iter()
            .map(|e| self.add_enum(file, &full_name, e))
            .collect();
        let nested_messages = proto
            .nested_type
            .iter()
            .map(|m| self.add_message(file, &full_name, m))
            .collect();

        let node = &mut self.messages[id.0];
        node.nested_enums = nested_enums;
        node.nested_messages = nested_messages;
        id
    }

    pub fn file(&self, id: FileId) -> &FileNode {
        &self.files[id.0]
    }

    pub fn message(&self, id: MessageId) -> &MessageNode {
        &self.messages[id.0]
    }

    pub fn enum_node(&self, id: EnumId) -> &EnumNode {
        &self.enums[id.0]
    }

    pub fn file_by_name(&self, name: &str) -> Option<FileId> {
        self.by_file_name.get(name).copied()
    }

    /// Resolve a fully qualified enum name such as `.library.v1.BookType`.
    pub fn enum_by_type_name(&self, type_name: &str) -> Option<&EnumNode> {
        match self.by_type_name.get(type_name) {
            Some(TypeRef::Enum(id)) => Some(self.enum_node(*id)),
            _ => None,
        }
    }

    /// Resolve a fully qualified message name such as `.library.v1.Author`.
    pub fn message_by_type_name(&self, type_name: &str) -> Option<&MessageNode> {
        match self.by_type_name.get(type_name) {
            Some(TypeRef::Message(id)) => Some(self.message(*id)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{enum_proto, field, file, message};

    #[test]
    fn test_resolves_qualified_names() {
        let mut outer = message("Outer", vec![]);
        outer.nested_type.push(message("Inner", vec![]));
        outer.enum_type.push(enum_proto("Mood", &["HAPPY"]));
        let proto = file("shop.proto", "shop.v1", vec![outer], vec![]);

        let pool = DescriptorPool::new(&[proto]);

        assert_eq!(
            pool.message_by_type_name(".shop.v1.Outer.Inner").unwrap().name,
            "Inner"
        );
        assert_eq!(
            pool.enum_by_type_name(".shop.v1.Outer.Mood").unwrap().values,
            vec!["HAPPY"]
        );
        assert!(pool.enum_by_type_name(".shop.v1.Outer.Inner").is_none());
    }

    #[test]
    fn test_keeps_declaration_order() {
        let mut outer = message("Outer", vec![field("b", Type::String), field("a", Type::Int32)]);
        outer.nested_type.push(message("First", vec![]));
        outer.nested_type.push(message("Second", vec![]));
        let proto = file("a.proto", "", vec![outer, message("Last", vec![])], vec![]);

        let pool = DescriptorPool::new(&[proto]);
        let file = pool.file(pool.file_by_name("a.proto").unwrap());
        let names: Vec<_> = file
            .messages
            .iter()
            .map(|id| pool.message(*id).name.as_str())
            .collect();
        assert_eq!(names, vec!["Outer", "Last"]);

        let outer = pool.message(file.messages[0]);
        let fields: Vec<_> = outer.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(fields, vec!["b", "a"]);
        let nested: Vec<_> = outer
            .nested_messages
            .iter()
            .map(|id| pool.message(*id).full_name.as_str())
            .collect();
        assert_eq!(nested, vec![".Outer.First", ".Outer.Second"]);
    }

    #[test]
    fn test_unknown_field_type_has_no_kind() {
        let mut proto = field("mystery", Type::String);
        proto.r#type = Some(99);

        let node = FieldNode::from_proto(&proto);
        assert_eq!(node.kind, None);
    }
}
