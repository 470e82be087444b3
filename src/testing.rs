//! Descriptor fixtures shared by the unit tests.

use prost::Message;

use crate::plugin::field_descriptor_proto::{Label, Type};
use crate::plugin::{
    DescriptorProto, EnumDescriptorProto, EnumValueDescriptorProto, FieldConstraints,
    FieldDescriptorProto, FieldOptions, FieldRules, FileDescriptorProto, MessageOptions,
    StringRules,
};

pub fn file(
    name: &str,
    package: &str,
    messages: Vec<DescriptorProto>,
    enums: Vec<EnumDescriptorProto>,
) -> FileDescriptorProto {
    FileDescriptorProto {
        name: Some(name.to_string()),
        package: (!package.is_empty()).then(|| package.to_string()),
        message_type: messages,
        enum_type: enums,
        syntax: Some("proto3".to_string()),
    }
}

pub fn message(name: &str, fields: Vec<FieldDescriptorProto>) -> DescriptorProto {
    DescriptorProto {
        name: Some(name.to_string()),
        field: fields,
        ..Default::default()
    }
}

pub fn map_entry(name: &str) -> DescriptorProto {
    DescriptorProto {
        name: Some(name.to_string()),
        field: vec![field("key", Type::String), field("value", Type::String)],
        options: Some(MessageOptions {
            map_entry: Some(true),
        }),
        ..Default::default()
    }
}

pub fn enum_proto(name: &str, values: &[&str]) -> EnumDescriptorProto {
    EnumDescriptorProto {
        name: Some(name.to_string()),
        value: values
            .iter()
            .enumerate()
            .map(|(number, value)| EnumValueDescriptorProto {
                name: Some(value.to_string()),
                number: Some(number as i32),
            })
            .collect(),
    }
}

pub fn field(name: &str, kind: Type) -> FieldDescriptorProto {
    FieldDescriptorProto {
        name: Some(name.to_string()),
        number: Some(1),
        label: Some(Label::Optional as i32),
        r#type: Some(kind as i32),
        ..Default::default()
    }
}

pub fn repeated(mut field: FieldDescriptorProto) -> FieldDescriptorProto {
    field.label = Some(Label::Repeated as i32);
    field
}

pub fn typed(mut field: FieldDescriptorProto, type_name: &str) -> FieldDescriptorProto {
    field.type_name = Some(type_name.to_string());
    field
}

pub fn relational(
    mut field: FieldDescriptorProto,
    constraints: FieldConstraints,
) -> FieldDescriptorProto {
    field
        .options
        .get_or_insert_with(FieldOptions::default)
        .sqlc_field = Some(constraints.encode_to_vec());
    field
}

pub fn validated(mut field: FieldDescriptorProto, rules: FieldRules) -> FieldDescriptorProto {
    field
        .options
        .get_or_insert_with(FieldOptions::default)
        .validate_field = Some(rules.encode_to_vec());
    field
}

pub fn primary() -> FieldConstraints {
    FieldConstraints {
        primary: Some(true),
        ..Default::default()
    }
}

pub fn unique() -> FieldConstraints {
    FieldConstraints {
        unique: Some(true),
        ..Default::default()
    }
}

pub fn references(target: &str) -> FieldConstraints {
    FieldConstraints {
        references: Some(target.to_string()),
        ..Default::default()
    }
}

pub fn default_value(literal: &str) -> FieldConstraints {
    FieldConstraints {
        default_value: Some(literal.to_string()),
        ..Default::default()
    }
}

pub fn required() -> FieldRules {
    FieldRules {
        required: Some(true),
        ..Default::default()
    }
}

pub fn uuid() -> FieldRules {
    FieldRules {
        string: Some(StringRules { uuid: Some(true) }),
        ..Default::default()
    }
}

/// Options whose relational payload cannot be decoded as `FieldConstraints`.
pub fn garbled_relational() -> FieldOptions {
    FieldOptions {
        // Field 1 announced as length-delimited with a length past the end.
        sqlc_field: Some(vec![0x0a, 0x7f, b'x']),
        ..Default::default()
    }
}

/// Library example: authors and books split over two files.
pub fn library_request_files() -> Vec<FileDescriptorProto> {
    let author = message(
        "Author",
        vec![
            relational(field("author_id", Type::Int32), primary()),
            relational(field("name", Type::String), default_value("Anonymous")),
            typed(field("biography", Type::Message), ".google.protobuf.Struct"),
        ],
    );
    let book = message(
        "Book",
        vec![
            relational(field("book_id", Type::Int32), primary()),
            relational(
                field("author_id", Type::Int32),
                references("Author.author_id"),
            ),
            relational(field("isbn", Type::String), unique()),
            typed(field("book_type", Type::Enum), ".library.v1.BookType"),
            typed(
                field("available_time", Type::Message),
                ".google.protobuf.Timestamp",
            ),
            repeated(field("tags", Type::String)),
        ],
    );

    vec![
        file(
            "google/protobuf/timestamp.proto",
            "google.protobuf",
            vec![message("Timestamp", vec![])],
            vec![],
        ),
        file(
            "google/protobuf/struct.proto",
            "google.protobuf",
            vec![message("Struct", vec![])],
            vec![],
        ),
        file("library/v1/author.proto", "library.v1", vec![author], vec![]),
        file(
            "library/v1/book.proto",
            "library.v1",
            vec![book],
            vec![enum_proto(
                "BookType",
                &["BOOK_TYPE_UNSPECIFIED", "BOOK_TYPE_FICTION", "BOOK_TYPE_NONFICTION"],
            )],
        ),
    ]
}
