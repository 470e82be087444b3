//! Protobuf field type to SQL column type mapping.

use crate::descriptor::{DescriptorPool, FieldNode};
use crate::error::{Error, Result};
use crate::model::ColumnType;
use crate::plugin::field_descriptor_proto::Type;

const TIMESTAMP: &str = ".google.protobuf.Timestamp";
const STRUCT: &str = ".google.protobuf.Struct";

/// Map a field to its column type.
///
/// Unknown kinds and embedded messages fall back to `BYTES`. The only
/// failure is an enum or message field without a type reference.
pub fn map_type(field: &FieldNode, pool: &DescriptorPool) -> Result<ColumnType> {
    let Some(kind) = field.kind else {
        return Ok(ColumnType::Bytes);
    };

    let column_type = match kind {
        Type::Bool => ColumnType::Boolean,
        Type::Bytes => ColumnType::Bytes,
        Type::Float | Type::Double => ColumnType::Float,
        Type::String if field.repeated => ColumnType::TextArray,
        Type::String => ColumnType::Text,
        Type::Int32
        | Type::Int64
        | Type::Uint32
        | Type::Uint64
        | Type::Sint32
        | Type::Sint64
        | Type::Fixed32
        | Type::Fixed64
        | Type::Sfixed32
        | Type::Sfixed64 => ColumnType::Integer,
        Type::Enum => ColumnType::Enum(enum_name(field, pool)?),
        Type::Message | Type::Group => match type_name(field)? {
            TIMESTAMP => ColumnType::Timestamp,
            STRUCT => ColumnType::Jsonb,
            _ => ColumnType::Bytes,
        },
    };

    Ok(column_type)
}

fn type_name(field: &FieldNode) -> Result<&str> {
    field.type_name.as_deref().ok_or_else(|| {
        Error::InvalidInput(format!("field {} has no type reference", field.name))
    })
}

/// Declared name of the enum a field refers to. Enums outside the request
/// fall back to the last segment of the reference.
fn enum_name(field: &FieldNode, pool: &DescriptorPool) -> Result<String> {
    let type_name = type_name(field)?;
    let name = match pool.enum_by_type_name(type_name) {
        Some(node) => node.name.clone(),
        None => type_name.rsplit('.').next().unwrap_or(type_name).to_string(),
    };
    Ok(name)
}
