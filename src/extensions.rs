//! Field annotations folded onto column definitions.
//!
//! Two annotations are understood: the relational `sqlc.v1.field` and the
//! `buf.validate.field` rules. Each payload is decoded independently; one
//! that does not decode is reported and ignored.

use prost::Message;

use crate::diagnostic::Diagnostic;
use crate::error::Error;
use crate::model::{Column, ColumnType};
use crate::plugin::{FieldConstraints, FieldOptions, FieldRules};

pub(crate) const RELATIONAL: &str = "sqlc.v1.field";
pub(crate) const VALIDATION: &str = "buf.validate.field";

/// Decode the relational annotation, if the field carries one.
pub(crate) fn relational(
    options: &FieldOptions,
) -> Option<Result<FieldConstraints, prost::DecodeError>> {
    options
        .sqlc_field
        .as_deref()
        .map(|payload| FieldConstraints::decode(payload))
}

/// Decode the validation annotation, if the field carries one.
pub(crate) fn validation(options: &FieldOptions) -> Option<Result<FieldRules, prost::DecodeError>> {
    options
        .validate_field
        .as_deref()
        .map(|payload| FieldRules::decode(payload))
}

/// Apply the field's annotations to `column`.
///
/// The relational annotation is applied first and sets the default literal
/// and, for primary keys, `NOT NULL`. The validation annotation can then
/// only strengthen `NOT NULL`, and switches UUID-formatted strings to
/// `UUID`. Payloads that fail to decode are returned as diagnostics and
/// leave the column as it was.
pub fn apply_extensions(options: &FieldOptions, column: &mut Column) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    match relational(options) {
        Some(Ok(ext)) => {
            column.default = ext.default_value.filter(|literal| !literal.is_empty());
            // Primary key membership doubles as NOT NULL.
            if ext.primary.unwrap_or(false) {
                column.not_null = true;
            }
        }
        Some(Err(source)) => diagnostics.push(Diagnostic::new(
            column.name.clone(),
            Error::AnnotationDecodeMismatch {
                annotation: RELATIONAL,
                source,
            },
        )),
        None => {}
    }

    match validation(options) {
        Some(Ok(rules)) => {
            column.not_null = column.not_null || rules.required.unwrap_or(false);
            if rules.string.and_then(|s| s.uuid).unwrap_or(false) {
                column.column_type = ColumnType::Uuid;
            }
        }
        Some(Err(source)) => diagnostics.push(Diagnostic::new(
            column.name.clone(),
            Error::AnnotationDecodeMismatch {
                annotation: VALIDATION,
                source,
            },
        )),
        None => {}
    }

    diagnostics
}

/// Turn a default value into a SQL literal for `column_type`. Everything
/// except integers, floats and booleans is single quoted.
pub fn format_default(literal: &str, column_type: &ColumnType) -> String {
    if column_type.takes_bare_literal() {
        literal.to_string()
    } else {
        format!("'{}'", literal.replace('\'', "''"))
    }
}
