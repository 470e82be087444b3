//! Table constraints derived from relational field annotations.

use tracing::debug;

use crate::descriptor::MessageNode;
use crate::diagnostic::Outcome;
use crate::error::Error;
use crate::extensions::{self, RELATIONAL};
use crate::model::{Constraint, Reference};

/// Extract the constraints a message's fields declare.
///
/// Per field, in this order: `UNIQUE` for the unique marker, `PRIMARY KEY`
/// for the primary marker and `FOREIGN KEY` for a `"table.column"`
/// reference. Each constraint covers exactly that one column. Malformed
/// references are dropped with a diagnostic. An annotation that does not
/// decode yields no constraints; it is reported by
/// [`apply_extensions`](crate::extensions::apply_extensions), not here.
pub fn extract_constraints(message: &MessageNode) -> Outcome<Vec<Constraint>> {
    let mut outcome = Outcome::new(Vec::new());

    for field in &message.fields {
        let Some(options) = &field.options else {
            continue;
        };
        let ext = match extensions::relational(options) {
            Some(Ok(ext)) => ext,
            Some(Err(err)) => {
                debug!(
                    field = %field.name,
                    annotation = RELATIONAL,
                    error = %err,
                    "no constraints from undecodable annotation"
                );
                continue;
            }
            None => continue,
        };

        if ext.unique.unwrap_or(false) {
            outcome.value.push(Constraint::unique(&field.name));
        }

        if ext.primary.unwrap_or(false) {
            outcome.value.push(Constraint::primary_key(&field.name));
        }

        if let Some(target) = ext.references.as_deref().filter(|r| !r.is_empty()) {
            match parse_reference(target) {
                Some(reference) => outcome
                    .value
                    .push(Constraint::foreign_key(&field.name, reference)),
                None => outcome.push(
                    field.name.clone(),
                    Error::MalformedReference(target.to_string()),
                ),
            }
        }
    }

    outcome
}

/// Parse `"table.column"`. Anything but exactly two non-empty parts is
/// rejected.
fn parse_reference(target: &str) -> Option<Reference> {
    let mut parts = target.split('.');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(table), Some(column), None) if !table.is_empty() && !column.is_empty() => {
            Some(Reference::new(table, column))
        }
        _ => None,
    }
}
