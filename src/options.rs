//! Plugin parameters.
//!
//! protoc passes everything given with `--sqlc_opt` as one comma separated
//! string, e.g. `schema_file=db/schema.sql,verify=true`. Keys meant for
//! other plugins sharing the same invocation, such as `paths`, are logged
//! and ignored.

use tracing::warn;

use crate::error::{Error, Result};

pub const DEFAULT_SCHEMA_FILE: &str = "schema.sql";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Name of the generated schema document.
    pub schema_file: String,
    /// Re-parse generated DDL before emitting it.
    pub verify: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            schema_file: DEFAULT_SCHEMA_FILE.to_string(),
            verify: false,
        }
    }
}

impl Options {
    /// Parse the request parameter string. Missing or empty input yields
    /// the defaults.
    pub fn parse(parameter: Option<&str>) -> Result<Self> {
        let mut options = Self::default();

        for pair in parameter
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|pair| !pair.is_empty())
        {
            let (key, value) = pair
                .split_once('=')
                .ok_or_else(|| Error::InvalidOption(format!("{pair:?} is not key=value")))?;

            match key.trim() {
                "schema_file" => {
                    let value = value.trim();
                    if value.is_empty() {
                        return Err(Error::InvalidOption(
                            "schema_file must not be empty".to_string(),
                        ));
                    }
                    options.schema_file = value.to_string();
                }
                "verify" => {
                    options.verify = value.trim().parse().map_err(|_| {
                        Error::InvalidOption(format!("verify expects true or false, got {value:?}"))
                    })?;
                }
                other => warn!(option = other, "ignoring unknown option"),
            }
        }

        Ok(options)
    }
}
