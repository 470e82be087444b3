//! Request to response pipeline.

use tracing::{debug, info, warn};

use crate::builder::{BuildOutput, SchemaBuilder};
use crate::descriptor::DescriptorPool;
use crate::error::{Error, Result};
use crate::options::Options;
use crate::plugin::code_generator_response::{Feature, File};
use crate::plugin::{CodeGeneratorRequest, CodeGeneratorResponse};
use crate::render::{CrudParams, HeaderParams, Renderer};

/// Compile the requested proto files into a schema document plus one CRUD
/// document per file.
///
/// Definitions that cannot be built are logged and skipped. A document
/// that fails to render is left out and its error reported in the
/// response's `error` field; the other documents are still returned.
pub fn generate(request: CodeGeneratorRequest) -> Result<CodeGeneratorResponse> {
    let options = Options::parse(request.parameter.as_deref())?;
    if let Some(version) = &request.compiler_version {
        debug!(
            major = version.major.unwrap_or_default(),
            minor = version.minor.unwrap_or_default(),
            patch = version.patch.unwrap_or_default(),
            "invoked by protoc"
        );
    }

    let pool = DescriptorPool::new(&request.proto_file);
    let outcome = SchemaBuilder::new(&pool).build(&request.file_to_generate);
    outcome.log();
    let output = outcome.value;

    let renderer = Renderer::new(&options);
    let mut response = CodeGeneratorResponse {
        supported_features: Some(Feature::Proto3Optional as u64),
        ..Default::default()
    };
    let mut errors = Vec::new();

    if output.sources.is_empty() {
        debug!("no file declares messages, nothing to generate");
        return Ok(response);
    }

    info!(name = %options.schema_file, "generating schema");
    let header = HeaderParams::new(output.sources.iter().cloned());
    match renderer.render_schema(&output.schema, &header) {
        Ok(content) => response.file.push(file(&options.schema_file, content)),
        Err(err) => {
            warn!(name = %options.schema_file, error = %err, "failed to render schema");
            errors.push(format!("{}: {err}", options.schema_file));
        }
    }

    for source in &output.sources {
        let name = query_file_name(source);
        info!(source = %source, name = %name, "generating queries");
        match render_file_queries(&renderer, &output, source) {
            Ok(content) => response.file.push(file(&name, content)),
            Err(err @ Error::TableNotFound(_)) => {
                warn!(source = %source, error = %err, "skipping queries");
            }
            Err(err) => {
                warn!(name = %name, error = %err, "failed to render queries");
                errors.push(format!("{name}: {err}"));
            }
        }
    }

    if !errors.is_empty() {
        response.error = Some(errors.join("; "));
    }

    Ok(response)
}

/// CRUD document for every table declared in `source`.
fn render_file_queries(renderer: &Renderer, output: &BuildOutput, source: &str) -> Result<String> {
    let tables = output
        .files_by_message
        .messages_in(source)
        .map(|message| {
            output
                .schema
                .table_by_name(message)
                .map(CrudParams::for_table)
                .ok_or_else(|| Error::TableNotFound(message.to_string()))
        })
        .collect::<Result<Vec<_>>>()?;

    renderer.render_queries(&HeaderParams::new([source]), &tables)
}

/// `library/v1/book.proto` becomes `library/v1/book.sql`.
pub fn query_file_name(source: &str) -> String {
    let stem = source.strip_suffix(".proto").unwrap_or(source);
    format!("{stem}.sql")
}

fn file(name: &str, content: String) -> File {
    File {
        name: Some(name.to_string()),
        insertion_point: None,
        content: Some(content),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugin::field_descriptor_proto::Type;
    use crate::testing::{
        field, file as proto_file, library_request_files, message, primary, relational,
    };

    fn library_request(parameter: Option<&str>) -> CodeGeneratorRequest {
        CodeGeneratorRequest {
            file_to_generate: vec![
                "library/v1/author.proto".to_string(),
                "library/v1/book.proto".to_string(),
            ],
            parameter: parameter.map(str::to_string),
            proto_file: library_request_files(),
            compiler_version: None,
        }
    }

    fn names(response: &CodeGeneratorResponse) -> Vec<&str> {
        response
            .file
            .iter()
            .map(|f| f.name.as_deref().unwrap())
            .collect()
    }

    #[test]
    fn test_generate_library() {
        let response = generate(library_request(None)).unwrap();

        assert_eq!(response.error, None);
        assert_eq!(response.supported_features, Some(1));
        assert_eq!(
            names(&response),
            vec!["schema.sql", "library/v1/author.sql", "library/v1/book.sql"]
        );

        let schema = response.file[0].content.as_deref().unwrap();
        assert!(schema.contains("--   library/v1/author.proto\n--   library/v1/book.proto\n"));
        assert!(schema.contains("CREATE TYPE BookType AS ENUM ("));
        assert!(schema.contains("CREATE TABLE Author ("));
        assert!(schema.contains("  name TEXT DEFAULT 'Anonymous',\n"));
        assert!(schema.contains(
            "FOREIGN KEY (author_id) REFERENCES Author (author_id) ON DELETE NO ACTION ON UPDATE NO ACTION"
        ));

        let books = response.file[2].content.as_deref().unwrap();
        assert!(books.contains("--   library/v1/book.proto\n"));
        assert!(!books.contains("author.proto"));
        assert!(books.contains("-- name: GetBook :one\n"));
        assert!(books.contains("WHERE book_id = $1 LIMIT 1;"));
        assert!(books.contains("  tags = $6\n"));
    }

    #[test]
    fn test_schema_file_option() {
        let response = generate(library_request(Some("schema_file=db/schema.sql"))).unwrap();
        assert_eq!(names(&response)[0], "db/schema.sql");
    }

    #[test]
    fn test_verify_option() {
        let response = generate(library_request(Some("verify=true"))).unwrap();
        assert_eq!(response.error, None);
        assert_eq!(response.file.len(), 3);
    }

    #[test]
    fn test_invalid_option_fails_request() {
        let result = generate(library_request(Some("verify=maybe")));
        assert!(matches!(result, Err(Error::InvalidOption(_))));
    }

    #[test]
    fn test_nothing_to_generate() {
        let request = CodeGeneratorRequest {
            file_to_generate: vec!["empty.proto".to_string()],
            proto_file: vec![proto_file("empty.proto", "", vec![], vec![])],
            ..Default::default()
        };
        let response = generate(request).unwrap();

        assert!(response.file.is_empty());
        assert_eq!(response.error, None);
    }

    #[test]
    fn test_degenerate_tables_do_not_fail_the_request() {
        let request = CodeGeneratorRequest {
            file_to_generate: vec!["a.proto".to_string(), "b.proto".to_string()],
            proto_file: vec![
                proto_file(
                    "a.proto",
                    "",
                    vec![
                        message(
                            "Note",
                            vec![
                                relational(field("id", Type::Int32), primary()),
                                field("body", Type::String),
                            ],
                        ),
                        message("Empty", vec![]),
                    ],
                    vec![],
                ),
                proto_file(
                    "b.proto",
                    "",
                    vec![message(
                        "Tag",
                        vec![relational(field("id", Type::Int32), primary())],
                    )],
                    vec![],
                ),
            ],
            ..Default::default()
        };
        let response = generate(request).unwrap();

        assert_eq!(response.error, None);
        assert_eq!(names(&response), vec!["schema.sql", "a.sql", "b.sql"]);
        assert!(response.file[0]
            .content
            .as_deref()
            .unwrap()
            .contains("CREATE TABLE Empty (\n);\n"));

        let notes = response.file[1].content.as_deref().unwrap();
        assert_eq!(notes.matches("-- name: ").count(), 5);
        assert!(notes.contains("-- name: UpdateNote :one\n"));
        assert!(!notes.contains("Empty"));

        let tags = response.file[2].content.as_deref().unwrap();
        assert_eq!(tags.matches("-- name: ").count(), 4);
        assert!(!tags.contains("UpdateTag"));
    }

    #[test]
    fn test_query_file_name() {
        assert_eq!(query_file_name("library/v1/book.proto"), "library/v1/book.sql");
        assert_eq!(query_file_name("odd"), "odd.sql");
    }

    #[test]
    fn test_generate_is_deterministic() {
        let first = generate(library_request(None)).unwrap();
        let second = generate(library_request(None)).unwrap();
        assert_eq!(first, second);
    }
}
