use crate::error::Result;
use crate::plugin::{CodeGeneratorRequest, CodeGeneratorResponse};
use prost::Message;
use std::io::{Read, Write};

/// Read a request from stdin, run `process` and write its response to stdout.
pub fn run<TFunc>(process: TFunc) -> Result<()>
where
    TFunc: FnOnce(CodeGeneratorRequest) -> Result<CodeGeneratorResponse>,
{
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_with_io(stdin.lock(), stdout.lock(), process)
}

pub fn run_with_io<TReader, TWriter, TFunc>(
    mut reader: TReader,
    mut writer: TWriter,
    process: TFunc,
) -> Result<()>
where
    TReader: Read,
    TWriter: Write,
    TFunc: FnOnce(CodeGeneratorRequest) -> Result<CodeGeneratorResponse>,
{
    let mut input = Vec::new();
    reader.read_to_end(&mut input)?;

    let request = CodeGeneratorRequest::decode(&input[..])?;
    let response = process(request)?;

    let mut output = Vec::new();
    response.encode(&mut output)?;

    writer.write_all(&output)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::plugin::code_generator_response::File;
    use crate::plugin::Version;

    fn create_sample_request() -> CodeGeneratorRequest {
        CodeGeneratorRequest {
            file_to_generate: vec!["library/v1/book.proto".to_string()],
            parameter: None,
            proto_file: vec![],
            compiler_version: None,
        }
    }

    fn create_sample_response() -> CodeGeneratorResponse {
        CodeGeneratorResponse {
            file: vec![File {
                name: Some("schema.sql".to_string()),
                insertion_point: None,
                content: Some("-- test content".to_string()),
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_run_with_io_success() {
        let mut input = Vec::new();
        let mut output = Vec::new();

        let request = create_sample_request();
        request.encode(&mut input).unwrap();

        let result = run_with_io(&input[..], &mut output, |req| {
            assert_eq!(req.file_to_generate, vec!["library/v1/book.proto"]);
            Ok(create_sample_response())
        });
        assert!(result.is_ok(), "run_with_io should succeed");

        let response = CodeGeneratorResponse::decode(&output[..]).unwrap();
        assert_eq!(response.file.len(), 1);
        assert_eq!(response.file[0].name.as_deref(), Some("schema.sql"));
        assert_eq!(response.file[0].content.as_deref(), Some("-- test content"));
    }

    #[test]
    fn test_run_with_io_processor_error() {
        let mut input = Vec::new();
        let mut output = Vec::new();

        let request = create_sample_request();
        request.encode(&mut input).unwrap();

        let result = run_with_io(&input[..], &mut output, |_req| {
            Err(Error::InvalidOption("unknown option \"x\"".to_string()))
        });
        assert!(
            matches!(result, Err(Error::InvalidOption(_))),
            "run_with_io should fail when processor fails"
        );
        assert!(output.is_empty());
    }

    #[test]
    fn test_run_with_io_invalid_input() {
        let input = b"invalid protobuf data";
        let mut output = Vec::new();

        let result = run_with_io(&input[..], &mut output, |_req| Ok(create_sample_response()));
        assert!(
            matches!(result, Err(Error::Decode(_))),
            "run_with_io should fail with invalid input"
        );
    }

    #[test]
    fn test_run_with_io_empty_input() {
        let input: &[u8] = &[];
        let mut output = Vec::new();

        let result = run_with_io(input, &mut output, |req| {
            assert!(req.file_to_generate.is_empty());
            Ok(create_sample_response())
        });
        assert!(
            result.is_ok(),
            "run_with_io should succeed with empty input (creates default request)"
        );

        let response = CodeGeneratorResponse::decode(&output[..]).unwrap();
        assert_eq!(response.file.len(), 1);
    }

    #[test]
    fn test_run_with_io_error_response() {
        let mut input = Vec::new();
        let mut output = Vec::new();

        let request = create_sample_request();
        request.encode(&mut input).unwrap();

        let result = run_with_io(&input[..], &mut output, |_req| {
            Ok(CodeGeneratorResponse {
                error: Some("book.sql: render error".to_string()),
                ..Default::default()
            })
        });
        assert!(result.is_ok());

        let response = CodeGeneratorResponse::decode(&output[..]).unwrap();
        assert!(response.file.is_empty());
        assert_eq!(response.error.as_deref(), Some("book.sql: render error"));
    }

    #[test]
    fn test_run_with_io_preserves_request_data() {
        let mut input = Vec::new();
        let mut output = Vec::new();

        let request = CodeGeneratorRequest {
            file_to_generate: vec!["a.proto".to_string(), "b.proto".to_string()],
            parameter: Some("verify=true".to_string()),
            proto_file: vec![],
            compiler_version: Some(Version {
                major: Some(5),
                minor: Some(28),
                patch: Some(2),
                suffix: None,
            }),
        };
        request.encode(&mut input).unwrap();

        let result = run_with_io(&input[..], &mut output, |req| {
            assert_eq!(req.file_to_generate, vec!["a.proto", "b.proto"]);
            assert_eq!(req.parameter.as_deref(), Some("verify=true"));
            assert_eq!(req.compiler_version.and_then(|v| v.minor), Some(28));
            Ok(create_sample_response())
        });
        assert!(result.is_ok());
    }

    #[test]
    fn test_run_with_io_large_content() {
        let mut input = Vec::new();
        let mut output = Vec::new();

        let request = create_sample_request();
        request.encode(&mut input).unwrap();

        let result = run_with_io(&input[..], &mut output, |_req| {
            Ok(CodeGeneratorResponse {
                file: vec![File {
                    name: Some("large.sql".to_string()),
                    insertion_point: None,
                    content: Some("x".repeat(1024 * 1024)),
                }],
                ..Default::default()
            })
        });
        assert!(result.is_ok(), "run_with_io should handle large content");

        let response = CodeGeneratorResponse::decode(&output[..]).unwrap();
        assert_eq!(
            response.file[0].content.as_ref().map(String::len),
            Some(1024 * 1024)
        );
    }
}
