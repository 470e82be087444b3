use std::io;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A descriptor is missing a piece the pipeline cannot do without,
    /// such as a name or a type reference.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("failed to decode {annotation} annotation: {source}")]
    AnnotationDecodeMismatch {
        annotation: &'static str,
        #[source]
        source: prost::DecodeError,
    },
    #[error("invalid references format {0:?}, expected \"table.column\"")]
    MalformedReference(String),
    #[error("table not found for message {0}")]
    TableNotFound(String),
    #[error("duplicate {kind} {name}")]
    Duplicate { kind: &'static str, name: String },
    #[error("enum type {0} is not part of the generated schema")]
    UndefinedEnum(String),
    #[error("render error: {0}")]
    Render(String),
    #[error("generated SQL failed verification: {0}")]
    Verify(String),
    #[error("invalid plugin option: {0}")]
    InvalidOption(String),
    #[error("decode error: {0}")]
    Decode(
        #[source]
        #[from]
        prost::DecodeError,
    ),
    #[error("encode error: {0}")]
    Encode(
        #[source]
        #[from]
        prost::EncodeError,
    ),
    #[error("io error: {0}")]
    Io(
        #[source]
        #[from]
        io::Error,
    ),
    #[error("sql parser error: {0}")]
    Parser(
        #[source]
        #[from]
        sqlparser::parser::ParserError,
    ),
}

impl From<std::fmt::Error> for Error {
    fn from(err: std::fmt::Error) -> Self {
        Error::Render(err.to_string())
    }
}
