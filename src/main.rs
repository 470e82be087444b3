use std::process::ExitCode;

use protoc_gen_sqlc::generate::generate;
use protoc_gen_sqlc::plugin::CodeGeneratorResponse;
use protoc_gen_sqlc::runtime;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Log level override, e.g. `PROTOC_GEN_SQLC_LOG=debug`.
const LOG_ENV: &str = "PROTOC_GEN_SQLC_LOG";

fn main() -> ExitCode {
    let level = std::env::var(LOG_ENV)
        .ok()
        .and_then(|value| value.parse::<Level>().ok())
        .unwrap_or(Level::WARN);
    // stdout carries the encoded response, so logs go to stderr.
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("protoc-gen-sqlc: failed to install logger: {err}");
    }

    // protoc reports a response carrying an error and fails the invocation.
    let result = runtime::run(|request| match generate(request) {
        Ok(response) => Ok(response),
        Err(err) => {
            tracing::error!(error = %err, "generation failed");
            Ok(CodeGeneratorResponse {
                error: Some(err.to_string()),
                ..Default::default()
            })
        }
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("protoc-gen-sqlc: {err}");
            ExitCode::FAILURE
        }
    }
}
