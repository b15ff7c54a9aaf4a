//! # Purpose
//! Classify flag-management operations from the command line: read operation
//! envelopes as JSON lines and print the descriptor each one produces, or the
//! authorization error when a check is required and fails.
//!
//! # Input
//! One envelope per line, e.g.
//! `{"operation":"get_flag","input":{"key":"f","namespace_key":"production"}}`.
//! Blank lines are skipped. A line that fails to decode prints
//! `{"line": N, "error": ...}` and the stream continues.
//!
//! # Notes
//! Authorization settings come from `FLIPT_AUTHORIZATION_REQUIRED` and
//! `FLIPT_AUTHORIZATION_CONFIG`; `--required` forces checks on.
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use flipt_authz::observability::init_tracing;
use flipt_authz::{
    AllowAll, AuthorizationConfig, Authentication, Authorizer, DenyAll, Operation,
    PolicyDecisionPoint,
};
use serde_json::{Value, json};
use std::pin::Pin;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Engine {
    Allow,
    Deny,
}

#[derive(Parser, Debug)]
#[command(name = "classify")]
#[command(about = "Print the authorization descriptor for each operation envelope")]
struct Args {
    /// File with one operation envelope per line (stdin when omitted)
    #[arg(long)]
    input: Option<String>,

    /// Decision point used when authorization is required
    #[arg(long, value_enum, default_value = "allow")]
    engine: Engine,

    /// Authentication method attached to every request
    #[arg(long, env = "FLIPT_CLASSIFY_METHOD", default_value = "token")]
    method: String,

    /// Require authorization regardless of configuration
    #[arg(long)]
    required: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let mut config = AuthorizationConfig::from_env_or_yaml()?;
    config.required |= args.required;
    let engine: Arc<dyn PolicyDecisionPoint> = match args.engine {
        Engine::Allow => Arc::new(AllowAll),
        Engine::Deny => Arc::new(DenyAll),
    };
    let authorizer = Authorizer::new(config, engine);
    let authentication = Authentication::new(args.method);

    let reader: Pin<Box<dyn AsyncRead>> = match &args.input {
        Some(path) => Box::pin(
            tokio::fs::File::open(path)
                .await
                .with_context(|| format!("open input: {path}"))?,
        ),
        None => Box::pin(tokio::io::stdin()),
    };

    let mut lines = BufReader::new(reader).lines();
    let mut line_no = 0usize;
    let mut failed = 0usize;
    while let Some(line) = lines.next_line().await.context("read input")? {
        line_no += 1;
        if line.trim().is_empty() {
            continue;
        }
        match classify_line(&authorizer, &authentication, line_no, &line).await {
            Ok(descriptor) => println!("{descriptor}"),
            Err(record) => {
                failed += 1;
                println!("{record}");
            }
        }
    }

    tracing::info!(lines = line_no, failed, "classification finished");
    Ok(())
}

/// Decode and authorize one envelope.
///
/// `Ok` carries the descriptor; `Err` carries the record printed in its place,
/// either a decode error keyed by line or an authorization error keyed by
/// operation.
async fn classify_line<P: PolicyDecisionPoint>(
    authorizer: &Authorizer<P>,
    authentication: &Authentication,
    line_no: usize,
    line: &str,
) -> Result<Value, Value> {
    let operation: Operation = match serde_json::from_str(line) {
        Ok(operation) => operation,
        Err(err) => {
            tracing::warn!(line = line_no, error = %err, "decode operation failed");
            return Err(json!({ "line": line_no, "error": err.to_string() }));
        }
    };
    match authorizer.authorize(Some(authentication), &operation).await {
        Ok(request) => Ok(json!(request)),
        Err(err) => Err(json!({
            "operation": operation.kind().as_str(),
            "error": err.to_string(),
        })),
    }
}
