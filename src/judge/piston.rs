//! Piston-compatible execution client.
//!
//! Speaks the `POST /api/v2/execute` wire format. The `version` selector
//! is always `*`, which resolves to the newest runtime installed on the
//! service for that language.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::JudgeConfig;
use crate::error::{AppError, AppResult};

use super::{ExecutionRequest, JudgeClient, RunOutput};

const ANY_VERSION: &str = "*";

pub struct PistonClient {
    client: reqwest::Client,
    base_url: String,
}

impl PistonClient {
    pub fn new(config: &JudgeConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| AppError::Configuration(format!("judge client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.url.trim_end_matches('/').to_string(),
        })
    }

    fn execute_url(&self) -> String {
        format!("{}/api/v2/execute", self.base_url)
    }
}

#[async_trait]
impl JudgeClient for PistonClient {
    async fn execute(&self, request: &ExecutionRequest) -> AppResult<RunOutput> {
        let payload = ExecutePayload {
            language: &request.language,
            version: ANY_VERSION,
            files: vec![ExecuteFile {
                content: &request.code,
            }],
            stdin: &request.stdin,
        };

        let response = self
            .client
            .post(self.execute_url())
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let message = extract_service_message(&body).unwrap_or(body);
            return Err(AppError::Judge(format!(
                "execution service returned {status}: {message}"
            )));
        }

        let body: ExecuteResponse = response.json().await?;
        debug!(
            language = %request.language,
            exit_code = ?body.run.code,
            "execution service responded"
        );

        Ok(RunOutput {
            compile_error: compile_failure(body.compile.as_ref()),
            stdout: body.run.stdout,
            stderr: body.run.stderr,
            exit_code: body.run.code,
        })
    }
}

#[derive(Serialize)]
struct ExecutePayload<'a> {
    language: &'a str,
    version: &'a str,
    files: Vec<ExecuteFile<'a>>,
    stdin: &'a str,
}

#[derive(Serialize)]
struct ExecuteFile<'a> {
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ExecuteResponse {
    run: StageOutput,
    #[serde(default)]
    compile: Option<StageOutput>,
}

/// One stage of a Piston run. Compiled languages report a `compile`
/// stage before `run`; interpreted ones omit it.
#[derive(Debug, Default, Deserialize)]
struct StageOutput {
    #[serde(default)]
    stdout: String,
    #[serde(default)]
    stderr: String,
    #[serde(default)]
    code: Option<i64>,
}

fn compile_failure(compile: Option<&StageOutput>) -> Option<String> {
    let stage = compile?;
    if stage.code == Some(0) {
        return None;
    }
    if !stage.stderr.is_empty() {
        Some(stage.stderr.clone())
    } else {
        Some(stage.stdout.clone())
    }
}

fn extract_service_message(body: &str) -> Option<String> {
    #[derive(Deserialize)]
    struct ServiceError {
        message: String,
    }
    serde_json::from_str::<ServiceError>(body)
        .ok()
        .map(|e| e.message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_interpreted_language_response() {
        let raw = r#"{
            "language": "python",
            "version": "3.10.0",
            "run": {"stdout": "3\n", "stderr": "", "code": 0, "signal": null, "output": "3\n"}
        }"#;
        let parsed: ExecuteResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.run.stdout, "3\n");
        assert_eq!(parsed.run.code, Some(0));
        assert!(parsed.compile.is_none());
    }

    #[test]
    fn parses_compiled_language_response() {
        let raw = r#"{
            "language": "c++",
            "version": "10.2.0",
            "compile": {"stdout": "", "stderr": "", "code": 0},
            "run": {"stdout": "ok", "stderr": "", "code": 0}
        }"#;
        let parsed: ExecuteResponse = serde_json::from_str(raw).unwrap();
        assert!(compile_failure(parsed.compile.as_ref()).is_none());
    }

    #[test]
    fn surfaces_compile_stage_failures() {
        let stage = StageOutput {
            stdout: String::new(),
            stderr: "main.cpp:1: expected ';'".to_string(),
            code: Some(1),
        };
        let err = compile_failure(Some(&stage)).unwrap();
        assert!(err.contains("expected ';'"));
    }

    #[test]
    fn compile_stage_without_exit_code_counts_as_failure() {
        let stage = StageOutput {
            stdout: "killed".to_string(),
            stderr: String::new(),
            code: None,
        };
        assert_eq!(compile_failure(Some(&stage)).as_deref(), Some("killed"));
    }

    #[test]
    fn extracts_service_error_messages() {
        let body = r#"{"message": "runtime unknown"}"#;
        assert_eq!(
            extract_service_message(body).as_deref(),
            Some("runtime unknown")
        );
        assert!(extract_service_message("not json").is_none());
    }
}
