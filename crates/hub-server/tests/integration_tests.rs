//! Integration tests for the hub-server binary.
//!
//! Each test spawns the binary against a temp data directory and talks to it
//! over HTTP.

use serde_json::Value;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use tempfile::TempDir;
use tokio::io::AsyncBufReadExt;

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../hub-core/tests/fixtures")
}

/// Create a temporary data directory holding copies of the fixtures.
fn create_test_env() -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    for name in ["db.json", "artigos.json"] {
        std::fs::copy(fixtures_dir().join(name), temp_dir.path().join(name)).unwrap();
    }
    temp_dir
}

fn binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_hub-server"))
}

/// Check that the health endpoint answers.
async fn check_health(port: u16) -> bool {
    let client = reqwest::Client::new();
    match client
        .get(format!("http://127.0.0.1:{}/health", port))
        .timeout(Duration::from_secs(5))
        .send()
        .await
    {
        Ok(response) => response.status().is_success(),
        Err(_) => false,
    }
}

/// Wait for server to be ready.
async fn wait_for_server(port: u16, timeout_secs: u64) -> bool {
    let start = std::time::Instant::now();
    while start.elapsed() < Duration::from_secs(timeout_secs) {
        if check_health(port).await {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
    false
}

struct ServerHandle {
    child: tokio::process::Child,
    port: u16,
}

impl ServerHandle {
    fn url(&self, path: &str) -> String {
        format!("http://127.0.0.1:{}{}", self.port, path)
    }

    async fn get_json(&self, path: &str) -> (u16, Value) {
        let response = reqwest::get(self.url(path)).await.unwrap();
        let status = response.status().as_u16();
        (status, response.json().await.unwrap())
    }

    async fn stop(mut self) {
        let _ = self.child.kill().await;
        let _ = self.child.wait().await;
    }
}

impl Drop for ServerHandle {
    fn drop(&mut self) {
        let _ = self.child.start_kill();
    }
}

/// Start the binary and wait until `/health` is ready.
async fn start_server(data_dir: &Path) -> Result<ServerHandle, String> {
    let mut child = tokio::process::Command::new(binary_path())
        .arg("--host")
        .arg("127.0.0.1")
        .arg("--port")
        .arg("0")
        .arg("--data-dir")
        .arg(data_dir)
        .arg("--cache-ttl-secs")
        .arg("60")
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .kill_on_drop(true)
        .spawn()
        .map_err(|e| format!("failed to spawn hub-server: {e}"))?;

    let stdout = child
        .stdout
        .take()
        .ok_or_else(|| "failed to capture stdout".to_string())?;
    let mut lines = tokio::io::BufReader::new(stdout).lines();

    let mut discovered_port: Option<u16> = None;
    let deadline = tokio::time::Instant::now() + Duration::from_secs(20);
    while tokio::time::Instant::now() < deadline {
        match tokio::time::timeout(Duration::from_millis(250), lines.next_line()).await {
            Ok(Ok(Some(line))) => {
                if let Some(value) = line.strip_prefix("SERVER_PORT=") {
                    let parsed = value
                        .trim()
                        .parse::<u16>()
                        .map_err(|e| format!("invalid SERVER_PORT value '{value}': {e}"))?;
                    discovered_port = Some(parsed);
                    break;
                }
            }
            Ok(Ok(None)) => break,
            Ok(Err(err)) => return Err(format!("failed to read hub-server stdout: {err}")),
            Err(_) => continue,
        }
    }

    let port = discovered_port
        .ok_or_else(|| "SERVER_PORT line not emitted by hub-server".to_string())?;
    if !wait_for_server(port, 15).await {
        return Err(format!("hub-server failed health check on port {port}"));
    }

    Ok(ServerHandle { child, port })
}

#[tokio::test]
async fn test_health_reports_fixture_version() {
    let env = create_test_env();
    let server = start_server(env.path()).await.unwrap();

    let (status, body) = server.get_json("/health").await;
    assert_eq!(status, 200);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["dataVersion"], "3.2.0");
    assert_eq!(body["highlightsSource"], "static");

    server.stop().await;
}

#[tokio::test]
async fn test_highlights_cache_roundtrip() {
    let env = create_test_env();
    let server = start_server(env.path()).await.unwrap();
    let client = reqwest::Client::new();

    let head = client
        .head(server.url("/api/destaques"))
        .send()
        .await
        .unwrap();
    assert_eq!(head.headers()["x-cache-status"], "MISS");

    let first = client.get(server.url("/api/destaques")).send().await.unwrap();
    assert_eq!(first.headers()["x-cache"], "MISS");
    let items: Vec<Value> = first.json().await.unwrap();
    let ids: Vec<u64> = items.iter().filter_map(|a| a["id"].as_u64()).collect();
    assert_eq!(ids, vec![1, 3]);

    let second = client.get(server.url("/api/destaques")).send().await.unwrap();
    assert_eq!(second.headers()["x-cache"], "HIT");

    let head = client
        .head(server.url("/api/destaques"))
        .send()
        .await
        .unwrap();
    assert_eq!(head.headers()["x-cache-status"], "HIT");
    assert_eq!(head.headers()["x-api-version"], "1.0");

    server.stop().await;
}

#[tokio::test]
async fn test_persons_from_fixture() {
    let env = create_test_env();
    let server = start_server(env.path()).await.unwrap();

    let (status, body) = server.get_json("/api/persons").await;
    assert_eq!(status, 200);
    assert_eq!(body["metadata"]["totalMembers"], 3);
    assert_eq!(body["members"][0]["img"], "/icons/zer0.jpg");

    let (status, body) = server.get_json("/api/persons/Política").await;
    assert_eq!(status, 200);
    let ids: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|m| m["id"].as_str())
        .collect();
    assert_eq!(ids, vec!["noir", "armando-leal"]);

    server.stop().await;
}

#[tokio::test]
async fn test_degraded_data_still_serves() {
    let env = create_test_env();
    std::fs::write(env.path().join("db.json"), "not json").unwrap();
    let server = start_server(env.path()).await.unwrap();

    let (status, body) = server.get_json("/health").await;
    assert_eq!(status, 200);
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["dataVersion"], "error");

    let (status, body) = server.get_json("/api/persons").await;
    assert_eq!(status, 500);
    assert_eq!(body["plataformas"].as_array().unwrap().len(), 0);

    // Articles come from their own file and are unaffected.
    let (status, body) = server.get_json("/api/artigos").await;
    assert_eq!(status, 200);
    assert_eq!(body.as_array().unwrap().len(), 3);

    server.stop().await;
}

#[test]
fn test_validate_flag_exit_codes() {
    let env = create_test_env();
    let output = std::process::Command::new(binary_path())
        .arg("--validate")
        .arg("--data-dir")
        .arg(env.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    let report = String::from_utf8_lossy(&output.stdout);
    assert!(report.contains("members: 3"));

    // A broken articles file is reported but does not fail validation.
    std::fs::write(env.path().join("artigos.json"), "[]").unwrap();
    let output = std::process::Command::new(binary_path())
        .arg("--validate")
        .arg("--data-dir")
        .arg(env.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    std::fs::remove_file(env.path().join("artigos.json")).unwrap();
    let output = std::process::Command::new(binary_path())
        .arg("--validate")
        .arg("--data-dir")
        .arg(env.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    std::fs::write(env.path().join("db.json"), "{ broken").unwrap();
    let output = std::process::Command::new(binary_path())
        .arg("--validate")
        .arg("--data-dir")
        .arg(env.path())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
}
