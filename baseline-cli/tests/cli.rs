use tokio::process::Command;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const NEWLY_BODY: &str = r#"{
    "feature_id": "popover",
    "name": "Popover",
    "baseline": { "status": "newly", "low_date": "2024-04-16" },
    "developer_signals": { "link": "https://github.com/web-platform-dx/developer-signals/issues/5", "upvotes": 1 },
    "browser_implementations": {
        "chrome": { "status": "available", "date": "2023-04-04", "version": "114" },
        "chrome_android": { "status": "available" },
        "edge": { "status": "available" },
        "firefox": { "status": "available" },
        "firefox_android": { "status": "available" },
        "safari": { "status": "available" },
        "safari_ios": { "status": "available" }
    }
}"#;

fn temp_path(label: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "baseline-cli-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

async fn serve(status: u16, body: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/features/popover"))
        .respond_with(ResponseTemplate::new(status).set_body_raw(body, "application/json"))
        .mount(&server)
        .await;
    server
}

async fn run(server: &MockServer, extra: &[&str]) -> std::process::Output {
    let exe = env!("CARGO_BIN_EXE_baseline-status");
    Command::new(exe)
        .arg("popover")
        .args(["--base-url", &format!("{}/v1/features/", server.uri())])
        .arg("--no-color")
        .args(extra)
        .output()
        .await
        .expect("run cli")
}

#[tokio::test]
async fn json_output_describes_newly_feature() {
    let server = serve(200, NEWLY_BODY).await;
    let output = run(&server, &["--format", "json"]).await;
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json stdout");
    assert_eq!(value["feature_id"], "popover");
    assert_eq!(value["tier"], "newly");
    assert_eq!(value["date_label"], "April 2024");
    assert_eq!(value["headline"], "Baseline 2024");
    assert_eq!(value["badge"], true);
    assert_eq!(value["upvotes"]["label"], "1 developer upvote");
    assert!(
        value["aria_label"]
            .as_str()
            .unwrap_or_default()
            .contains("Supported in Safari: yes.")
    );
}

#[tokio::test]
async fn http_error_still_prints_no_data_view() {
    let server = serve(500, "oops").await;
    let output = run(&server, &[]).await;
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("popover\nUnknown availability\n"), "{stdout}");
    assert!(stdout.contains("Learn more: https://webstatus.dev/features/popover"));
}

#[tokio::test]
async fn unknown_feature_path_degrades_to_no_data() {
    let server = serve(200, NEWLY_BODY).await;
    let exe = env!("CARGO_BIN_EXE_baseline-status");
    let output = Command::new(exe)
        .arg("not-a-feature")
        .args(["--base-url", &format!("{}/v1/features/", server.uri())])
        .args(["--format", "json"])
        .output()
        .await
        .expect("run cli");
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json stdout");
    assert_eq!(value["name"], "not-a-feature");
    assert_eq!(value["tier"], "no_data");
    let aria = value["aria_label"].as_str().unwrap_or_default();
    assert_eq!(aria.matches(": unknown.").count(), 4, "{aria}");
}

#[tokio::test]
async fn html_output_written_to_file_with_new_tab_links() {
    let server = serve(200, NEWLY_BODY).await;
    let output_path = temp_path("html");
    let output = run(
        &server,
        &[
            "--format",
            "html",
            "--new-tab",
            "--output",
            output_path.to_str().expect("utf-8 temp path"),
        ],
    )
    .await;
    assert!(output.status.success());
    let markup = std::fs::read_to_string(&output_path).expect("read output");
    assert!(markup.contains("Baseline 2024"));
    assert!(markup.contains("target=\"_blank\""));
    assert!(markup.contains("rel=\"noopener noreferrer\""));
    let _ = std::fs::remove_file(output_path);
}
