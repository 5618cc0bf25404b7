use std::io::Write;
use std::time::Duration;

use dashboard_client::{BackendApi, BackendConfig, FailureKind, ReqwestBackend};
use pretty_assertions::assert_eq;
use wiremock::matchers::{body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn backend_for(server: &MockServer) -> ReqwestBackend {
    let config = BackendConfig::from_base_url(&server.uri()).expect("valid base url");
    ReqwestBackend::new(config).expect("client builds")
}

#[tokio::test]
async fn fetch_latest_parses_jobs_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/fetch-latest"))
        .and(query_param("force", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"status":"scraped","count":2,"jobs":[
                {"company":"Acme","title":"Engineer","url":"https://acme.example/job/1","location":"","scraped_at":"2024-01-01"},
                {"company":"Globex","title":"Analyst","url":"https://globex.example/job/9","location":"","scraped_at":"2024-01-02"}
            ]}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let jobs = backend_for(&server).fetch_latest().await.expect("fetch ok");

    assert_eq!(jobs.len(), 2);
    assert_eq!(jobs[0].company, "Acme");
    assert_eq!(jobs[0].title, "Engineer");
    assert_eq!(jobs[0].url, "https://acme.example/job/1");
    assert_eq!(jobs[0].scraped_at, "2024-01-01");
    assert_eq!(jobs[1].company, "Globex");
}

#[tokio::test]
async fn fetch_latest_tolerates_missing_jobs_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/fetch-latest"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("{}", "application/json"))
        .mount(&server)
        .await;

    let jobs = backend_for(&server).fetch_latest().await.expect("fetch ok");
    assert!(jobs.is_empty());
}

#[tokio::test]
async fn fetch_latest_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/fetch-latest"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = backend_for(&server).fetch_latest().await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(500));
}

#[tokio::test]
async fn fetch_latest_fails_on_non_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/fetch-latest"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let err = backend_for(&server).fetch_latest().await.unwrap_err();
    assert_eq!(err.kind, FailureKind::MalformedBody);
}

#[tokio::test]
async fn fetch_latest_times_out_on_slow_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/fetch-latest"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_raw("{}", "application/json"),
        )
        .mount(&server)
        .await;

    let mut config = BackendConfig::from_base_url(&server.uri()).expect("valid base url");
    config.request_timeout = Duration::from_millis(50);
    let backend = ReqwestBackend::new(config).expect("client builds");

    let err = backend.fetch_latest().await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn upload_csv_sends_multipart_file_and_returns_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/upload-csv"))
        .and(body_string_contains("name=\"file\""))
        .and(body_string_contains("Company Name,Career Page URL"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"status":"ok","message":"42 rows imported"}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("temp csv");
    writeln!(file, "Company Name,Career Page URL").expect("write csv");
    writeln!(file, "Acme,https://acme.example/careers").expect("write csv");

    let message = backend_for(&server)
        .upload_csv(file.path())
        .await
        .expect("upload ok");
    assert_eq!(message, "42 rows imported");
}

#[tokio::test]
async fn upload_csv_stringifies_body_without_message_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/upload-csv"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(r#"{"status":"ok"}"#, "application/json"),
        )
        .mount(&server)
        .await;

    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("temp csv");
    writeln!(file, "Company Name,Career Page URL").expect("write csv");

    let message = backend_for(&server)
        .upload_csv(file.path())
        .await
        .expect("upload ok");
    assert_eq!(message, r#"{"status":"ok"}"#);
}

#[tokio::test]
async fn upload_csv_fails_without_network_call_when_file_is_missing() {
    let server = MockServer::start().await;
    // No mock mounted: any request would 404 and surface as HttpStatus.
    let err = backend_for(&server)
        .upload_csv(std::path::Path::new("definitely-not-here.csv"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::FileRead);
    assert_eq!(server.received_requests().await.unwrap_or_default().len(), 0);
}

#[tokio::test]
async fn upload_csv_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/upload-csv"))
        .respond_with(ResponseTemplate::new(400).set_body_raw(
            r#"{"detail":"Only CSV allowed"}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let mut file = tempfile::Builder::new()
        .suffix(".txt")
        .tempfile()
        .expect("temp file");
    writeln!(file, "not a csv").expect("write file");

    let err = backend_for(&server).upload_csv(file.path()).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(400));
}

#[tokio::test]
async fn health_maps_status_to_result() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(r#"{"status":"ok"}"#, "application/json"),
        )
        .mount(&server)
        .await;

    backend_for(&server).health().await.expect("healthy");

    server.reset().await;
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = backend_for(&server).health().await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(503));
}
