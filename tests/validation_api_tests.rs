use warp::http::StatusCode;
use sheetval::adapters::validation_api_adapter::ValidationApiAdapter;
use sheetval::config::constants::GENERIC_UPLOAD_FAILURE_MESSAGE;
use sheetval::enums::severity::Severity;
use sheetval::enums::upload_failure::UploadFailure;
use sheetval::structs::config::service_config::ServiceConfig;
use sheetval::structs::file_upload::FileUpload;
use sheetval::traits::validation_service::ValidationService;
use crate::common::{spawn_service, Canned};

fn upload() -> FileUpload {
    FileUpload::new(
        "projects.xlsx",
        Some("application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"),
        b"PK\x03\x04 fake workbook".to_vec(),
    )
}

#[tokio::test]
async fn posts_file_field_and_parses_result() {
    let adapter = ValidationApiAdapter::new(&spawn_service(Canned::Echo)).unwrap();

    let result = adapter.validate(upload()).await.unwrap();

    assert_eq!(result.file_name, "projects.xlsx");
    assert_eq!(result.total_rows, 10);
    assert_eq!(result.valid_rows, 8);
    assert_eq!(result.issues.len(), 2);
    assert_eq!(result.issues[0].severity, Severity::High);
    assert_eq!(result.issues[0].end_date, None);
    assert_eq!(result.issues[1].start_date.as_deref(), Some("2031-06-01"));
}

#[tokio::test]
async fn string_detail_is_surfaced_verbatim() {
    let service = spawn_service(Canned::Raw(
        StatusCode::BAD_REQUEST,
        r#"{"detail":"Missing required columns: End Date"}"#,
    ));
    let adapter = ValidationApiAdapter::new(&service).unwrap();

    let failure = adapter.validate(upload()).await.unwrap_err();

    assert_eq!(failure, UploadFailure::Service {
        status: 400,
        detail: "Missing required columns: End Date".to_string(),
    });
    assert_eq!(failure.user_message(), "Missing required columns: End Date");
}

#[tokio::test]
async fn list_detail_falls_back_to_generic_guidance() {
    let service = spawn_service(Canned::Raw(
        StatusCode::UNPROCESSABLE_ENTITY,
        r#"{"detail":[{"loc":["body","file"],"msg":"field required"}]}"#,
    ));
    let adapter = ValidationApiAdapter::new(&service).unwrap();

    let failure = adapter.validate(upload()).await.unwrap_err();

    assert_eq!(failure, UploadFailure::UnstructuredService { status: 422 });
    assert_eq!(failure.user_message(), GENERIC_UPLOAD_FAILURE_MESSAGE);
}

#[tokio::test]
async fn non_json_error_body_falls_back_to_generic_guidance() {
    let service = spawn_service(Canned::Raw(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"));
    let adapter = ValidationApiAdapter::new(&service).unwrap();

    let failure = adapter.validate(upload()).await.unwrap_err();

    assert_eq!(failure.status(), Some(500));
    assert_eq!(failure.user_message(), GENERIC_UPLOAD_FAILURE_MESSAGE);
}

#[tokio::test]
async fn malformed_success_body_is_reported() {
    let service = spawn_service(Canned::Raw(StatusCode::OK, "<html>not json</html>"));
    let adapter = ValidationApiAdapter::new(&service).unwrap();

    let failure = adapter.validate(upload()).await.unwrap_err();

    assert!(matches!(failure, UploadFailure::MalformedResponse(_)));
    assert_eq!(failure.user_message(), GENERIC_UPLOAD_FAILURE_MESSAGE);
}

#[tokio::test]
async fn unreachable_service_is_a_transport_failure() {
    let service = ServiceConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        ..ServiceConfig::default()
    };
    let adapter = ValidationApiAdapter::new(&service).unwrap();

    let failure = adapter.validate(upload()).await.unwrap_err();

    assert!(matches!(failure, UploadFailure::Transport(_)));
}

#[tokio::test]
async fn health_reports_status() {
    let adapter = ValidationApiAdapter::new(&spawn_service(Canned::Echo)).unwrap();

    let health = adapter.health().await.unwrap();

    assert!(health.is_healthy());
    assert_eq!(health.timestamp.as_deref(), Some("2024-03-09T10:15:00"));
}
