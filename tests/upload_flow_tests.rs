use std::sync::Arc;
use warp::http::StatusCode;
use sheetval::adapters::validation_api_adapter::ValidationApiAdapter;
use sheetval::config::constants::GENERIC_UPLOAD_FAILURE_MESSAGE;
use sheetval::enums::severity_filter::SeverityFilter;
use sheetval::enums::sort_key::SortKey;
use sheetval::enums::upload_phase::UploadPhase;
use sheetval::services::csv_exporter::CsvExporter;
use sheetval::services::results_aggregator::ResultsAggregator;
use sheetval::services::results_query::ResultsQuery;
use sheetval::services::upload_workflow::UploadWorkflow;
use sheetval::structs::config::upload_config::UploadConfig;
use sheetval::structs::file_upload::FileUpload;
use sheetval::structs::query_criteria::QueryCriteria;
use crate::common::{spawn_service, Canned};

fn workflow_for(canned: Canned) -> UploadWorkflow {
    let adapter = ValidationApiAdapter::new(&spawn_service(canned)).unwrap();
    UploadWorkflow::new(Arc::new(adapter), UploadConfig::default())
}

#[tokio::test]
async fn successful_upload_summarizes_and_exports() {
    let workflow = workflow_for(Canned::Echo);

    workflow.start(FileUpload::new("projects.xlsx", None, b"workbook".to_vec()))
        .wait()
        .await
        .unwrap();

    let snapshot = workflow.snapshot();
    assert_eq!(snapshot.phase, UploadPhase::Succeeded);
    assert_eq!(snapshot.progress, 100);
    assert!(snapshot.error.is_none());
    assert!(!snapshot.in_flight);

    let result = workflow.current_result().unwrap();
    let summary = ResultsAggregator::summarize(&result);
    assert_eq!(summary.file_name, "projects.xlsx");
    assert_eq!(summary.processed_at, "2024-03-09 10:15:00");
    assert_eq!(summary.metrics.error_rate.to_string(), "20.0");
    assert_eq!(summary.metrics.success_rate.to_string(), "80.0");
    assert_eq!(summary.metrics.affected_rows, 2);

    let criteria = QueryCriteria::new(SeverityFilter::High, "", SortKey::Row);
    let visible = ResultsQuery::visible(&result.issues, &criteria);
    let dir = tempfile::tempdir().unwrap();
    let path = CsvExporter::save_as(dir.path(), "out.csv", &visible).unwrap();

    let written = std::fs::read_to_string(path).unwrap();
    assert_eq!(
        written,
        "Row,Project Name,Issue Type,Description,Severity,Start Date,End Date\n\
         3,\"Apollo, Phase 2\",\"Missing Date\",\"End date is missing\",high,2024-01-15,"
    );
}

#[tokio::test]
async fn rejected_upload_ends_failed_with_service_detail() {
    let workflow = workflow_for(Canned::Raw(
        StatusCode::BAD_REQUEST,
        r#"{"detail":"Missing required columns: Start Date"}"#,
    ));

    workflow.start(FileUpload::new("projects.xlsx", None, Vec::new())).wait().await.unwrap();

    let snapshot = workflow.snapshot();
    assert_eq!(snapshot.phase, UploadPhase::Failed);
    assert_eq!(snapshot.progress, 0);
    assert_eq!(snapshot.error.as_deref(), Some("Missing required columns: Start Date"));
    assert!(workflow.current_result().is_none());
}

#[tokio::test]
async fn server_error_without_detail_uses_generic_guidance() {
    let workflow = workflow_for(Canned::Raw(StatusCode::BAD_GATEWAY, ""));

    workflow.start(FileUpload::new("projects.xlsx", None, Vec::new())).wait().await.unwrap();

    assert_eq!(workflow.snapshot().error.as_deref(), Some(GENERIC_UPLOAD_FAILURE_MESSAGE));
}
