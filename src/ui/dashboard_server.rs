use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use bytes::Buf;
use futures::TryStreamExt;
use serde_json::json;
use tokio::sync::oneshot;
use warp::http::{header, StatusCode};
use warp::multipart::FormData;
use warp::reply::Response;
use warp::{Filter, Reply};
use crate::config::constants::{
    DEFAULT_SERVER_PORT_RANGE_END, DEFAULT_SERVER_PORT_RANGE_START, MAX_UPLOAD_BYTES,
    SERVER_SHUTDOWN_GRACE_PERIOD_MS, UPLOAD_FIELD_NAME, sleep_duration_millis,
};
use crate::errors::{SheetvalError, SheetvalResult};
use crate::services::csv_exporter::CsvExporter;
use crate::services::results_aggregator::ResultsAggregator;
use crate::services::results_query::ResultsQuery;
use crate::services::upload_workflow::UploadWorkflow;
use crate::structs::config::dashboard_config::DashboardConfig;
use crate::structs::file_upload::FileUpload;
use crate::structs::query_criteria::QueryCriteria;

const NO_RESULT_MESSAGE: &str = "No validation result yet. Upload a file first.";

/// Local web front end over one shared [`UploadWorkflow`].
pub struct DashboardServer {
    workflow: Arc<UploadWorkflow>,
    settings: DashboardConfig,
    port: Option<u16>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl DashboardServer {
    pub fn new(workflow: Arc<UploadWorkflow>, settings: DashboardConfig) -> Self {
        Self {
            workflow,
            settings,
            port: None,
            shutdown_tx: None,
        }
    }

    pub async fn start(&mut self) -> SheetvalResult<u16> {
        let port = self.find_available_port().await?;
        self.port = Some(port);

        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        self.shutdown_tx = Some(shutdown_tx);

        let routes = Self::routes(Arc::clone(&self.workflow))
            .with(warp::cors()
                .allow_origin(format!("http://127.0.0.1:{}", port).as_str())
                .allow_origin(format!("http://localhost:{}", port).as_str())
                .allow_headers(vec!["content-type"])
                .allow_methods(vec!["GET", "POST"]));

        let addr: SocketAddr = ([127, 0, 0, 1], port).into();
        let (_, server) = warp::serve(routes)
            .try_bind_with_graceful_shutdown(addr, async {
                shutdown_rx.await.ok();
            })?;

        tokio::spawn(server);

        log::info!("🌐 Dashboard server started on port {}", port);
        Ok(port)
    }

    pub fn url(&self) -> Option<String> {
        self.port.map(|port| format!("http://127.0.0.1:{}/", port))
    }

    pub fn open_browser(&self) {
        if !self.settings.open_browser {
            return;
        }
        if let Some(url) = self.url() {
            if let Err(e) = webbrowser::open(&url) {
                log::warn!("⚠️  Could not open a browser ({}). Visit {} manually.", e, url);
            }
        }
    }

    pub async fn shutdown(&mut self) -> SheetvalResult<()> {
        log::info!("🛑 Shutting down dashboard server...");

        if let Some(shutdown_tx) = self.shutdown_tx.take() {
            shutdown_tx.send(()).map_err(|_|
                SheetvalError::system_error("shutdown", "Failed to send shutdown signal")
            )?;
        }

        tokio::time::sleep(sleep_duration_millis(SERVER_SHUTDOWN_GRACE_PERIOD_MS)).await;
        log::info!("✅ Dashboard server shutdown complete");

        Ok(())
    }

    /// Every route the dashboard serves, without CORS or binding.
    pub fn routes(
        workflow: Arc<UploadWorkflow>,
    ) -> impl Filter<Extract = (impl Reply,), Error = warp::Rejection> + Clone {
        let workflow_filter = warp::any().map(move || Arc::clone(&workflow));

        let page = warp::path::end()
            .and(warp::get())
            .map(|| warp::reply::html(include_str!("static/dashboard.html")));

        let upload = warp::path!("api" / "upload")
            .and(warp::post())
            .and(warp::multipart::form().max_length(MAX_UPLOAD_BYTES))
            .and(workflow_filter.clone())
            .and_then(upload_handler);

        let status = warp::path!("api" / "status")
            .and(warp::get())
            .and(workflow_filter.clone())
            .and_then(status_handler);

        let dismiss = warp::path!("api" / "error" / "dismiss")
            .and(warp::post())
            .and(workflow_filter.clone())
            .and_then(dismiss_handler);

        let issues = warp::path!("api" / "issues")
            .and(warp::get())
            .and(warp::query::<QueryCriteria>())
            .and(workflow_filter.clone())
            .and_then(issues_handler);

        let summary = warp::path!("api" / "summary")
            .and(warp::get())
            .and(workflow_filter.clone())
            .and_then(summary_handler);

        let export = warp::path!("api" / "export")
            .and(warp::get())
            .and(warp::query::<QueryCriteria>())
            .and(workflow_filter)
            .and_then(export_handler);

        page
            .or(upload)
            .or(status)
            .or(dismiss)
            .or(issues)
            .or(summary)
            .or(export)
    }

    async fn find_available_port(&self) -> SheetvalResult<u16> {
        let preferred = std::iter::once(self.settings.port);
        let fallback = DEFAULT_SERVER_PORT_RANGE_START..DEFAULT_SERVER_PORT_RANGE_END;

        for port in preferred.chain(fallback) {
            if let Ok(listener) = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await {
                drop(listener);
                if port != self.settings.port {
                    log::warn!("⚠️  Port {} is taken, using {}", self.settings.port, port);
                }
                return Ok(port);
            }
        }

        Err(SheetvalError::system_error(
            "find port",
            &format!("No available ports in {}..{}", DEFAULT_SERVER_PORT_RANGE_START, DEFAULT_SERVER_PORT_RANGE_END),
        ))
    }
}

async fn upload_handler(form: FormData, workflow: Arc<UploadWorkflow>) -> Result<Response, Infallible> {
    match read_upload(form).await {
        Ok(Some(upload)) => {
            let attempt = workflow.start(upload);
            Ok(warp::reply::with_status(
                warp::reply::json(&json!({ "attempt": attempt.id() })),
                StatusCode::ACCEPTED,
            ).into_response())
        }
        Ok(None) => Ok(error_reply(
            StatusCode::BAD_REQUEST,
            &format!("Multipart field '{}' is missing", UPLOAD_FIELD_NAME),
        )),
        Err(e) => {
            log::warn!("Rejected dashboard upload: {}", e.technical_details());
            Ok(error_reply(StatusCode::BAD_REQUEST, &e.user_message()))
        }
    }
}

async fn read_upload(form: FormData) -> SheetvalResult<Option<FileUpload>> {
    let mut form = Box::pin(form);

    while let Some(part) = form.try_next().await? {
        if part.name() != UPLOAD_FIELD_NAME {
            continue;
        }

        let file_name = part.filename().unwrap_or("upload.xlsx").to_string();
        let content_type = part.content_type().map(|s| s.to_string());

        let contents = part.stream()
            .try_fold(Vec::new(), |mut acc, mut buf| async move {
                while buf.has_remaining() {
                    let chunk = buf.chunk();
                    let len = chunk.len();
                    acc.extend_from_slice(chunk);
                    buf.advance(len);
                }
                Ok(acc)
            })
            .await?;

        return Ok(Some(FileUpload::new(&file_name, content_type.as_deref(), contents)));
    }

    Ok(None)
}

async fn status_handler(workflow: Arc<UploadWorkflow>) -> Result<Response, Infallible> {
    let snapshot = workflow.snapshot();
    Ok(warp::reply::json(&json!({
        "phase": snapshot.phase,
        "progress": snapshot.progress,
        "error": snapshot.error,
        "inFlight": snapshot.in_flight,
        "attempt": snapshot.attempt,
        "fileName": snapshot.file_name,
        "hasResult": snapshot.has_result(),
    })).into_response())
}

async fn dismiss_handler(workflow: Arc<UploadWorkflow>) -> Result<Response, Infallible> {
    workflow.dismiss_error();
    Ok(warp::reply::json(&json!({ "success": true })).into_response())
}

async fn issues_handler(criteria: QueryCriteria, workflow: Arc<UploadWorkflow>) -> Result<Response, Infallible> {
    let Some(result) = workflow.current_result() else {
        return Ok(error_reply(StatusCode::NOT_FOUND, NO_RESULT_MESSAGE));
    };

    let visible = ResultsQuery::visible(&result.issues, &criteria);
    Ok(warp::reply::json(&json!({
        "total": result.issues.len(),
        "shown": visible.len(),
        "issues": visible,
    })).into_response())
}

async fn summary_handler(workflow: Arc<UploadWorkflow>) -> Result<Response, Infallible> {
    match workflow.current_result() {
        Some(result) => Ok(warp::reply::json(&ResultsAggregator::summarize(&result)).into_response()),
        None => Ok(error_reply(StatusCode::NOT_FOUND, NO_RESULT_MESSAGE)),
    }
}

async fn export_handler(criteria: QueryCriteria, workflow: Arc<UploadWorkflow>) -> Result<Response, Infallible> {
    let Some(result) = workflow.current_result() else {
        return Ok(error_reply(StatusCode::NOT_FOUND, NO_RESULT_MESSAGE));
    };

    let visible = ResultsQuery::visible(&result.issues, &criteria);
    let body = CsvExporter::render(&visible);
    let disposition = format!("attachment; filename=\"{}\"", CsvExporter::file_name_today());

    log::info!("💾 Serving export of {} issues", visible.len());

    let reply = warp::reply::with_header(body, header::CONTENT_TYPE, "text/csv; charset=utf-8");
    Ok(warp::reply::with_header(reply, header::CONTENT_DISPOSITION, disposition).into_response())
}

fn error_reply(status: StatusCode, message: &str) -> Response {
    warp::reply::with_status(warp::reply::json(&json!({ "error": message })), status).into_response()
}
