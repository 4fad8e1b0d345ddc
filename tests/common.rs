use std::net::SocketAddr;
use futures::TryStreamExt;
use serde_json::json;
use warp::http::StatusCode;
use warp::multipart::FormData;
use warp::Filter;
use sheetval::structs::config::service_config::ServiceConfig;

/// Canned reply of the fake validation service.
#[derive(Clone)]
pub enum Canned {
    /// 200 with a result naming the uploaded file, 10 rows, 8 valid, 2 issues.
    Echo,
    Raw(StatusCode, &'static str),
}

pub fn sample_body(file_name: &str) -> serde_json::Value {
    json!({
        "totalRows": 10,
        "validRows": 8,
        "issues": [
            {
                "row": 3,
                "projectName": "Apollo, Phase 2",
                "issueType": "Missing Date",
                "description": "End date is missing",
                "severity": "high",
                "startDate": "2024-01-15",
                "endDate": null
            },
            {
                "row": 7,
                "projectName": "Gemini",
                "issueType": "Future Start Date",
                "description": "Start date is in the future",
                "severity": "medium",
                "startDate": "2031-06-01",
                "endDate": "2031-12-01"
            }
        ],
        "processedAt": "2024-03-09T10:15:00.123456",
        "fileName": file_name
    })
}

async fn uploaded_file_name(form: FormData) -> Option<String> {
    let mut form = Box::pin(form);
    while let Ok(Some(part)) = form.try_next().await {
        if part.name() == "file" {
            return part.filename().map(|s| s.to_string());
        }
    }
    None
}

/// Starts a fake validation service on an ephemeral port and returns a
/// service config pointing at it.
pub fn spawn_service(canned: Canned) -> ServiceConfig {
    let validate = warp::path!("api" / "validate")
        .and(warp::post())
        .and(warp::multipart::form())
        .and_then(move |form: FormData| {
            let canned = canned.clone();
            async move {
                let reply = match canned {
                    Canned::Echo => match uploaded_file_name(form).await {
                        Some(name) => warp::reply::with_status(sample_body(&name).to_string(), StatusCode::OK),
                        None => warp::reply::with_status(json!({ "detail": "No file part" }).to_string(), StatusCode::BAD_REQUEST),
                    },
                    Canned::Raw(status, body) => warp::reply::with_status(body.to_string(), status),
                };
                Ok::<_, std::convert::Infallible>(reply)
            }
        });

    let health = warp::path!("api" / "health")
        .and(warp::get())
        .map(|| warp::reply::json(&json!({ "status": "healthy", "timestamp": "2024-03-09T10:15:00" })));

    let (addr, server): (SocketAddr, _) = warp::serve(validate.or(health)).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);

    ServiceConfig {
        base_url: format!("http://{}", addr),
        ..ServiceConfig::default()
    }
}
