use std::path::Path;
use crate::errors::{SheetvalError, SheetvalResult};

/// A selected file, held in memory until it is posted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub contents: Vec<u8>,
}

impl FileUpload {
    pub fn new(file_name: &str, content_type: Option<&str>, contents: Vec<u8>) -> Self {
        Self {
            file_name: file_name.to_string(),
            content_type: content_type.map(|s| s.to_string()),
            contents,
        }
    }

    pub async fn from_path(path: &Path) -> SheetvalResult<Self> {
        let contents = tokio::fs::read(path).await
            .map_err(|e| SheetvalError::file_error(&path.display().to_string(), "read", &e.to_string()))?;

        let file_name = path.file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        let content_type = content_type_for(&file_name).map(|s| s.to_string());

        Ok(Self {
            file_name,
            content_type,
            contents,
        })
    }

    pub fn extension(&self) -> Option<String> {
        Path::new(&self.file_name)
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
    }

    pub fn size_kb(&self) -> f64 {
        self.contents.len() as f64 / 1024.0
    }

    pub fn has_allowed_extension(&self, allowed: &[String]) -> bool {
        match self.extension() {
            Some(ext) => allowed.iter().any(|a| a.trim_start_matches('.').eq_ignore_ascii_case(&ext)),
            None => false,
        }
    }
}

fn content_type_for(file_name: &str) -> Option<&'static str> {
    let lower = file_name.to_lowercase();
    if lower.ends_with(".xlsx") {
        Some("application/vnd.openxmlformats-officedocument.spreadsheetml.sheet")
    } else if lower.ends_with(".xls") {
        Some("application/vnd.ms-excel")
    } else {
        None
    }
}
