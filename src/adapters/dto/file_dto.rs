use std::collections::BTreeMap;

use serde::Serialize;

use crate::{
    application::services::user_files::UserFilesReport,
    domain::models::{download::DownloadLink, stats::FileStats},
};

#[derive(Debug, Serialize)]
pub struct UserFilesResponse {
    pub stats: StatsResponse,
    pub files: Vec<DownloadLinkResponse>,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    #[serde(rename = "totalCount")]
    pub total_count: usize,
    #[serde(rename = "totalSizeMB")]
    pub total_size_mb: f64,
    /// ISO-8601 timestamp of the most recent file, or null when the user
    /// has no files.
    #[serde(rename = "lastModified")]
    pub last_modified: Option<String>,
    #[serde(rename = "fileTypes")]
    pub file_types: BTreeMap<String, u64>,
}

#[derive(Debug, Serialize)]
pub struct DownloadLinkResponse {
    #[serde(rename = "fileName")]
    pub file_name: String,
    pub url: String,
}

impl From<FileStats> for StatsResponse {
    fn from(stats: FileStats) -> Self {
        Self {
            total_count: stats.total_count,
            total_size_mb: stats.total_size_mb,
            last_modified: stats.last_modified.map(|ts| ts.to_rfc3339()),
            file_types: stats.file_types,
        }
    }
}

impl From<DownloadLink> for DownloadLinkResponse {
    fn from(link: DownloadLink) -> Self {
        Self {
            file_name: link.file_name,
            url: link.url,
        }
    }
}

impl From<UserFilesReport> for UserFilesResponse {
    fn from(report: UserFilesReport) -> Self {
        Self {
            stats: report.stats.into(),
            files: report.files.into_iter().map(Into::into).collect(),
        }
    }
}
