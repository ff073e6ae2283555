use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry of the repository commit listing. Only the fields the commit
/// counter touches are deserialized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitSummary {
    pub sha: String,
    pub commit: CommitDetails,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitDetails {
    pub message: String,
    pub author: Option<CommitAuthor>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitAuthor {
    pub name: String,
    pub date: DateTime<Utc>,
}
