use serde::Serialize;

/// Body of `PUT /repos/{owner}/{repo}/contents/{path}`.
#[derive(Debug, Serialize)]
pub struct UpsertFileRequest {
    pub message: String,
    pub content: String,
    pub sha: String,
    pub branch: String,
}

impl UpsertFileRequest {
    pub fn new(
        message: impl Into<String>,
        content: impl Into<String>,
        sha: impl Into<String>,
        branch: impl Into<String>,
    ) -> Self {
        Self {
            message: message.into(),
            content: content.into(),
            sha: sha.into(),
            branch: branch.into(),
        }
    }
}
