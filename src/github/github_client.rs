use super::request::{SerializeRequest, UpsertFileRequest};
use crate::{
    error::Error,
    http::{Headers, HttpClient},
    upload::{encode_segment, StoragePath},
};
use base64::{prelude::BASE64_STANDARD, Engine};
use reqwest::header::HeaderValue;

/// Client for the repository contents API. Holds no per-request state, so a
/// single instance is shared by every upload.
#[derive(Clone, Debug)]
pub struct GithubClient {
    http: HttpClient,
    base_url: String,
}

/// What a write needs beyond the payload: the caller's token and the
/// User-Agent forwarded from the inbound request.
pub struct Credentials<'a> {
    pub token: &'a str,
    pub user_agent: HeaderValue,
}

impl GithubClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        GithubClient {
            http: HttpClient::new(),
            base_url: base_url.into().trim_end_matches('/').to_owned(),
        }
    }

    pub(super) fn contents_url(&self, owner: &str, repo: &str, path: &StoragePath) -> String {
        format!(
            "{}/repos/{}/{}/contents/{}",
            self.base_url,
            encode_segment(owner),
            encode_segment(repo),
            path.value()
        )
    }

    /// Writes `content` at `path`. The upstream response is handed back as-is,
    /// whatever its status.
    pub(super) async fn upsert_file(
        &self,
        owner: &str,
        repo: &str,
        path: &StoragePath,
        request: UpsertFileRequest,
        credentials: Credentials<'_>,
    ) -> Result<reqwest::Response, Error> {
        let uri = self.contents_url(owner, repo, path);
        log::debug!("PUT {}", uri);

        let body = request.into_request()?;

        let response = self
            .http
            .put(uri)
            .contents_headers(credentials.token, credentials.user_agent)
            .body(body)
            .send()
            .await?;

        Ok(response)
    }
}

pub fn encode_content(content: &str) -> String {
    BASE64_STANDARD.encode(content.as_bytes())
}
