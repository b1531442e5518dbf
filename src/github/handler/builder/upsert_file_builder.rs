use super::BuilderExecutor;
use crate::{
    error::Error,
    github::{
        github_client::{encode_content, Credentials, GithubClient},
        request::UpsertFileRequest,
    },
    http::DEFAULT_USER_AGENT,
    upload::StoragePath,
};
use reqwest::header::HeaderValue;

const MAIN_BRANCH_NAME: &str = "main";

pub struct UpsertFileBuilder<'a> {
    client: &'a GithubClient,
    owner: String,
    repo: String,
    path: StoragePath,
    commit_message: String,
    content: String,
    sha: String,
    branch: String,
    token: String,
    user_agent: Option<HeaderValue>,
}

impl<'a> UpsertFileBuilder<'a> {
    pub fn new(
        client: &'a GithubClient,
        owner: impl Into<String>,
        repo: impl Into<String>,
        path: StoragePath,
    ) -> Self {
        UpsertFileBuilder {
            client,
            owner: owner.into(),
            repo: repo.into(),
            path,
            commit_message: String::new(),
            content: String::new(),
            sha: String::new(),
            branch: MAIN_BRANCH_NAME.to_owned(),
            token: String::new(),
            user_agent: None,
        }
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.commit_message = message.into();
        self
    }

    /// Plain text content; base64 encoding happens on execute.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn sha(mut self, sha: impl Into<String>) -> Self {
        self.sha = sha.into();
        self
    }

    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = token.into();
        self
    }

    pub fn user_agent(mut self, user_agent: Option<HeaderValue>) -> Self {
        self.user_agent = user_agent;
        self
    }
}

impl BuilderExecutor for UpsertFileBuilder<'_> {
    type Output = reqwest::Response;

    async fn execute(self) -> Result<Self::Output, Error> {
        let request = UpsertFileRequest::new(
            self.commit_message,
            encode_content(&self.content),
            self.sha,
            self.branch,
        );

        let credentials = Credentials {
            token: &self.token,
            user_agent: self
                .user_agent
                .unwrap_or_else(|| HeaderValue::from_static(DEFAULT_USER_AGENT)),
        };

        self.client
            .upsert_file(&self.owner, &self.repo, &self.path, request, credentials)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{blob_id::BlobId, upload::split_path};
    use mockito::{Matcher, Server};
    use serde_json::json;

    #[tokio::test]
    async fn should_default_branch_and_user_agent() -> Result<(), Box<dyn std::error::Error>> {
        let mut server = Server::new_async().await;
        let blob_id = BlobId::create("héé".as_bytes());
        let path = StoragePath::new(&split_path("x"), &blob_id);

        let mock = server
            .mock(
                "PUT",
                format!("/repos/octo/store/contents/x/{}", blob_id.file_name()).as_str(),
            )
            .match_header("authorization", "token secret")
            .match_header("user-agent", DEFAULT_USER_AGENT)
            .match_body(Matcher::Json(json!({
                "message": "Upload",
                "content": "aMOpw6k=",
                "sha": "d3b862dc7f66695260f599e90df953216040f81f",
                "branch": "main",
            })))
            .with_status(201)
            .create_async()
            .await;

        let client = GithubClient::new(server.url());

        let response = client
            .repo("octo", "store")
            .upsert_file(&path)
            .message("Upload")
            .content("héé")
            .sha(blob_id.value())
            .token("secret")
            .execute()
            .await?;

        mock.assert_async().await;
        assert_eq!(response.status().as_u16(), 201);

        Ok(())
    }
}
