mod builder;
pub mod repository_handler;

use super::github_client::GithubClient;
pub use builder::BuilderExecutor;
use repository_handler::RepositoryHandler;

/// Github repo handler access implementation
impl GithubClient {
    pub fn repo(&self, owner: impl Into<String>, name: impl Into<String>) -> RepositoryHandler {
        RepositoryHandler::new(self, owner, name)
    }
}
