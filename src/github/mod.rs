pub mod github_client;
mod handler;
mod request;

pub use github_client::GithubClient;
pub use handler::BuilderExecutor;
