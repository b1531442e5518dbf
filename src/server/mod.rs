mod relay;

use crate::{
    config::Config,
    error::Error,
    github::{BuilderExecutor, GithubClient},
    upload::{read_file, UploadParams, UploadRequest},
};
use anyhow::Result;
use poem::{
    handler,
    http::{header::USER_AGENT, Method},
    listener::TcpListener,
    web::{Data, Multipart},
    Body, Endpoint, EndpointExt, FromRequest, IntoResponse, Request, RequestBody, Response,
    Server,
};
use relay::relay;

pub async fn run(config: &Config) -> Result<()> {
    let address = config.server.address();
    let client = GithubClient::new(&config.upstream.base_url);

    log::info!("Listening on {}", address);
    log::info!("Relaying uploads to {}", config.upstream.base_url);

    Server::new(TcpListener::bind(address)).run(app(client)).await?;

    Ok(())
}

/// The upload endpoint answers on every path.
pub fn app(client: GithubClient) -> impl Endpoint {
    handle_upload.data(client)
}

#[handler]
async fn handle_upload(req: &Request, body: Body, client: Data<&GithubClient>) -> Response {
    match relay_upload(req, body, &client).await {
        Ok(response) => response,
        Err(err) => {
            match &err {
                Error::MissingParameter | Error::MethodNotAllowed => {
                    log::warn!("Rejected {} request: {}", req.method(), err)
                }
                _ => log::error!("Upload failed: {}", err),
            }
            err.into_response()
        }
    }
}

async fn relay_upload(
    req: &Request,
    body: Body,
    client: &GithubClient,
) -> Result<Response, Error> {
    let params: UploadParams = req
        .params::<Vec<(String, String)>>()
        .unwrap_or_default()
        .into_iter()
        .collect();
    let destination = params.validate()?;

    if req.method() != Method::POST {
        return Err(Error::MethodNotAllowed);
    }

    let multipart = Multipart::from_request(req, &mut RequestBody::new(body))
        .await
        .map_err(|err| Error::Multipart(err.to_string()))?;
    let content = read_file(multipart).await?;

    let upload = UploadRequest::new(destination, content);
    let blob_id = upload.blob_id();
    let path = upload.storage_path(&blob_id);
    let destination = &upload.destination;

    log::info!(
        "Uploading {} to {}/{} as {}",
        blob_id,
        destination.owner,
        destination.repo,
        path
    );

    let upstream = client
        .repo(&destination.owner, &destination.repo)
        .upsert_file(&path)
        .message(format!("Upload {}", blob_id.file_name()))
        .content(&upload.content)
        .sha(blob_id.value())
        .token(&destination.token)
        .user_agent(req.headers().get(USER_AGENT).cloned())
        .execute()
        .await?;

    log::info!("Upstream answered {} for {}", upstream.status(), blob_id);

    Ok(relay(upstream))
}
