mod storage_path;

pub use storage_path::{encode_segment, split_path, StoragePath};

use crate::{blob_id::BlobId, error::Error};
use poem::web::Multipart;
use std::fmt;

const FILE_FIELD_NAME: &str = "file";

/// Raw query string of an upload call. Empty values count as absent and the
/// first occurrence of a repeated key wins.
#[derive(Default)]
pub struct UploadParams {
    pub repo_owner: Option<String>,
    pub repo_name: Option<String>,
    pub path: Option<String>,
    pub token: Option<String>,
}

impl UploadParams {
    pub fn validate(self) -> Result<Destination, Error> {
        let (owner, repo, token) = match (
            non_empty(self.repo_owner),
            non_empty(self.repo_name),
            non_empty(self.token),
        ) {
            (Some(owner), Some(repo), Some(token)) => (owner, repo, token),
            _ => return Err(Error::MissingParameter),
        };

        Ok(Destination {
            owner,
            repo,
            path: split_path(self.path.as_deref().unwrap_or_default()),
            token,
        })
    }
}

impl FromIterator<(String, String)> for UploadParams {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut params = UploadParams::default();

        for (key, value) in pairs {
            let slot = match key.as_str() {
                "repoOwner" => &mut params.repo_owner,
                "repoName" => &mut params.repo_name,
                "path" => &mut params.path,
                "token" => &mut params.token,
                _ => continue,
            };

            if slot.is_none() {
                *slot = Some(value);
            }
        }

        params
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

/// Where an upload goes and the credential to write it with.
#[derive(Clone)]
pub struct Destination {
    pub owner: String,
    pub repo: String,
    pub path: Vec<String>,
    pub token: String,
}

impl fmt::Debug for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Destination")
            .field("owner", &self.owner)
            .field("repo", &self.repo)
            .field("path", &self.path)
            .field("token", &"***")
            .finish()
    }
}

#[derive(Debug)]
pub struct UploadRequest {
    pub destination: Destination,
    pub content: String,
}

impl UploadRequest {
    pub fn new(destination: Destination, content: impl Into<String>) -> Self {
        UploadRequest {
            destination,
            content: content.into(),
        }
    }

    pub fn blob_id(&self) -> BlobId {
        BlobId::create(self.content.as_bytes())
    }

    pub fn storage_path(&self, blob_id: &BlobId) -> StoragePath {
        StoragePath::new(&self.destination.path, blob_id)
    }
}

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Reads the first `file` field of the form as UTF-8 text.
pub async fn read_file(mut multipart: Multipart) -> Result<String, Error> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| Error::Multipart(err.to_string()))?
    {
        if field.name() != Some(FILE_FIELD_NAME) {
            continue;
        }

        let bytes = field
            .bytes()
            .await
            .map_err(|cause| Error::ReadFile { cause })?;

        return Ok(decode_text(&bytes));
    }

    Err(Error::MissingFile)
}

/// UTF-8 decode: a leading byte order mark is dropped and invalid sequences
/// become U+FFFD rather than failing the upload.
pub fn decode_text(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);

    match text.strip_prefix(BYTE_ORDER_MARK) {
        Some(stripped) => stripped.to_owned(),
        None => text.into_owned(),
    }
}
