use sha1::{Digest, Sha1};
use std::fmt::{self, Display};

/// Git object id of a blob: the SHA-1 of `blob <len>\0` followed by the
/// content, rendered as 40 lowercase hex characters. Matches what
/// `git hash-object` prints for the same bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BlobId {
    value: String,
}

impl BlobId {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn create(content: &[u8]) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(header(content.len()));
        hasher.update(content);
        let hash = hasher.finalize();

        let encoded = hex::encode(hash);

        BlobId { value: encoded }
    }

    /// Name of the file the blob is stored under upstream.
    pub fn file_name(&self) -> String {
        format!("{}.json", self.value)
    }
}

impl Display for BlobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

// length is the byte count, not the char count
fn header(len: usize) -> Vec<u8> {
    format!("blob {}\0", len).into_bytes()
}
