use crate::blob_id::BlobId;
use itertools::Itertools;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::fmt::{self, Display};

/// Characters left as-is inside a single path component. Everything else,
/// `/` included, is escaped.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, COMPONENT).to_string()
}

/// Splits a `/` separated path, dropping empty segments so leading, trailing
/// and repeated slashes collapse.
pub fn split_path(path: &str) -> Vec<String> {
    path.split('/')
        .filter(|segment| !segment.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Location of the blob file inside the repository, already percent-encoded
/// and ready to be appended to the contents endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePath {
    value: String,
}

impl StoragePath {
    pub fn new(segments: &[String], blob_id: &BlobId) -> Self {
        let file_name = blob_id.file_name();

        let value = segments
            .iter()
            .map(|segment| encode_segment(segment))
            .chain(std::iter::once(file_name))
            .join("/");

        StoragePath { value }
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl Display for StoragePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_blob() -> BlobId {
        BlobId::create(b"")
    }

    #[test]
    fn should_use_file_name_for_empty_path() {
        let path = StoragePath::new(&split_path(""), &empty_blob());

        assert_eq!(path.value(), "e69de29bb2d1d6434b8b29ae775ad8c2e48c5391.json");
    }

    #[test]
    fn should_collapse_slashes() {
        let blob_id = empty_blob();
        let expected = format!("a/b/{}", blob_id.file_name());

        for input in ["a/b", "/a/b/", "a//b", "//a///b//"] {
            let path = StoragePath::new(&split_path(input), &blob_id);
            assert_eq!(path.value(), expected, "input: {input}");
        }
    }

    #[test]
    fn should_encode_each_segment_on_its_own() {
        let blob_id = empty_blob();

        let path = StoragePath::new(&split_path("my dir/x?y#z"), &blob_id);

        assert_eq!(
            path.value(),
            format!("my%20dir/x%3Fy%23z/{}", blob_id.file_name())
        );
    }

    #[test]
    fn should_encode_like_uri_component() {
        assert_eq!(encode_segment("a-b_c.d!e~f*g'h(i)j"), "a-b_c.d!e~f*g'h(i)j");
        assert_eq!(encode_segment("a/b"), "a%2Fb");
        assert_eq!(encode_segment("ünï"), "%C3%BCn%C3%AF");
        assert_eq!(encode_segment("a+b&c=d"), "a%2Bb%26c%3Dd");
    }

    #[test]
    fn should_keep_blob_id_across_paths() {
        let blob_id = BlobId::create(b"same content");

        let first = StoragePath::new(&split_path("one"), &blob_id);
        let second = StoragePath::new(&split_path("two"), &blob_id);

        assert_ne!(first, second);
        assert!(first.value().ends_with(&blob_id.file_name()));
        assert!(second.value().ends_with(&blob_id.file_name()));
    }
}
