use aws_sdk_s3::Client;
use serde::{de::DeserializeOwned, Serialize};

use crate::error::StorageError;
use crate::objects::{self, WriteCondition};

/// Load a JSON document from S3. Returns the value and its ETag, or `None`
/// if the key does not exist yet.
pub async fn load_json<T: DeserializeOwned>(
    client: &Client,
    bucket: &str,
    key: &str,
) -> Result<Option<(T, String)>, StorageError> {
    match objects::get_object(client, bucket, key).await {
        Ok(output) => {
            let value: T = serde_json::from_slice(&output.body)?;
            Ok(Some((value, output.etag.unwrap_or_default())))
        }
        Err(StorageError::NotFound { .. }) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Save a JSON document with ETag optimistic locking. With no `expected_etag`
/// the write only succeeds if the key is still absent.
pub async fn save_json<T: Serialize>(
    client: &Client,
    bucket: &str,
    key: &str,
    value: &T,
    expected_etag: Option<&str>,
) -> Result<String, StorageError> {
    let body = serde_json::to_vec(value)?;
    let condition = match expected_etag {
        Some(etag) => WriteCondition::IfMatch(etag),
        None => WriteCondition::IfAbsent,
    };
    objects::put_object(client, bucket, key, body, "application/json", condition).await
}
