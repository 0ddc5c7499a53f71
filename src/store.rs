//! Building and signing object storage requests.

use http::HeaderValue;
use http::Method;
use http::Uri;
use log::debug;
use percent_encoding::utf8_percent_encode;

use crate::config::Config;
use crate::constants::{ACL_PUBLIC_READ, AWS_URI_ENCODE_SET, X_AMZ_ACL};
use crate::credential::Credential;
use crate::sign::{Payload, SignatureResult, Signer};
use crate::Error;

/// Canned ACL applied to an upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectAcl {
    /// `x-amz-acl: public-read`, for objects served directly to end users.
    PublicRead,
}

/// ObjectStore builds and signs requests against a single bucket.
///
/// It produces ready-to-send [`http::request::Parts`] for
/// `PUT {endpoint}/{bucket}/{key}` and `DELETE {endpoint}/{bucket}/{key}`,
/// with the object key percent-encoded once so the signed canonical path is
/// byte-identical to the path on the wire. It performs no I/O itself: the
/// caller attaches the body and sends the request with its own HTTP client.
#[derive(Debug)]
pub struct ObjectStore {
    endpoint: String,
    bucket: String,
    credential: Credential,
    signer: Signer,
}

impl ObjectStore {
    /// Create a store from config.
    ///
    /// Configuration problems (missing endpoint, bucket, region, or key
    /// material) are caught here, before any signing is attempted.
    pub fn new(config: &Config) -> crate::Result<Self> {
        let endpoint = config.endpoint.trim_end_matches('/').to_string();
        if endpoint.is_empty() {
            return Err(Error::config_invalid("endpoint is not set"));
        }
        let uri: Uri = endpoint
            .parse()
            .map_err(|e| Error::config_invalid("endpoint is not a valid uri").with_source(e))?;
        if uri.authority().is_none() {
            return Err(Error::config_invalid("endpoint has no host"));
        }

        if config.bucket.is_empty() {
            return Err(Error::config_invalid("bucket is not set"));
        }

        let region = config
            .region
            .clone()
            .ok_or_else(|| Error::config_invalid("region is not set"))?;
        debug!("object store endpoint: {endpoint}, bucket: {}", config.bucket);

        Ok(Self {
            endpoint,
            bucket: config.bucket.clone(),
            credential: config.credential()?,
            signer: Signer::new(&config.service, &region),
        })
    }

    /// Specify the signing time.
    ///
    /// Only use this function for testing.
    #[cfg(test)]
    pub(crate) fn with_time(mut self, time: crate::time::DateTime) -> Self {
        self.signer = self.signer.with_time(time);
        self
    }

    /// Build and sign an upload for `key` with the complete body.
    ///
    /// Pass [`ObjectAcl::PublicRead`] for objects that must be publicly
    /// readable; otherwise no ACL header is sent or signed.
    pub fn put_object(
        &self,
        key: &str,
        payload: &[u8],
        acl: Option<ObjectAcl>,
    ) -> crate::Result<(http::request::Parts, SignatureResult)> {
        self.sign_object_request(Method::PUT, key, acl, Payload::Bytes(payload))
    }

    /// Build and sign an upload for `key` with a pre-computed payload hash.
    ///
    /// For bodies too large to buffer: hash them with
    /// [`crate::hash::hex_sha256_read`] and let the transport layer stream
    /// the body itself.
    pub fn put_object_hashed(
        &self,
        key: &str,
        content_sha256: &str,
        acl: Option<ObjectAcl>,
    ) -> crate::Result<(http::request::Parts, SignatureResult)> {
        self.sign_object_request(Method::PUT, key, acl, Payload::Hash(content_sha256))
    }

    /// Build and sign a delete for `key`.
    pub fn delete_object(
        &self,
        key: &str,
    ) -> crate::Result<(http::request::Parts, SignatureResult)> {
        self.sign_object_request(Method::DELETE, key, None, Payload::Empty)
    }

    fn sign_object_request(
        &self,
        method: Method,
        key: &str,
        acl: Option<ObjectAcl>,
        payload: Payload<'_>,
    ) -> crate::Result<(http::request::Parts, SignatureResult)> {
        let mut parts = self.object_request(method, key)?;

        if let Some(ObjectAcl::PublicRead) = acl {
            parts
                .headers
                .insert(X_AMZ_ACL, HeaderValue::from_static(ACL_PUBLIC_READ));
        }

        let result = self.signer.sign(&mut parts, &self.credential, payload)?;
        Ok((parts, result))
    }

    fn object_request(&self, method: Method, key: &str) -> crate::Result<http::request::Parts> {
        if key.is_empty() {
            return Err(Error::request_invalid("object key is empty"));
        }

        let key = utf8_percent_encode(key.trim_start_matches('/'), &AWS_URI_ENCODE_SET);
        let uri = format!("{}/{}/{}", self.endpoint, self.bucket, key);

        let (parts, _) = http::Request::builder()
            .method(method)
            .uri(uri)
            .body(())?
            .into_parts();

        Ok(parts)
    }
}
