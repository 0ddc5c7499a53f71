//! End-to-end signing scenarios through the public API.
//!
//! These run against the real clock, so they assert the structure of the
//! signed request rather than exact signature bytes; the exact published
//! test vectors live in the unit tests next to the signer.

use objsign::{Config, ObjectAcl, ObjectStore, EMPTY_PAYLOAD_SHA256};

fn test_config() -> Config {
    Config {
        endpoint: "https://s3.us-east-1.example.com".to_string(),
        bucket: "photos".to_string(),
        region: Some("us-east-1".to_string()),
        access_key_id: Some("AKIDEXAMPLE".to_string()),
        secret_access_key: Some("wJalrXUtnFEMI/K7MDENG/bPxRfiCYEXAMPLEKEY".to_string()),
        ..Default::default()
    }
}

#[test]
fn test_signed_upload_carries_every_required_header() {
    let _ = env_logger::builder().is_test(true).try_init();

    let store = ObjectStore::new(&test_config()).expect("store must build");
    let (parts, result) = store
        .put_object(
            "projects/acme co/p1/photos/42.jpg",
            b"jpeg bytes",
            Some(ObjectAcl::PublicRead),
        )
        .expect("put must sign");

    // The signed path must be byte-identical to the wire path.
    assert_eq!(
        parts.uri.path(),
        "/photos/projects/acme%20co/p1/photos/42.jpg"
    );
    assert_eq!(
        parts.headers["host"].to_str().unwrap(),
        "s3.us-east-1.example.com"
    );
    assert_eq!(parts.headers["x-amz-acl"].to_str().unwrap(), "public-read");
    assert_eq!(
        parts.headers["x-amz-content-sha256"].to_str().unwrap(),
        result.content_sha256
    );
    assert_eq!(
        parts.headers["x-amz-date"].to_str().unwrap(),
        result.amz_date
    );
    assert_eq!(
        parts.headers["authorization"].to_str().unwrap(),
        result.authorization
    );
    assert_eq!(
        result.signed_headers,
        vec!["host", "x-amz-acl", "x-amz-content-sha256", "x-amz-date"]
    );
}

#[test]
fn test_authorization_header_shape() {
    let store = ObjectStore::new(&test_config()).expect("store must build");
    let (_, result) = store
        .put_object("projects/acme/p1/photos/42.jpg", b"jpeg bytes", None)
        .expect("put must sign");

    // amz_date is compact ISO 8601 in UTC; its date half scopes the credential.
    assert_eq!(result.amz_date.len(), 16);
    assert_eq!(&result.amz_date[8..9], "T");
    assert!(result.amz_date.ends_with('Z'));

    let scope = format!("{}/us-east-1/s3/aws4_request", &result.amz_date[..8]);
    assert!(result.authorization.starts_with(&format!(
        "AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/{scope}, SignedHeaders=host;x-amz-content-sha256;x-amz-date, Signature="
    )));

    // The hex signature is the last token.
    let signature = result
        .authorization
        .rsplit("Signature=")
        .next()
        .expect("authorization must carry a signature");
    assert_eq!(signature.len(), 64);
    assert!(signature
        .chars()
        .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
}

#[test]
fn test_signed_delete_has_no_body_hash_but_the_empty_constant() {
    let store = ObjectStore::new(&test_config()).expect("store must build");
    let (parts, result) = store
        .delete_object("projects/acme/p1/photos/42.jpg")
        .expect("delete must sign");

    assert_eq!(parts.method, http::Method::DELETE);
    assert_eq!(result.content_sha256, EMPTY_PAYLOAD_SHA256);
    assert_eq!(
        parts.headers["x-amz-content-sha256"].to_str().unwrap(),
        EMPTY_PAYLOAD_SHA256
    );
    assert!(parts.headers.get("x-amz-acl").is_none());
}

#[test]
fn test_streaming_hash_equals_buffered_signing() {
    let store = ObjectStore::new(&test_config()).expect("store must build");
    let body = b"jpeg bytes".repeat(4096);

    let hash = objsign::hash::hex_sha256_read(body.as_slice()).expect("hash must compute");
    let (_, hashed) = store
        .put_object_hashed("projects/acme/p1/photos/42.jpg", &hash, None)
        .expect("put must sign");

    assert_eq!(hashed.content_sha256, objsign::hash::hex_sha256(&body));
}
