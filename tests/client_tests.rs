//! Tests for client construction and image loading.
//!
//! These cover the two failure modes that must abort before any network
//! activity: a missing credential and an unreadable image file.

#[cfg(test)]
mod client_tests {
    use base64::Engine as _;
    use base64::engine::general_purpose::STANDARD;
    use sketch2code::{InferenceClient, MediaFile, SketchCodeError};
    use std::env;

    // Env mutation is process-global, so the credential scenarios run
    // inside one test body instead of racing across threads.
    #[test]
    fn test_from_env_credential_handling() {
        unsafe { env::remove_var("GITHUB_TOKEN") };
        let err = InferenceClient::from_env().expect_err("missing credential should error");
        match &err {
            SketchCodeError::ConfigError(msg) => {
                assert_eq!(msg, "GITHUB_TOKEN environment variable not set");
            }
            other => panic!("Expected ConfigError, got {:?}", other),
        }

        unsafe { env::set_var("GITHUB_TOKEN", "") };
        let err = InferenceClient::from_env().expect_err("empty credential should error");
        assert!(matches!(err, SketchCodeError::ConfigError(_)));

        unsafe { env::set_var("GITHUB_TOKEN", "test-token") };
        let client = InferenceClient::from_env().expect("credential present should succeed");
        drop(client);

        unsafe { env::remove_var("GITHUB_TOKEN") };
    }

    #[tokio::test]
    async fn test_missing_image_fails_before_any_request() {
        let err = MediaFile::from_file("./does_not_exist.jpg", "image/png")
            .await
            .expect_err("nonexistent image should error");
        match err {
            SketchCodeError::ImageRead { path, source } => {
                assert_eq!(path.to_str(), Some("./does_not_exist.jpg"));
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("Expected ImageRead, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_image_file_round_trips_exact_bytes() {
        let bytes: &[u8] = b"\x89PNG\r\n\x1a\nfake image payload";
        let path = env::temp_dir().join("sketch2code_fixture.png");
        std::fs::write(&path, bytes).expect("fixture write should succeed");

        let media = MediaFile::from_file(&path, "image/png")
            .await
            .expect("readable image should load");
        assert_eq!(media.data, STANDARD.encode(bytes));
        assert_eq!(media.mime_type, "image/png");
        assert_eq!(
            media.to_data_url(),
            format!("data:image/png;base64,{}", STANDARD.encode(bytes))
        );

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_builder_is_chainable() {
        let _client = InferenceClient::new("test-token")
            .expect("client should build")
            .model("meta/Llama-3.2-90B-Vision-Instruct")
            .temperature(0.7)
            .top_p(1.0)
            .max_tokens(4000)
            .base_url("http://localhost:1234/v1")
            .build();
    }
}
