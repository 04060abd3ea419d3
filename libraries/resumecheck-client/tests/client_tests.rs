//! Tests for the ResumeCheck API client.
//!
//! These tests use mock servers to verify client behavior without
//! requiring a real server connection.

use resumecheck_client::{
    ApiClient, ApiError, ClientConfig, LoginRequest, RegisterRequest, UploadFile,
};
use resumecheck_core::validation::MAX_UPLOAD_BYTES;
use resumecheck_core::{ResumeId, Role, User, UserId, ValidationError};
use resumecheck_storage::SessionStore;
use serde_json::{json, Value};
use wiremock::matchers::{body_string_contains, header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn stored_user(role: Role) -> User {
    User {
        id: UserId::new("u1"),
        name: "Jane Doe".to_string(),
        email: "jane@example.com".to_string(),
        role,
        created_at: "2024-01-01T00:00:00Z".to_string(),
    }
}

fn user_json(role: &str) -> Value {
    json!({
        "id": "u1",
        "name": "Jane Doe",
        "email": "jane@example.com",
        "role": role,
        "created_at": "2024-01-01T00:00:00Z"
    })
}

fn resume_json(id: &str, score: f64) -> Value {
    json!({
        "id": id,
        "fileName": "cv.pdf",
        "uploadedAt": "2024-03-05T14:30:00Z",
        "score": score,
        "analysis": {
            "strengths": ["Clear structure"],
            "weaknesses": [],
            "suggestions": ["Quantify achievements"],
            "missing_keywords": ["docker"],
            "details": {
                "total_words": 600,
                "skills_found": 8,
                "skills_total": 12,
                "keyword_density": 3.5,
                "experience_indicators": 4,
                "grammar_score": 92.0
            }
        }
    })
}

fn ok(data: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "success": true, "data": data }))
}

fn client_for(server: &MockServer, store: SessionStore) -> ApiClient {
    ApiClient::new(ClientConfig::new(server.uri()), store).unwrap()
}

async fn signed_in_store(token: &str) -> SessionStore {
    let store = SessionStore::in_memory();
    store.set_auth_data(token, &stored_user(Role::User)).await;
    store
}

// =============================================================================
// Client Creation Tests
// =============================================================================

mod client_creation {
    use super::*;

    #[test]
    fn test_empty_url_rejected() {
        let result = ApiClient::new(ClientConfig::new(""), SessionStore::in_memory());

        match result.unwrap_err() {
            ApiError::InvalidUrl(msg) => assert!(msg.contains("empty")),
            other => panic!("Expected InvalidUrl error, got {other:?}"),
        }
    }

    #[test]
    fn test_scheme_required() {
        let result = ApiClient::new(
            ClientConfig::new("resume-atsb.onrender.com/api"),
            SessionStore::in_memory(),
        );
        assert!(matches!(result, Err(ApiError::InvalidUrl(_))));
    }

    #[test]
    fn test_default_config_points_at_production() {
        let client = ApiClient::new(ClientConfig::default(), SessionStore::in_memory()).unwrap();
        assert_eq!(client.base_url(), "https://resume-atsb.onrender.com/api");
    }
}

// =============================================================================
// Authentication Tests
// =============================================================================

mod authentication {
    use super::*;

    #[tokio::test]
    async fn test_login_persists_session() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .and(body_string_contains("jane@example.com"))
            .respond_with(ok(json!({ "token": "jwt-123", "user": user_json("admin") })))
            .expect(1)
            .mount(&server)
            .await;

        let store = SessionStore::in_memory();
        let client = client_for(&server, store.clone());

        let session = client
            .login(&LoginRequest {
                email: "jane@example.com".into(),
                password: "Secret1".into(),
            })
            .await
            .unwrap();

        assert_eq!(session.token, "jwt-123");
        assert_eq!(store.get_auth_token().await.as_deref(), Some("jwt-123"));
        assert!(store.is_admin().await);
    }

    #[tokio::test]
    async fn test_register_persists_session() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/register"))
            .and(body_string_contains("\"name\":\"Jane Doe\""))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(json!({
                        "success": true,
                        "data": { "token": "fresh", "user": user_json("user") }
                    })),
            )
            .mount(&server)
            .await;

        let store = SessionStore::in_memory();
        let client = client_for(&server, store.clone());

        client
            .register(&RegisterRequest {
                name: "Jane Doe".into(),
                email: "jane@example.com".into(),
                password: "Secret1".into(),
            })
            .await
            .unwrap();

        let snapshot = store.snapshot().await;
        assert!(snapshot.is_signed_in());
        assert!(!snapshot.is_admin());
    }

    #[tokio::test]
    async fn test_register_conflict_surfaces_server_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/register"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "success": false,
                "message": "User already exists"
            })))
            .mount(&server)
            .await;

        let client = client_for(&server, SessionStore::in_memory());
        let err = client
            .register(&RegisterRequest {
                name: "Jane".into(),
                email: "jane@example.com".into(),
                password: "Secret1".into(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.server_message(), Some("User already exists"));
        assert!(!client.session().is_authenticated().await);
    }

    #[tokio::test]
    async fn test_logout_clears_session_without_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let store = signed_in_store("t").await;
        let client = client_for(&server, store.clone());

        client.logout().await;

        assert!(!store.is_authenticated().await);
        assert!(store.get_current_user().await.is_none());
    }

    #[tokio::test]
    async fn test_me() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/auth/me"))
            .and(header("authorization", "Bearer t"))
            .respond_with(ok(user_json("user")))
            .mount(&server)
            .await;

        let client = client_for(&server, signed_in_store("t").await);
        let user = client.auth().me().await.unwrap();

        assert_eq!(user, stored_user(Role::User));
    }
}

// =============================================================================
// Request Pipeline Tests
// =============================================================================

mod request_pipeline {
    use super::*;

    #[tokio::test]
    async fn test_bearer_token_attached() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/resume/my"))
            .and(header("authorization", "Bearer abc.def"))
            .respond_with(ok(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, signed_in_store("abc.def").await);
        let resumes = client.resumes().list_mine().await.unwrap();

        assert!(resumes.is_empty());
    }

    #[tokio::test]
    async fn test_no_header_when_signed_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/resume/my"))
            .and(header_exists("authorization"))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/resume/my"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let client = client_for(&server, SessionStore::in_memory());
        let err = client.resumes().list_mine().await.unwrap_err();

        assert!(err.is_auth_expired());
    }

    #[tokio::test]
    async fn test_token_read_at_send_time() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/resume/my"))
            .and(header("authorization", "Bearer second"))
            .respond_with(ok(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let store = signed_in_store("first").await;
        let client = client_for(&server, store.clone());
        store.set_auth_data("second", &stored_user(Role::User)).await;

        client.resumes().list_mine().await.unwrap();
    }

    #[tokio::test]
    async fn test_unauthorized_clears_session_for_every_method() {
        for (verb, route) in [
            ("GET", "/resume/my"),
            ("DELETE", "/resume/r1"),
            ("POST", "/resume/upload"),
        ] {
            let server = MockServer::start().await;
            Mock::given(method(verb))
                .and(path(route))
                .respond_with(ResponseTemplate::new(401))
                .mount(&server)
                .await;

            let store = signed_in_store("stale").await;
            store.set("prefs", &"kept").await;
            let client = client_for(&server, store.clone());

            let result = match verb {
                "GET" => client.resumes().list_mine().await.map(|_| ()),
                "DELETE" => client.resumes().delete(&ResumeId::new("r1")).await,
                _ => client
                    .resumes()
                    .upload(UploadFile::new("cv.pdf", "application/pdf", vec![1, 2, 3]))
                    .await
                    .map(|_| ()),
            };

            assert!(matches!(result, Err(ApiError::AuthExpired)), "{verb}");
            assert_eq!(store.get_auth_token().await, None, "{verb}");
            assert_eq!(store.get_current_user().await, None, "{verb}");
            assert_eq!(store.get::<String>("prefs").await.as_deref(), Some("kept"));
        }
    }

    #[tokio::test]
    async fn test_forbidden_keeps_session() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/admin/users"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        let store = signed_in_store("t").await;
        let client = client_for(&server, store.clone());

        let err = client.admin().list_users().await.unwrap_err();

        assert!(err.is_forbidden());
        assert!(store.is_authenticated().await);
    }

    #[tokio::test]
    async fn test_server_error_with_plain_text_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/resume/my"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal error"))
            .mount(&server)
            .await;

        let client = client_for(&server, signed_in_store("t").await);
        let err = client.resumes().list_mine().await.unwrap_err();

        assert!(matches!(err, ApiError::Status { status: 500, .. }));
        assert_eq!(err.server_message(), None);
    }

    #[tokio::test]
    async fn test_error_envelope_without_message_has_no_server_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/register"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "success": false,
                "errors": ["bad"]
            })))
            .mount(&server)
            .await;

        let client = client_for(&server, SessionStore::in_memory());
        let err = client
            .register(&RegisterRequest {
                name: "Jane Doe".into(),
                email: "jane@example.com".into(),
                password: "Secret1".into(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Status { status: 400, .. }));
        assert_eq!(err.server_message(), None);
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/resume/my"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let client = client_for(&server, signed_in_store("t").await);
        let err = client.resumes().list_mine().await.unwrap_err();

        assert!(matches!(err, ApiError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_wrong_payload_shape_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/resume/r1"))
            .respond_with(ok(json!({ "id": "r1" })))
            .mount(&server)
            .await;

        let client = client_for(&server, signed_in_store("t").await);
        let err = client.resumes().get(&ResumeId::new("r1")).await.unwrap_err();

        assert!(matches!(err, ApiError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_unsuccessful_envelope_is_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/resume/my"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": false,
                "message": "Quota exceeded"
            })))
            .mount(&server)
            .await;

        let client = client_for(&server, signed_in_store("t").await);
        let err = client.resumes().list_mine().await.unwrap_err();

        match err {
            ApiError::Rejected { message } => assert_eq!(message, "Quota exceeded"),
            other => panic!("Expected Rejected error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unsuccessful_envelope_without_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/resume/my"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "success": false })),
            )
            .mount(&server)
            .await;

        let client = client_for(&server, signed_in_store("t").await);
        let err = client.resumes().list_mine().await.unwrap_err();

        assert!(matches!(err, ApiError::Rejected { .. }));
        assert_eq!(err.server_message(), None);
    }

    #[tokio::test]
    async fn test_unreachable_server() {
        let client = ApiClient::new(
            ClientConfig::new("http://127.0.0.1:1"),
            SessionStore::in_memory(),
        )
        .unwrap();

        let err = client.resumes().list_mine().await.unwrap_err();
        assert!(matches!(err, ApiError::ServerUnreachable(_)));
    }
}

// =============================================================================
// Resume Tests
// =============================================================================

mod resumes {
    use super::*;

    #[tokio::test]
    async fn test_upload_sends_multipart_resume_field() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/resume/upload"))
            .and(body_string_contains("name=\"resume\""))
            .and(body_string_contains("filename=\"cv.pdf\""))
            .respond_with(ok(resume_json("r9", 84.0)))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, signed_in_store("t").await);
        let resume = client
            .resumes()
            .upload(UploadFile::new("cv.pdf", "application/pdf", b"%PDF-1.4".to_vec()))
            .await
            .unwrap();

        assert_eq!(resume.id, ResumeId::new("r9"));
        assert_eq!(resume.score, 84.0);
        assert_eq!(resume.analysis.missing_keywords, vec!["docker"]);
    }

    #[tokio::test]
    async fn test_invalid_upload_never_reaches_network() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = client_for(&server, signed_in_store("t").await);

        let err = client
            .resumes()
            .upload(UploadFile::new("notes.txt", "text/plain", vec![0; 10]))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ApiError::Validation(ValidationError::UnsupportedFileType(_))
        ));

        let err = client
            .resumes()
            .upload(UploadFile::new(
                "big.pdf",
                "application/pdf",
                vec![0; 5 * 1024 * 1024 + 1],
            ))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ApiError::Validation(ValidationError::FileTooLarge(_))
        ));
    }

    #[tokio::test]
    async fn test_list_get_and_delete() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/resume/my"))
            .respond_with(ok(json!([resume_json("a", 70.0), resume_json("b", 45.5)])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/resume/a"))
            .respond_with(ok(resume_json("a", 70.0)))
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/resume/a"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "message": "Resume deleted"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, signed_in_store("t").await);

        let list = client.resumes().list_mine().await.unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[1].score, 45.5);

        let one = client.resumes().get(&ResumeId::new("a")).await.unwrap();
        assert_eq!(one.file_name, "cv.pdf");

        client.resumes().delete(&ResumeId::new("a")).await.unwrap();
    }

    #[tokio::test]
    async fn test_upload_from_path_guesses_mime() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("resume.docx");
        std::fs::write(&file_path, b"PK").unwrap();

        let file = UploadFile::from_path(&file_path).await.unwrap();

        assert_eq!(file.file_name, "resume.docx");
        assert_eq!(
            file.mime_type,
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        );
        assert_eq!(file.size(), 2);
    }

    #[tokio::test]
    async fn test_upload_from_path_rejects_oversized_file_without_reading() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("huge.pdf");
        let file = std::fs::File::create(&file_path).unwrap();
        file.set_len(MAX_UPLOAD_BYTES + 1).unwrap();

        let err = UploadFile::from_path(&file_path).await.unwrap_err();

        assert!(matches!(
            err,
            ApiError::Validation(ValidationError::FileTooLarge(size)) if size == MAX_UPLOAD_BYTES + 1
        ));
    }

    #[tokio::test]
    async fn test_upload_from_path_accepts_file_at_limit() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("edge.pdf");
        let file = std::fs::File::create(&file_path).unwrap();
        file.set_len(MAX_UPLOAD_BYTES).unwrap();

        let upload = UploadFile::from_path(&file_path).await.unwrap();

        assert_eq!(upload.size(), MAX_UPLOAD_BYTES);
    }

    #[tokio::test]
    async fn test_upload_from_path_rejects_directory() {
        let dir = tempfile::tempdir().unwrap();

        let err = UploadFile::from_path(dir.path()).await.unwrap_err();

        match err {
            ApiError::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::InvalidInput),
            other => panic!("Expected Io error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_upload_from_path_missing_file() {
        let dir = tempfile::tempdir().unwrap();

        let err = UploadFile::from_path(&dir.path().join("gone.pdf"))
            .await
            .unwrap_err();

        match err {
            ApiError::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
            other => panic!("Expected Io error, got {other:?}"),
        }
    }
}

// =============================================================================
// Admin Tests
// =============================================================================

mod admin {
    use super::*;

    #[tokio::test]
    async fn test_admin_listings() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/admin/users"))
            .respond_with(ok(json!([user_json("admin"), {
                "_id": "u2",
                "name": "John Roe",
                "email": "john@example.com",
                "role": "user",
                "created_at": "2024-02-01T00:00:00Z"
            }])))
            .mount(&server)
            .await;

        let mut owned = resume_json("r1", 55.0);
        owned["user"] = json!({ "id": "u2", "name": "John Roe", "email": "john@example.com" });
        Mock::given(method("GET"))
            .and(path("/admin/resumes"))
            .respond_with(ok(json!([owned])))
            .mount(&server)
            .await;

        let client = client_for(&server, signed_in_store("t").await);

        let users = client.admin().list_users().await.unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[1].id, UserId::new("u2"));

        let resumes = client.admin().list_resumes().await.unwrap();
        assert!(resumes[0].is_owned_by(&UserId::new("u2")));
    }

    #[tokio::test]
    async fn test_delete_user() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/admin/users/u2"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, signed_in_store("t").await);
        client.admin().delete_user(&UserId::new("u2")).await.unwrap();
    }
}
