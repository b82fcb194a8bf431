//! Unit tests for the identity crate

#[cfg(test)]
mod resolver_tests {
    use std::sync::Arc;
    use std::time::Duration;

    use crate::application::{ClaimsProfileResolver, ProfileConfig};
    use crate::domain::repository::UserRepository;
    use crate::domain::value_object::claim::Claim;
    use crate::domain::value_object::subject::Subject;
    use crate::error::{IdentityError, IdentityResult};
    use crate::infra::InMemoryUserRepository;

    fn subject(s: &str) -> Subject {
        Subject::parse_str(s).unwrap()
    }

    fn resolver(repo: &InMemoryUserRepository) -> ClaimsProfileResolver<InMemoryUserRepository> {
        ClaimsProfileResolver::new(Arc::new(repo.clone()), Arc::new(ProfileConfig::default()))
    }

    fn sorted(mut claims: Vec<Claim>) -> Vec<Claim> {
        claims.sort_by(|a, b| (&a.claim_type, &a.value).cmp(&(&b.claim_type, &b.value)));
        claims
    }

    #[tokio::test]
    async fn test_active_paying_user_scenario() {
        let repo = InMemoryUserRepository::new();
        repo.upsert(
            subject("sub-42"),
            true,
            vec![
                Claim::new("role", "PayingUser"),
                Claim::new("address", "1 Main St"),
            ],
        )
        .await;
        let resolver = resolver(&repo);

        let claims = resolver.resolve_claims(&subject("sub-42")).await.unwrap();
        assert_eq!(
            sorted(claims),
            vec![
                Claim::new("address", "1 Main St"),
                Claim::new("role", "PayingUser"),
            ]
        );
        assert!(resolver.is_active(&subject("sub-42")).await.unwrap());
    }

    #[tokio::test]
    async fn test_claims_returned_without_dedup_or_rename() {
        let stored = vec![
            Claim::new("role", "FreeUser"),
            Claim::new("role", "PayingUser"),
            Claim::new("role", "PayingUser"),
            Claim::new("Given_Name", "Frank"),
        ];
        let repo = InMemoryUserRepository::new();
        repo.upsert(subject("sub-7"), true, stored.clone()).await;

        let claims = resolver(&repo).resolve_claims(&subject("sub-7")).await.unwrap();
        assert_eq!(claims.len(), stored.len());
        assert_eq!(sorted(claims), sorted(stored));
    }

    #[tokio::test]
    async fn test_empty_claim_set_is_not_not_found() {
        let repo = InMemoryUserRepository::new();
        repo.upsert(subject("sub-empty"), true, vec![]).await;

        let claims = resolver(&repo).resolve_claims(&subject("sub-empty")).await.unwrap();
        assert!(claims.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_subject_is_not_found() {
        let repo = InMemoryUserRepository::new();
        let result = resolver(&repo).resolve_claims(&subject("ghost")).await;
        assert!(matches!(result, Err(IdentityError::SubjectNotFound)));
        assert!(!resolver(&repo).is_active(&subject("ghost")).await.unwrap());
    }

    #[tokio::test]
    async fn test_inactive_subject_with_claims() {
        let repo = InMemoryUserRepository::new();
        repo.upsert(subject("sub-off"), false, vec![Claim::new("role", "PayingUser")])
            .await;
        let resolver = resolver(&repo);

        assert!(!resolver.is_active(&subject("sub-off")).await.unwrap());
        assert_eq!(resolver.resolve_claims(&subject("sub-off")).await.unwrap().len(), 1);
        assert!(matches!(
            resolver.issue_profile(&subject("sub-off")).await,
            Err(IdentityError::AccountInactive)
        ));
    }

    #[tokio::test]
    async fn test_activity_is_not_cached() {
        let repo = InMemoryUserRepository::new();
        repo.upsert(subject("sub-1"), true, vec![]).await;
        let resolver = resolver(&repo);

        assert!(resolver.is_active(&subject("sub-1")).await.unwrap());
        repo.set_active(&subject("sub-1"), false).await;
        assert!(!resolver.is_active(&subject("sub-1")).await.unwrap());
        repo.set_active(&subject("sub-1"), true).await;
        assert!(resolver.issue_profile(&subject("sub-1")).await.is_ok());
    }

    #[derive(Clone)]
    struct StalledRepository;

    impl UserRepository for StalledRepository {
        async fn find_claims(&self, _subject: &Subject) -> IdentityResult<Option<Vec<Claim>>> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(Some(vec![]))
        }

        async fn is_active(&self, _subject: &Subject) -> IdentityResult<bool> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(true)
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_stalled_store_hits_deadline() {
        let config = ProfileConfig {
            repository_deadline: Duration::from_millis(100),
            ..ProfileConfig::default()
        };
        let resolver = ClaimsProfileResolver::new(Arc::new(StalledRepository), Arc::new(config));

        assert!(matches!(
            resolver.is_active(&subject("sub-1")).await,
            Err(IdentityError::RepositoryUnavailable(_))
        ));
        assert!(matches!(
            resolver.resolve_claims(&subject("sub-1")).await,
            Err(IdentityError::RepositoryUnavailable(_))
        ));
    }
}

#[cfg(test)]
mod router_tests {
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use platform::basic_auth::ClientCredentials;
    use platform::secret::ClientSecret;
    use tower::ServiceExt;

    use crate::application::ProfileConfig;
    use crate::domain::value_object::claim::Claim;
    use crate::domain::value_object::subject::Subject;
    use crate::infra::InMemoryUserRepository;
    use crate::presentation::router::profile_router_generic;

    fn credentials(secret: &str) -> ClientCredentials {
        ClientCredentials::new("imagegalleryclient", ClientSecret::new(secret))
    }

    fn config() -> ProfileConfig {
        ProfileConfig {
            relying_party: credentials("secret"),
            ..ProfileConfig::default()
        }
    }

    async fn seeded() -> InMemoryUserRepository {
        let repo = InMemoryUserRepository::new();
        repo.upsert(
            Subject::parse_str("sub-42").unwrap(),
            true,
            vec![Claim::new("role", "PayingUser")],
        )
        .await;
        repo.upsert(Subject::parse_str("sub-off").unwrap(), false, vec![])
            .await;
        repo
    }

    async fn send(
        repo: InMemoryUserRepository,
        config: ProfileConfig,
        uri: &str,
        authorization: Option<String>,
    ) -> (StatusCode, Option<String>, serde_json::Value) {
        let mut request = Request::builder().uri(uri);
        if let Some(value) = authorization {
            request = request.header(header::AUTHORIZATION, value);
        }
        let response = profile_router_generic(repo, config)
            .oneshot(request.body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let challenge = response
            .headers()
            .get(header::WWW_AUTHENTICATE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, challenge, serde_json::from_slice(&bytes).unwrap())
    }

    async fn get(repo: InMemoryUserRepository, uri: &str) -> (StatusCode, serde_json::Value) {
        let authorization = Some(credentials("secret").authorization_value());
        let (status, _, body) = send(repo, config(), uri, authorization).await;
        (status, body)
    }

    #[tokio::test]
    async fn test_request_without_credentials_is_unauthorized() {
        let (status, challenge, body) = send(seeded().await, config(), "/profile/sub-42/claims", None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(challenge.as_deref(), Some("Basic realm=\"idp\""));
        assert_eq!(body["status"], 401);
        assert!(body.get("claims").is_none());
    }

    #[tokio::test]
    async fn test_request_with_wrong_secret_is_unauthorized() {
        let authorization = Some(credentials("guess").authorization_value());
        let (status, _, _) = send(seeded().await, config(), "/profile/sub-42/active", authorization).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_unconfigured_secret_rejects_every_request() {
        let authorization = Some(credentials("").authorization_value());
        let (status, _, _) = send(
            seeded().await,
            ProfileConfig::default(),
            "/profile/sub-42/claims",
            authorization,
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_claims_endpoint() {
        let (status, body) = get(seeded().await, "/profile/sub-42/claims").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["subject"], "sub-42");
        assert_eq!(body["claims"][0]["type"], "role");
        assert_eq!(body["claims"][0]["value"], "PayingUser");
    }

    #[tokio::test]
    async fn test_claims_endpoint_inactive_is_forbidden() {
        let (status, body) = get(seeded().await, "/profile/sub-off/claims").await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["status"], 403);
    }

    #[tokio::test]
    async fn test_active_endpoint() {
        let (status, body) = get(seeded().await, "/profile/sub-off/active").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["isActive"], false);

        let (_, body) = get(seeded().await, "/profile/unknown/active").await;
        assert_eq!(body["isActive"], false);
    }

    #[tokio::test]
    async fn test_blank_subject_is_bad_request() {
        let (status, _) = get(seeded().await, "/profile/%20/active").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}

#[cfg(test)]
mod error_tests {
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    use crate::error::IdentityError;

    #[test]
    fn test_error_into_response_status_codes() {
        let test_cases: Vec<(IdentityError, StatusCode)> = vec![
            (IdentityError::SubjectNotFound, StatusCode::NOT_FOUND),
            (IdentityError::Unauthorized, StatusCode::UNAUTHORIZED),
            (IdentityError::AccountInactive, StatusCode::FORBIDDEN),
            (
                IdentityError::RepositoryUnavailable("deadline".into()),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                IdentityError::InvalidRequest("blank".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                IdentityError::Internal("test".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected_status) in test_cases {
            assert_eq!(error.into_response().status(), expected_status);
        }
    }
}
