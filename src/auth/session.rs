use moka::future::Cache;
use once_cell::sync::Lazy;

/// jti -> username of the active session. A token whose jti is absent here
/// has been logged out and no longer opens the protected routes.
pub static SESSION_REGISTRY: Lazy<Cache<String, String>> =
    Lazy::new(|| Cache::builder().max_capacity(10_000).build());

/// Mark a freshly issued token as active
pub async fn register(jti: &str, username: &str) {
    SESSION_REGISTRY
        .insert(jti.to_string(), username.to_string())
        .await;
}

/// Check whether a token is still active
pub async fn is_active(jti: &str) -> bool {
    SESSION_REGISTRY.get(jti).await.is_some()
}

/// Revoke a session (idempotent)
pub async fn revoke(jti: &str) {
    if let Some(username) = SESSION_REGISTRY.remove(jti).await {
        log::info!("Session revoked for {}", username);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn register_then_revoke() {
        register("jti-test-1", "admin").await;
        assert!(is_active("jti-test-1").await);

        revoke("jti-test-1").await;
        assert!(!is_active("jti-test-1").await);
    }

    #[actix_web::test]
    async fn revoke_is_idempotent_and_unknown_jtis_are_inactive() {
        assert!(!is_active("jti-never-issued").await);
        revoke("jti-never-issued").await;
        assert!(!is_active("jti-never-issued").await);
    }
}
