use std::collections::HashMap;

use crate::{
    auth::{jwt::generate_access_token, session},
    config::Config,
    error::AuthError,
    models::{LoginReqDto, LoginResponse},
};
use actix_web::{HttpRequest, HttpResponse, Responder, web};
use once_cell::sync::Lazy;
use serde_json::json;
use tracing::{info, instrument};

// Fixed single-user credential table. Hardening it is an explicit non-goal;
// passwords are compared exactly, case-sensitive.
static CREDENTIALS: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| HashMap::from([("admin", "admin"), ("user", "user123")]));

/// Whether a username/password pair matches the credential table. Unknown
/// user and wrong password are deliberately indistinguishable.
pub fn check_credentials(username: &str, password: &str) -> Result<(), AuthError> {
    match CREDENTIALS.get(username) {
        Some(stored) if *stored == password => Ok(()),
        _ => Err(AuthError::InvalidCredentials),
    }
}

#[instrument(
    name = "auth_login",
    skip(config, user),
    fields(username = %user.username)
)]
pub async fn login(
    user: web::Json<LoginReqDto>,
    config: web::Data<Config>,
) -> actix_web::Result<impl Responder> {
    info!("Login request received");

    if user.username.trim().is_empty() || user.password.is_empty() {
        info!("Validation failed: empty username or password");
        return Ok(HttpResponse::BadRequest().json(json!({
            "error": "Username and password must not be empty"
        })));
    }

    check_credentials(&user.username, &user.password).map_err(|e| {
        info!("Invalid credentials");
        e
    })?;

    let (access_token, claims) = generate_access_token(
        user.username.clone(),
        &config.jwt_secret,
        config.access_token_ttl,
    );
    session::register(&claims.jti, &user.username).await;

    info!("Login successful");

    Ok(HttpResponse::Ok().json(LoginResponse {
        access_token,
        username: user.username.clone(),
    }))
}

/// Revokes the presented session. Succeeds no matter what was presented, so
/// a stale client can always log out.
pub async fn logout(req: HttpRequest, config: web::Data<Config>) -> impl Responder {
    let header = match req.headers().get("Authorization") {
        Some(h) => h.to_str().unwrap_or(""),
        None => return HttpResponse::NoContent().finish(),
    };

    let token = match header.strip_prefix("Bearer ") {
        Some(t) => t,
        None => return HttpResponse::NoContent().finish(),
    };

    let claims = match crate::auth::jwt::verify_token(token, &config.jwt_secret) {
        Ok(c) => c,
        Err(_) => return HttpResponse::NoContent().finish(),
    };

    session::revoke(&claims.jti).await;

    HttpResponse::NoContent().finish()
}
