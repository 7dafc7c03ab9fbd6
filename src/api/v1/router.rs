use super::error::*;
use super::handler;
use crate::application_port::{AuthService, LoginInput};
use crate::domain_model::Principal;
use crate::server::Server;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::convert::Infallible;
use std::sync::Arc;
use warp::{Filter, reject};

pub fn routes(
    server: Arc<Server>,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    // Path before method, so unknown paths reject as 404 rather than 405.
    let login = warp::path("login")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::json())
        .and(with(server.auth_service.clone()))
        .and_then(handler::login);

    let me = warp::path("me")
        .and(warp::path::end())
        .and(warp::get())
        .and(with_principal(server.auth_service.clone()))
        .and_then(handler::me);

    login.or(me)
}

fn with<ServiceType>(
    service: Arc<ServiceType>,
) -> impl Filter<Extract = (Arc<ServiceType>,), Error = Infallible> + Clone
where
    ServiceType: Send + Sync + ?Sized,
{
    warp::any().map(move || service.clone())
}

/// HTTP basic authentication. Extracts the authenticated [`Principal`] or
/// rejects with [`ApiErrorCode::InvalidCredentials`].
pub fn with_principal(
    auth_service: Arc<dyn AuthService>,
) -> impl Filter<Extract = (Principal,), Error = warp::Rejection> + Clone {
    warp::header::optional::<String>("authorization").and_then(
        move |header: Option<String>| {
            let auth_service = auth_service.clone();
            async move {
                let login_input = header
                    .as_deref()
                    .and_then(parse_basic)
                    .ok_or_else(|| reject::custom(ApiErrorCode::InvalidCredentials))?;
                let principal = auth_service
                    .authenticate(login_input)
                    .await
                    .map_err(ApiErrorCode::from)
                    .map_err(reject::custom)?;
                Ok::<_, warp::Rejection>(principal)
            }
        },
    )
}

fn parse_basic(header: &str) -> Option<LoginInput> {
    let (scheme, encoded) = header.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return None;
    }
    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    // The password may contain ':', the username may not.
    let (username, password) = decoded.split_once(':')?;
    Some(LoginInput {
        username: username.to_string(),
        password: password.to_string(),
    })
}
