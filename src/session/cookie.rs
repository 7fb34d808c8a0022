//! Reading and writing the encrypted session cookie.

use axum_extra::extract::{
    PrivateCookieJar,
    cookie::{Cookie, SameSite},
};
use time::{Duration, OffsetDateTime};

use crate::{Error, session::token::SessionToken};

pub(crate) const COOKIE_SESSION: &str = "session";

/// Build a cookie with the attributes shared by the session and flash cookies.
///
/// The cookie has no expiry, so the browser keeps it until it is closed.
pub(super) fn build_cookie(name: &'static str, value: String) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Strict)
        .secure(true)
        .build()
}

/// Overwrite the cookie `name` with an expired placeholder so the client deletes it.
pub(super) fn expire_cookie(jar: PrivateCookieJar, name: &'static str) -> PrivateCookieJar {
    let mut cookie = build_cookie(name, "deleted".to_owned());
    cookie.set_expires(OffsetDateTime::UNIX_EPOCH);
    cookie.set_max_age(Duration::ZERO);

    jar.add(cookie)
}

/// Store `token` in the session cookie.
///
/// # Errors
///
/// Returns [Error::SessionCookieError] if the token cannot be serialized.
pub(crate) fn set_session_cookie(
    jar: PrivateCookieJar,
    token: &SessionToken,
) -> Result<PrivateCookieJar, Error> {
    let value = serde_json::to_string(token)
        .map_err(|error| Error::SessionCookieError(error.to_string()))?;

    Ok(jar.add(build_cookie(COOKIE_SESSION, value)))
}

/// Read the session token, if the client sent a readable one.
///
/// A cookie that fails decryption never reaches this function since the
/// private jar drops it. A cookie that decrypts but does not parse, such
/// as the placeholder left by [invalidate_session_cookie], counts as no
/// session.
pub(crate) fn get_session_from_cookies(jar: &PrivateCookieJar) -> Option<SessionToken> {
    let cookie = jar.get(COOKIE_SESSION)?;

    match serde_json::from_str(cookie.value_trimmed()) {
        Ok(token) => Some(token),
        Err(error) => {
            tracing::debug!("Ignoring unreadable session cookie: {error}");
            None
        }
    }
}

/// Destroy the session: the client is told to delete the cookie and the
/// value left in the jar no longer parses as a token.
pub(crate) fn invalidate_session_cookie(jar: PrivateCookieJar) -> PrivateCookieJar {
    expire_cookie(jar, COOKIE_SESSION)
}
