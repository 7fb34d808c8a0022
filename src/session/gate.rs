//! The access gate in front of the admin pages.
//!
//! A request passes only if it carries a session that has been active in
//! the last [DEFAULT_SESSION_IDLE_TIMEOUT] (or the configured timeout) and
//! belongs to an administrator.

use axum::{
    extract::{FromRef, FromRequestParts, Request, State},
    http::header::SET_COOKIE,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::{PrivateCookieJar, cookie::Key};
use time::{Duration, OffsetDateTime};

use crate::{
    AppState, endpoints,
    session::{
        cookie::{get_session_from_cookies, invalidate_session_cookie, set_session_cookie},
        flash::{FlashMessage, set_flash},
        token::SessionToken,
    },
    user::{UserID, UserRole},
};

/// How long a session may sit idle before the gate destroys it.
pub const DEFAULT_SESSION_IDLE_TIMEOUT: Duration = Duration::seconds(5600);

pub(crate) const SESSION_EXPIRED_MESSAGE: &str = "Your session has expired. Please log in again.";
pub(crate) const ADMIN_ONLY_MESSAGE: &str =
    "Access denied. You must be an administrator to view reports.";

/// The state needed by the access gate.
#[derive(Clone)]
pub struct SessionState {
    /// The key to be used for signing and encrypting private cookies.
    pub cookie_key: Key,
    /// How long a session may be idle before it expires.
    pub idle_timeout: Duration,
}

impl FromRef<AppState> for SessionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            cookie_key: state.cookie_key.clone(),
            idle_timeout: state.session_idle_timeout,
        }
    }
}

// this impl tells `PrivateCookieJar` how to access the key from our state
impl FromRef<SessionState> for Key {
    fn from_ref(state: &SessionState) -> Self {
        state.cookie_key.clone()
    }
}

/// The user behind a request that passed the gate.
///
/// Route handlers behind [admin_guard] can take `Extension<CurrentUser>`.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentUser {
    /// The user's database ID.
    pub id: UserID,
    /// The name to greet the user with.
    pub username: String,
}

/// The outcome of checking a session against the gate's rules.
#[derive(Debug, Clone, PartialEq)]
pub enum AccessDecision {
    /// There is no session, send the client to the log-in page.
    NotLoggedIn,
    /// The session sat idle for longer than the timeout.
    Expired,
    /// The session belongs to a user who is not an administrator.
    Forbidden,
    /// Let the request through. The token's activity time has been
    /// moved to the time of the check.
    Granted(SessionToken),
}

/// Decide whether `session` may see admin pages at time `now`.
///
/// Checks run in order: logged in, not idle for more than `idle_timeout`,
/// administrator. Expiry is checked before the role so that any stale
/// session is destroyed, whoever it belongs to.
pub fn check_access(
    session: Option<SessionToken>,
    now: OffsetDateTime,
    idle_timeout: Duration,
) -> AccessDecision {
    let Some(mut session) = session else {
        return AccessDecision::NotLoggedIn;
    };

    if now - session.last_activity > idle_timeout {
        return AccessDecision::Expired;
    }

    if session.role != UserRole::Admin {
        return AccessDecision::Forbidden;
    }

    session.last_activity = now;
    AccessDecision::Granted(session)
}

fn redirect_with_flash(jar: PrivateCookieJar, flash: &FlashMessage, location: &str) -> Response {
    let jar = set_flash(jar.clone(), flash).unwrap_or_else(|error| {
        tracing::error!("Could not set flash message: {error}");
        jar
    });

    (jar, Redirect::to(location)).into_response()
}

/// Middleware that only lets through requests from administrators with a live session.
///
/// - No session: redirect to the log-in page.
/// - Idle for longer than the timeout: destroy the session, flash an error
///   and redirect to the home page.
/// - Not an administrator: flash an error and redirect to the log-in page.
///
/// Otherwise the session's activity time is refreshed, a [CurrentUser] is
/// placed in the request extensions and the request runs normally.
pub async fn admin_guard(
    State(state): State<SessionState>,
    request: Request,
    next: Next,
) -> Response {
    let (mut parts, body) = request.into_parts();
    let jar = match PrivateCookieJar::from_request_parts(&mut parts, &state).await {
        Ok(jar) => jar,
        Err(err) => {
            tracing::error!("Error getting cookie jar: {err:?}. Redirecting to log in page.");
            return Redirect::to(endpoints::LOG_IN_VIEW).into_response();
        }
    };

    let session = get_session_from_cookies(&jar);
    let token = match check_access(session, OffsetDateTime::now_utc(), state.idle_timeout) {
        AccessDecision::NotLoggedIn => return Redirect::to(endpoints::LOG_IN_VIEW).into_response(),
        AccessDecision::Expired => {
            tracing::info!("Session expired for {}, destroying it.", parts.uri);
            let jar = invalidate_session_cookie(jar);
            return redirect_with_flash(
                jar,
                &FlashMessage::error(SESSION_EXPIRED_MESSAGE),
                endpoints::HOME,
            );
        }
        AccessDecision::Forbidden => {
            tracing::warn!("Non-admin user tried to access {}.", parts.uri);
            return redirect_with_flash(
                jar,
                &FlashMessage::error(ADMIN_ONLY_MESSAGE),
                endpoints::LOG_IN_VIEW,
            );
        }
        AccessDecision::Granted(token) => token,
    };

    parts.extensions.insert(CurrentUser {
        id: token.user_id,
        username: token.username.clone(),
    });
    let request = Request::from_parts(parts, body);
    let response = next.run(request).await;

    let jar = match set_session_cookie(jar, &token) {
        Ok(jar) => jar,
        Err(error) => {
            tracing::error!("Could not refresh session activity: {error}");
            return response;
        }
    };

    let (mut parts, body) = response.into_parts();
    for (key, val) in jar.into_response().headers().iter() {
        if key != SET_COOKIE {
            continue;
        }

        parts.headers.append(key, val.to_owned());
    }

    Response::from_parts(parts, body)
}
