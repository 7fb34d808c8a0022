//! Log-out route handler that destroys the session and redirects users.

use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::PrivateCookieJar;

use crate::{
    endpoints,
    session::{FlashMessage, invalidate_session_cookie, set_flash},
};

pub(crate) const LOGGED_OUT_MESSAGE: &str = "You have been logged out.";

/// Invalidate the session cookie and redirect the client to the log-in page.
pub async fn get_log_out(jar: PrivateCookieJar) -> Response {
    let jar = invalidate_session_cookie(jar);
    let jar = set_flash(jar.clone(), &FlashMessage::success(LOGGED_OUT_MESSAGE)).unwrap_or_else(
        |error| {
            tracing::error!("Could not set flash message: {error}");
            jar
        },
    );

    (jar, Redirect::to(endpoints::LOG_IN_VIEW)).into_response()
}
