//! This file defines the routes for displaying the log-in page and handling log-in requests.
//! The session module handles the cookie that keeps the user logged in.

use std::sync::{Arc, Mutex};

use axum::{
    Form,
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::{PrivateCookieJar, cookie::Key};
use axum_htmx::HxRedirect;
use maud::{Markup, html};
use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{
    AppState, Error,
    alert::flash_alert,
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, base, loading_spinner,
        log_in_card, password_input,
    },
    session::{SessionToken, invalidate_session_cookie, set_session_cookie, take_flash},
    user::{User, UserRole, get_user_by_username},
};

pub const INVALID_CREDENTIALS_ERROR_MSG: &str = "Incorrect username or password.";
const INTERNAL_ERROR_MSG: &str = "An internal error occurred. Please try again later.";

fn log_in_form(username: &str, error_message: Option<&str>) -> Markup {
    html! {
        form
            hx-post=(endpoints::LOG_IN_API)
            hx-indicator="#indicator"
            hx-disabled-elt="#username, #password, #submit-button"
            class="space-y-4 md:space-y-6"
        {
            div
            {
                label for="username" class=(FORM_LABEL_STYLE) { "Username" }

                input
                    type="text"
                    name="username"
                    id="username"
                    class=(FORM_TEXT_INPUT_STYLE)
                    required
                    autofocus
                    value=(username);
            }

            (password_input("", error_message))

            button
                type="submit" id="submit-button" tabindex="0"
                class=(BUTTON_PRIMARY_STYLE)
            {
                span class="inline htmx-indicator" id="indicator"
                {
                    (loading_spinner())
                }
                "Log in"
            }
        }
    }
}

/// Display the log-in page, along with any message queued by a redirect.
pub async fn get_log_in_page(jar: PrivateCookieJar) -> Response {
    let (jar, flash) = take_flash(jar);
    let content = html! {
        (flash_alert(flash.as_ref()))
        (log_in_form("", None))
    };
    let content = log_in_card("Log in to your account", &content);

    (jar, base("Log In", &[], &content)).into_response()
}

/// The state needed to perform a login.
#[derive(Debug, Clone)]
pub struct LoginState {
    /// The key to be used for signing and encrypting private cookies.
    pub cookie_key: Key,
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for LoginState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            cookie_key: state.cookie_key.clone(),
            db_connection: state.db_connection.clone(),
        }
    }
}

// this impl tells `PrivateCookieJar` how to access the key from our state
impl FromRef<LoginState> for Key {
    fn from_ref(state: &LoginState) -> Self {
        state.cookie_key.clone()
    }
}

/// Where a user lands after logging in.
fn landing_page(role: UserRole) -> &'static str {
    match role {
        UserRole::Admin => endpoints::REPORTS_VIEW,
        UserRole::Officer => endpoints::HOME,
    }
}

/// Handler for log-in requests via the POST method.
///
/// On a successful log-in request, a new session is written to the session
/// cookie and the client is redirected: administrators to the reports page,
/// everyone else to the home page.
/// Otherwise, the form is returned with an error message explaining the problem.
///
/// # Errors
///
/// This function will return the form with an error message in a few situations.
/// - The username does not belong to a registered user.
/// - The password is not correct.
/// - An internal error occurred when reading the user or verifying the password.
pub async fn post_log_in(
    State(state): State<LoginState>,
    jar: PrivateCookieJar,
    Form(user_data): Form<LogInData>,
) -> Response {
    let username = user_data.username.trim();
    let user: Result<User, Error> = match state.db_connection.lock() {
        Ok(connection) => get_user_by_username(username, &connection),
        Err(error) => {
            tracing::error!("Could not acquire database lock: {error}");
            Err(Error::DatabaseLockError)
        }
    };

    let user = match user {
        Ok(user) => user,
        Err(Error::NotFound) => {
            tracing::info!("Log-in attempt for unknown user {username:?}");
            return log_in_form(username, Some(INVALID_CREDENTIALS_ERROR_MSG)).into_response();
        }
        Err(error) => {
            tracing::error!("Unhandled error while verifying credentials: {error}");
            return log_in_form(username, Some(INTERNAL_ERROR_MSG)).into_response();
        }
    };

    let is_password_valid = match user.password_hash.verify(&user_data.password) {
        Ok(is_password_valid) => is_password_valid,
        Err(error) => {
            tracing::error!("Unhandled error while verifying credentials: {error}");
            return log_in_form(username, Some(INTERNAL_ERROR_MSG)).into_response();
        }
    };

    if !is_password_valid {
        return log_in_form(username, Some(INVALID_CREDENTIALS_ERROR_MSG)).into_response();
    }

    let token = SessionToken {
        user_id: user.id,
        username: user.username,
        role: user.role,
        last_activity: OffsetDateTime::now_utc(),
    };

    set_session_cookie(jar.clone(), &token)
        .map(|updated_jar| {
            (
                StatusCode::SEE_OTHER,
                HxRedirect(landing_page(token.role).to_owned()),
                updated_jar,
            )
        })
        .map_err(|err| {
            tracing::error!("Error setting session cookie: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                HxRedirect(endpoints::INTERNAL_ERROR_VIEW.to_owned()),
                invalidate_session_cookie(jar),
            )
        })
        .into_response()
}

/// The raw data entered by the user in the log-in form.
///
/// The username and password are stored as plain strings. There is no need for validation here
/// since they will be compared against the user table, which has been validated.
#[derive(Clone, Serialize, Deserialize)]
pub struct LogInData {
    /// Username entered during log-in.
    pub username: String,
    /// Password entered during log-in.
    pub password: String,
}

#[cfg(test)]
mod log_in_page_tests {
    use axum_extra::extract::{PrivateCookieJar, cookie::Key};
    use sha2::{Digest, Sha512};

    use crate::{
        endpoints,
        session::{COOKIE_FLASH, FlashMessage, set_flash},
        test_utils::{
            assert_content_type, assert_form_input, assert_form_submit_button_with_text,
            assert_hx_endpoint, assert_status_ok, assert_valid_html, must_get_form,
            parse_html_document, resend_cookies,
        },
    };

    use super::get_log_in_page;

    fn get_key() -> Key {
        Key::from(&Sha512::digest(b"log in"))
    }

    #[tokio::test]
    async fn log_in_page_displays_form() {
        let response = get_log_in_page(PrivateCookieJar::new(get_key())).await;

        assert_status_ok(&response);
        assert_content_type(&response, "text/html; charset=utf-8");

        let document = parse_html_document(response).await;
        assert_valid_html(&document);

        let form = must_get_form(&document);
        assert_hx_endpoint(&form, endpoints::LOG_IN_API, "hx-post");
        assert_form_input(&form, "username", "text");
        assert_form_input(&form, "password", "password");
        assert_form_submit_button_with_text(&form, "Log in");
    }

    #[tokio::test]
    async fn log_in_page_shows_and_clears_flash() {
        let jar = set_flash(
            PrivateCookieJar::new(get_key()),
            &FlashMessage::error("Access denied."),
        )
        .unwrap();

        let response = get_log_in_page(resend_cookies(jar, get_key())).await;

        let set_cookie = response
            .headers()
            .get_all("set-cookie")
            .iter()
            .map(|value| value.to_str().unwrap().to_owned())
            .collect::<Vec<_>>();
        assert!(
            set_cookie
                .iter()
                .any(|cookie| cookie.starts_with(&format!("{COOKIE_FLASH}="))),
            "want the flash cookie to be cleared, got {set_cookie:?}"
        );

        let document = parse_html_document(response).await;
        assert_valid_html(&document);
        let alert = document
            .select(&scraper::Selector::parse("#flash-message").unwrap())
            .next()
            .expect("no flash message shown");
        assert_eq!(alert.text().collect::<String>(), "Access denied.");
    }
}
