//! The landing page. Expired sessions are sent here with a flash message.

use axum::response::{IntoResponse, Response};
use axum_extra::extract::PrivateCookieJar;
use maud::html;

use crate::{
    alert::flash_alert,
    endpoints,
    html::{APP_NAME, PAGE_CONTAINER_STYLE, base, link},
    session::{get_session_from_cookies, take_flash},
};

/// Display the landing page, along with any message queued by a redirect.
pub async fn get_home_page(jar: PrivateCookieJar) -> Response {
    let (jar, flash) = take_flash(jar);
    let session = get_session_from_cookies(&jar);

    let content = html! {
        div class=(PAGE_CONTAINER_STYLE)
        {
            div class="w-full max-w-md"
            {
                (flash_alert(flash.as_ref()))

                h1 class="mb-4 text-3xl font-bold" { (APP_NAME) }

                @if let Some(session) = session {
                    p class="mb-2" { "Signed in as " strong { (session.username) } "." }
                    p class="mb-2" { (link(endpoints::REPORTS_VIEW, "Go to reports")) }
                    p { (link(endpoints::LOG_OUT, "Log out")) }
                } @else {
                    p { (link(endpoints::LOG_IN_VIEW, "Log in")) " to continue." }
                }
            }
        }
    };

    (jar, base("Home", &[], &content)).into_response()
}
