//! One-time messages that survive a single redirect.
//!
//! The message is written to its own private cookie so it outlives a
//! destroyed session, and is removed by the first page that shows it.

use axum_extra::extract::PrivateCookieJar;
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    session::cookie::{build_cookie, expire_cookie},
};

pub(crate) const COOKIE_FLASH: &str = "flash";

/// How a flash message should be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    /// Something the user asked for worked.
    Success,
    /// The user was turned away or something failed.
    Error,
}

/// A message to show on the next page the user sees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashMessage {
    /// Controls the styling of the message.
    pub level: FlashLevel,
    /// The text shown to the user.
    pub message: String,
}

impl FlashMessage {
    /// An error message.
    pub fn error(message: &str) -> Self {
        Self {
            level: FlashLevel::Error,
            message: message.to_owned(),
        }
    }

    /// A success message.
    pub fn success(message: &str) -> Self {
        Self {
            level: FlashLevel::Success,
            message: message.to_owned(),
        }
    }
}

/// Queue `flash` for the next page. Replaces any message already queued.
///
/// # Errors
///
/// Returns [Error::SessionCookieError] if the message cannot be serialized.
pub(crate) fn set_flash(
    jar: PrivateCookieJar,
    flash: &FlashMessage,
) -> Result<PrivateCookieJar, Error> {
    let value = serde_json::to_string(flash)
        .map_err(|error| Error::SessionCookieError(error.to_string()))?;

    Ok(jar.add(build_cookie(COOKIE_FLASH, value)))
}

/// Remove the queued flash message from `jar` and return it.
///
/// The returned jar must be sent with the response so the client drops
/// the cookie.
pub(crate) fn take_flash(jar: PrivateCookieJar) -> (PrivateCookieJar, Option<FlashMessage>) {
    let Some(cookie) = jar.get(COOKIE_FLASH) else {
        return (jar, None);
    };

    let flash = match serde_json::from_str(cookie.value_trimmed()) {
        Ok(flash) => Some(flash),
        Err(error) => {
            tracing::debug!("Dropping unreadable flash cookie: {error}");
            None
        }
    };

    (expire_cookie(jar, COOKIE_FLASH), flash)
}

#[cfg(test)]
mod flash_tests {
    use axum_extra::extract::{PrivateCookieJar, cookie::Key};
    use sha2::{Digest, Sha512};
    use time::{Duration, OffsetDateTime};

    use super::{COOKIE_FLASH, FlashLevel, FlashMessage, set_flash, take_flash};

    fn get_jar() -> PrivateCookieJar {
        PrivateCookieJar::new(Key::from(&Sha512::digest(b"flash")))
    }

    #[test]
    fn take_returns_queued_message() {
        let flash = FlashMessage::error("Your session has expired.");
        let jar = set_flash(get_jar(), &flash).unwrap();

        let (_, got) = take_flash(jar);

        assert_eq!(got, Some(flash));
    }

    #[test]
    fn take_removes_message() {
        let jar = set_flash(get_jar(), &FlashMessage::success("Saved")).unwrap();

        let (jar, _) = take_flash(jar);
        let cookie = jar.get(COOKIE_FLASH).unwrap();
        let (_, second) = take_flash(jar);

        assert_eq!(cookie.expires_datetime(), Some(OffsetDateTime::UNIX_EPOCH));
        assert_eq!(cookie.max_age(), Some(Duration::ZERO));
        assert_eq!(second, None);
    }

    #[test]
    fn take_on_empty_jar_leaves_it_alone() {
        let (jar, got) = take_flash(get_jar());

        assert_eq!(got, None);
        assert!(jar.get(COOKIE_FLASH).is_none());
    }

    #[test]
    fn later_message_replaces_earlier_one() {
        let jar = set_flash(get_jar(), &FlashMessage::success("first")).unwrap();
        let jar = set_flash(jar, &FlashMessage::error("second")).unwrap();

        let (_, got) = take_flash(jar);

        assert_eq!(got.map(|flash| flash.level), Some(FlashLevel::Error));
    }
}
