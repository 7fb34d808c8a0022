//! Sessions for logged in users: the encrypted cookie, one-time flash
//! messages and the access gate for admin pages.

mod cookie;
mod flash;
mod gate;
mod token;

pub(crate) use cookie::{
    COOKIE_SESSION, get_session_from_cookies, invalidate_session_cookie, set_session_cookie,
};
pub(crate) use flash::{COOKIE_FLASH, set_flash, take_flash};
pub use flash::{FlashLevel, FlashMessage};
pub use gate::{CurrentUser, DEFAULT_SESSION_IDLE_TIMEOUT, admin_guard};
#[cfg(test)]
pub(crate) use gate::ADMIN_ONLY_MESSAGE;
pub use token::SessionToken;
