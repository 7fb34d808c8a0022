//! Banners for the one-time flash messages queued by redirects.

use maud::{Markup, html};

use crate::session::{FlashLevel, FlashMessage};

fn alert_style(level: FlashLevel) -> &'static str {
    match level {
        FlashLevel::Success => {
            "p-4 mb-4 text-sm text-green-800 rounded-lg bg-green-50 \
            dark:bg-gray-800 dark:text-green-400"
        }
        FlashLevel::Error => {
            "p-4 mb-4 text-sm text-red-800 rounded-lg bg-red-50 \
            dark:bg-gray-800 dark:text-red-400"
        }
    }
}

/// Render `flash` as a banner, or nothing if there is no message.
pub fn flash_alert(flash: Option<&FlashMessage>) -> Markup {
    html! {
        @if let Some(flash) = flash {
            div
                id="flash-message"
                role="alert"
                class=(alert_style(flash.level))
            {
                (flash.message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use crate::session::FlashMessage;

    use super::flash_alert;

    #[test]
    fn renders_nothing_without_message() {
        assert_eq!(flash_alert(None).into_string(), "");
    }

    #[test]
    fn renders_error_message() {
        let flash = FlashMessage::error("Access denied.");

        let html = Html::parse_fragment(&flash_alert(Some(&flash)).into_string());

        let alert = html
            .select(&Selector::parse("#flash-message[role=alert]").unwrap())
            .next()
            .expect("no alert rendered");
        assert_eq!(alert.text().collect::<String>(), "Access denied.");
        assert!(alert.value().attr("class").unwrap().contains("text-red-800"));
    }

    #[test]
    fn renders_success_message_in_green() {
        let flash = FlashMessage::success("You have been logged out.");

        let html = flash_alert(Some(&flash)).into_string();

        assert!(html.contains("text-green-800"));
        assert!(html.contains("You have been logged out."));
    }
}
