//! This file defines the top navigation bar and the admin sidebar.

use maud::{Markup, PreEscaped, html};

use crate::{endpoints, html::APP_NAME};

/// The id of the sidebar element, shared with the toggle script.
pub const SIDEBAR_ID: &str = "sidebar";

/// Template for a link in the sidebar.
///
/// It will change appearance if `is_current` is set to
/// `true`. Only one link should be set as active at any one time.
#[derive(Clone)]
struct Link<'a> {
    url: &'a str,
    title: &'a str,
    is_current: bool,
}

impl Link<'_> {
    fn into_html(self) -> Markup {
        let style = if self.is_current {
            "flex items-center px-3 py-2 rounded-lg text-white bg-blue-700
            dark:bg-blue-600"
        } else {
            "flex items-center px-3 py-2 rounded-lg text-gray-900 hover:bg-gray-100
            dark:text-white dark:hover:bg-gray-700"
        };

        html!(
            a
                href=(self.url)
                class=(style)
                aria-current=[self.is_current.then_some("page")]
            {
                (self.title)
            }
        )
    }
}

/// The admin menu listing the other modules of the billing system.
pub struct Sidebar<'a> {
    links: Vec<Link<'a>>,
}

impl Sidebar<'_> {
    /// Get the sidebar.
    ///
    /// If a link matches `active_endpoint`, then that link will be
    /// marked as active and displayed differently in the HTML.
    pub fn new(active_endpoint: &str) -> Sidebar<'_> {
        let links = [
            (endpoints::ADMIN_DASHBOARD, "Dashboard"),
            (endpoints::BUSINESSES, "Businesses"),
            (endpoints::PROPERTIES, "Properties"),
            (endpoints::BILLING, "Billing"),
            (endpoints::PAYMENTS, "Payments"),
            (endpoints::REPORTS_VIEW, "Reports"),
            (endpoints::USERS, "Users"),
            (endpoints::SETTINGS, "Settings"),
        ]
        .into_iter()
        .map(|(url, title)| Link {
            url,
            title,
            is_current: active_endpoint == url,
        })
        .collect();

        Sidebar { links }
    }

    pub fn into_html(self) -> Markup {
        html!(
            aside
                id=(SIDEBAR_ID)
                class="hidden lg:block w-64 shrink-0 bg-white border-r border-gray-200
                dark:bg-gray-800 dark:border-gray-700"
                aria-label="Sidebar"
            {
                ul class="space-y-1 p-4 font-medium"
                {
                    @for link in self.links {
                        li { (link.into_html()) }
                    }
                }
            }
        )
    }
}

/// The script behind the menu button in [NavBar], shows and hides the
/// sidebar on narrow screens.
pub fn sidebar_toggle_script() -> PreEscaped<String> {
    PreEscaped(format!(
        r#"
        document.addEventListener("DOMContentLoaded", () => {{
            const button = document.getElementById("sidebar-toggle");
            const sidebar = document.getElementById("{SIDEBAR_ID}");
            if (!button || !sidebar) return;
            button.addEventListener("click", () => sidebar.classList.toggle("hidden"));
        }});
        "#
    ))
}

/// The bar across the top of admin pages.
pub struct NavBar<'a> {
    /// The signed-in user's name.
    pub username: &'a str,
    /// Today's date as it should be displayed.
    pub date: &'a str,
}

impl NavBar<'_> {
    pub fn into_html(self) -> Markup {
        // Template adapted from https://flowbite.com/docs/components/navbar/#default-navbar
        html!(
            nav class="bg-white border-b border-gray-200 dark:bg-gray-900 dark:border-gray-700"
            {
                div class="flex flex-wrap items-center justify-between mx-auto p-4"
                {
                    div class="flex items-center gap-3"
                    {
                        button
                            id="sidebar-toggle"
                            type="button"
                            class="lg:hidden p-2 rounded-lg text-gray-500 hover:bg-gray-100
                            dark:text-gray-400 dark:hover:bg-gray-700"
                            aria-controls=(SIDEBAR_ID)
                        {
                            "Menu"
                        }

                        a href=(endpoints::ADMIN_DASHBOARD)
                            class="self-center text-2xl font-semibold whitespace-nowrap dark:text-white"
                        {
                            (APP_NAME)
                        }
                    }

                    div class="flex items-center gap-4 text-sm text-gray-700 dark:text-gray-300"
                    {
                        span id="current-date" { (self.date) }
                        span id="current-user" { "Signed in as " strong { (self.username) } }
                        a href=(endpoints::LOG_OUT)
                            class="text-blue-600 hover:underline dark:text-blue-500"
                        {
                            "Log out"
                        }
                    }
                }
            }
        )
    }
}
