/// Top navigation bar
use std::fmt;

use resumecheck_core::SessionContext;

use crate::router::Route;

pub const BRAND: &str = "ResumeCheck Pro";

/// One entry in the bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavItem {
    Link { label: &'static str, route: Route },
    /// Signed-in user's name and role
    Account { name: String, role: String },
    Logout,
}

/// Navigation bar for the current session.
///
/// Keyed on the token alone, so a token with an unreadable user record still
/// shows the signed-in links with placeholder name and role.
#[derive(Debug, Clone)]
pub struct Navbar {
    items: Vec<NavItem>,
}

impl Navbar {
    pub fn new(session: &SessionContext) -> Self {
        let mut items = Vec::new();

        if session.has_token() {
            items.push(NavItem::Link {
                label: "Dashboard",
                route: Route::Dashboard,
            });
            if session.is_admin() {
                items.push(NavItem::Link {
                    label: "Admin",
                    route: Route::Admin,
                });
            }
            items.push(NavItem::Account {
                name: session
                    .user
                    .as_ref()
                    .map_or_else(|| "User".to_string(), |u| u.name.clone()),
                role: session
                    .user
                    .as_ref()
                    .map_or_else(|| "user".to_string(), |u| u.role.to_string()),
            });
            items.push(NavItem::Logout);
        } else {
            items.push(NavItem::Link {
                label: "Login",
                route: Route::Login,
            });
            items.push(NavItem::Link {
                label: "Get Started",
                route: Route::Register,
            });
        }

        Self { items }
    }

    pub fn items(&self) -> &[NavItem] {
        &self.items
    }
}

impl fmt::Display for Navbar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{BRAND}")?;
        for item in &self.items {
            match item {
                NavItem::Link { label, route } => write!(f, "  |  {label} ({route})")?,
                NavItem::Account { name, role } => write!(f, "  |  {name} [{role}]")?,
                NavItem::Logout => f.write_str("  |  Logout")?,
            }
        }
        Ok(())
    }
}
