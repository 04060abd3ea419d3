//! Admin panel
//!
//! Users and resumes are fetched concurrently and kept independently: if one
//! list fails the other is still shown alongside the error banner.

use std::fmt::{self, Write};
use std::str::FromStr;

use resumecheck_client::{ApiClient, ApiError};
use resumecheck_core::format::short_date;
use resumecheck_core::stats::{admin_stats, filter_resumes, filter_users, AdminStats};
use resumecheck_core::{Resume, User, UserId};
use tracing::{error, warn};

use crate::components::Loader;
use crate::router::{redirect_for, Route};

pub const LOAD_FAILED: &str = "Failed to load admin data. Please try again.";
pub const DELETE_FAILED: &str = "Failed to delete user";
pub const ADMIN_NOT_DELETABLE: &str = "Admin accounts cannot be deleted";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AdminTab {
    #[default]
    Users,
    Resumes,
}

impl AdminTab {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdminTab::Users => "users",
            AdminTab::Resumes => "resumes",
        }
    }
}

impl FromStr for AdminTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "users" => Ok(AdminTab::Users),
            "resumes" => Ok(AdminTab::Resumes),
            _ => Err(format!("unknown admin tab: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AdminPage {
    users: Vec<User>,
    resumes: Vec<Resume>,
    loading: bool,
    error: Option<String>,
    active_tab: AdminTab,
    search_term: String,
}

impl AdminPage {
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn resumes(&self) -> &[Resume] {
        &self.resumes
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn active_tab(&self) -> AdminTab {
        self.active_tab
    }

    pub fn set_tab(&mut self, tab: AdminTab) {
        self.active_tab = tab;
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn stats(&self) -> AdminStats {
        admin_stats(&self.users, &self.resumes)
    }

    pub fn filtered_users(&self) -> Vec<&User> {
        filter_users(&self.users, &self.search_term)
    }

    pub fn filtered_resumes(&self) -> Vec<&Resume> {
        filter_resumes(&self.resumes, &self.search_term)
    }

    /// Fetch both lists concurrently.
    ///
    /// An expired session wins over a forbidden one when both lists fail.
    pub async fn load(&mut self, client: &ApiClient) -> Option<Route> {
        self.loading = true;
        self.error = None;

        let admin = client.admin();
        let (users, resumes) = tokio::join!(admin.list_users(), admin.list_resumes());
        self.loading = false;

        let mut failures: Vec<ApiError> = Vec::new();
        match users {
            Ok(users) => self.users = users,
            Err(e) => failures.push(e),
        }
        match resumes {
            Ok(resumes) => self.resumes = resumes,
            Err(e) => failures.push(e),
        }

        if failures.is_empty() {
            return None;
        }

        for failure in &failures {
            error!(error = %failure, "Error fetching admin data");
        }

        if failures.iter().any(ApiError::is_auth_expired) {
            return Some(Route::Login);
        }
        if let Some(redirect) = failures.iter().find_map(redirect_for) {
            return Some(redirect);
        }

        self.error = Some(LOAD_FAILED.to_string());
        None
    }

    /// Delete a user and drop their resumes from the loaded list.
    pub async fn delete_user(&mut self, client: &ApiClient, id: &UserId) -> Option<Route> {
        if self.users.iter().any(|u| &u.id == id && u.is_admin()) {
            warn!(user_id = %id, "Refusing to delete an admin account");
            self.error = Some(ADMIN_NOT_DELETABLE.to_string());
            return None;
        }

        match client.admin().delete_user(id).await {
            Ok(()) => {
                self.users.retain(|user| &user.id != id);
                self.resumes.retain(|resume| !resume.is_owned_by(id));
                None
            }
            Err(e) => {
                error!(error = %e, user_id = %id, "Delete user error");
                let redirect = redirect_for(&e);
                if redirect.is_none() {
                    self.error = Some(DELETE_FAILED.to_string());
                }
                redirect
            }
        }
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    pub fn render(&self) -> Result<String, fmt::Error> {
        let mut out = String::new();

        if self.loading {
            writeln!(out, "{}", Loader::new("Loading admin panel..."))?;
            return Ok(out);
        }

        let stats = self.stats();
        writeln!(out, "Admin Panel")?;
        writeln!(out, "Manage users and resumes")?;
        writeln!(
            out,
            "  Users: {}  Resumes: {}  Avg Score: {}%  Admins: {}",
            stats.total_users, stats.total_resumes, stats.average_score, stats.admin_users
        )?;
        writeln!(out)?;

        if !self.search_term.is_empty() {
            writeln!(out, "🔍 {}", self.search_term)?;
        }
        let tab = |tab: AdminTab, label: String| {
            if tab == self.active_tab {
                format!("[{label}]")
            } else {
                label
            }
        };
        writeln!(
            out,
            "{}  {}",
            tab(AdminTab::Users, format!("Users ({})", self.users.len())),
            tab(AdminTab::Resumes, format!("Resumes ({})", self.resumes.len()))
        )?;

        if let Some(error) = &self.error {
            writeln!(out, "! {error}")?;
        }
        writeln!(out)?;

        match self.active_tab {
            AdminTab::Users => self.render_users(&mut out)?,
            AdminTab::Resumes => self.render_resumes(&mut out)?,
        }

        writeln!(out)?;
        let last_upload = self
            .resumes
            .first()
            .map_or_else(|| "No resumes yet".to_string(), |r| short_date(&r.uploaded_at));
        writeln!(out, "Recent Activity: last resume uploaded {last_upload}")?;

        Ok(out)
    }

    fn render_users(&self, out: &mut String) -> fmt::Result {
        let users = self.filtered_users();
        writeln!(out, "All Users ({})", plural(users.len(), "user"))?;

        if users.is_empty() {
            return writeln!(out, "  No users found");
        }

        for user in users {
            let badge = if user.is_admin() { " [Admin]" } else { "" };
            writeln!(
                out,
                "  #{}  {}{badge}  {}  {}  joined {}",
                user.id,
                user.name,
                user.email,
                user.role,
                short_date(&user.created_at)
            )?;
            if !user.is_admin() {
                writeln!(out, "      Delete: resumecheck delete-user {}", user.id)?;
            }
        }
        Ok(())
    }

    fn render_resumes(&self, out: &mut String) -> fmt::Result {
        let resumes = self.filtered_resumes();
        writeln!(out, "All Resumes ({})", plural(resumes.len(), "resume"))?;

        if resumes.is_empty() {
            return writeln!(out, "  No resumes found");
        }

        for resume in resumes {
            let owner = resume
                .user
                .as_ref()
                .map_or_else(String::new, |u| format!("{} <{}>", u.name, u.email));
            writeln!(
                out,
                "  #{}  {owner}  📄 {}  {}% [{}]  {} keywords  {}",
                resume.id,
                resume.file_name,
                resume.score,
                resume.tier().css_class(),
                resume.analysis.details.skills_found,
                short_date(&resume.uploaded_at)
            )?;
        }
        Ok(())
    }
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
