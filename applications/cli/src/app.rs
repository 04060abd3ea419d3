//! Application shell
//!
//! Owns the API client and the render boundary. Every command mounts a route
//! from a fresh session snapshot, lets the page load, follows any redirect the
//! load asks for and renders the page that finally sticks.

use std::fmt;
use std::path::Path;

use resumecheck_client::{ApiClient, ClientConfig, UploadFile};
use resumecheck_core::validation::{LoginForm, RegisterForm};
use resumecheck_core::{ReportTab, ResumeId, UserId};
use resumecheck_storage::SessionStore;
use tracing::{debug, info, warn};

use crate::components::{ErrorBoundary, Loader, LoaderSize, Navbar, ScoreCircle};
use crate::config::AppConfig;
use crate::error::{AppError, Result};
use crate::pages::{
    AdminPage, AdminTab, DashboardPage, HomePage, LoginPage, RegisterPage, ReportPage,
};
use crate::router::{resolve, Route, MAX_REDIRECTS};

/// One rendered page
#[derive(Debug)]
pub struct Screen {
    pub route: Route,
    pub body: String,
    /// Report gauge, left for the caller to draw or animate
    pub gauge: Option<ScoreCircle>,
}

/// A mounted page
#[derive(Debug)]
pub enum View {
    Home(HomePage),
    Login(LoginPage),
    Register(RegisterPage),
    Dashboard(DashboardPage),
    Report(ReportPage),
    Admin(AdminPage),
}

impl View {
    pub fn route(&self) -> Route {
        match self {
            View::Home(_) => Route::Home,
            View::Login(_) => Route::Login,
            View::Register(_) => Route::Register,
            View::Dashboard(_) => Route::Dashboard,
            View::Report(page) => Route::Report(page.id().clone()),
            View::Admin(_) => Route::Admin,
        }
    }

    pub fn render(&self) -> std::result::Result<String, fmt::Error> {
        match self {
            View::Home(page) => page.render(),
            View::Login(page) => page.render(),
            View::Register(page) => page.render(),
            View::Dashboard(page) => page.render(),
            View::Report(page) => page.render(),
            View::Admin(page) => page.render(),
        }
    }

    pub fn score_circle(&self) -> Option<ScoreCircle> {
        match self {
            View::Report(page) => page.score_circle(),
            _ => None,
        }
    }
}

pub struct App {
    client: ApiClient,
    animate: bool,
    show_progress: bool,
    boundary: ErrorBoundary,
}

impl App {
    pub fn new(client: ApiClient, animate: bool) -> Self {
        Self {
            client,
            animate,
            show_progress: false,
            boundary: ErrorBoundary::new(),
        }
    }

    /// Build the app from configuration. `ephemeral` keeps the session in
    /// memory for this run only.
    pub async fn from_config(config: &AppConfig, ephemeral: bool) -> Result<Self> {
        config.validate()?;

        let session = if ephemeral {
            debug!("Using in-memory session store");
            SessionStore::in_memory()
        } else {
            ensure_parent_dir(&config.storage.path)?;
            SessionStore::open(&config.storage.path).await?
        };

        let client = ApiClient::new(ClientConfig::new(config.api.url.clone()), session)?;
        info!(api_url = %client.base_url(), "ResumeCheck client ready");

        Ok(Self::new(client, config.ui.animate))
    }

    /// Print a loader line to stderr while pages fetch
    pub fn with_progress(mut self, enabled: bool) -> Self {
        self.show_progress = enabled;
        self
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Navigate to a path and render whatever ends up mounted
    pub async fn open(&mut self, path: &str) -> Screen {
        let view = self.mount(path).await;
        self.screen(view).await
    }

    /// Refresh: clear a caught render failure and mount the path again
    pub async fn reload(&mut self, path: &str) -> Screen {
        self.boundary.reset();
        self.open(path).await
    }

    // =========================================================================
    // Commands
    // =========================================================================

    pub async fn login(&mut self, form: LoginForm) -> Screen {
        let mut page = match self.mount(&Route::Login.path()).await {
            View::Login(page) => page,
            other => return self.screen(other).await,
        };

        page.form = form;
        match page.submit(&self.client).await {
            Some(next) => self.open(&next.path()).await,
            None => self.screen(View::Login(page)).await,
        }
    }

    pub async fn register(&mut self, form: RegisterForm) -> Screen {
        let mut page = match self.mount(&Route::Register.path()).await {
            View::Register(page) => page,
            other => return self.screen(other).await,
        };

        page.form = form;
        match page.submit(&self.client).await {
            Some(next) => self.open(&next.path()).await,
            None => self.screen(View::Register(page)).await,
        }
    }

    pub async fn logout(&mut self) -> Screen {
        self.client.logout().await;
        self.open(&Route::Login.path()).await
    }

    /// Upload through the dashboard's modal
    pub async fn upload(&mut self, file: UploadFile) -> Screen {
        let mut page = match self.mount(&Route::Dashboard.path()).await {
            View::Dashboard(page) => page,
            other => return self.screen(other).await,
        };

        page.open_upload_modal();
        if page.select_file(file) {
            self.progress("Analyzing...");
            if let Some(next) = page.upload(&self.client).await {
                return self.open(&next.path()).await;
            }
        }
        self.screen(View::Dashboard(page)).await
    }

    /// Delete from the dashboard list
    pub async fn delete_resume(&mut self, id: &ResumeId) -> Screen {
        let mut page = match self.mount(&Route::Dashboard.path()).await {
            View::Dashboard(page) => page,
            other => return self.screen(other).await,
        };

        match page.delete(&self.client, id).await {
            Some(next) => self.open(&next.path()).await,
            None => self.screen(View::Dashboard(page)).await,
        }
    }

    pub async fn report(&mut self, id: &ResumeId, tab: ReportTab) -> Screen {
        let mut page = match self.mount(&Route::Report(id.clone()).path()).await {
            View::Report(page) => page,
            other => return self.screen(other).await,
        };

        page.set_tab(tab);
        self.screen(View::Report(page)).await
    }

    /// Delete from the open report, landing back on the dashboard
    pub async fn delete_from_report(&mut self, id: &ResumeId) -> Screen {
        let mut page = match self.mount(&Route::Report(id.clone()).path()).await {
            View::Report(page) => page,
            other => return self.screen(other).await,
        };

        match page.delete(&self.client).await {
            Some(next) => self.open(&next.path()).await,
            None => self.screen(View::Report(page)).await,
        }
    }

    pub async fn admin(&mut self, search: Option<&str>, tab: AdminTab) -> Screen {
        let mut page = match self.mount(&Route::Admin.path()).await {
            View::Admin(page) => page,
            other => return self.screen(other).await,
        };

        if let Some(term) = search {
            page.set_search(term);
        }
        page.set_tab(tab);
        self.screen(View::Admin(page)).await
    }

    pub async fn delete_user(&mut self, id: &UserId) -> Screen {
        let mut page = match self.mount(&Route::Admin.path()).await {
            View::Admin(page) => page,
            other => return self.screen(other).await,
        };

        match page.delete_user(&self.client, id).await {
            Some(next) => self.open(&next.path()).await,
            None => self.screen(View::Admin(page)).await,
        }
    }

    // =========================================================================
    // Mounting
    // =========================================================================

    /// Resolve guards against the current session and load the page. A load
    /// that asks for a redirect starts over from the new path.
    async fn mount(&self, path: &str) -> View {
        let mut path = path.to_string();

        for _ in 0..MAX_REDIRECTS {
            let session = self.client.session().snapshot().await;
            let route = resolve(&path, &session);

            match self.load(route).await {
                Ok(view) => return view,
                Err(next) => {
                    debug!(to = %next, "Page load redirected");
                    path = next.path();
                }
            }
        }

        warn!(path = %path, "Too many redirects while loading, showing home");
        View::Home(HomePage::new())
    }

    async fn load(&self, route: Route) -> std::result::Result<View, Route> {
        let view = match route {
            Route::Home => View::Home(HomePage::new()),
            Route::Login => View::Login(LoginPage::new()),
            Route::Register => View::Register(RegisterPage::new()),
            Route::Dashboard => {
                self.progress("Loading your dashboard...");
                let mut page = DashboardPage::new();
                if let Some(next) = page.load(&self.client).await {
                    return Err(next);
                }
                View::Dashboard(page)
            }
            Route::Report(id) => {
                self.progress("Loading report...");
                let mut page = ReportPage::new(id, self.animate);
                if let Some(next) = page.load(&self.client).await {
                    return Err(next);
                }
                View::Report(page)
            }
            Route::Admin => {
                self.progress("Loading admin panel...");
                let mut page = AdminPage::new();
                if let Some(next) = page.load(&self.client).await {
                    return Err(next);
                }
                View::Admin(page)
            }
        };
        Ok(view)
    }

    async fn screen(&mut self, view: View) -> Screen {
        let route = view.route();
        let mut body = String::new();

        if route.shows_navbar() {
            let session = self.client.session().snapshot().await;
            body.push_str(&Navbar::new(&session).to_string());
            body.push('\n');
        }

        body.push_str(&self.boundary.render(|| view.render()));
        let gauge = if self.boundary.has_error() {
            None
        } else {
            view.score_circle()
        };

        Screen { route, body, gauge }
    }

    fn progress(&self, message: &str) {
        if self.show_progress {
            eprintln!("{}", Loader::new(message).with_size(LoaderSize::Small));
        }
    }
}

/// Create the directory holding a file-backed `SQLite` database
fn ensure_parent_dir(database_url: &str) -> Result<()> {
    let Some(file) = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))
    else {
        return Ok(());
    };

    let file = file.split('?').next().unwrap_or_default();
    if file.is_empty() || file == ":memory:" {
        return Ok(());
    }

    if let Some(parent) = Path::new(file).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::Config(format!(
                    "Failed to create database directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }
    Ok(())
}
