//! Resume dashboard
//!
//! Holds the signed-in user's resumes and the upload modal state. Stats are
//! folded from the loaded list on every render.

use std::fmt::{self, Write};

use resumecheck_client::{ApiClient, ApiError, UploadFile};
use resumecheck_core::stats::{dashboard_stats, DashboardStats};
use resumecheck_core::validation::validate_upload;
use resumecheck_core::{Resume, ResumeId, ValidationError};
use tracing::{error, info};

use crate::components::{Loader, ResumeCard};
use crate::router::{redirect_for, Route};

pub const LOAD_FAILED: &str = "Failed to load resumes. Please try again.";
pub const UPLOAD_FAILED: &str = "Upload failed. Please try again.";
pub const DELETE_FAILED: &str = "Failed to delete resume";

/// Drag-and-drop events over the upload area
#[derive(Debug, Clone)]
pub enum DragEvent {
    Enter,
    Over,
    Leave,
    /// Drop, with the first dropped file if there was one
    Drop(Option<UploadFile>),
}

#[derive(Debug, Clone, Default)]
pub struct DashboardPage {
    resumes: Vec<Resume>,
    loading: bool,
    uploading: bool,
    error: Option<String>,
    drag_active: bool,
    show_upload_modal: bool,
    selected: Option<UploadFile>,
}

impl DashboardPage {
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    pub fn resumes(&self) -> &[Resume] {
        &self.resumes
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_uploading(&self) -> bool {
        self.uploading
    }

    pub fn drag_active(&self) -> bool {
        self.drag_active
    }

    pub fn selected_file(&self) -> Option<&UploadFile> {
        self.selected.as_ref()
    }

    pub fn stats(&self) -> Option<DashboardStats> {
        dashboard_stats(&self.resumes)
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Fetch the list. Returns a redirect when the session is no longer valid.
    pub async fn load(&mut self, client: &ApiClient) -> Option<Route> {
        self.loading = true;
        let result = client.resumes().list_mine().await;
        self.loading = false;

        match result {
            Ok(resumes) => {
                self.resumes = resumes;
                None
            }
            Err(e) => {
                error!(error = %e, "Error fetching resumes");
                let redirect = redirect_for(&e);
                if redirect.is_none() {
                    self.error = Some(LOAD_FAILED.to_string());
                }
                redirect
            }
        }
    }

    // =========================================================================
    // Upload modal
    // =========================================================================

    pub fn open_upload_modal(&mut self) {
        self.show_upload_modal = true;
    }

    /// Ignored while an upload is in flight
    pub fn close_upload_modal(&mut self) {
        if !self.uploading {
            self.show_upload_modal = false;
        }
    }

    pub fn handle_drag(&mut self, event: DragEvent) {
        match event {
            DragEvent::Enter | DragEvent::Over => self.drag_active = true,
            DragEvent::Leave => self.drag_active = false,
            DragEvent::Drop(file) => {
                self.drag_active = false;
                if let Some(file) = file {
                    self.select_file(file);
                }
            }
        }
    }

    /// Validate and select a file. An invalid file leaves the previous
    /// selection in place and sets the error.
    pub fn select_file(&mut self, file: UploadFile) -> bool {
        match validate_upload(&file.candidate()) {
            Ok(()) => {
                self.selected = Some(file);
                self.error = None;
                true
            }
            Err(e) => {
                self.error = Some(e.to_string());
                false
            }
        }
    }

    pub fn clear_selection(&mut self) {
        if !self.uploading {
            self.selected = None;
        }
    }

    /// Upload the selected file. On success the new resume goes to the top
    /// of the list and the modal closes.
    pub async fn upload(&mut self, client: &ApiClient) -> Option<Route> {
        let Some(file) = self.selected.clone() else {
            self.error = Some(ValidationError::NoFileSelected.to_string());
            return None;
        };

        self.uploading = true;
        self.error = None;
        let result = client.resumes().upload(file).await;
        self.uploading = false;

        match result {
            Ok(resume) => {
                info!(resume_id = %resume.id, "Resume added to dashboard");
                self.resumes.insert(0, resume);
                self.show_upload_modal = false;
                self.selected = None;
                None
            }
            Err(e) => {
                error!(error = %e, "Upload error");
                let redirect = redirect_for(&e);
                if redirect.is_none() {
                    self.error = Some(upload_error_message(&e));
                }
                redirect
            }
        }
    }

    pub async fn delete(&mut self, client: &ApiClient, id: &ResumeId) -> Option<Route> {
        match client.resumes().delete(id).await {
            Ok(()) => {
                self.resumes.retain(|resume| &resume.id != id);
                None
            }
            Err(e) => {
                error!(error = %e, resume_id = %id, "Delete error");
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

        if self.loading && self.resumes.is_empty() {
            writeln!(out, "{}", Loader::new("Loading your dashboard..."))?;
            return Ok(out);
        }

        writeln!(out, "Resume Dashboard")?;
        writeln!(out, "Track and optimize your resume performance")?;
        writeln!(out)?;

        let stats = self.stats();
        let (average, best, keywords) = stats
            .as_ref()
            .map_or((0, 0.0, 0), |s| (s.average_score, s.best_score, s.total_keywords));
        writeln!(out, "  Average ATS Score: {average}%")?;
        writeln!(out, "  Best Score:        {best}%")?;
        writeln!(out, "  Total Resumes:     {}", self.resumes.len())?;
        writeln!(out, "  Keywords Found:    {keywords}")?;
        writeln!(out)?;

        let count = self.resumes.len();
        writeln!(
            out,
            "Your Resumes ({count} resume{} analyzed)",
            if count == 1 { "" } else { "s" }
        )?;

        if let Some(error) = &self.error {
            if !self.show_upload_modal {
                writeln!(out, "! {error}")?;
            }
        }

        if self.resumes.is_empty() {
            writeln!(out, "  No Resumes Yet")?;
            writeln!(
                out,
                "  Upload your first resume to get ATS scoring and optimization suggestions."
            )?;
            writeln!(out, "  Upload Your First Resume: resumecheck upload <file>")?;
        } else {
            for resume in &self.resumes {
                writeln!(out, "{}", ResumeCard::new(resume))?;
            }
        }

        if self.show_upload_modal {
            self.render_upload_modal(&mut out)?;
        }

        Ok(out)
    }

    fn render_upload_modal(&self, out: &mut String) -> fmt::Result {
        writeln!(out)?;
        writeln!(out, "Upload Resume")?;
        match &self.selected {
            Some(file) => writeln!(
                out,
                "  📄 {} ({:.2} MB)",
                file.file_name,
                file.size() as f64 / 1024.0 / 1024.0
            )?,
            None => {
                let prompt = if self.drag_active {
                    "Release to drop your resume"
                } else {
                    "Drop your resume here"
                };
                writeln!(out, "  {prompt}")?;
                writeln!(out, "  Supports PDF, DOC, DOCX • Max 5MB")?;
            }
        }
        if let Some(error) = &self.error {
            writeln!(out, "  ! {error}")?;
        }
        if self.uploading {
            writeln!(out, "  Analyzing...")?;
        }
        Ok(())
    }
}

fn upload_error_message(error: &ApiError) -> String {
    match error {
        ApiError::Validation(e) => e.to_string(),
        other => other
            .server_message()
            .map_or_else(|| UPLOAD_FAILED.to_string(), str::to_string),
    }
}
