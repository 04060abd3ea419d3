//! Resume endpoints.

use crate::client::ApiClient;
use crate::error::Result;
use crate::types::UploadFile;
use reqwest::multipart::{Form, Part};
use reqwest::Method;
use resumecheck_core::validation::validate_upload;
use resumecheck_core::{Resume, ResumeId};
use tracing::{debug, info};

/// Multipart field the server reads the document from
pub const UPLOAD_FIELD: &str = "resume";

/// Endpoints for the signed-in user's own resumes.
pub struct ResumeApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ResumeApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `POST /resume/upload`
    ///
    /// The file is validated first; an invalid file never reaches the network.
    pub async fn upload(&self, file: UploadFile) -> Result<Resume> {
        validate_upload(&file.candidate())?;

        debug!(
            file = %file.file_name,
            size = file.size(),
            mime = %file.mime_type,
            "Uploading resume"
        );

        let part = Part::bytes(file.bytes)
            .file_name(file.file_name)
            .mime_str(&file.mime_type)?;
        let form = Form::new().part(UPLOAD_FIELD, part);

        let resume: Resume = self
            .client
            .fetch(self.client.request(Method::POST, "/resume/upload").multipart(form))
            .await?;

        info!(resume_id = %resume.id, score = resume.score, "Resume analyzed");
        Ok(resume)
    }

    /// `GET /resume/my`
    pub async fn list_mine(&self) -> Result<Vec<Resume>> {
        self.client
            .fetch(self.client.request(Method::GET, "/resume/my"))
            .await
    }

    /// `GET /resume/{id}`
    pub async fn get(&self, id: &ResumeId) -> Result<Resume> {
        self.client
            .fetch(self.client.request(Method::GET, &format!("/resume/{id}")))
            .await
    }

    /// `DELETE /resume/{id}`
    pub async fn delete(&self, id: &ResumeId) -> Result<()> {
        self.client
            .execute(self.client.request(Method::DELETE, &format!("/resume/{id}")))
            .await?;

        info!(resume_id = %id, "Resume deleted");
        Ok(())
    }
}
