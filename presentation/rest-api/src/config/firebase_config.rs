use super::env::{EnvSource, optional, string_or};

const DEFAULT_PROJECT_ID: &str = "bloomskinai-412aa";

#[derive(Debug, Clone)]
pub struct FirebaseConfig {
    pub project_id: String,
    pub storage_bucket: String,
    /// Path of the service account file. Only reported at startup.
    pub credentials_path: Option<String>,
}

impl FirebaseConfig {
    pub fn from_source(source: EnvSource) -> Self {
        let project_id = string_or(source, "FIREBASE_PROJECT_ID", DEFAULT_PROJECT_ID);
        let storage_bucket = optional(source, "FIREBASE_STORAGE_BUCKET")
            .unwrap_or_else(|| format!("{}.appspot.com", project_id));

        Self {
            project_id,
            storage_bucket,
            credentials_path: optional(source, "GOOGLE_APPLICATION_CREDENTIALS"),
        }
    }

    pub fn credential_source(&self) -> &str {
        match self.credentials_path {
            Some(_) => "service account file",
            None => "application default credentials",
        }
    }
}
