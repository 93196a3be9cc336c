use hautai::client::HautAISettings;

use super::env::{EnvSource, optional, string_or};

const DEFAULT_API_URL: &str = "https://saas.haut.ai";

/// Environment variables:
/// - HAUTAI_API_URL (default: "https://saas.haut.ai")
/// - HAUTAI_API_KEY + HAUTAI_COMPANY_ID: static session, skips login
/// - HAUTAI_DATASET_ID, falling back to HAUTAI_BATCH_ID
/// - HAUTAI_USERNAME + HAUTAI_PASSWORD: login credentials
pub fn hautai_settings(source: EnvSource) -> HautAISettings {
    HautAISettings {
        base_url: string_or(source, "HAUTAI_API_URL", DEFAULT_API_URL),
        api_key: optional(source, "HAUTAI_API_KEY"),
        company_id: optional(source, "HAUTAI_COMPANY_ID"),
        dataset_id: optional(source, "HAUTAI_DATASET_ID")
            .or_else(|| optional(source, "HAUTAI_BATCH_ID")),
        username: optional(source, "HAUTAI_USERNAME"),
        password: optional(source, "HAUTAI_PASSWORD"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::env::map_source;

    #[test]
    fn should_fall_back_to_batch_id_for_dataset() {
        let settings = hautai_settings(&map_source(&[("HAUTAI_BATCH_ID", "ds-legacy")]));

        assert_eq!(settings.dataset_id.as_deref(), Some("ds-legacy"));
        assert_eq!(settings.base_url, DEFAULT_API_URL);
    }

    #[test]
    fn should_prefer_dataset_id() {
        let settings = hautai_settings(&map_source(&[
            ("HAUTAI_DATASET_ID", "ds-1"),
            ("HAUTAI_BATCH_ID", "ds-legacy"),
        ]));

        assert_eq!(settings.dataset_id.as_deref(), Some("ds-1"));
    }
}
