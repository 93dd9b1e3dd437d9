//! Main app runner for one-shot generation

use std::env;
use std::path::Path;
use std::process::ExitCode;

use tracing::{debug, warn};

use crate::application::ports::{ConfigStore, HistoryRepository};
use crate::application::{CopyOutlineUseCase, GenerateSermonUseCase};
use crate::domain::config::AppConfig;
use crate::domain::history::HistoryItem;
use crate::domain::sermon::{GenerationRequest, GenerationResult, SermonForm};
use crate::infrastructure::{ArboardClipboard, JsonHistoryStore, MistralGenerator, XdgConfigStore};

use super::args::GenerateOptions;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

const MISSING_API_KEY: &str =
    "Missing API key. Set MISTRAL_API_KEY environment variable or run 'sermon-gen config set api_key <key>'";

/// Run one generation from the merged form and config
pub async fn run_generate(options: GenerateOptions, config: &AppConfig) -> ExitCode {
    let mut presenter = Presenter::new();

    let request = match options.form.validate() {
        Ok(request) => request,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    let api_key = config.api_key.clone().unwrap_or_default();
    let generator = MistralGenerator::new(api_key)
        .with_api_url(config.api_url_or_default())
        .with_model(config.model_or_default());
    let use_case = GenerateSermonUseCase::new(generator);

    if options.dry_run {
        presenter.output(use_case.preview(&request).content());
        return ExitCode::from(EXIT_SUCCESS);
    }

    if config.api_key.as_deref().map_or(true, str::is_empty) {
        presenter.error(MISSING_API_KEY);
        return ExitCode::from(EXIT_ERROR);
    }

    presenter.start_spinner(&format!(
        "Generating outline for \"{}\" ({} / {})...",
        request.topic(),
        request.structure(),
        request.audience()
    ));
    let result = use_case.execute(&request).await;

    if result.is_success() {
        presenter.spinner_success("Outline ready");
        if config.history_or_default() {
            save_history(&request, &result, &presenter).await;
        }
        if config.clipboard_or_default() {
            copy_outline(&result, &presenter).await;
        }
    } else {
        presenter.spinner_fail("Generation failed");
    }

    print_result(&result, options.json, &presenter);

    if result.is_success() {
        ExitCode::from(EXIT_SUCCESS)
    } else {
        ExitCode::from(EXIT_ERROR)
    }
}

fn print_result(result: &GenerationResult, json: bool, presenter: &Presenter) {
    if json {
        match serde_json::to_string_pretty(result) {
            Ok(text) => presenter.output(&text),
            Err(e) => presenter.error(&format!("Failed to encode result: {}", e)),
        }
        return;
    }

    match result.error() {
        None => presenter.output(result.content()),
        Some(message) => presenter.error(message),
    }
}

/// Keep a successful outline; a failed save only warns
async fn save_history(request: &GenerationRequest, result: &GenerationResult, presenter: &Presenter) {
    let Some(item) = HistoryItem::record(request, result.content()) else {
        return;
    };

    let store = JsonHistoryStore::new();
    match store.save(item).await {
        Ok(()) => debug!(path = %store.path().display(), "saved to history"),
        Err(e) => {
            warn!(error = %e, "history save failed");
            presenter.warn(&format!("Could not save to history: {}", e));
        }
    }
}

/// Copy a successful outline; a clipboard failure only warns
async fn copy_outline(result: &GenerationResult, presenter: &Presenter) {
    match CopyOutlineUseCase::new(ArboardClipboard::new()).execute(result).await {
        Ok(true) => presenter.info("Copied to clipboard"),
        Ok(false) => {}
        Err(e) => presenter.warn(&format!("Could not copy to clipboard: {}", e)),
    }
}

/// Read a JSON request file into a form
pub async fn load_request_form(path: &Path) -> Result<SermonForm, String> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| format!("Failed to read request file {}: {}", path.display(), e))?;

    SermonForm::from_json(&content)
        .map_err(|e| format!("Invalid request file {}: {}", path.display(), e))
}

/// Form pre-filled with the configured structure and audience
pub fn config_form(config: &AppConfig) -> SermonForm {
    SermonForm {
        structure: config.structure.clone(),
        audience: config.audience.clone(),
        ..Default::default()
    }
}

/// Read configuration from the environment
fn env_config() -> AppConfig {
    let var = |name: &str| env::var(name).ok().filter(|s| !s.is_empty());
    AppConfig {
        api_key: var("MISTRAL_API_KEY"),
        api_url: var("MISTRAL_API_URL"),
        model: var("MISTRAL_MODEL"),
        ..Default::default()
    }
}

/// Load and merge configuration from file, env, and CLI
pub async fn load_merged_config(cli_config: AppConfig, presenter: &Presenter) -> AppConfig {
    let store = XdgConfigStore::new();
    let loaded = store
        .load()
        .await
        .and_then(|config| config.validate().map(|()| config));
    let file_config = match loaded {
        Ok(config) => config,
        Err(e) => {
            warn!(error = %e, path = %store.path().display(), "ignoring unreadable config file");
            presenter.warn(&format!("Ignoring config file: {}", e));
            AppConfig::empty()
        }
    };

    // Merge: defaults < file < env < cli
    AppConfig::defaults()
        .merge(file_config)
        .merge(env_config())
        .merge(cli_config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_form_carries_tags_only() {
        let config = AppConfig {
            api_key: Some("key".to_string()),
            structure: Some("narrative".to_string()),
            audience: Some("youth".to_string()),
            ..Default::default()
        };

        let form = config_form(&config);

        assert_eq!(form.structure.as_deref(), Some("narrative"));
        assert_eq!(form.audience.as_deref(), Some("youth"));
        assert!(form.topic.is_none());
        assert!(form.custom_prompt_options.is_none());
    }

    #[test]
    fn config_defaults_make_form_valid_with_topic() {
        let form = config_form(&AppConfig::defaults()).merge(SermonForm {
            topic: Some("Kasih".to_string()),
            ..Default::default()
        });

        let request = form.validate().unwrap();

        assert_eq!(request.topic().as_str(), "Kasih");
    }

    #[tokio::test]
    async fn load_request_form_reads_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("request.json");
        std::fs::write(
            &path,
            r#"{"topic": "Iman", "bibleVerse": "Ibrani 11:1", "customPromptOptions": {"includePurpose": false}}"#,
        )
        .unwrap();

        let form = load_request_form(&path).await.unwrap();

        assert_eq!(form.topic.as_deref(), Some("Iman"));
        assert_eq!(form.bible_verse.as_deref(), Some("Ibrani 11:1"));
        assert_eq!(
            form.custom_prompt_options.unwrap().include_purpose,
            Some(false)
        );
    }

    #[tokio::test]
    async fn load_request_form_reports_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("request.json");
        std::fs::write(&path, "{topic").unwrap();

        let err = load_request_form(&path).await.unwrap_err();

        assert!(err.starts_with("Invalid request file"));
    }

    #[tokio::test]
    async fn load_request_form_reports_missing_file() {
        let err = load_request_form(Path::new("/nonexistent/request.json"))
            .await
            .unwrap_err();

        assert!(err.starts_with("Failed to read request file"));
    }
}
