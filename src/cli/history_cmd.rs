//! History command handler

use thiserror::Error;
use uuid::Uuid;

use crate::application::ports::{HistoryError, HistoryRepository};
use crate::domain::history::HistoryItem;

use super::args::HistoryAction;
use super::presenter::Presenter;

/// Errors raised by the history subcommands
#[derive(Debug, Error)]
pub enum HistoryCommandError {
    #[error(transparent)]
    Store(#[from] HistoryError),

    #[error("No history item matches '{0}'")]
    NotFound(String),

    #[error("'{0}' matches more than one history item, use a longer prefix")]
    Ambiguous(String),
}

/// Handle history subcommand
pub async fn handle_history_command<R: HistoryRepository>(
    action: HistoryAction,
    repo: &R,
    presenter: &Presenter,
) -> Result<(), HistoryCommandError> {
    match action {
        HistoryAction::List => {
            let items = repo.list().await?;
            if items.is_empty() {
                presenter.info("History is empty");
            }
            for item in &items {
                presenter.history_row(item);
            }
        }
        HistoryAction::Show { id } => {
            let item = resolve(repo, &id).await?;
            presenter.key_value("Topic", &item.topic);
            if let Some(verse) = &item.bible_verse {
                presenter.key_value("Verse", verse);
            }
            presenter.key_value("Structure", item.structure.label());
            presenter.key_value("Audience", item.audience.label());
            presenter.key_value("Date", &item.date.to_rfc3339());
            presenter.output("");
            presenter.output(&item.content);
        }
        HistoryAction::Remove { id } => {
            let item = resolve(repo, &id).await?;
            repo.remove(item.id).await?;
            presenter.success(&format!("Removed {} ({})", item.short_id(), item.topic));
        }
        HistoryAction::Clear => {
            repo.clear().await?;
            presenter.success("History cleared");
        }
    }
    Ok(())
}

/// Find one item by full id or unique id prefix
async fn resolve<R: HistoryRepository>(
    repo: &R,
    query: &str,
) -> Result<HistoryItem, HistoryCommandError> {
    if let Ok(id) = Uuid::parse_str(query) {
        return repo
            .get(id)
            .await?
            .ok_or_else(|| HistoryCommandError::NotFound(query.to_string()));
    }

    let prefix = query.trim().replace('-', "").to_lowercase();
    if prefix.is_empty() {
        return Err(HistoryCommandError::NotFound(query.to_string()));
    }

    let mut matches = repo
        .list()
        .await?
        .into_iter()
        .filter(|item| item.id.simple().to_string().starts_with(&prefix));

    match (matches.next(), matches.next()) {
        (Some(item), None) => Ok(item),
        (Some(_), Some(_)) => Err(HistoryCommandError::Ambiguous(query.to_string())),
        (None, _) => Err(HistoryCommandError::NotFound(query.to_string())),
    }
}
