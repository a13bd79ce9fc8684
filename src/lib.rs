// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use anyhow::{bail, Context, Result};
use application::{
    NoteCreator, NoteDeleter, NoteForm, NoteLister, NoteViewer, Notifier, NotesQuery,
    QueryCache, Session, SubmitOutcome,
};
use constants::{DELETED_MESSAGE, GENERIC_ERROR_MESSAGE};
use domain::{DomainError, FormField};
use infrastructure::renderer::ContentRenderer;
use infrastructure::{Config, NotehubClient};
use ports::{ConsoleNotifier, HtmlPresenter, TextPresenter};
use std::path::PathBuf;
use tracing::{debug, info};

use crate::cli::args::{Args, Command};

pub async fn run(args: Args) -> Result<()> {
    debug!(command = ?args.command, "Starting notehub");

    let Args {
        config,
        base_url,
        token,
        command,
        ..
    } = args;
    let connect = || -> Result<(NotehubClient, QueryCache)> {
        let config = Config::resolve(config.as_deref())?
            .with_env(|key| std::env::var(key).ok())
            .with_overrides(base_url.clone(), token.clone());
        debug!(
            base_url = %config.api.base_url,
            stale_time = ?config.stale_time(),
            "Resolved configuration"
        );
        Ok((
            NotehubClient::from_config(&config)?,
            QueryCache::new(config.stale_time()),
        ))
    };
    let notifier = ConsoleNotifier;

    match command {
        Command::List {
            search,
            page,
            tag,
            browser,
        } => {
            let (client, mut cache) = connect()?;
            let query = NotesQuery::new(search.unwrap_or_default(), page, tag);
            let page = NoteLister::new(client)
                .list_notes(&mut cache, &query)
                .await
                .map_err(|e| report(&notifier, e))?;

            if browser {
                let html = HtmlPresenter::new().render_page(&page, &query);
                ContentRenderer::new().show("notes.html", &html)?;
            } else {
                print!("{}", TextPresenter::new().render_page(&page, &query));
            }
        }
        Command::View {
            note_id,
            json,
            browser,
        } => {
            let (client, mut cache) = connect()?;
            info!(%note_id, "Viewing note");
            let note = NoteViewer::new(client)
                .view_note(&mut cache, &note_id)
                .await
                .map_err(|e| report(&notifier, e))?;

            if json {
                println!("{}", serde_json::to_string_pretty(&note)?);
            } else if browser {
                let html = HtmlPresenter::new().render(&note);
                ContentRenderer::new().show("note.html", &html)?;
            } else {
                print!("{}", TextPresenter::new().render_note(&note));
            }
        }
        Command::Create {
            title,
            content,
            tag,
        } => {
            let (client, mut cache) = connect()?;
            let mut form = NoteForm::open();
            form.set(FormField::Title, title);
            form.set(FormField::Content, content);
            form.set(FormField::Tag, tag);

            match NoteCreator::new(client)
                .submit(&mut form, &mut cache, &notifier)
                .await
            {
                SubmitOutcome::Created(note) => println!("{}", note.id),
                SubmitOutcome::Rejected => {
                    return Err(DomainError::Validation(form.errors().clone()).into());
                }
                SubmitOutcome::Failed(e) => return Err(e.into()),
            }
        }
        Command::Delete { note_id } => {
            let (client, mut cache) = connect()?;
            let deleted = NoteDeleter::new(client)
                .delete_note(&mut cache, &note_id)
                .await
                .map_err(|e| report(&notifier, e))?;
            notifier.success(DELETED_MESSAGE);
            println!("{}", deleted.id);
        }
        Command::Shell => {
            let (client, cache) = connect()?;
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            let mut stdout = std::io::stdout();
            Session::new(client, cache)
                .run(stdin, &mut stdout, &notifier)
                .await?;
        }
        Command::InitConfig { path, force } => init_config(path, force)?,
    }

    Ok(())
}

/// Show the generic failure notification and pass the error on for the exit status
fn report(notifier: &dyn Notifier, error: DomainError) -> DomainError {
    debug!(%error, "Request failed");
    notifier.error(GENERIC_ERROR_MESSAGE);
    error
}

fn init_config(path: Option<PathBuf>, force: bool) -> Result<()> {
    let path = match path {
        Some(path) => path,
        None => Config::default_path().context("Could not determine config directory")?,
    };
    if path.exists() && !force {
        bail!(
            "Config file already exists: {} (use --force to overwrite)",
            path.display()
        );
    }

    Config::create_default(&path)?;
    info!(path = %path.display(), "Wrote default config");
    println!("{}", path.display());
    Ok(())
}
