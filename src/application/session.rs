// src/application/session.rs
use crate::application::{
    NoteCreator, NoteDeleter, NoteForm, NoteLister, NoteRepository, NoteViewer, Notifier,
    NotesQuery, QueryCache, SubmitOutcome,
};
use crate::cli::args::{ShellCommand, ShellLine};
use crate::constants::{DELETED_MESSAGE, GENERIC_ERROR_MESSAGE};
use crate::domain::FormField;
use crate::ports::TextPresenter;
use anyhow::Result;
use clap::Parser;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};
use tracing::{debug, warn};

const PROMPT: &str = "notehub> ";
const CANCEL: &str = ":cancel";
const CLEAR: &str = ":clear";

/// Interactive browsing session over one query cache.
///
/// Holds the current search, tag filter and page the way the notes page
/// does, and serves repeated views from the cache until an invalidation.
pub struct Session<R: NoteRepository + Clone> {
    lister: NoteLister<R>,
    viewer: NoteViewer<R>,
    creator: NoteCreator<R>,
    deleter: NoteDeleter<R>,
    cache: QueryCache,
    query: NotesQuery,
    total_pages: u32,
    presenter: TextPresenter,
}

impl<R: NoteRepository + Clone> Session<R> {
    pub fn new(repository: R, cache: QueryCache) -> Self {
        Self {
            lister: NoteLister::new(repository.clone()),
            viewer: NoteViewer::new(repository.clone()),
            creator: NoteCreator::new(repository.clone()),
            deleter: NoteDeleter::new(repository),
            cache,
            query: NotesQuery::default(),
            total_pages: 0,
            presenter: TextPresenter::new(),
        }
    }

    /// Start on a given query instead of the first unfiltered page
    pub fn with_query(mut self, query: NotesQuery) -> Self {
        self.query = query;
        self
    }

    pub fn query(&self) -> &NotesQuery {
        &self.query
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    /// Read commands from `input` until `quit` or end of input
    pub async fn run<I, O>(
        &mut self,
        input: I,
        out: &mut O,
        notifier: &dyn Notifier,
    ) -> Result<()>
    where
        I: AsyncBufRead + Unpin,
        O: Write,
    {
        let mut lines = input.lines();
        self.show_page(out, notifier).await?;

        loop {
            write!(out, "{PROMPT}")?;
            out.flush()?;

            let Some(line) = lines.next_line().await? else {
                writeln!(out)?;
                break;
            };
            let words: Vec<&str> = line.split_whitespace().collect();
            if words.is_empty() {
                continue;
            }

            let command = match ShellLine::try_parse_from(words) {
                Ok(parsed) => parsed.command,
                Err(e) => {
                    write!(out, "{}", e.render())?;
                    continue;
                }
            };
            debug!(?command, "Shell command");

            if !self.execute(command, &mut lines, out, notifier).await? {
                break;
            }
        }
        Ok(())
    }

    /// Returns `false` once the session should end
    async fn execute<I, O>(
        &mut self,
        command: ShellCommand,
        lines: &mut Lines<I>,
        out: &mut O,
        notifier: &dyn Notifier,
    ) -> Result<bool>
    where
        I: AsyncBufRead + Unpin,
        O: Write,
    {
        match command {
            ShellCommand::List => self.show_page(out, notifier).await?,
            ShellCommand::Search { words } => {
                self.query.search = words.join(" ");
                self.query.page = 1;
                self.show_page(out, notifier).await?;
            }
            ShellCommand::Tag { filter } => {
                self.query.tag = filter;
                self.query.page = 1;
                self.show_page(out, notifier).await?;
            }
            ShellCommand::Page { number } => self.go_to(number, out, notifier).await?,
            ShellCommand::Next => self.go_to(self.query.page + 1, out, notifier).await?,
            ShellCommand::Prev => {
                if self.query.page <= 1 {
                    writeln!(out, "Already on the first page")?;
                } else {
                    self.go_to(self.query.page - 1, out, notifier).await?;
                }
            }
            ShellCommand::View { note_id } => {
                match self.viewer.view_note(&mut self.cache, &note_id).await {
                    Ok(note) => write!(out, "{}", self.presenter.render_note(&note))?,
                    Err(e) => {
                        warn!(error = %e, %note_id, "Loading note failed");
                        notifier.error(GENERIC_ERROR_MESSAGE);
                    }
                }
            }
            ShellCommand::New => self.run_form(lines, out, notifier).await?,
            ShellCommand::Delete { note_id } => {
                match self.deleter.delete_note(&mut self.cache, &note_id).await {
                    Ok(_) => {
                        notifier.success(DELETED_MESSAGE);
                        self.show_page(out, notifier).await?;
                    }
                    Err(e) => {
                        warn!(error = %e, %note_id, "Deleting note failed");
                        notifier.error(GENERIC_ERROR_MESSAGE);
                    }
                }
            }
            ShellCommand::Quit => return Ok(false),
        }
        Ok(true)
    }

    async fn go_to<O: Write>(
        &mut self,
        page: u32,
        out: &mut O,
        notifier: &dyn Notifier,
    ) -> Result<()> {
        let last = self.total_pages.max(1);
        if page == 0 || page > last {
            writeln!(out, "No page {page}, pages run from 1 to {last}")?;
            return Ok(());
        }
        self.query.page = page;
        self.show_page(out, notifier).await
    }

    /// Fetch and print the current page, stepping back when it no longer exists
    async fn show_page<O: Write>(
        &mut self,
        out: &mut O,
        notifier: &dyn Notifier,
    ) -> Result<()> {
        loop {
            let page = match self.lister.list_notes(&mut self.cache, &self.query).await {
                Ok(page) => page,
                Err(e) => {
                    warn!(error = %e, "Listing notes failed");
                    notifier.error(GENERIC_ERROR_MESSAGE);
                    return Ok(());
                }
            };
            self.total_pages = page.total_pages;

            let last = page.total_pages.max(1);
            if self.query.page > last {
                self.query.page = last;
                continue;
            }
            write!(out, "{}", self.presenter.render_page(&page, &self.query))?;
            return Ok(());
        }
    }

    /// Prompt the creation form field by field until it is submitted or cancelled
    async fn run_form<I, O>(
        &mut self,
        lines: &mut Lines<I>,
        out: &mut O,
        notifier: &dyn Notifier,
    ) -> Result<()>
    where
        I: AsyncBufRead + Unpin,
        O: Write,
    {
        let mut form = NoteForm::open();
        writeln!(
            out,
            "New note (enter keeps the value in brackets, {CLEAR} empties it, {CANCEL} aborts)"
        )?;

        while form.is_open() {
            for field in [FormField::Title, FormField::Content, FormField::Tag] {
                write!(out, "{} [{}]: ", field_label(field), form.values().get(field))?;
                out.flush()?;

                let Some(line) = lines.next_line().await? else {
                    form.dismiss();
                    writeln!(out)?;
                    return Ok(());
                };
                match line.trim() {
                    CANCEL => {
                        form.dismiss();
                        writeln!(out, "Cancelled")?;
                        return Ok(());
                    }
                    CLEAR => form.set(field, ""),
                    _ if line.is_empty() => {}
                    _ => form.set(field, line),
                }
            }

            match self.creator.submit(&mut form, &mut self.cache, notifier).await {
                SubmitOutcome::Created(note) => {
                    writeln!(out, "Created note {}", note.id)?;
                    self.show_page(out, notifier).await?;
                }
                SubmitOutcome::Rejected => {
                    write!(out, "{}", self.presenter.render_errors(form.errors()))?;
                }
                SubmitOutcome::Failed(_) => {
                    writeln!(
                        out,
                        "Press enter to keep the values and retry, or type {CANCEL}"
                    )?;
                }
            }
        }
        Ok(())
    }
}

fn field_label(field: FormField) -> &'static str {
    match field {
        FormField::Title => "Title",
        FormField::Content => "Content",
        FormField::Tag => "Tag (Todo/Work/Personal/Meeting/Shopping)",
    }
}
