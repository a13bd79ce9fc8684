// src/ports/text.rs
use crate::application::NotesQuery;
use crate::constants::EXCERPT_CHARS;
use crate::domain::{FieldErrors, Note, NotesPage, TagFilter};
use crate::util::text::{excerpt, fit};
use std::fmt::Write;

const TITLE_WIDTH: usize = 30;
const TAG_WIDTH: usize = 10;

/// Plain text rendering for terminal output
#[derive(Debug, Default, Clone, Copy)]
pub struct TextPresenter;

impl TextPresenter {
    pub fn new() -> Self {
        Self
    }

    pub fn render_page(&self, page: &NotesPage, query: &NotesQuery) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.describe_query(query));

        if page.notes.is_empty() {
            out.push_str("No notes found\n");
            return out;
        }

        for note in &page.notes {
            let _ = writeln!(
                out,
                "{}  {}  {}  {}",
                note.id,
                fit(&format!("[{}]", note.tag), TAG_WIDTH),
                fit(&note.title, TITLE_WIDTH),
                excerpt(&note.content, EXCERPT_CHARS)
            );
        }
        let _ = writeln!(out, "Page {} of {}", query.page, page.total_pages.max(1));
        out
    }

    pub fn render_note(&self, note: &Note) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", note.title);
        let _ = writeln!(out, "Tag:     {}", note.tag);
        let _ = writeln!(out, "ID:      {}", note.id);
        let _ = writeln!(out, "Created: {}", note.created_at.format("%Y-%m-%d %H:%M"));
        if note.updated_at != note.created_at {
            let _ = writeln!(out, "Updated: {}", note.updated_at.format("%Y-%m-%d %H:%M"));
        }
        if !note.content.is_empty() {
            out.push('\n');
            out.push_str(&note.content);
            if !note.content.ends_with('\n') {
                out.push('\n');
            }
        }
        out
    }

    pub fn render_errors(&self, errors: &FieldErrors) -> String {
        errors
            .iter()
            .map(|e| format!("  {}: {}\n", e.field, e.message))
            .collect()
    }

    fn describe_query(&self, query: &NotesQuery) -> String {
        let mut parts = vec![];
        if !query.search.is_empty() {
            parts.push(format!("search \"{}\"", query.search));
        }
        if let TagFilter::Tag(tag) = query.tag {
            parts.push(format!("tag {tag}"));
        }
        if parts.is_empty() {
            "All notes".to_string()
        } else {
            format!("Notes with {}", parts.join(", "))
        }
    }
}
