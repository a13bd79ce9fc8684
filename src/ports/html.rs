// src/ports/html.rs
use crate::application::NotesQuery;
use crate::domain::{Note, NotesPage};
use html_escape::encode_text;
use tracing::instrument;

const STYLE: &str = r#"
        body {
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
            line-height: 1.6;
            max-width: 960px;
            margin: 2rem auto;
            padding: 0 1rem;
            background-color: #f5f5f5;
        }
        .grid {
            display: grid;
            grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
            gap: 1rem;
        }
        .card {
            background: white;
            border-radius: 8px;
            padding: 1.5rem;
            box-shadow: 0 2px 4px rgba(0,0,0,0.1);
        }
        .content {
            white-space: pre-wrap;
            word-wrap: break-word;
        }
        .note-info {
            margin-top: 1rem;
            padding-top: 1rem;
            border-top: 1px solid #eee;
            font-size: 0.9em;
            color: #666;
        }
        .tag {
            display: inline-block;
            background: #e9ecef;
            padding: 2px 8px;
            border-radius: 4px;
            font-size: 0.8em;
        }
        .pager {
            margin-top: 1.5rem;
            color: #666;
        }
"#;

#[derive(Debug, Default)]
pub struct HtmlPresenter;

impl HtmlPresenter {
    pub fn new() -> Self {
        Self
    }

    fn document(&self, title: &str, body: &str) -> String {
        format!(
            r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
    <style>{STYLE}</style>
</head>
<body>
{body}
</body>
</html>"#,
            title = encode_text(title),
        )
    }

    #[instrument(level = "debug", skip(self, note), fields(note_id = %note.id))]
    pub fn render(&self, note: &Note) -> String {
        let body = format!(
            r#"    <div class="card">
        <h2>{title}</h2>
        <span class="tag">{tag}</span>
        <div class="content">{content}</div>
        <div class="note-info">
            <div>Note ID: {id}</div>
            <div>Created: {created}</div>
            <div>Updated: {updated}</div>
        </div>
    </div>"#,
            title = encode_text(&note.title),
            tag = note.tag,
            content = encode_text(&note.content),
            id = encode_text(&note.id),
            created = note.created_at.format("%Y-%m-%d %H:%M UTC"),
            updated = note.updated_at.format("%Y-%m-%d %H:%M UTC"),
        );
        self.document(&format!("Note: {}", note.title), &body)
    }

    pub fn render_page(&self, page: &NotesPage, query: &NotesQuery) -> String {
        let cards: String = page
            .notes
            .iter()
            .map(|note| {
                format!(
                    r#"        <div class="card">
            <h3>{title}</h3>
            <div class="content">{content}</div>
            <span class="tag">{tag}</span>
        </div>
"#,
                    title = encode_text(&note.title),
                    content = encode_text(&note.content),
                    tag = note.tag,
                )
            })
            .collect();

        let listing = if cards.is_empty() {
            "    <p>No notes found</p>".to_string()
        } else {
            format!("    <div class=\"grid\">\n{cards}    </div>")
        };

        let body = format!(
            r#"    <h1>Notes</h1>
    <p>Tag: {tag} &middot; Search: {search}</p>
{listing}
    <div class="pager">Page {page} of {total}</div>"#,
            tag = query.tag,
            search = if query.search.is_empty() {
                "none".into()
            } else {
                encode_text(&query.search)
            },
            page = query.page,
            total = page.total_pages.max(1),
        );
        self.document("NoteHub", &body)
    }
}
