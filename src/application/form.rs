// src/application/form.rs
use crate::constants::{CONTENT_MAX_CHARS, TITLE_MAX_CHARS, TITLE_MIN_CHARS};
use crate::domain::{FieldErrors, FormField, NewNote, NoteTag};

/// Raw, unvalidated input of the note creation form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormValues {
    pub title: String,
    pub content: String,
    pub tag: String,
}

impl Default for FormValues {
    fn default() -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            tag: NoteTag::default().to_string(),
        }
    }
}

impl FormValues {
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Title => self.title = value,
            FormField::Content => self.content = value,
            FormField::Tag => self.tag = value,
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Content => &self.content,
            FormField::Tag => &self.tag,
        }
    }
}

/// Check `values` against the form rules and build the request body.
///
/// Each field reports only its first failing rule. Lengths are counted in
/// characters, not bytes.
pub fn validate(values: &FormValues) -> Result<NewNote, FieldErrors> {
    let mut errors = FieldErrors::new();

    let title_len = values.title.chars().count();
    if values.title.is_empty() {
        errors.add(FormField::Title, "Title is required");
    } else if title_len < TITLE_MIN_CHARS {
        errors.add(
            FormField::Title,
            format!("Title must be at least {TITLE_MIN_CHARS} characters"),
        );
    } else if title_len > TITLE_MAX_CHARS {
        errors.add(FormField::Title, "Title is too long");
    }

    if values.content.chars().count() > CONTENT_MAX_CHARS {
        errors.add(FormField::Content, "Content is too long");
    }

    let tag = if values.tag.is_empty() {
        errors.add(FormField::Tag, "Tag is required");
        None
    } else {
        match values.tag.parse::<NoteTag>() {
            Ok(tag) => Some(tag),
            Err(_) => {
                let allowed: Vec<&str> = NoteTag::ALL.iter().map(|t| t.as_str()).collect();
                errors.add(
                    FormField::Tag,
                    format!(
                        "tag must be one of the following values: {}",
                        allowed.join(", ")
                    ),
                );
                None
            }
        }
    };

    match tag {
        Some(tag) if errors.is_empty() => Ok(NewNote {
            title: values.title.clone(),
            content: values.content.clone(),
            tag,
        }),
        _ => Err(errors),
    }
}

/// State of the creation form between opening and dismissal
#[derive(Debug, Default)]
pub struct NoteForm {
    values: FormValues,
    errors: FieldErrors,
    open: bool,
    pending: bool,
}

impl NoteForm {
    /// A freshly opened form with initial values
    pub fn open() -> Self {
        Self {
            open: true,
            ..Self::default()
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        self.values.set(field, value);
    }

    /// Validate the current values and mark the form pending.
    ///
    /// Returns `None` when the form is closed, already pending or invalid;
    /// validation errors are kept on the form.
    pub fn begin_submit(&mut self) -> Option<NewNote> {
        if !self.open || self.pending {
            return None;
        }
        match validate(&self.values) {
            Ok(note) => {
                self.errors = FieldErrors::new();
                self.pending = true;
                Some(note)
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }

    /// Record a failed submission; the form stays open with its values
    pub fn submit_failed(&mut self) {
        self.pending = false;
    }

    /// Close the form, after a successful submission or a cancel
    pub fn dismiss(&mut self) {
        self.pending = false;
        self.open = false;
    }
}
