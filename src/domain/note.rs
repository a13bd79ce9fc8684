// src/domain/note.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub tag: NoteTag,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum NoteTag {
    #[default]
    Todo,
    Work,
    Personal,
    Meeting,
    Shopping,
}

impl NoteTag {
    pub const ALL: [NoteTag; 5] = [
        NoteTag::Todo,
        NoteTag::Work,
        NoteTag::Personal,
        NoteTag::Meeting,
        NoteTag::Shopping,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            NoteTag::Todo => "Todo",
            NoteTag::Work => "Work",
            NoteTag::Personal => "Personal",
            NoteTag::Meeting => "Meeting",
            NoteTag::Shopping => "Shopping",
        }
    }
}

impl fmt::Display for NoteTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NoteTag {
    type Err = String;

    /// Tag names are matched exactly, the API rejects other spellings
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NoteTag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| format!("unknown tag: {s}"))
    }
}

/// Tag selection for list queries; `All` sends no tag parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TagFilter {
    #[default]
    All,
    Tag(NoteTag),
}

impl TagFilter {
    pub fn tag(self) -> Option<NoteTag> {
        match self {
            TagFilter::All => None,
            TagFilter::Tag(tag) => Some(tag),
        }
    }
}

impl From<Option<NoteTag>> for TagFilter {
    fn from(tag: Option<NoteTag>) -> Self {
        tag.map_or(TagFilter::All, TagFilter::Tag)
    }
}

impl fmt::Display for TagFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagFilter::All => f.write_str("all"),
            TagFilter::Tag(tag) => write!(f, "{tag}"),
        }
    }
}

impl FromStr for TagFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(TagFilter::All);
        }
        s.parse::<NoteTag>().map(TagFilter::Tag)
    }
}

/// Request body for note creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewNote {
    pub title: String,
    pub content: String,
    pub tag: NoteTag,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotesPage {
    pub notes: Vec<Note>,
    pub total_pages: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("all", TagFilter::All)]
    #[case("ALL", TagFilter::All)]
    #[case("Work", TagFilter::Tag(NoteTag::Work))]
    #[case("Shopping", TagFilter::Tag(NoteTag::Shopping))]
    fn given_filter_text_when_parsing_then_maps_to_filter(
        #[case] input: &str,
        #[case] expected: TagFilter,
    ) {
        assert_eq!(input.parse::<TagFilter>().unwrap(), expected);
    }

    #[test]
    fn given_unknown_tag_when_parsing_then_returns_error() {
        assert!("Groceries".parse::<NoteTag>().is_err());
        assert!("work".parse::<TagFilter>().is_err());
    }

    #[test]
    fn given_all_filter_when_taking_tag_then_returns_none() {
        assert_eq!(TagFilter::All.tag(), None);
        assert_eq!(
            TagFilter::Tag(NoteTag::Meeting).tag(),
            Some(NoteTag::Meeting)
        );
    }

    #[test]
    fn given_api_json_when_deserializing_note_then_reads_camel_case_fields() {
        let json = r#"{
            "id": "65ca67e7ae7f10c88b598384",
            "title": "Buy milk",
            "content": "2 liters",
            "tag": "Shopping",
            "createdAt": "2025-01-12T10:15:00.000Z",
            "updatedAt": "2025-01-12T11:00:00Z"
        }"#;

        let note: Note = serde_json::from_str(json).unwrap();

        assert_eq!(note.id, "65ca67e7ae7f10c88b598384");
        assert_eq!(note.tag, NoteTag::Shopping);
        assert!(note.updated_at > note.created_at);
    }
}
