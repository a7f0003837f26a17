use chrono::{SecondsFormat, Utc};

mod error;
pub use error::Error;

pub use uuid::{uuid, Uuid};
pub type Time = chrono::DateTime<Utc>;

/// Render a timestamp the way browsers' `Date.toISOString` does
pub fn display_time(t: &Time) -> String {
    t.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Identifier of a topic, serialized as its `guid` string
///
/// Seeded topics can carry any string. Topics created locally get a v4 uuid,
/// whose uniqueness is only probabilistic.
#[derive(
    Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
#[serde(transparent)]
pub struct TopicId(pub String);

impl TopicId {
    pub fn generate() -> TopicId {
        TopicId(Uuid::new_v4().hyphenated().to_string())
    }

    pub fn stub() -> TopicId {
        TopicId(String::new())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(
    Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
#[serde(transparent)]
pub struct CommentId(pub Uuid);

impl CommentId {
    pub fn generate() -> CommentId {
        CommentId(Uuid::new_v4())
    }
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Comment {
    /// Seed data has no comment ids, so missing ones are generated on load
    #[serde(default = "CommentId::generate")]
    pub id: CommentId,

    /// Author name, free text
    pub by: String,

    pub comment: String,
    pub date: Time,
}

impl Comment {
    pub fn new(by: String, comment: String, date: Time) -> Comment {
        Comment {
            id: CommentId::generate(),
            by,
            comment,
            date,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Topic {
    pub guid: TopicId,
    pub name: String,

    /// Newest first
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Topic {
    pub fn new(name: String) -> Topic {
        Topic {
            guid: TopicId::generate(),
            name,
            comments: Vec::new(),
        }
    }

    /// The shape an empty topic form holds
    pub fn blank() -> Topic {
        Topic {
            guid: TopicId::stub(),
            name: String::new(),
            comments: Vec::new(),
        }
    }
}

/// Decode a seed payload: a JSON array of topics, or `null` for none
pub fn parse_topics(json: &str) -> Result<Vec<Topic>, Error> {
    serde_json::from_str::<Option<Vec<Topic>>>(json)
        .map(Option::unwrap_or_default)
        .map_err(|e| Error::MalformedSeed(e.to_string()))
}
