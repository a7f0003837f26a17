use std::collections::HashSet;

use crate::api::{self, Error, Topic, TopicId};

/// Where the initial topic list comes from
pub trait TopicSource {
    fn topics(&self) -> Result<Vec<Topic>, Error>;
}

pub struct StaticSource(pub Vec<Topic>);

impl TopicSource for StaticSource {
    fn topics(&self) -> Result<Vec<Topic>, Error> {
        Ok(self.0.clone())
    }
}

/// Seed payload in its JSON wire format
pub struct JsonSource(pub String);

impl TopicSource for JsonSource {
    fn topics(&self) -> Result<Vec<Topic>, Error> {
        api::parse_topics(&self.0)
    }
}

/// Fetch the initial topics, never failing: a broken source yields no topics
///
/// Topics are keyed by guid once rendered, so a guid seen twice is replaced
/// by a fresh one on every later occurrence.
pub fn load_topics(source: &dyn TopicSource) -> Vec<Topic> {
    let mut topics = match source.topics() {
        Ok(topics) => topics,
        Err(e) => {
            tracing::error!(err=%e, "failed loading topics, starting empty");
            return Vec::new();
        }
    };
    let mut seen = HashSet::with_capacity(topics.len());
    for t in topics.iter_mut() {
        while !seen.insert(t.guid.clone()) {
            let guid = TopicId::generate();
            tracing::warn!(
                old=?t.guid,
                new=?guid,
                "seed contains duplicate topic guid, replacing it"
            );
            t.guid = guid;
        }
    }
    tracing::debug!(num_topics = topics.len(), "loaded topics");
    topics
}
