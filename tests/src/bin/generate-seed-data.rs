use anyhow::Context;
use chrono::{Duration, TimeZone, Utc};
use parley_api::{Comment, CommentId, Time, Topic, TopicId};
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

const AUTHORS: &[&str] = &["Ann", "Bob", "Chidi", "Dara", "Eun-ji", "Femi", "Gus"];
const TOPIC_TITLE_WORDS: usize = 4;
const MAX_COMMENT_WORDS: usize = 40;
// comments are spread over the 30 days before the base date
const SPREAD_MINUTES: i64 = 30 * 24 * 60;

/// Print a `data.js` defining `getTopics()` for the web front-end
#[derive(structopt::StructOpt)]
struct Opt {
    /// Number of topics to generate
    #[structopt(short, long, default_value = "5")]
    topics: usize,

    /// Maximum number of comments per topic
    #[structopt(short, long, default_value = "6")]
    max_comments: usize,

    /// Seed for the random generator, for reproducible output
    #[structopt(short, long)]
    seed: Option<u64>,
}

fn gen_id(rng: &mut impl Rng) -> uuid::Uuid {
    uuid::Builder::from_random_bytes(rng.gen()).into_uuid()
}

fn gen_comment(rng: &mut impl Rng, base: Time) -> Comment {
    let words = rng.gen_range(1..=MAX_COMMENT_WORDS);
    Comment {
        id: CommentId(gen_id(rng)),
        by: String::from(*AUTHORS.choose(rng).unwrap_or(&"anonymous")),
        comment: lipsum::lipsum_words_from_seed(words, rng.gen()),
        date: base - Duration::minutes(rng.gen_range(0..SPREAD_MINUTES)),
    }
}

fn gen_topics(rng: &mut impl Rng, opt: &Opt, base: Time) -> Vec<Topic> {
    (0..opt.topics)
        .map(|_| {
            let guid = TopicId(gen_id(rng).hyphenated().to_string());
            let name = lipsum::lipsum_words_from_seed(TOPIC_TITLE_WORDS, rng.gen());
            let num_comments = rng.gen_range(0..=opt.max_comments);
            let mut comments = (0..num_comments)
                .map(|_| gen_comment(rng, base))
                .collect::<Vec<_>>();
            // newest first, as if each one had been added in turn
            comments.sort_by(|a, b| b.date.cmp(&a.date));
            Topic {
                guid,
                name,
                comments,
            }
        })
        .collect()
}

fn render_data_js(topics: &[Topic]) -> anyhow::Result<String> {
    let json = serde_json::to_string_pretty(topics).context("serializing topics")?;
    Ok(format!("function getTopics() {{\n    return {json};\n}}\n"))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    let opt = <Opt as structopt::StructOpt>::from_args();

    let seed = opt.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, topics = opt.topics, "generating seed data");
    let mut rng = StdRng::seed_from_u64(seed);
    let base = Utc
        .with_ymd_and_hms(2022, 11, 15, 12, 0, 0)
        .single()
        .context("building base date")?;

    let topics = gen_topics(&mut rng, &opt, base);
    print!("{}", render_data_js(&topics)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use parley_client::{load_topics, JsonSource, TopicExt};

    use super::*;

    fn opt(topics: usize, max_comments: usize) -> Opt {
        Opt {
            topics,
            max_comments,
            seed: Some(42),
        }
    }

    fn base() -> Time {
        "2022-11-15T12:00:00Z".parse().unwrap()
    }

    #[test]
    fn generated_data_loads() {
        let opt = opt(20, 8);
        let topics = gen_topics(&mut StdRng::seed_from_u64(42), &opt, base());
        let js = render_data_js(&topics).unwrap();
        let json = js
            .strip_prefix("function getTopics() {\n    return ")
            .and_then(|s| s.strip_suffix(";\n}\n"))
            .expect("data.js has an unexpected shape");

        let loaded = load_topics(&JsonSource(String::from(json)));
        assert_eq!(loaded, topics);
        let guids = loaded.iter().map(|t| &t.guid).collect::<HashSet<_>>();
        assert_eq!(guids.len(), 20);
        for t in loaded.iter() {
            assert!(t.comments.len() <= 8);
            assert!(t.comments.windows(2).all(|w| w[0].date >= w[1].date));
            assert!(t.comments.iter().all(|c| c.date <= base()));
            assert!(t.comment_count_label().ends_with("Comment") == (t.comments.len() == 1));
        }
    }

    #[test]
    fn seed_is_reproducible() {
        let opt = opt(3, 3);
        let a = gen_topics(&mut StdRng::seed_from_u64(7), &opt, base());
        let b = gen_topics(&mut StdRng::seed_from_u64(7), &opt, base());
        assert_eq!(a, b);
        let c = gen_topics(&mut StdRng::seed_from_u64(8), &opt, base());
        assert_ne!(a, c);
    }

    #[test]
    fn generated_text_is_not_empty() {
        let opt = opt(10, 5);
        for t in gen_topics(&mut StdRng::seed_from_u64(3), &opt, base()) {
            assert!(!t.name.trim().is_empty());
            assert!(t.comments.iter().all(|c| !c.comment.trim().is_empty()));
            assert!(t.comments.iter().all(|c| AUTHORS.contains(&c.by.as_str())));
        }
    }
}
