use anyhow::{anyhow, Context};
use parley_client::{
    api::{self, Error, Topic},
    TopicSource,
};
use wasm_bindgen::prelude::*;

/// Name of the global function the page defines to provide the initial topics
pub const SEED_FUNCTION: &str = "getTopics";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_name = getTopics)]
    fn get_topics() -> Result<JsValue, JsValue>;
}

/// Topics handed over by the page's `getTopics()`
pub struct GlobalSource;

fn fetch_seed_json() -> anyhow::Result<String> {
    let topics = get_topics()
        .map_err(|e| anyhow!("{e:?}"))
        .with_context(|| format!("calling {SEED_FUNCTION}()"))?;
    let json = js_sys::JSON::stringify(&topics)
        .map_err(|e| anyhow!("{e:?}"))
        .with_context(|| format!("serializing the result of {SEED_FUNCTION}()"))?;
    // JSON.stringify(undefined) is not a string
    Ok(JsValue::from(json)
        .as_string()
        .unwrap_or_else(|| String::from("null")))
}

impl TopicSource for GlobalSource {
    fn topics(&self) -> Result<Vec<Topic>, Error> {
        let json = fetch_seed_json().map_err(|e| Error::SeedUnavailable(format!("{e:#}")))?;
        api::parse_topics(&json)
    }
}
