use leptos::prelude::*;
use serde_json::Value;

pub mod chatbox;
pub mod intelligence;
pub mod navbar;
pub mod recommend;

/// Shared handle to the latest recommendation results. Provided once by the
/// app shell; the recommendation page writes it and the chat widget reads it
/// at send time.
#[derive(Clone, Copy)]
pub struct RecommendationContext {
    pub results: RwSignal<Value>,
}

impl RecommendationContext {
    pub fn new() -> Self {
        Self {
            results: RwSignal::new(Value::Object(Default::default())),
        }
    }
}

impl Default for RecommendationContext {
    fn default() -> Self {
        Self::new()
    }
}
