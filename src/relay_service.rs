#[cfg(feature = "ssr")]
pub mod server {
    use log::{error, info};
    use serde::{Deserialize, Serialize};
    use serde_json::Value;
    use thiserror::Error;

    use crate::types::ChatMessage;

    const GEMINI_ENDPOINT: &str =
        "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent";

    const FALLBACK_REPLY: &str = "No response generated.";

    #[derive(Debug, Error)]
    pub enum RelayError {
        #[error("upstream returned status {status}")]
        Upstream { status: u16, details: Value },
        #[error(transparent)]
        Transport(#[from] reqwest::Error),
    }

    #[derive(Debug, Serialize)]
    struct GenerateContentRequest {
        contents: Vec<Content>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    struct Content {
        parts: Vec<Part>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    struct Part {
        text: String,
    }

    #[derive(Debug, Deserialize)]
    struct GenerateContentResponse {
        candidates: Option<Vec<Candidate>>,
    }

    #[derive(Debug, Deserialize)]
    struct Candidate {
        content: Option<Content>,
    }

    /// Stateless proxy to the Gemini generateContent API. Holds nothing but
    /// the HTTP client and credentials, so clones are cheap and concurrent
    /// calls share no mutable state.
    #[derive(Clone)]
    pub struct RelayService {
        client: reqwest::Client,
        api_key: String,
        endpoint: String,
    }

    impl RelayService {
        pub fn new(api_key: impl Into<String>) -> Self {
            Self {
                client: reqwest::Client::new(),
                api_key: api_key.into(),
                endpoint: GEMINI_ENDPOINT.to_string(),
            }
        }

        /// Reads GEMINI_API_KEY. Missing credentials are fatal: the server
        /// must not come up without them.
        pub fn from_env() -> Self {
            let api_key = std::env::var("GEMINI_API_KEY").expect("GEMINI_API_KEY must be set");
            Self::new(api_key)
        }

        /// Points the service at a different upstream URL. Used by tests to
        /// substitute a stub server.
        pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
            self.endpoint = endpoint.into();
            self
        }

        /// Forwards one conversation to the upstream model and returns the
        /// reply text. One outbound call, no retries, no streaming.
        pub async fn relay(
            &self,
            messages: &[ChatMessage],
            current_page: Option<&str>,
            recommendation_data: Option<&Value>,
        ) -> Result<String, RelayError> {
            let prompt = build_prompt(messages, current_page, recommendation_data);

            let body = GenerateContentRequest {
                contents: vec![Content {
                    parts: vec![Part { text: prompt }],
                }],
            };

            let response = self
                .client
                .post(&self.endpoint)
                .query(&[("key", self.api_key.as_str())])
                .json(&body)
                .send()
                .await?;

            let status = response.status();
            if !status.is_success() {
                let details = response.json::<Value>().await.unwrap_or(Value::Null);
                error!("Gemini API error ({}): {}", status, details);
                return Err(RelayError::Upstream {
                    status: status.as_u16(),
                    details,
                });
            }

            let data = response.json::<GenerateContentResponse>().await?;
            let reply = extract_reply(data);
            info!("relayed {} message(s), reply {} chars", messages.len(), reply.len());
            Ok(reply)
        }
    }

    /// Flattens the transcript to one line per turn, `ROLE: content`, in
    /// conversation order.
    pub fn render_transcript(messages: &[ChatMessage]) -> String {
        messages
            .iter()
            .map(|m| format!("{}: {}", m.role.to_uppercase(), m.content))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Assembles the single prompt sent upstream: persona and page context
    /// first, then the rendered conversation.
    pub fn build_prompt(
        messages: &[ChatMessage],
        current_page: Option<&str>,
        recommendation_data: Option<&Value>,
    ) -> String {
        let data = recommendation_data.cloned().unwrap_or_else(|| Value::Object(Default::default()));
        let data_json = serde_json::to_string_pretty(&data).unwrap_or_else(|_| "{}".to_string());

        let system_context = format!(
            "You are Materna AI, an intelligent maternal healthcare assistant.\n\n\
             Current Page: {}\n\n\
             Recommendation Data:\n{}\n\n\
             Provide clear, structured, helpful advice.",
            current_page.unwrap_or("unknown"),
            data_json,
        );

        format!(
            "{}\n\nConversation:\n{}",
            system_context,
            render_transcript(messages)
        )
    }

    fn extract_reply(data: GenerateContentResponse) -> String {
        data.candidates
            .and_then(|mut candidates| {
                if candidates.is_empty() {
                    None
                } else {
                    Some(candidates.remove(0))
                }
            })
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts.into_iter().next())
            .map(|part| part.text)
            .unwrap_or_else(|| FALLBACK_REPLY.to_string())
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use serde_json::json;

        #[test]
        fn transcript_renders_in_order_with_uppercased_roles() {
            let messages = vec![
                ChatMessage::new("user", "Hello"),
                ChatMessage::new("assistant", "Hi! How can I help?"),
                ChatMessage::new("user", "Diet tips please"),
            ];

            let rendered = render_transcript(&messages);
            assert_eq!(
                rendered,
                "USER: Hello\nASSISTANT: Hi! How can I help?\nUSER: Diet tips please"
            );
        }

        #[test]
        fn prompt_contains_each_message_exactly_once() {
            let messages = vec![
                ChatMessage::new("user", "first turn"),
                ChatMessage::new("assistant", "second turn"),
            ];

            let prompt = build_prompt(&messages, Some("/recommend"), None);
            assert_eq!(prompt.matches("first turn").count(), 1);
            assert_eq!(prompt.matches("second turn").count(), 1);
            assert!(prompt.find("first turn").unwrap() < prompt.find("second turn").unwrap());
        }

        #[test]
        fn missing_page_falls_back_to_unknown() {
            let prompt = build_prompt(&[], None, None);
            assert!(prompt.contains("Current Page: unknown"));
        }

        #[test]
        fn missing_recommendation_data_renders_empty_object() {
            let prompt = build_prompt(&[], Some("/"), None);
            assert!(prompt.contains("Recommendation Data:\n{}"));
        }

        #[test]
        fn recommendation_data_is_pretty_printed() {
            let data = json!({"risk": "low"});
            let prompt = build_prompt(&[], Some("/recommend"), Some(&data));
            assert!(prompt.contains("\"risk\": \"low\""));
        }

        #[test]
        fn reply_extraction_reads_first_candidate_first_part() {
            let data = GenerateContentResponse {
                candidates: Some(vec![
                    Candidate {
                        content: Some(Content {
                            parts: vec![
                                Part { text: "Hi there".to_string() },
                                Part { text: "ignored".to_string() },
                            ],
                        }),
                    },
                    Candidate { content: None },
                ]),
            };
            assert_eq!(extract_reply(data), "Hi there");
        }

        #[test]
        fn reply_extraction_falls_back_when_structure_is_missing() {
            assert_eq!(
                extract_reply(GenerateContentResponse { candidates: None }),
                FALLBACK_REPLY
            );
            assert_eq!(
                extract_reply(GenerateContentResponse {
                    candidates: Some(vec![])
                }),
                FALLBACK_REPLY
            );
            assert_eq!(
                extract_reply(GenerateContentResponse {
                    candidates: Some(vec![Candidate { content: None }])
                }),
                FALLBACK_REPLY
            );
        }
    }
}
