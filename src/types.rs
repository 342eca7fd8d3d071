use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Endpoint the chat widget posts to. Same origin as the SSR server, so the
/// widget never hard-codes a host.
pub const CHAT_ENDPOINT: &str = "/chat";

/// One conversation turn on the wire. The widget stores its assistant turns
/// under the role "ai" and maps them to "assistant" when building a request.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }
}

/// Body of `POST /chat`. Built fresh for every send, never retained.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation_data: Option<Value>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChatResponse {
    pub reply: String,
}

/// In-memory conversation owned by one widget instance. Insertion order is
/// conversation order; nothing here survives a page reload.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    /// Appends a user turn. Empty or whitespace-only text is rejected and
    /// the transcript is left untouched.
    pub fn push_user(&mut self, text: &str) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        self.messages.push(ChatMessage::new("user", text));
        true
    }

    pub fn push_ai(&mut self, text: impl Into<String>) {
        self.messages.push(ChatMessage::new("ai", text));
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Messages as the relay expects them: the widget's local "ai" role goes
    /// out as "assistant".
    pub fn wire_messages(&self) -> Vec<ChatMessage> {
        self.messages
            .iter()
            .map(|m| {
                let role = if m.role == "ai" { "assistant" } else { m.role.as_str() };
                ChatMessage::new(role, m.content.clone())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn blank_input_is_not_appended() {
        let mut transcript = Transcript::default();
        assert!(!transcript.push_user(""));
        assert!(!transcript.push_user("   "));
        assert!(!transcript.push_user("\n\t"));
        assert!(transcript.is_empty());
    }

    #[test]
    fn turns_keep_insertion_order() {
        let mut transcript = Transcript::default();
        assert!(transcript.push_user("Hi"));
        transcript.push_ai("Hello! How can I help?");
        assert!(transcript.push_user("What should I eat?"));

        let roles: Vec<&str> = transcript
            .messages()
            .iter()
            .map(|m| m.role.as_str())
            .collect();
        assert_eq!(roles, vec!["user", "ai", "user"]);
        assert_eq!(transcript.messages()[2].content, "What should I eat?");
    }

    #[test]
    fn wire_messages_map_ai_to_assistant() {
        let mut transcript = Transcript::default();
        transcript.push_user("Hi");
        transcript.push_ai("Hello!");

        let wire = transcript.wire_messages();
        assert_eq!(wire[0].role, "user");
        assert_eq!(wire[1].role, "assistant");
        assert_eq!(wire[1].content, "Hello!");
    }

    #[test]
    fn chat_request_uses_camel_case_fields() {
        let request = ChatRequest {
            messages: vec![ChatMessage::new("user", "Hello")],
            current_page: Some("/recommend".to_string()),
            recommendation_data: Some(json!({"risk": "low"})),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["currentPage"], "/recommend");
        assert_eq!(value["recommendationData"]["risk"], "low");
        assert_eq!(value["messages"][0]["content"], "Hello");
    }

    #[test]
    fn optional_fields_are_omitted_when_absent() {
        let request = ChatRequest {
            messages: vec![],
            current_page: None,
            recommendation_data: None,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("currentPage").is_none());
        assert!(value.get("recommendationData").is_none());
    }
}
