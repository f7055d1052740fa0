//! Conversation state for the assistant panel and the terminal `ask` command.
//!
//! Requests go through [`platform_host::AssistantService`]. Every failure becomes an
//! [`MessageRole::Error`] message in the requesting app's own transcript; nothing here touches
//! desktop state.

use leptos::logging;
use platform_host::{AssistantRequest, AssistantService};

use crate::{i18n, model::Locale};

/// Who the model is asked to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Persona {
    /// Docked assistant panel.
    Panel,
    /// `ask` command inside the terminal app.
    Terminal,
}

pub fn system_instruction(persona: Persona, locale: Locale) -> String {
    let intro = match persona {
        Persona::Panel => {
            "You are the assistant built into HamzaOS, a web desktop made by Hamza, an 11-year-old \
             electronics, Linux, and Windows enthusiast. Help visitors explore the desktop and \
             learn about Hamza's projects and YouTube channel."
        }
        Persona::Terminal => {
            "You are an AI assistant living inside the terminal of Hamza, an 11-year-old \
             electronics, Linux, and Windows expert with a Full HD YouTube channel. Keep answers \
             technical but fun."
        }
    };
    format!(
        "{intro} Keep replies short and friendly. Answer in {}.",
        locale.english_name()
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    User,
    Model,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub text: String,
}

impl ChatMessage {
    pub fn new(role: MessageRole, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
        }
    }
}

/// Sends `request` and turns the outcome into a transcript message.
pub async fn ask(service: &dyn AssistantService, request: &AssistantRequest) -> ChatMessage {
    match service.generate(request).await {
        Ok(reply) => ChatMessage::new(MessageRole::Model, reply.trim()),
        Err(err) => {
            logging::warn!("assistant request failed: {err}");
            ChatMessage::new(MessageRole::Error, format!("Error: {err}"))
        }
    }
}

/// Transcript for the assistant panel. At most one request is in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantConversation {
    persona: Persona,
    locale: Locale,
    messages: Vec<ChatMessage>,
    pending: bool,
}

impl AssistantConversation {
    /// Starts a transcript with the localized greeting.
    pub fn new(persona: Persona, locale: Locale) -> Self {
        Self {
            persona,
            locale,
            messages: vec![ChatMessage::new(
                MessageRole::Model,
                i18n::strings(locale).assistant_greeting,
            )],
            pending: false,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Records the user's prompt and returns the request to send, or `None` for blank input or
    /// while a reply is still outstanding.
    pub fn submit(&mut self, prompt: &str) -> Option<AssistantRequest> {
        let prompt = prompt.trim();
        if prompt.is_empty() || self.pending {
            return None;
        }
        self.messages
            .push(ChatMessage::new(MessageRole::User, prompt));
        self.pending = true;
        Some(AssistantRequest::new(
            prompt,
            system_instruction(self.persona, self.locale),
        ))
    }

    pub fn resolve(&mut self, reply: ChatMessage) {
        self.pending = false;
        self.messages.push(reply);
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::{NoopAssistantService, ScriptedAssistantService};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn instruction_names_reply_language() {
        assert!(system_instruction(Persona::Terminal, Locale::Zh).ends_with("Answer in Chinese."));
        assert!(system_instruction(Persona::Panel, Locale::Ar).contains("HamzaOS"));
    }

    #[test]
    fn conversation_round_trip_with_scripted_service() {
        let service = ScriptedAssistantService::new([Ok(" Hello! ".to_string())]);
        let mut conversation = AssistantConversation::new(Persona::Panel, Locale::En);

        let request = conversation.submit("  who made this? ").expect("request");
        assert!(conversation.is_pending());
        assert_eq!(conversation.submit("again"), None);

        let reply = block_on(ask(&service, &request));
        conversation.resolve(reply);

        assert!(!conversation.is_pending());
        let roles: Vec<_> = conversation.messages().iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![MessageRole::Model, MessageRole::User, MessageRole::Model]
        );
        assert_eq!(conversation.messages()[1].text, "who made this?");
        assert_eq!(conversation.messages()[2].text, "Hello!");
        assert_eq!(service.requests()[0].prompt, "who made this?");
    }

    #[test]
    fn failures_become_inline_error_messages() {
        let reply = block_on(ask(
            &NoopAssistantService,
            &AssistantRequest::new("hi", "be short"),
        ));
        assert_eq!(reply.role, MessageRole::Error);
        assert!(reply.text.contains("not configured"));
    }

    #[test]
    fn blank_prompts_are_ignored() {
        let mut conversation = AssistantConversation::new(Persona::Panel, Locale::Ar);
        assert_eq!(conversation.submit("   "), None);
        assert_eq!(conversation.messages().len(), 1);
    }
}
