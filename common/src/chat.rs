//! Scripted chatbot: asks for a name, an email and a question, then hands the
//! answers over for the webhook. No branching.

use chrono::{DateTime, Utc};

use crate::language::Language;
use crate::submission::{CHATBOT_SOURCE, ChatbotSubmission};
use crate::webhook;

/// Pause before a bot bubble appears after the visitor's answer.
pub const BOT_REPLY_DELAY_MS: u32 = 500;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChatStep {
    #[default]
    Greeting,
    Name,
    Email,
    Question,
    Complete,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatRole {
    Bot,
    User,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

impl ChatMessage {
    fn bot(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Bot,
            text: text.into(),
        }
    }

    fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChatAnswers {
    pub name: String,
    pub email: String,
    pub question: String,
}

impl ChatAnswers {
    pub fn into_submission(
        self,
        language: Language,
        page_url: &str,
        now: DateTime<Utc>,
    ) -> ChatbotSubmission {
        ChatbotSubmission {
            name: self.name,
            email: self.email,
            question: self.question,
            language,
            page_url: page_url.to_string(),
            timestamp: webhook::iso_timestamp(now),
            source: CHATBOT_SOURCE,
        }
    }
}

/// Bot bubble waiting for [`ChatScript::deliver`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingReply {
    text: String,
    next: ChatStep,
}

/// Result of accepting one visitor answer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Answered {
    pub reply: PendingReply,
    /// Set once the question step is answered.
    pub completed: Option<ChatAnswers>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChatScript {
    step: ChatStep,
    messages: Vec<ChatMessage>,
    answers: ChatAnswers,
    awaiting_reply: bool,
}

impl ChatScript {
    pub fn step(&self) -> ChatStep {
        self.step
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_awaiting_reply(&self) -> bool {
        self.awaiting_reply
    }

    /// Posts the greeting the first time the widget opens. Reopening keeps the history.
    pub fn open(&mut self, language: Language) {
        if self.messages.is_empty() {
            self.greet(language);
        }
    }

    /// Starts over from the greeting.
    pub fn reset(&mut self, language: Language) {
        self.messages.clear();
        self.answers = ChatAnswers::default();
        self.awaiting_reply = false;
        self.greet(language);
    }

    fn greet(&mut self, language: Language) {
        self.messages
            .push(ChatMessage::bot(language.content().chatbot.greeting));
        self.step = ChatStep::Name;
    }

    /// Input placeholder for the current step; empty once the script is done.
    pub fn placeholder(&self, language: Language) -> &'static str {
        let chatbot = &language.content().chatbot;
        match self.step {
            ChatStep::Name => chatbot.placeholder_name,
            ChatStep::Email => chatbot.placeholder_email,
            ChatStep::Question => chatbot.placeholder_question,
            ChatStep::Greeting | ChatStep::Complete => "",
        }
    }

    /// Echoes the visitor's trimmed answer and stores it. Blank input, input
    /// outside the name/email/question steps, and input while a reply is
    /// pending are ignored.
    pub fn answer(&mut self, input: &str, language: Language) -> Option<Answered> {
        let text = input.trim();
        if text.is_empty() || self.awaiting_reply {
            return None;
        }
        let chatbot = &language.content().chatbot;
        let (reply, next, completed) = match self.step {
            ChatStep::Name => {
                self.answers.name = text.to_string();
                ((chatbot.ask_email)(text), ChatStep::Email, None)
            }
            ChatStep::Email => {
                self.answers.email = text.to_string();
                (chatbot.ask_question.to_string(), ChatStep::Question, None)
            }
            ChatStep::Question => {
                self.answers.question = text.to_string();
                (
                    chatbot.complete.to_string(),
                    ChatStep::Complete,
                    Some(self.answers.clone()),
                )
            }
            ChatStep::Greeting | ChatStep::Complete => return None,
        };
        self.messages.push(ChatMessage::user(text));
        self.awaiting_reply = true;
        Some(Answered {
            reply: PendingReply { text: reply, next },
            completed,
        })
    }

    /// Appends the scripted follow-up and advances.
    pub fn deliver(&mut self, reply: PendingReply) {
        self.messages.push(ChatMessage::bot(reply.text));
        self.step = reply.next;
        self.awaiting_reply = false;
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn step_through(script: &mut ChatScript, input: &str) -> Option<ChatAnswers> {
        let answered = script.answer(input, Language::En).unwrap();
        script.deliver(answered.reply);
        answered.completed
    }

    #[test]
    fn opening_greets_once() {
        let mut script = ChatScript::default();
        assert_eq!(script.step(), ChatStep::Greeting);
        script.open(Language::En);
        script.open(Language::En);
        assert_eq!(script.messages().len(), 1);
        assert_eq!(script.step(), ChatStep::Name);
        assert_eq!(script.placeholder(Language::En), "Enter your name...");
    }

    #[test]
    fn four_step_script() {
        let mut script = ChatScript::default();
        script.open(Language::En);

        assert_eq!(step_through(&mut script, " Dana "), None);
        assert_eq!(script.messages().len(), 3);
        assert_eq!(script.messages()[1], ChatMessage::user("Dana"));
        assert!(script.messages()[2].text.contains("Dana"));
        assert_eq!(script.step(), ChatStep::Email);

        assert_eq!(step_through(&mut script, "dana@example.com"), None);
        assert_eq!(script.messages().len(), 5);
        assert_eq!(script.step(), ChatStep::Question);

        let answers = step_through(&mut script, "Can you automate invoices?").unwrap();
        assert_eq!(script.messages().len(), 7);
        assert_eq!(script.step(), ChatStep::Complete);
        assert_eq!(answers.name, "Dana");
        assert_eq!(answers.email, "dana@example.com");
        assert_eq!(answers.question, "Can you automate invoices?");

        assert!(script.answer("more?", Language::En).is_none());
        assert_eq!(script.placeholder(Language::En), "");
    }

    #[test]
    fn blank_and_pending_input_is_ignored() {
        let mut script = ChatScript::default();
        script.open(Language::He);
        assert!(script.answer("   ", Language::He).is_none());

        let answered = script.answer("דנה", Language::He).unwrap();
        assert!(script.is_awaiting_reply());
        assert!(script.answer("again", Language::He).is_none());
        script.deliver(answered.reply);
        assert_eq!(script.messages().len(), 3);
        assert!(script.messages()[2].text.contains("דנה"));
    }

    #[test]
    fn reset_starts_over() {
        let mut script = ChatScript::default();
        script.open(Language::En);
        step_through(&mut script, "Dana");
        script.reset(Language::En);
        assert_eq!(script.messages().len(), 1);
        assert_eq!(script.step(), ChatStep::Name);
    }

    #[test]
    fn answers_become_a_chatbot_payload() {
        let answers = ChatAnswers {
            name: "Dana".into(),
            email: "dana@example.com".into(),
            question: "Hi".into(),
        };
        let at = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        let payload = answers.into_submission(Language::En, "/services", at);
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["source"], "chatbot");
        assert_eq!(json["pageUrl"], "/services");
        assert_eq!(json["question"], "Hi");
    }
}
