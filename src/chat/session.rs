//! The core models for managing a stateful chat with an LLM.
use crate::openai::{Message, Role};

/// Append-only ordered history of turns for a session.
#[derive(Default)]
pub struct Transcript(Vec<Message>);

impl Transcript {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn messages(&self) -> &[Message] {
        &self.0
    }

    pub fn push(&mut self, msg: Message) {
        self.0.push(msg)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.0.iter()
    }
}

/// The session aggregate: the transcript, the currently loaded
/// reference document text, and the transient pending input. Created
/// empty at session start, mutated by every user interaction, and
/// destroyed when the session ends. No durable storage.
#[derive(Default)]
pub struct Session {
    transcript: Transcript,
    document_text: String,
    pending_input: String,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a turn to the end of the transcript. No constraints on
    /// `content` (it may be empty); always succeeds.
    pub fn append_turn(&mut self, role: Role, content: &str) {
        self.transcript.push(Message::new(role, content));
    }

    /// Overwrites the reference document text wholesale; the previous
    /// value is discarded. Does not touch the transcript.
    pub fn replace_document_text(&mut self, text: String) {
        self.document_text = text;
    }

    pub fn document_text(&self) -> &str {
        &self.document_text
    }

    /// The current transcript as a read-only ordered sequence, for
    /// display or for passing to the model collaborator. No side
    /// effects.
    pub fn snapshot(&self) -> &[Message] {
        self.transcript.messages()
    }

    pub fn set_pending_input(&mut self, text: &str) {
        self.pending_input = text.to_string();
    }

    /// Returns the pending input and clears the slot, the way sending
    /// a message clears an input box.
    pub fn take_pending_input(&mut self) -> String {
        std::mem::take(&mut self.pending_input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_turn_grows_transcript_in_order() {
        let mut session = Session::new();
        assert!(session.snapshot().is_empty());

        session.append_turn(Role::User, "first");
        session.append_turn(Role::Assistant, "second");
        session.append_turn(Role::System, "third");

        let snapshot = session.snapshot();
        assert_eq!(snapshot.len(), 3);
        assert_eq!(snapshot[0], Message::new(Role::User, "first"));
        assert_eq!(snapshot[1], Message::new(Role::Assistant, "second"));
        assert_eq!(snapshot[2], Message::new(Role::System, "third"));
    }

    #[test]
    fn test_append_turn_preserves_prefix() {
        let mut session = Session::new();
        session.append_turn(Role::User, "hello");
        let before: Vec<Message> = session.snapshot().to_vec();

        session.append_turn(Role::Assistant, "hi");

        let snapshot = session.snapshot();
        assert_eq!(&snapshot[..before.len()], before.as_slice());
        assert_eq!(snapshot.last(), Some(&Message::new(Role::Assistant, "hi")));
    }

    #[test]
    fn test_append_turn_allows_empty_content() {
        let mut session = Session::new();
        session.append_turn(Role::User, "");
        assert_eq!(session.snapshot().last().unwrap().content, "");
    }

    #[test]
    fn test_replace_document_text_overwrites_wholesale() {
        let mut session = Session::new();
        session.replace_document_text("first document".to_string());
        assert_eq!(session.document_text(), "first document");

        session.replace_document_text("second".to_string());
        assert_eq!(session.document_text(), "second");
    }

    #[test]
    fn test_replace_document_text_does_not_touch_transcript() {
        let mut session = Session::new();
        session.append_turn(Role::User, "hello");

        session.replace_document_text("a document".to_string());

        assert_eq!(session.snapshot().len(), 1);
    }

    #[test]
    fn test_take_pending_input_clears_slot() {
        let mut session = Session::new();
        session.set_pending_input("draft");

        assert_eq!(session.take_pending_input(), "draft");
        assert_eq!(session.take_pending_input(), "");
    }
}
