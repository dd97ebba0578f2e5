//! The dialogue controller: orchestrates one user turn at a time
//! against the model and document extraction collaborators.
use crate::chat::session::Session;
use crate::core::{AppConfig, ChatError};
use crate::openai::{CompletionModel, Message, OpenAiClient, Role};
use crate::pdf::{ExtractText, PdfExtractor};

/// System instruction for grounded queries. Fixed, independent of the
/// configurable system message the front ends seed a session with.
pub const GROUNDING_SYSTEM_PROMPT: &str = "You are a helpful assistant.";

/// Separator between the user query and the document excerpt in a
/// grounded prompt.
pub const DOCUMENT_CONTEXT_SEPARATOR: &str = "\n\nContext from PDF:\n";

/// Grounded prompts carry at most this many characters of document
/// text. A character count, not tokens or words: it bounds prompt
/// size without tokenizing and must stay a plain `chars()` truncation
/// for compatibility.
pub const DOCUMENT_CONTEXT_CHAR_LIMIT: usize = 1000;

/// Content of the system turn recorded after a document is loaded.
pub const DOCUMENT_LOADED_NOTICE: &str = "PDF content uploaded and extracted.";

/// Orchestrates user turns against a `Session`. Owns the two external
/// collaborators; the session is passed explicitly into every
/// operation rather than held in ambient state. Operations run to
/// completion one at a time; a caller introducing a concurrent front
/// end must serialize them per session.
pub struct Dialogue {
    model: Box<dyn CompletionModel>,
    extractor: Box<dyn ExtractText>,
}

impl Dialogue {
    pub fn new(model: Box<dyn CompletionModel>, extractor: Box<dyn ExtractText>) -> Self {
        Self { model, extractor }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            Box::new(OpenAiClient::from_config(config)),
            Box::new(PdfExtractor),
        )
    }

    /// Appends `text` as a user turn, requests the next reply with
    /// the full transcript as the prompt, and appends the reply as an
    /// assistant turn. Empty submissions are accepted and produce a
    /// model call with empty user content.
    ///
    /// On failure the user turn already appended remains in the
    /// transcript with no reply; the caller may retry.
    pub async fn submit_user_message(
        &self,
        session: &mut Session,
        text: &str,
    ) -> Result<Message, ChatError> {
        session.append_turn(Role::User, text);

        let reply = self
            .model
            .complete(session.snapshot())
            .await
            .map_err(ChatError::ModelCall)?;

        session.append_turn(Role::Assistant, &reply);
        Ok(Message::new(Role::Assistant, &reply))
    }

    /// Takes the session's pending input and submits it as the next
    /// user message. The slot is cleared even if the model call
    /// fails.
    pub async fn submit_pending_input(
        &self,
        session: &mut Session,
    ) -> Result<Message, ChatError> {
        let text = session.take_pending_input();
        self.submit_user_message(session, &text).await
    }

    /// Extracts the document's plain text page by page (concatenated
    /// in page order with no separator), replaces the session's
    /// reference document text, and records a system turn noting the
    /// load. The session is left unchanged when extraction fails.
    pub fn submit_document(&self, session: &mut Session, bytes: &[u8]) -> Result<(), ChatError> {
        let text = self
            .extractor
            .extract_text(bytes)
            .map_err(ChatError::DocumentExtraction)?;

        tracing::debug!("Extracted {} characters of document text", text.chars().count());

        session.replace_document_text(text);
        session.append_turn(Role::System, DOCUMENT_LOADED_NOTICE);
        Ok(())
    }

    /// Answers `query` using the loaded document text instead of the
    /// conversation history: the model sees exactly two messages, the
    /// fixed grounding instruction and the query joined to the first
    /// `DOCUMENT_CONTEXT_CHAR_LIMIT` characters of the document.
    /// Prior transcript history is not sent. The reply is appended to
    /// the transcript as an assistant turn; nothing is appended on
    /// failure.
    pub async fn submit_grounded_query(
        &self,
        session: &mut Session,
        query: &str,
    ) -> Result<Message, ChatError> {
        let context: String = session
            .document_text()
            .chars()
            .take(DOCUMENT_CONTEXT_CHAR_LIMIT)
            .collect();
        let augmented = format!("{}{}{}", query, DOCUMENT_CONTEXT_SEPARATOR, context);

        let prompt = [
            Message::new(Role::System, GROUNDING_SYSTEM_PROMPT),
            Message::new(Role::User, &augmented),
        ];

        let reply = self
            .model
            .complete(&prompt)
            .await
            .map_err(ChatError::ModelCall)?;

        session.append_turn(Role::Assistant, &reply);
        Ok(Message::new(Role::Assistant, &reply))
    }
}
