pub mod dialogue;
pub mod session;

pub use dialogue::{
    DOCUMENT_CONTEXT_CHAR_LIMIT, DOCUMENT_CONTEXT_SEPARATOR, DOCUMENT_LOADED_NOTICE, Dialogue,
    GROUNDING_SYSTEM_PROMPT,
};
pub use session::{Session, Transcript};
