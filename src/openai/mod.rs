mod core;

pub use core::{CompletionModel, Message, OpenAiClient, Role, completion};
