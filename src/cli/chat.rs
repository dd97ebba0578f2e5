use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::chat::{Dialogue, Session};
use crate::core::AppConfig;
use crate::openai::Role;

/// Interactive REPL against a single in-memory session. Plain input
/// is sent as the next user message; `/load <path>` uploads a PDF and
/// `/ask <query>` answers from the loaded document instead of the
/// conversation history.
pub async fn run(pdf: Option<PathBuf>) -> Result<()> {
    let mut rl = DefaultEditor::new()?;

    let config = AppConfig::default();
    let dialogue = Dialogue::from_config(&config);
    let mut session = Session::new();
    session.append_turn(Role::System, &config.system_message);

    if let Some(path) = pdf {
        load_document(&dialogue, &mut session, &path);
    }

    loop {
        let readline = rl.readline(">>> ");
        match readline {
            Ok(line) => {
                if let Some(path) = line.strip_prefix("/load ") {
                    load_document(&dialogue, &mut session, Path::new(path.trim()));
                    continue;
                }

                let result = if let Some(query) = line.strip_prefix("/ask ") {
                    dialogue.submit_grounded_query(&mut session, query).await
                } else {
                    session.set_pending_input(&line);
                    dialogue.submit_pending_input(&mut session).await
                };

                match result {
                    Ok(msg) => println!("{}", msg.content),
                    // The user turn stays in the transcript so the
                    // next submission retries with it as context
                    Err(e) => println!("Error: {}", e),
                }
            }
            Err(ReadlineError::Interrupted) => break,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}

fn load_document(dialogue: &Dialogue, session: &mut Session, path: &Path) {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            println!("Error: {}", e);
            return;
        }
    };
    match dialogue.submit_document(session, &bytes) {
        Ok(()) => println!("Loaded {}", path.display()),
        Err(e) => println!("Error: {}", e),
    }
}
