use tokio::sync::Mutex;

use crate::chat::{Dialogue, Session};
use crate::core::AppConfig;

/// Shared server state: the one hosted session and the dialogue
/// controller that operates on it. The served process is single
/// session; there is no multi-user support.
pub struct AppState {
    pub dialogue: Dialogue,
    // Session mutation is not concurrency-safe, so handlers hold this
    // async mutex across the whole operation. That gives the
    // at-most-one in-flight operation per session discipline: a
    // second request waits until the current one returns.
    pub session: Mutex<Session>,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(dialogue: Dialogue, config: AppConfig) -> Self {
        Self {
            dialogue,
            session: Mutex::new(Session::new()),
            config,
        }
    }
}
