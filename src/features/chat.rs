use tracing::{debug, info};
use uuid::Uuid;

use crate::browser::{Browser, SessionStorage};

/// Session storage key the chat page reads on load.
pub const CHAT_DOC_KEY: &str = "startChatWithDoc";
/// Session storage key holding the chat session id minted at launch.
pub const CHAT_SESSION_KEY: &str = "chatSessionId";
pub const CHAT_ROUTE: &str = "/chat";

/// The document a chat should open with, passed from the page that launched
/// it to the chat view. The chat service refuses to start a chat without a
/// session id, so one is minted per launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatHandoff {
    pub document_id: String,
    pub session_id: Uuid,
}

impl ChatHandoff {
    /// Read the pending handoff and clear it, so a reload of the chat page
    /// does not restart the same conversation.
    ///
    /// A marker written without a session id (or with a malformed one) gets a
    /// fresh id.
    #[must_use]
    pub fn take(session: &SessionStorage) -> Option<Self> {
        let session_id = session
            .remove(CHAT_SESSION_KEY)
            .and_then(|raw| Uuid::parse_str(&raw).ok());
        let document_id = session.remove(CHAT_DOC_KEY)?;
        let session_id = session_id.unwrap_or_else(Uuid::new_v4);

        debug!(
            "Consumed chat handoff for document {} (session {})",
            document_id, session_id
        );
        Some(Self {
            document_id,
            session_id,
        })
    }
}

pub struct ChatLauncher<'a> {
    browser: &'a Browser,
}

impl<'a> ChatLauncher<'a> {
    #[must_use]
    pub fn new(browser: &'a Browser) -> Self {
        Self { browser }
    }

    /// Record `document_id` for the chat page and navigate there.
    ///
    /// Does nothing for an absent or empty id.
    pub fn launch(&self, document_id: Option<&str>) -> Option<ChatHandoff> {
        let document_id = document_id.filter(|id| !id.is_empty())?;
        let session_id = Uuid::new_v4();

        let session = self.browser.session();
        session.set(CHAT_DOC_KEY, document_id);
        session.set(CHAT_SESSION_KEY, session_id.to_string());
        info!(
            "Starting chat with document {} (session {})",
            document_id, session_id
        );
        self.browser.navigate(CHAT_ROUTE);

        Some(ChatHandoff {
            document_id: document_id.to_string(),
            session_id,
        })
    }
}
