use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Invocation metadata supplied by the host for a single triggering event.
///
/// The host owns this object; handlers receive a shared reference for the
/// duration of one invocation and must not retain it. Handlers do not branch
/// on any of these fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionContext {
    user_id: Uuid,
    message_name: String,
    primary_entity_name: String,
    depth: u32,
}

impl ExecutionContext {
    pub fn new(user_id: Uuid, message_name: &str, primary_entity_name: &str) -> Self {
        Self {
            user_id,
            message_name: message_name.to_string(),
            primary_entity_name: primary_entity_name.to_string(),
            depth: 1,
        }
    }

    pub fn depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Identity of the user whose action triggered the event. Data-access
    /// clients created for this invocation are scoped to this user.
    pub fn user_id(&self) -> Uuid { self.user_id }

    pub fn message_name(&self) -> &str { &self.message_name }

    pub fn primary_entity_name(&self) -> &str { &self.primary_entity_name }

    pub fn current_depth(&self) -> u32 { self.depth }
}
