use crate::messages::AisMessage;

/// Trait for components that consume decoded AIS messages
///
/// Handlers receive every message and pick out the kinds they care about,
/// so the read loop does not need to know what each consumer wants.
pub trait MessageHandler {
    /// Process one decoded message
    fn handle_message(&mut self, message: &AisMessage);
}
