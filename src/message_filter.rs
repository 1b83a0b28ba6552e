use aisparser::AisMessage;

use crate::config::Config;

/// Filters decoded AIS messages based on application configuration
/// # Arguments
/// * `config` - Application configuration containing filter rules
/// * `message` - The decoded message to filter
///
/// # Returns
/// true if the message should be processed, false if it should be skipped
pub fn should_process_message(config: &Config, message: &AisMessage) -> bool {
    config.filter.should_accept(message.msgid(), message.userid())
}
