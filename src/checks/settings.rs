/*!
 * Startup check on the active language configuration.
 */

use log::debug;

use super::messages::{CheckId, CheckMessage};
use super::registry::CheckContext;

/// Report E001 when the active language list was never customized.
///
/// Compares the configured (code, name) pairs with the built-in default list
/// by value. Stateless and idempotent.
pub fn check_settings(context: &CheckContext<'_>) -> Vec<CheckMessage> {
    let settings = context.settings;
    if !settings.is_default_languages() {
        return Vec::new();
    }

    debug!("Active language list equals the built-in default");
    vec![CheckMessage::global_error(
        CheckId::E001,
        format!(
            "LANGUAGES setting isn't set in {} module.",
            settings.settings_module
        ),
    )]
}
