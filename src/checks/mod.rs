/*!
 * System checks for translated models.
 *
 * This module provides the structured records produced by every check and
 * the registry the host runs at startup:
 * - `messages`: `CheckMessage`, its stable `CheckId` and severity `Level`
 * - `registry`: `CheckRegistry`, `CheckContext` and check `Tag`s
 * - `settings`: the startup check on the active language configuration
 */

pub mod messages;
pub mod registry;
pub mod settings;

// Re-export main types
pub use messages::{CheckId, CheckMessage, Level};
pub use registry::{CheckContext, CheckFn, CheckRegistry, Tag, check_models};
pub use settings::check_settings;
