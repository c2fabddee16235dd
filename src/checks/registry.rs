/*!
 * Check registration and execution.
 *
 * The host builds a `CheckRegistry` once at startup, registers checks under
 * tags, and runs them against a `CheckContext` to collect every message.
 */

use std::fmt;

use log::debug;

use crate::app_config::Settings;
use crate::model::TranslatedModel;

use super::messages::CheckMessage;
use super::settings::check_settings;

/// Category a check is registered under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// Checks on the language configuration
    Translation,
    /// Checks on model declarations
    Models,
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Translation => write!(f, "translation"),
            Self::Models => write!(f, "models"),
        }
    }
}

/// Everything a check may inspect
#[derive(Debug, Clone, Copy)]
pub struct CheckContext<'a> {
    pub settings: &'a Settings,
    pub models: &'a [TranslatedModel],
}

impl<'a> CheckContext<'a> {
    pub fn new(settings: &'a Settings, models: &'a [TranslatedModel]) -> Self {
        Self { settings, models }
    }
}

/// A registered check function
pub type CheckFn = Box<dyn Fn(&CheckContext<'_>) -> Vec<CheckMessage> + Send + Sync>;

/// Ordered collection of registered checks
#[derive(Default)]
pub struct CheckRegistry {
    checks: Vec<(Tag, CheckFn)>,
}

impl CheckRegistry {
    /// An empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the built-in checks: the settings check under
    /// `Tag::Translation` and the model pass under `Tag::Models`
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Tag::Translation, check_settings);
        registry.register(Tag::Models, check_models);
        registry
    }

    /// Register a check under `tag`
    pub fn register<F>(&mut self, tag: Tag, check: F)
    where
        F: Fn(&CheckContext<'_>) -> Vec<CheckMessage> + Send + Sync + 'static,
    {
        self.checks.push((tag, Box::new(check)));
    }

    /// Number of registered checks
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Run registered checks in registration order.
    ///
    /// With `tags`, only checks registered under one of them run.
    pub fn run_checks(&self, context: &CheckContext<'_>, tags: Option<&[Tag]>) -> Vec<CheckMessage> {
        let mut messages = Vec::new();
        for (tag, check) in &self.checks {
            if let Some(wanted) = tags {
                if !wanted.contains(tag) {
                    continue;
                }
            }
            let found = check(context);
            debug!("Check tagged '{}' produced {} message(s)", tag, found.len());
            messages.extend(found);
        }
        messages
    }
}

impl fmt::Debug for CheckRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tags: Vec<Tag> = self.checks.iter().map(|(tag, _)| *tag).collect();
        f.debug_struct("CheckRegistry").field("checks", &tags).finish()
    }
}

/// Run `check()` on every model in the context, in order
pub fn check_models(context: &CheckContext<'_>) -> Vec<CheckMessage> {
    context
        .models
        .iter()
        .flat_map(|model| model.check(context.settings))
        .collect()
}
