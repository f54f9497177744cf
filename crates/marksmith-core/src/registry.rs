//! Immutable name -> action registry.
//!
//! A registry is built once from the built-in actions plus caller
//! overrides, then shared by reference with every `apply` call. There is no
//! global registry and no way to remove an entry: an override can replace a
//! built-in, never delete it.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use smol_str::SmolStr;

use crate::action::Action;
use crate::actions::default_actions;
use crate::error::EditorError;
use crate::formatter::CanonicalFormatter;
use crate::types::ActionResult;

/// Action map keyed by command name.
pub type ActionMap = BTreeMap<SmolStr, Arc<dyn Action>>;

/// Immutable mapping from command name to action.
///
/// Cheap to clone; actions are shared.
#[derive(Clone)]
pub struct ActionRegistry {
    actions: ActionMap,
}

impl ActionRegistry {
    /// Start from the built-in actions, with `format` backed by `formatter`.
    pub fn builder(formatter: Arc<dyn CanonicalFormatter>) -> ActionRegistryBuilder {
        ActionRegistryBuilder {
            actions: default_actions(formatter),
        }
    }

    /// Registry with only the built-in actions.
    pub fn with_defaults(formatter: Arc<dyn CanonicalFormatter>) -> Self {
        Self::builder(formatter).build()
    }

    /// Look up an action by name.
    pub fn get(&self, name: &str) -> Option<&dyn Action> {
        self.actions.get(name).map(|action| action.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.actions.contains_key(name)
    }

    /// Registered names, in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.actions.keys().map(SmolStr::as_str)
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Apply the action registered under `name`. See [`crate::engine::apply`].
    pub fn apply(
        &self,
        name: &str,
        text: &str,
        start: usize,
        end: usize,
    ) -> Result<ActionResult, EditorError> {
        crate::engine::apply(self, name, text, start, end)
    }
}

impl fmt::Debug for ActionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}

/// Collects overrides on top of the built-in actions.
///
/// Later entries win on a name collision.
pub struct ActionRegistryBuilder {
    actions: ActionMap,
}

impl ActionRegistryBuilder {
    /// Register `action` under `name`, replacing any existing entry.
    pub fn with_action(self, name: impl Into<SmolStr>, action: impl Action + 'static) -> Self {
        self.with_shared_action(name, Arc::new(action))
    }

    /// Register an already shared action under `name`.
    pub fn with_shared_action(mut self, name: impl Into<SmolStr>, action: Arc<dyn Action>) -> Self {
        let name = name.into();
        if self.actions.insert(name.clone(), action).is_some() {
            tracing::debug!(target: "marksmith::registry", action = %name, "overriding action");
        }
        self
    }

    pub fn build(self) -> ActionRegistry {
        ActionRegistry {
            actions: self.actions,
        }
    }
}

/// Merge `overrides` over the built-in actions.
pub fn build_registry<I, K>(formatter: Arc<dyn CanonicalFormatter>, overrides: I) -> ActionRegistry
where
    I: IntoIterator<Item = (K, Arc<dyn Action>)>,
    K: Into<SmolStr>,
{
    overrides
        .into_iter()
        .fold(ActionRegistry::builder(formatter), |builder, (name, action)| {
            builder.with_shared_action(name, action)
        })
        .build()
}
