//! Message key lookup.
//!
//! The formatting façades only compute keys and arguments; turning those into
//! localized text is the job of a [`MessageResolver`]. [`Catalog`] is an
//! in-memory resolver that renders one Tera template per key.

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde_json::{Map, Value};
use tera::{Context, Tera};

use crate::logging::trace;
use crate::{Error, Result};

/// Substitution arguments passed along with a message key.
pub type MessageArgs = Map<String, Value>;

/// Resolves a message key plus arguments into localized text.
#[async_trait]
pub trait MessageResolver: Send + Sync {
    async fn resolve(&self, key: &str, args: &MessageArgs) -> Result<String>;
}

/// Template-backed message catalog for a single locale.
///
/// Templates use Tera syntax, so `{{ value }}` inserts the `value` argument.
///
/// ```rust
/// use unitfmt::format::Catalog;
///
/// let catalog = Catalog::new()
///     .with_message("minutes-ago-long", "{{ value }} minutes ago")
///     .unwrap();
/// assert!(catalog.contains("minutes-ago-long"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tera: Tera,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from a JSON object mapping keys to templates.
    pub fn from_json(json: &str) -> Result<Self> {
        let messages: BTreeMap<String, String> = serde_json::from_str(json)?;
        let mut catalog = Self::new();
        for (key, template) in &messages {
            catalog.add_message(key, template)?;
        }
        Ok(catalog)
    }

    /// Adds or replaces the template for `key`.
    pub fn add_message(&mut self, key: &str, template: &str) -> Result<()> {
        self.tera.add_raw_template(key, template)?;
        Ok(())
    }

    pub fn with_message(mut self, key: &str, template: &str) -> Result<Self> {
        self.add_message(key, template)?;
        Ok(self)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.tera.get_template_names().any(|name| name == key)
    }
}

#[async_trait]
impl MessageResolver for Catalog {
    async fn resolve(&self, key: &str, args: &MessageArgs) -> Result<String> {
        trace!("resolving message {key} with {} args", args.len());
        if !self.contains(key) {
            return Err(Error::MissingMessage(key.to_string()));
        }
        let ctx = Context::from_serialize(args)?;
        Ok(self.tera.render(key, &ctx)?)
    }
}
