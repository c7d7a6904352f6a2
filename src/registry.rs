//! Locale registry: locale and currency tables plus the default locale.

use std::fs;
use std::path::Path;
use std::sync::{Arc, RwLock};

use tracing::{debug, info};

use crate::error::ConfigurationError;
use crate::locale::{builtin, LocaleDefinition, LocaleEntry, LocaleTable};
use crate::money::Money;

/// A registry shared between threads that may be reconfigured at runtime.
pub type SharedRegistry = Arc<RwLock<LocaleRegistry>>;

/// Maps locale identifiers to locale definitions.
///
/// Built once at startup and read afterwards; every mutation takes `&mut self`.
/// Lookups check the locale table first, then the currency table.
#[derive(Debug, Clone)]
pub struct LocaleRegistry {
    locales: LocaleTable,
    currencies: LocaleTable,
    default_locale: String,
}

impl Default for LocaleRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl LocaleRegistry {
    /// Create a registry from a locale table and a default locale identifier.
    pub fn new(locales: LocaleTable, default_locale: impl Into<String>) -> Self {
        LocaleRegistry {
            locales,
            currencies: LocaleTable::new(),
            default_locale: default_locale.into(),
        }
    }

    /// The built-in locale and currency tables, defaulting to `en_US`.
    pub fn builtin() -> Self {
        let mut registry = Self::new(builtin::locales(), builtin::DEFAULT_LOCALE);
        registry.currencies = builtin::currencies();
        registry
    }

    /// Wrap the registry for shared, lock-protected reconfiguration.
    pub fn into_shared(self) -> SharedRegistry {
        Arc::new(RwLock::new(self))
    }

    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// Change the default locale. Unknown identifiers are ignored.
    pub fn set_default_locale(&mut self, locale_id: &str) {
        if self.contains(locale_id) {
            self.default_locale = locale_id.to_string();
        } else {
            debug!(
                locale = locale_id,
                default = %self.default_locale,
                "ignoring unknown default locale"
            );
        }
    }

    /// Returns true if either table has an entry for `locale_id`.
    pub fn contains(&self, locale_id: &str) -> bool {
        self.lookup(locale_id).is_some()
    }

    /// Identifiers of both tables, sorted, without duplicates.
    pub fn locale_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self
            .locales
            .keys()
            .chain(self.currencies.keys())
            .map(String::as_str)
            .collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }

    /// Replace the locale table wholesale.
    pub fn use_locales(&mut self, locales: LocaleTable) {
        info!(count = locales.len(), "using locale table");
        self.locales = locales;
    }

    /// Replace the currency table wholesale.
    pub fn use_currencies(&mut self, currencies: LocaleTable) {
        info!(count = currencies.len(), "using currency table");
        self.currencies = currencies;
    }

    /// Load the locale table from a JSON file.
    pub fn load_locales(&mut self, path: impl AsRef<Path>) -> Result<(), ConfigurationError> {
        let table = read_table(path.as_ref())?;
        self.use_locales(table);
        Ok(())
    }

    /// Load the currency table from a JSON file.
    pub fn load_currencies(&mut self, path: impl AsRef<Path>) -> Result<(), ConfigurationError> {
        let table = read_table(path.as_ref())?;
        self.use_currencies(table);
        Ok(())
    }

    /// Resolve a locale identifier to a complete definition.
    ///
    /// Unknown identifiers fall back to the default locale. Fields missing
    /// from the entry are taken from the default entry, then from the base
    /// values.
    pub fn resolve(&self, locale_id: &str) -> Result<LocaleDefinition, ConfigurationError> {
        let (used, entry) = self.resolve_entry(locale_id)?;
        let merged = match self.lookup(&self.default_locale) {
            Some((_, default)) => entry.or(default),
            None => entry.clone(),
        };
        LocaleDefinition::from_entry(&merged).validate(used)
    }

    /// The identifier `resolve` actually uses for `locale_id`.
    pub fn resolve_id(&self, locale_id: &str) -> Result<&str, ConfigurationError> {
        self.resolve_entry(locale_id).map(|(used, _)| used)
    }

    /// Create a formatter bound to the resolved locale.
    pub fn money(&self, locale_id: &str) -> Result<Money, ConfigurationError> {
        let (used, _) = self.resolve_entry(locale_id)?;
        let definition = self.resolve(used)?;
        Ok(Money::new(used, definition))
    }

    fn resolve_entry(&self, locale_id: &str) -> Result<(&str, &LocaleEntry), ConfigurationError> {
        if let Some(found) = self.lookup(locale_id) {
            return Ok(found);
        }

        debug!(
            locale = locale_id,
            default = %self.default_locale,
            "locale not registered, using default"
        );
        self.lookup(&self.default_locale)
            .ok_or_else(|| ConfigurationError::UnknownDefault {
                requested: locale_id.to_string(),
                default: self.default_locale.clone(),
            })
    }

    fn lookup(&self, locale_id: &str) -> Option<(&str, &LocaleEntry)> {
        self.locales
            .get_key_value(locale_id)
            .or_else(|| self.currencies.get_key_value(locale_id))
            .map(|(id, entry)| (id.as_str(), entry))
    }
}

/// Parse a locale table from a JSON document.
pub fn locales_from_json(json: &str) -> Result<LocaleTable, ConfigurationError> {
    Ok(serde_json::from_str(json)?)
}

fn read_table(path: &Path) -> Result<LocaleTable, ConfigurationError> {
    let data = fs::read_to_string(path)?;
    let table = locales_from_json(&data)?;
    info!(path = %path.display(), count = table.len(), "loaded locale table");
    Ok(table)
}
