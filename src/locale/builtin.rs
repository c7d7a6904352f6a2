//! Built-in locale and currency tables.

use super::{LocaleEntry, LocaleTable};

/// Identifier of the built-in default locale.
pub const DEFAULT_LOCALE: &str = "en_US";

/// Locale tables keyed by `<lang>_<REGION>`.
pub fn locales() -> LocaleTable {
    LocaleTable::from([
        ("en_US".to_string(), en_us()),
        ("en_GB".to_string(), en_gb()),
        ("fr_FR".to_string(), fr_fr()),
    ])
}

/// Currency tables keyed by ISO 4217 code.
pub fn currencies() -> LocaleTable {
    LocaleTable::from([
        ("USD".to_string(), LocaleEntry::new('.', ',', "$", "$0,0.00")),
        ("GBP".to_string(), LocaleEntry::new('.', ',', "£", "$0,0.00")),
        ("EUR".to_string(), LocaleEntry::new(',', '.', "€", "0,0.00 $")),
        ("JPY".to_string(), LocaleEntry::new('.', ',', "¥", "$0,0")),
        ("CHF".to_string(), LocaleEntry::new('.', '\'', "CHF", "$ 0,0.00")),
    ])
}

/// US English locale.
pub fn en_us() -> LocaleEntry {
    LocaleEntry::new('.', ',', "$", "$0,0.00")
}

/// British English locale.
pub fn en_gb() -> LocaleEntry {
    LocaleEntry::new('.', ',', "£", "$0,0.00")
}

/// French locale.
pub fn fr_fr() -> LocaleEntry {
    LocaleEntry::new(',', '.', "€", "0,0.00$")
}
