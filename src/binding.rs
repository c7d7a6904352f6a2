//! Per-request locale binding.

use crate::error::{ConfigurationError, PatternError};
use crate::money::Money;
use crate::registry::LocaleRegistry;

/// Shorthand formatting function bound to one locale.
pub type MoneyFormatFn = Box<dyn Fn(f64) -> Result<String, PatternError> + Send + Sync>;

/// A request-like context that can carry a locale-bound formatter.
pub trait LocaleBinding {
    fn bind_money(&mut self, money: Money, format: MoneyFormatFn);
}

/// Attach a formatter and a shorthand `format` function for `locale_id` to `ctx`.
pub fn set_locale<C>(
    ctx: &mut C,
    registry: &LocaleRegistry,
    locale_id: &str,
) -> Result<(), ConfigurationError>
where
    C: LocaleBinding + ?Sized,
{
    let money = registry.money(locale_id)?;
    let bound = money.clone();
    ctx.bind_money(money, Box::new(move |value| bound.format(value)));
    Ok(())
}
