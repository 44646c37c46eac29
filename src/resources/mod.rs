pub mod noop;
pub mod testres;
pub mod traits;

use crate::core::binder::Binder;
use crate::core::registry::Registry;
use crate::utils::error::Result;

/// A registry holding the kinds that ship with this crate.
pub fn builtin_registry(binder: Binder) -> Result<Registry> {
    let mut registry = Registry::new(binder);
    registry.register(noop::KIND, noop::factory)?;
    registry.register(testres::KIND, testres::factory)?;
    Ok(registry)
}
