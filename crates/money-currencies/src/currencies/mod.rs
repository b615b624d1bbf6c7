//! Pre-defined world currencies, organized by region.
//!
//! Every entry is a `static` so that registry lookups hand out
//! `&'static CurrencyConfig` without copying.

pub mod africa;
pub mod america;
pub mod asia;
pub mod europe;
pub mod oceania;

// Re-export all currencies at the `currencies` module level for convenience.
pub use africa::*;
pub use america::*;
pub use asia::*;
pub use europe::*;
pub use oceania::*;
