pub use anyhow::{anyhow, bail, Result};
pub use tracing::{debug, error, info, trace, warn};

/// Any failure raised by a product provider. Transport, status and decode
/// errors are all flattened into this one opaque type.
pub type ProviderError = anyhow::Error;
