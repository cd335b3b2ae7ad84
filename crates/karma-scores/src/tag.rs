//! Generation id tagging.

use rand_core::{OsRng, RngCore as _};

/// Produces the opaque, collision-resistant tokens that name generations.
///
/// A trait so tests can pin ids and force generation failures; the
/// rotation protocol aborts before writing anything when tagging fails.
pub trait GenerationTagger: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  fn generation_tag(&self) -> Result<String, Self::Error>;
}

/// Tags generations with 64 random bits from the operating-system RNG,
/// hex-encoded.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsTagger;

impl GenerationTagger for OsTagger {
  type Error = rand_core::Error;

  fn generation_tag(&self) -> Result<String, rand_core::Error> {
    let mut bytes = [0u8; 8];
    OsRng.try_fill_bytes(&mut bytes)?;
    Ok(hex::encode(bytes))
  }
}
