//! BLAKE2b runtime configuration (kernel overrides).
//!
//! Both kernels are portable scalar code, so no capability clamping is
//! needed: a forced kernel is always honored.

use super::kernels::Blake2bKernelId;

/// Forced compression kernel for BLAKE2b.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Blake2bForce {
  /// Use the default selector.
  #[default]
  Auto,
  /// Force the table-driven kernel.
  Portable,
  /// Force the fully unrolled kernel.
  Unrolled,
}

impl Blake2bForce {
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Auto => "auto",
      Self::Portable => "portable",
      Self::Unrolled => "unrolled",
    }
  }

  /// Parse an override value. Unknown or empty values yield `None`.
  #[must_use]
  pub fn parse(value: &str) -> Option<Self> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("auto") {
      return Some(Self::Auto);
    }
    if value.eq_ignore_ascii_case("portable")
      || value.eq_ignore_ascii_case("table")
      || value.eq_ignore_ascii_case("scalar")
    {
      return Some(Self::Portable);
    }
    if value.eq_ignore_ascii_case("unrolled") {
      return Some(Self::Unrolled);
    }
    None
  }
}

/// Full BLAKE2b runtime configuration (after applying overrides).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Blake2bConfig {
  /// Requested force mode (env/programmatic).
  pub requested_force: Blake2bForce,
  /// Kernel new hashers use unless pinned through `Params::kernel`.
  pub effective_kernel: Blake2bKernelId,
}

#[cfg(feature = "std")]
fn read_env_force() -> Blake2bForce {
  std::env::var("RSBLAKE2_BLAKE2B_FORCE")
    .ok()
    .and_then(|v| Blake2bForce::parse(&v))
    .unwrap_or_default()
}

#[cfg(feature = "std")]
fn requested_force() -> Blake2bForce {
  use std::sync::OnceLock;
  static FORCE: OnceLock<Blake2bForce> = OnceLock::new();
  *FORCE.get_or_init(read_env_force)
}

#[cfg(not(feature = "std"))]
fn requested_force() -> Blake2bForce {
  Blake2bForce::Auto
}

#[inline]
#[must_use]
pub(crate) const fn resolve(force: Blake2bForce) -> Blake2bKernelId {
  match force {
    Blake2bForce::Auto | Blake2bForce::Portable => Blake2bKernelId::Portable,
    Blake2bForce::Unrolled => Blake2bKernelId::Unrolled,
  }
}

/// Get the effective BLAKE2b configuration.
///
/// Under `std` the `RSBLAKE2_BLAKE2B_FORCE` environment variable is read once
/// per process.
#[inline]
#[must_use]
pub fn get() -> Blake2bConfig {
  let requested_force = requested_force();
  Blake2bConfig {
    requested_force,
    effective_kernel: resolve(requested_force),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parse_accepts_aliases() {
    assert_eq!(Blake2bForce::parse(" AUTO "), Some(Blake2bForce::Auto));
    assert_eq!(Blake2bForce::parse("table"), Some(Blake2bForce::Portable));
    assert_eq!(Blake2bForce::parse("Unrolled"), Some(Blake2bForce::Unrolled));
    assert_eq!(Blake2bForce::parse(""), None);
    assert_eq!(Blake2bForce::parse("avx512"), None);
  }

  #[test]
  fn auto_prefers_table_driven_kernel() {
    assert_eq!(resolve(Blake2bForce::Auto), Blake2bKernelId::Portable);
    assert_eq!(resolve(Blake2bForce::Unrolled), Blake2bKernelId::Unrolled);
  }

  #[test]
  fn get_is_consistent() {
    let cfg = get();
    assert_eq!(cfg.effective_kernel, resolve(cfg.requested_force));
    assert_eq!(get(), cfg);
  }
}
