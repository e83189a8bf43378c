pub use self::discovery::{resolve_version, VersionSource};
pub use self::semver::SemverTriple;

#[cfg(test)]
pub use self::discovery::MockVersionSource;

mod discovery;
mod semver;
