//! Parsing of the API's `<algorithm>:<hexdigest>` file hash into the parts a
//! PKGBUILD checksum array needs.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Checksum arrays makepkg understands, named by their `<algo>sums` prefix.
pub const MAKEPKG_ALGORITHMS: &[&str] = &[
    "ck", "md5", "sha1", "sha224", "sha256", "sha384", "sha512", "b2",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChecksumError {
    #[error("malformed file hash {0:?}: expected \"<algorithm>:<hexdigest>\"")]
    Malformed(String),
}

/// File hash split into algorithm and digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checksum {
    pub algorithm: String,
    pub digest: String,
}

impl Checksum {
    /// Whether makepkg has a `<algorithm>sums` array for this algorithm.
    pub fn is_makepkg_algorithm(&self) -> bool {
        MAKEPKG_ALGORITHMS.contains(&self.algorithm.as_str())
    }

    /// PKGBUILD variable holding the digest, e.g. `sha256sums`.
    pub fn sums_key(&self) -> String {
        format!("{}sums", self.algorithm)
    }
}

impl FromStr for Checksum {
    type Err = ChecksumError;

    /// Must split into exactly two non-empty parts on a colon.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((algorithm, digest))
                if !algorithm.is_empty() && !digest.is_empty() && !digest.contains(':') =>
            {
                Ok(Checksum {
                    algorithm: algorithm.to_string(),
                    digest: digest.to_string(),
                })
            }
            _ => Err(ChecksumError::Malformed(s.to_string())),
        }
    }
}

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.algorithm, self.digest)
    }
}
