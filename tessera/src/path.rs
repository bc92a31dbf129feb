//! BIP-44 derivation paths.
//!
//! Every account lives at `m/44'/{coin_type}'/0'/{account_index}'`. All
//! four levels are hardened because the ed25519 walk in [`crate::slip10`]
//! has no public-key derivation.

use core::fmt;
use core::str::FromStr;

use crate::{Error, Result};

/// BIP-44 purpose level.
pub const PURPOSE: u32 = 44;

/// A single level of a derivation path.
///
/// Hardened indices are >= 2^31 in raw form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChildIndex {
    /// Normal (non-hardened) index: 0 to 2^31 - 1
    Normal(u32),
    /// Hardened index: displayed as n', stored as n
    Hardened(u32),
}

impl ChildIndex {
    /// The offset for hardened indices (2^31).
    pub const HARDENED_OFFSET: u32 = 0x8000_0000;

    /// Create a normal (non-hardened) child index.
    pub fn normal(index: u32) -> Result<Self> {
        Self::check(index).map(Self::Normal)
    }

    /// Create a hardened child index.
    pub fn hardened(index: u32) -> Result<Self> {
        Self::check(index).map(Self::Hardened)
    }

    fn check(index: u32) -> Result<u32> {
        if index < Self::HARDENED_OFFSET {
            Ok(index)
        } else {
            Err(Error::InvalidPath(format!(
                "index {index} exceeds {}",
                Self::HARDENED_OFFSET - 1
            )))
        }
    }

    /// Whether this level is hardened.
    pub const fn is_hardened(&self) -> bool {
        matches!(self, Self::Hardened(_))
    }

    /// The index without the hardened flag.
    pub const fn index(&self) -> u32 {
        match self {
            Self::Normal(i) | Self::Hardened(i) => *i,
        }
    }

    /// The raw value serialized into HMAC input.
    pub const fn to_u32(&self) -> u32 {
        match self {
            Self::Normal(i) => *i,
            Self::Hardened(i) => *i | Self::HARDENED_OFFSET,
        }
    }
}

impl fmt::Display for ChildIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal(i) => write!(f, "{i}"),
            Self::Hardened(i) => write!(f, "{i}'"),
        }
    }
}

impl FromStr for ChildIndex {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (digits, hardened) = match s.strip_suffix(['\'', 'h', 'H']) {
            Some(digits) => (digits, true),
            None => (s, false),
        };
        // u32::from_str accepts a leading '+', which is not valid path syntax.
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidPath(format!("bad path segment \"{s}\"")));
        }
        let index: u32 = digits
            .parse()
            .map_err(|_| Error::InvalidPath(format!("bad path segment \"{s}\"")))?;
        if hardened {
            Self::hardened(index)
        } else {
            Self::normal(index)
        }
    }
}

/// A parsed derivation path such as `m/44'/501'/0'/0'`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct DerivationPath {
    indices: Vec<ChildIndex>,
}

impl DerivationPath {
    /// Create a path from its levels.
    pub fn new(indices: Vec<ChildIndex>) -> Self {
        Self { indices }
    }

    /// Parse `m/...` notation. Both `'` and `h` mark hardened levels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if the path does not start at `m`, has
    /// an empty level, or a level is not a valid index.
    pub fn parse(path: &str) -> Result<Self> {
        let path = path.trim();
        let rest = match path {
            "m" => return Ok(Self::default()),
            _ => path
                .strip_prefix("m/")
                .ok_or_else(|| Error::InvalidPath(format!("\"{path}\" must start with m/")))?,
        };

        let indices = rest
            .split('/')
            .map(str::parse)
            .collect::<Result<Vec<ChildIndex>>>()?;
        Ok(Self { indices })
    }

    /// The levels of this path, root first.
    pub fn indices(&self) -> &[ChildIndex] {
        &self.indices
    }

    /// Number of levels below the master key.
    pub fn depth(&self) -> usize {
        self.indices.len()
    }

    /// Whether every level is hardened.
    pub fn is_fully_hardened(&self) -> bool {
        self.indices.iter().all(ChildIndex::is_hardened)
    }

    /// The coin type of a BIP-44 path (its second level).
    pub fn coin_type(&self) -> Option<u32> {
        match self.indices.as_slice() {
            [ChildIndex::Hardened(PURPOSE), coin, ..] => Some(coin.index()),
            _ => None,
        }
    }

    /// The account index of a path built by [`build_path`].
    pub fn account_index(&self) -> Option<u32> {
        match self.indices.as_slice() {
            [ChildIndex::Hardened(PURPOSE), _, _, index] => Some(index.index()),
            _ => None,
        }
    }
}

impl fmt::Display for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("m")?;
        for index in &self.indices {
            write!(f, "/{index}")?;
        }
        Ok(())
    }
}

impl FromStr for DerivationPath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Build `m/44'/{coin_type}'/0'/{account_index}'`.
///
/// `account_index` is the number of wallets already derived for this coin
/// type. Reusing an index re-derives the same key.
///
/// # Errors
///
/// Returns [`Error::InvalidPath`] if either value is 2^31 or larger.
pub fn build_path(coin_type: u32, account_index: u32) -> Result<DerivationPath> {
    Ok(DerivationPath::new(vec![
        ChildIndex::hardened(PURPOSE)?,
        ChildIndex::hardened(coin_type)?,
        ChildIndex::hardened(0)?,
        ChildIndex::hardened(account_index)?,
    ]))
}

/// [`build_path`] for a coin type given in decimal, e.g. `"501"`.
///
/// # Errors
///
/// Returns [`Error::InvalidPath`] if `coin_type` is not a decimal index.
pub fn build_path_str(coin_type: &str, account_index: u32) -> Result<DerivationPath> {
    let coin = coin_type
        .trim()
        .parse::<ChildIndex>()
        .ok()
        .filter(|index| !index.is_hardened())
        .ok_or_else(|| Error::InvalidPath(format!("bad coin type \"{coin_type}\"")))?;
    build_path(coin.index(), account_index)
}
