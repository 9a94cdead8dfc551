//! Derivation steps and paths.
//!
//! A [`ChildNumber`] is a 31-bit index plus a hardened flag; its wire form
//! is the 32-bit value with bit 31 set for hardened steps. A
//! [`DerivationPath`] is an ordered list of steps applied left to right
//! from the master key and uses the familiar `m/84'/1'/0'/0/0` notation.

use std::fmt;
use std::str::FromStr;

use crate::HdError;

/// Bit 31: marks a hardened child index on the wire.
pub const HARDENED_OFFSET: u32 = 0x8000_0000;

/// BIP-44 purpose field.
pub const BIP44_PURPOSE: u32 = 44;

/// BIP-84 (native segwit P2WPKH) purpose field.
pub const BIP84_PURPOSE: u32 = 84;

/// One step of a derivation path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChildNumber {
    index: u32,
    hardened: bool,
}

impl ChildNumber {
    /// Create a step, rejecting indexes that already use bit 31.
    pub fn new(index: u32, hardened: bool) -> Result<Self, HdError> {
        if index >= HARDENED_OFFSET {
            return Err(HdError::InvalidDerivationIndex(index));
        }
        Ok(ChildNumber { index, hardened })
    }

    /// A hardened step (`index'`).
    pub fn hardened(index: u32) -> Result<Self, HdError> {
        Self::new(index, true)
    }

    /// A non-hardened step.
    pub fn normal(index: u32) -> Result<Self, HdError> {
        Self::new(index, false)
    }

    /// Split a 32-bit wire value back into index and hardened flag.
    pub fn from_u32(raw: u32) -> Self {
        ChildNumber {
            index: raw & !HARDENED_OFFSET,
            hardened: raw & HARDENED_OFFSET != 0,
        }
    }

    /// The 31-bit index without the hardened bit.
    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn is_hardened(&self) -> bool {
        self.hardened
    }

    /// The 32-bit value fed into HMAC: index with bit 31 set when hardened.
    pub fn to_u32(&self) -> u32 {
        if self.hardened {
            self.index | HARDENED_OFFSET
        } else {
            self.index
        }
    }

    /// Big-endian encoding of [`to_u32`](Self::to_u32).
    pub fn to_be_bytes(&self) -> [u8; 4] {
        self.to_u32().to_be_bytes()
    }
}

impl fmt::Display for ChildNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hardened {
            write!(f, "{}'", self.index)
        } else {
            write!(f, "{}", self.index)
        }
    }
}

impl FromStr for ChildNumber {
    type Err = HdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (digits, hardened) = match s.strip_suffix(['\'', 'h', 'H']) {
            Some(rest) => (rest, true),
            None => (s, false),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(HdError::InvalidPath(format!("bad path component '{}'", s)));
        }
        let index: u32 = digits
            .parse()
            .map_err(|_| HdError::InvalidPath(format!("index out of range in '{}'", s)))?;
        ChildNumber::new(index, hardened)
    }
}

/// An ordered sequence of derivation steps.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct DerivationPath(Vec<ChildNumber>);

impl DerivationPath {
    /// The empty path (`m`), which selects the master key itself.
    pub fn master() -> Self {
        DerivationPath(Vec::new())
    }

    pub fn new(steps: Vec<ChildNumber>) -> Self {
        DerivationPath(steps)
    }

    /// `m/44'/coin'/account'/change/index`.
    pub fn bip44(coin_type: u32, account: u32, change: u32, index: u32) -> Result<Self, HdError> {
        Self::purpose_path(BIP44_PURPOSE, coin_type, account, change, index)
    }

    /// `m/84'/coin'/account'/change/index`.
    pub fn bip84(coin_type: u32, account: u32, change: u32, index: u32) -> Result<Self, HdError> {
        Self::purpose_path(BIP84_PURPOSE, coin_type, account, change, index)
    }

    fn purpose_path(
        purpose: u32,
        coin_type: u32,
        account: u32,
        change: u32,
        index: u32,
    ) -> Result<Self, HdError> {
        Ok(DerivationPath(vec![
            ChildNumber::hardened(purpose)?,
            ChildNumber::hardened(coin_type)?,
            ChildNumber::hardened(account)?,
            ChildNumber::normal(change)?,
            ChildNumber::normal(index)?,
        ]))
    }

    /// Return a new path with `step` appended.
    pub fn child(&self, step: ChildNumber) -> Self {
        let mut steps = self.0.clone();
        steps.push(step);
        DerivationPath(steps)
    }

    pub fn steps(&self) -> &[ChildNumber] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ChildNumber> {
        self.0.iter()
    }
}

impl FromStr for DerivationPath {
    type Err = HdError;

    /// Parse `m/84'/1'/0'/0/0`. `'`, `h` and `H` all mark a hardened step;
    /// the leading `m` is optional.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let rest = trimmed
            .strip_prefix('m')
            .or_else(|| trimmed.strip_prefix('M'))
            .unwrap_or(trimmed);
        if rest.is_empty() {
            return Ok(DerivationPath::master());
        }
        let rest = if rest.len() == trimmed.len() {
            rest
        } else {
            rest.strip_prefix('/')
                .ok_or_else(|| HdError::InvalidPath(format!("expected '/' after 'm' in '{}'", s)))?
        };
        rest.split('/')
            .map(ChildNumber::from_str)
            .collect::<Result<Vec<_>, _>>()
            .map(DerivationPath)
    }
}

impl fmt::Display for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("m")?;
        for step in &self.0 {
            write!(f, "/{}", step)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a DerivationPath {
    type Item = &'a ChildNumber;
    type IntoIter = std::slice::Iter<'a, ChildNumber>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_number_wire_value() {
        assert_eq!(ChildNumber::hardened(84).unwrap().to_u32(), 0x8000_0054);
        assert_eq!(ChildNumber::normal(7).unwrap().to_u32(), 7);
        assert_eq!(ChildNumber::hardened(0).unwrap().to_be_bytes(), [0x80, 0, 0, 0]);
        assert_eq!(ChildNumber::from_u32(0x8000_0001), ChildNumber::hardened(1).unwrap());
    }

    #[test]
    fn test_child_number_rejects_bit_31() {
        for index in [HARDENED_OFFSET, u32::MAX] {
            assert!(matches!(
                ChildNumber::new(index, true),
                Err(HdError::InvalidDerivationIndex(i)) if i == index
            ));
        }
        assert!(ChildNumber::normal(HARDENED_OFFSET - 1).is_ok());
    }

    #[test]
    fn test_parse_bip84_path() {
        let path: DerivationPath = "m/84'/1'/0'/0/0".parse().unwrap();
        assert_eq!(path, DerivationPath::bip84(1, 0, 0, 0).unwrap());
        assert_eq!(path.len(), 5);
        assert!(path.steps()[2].is_hardened());
        assert!(!path.steps()[3].is_hardened());
    }

    #[test]
    fn test_bip44_path() {
        let path = DerivationPath::bip44(0, 3, 1, 7).unwrap();
        assert_eq!(path.to_string(), "m/44'/0'/3'/1/7");
        assert_eq!(path, "m/44h/0h/3h/1/7".parse().unwrap());
        assert!(matches!(
            DerivationPath::bip44(0, HARDENED_OFFSET, 0, 0),
            Err(HdError::InvalidDerivationIndex(HARDENED_OFFSET))
        ));
        let hardened: Vec<bool> = path.iter().map(|s| s.is_hardened()).collect();
        assert_eq!(hardened, [true, true, true, false, false]);
    }

    #[test]
    fn test_parse_hardened_markers() {
        let a: DerivationPath = "m/44h/0H/0'".parse().unwrap();
        assert_eq!(a.to_string(), "m/44'/0'/0'");
        let b: DerivationPath = "44'/0'".parse().unwrap();
        assert_eq!(b.to_string(), "m/44'/0'");
    }

    #[test]
    fn test_parse_master() {
        assert!("m".parse::<DerivationPath>().unwrap().is_empty());
        assert!("".parse::<DerivationPath>().unwrap().is_empty());
    }

    #[test]
    fn test_parse_errors() {
        for bad in ["m/", "m//0", "m/x", "m/+1", "m/1''", "m0/1", "m/-1"] {
            assert!(bad.parse::<DerivationPath>().is_err(), "{} should not parse", bad);
        }
        assert!(matches!(
            "m/2147483648".parse::<DerivationPath>(),
            Err(HdError::InvalidDerivationIndex(2147483648))
        ));
        assert!(matches!(
            "m/4294967296".parse::<DerivationPath>(),
            Err(HdError::InvalidPath(_))
        ));
    }

    #[test]
    fn test_display_roundtrip() {
        let text = "m/0'/1/2'/2/1000000000";
        let path: DerivationPath = text.parse().unwrap();
        assert_eq!(path.to_string(), text);
    }

    #[test]
    fn test_child_extends_without_mutating() {
        let base = DerivationPath::master();
        let extended = base.child(ChildNumber::hardened(0).unwrap());
        assert!(base.is_empty());
        assert_eq!(extended.to_string(), "m/0'");
    }
}
