//! # Polynomial Rolling Hash
//!
//! Combines the character codes of a key as a polynomial in `base`, reduced modulo `modulus`:
//! `h = (h * base + byte) mod modulus` for each byte. This is the classic textbook string hash
//! for chained tables; it is offered as an alternative to the default FNV hasher.
//!
//! **Note**: This is **not** cryptographically secure.

use std::hash::{BuildHasher, Hasher};

use crate::error::{Error, Result};

/// Default base (multiplier), just above the byte alphabet.
const DEFAULT_BASE: u64 = 257;
/// Default modulus, the Mersenne prime 2^61 - 1.
const DEFAULT_MODULUS: u64 = 0x1FFFFFFFFFFFFFFF;
/// Moduli must stay below 2^63 so `a + b` of two residues cannot overflow.
const MAX_MODULUS: u64 = 1 << 63;

/// A builder for polynomial rolling hash, allowing you to set base and modulus.
#[derive(Debug, Clone)]
pub struct PolyHashBuilder {
    base: u64,
    modulus: u64,
}

impl Default for PolyHashBuilder {
    fn default() -> Self {
        Self {
            base: DEFAULT_BASE,
            modulus: DEFAULT_MODULUS,
        }
    }
}

impl PolyHashBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base (the multiplier used in the polynomial).
    pub fn with_base(mut self, base: u64) -> Self {
        self.base = base;
        self
    }

    /// Sets the modulus for the polynomial. Typically a large prime.
    pub fn with_modulus(mut self, modulus: u64) -> Self {
        self.modulus = modulus;
        self
    }

    /// Validates the parameters and returns the `BuildHasher`.
    ///
    /// # Errors
    /// `Error::InvalidHashParameter` if `base <= 1`, `modulus <= 1`, or `modulus >= 2^63`.
    pub fn build(self) -> Result<PolyBuildHasher> {
        if self.base <= 1 {
            return Err(Error::invalid_hash_parameter(format!(
                "polynomial base must be > 1, got {}",
                self.base
            )));
        }
        if self.modulus <= 1 || self.modulus >= MAX_MODULUS {
            return Err(Error::invalid_hash_parameter(format!(
                "polynomial modulus must be in 2..2^63, got {}",
                self.modulus
            )));
        }
        Ok(PolyBuildHasher {
            base: self.base % self.modulus,
            modulus: self.modulus,
        })
    }
}

/// Produces [`PolynomialRollingHash`] hashers with a fixed base and modulus.
#[derive(Debug, Clone)]
pub struct PolyBuildHasher {
    base: u64,
    modulus: u64,
}

impl Default for PolyBuildHasher {
    fn default() -> Self {
        Self {
            base: DEFAULT_BASE,
            modulus: DEFAULT_MODULUS,
        }
    }
}

impl BuildHasher for PolyBuildHasher {
    type Hasher = PolynomialRollingHash;

    fn build_hasher(&self) -> Self::Hasher {
        PolynomialRollingHash {
            base: self.base,
            modulus: self.modulus,
            current_hash: 0,
        }
    }
}

/// A polynomial rolling hash that can be fed incrementally and yields a value in `[0..modulus)`.
#[derive(Debug, Clone)]
pub struct PolynomialRollingHash {
    base: u64,
    modulus: u64,
    current_hash: u64,
}

impl PolynomialRollingHash {
    /// Streaming update with a single item (e.g. a byte).
    pub fn update(&mut self, x: u64) {
        let shifted = mul_mod(self.current_hash, self.base, self.modulus);
        self.current_hash = add_mod(shifted, x % self.modulus, self.modulus);
    }

    pub fn current_hash(&self) -> u64 {
        self.current_hash
    }
}

impl Hasher for PolynomialRollingHash {
    fn finish(&self) -> u64 {
        self.current_hash
    }

    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.update(b as u64);
        }
    }
}

#[inline]
fn add_mod(a: u64, b: u64, m: u64) -> u64 {
    let s = a + b;
    if s >= m {
        s - m
    } else {
        s
    }
}

#[inline]
fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 * b as u128) % m as u128) as u64
}
