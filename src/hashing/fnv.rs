//! # FNV Bucket Hasher
//!
//! FNV (Fowler–Noll–Vo) is the default hash function for a [`ChainedHashTable`](crate::ChainedHashTable).
//! It is small, fast, has no seed, and spreads short word-like keys well, which is exactly what a
//! fixed-size table of whitespace-delimited tokens needs.
//!
//! **Note**: FNV is not cryptographically secure and offers no protection against crafted collisions.
//!
//! ## Key Features
//! - **64-bit** and **32-bit** widths, **FNV-1** and **FNV-1a** variants.
//! - **Builder** pattern to pick the variant and width.
//! - Implements `std::hash::BuildHasher`, so the table stays generic over its single configured hasher.

use std::hash::{BuildHasher, Hasher};

/// Default offset basis and prime for 64-bit FNV-1 or FNV-1a.
const FNV64_OFFSET_BASIS: u64 = 0xcbf29ce484222325;
const FNV64_PRIME: u64 = 0x100000001b3;

/// Default offset basis and prime for 32-bit FNV-1 or FNV-1a.
const FNV32_OFFSET_BASIS: u32 = 0x811c9dc5;
const FNV32_PRIME: u32 = 16777619;

/// Which FNV variant: FNV1 or FNV1a.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FnvVariant {
    /// FNV-1: multiply, then xor.
    Fnv1,
    /// FNV-1a: xor, then multiply.
    Fnv1a,
}

/// Which bit-size we use for FNV hashing: 32-bit or 64-bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FnvBits {
    Fnv32,
    Fnv64,
}

/// A builder for the FNV hash, letting you configure the variant and bit size.
#[derive(Debug, Clone)]
pub struct FnvBuilder {
    variant: FnvVariant,
    bits: FnvBits,
}

impl Default for FnvBuilder {
    fn default() -> Self {
        Self {
            variant: FnvVariant::Fnv1a,
            bits: FnvBits::Fnv64,
        }
    }
}

impl FnvBuilder {
    /// Create a new builder with default (FNV-1a, 64-bit).
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the variant: FNV-1 or FNV-1a.
    pub fn variant(mut self, variant: FnvVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Sets bit size: 32 or 64.
    pub fn bits(mut self, bits: FnvBits) -> Self {
        self.bits = bits;
        self
    }

    pub fn build(self) -> FnvBuildHasher {
        FnvBuildHasher {
            variant: self.variant,
            bits: self.bits,
        }
    }
}

/// Produces [`FnvHasher`]s. The default is FNV-1a, 64-bit.
#[derive(Debug, Clone)]
pub struct FnvBuildHasher {
    variant: FnvVariant,
    bits: FnvBits,
}

impl Default for FnvBuildHasher {
    fn default() -> Self {
        FnvBuilder::new().build()
    }
}

impl FnvBuildHasher {
    pub fn variant(&self) -> FnvVariant {
        self.variant
    }

    pub fn bits(&self) -> FnvBits {
        self.bits
    }
}

impl BuildHasher for FnvBuildHasher {
    type Hasher = FnvHasher;

    fn build_hasher(&self) -> Self::Hasher {
        let state = match self.bits {
            FnvBits::Fnv64 => FnvState::Bits64(FNV64_OFFSET_BASIS),
            FnvBits::Fnv32 => FnvState::Bits32(FNV32_OFFSET_BASIS),
        };
        FnvHasher {
            variant: self.variant,
            state,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum FnvState {
    Bits64(u64),
    Bits32(u32),
}

/// Streaming FNV hasher implementing `std::hash::Hasher`.
#[derive(Debug, Clone)]
pub struct FnvHasher {
    variant: FnvVariant,
    state: FnvState,
}

impl Hasher for FnvHasher {
    fn finish(&self) -> u64 {
        match self.state {
            FnvState::Bits64(h) => h,
            FnvState::Bits32(h) => h as u64,
        }
    }

    fn write(&mut self, bytes: &[u8]) {
        self.state = match (self.state, self.variant) {
            (FnvState::Bits64(h), FnvVariant::Fnv1) => FnvState::Bits64(fnv1_64(h, bytes)),
            (FnvState::Bits64(h), FnvVariant::Fnv1a) => FnvState::Bits64(fnv1a_64(h, bytes)),
            (FnvState::Bits32(h), FnvVariant::Fnv1) => FnvState::Bits32(fnv1_32(h, bytes)),
            (FnvState::Bits32(h), FnvVariant::Fnv1a) => FnvState::Bits32(fnv1a_32(h, bytes)),
        };
    }
}

#[inline]
fn fnv1_64(mut state: u64, data: &[u8]) -> u64 {
    for &b in data {
        state = state.wrapping_mul(FNV64_PRIME);
        state ^= b as u64;
    }
    state
}

#[inline]
fn fnv1a_64(mut state: u64, data: &[u8]) -> u64 {
    for &b in data {
        state ^= b as u64;
        state = state.wrapping_mul(FNV64_PRIME);
    }
    state
}

#[inline]
fn fnv1_32(mut state: u32, data: &[u8]) -> u32 {
    for &b in data {
        state = state.wrapping_mul(FNV32_PRIME);
        state ^= b as u32;
    }
    state
}

#[inline]
fn fnv1a_32(mut state: u32, data: &[u8]) -> u32 {
    for &b in data {
        state ^= b as u32;
        state = state.wrapping_mul(FNV32_PRIME);
    }
    state
}

/// Returns a 64-bit FNV-1a hash of `data`.
pub fn fnv64a_hash(data: &[u8]) -> u64 {
    fnv1a_64(FNV64_OFFSET_BASIS, data)
}

/// Returns a 64-bit FNV-1 hash of `data`.
pub fn fnv64_hash(data: &[u8]) -> u64 {
    fnv1_64(FNV64_OFFSET_BASIS, data)
}

/// Returns a 32-bit FNV-1a hash of `data`.
pub fn fnv32a_hash(data: &[u8]) -> u32 {
    fnv1a_32(FNV32_OFFSET_BASIS, data)
}

/// Returns a 32-bit FNV-1 hash of `data`.
pub fn fnv32_hash(data: &[u8]) -> u32 {
    fnv1_32(FNV32_OFFSET_BASIS, data)
}
