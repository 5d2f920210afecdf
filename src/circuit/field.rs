//! Prime-field arithmetic for circuit witness values.
//!
//! All witness values live in `Z_p` for a caller-chosen prime modulus `p`.
//! The modulus is a runtime value rather than a compile-time field type: the
//! same engine runs at the deployment modulus `2^61 - 1` and at small test
//! primes. A [`PrimeField`] context is threaded through every arithmetic
//! operation; [`FieldElement`] values are only produced through it.

use serde::{Deserialize, Serialize};

use crate::circuit::errors::CircuitError;

/// The canonical circuit modulus, the Mersenne prime `2^61 - 1`.
pub const MERSENNE_61: u64 = (1u64 << 61) - 1;

/// A value in `[0, p)` for the modulus of the [`PrimeField`] that produced it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldElement(u64);

impl FieldElement {
    /// The canonical representative, always below the producing modulus.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// A prime field with a runtime modulus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrimeField {
    modulus: u64,
}

impl PrimeField {
    /// Creates a field context for `modulus`.
    ///
    /// # Errors
    /// Returns [`CircuitError::InvalidInput`] if `modulus < 2`, or if
    /// `modulus >= 2^63` (products of canonical values must fit the `u128`
    /// intermediates used by [`PrimeField::mul`]).
    pub fn new(modulus: u64) -> Result<Self, CircuitError> {
        if modulus < 2 {
            return Err(CircuitError::InvalidInput {
                msg: format!("modulus must be at least 2, got {modulus}"),
            });
        }
        if modulus >= 1u64 << 63 {
            return Err(CircuitError::InvalidInput {
                msg: format!("modulus {modulus} exceeds the supported 63-bit range"),
            });
        }
        Ok(Self { modulus })
    }

    /// The field with the canonical modulus [`MERSENNE_61`].
    #[must_use]
    pub fn mersenne61() -> Self {
        Self {
            modulus: MERSENNE_61,
        }
    }

    #[must_use]
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Reduces a signed integer into the field. Negative values map to their
    /// Euclidean residue, so `-1` becomes `p - 1`.
    #[must_use]
    pub fn element(&self, value: i64) -> FieldElement {
        let m = i128::from(self.modulus);
        let reduced = i128::from(value).rem_euclid(m);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let canonical = reduced as u64;
        FieldElement(canonical)
    }

    #[must_use]
    pub fn add(&self, a: FieldElement, b: FieldElement) -> FieldElement {
        let sum = (u128::from(a.0) + u128::from(b.0)) % u128::from(self.modulus);
        #[allow(clippy::cast_possible_truncation)]
        let canonical = sum as u64;
        FieldElement(canonical)
    }

    #[must_use]
    pub fn mul(&self, a: FieldElement, b: FieldElement) -> FieldElement {
        let prod = (u128::from(a.0) * u128::from(b.0)) % u128::from(self.modulus);
        #[allow(clippy::cast_possible_truncation)]
        let canonical = prod as u64;
        FieldElement(canonical)
    }
}
