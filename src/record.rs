use crate::constants::{DEFAULT_VALUES, FIELD_COUNT, FIELD_WIDTH, RECORD_SIZE};
use crate::error::EncodeError;

/// Conventional meaning of each position. Not part of the file format.
pub const FIELD_NAMES: [&str; FIELD_COUNT] = [
    "embedding_dim",
    "hidden_dim",
    "num_heads",
    "num_layers",
    "num_layers_2",
    "vocab_size",
    "max_context",
];

/// Seven positional hyperparameters, encoded as little-endian i32s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigRecord {
    values: [i32; FIELD_COUNT],
}

impl ConfigRecord {
    pub fn new(values: [i32; FIELD_COUNT]) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[i32; FIELD_COUNT] {
        &self.values
    }

    /// Pairs each value with its conventional label, in encoding order.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, i32)> + '_ {
        FIELD_NAMES.iter().copied().zip(self.values.iter().copied())
    }

    pub fn to_bytes(&self) -> [u8; RECORD_SIZE] {
        let mut out = [0u8; RECORD_SIZE];
        for (slot, v) in out.chunks_exact_mut(FIELD_WIDTH).zip(self.values) {
            slot.copy_from_slice(&v.to_le_bytes());
        }
        out
    }
}

impl Default for ConfigRecord {
    fn default() -> Self {
        Self::new(DEFAULT_VALUES)
    }
}

impl From<[i32; FIELD_COUNT]> for ConfigRecord {
    fn from(values: [i32; FIELD_COUNT]) -> Self {
        Self::new(values)
    }
}

impl TryFrom<&[i32]> for ConfigRecord {
    type Error = EncodeError;

    fn try_from(values: &[i32]) -> Result<Self, Self::Error> {
        let values: [i32; FIELD_COUNT] =
            values
                .try_into()
                .map_err(|_| EncodeError::ContractViolation {
                    expected: FIELD_COUNT,
                    actual: values.len(),
                })?;
        Ok(Self::new(values))
    }
}

impl TryFrom<&[i64]> for ConfigRecord {
    type Error = EncodeError;

    fn try_from(values: &[i64]) -> Result<Self, Self::Error> {
        if values.len() != FIELD_COUNT {
            return Err(EncodeError::ContractViolation {
                expected: FIELD_COUNT,
                actual: values.len(),
            });
        }
        let mut out = [0i32; FIELD_COUNT];
        for (index, (slot, &value)) in out.iter_mut().zip(values).enumerate() {
            *slot = i32::try_from(value).map_err(|_| EncodeError::OutOfRange { index, value })?;
        }
        Ok(Self::new(out))
    }
}
