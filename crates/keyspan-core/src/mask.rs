///
/// ColumnMask
///
/// Fixed-capacity bit set over the column positions of one table.
/// Capacity is the table's column count; addressing a position at or past
/// capacity is a caller bug and aborts.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ColumnMask {
    words: Vec<u64>,
    capacity: usize,
}

impl ColumnMask {
    /// Create an empty mask sized for `capacity` columns.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            words: vec![0; capacity.div_ceil(64)],
            capacity,
        }
    }

    /// Number of column positions this mask can address.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Set the bit for a column position.
    pub fn set(&mut self, pos: usize) {
        assert!(
            pos < self.capacity,
            "column position {pos} out of range for {}-column mask",
            self.capacity
        );
        self.words[pos / 64] |= 1 << (pos % 64);
    }

    /// True if the bit for a column position is set.
    #[must_use]
    pub fn bit_is_set(&self, pos: usize) -> bool {
        assert!(
            pos < self.capacity,
            "column position {pos} out of range for {}-column mask",
            self.capacity
        );
        self.words[pos / 64] & (1 << (pos % 64)) != 0
    }

    /// Bitwise AND into a new mask.
    #[must_use]
    pub fn and(&self, other: &Self) -> Self {
        self.check_capacity(other);

        Self {
            words: self
                .words
                .iter()
                .zip(&other.words)
                .map(|(a, b)| a & b)
                .collect(),
            capacity: self.capacity,
        }
    }

    /// Bitwise OR of `other` into `self`.
    pub fn or_with(&mut self, other: &Self) {
        self.check_capacity(other);

        for (word, bits) in self.words.iter_mut().zip(&other.words) {
            *word |= bits;
        }
    }

    /// True if no bit is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|word| *word == 0)
    }

    /// Set column positions, ascending.
    #[must_use]
    pub fn to_positions(&self) -> Vec<usize> {
        (0..self.capacity).filter(|pos| self.bit_is_set(*pos)).collect()
    }

    fn check_capacity(&self, other: &Self) {
        assert!(
            self.capacity == other.capacity,
            "mask capacity mismatch: {} vs {}",
            self.capacity,
            other.capacity
        );
    }
}

///
/// TESTS
///
