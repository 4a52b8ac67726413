//! Legal folds for a single throw

/// The fields a throw allows folding
///
/// Holds at most three distinct values (both faces and their sum), kept in
/// ascending order. Strategies see candidates in this order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Candidates {
    fields: [u8; 3],
    len: u8,
}

impl Candidates {
    /// Build candidates from arbitrary fields, sorting and dropping duplicates
    ///
    /// Only the three smallest distinct values are kept.
    ///
    /// # Examples
    /// ```
    /// use mermaids_bar::core::Candidates;
    ///
    /// let candidates = Candidates::from_fields(&[7, 3, 3]);
    /// assert_eq!(candidates.as_slice(), &[3, 7]);
    /// ```
    #[must_use]
    pub fn from_fields(fields: &[u8]) -> Self {
        let mut candidates = Self::default();
        for &field in fields {
            candidates.insert(field);
        }
        candidates
    }

    /// Insert a field, keeping order and uniqueness
    pub(crate) fn insert(&mut self, field: u8) {
        let len = usize::from(self.len);
        let slot = match self.fields[..len].binary_search(&field) {
            Ok(_) => return,
            Err(slot) => slot,
        };

        if len == self.fields.len() {
            if slot == len {
                return;
            }
            // Full: drop the largest to make room
            self.fields.copy_within(slot..len - 1, slot + 1);
        } else {
            self.fields.copy_within(slot..len, slot + 1);
            self.len += 1;
        }
        self.fields[slot] = field;
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.fields[..usize::from(self.len)]
    }

    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, field: u8) -> bool {
        self.as_slice().contains(&field)
    }

    /// Smallest candidate
    #[inline]
    #[must_use]
    pub fn min(&self) -> Option<u8> {
        self.as_slice().first().copied()
    }

    /// Largest candidate
    #[inline]
    #[must_use]
    pub fn max(&self) -> Option<u8> {
        self.as_slice().last().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.as_slice().iter().copied()
    }
}
