//! Raw tokenized records
//!
//! A record keeps all of its field text in one contiguous buffer and the end
//! offset of each field. For the row `a,"b","c""d",e` the buffer holds
//! `abc"de` and the offsets are `[1, 2, 5, 6]`.

use std::fmt;
use std::ops::Index;

/// One logical line split into text fields
#[derive(Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    buffer: String,
    ends: Vec<usize>,
    line: usize,
}

impl RawRecord {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record from individual fields
    pub fn from_fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut record = Self::new();
        for field in fields {
            record.push_field(field.as_ref());
        }
        record
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.ends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ends.is_empty()
    }

    /// 1-indexed line on which the record starts (0 if not read from a stream)
    pub fn line(&self) -> usize {
        self.line
    }

    /// Field at `index`, if present
    pub fn get(&self, index: usize) -> Option<&str> {
        let end = *self.ends.get(index)?;
        let start = if index == 0 { 0 } else { self.ends[index - 1] };
        Some(&self.buffer[start..end])
    }

    /// Iterate over fields in order
    pub fn iter(&self) -> Fields<'_> {
        Fields {
            record: self,
            index: 0,
        }
    }

    /// Copy the fields out into owned strings
    pub fn to_vec(&self) -> Vec<String> {
        self.iter().map(str::to_string).collect()
    }

    /// Concatenated text of all fields
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Append a field
    pub fn push_field(&mut self, field: &str) {
        self.buffer.push_str(field);
        self.ends.push(self.buffer.len());
    }

    pub(crate) fn clear(&mut self) {
        self.buffer.clear();
        self.ends.clear();
        self.line = 0;
    }

    pub(crate) fn set_line(&mut self, line: usize) {
        self.line = line;
    }

    pub(crate) fn buffer_mut(&mut self) -> &mut String {
        &mut self.buffer
    }

    /// Close the field currently being written to the buffer
    pub(crate) fn end_field(&mut self) {
        self.ends.push(self.buffer.len());
    }

    pub(crate) fn capacity(&self) -> usize {
        self.buffer.capacity()
    }
}

impl Index<usize> for RawRecord {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        match self.get(index) {
            Some(field) => field,
            None => panic!(
                "field index {} out of range for record with {} fields",
                index,
                self.len()
            ),
        }
    }
}

impl fmt::Debug for RawRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawRecord")
            .field("line", &self.line)
            .field("fields", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

/// Iterator over the fields of a [`RawRecord`]
pub struct Fields<'a> {
    record: &'a RawRecord,
    index: usize,
}

impl<'a> Iterator for Fields<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let field = self.record.get(self.index)?;
        self.index += 1;
        Some(field)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.record.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Fields<'_> {}

impl<'a> IntoIterator for &'a RawRecord {
    type Item = &'a str;
    type IntoIter = Fields<'a>;

    fn into_iter(self) -> Fields<'a> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_slice_fields() {
        let record = RawRecord::from_fields(["a", "b", "c\"d", "e"]);
        assert_eq!(record.as_str(), "abc\"de");
        assert_eq!(record.ends, vec![1, 2, 5, 6]);
        assert_eq!(record.len(), 4);
        assert_eq!(&record[2], "c\"d");
        assert_eq!(record.get(4), None);
    }

    #[test]
    fn test_empty_fields_are_preserved() {
        let record = RawRecord::from_fields(["", "x", ""]);
        assert_eq!(record.to_vec(), vec!["", "x", ""]);
        assert_eq!(record.iter().len(), 3);
    }

    #[test]
    fn test_clear_keeps_allocation() {
        let mut record = RawRecord::from_fields(["some longer field", "another"]);
        let capacity = record.capacity();
        record.clear();
        assert!(record.is_empty());
        assert_eq!(record.capacity(), capacity);
    }
}
