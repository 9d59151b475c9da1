//! Single-column row model.

/// One write targeting a single `family:qualifier` column of a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Row key.
    pub key: Vec<u8>,
    /// Column family.
    pub family: Vec<u8>,
    /// Column qualifier.
    pub qualifier: Vec<u8>,
    /// Cell value.
    pub value: Vec<u8>,
    /// Whether the store should record this write in its write-ahead log.
    pub write_to_wal: bool,
}

impl Row {
    /// Create a row that is written through the write-ahead log.
    pub fn new(
        key: impl Into<Vec<u8>>,
        family: impl Into<Vec<u8>>,
        qualifier: impl Into<Vec<u8>>,
        value: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            key: key.into(),
            family: family.into(),
            qualifier: qualifier.into(),
            value: value.into(),
            write_to_wal: true,
        }
    }

    /// Set the write durability flag.
    pub fn with_write_to_wal(mut self, write_to_wal: bool) -> Self {
        self.write_to_wal = write_to_wal;
        self
    }
}

/// A single-column read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowGet {
    /// Row key.
    pub key: Vec<u8>,
    /// Column family.
    pub family: Vec<u8>,
    /// Column qualifier.
    pub qualifier: Vec<u8>,
}

impl RowGet {
    pub fn new(
        key: impl Into<Vec<u8>>,
        family: impl Into<Vec<u8>>,
        qualifier: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            key: key.into(),
            family: family.into(),
            qualifier: qualifier.into(),
        }
    }
}
