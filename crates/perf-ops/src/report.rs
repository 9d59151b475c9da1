//! Verification report types.

/// A row whose stored value differed from the expected encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MismatchInfo {
    /// Row index the key and expected value were derived from.
    pub index: i32,
    /// Row key that was read.
    pub key: Vec<u8>,
    /// Value the row should hold.
    pub expected: Vec<u8>,
    /// Value the store returned, `None` when absent.
    pub actual: Option<Vec<u8>>,
}

impl MismatchInfo {
    /// Whether the store had no value at all for the row.
    pub fn is_missing(&self) -> bool {
        self.actual.is_none()
    }

    pub fn key_string(&self) -> String {
        String::from_utf8_lossy(&self.key).into_owned()
    }
}

/// Outcome of the verification reads issued by one operation instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerificationReport {
    /// Rows read and compared.
    pub expected: u64,
    /// Rows holding exactly the expected value.
    pub matched: u64,
    /// Rows with no value.
    pub missing: u64,
    /// Rows holding a different value.
    pub mismatched: u64,
    /// Every missing or mismatched row, in read order.
    pub mismatched_rows: Vec<MismatchInfo>,
}

impl VerificationReport {
    /// Check if verification passed.
    pub fn is_success(&self) -> bool {
        self.missing == 0 && self.mismatched == 0
    }

    /// Get a summary string.
    pub fn summary(&self) -> String {
        if self.is_success() {
            format!(
                "Verification PASSED: {}/{} rows matched",
                self.matched, self.expected
            )
        } else {
            format!(
                "Verification FAILED: {} missing, {} mismatched out of {} expected",
                self.missing, self.mismatched, self.expected
            )
        }
    }

    pub(crate) fn record_match(&mut self) {
        self.expected += 1;
        self.matched += 1;
    }

    pub(crate) fn record_mismatch(&mut self, info: MismatchInfo) {
        self.expected += 1;
        if info.is_missing() {
            self.missing += 1;
        } else {
            self.mismatched += 1;
        }
        self.mismatched_rows.push(info);
    }
}
