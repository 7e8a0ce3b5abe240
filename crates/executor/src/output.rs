//! Handler results.

/// What a successful call returns to the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// No payload (writes and init)
    Unit,
    /// Raw value bytes (reads)
    Bytes(Vec<u8>),
}

impl Output {
    /// Convert into the host's `bytes?` payload
    pub fn into_payload(self) -> Option<Vec<u8>> {
        match self {
            Output::Unit => None,
            Output::Bytes(bytes) => Some(bytes),
        }
    }
}
