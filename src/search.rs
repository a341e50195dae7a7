/// Represents the type of search query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    /// Transaction hash (0x + 64 hex chars)
    TxHash(String),
    /// Ethereum address (0x + 40 hex chars)
    Address(String),
    /// Block number (decimal)
    BlockNumber(u64),
    /// Empty or whitespace-only input; not an error, just nothing to do
    Empty,
    /// Invalid or unrecognized query
    Invalid(String),
}

impl SearchQuery {
    /// Parse a search string into a typed query.
    ///
    /// The transaction-hash check runs before the address check: both are
    /// 0x-prefixed hex, and length is the only discriminator.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();

        if trimmed.is_empty() {
            return Self::Empty;
        }

        // Prefix is case-sensitive; the hex digits themselves are not
        if let Some(hex_part) = trimmed.strip_prefix("0x") {
            if hex_part.chars().all(|c| c.is_ascii_hexdigit()) {
                match hex_part.len() {
                    64 => return Self::TxHash(trimmed.to_lowercase()),
                    40 => return Self::Address(trimmed.to_lowercase()),
                    _ => {}
                }
            }
        } else if trimmed.chars().all(|c| c.is_ascii_digit()) {
            return match trimmed.parse::<u64>() {
                Ok(num) => Self::BlockNumber(num),
                Err(_) => Self::Invalid(format!("Block number too large: {trimmed}")),
            };
        }

        Self::Invalid("Invalid search input. Enter block number, tx hash, or address.".to_string())
    }

    /// Returns a human-readable description of the query type
    pub fn description(&self) -> String {
        match self {
            Self::TxHash(hash) => format!("Transaction: {hash}"),
            Self::Address(addr) => format!("Address: {addr}"),
            Self::BlockNumber(num) => format!("Block: {num}"),
            Self::Empty => "Empty query".to_string(),
            Self::Invalid(reason) => format!("Invalid: {reason}"),
        }
    }
}
