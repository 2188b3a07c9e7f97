use crate::error::FormatError;

/// Minimum number of whitespace-separated fields in an access log line.
pub const MIN_FIELDS: usize = 10;

/// One request record from a proxy access log.
///
/// Fields are kept as the raw tokens observed in the line; only `status`
/// and `url` are interpreted later on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub timestamp: String,
    pub duration: String,
    pub client: String,
    pub status: String,
    pub size: String,
    pub method: String,
    pub url: String,
    pub user: String,
    pub hierarchy: String,
    pub content_type: String,
}

impl LogEntry {
    /// Parse a single non-empty, non-comment log line.
    ///
    /// Tokens past the tenth are ignored.
    pub fn parse(line: &str) -> Result<Self, FormatError> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < MIN_FIELDS {
            return Err(FormatError {
                expected: MIN_FIELDS,
                found: fields.len(),
            });
        }

        Ok(LogEntry {
            timestamp: fields[0].to_string(),
            duration: fields[1].to_string(),
            client: fields[2].to_string(),
            status: fields[3].to_string(),
            size: fields[4].to_string(),
            method: fields[5].to_string(),
            url: fields[6].to_string(),
            user: fields[7].to_string(),
            hierarchy: fields[8].to_string(),
            content_type: fields[9].to_string(),
        })
    }
}

/// Lines that are blank or start with `#` never reach the parser.
pub fn is_skippable(line: &str) -> bool {
    let line = line.trim();
    line.is_empty() || line.starts_with('#')
}
