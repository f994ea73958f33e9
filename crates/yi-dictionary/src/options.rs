use serde::{Deserialize, Serialize};

/// Scanner configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScanOptions {
    /// Keys shorter than this many characters are not indexed. Values
    /// below 1 are treated as 1.
    pub min_key_len: usize,
    /// Report only the entries with the longest matching key at each
    /// position.
    pub longest_match_only: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            min_key_len: 1,
            longest_match_only: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let opts: ScanOptions = serde_json::from_str(r#"{"longestMatchOnly": true}"#).unwrap();
        assert_eq!(opts.min_key_len, 1);
        assert!(opts.longest_match_only);
    }
}
