use serde::{Deserialize, Serialize};

/// How [`push_fragment_with`](crate::store::push_fragment_with) treats a new
/// fragment that collides with several existing ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CollisionPolicy {
    /// Cut the new fragment around every colliding fragment.
    #[default]
    TruncateAll,
    /// Only the first colliding fragment (in storage order) cuts the new
    /// fragment; later collisions are left overlapping.
    FirstOnly,
    /// Append the new fragment whole, overlapping whatever it collides
    /// with.
    KeepWhole,
}

/// Options for inserting fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PushOptions {
    pub collision: CollisionPolicy,
}

impl PushOptions {
    pub fn new(collision: CollisionPolicy) -> Self {
        Self { collision }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_load_from_partial_json() {
        let opts: PushOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(opts.collision, CollisionPolicy::TruncateAll);

        let opts: PushOptions = serde_json::from_str(r#"{"collision": "firstOnly"}"#).unwrap();
        assert_eq!(opts, PushOptions::new(CollisionPolicy::FirstOnly));

        let opts: PushOptions = serde_json::from_str(r#"{"collision": "keepWhole"}"#).unwrap();
        assert_eq!(opts.collision, CollisionPolicy::KeepWhole);
    }
}
