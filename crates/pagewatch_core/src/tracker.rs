use std::collections::HashMap;

/// Outcome of observing a freshly fetched text for a watched URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Observation {
    /// First successful observation; the baseline was stored silently.
    Seeded,
    /// The text matches the stored snapshot exactly.
    Unchanged,
    /// The text differs from the stored snapshot, which has been replaced.
    Changed {
        /// The snapshot that was current before this observation.
        previous: String,
    },
}

/// Per-channel map from watched URL to the last successfully observed text.
///
/// Each notification channel owns its own tracker, so two channels watching
/// the same URL keep fully independent snapshots.
#[derive(Debug, Default)]
pub struct ChangeTracker {
    snapshots: HashMap<String, String>,
}

impl ChangeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compare `text` against the stored snapshot for `url`.
    ///
    /// The snapshot is replaced whenever the text differs, so a repeated
    /// identical change is reported only once. Equality is exact string
    /// equality.
    pub fn observe(&mut self, url: &str, text: &str) -> Observation {
        match self.snapshots.get_mut(url) {
            None => {
                self.snapshots.insert(url.to_string(), text.to_string());
                Observation::Seeded
            }
            Some(snapshot) if snapshot == text => Observation::Unchanged,
            Some(snapshot) => {
                let previous = std::mem::replace(snapshot, text.to_string());
                Observation::Changed { previous }
            }
        }
    }

    /// The currently stored snapshot for `url`, if any.
    pub fn snapshot(&self, url: &str) -> Option<&str> {
        self.snapshots.get(url).map(String::as_str)
    }
}
