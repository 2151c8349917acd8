use std::fmt;

/// A named, stopped reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedRecord {
    pub label: String,
    pub formatted_time: String,
}

impl SavedRecord {
    /// Trims `label`; `None` if nothing is left.
    pub fn new(label: &str, formatted_time: &str) -> Option<Self> {
        let label = label.trim();
        if label.is_empty() {
            return None;
        }
        Some(Self {
            label: label.to_string(),
            formatted_time: formatted_time.to_string(),
        })
    }
}

impl fmt::Display for SavedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.label, self.formatted_time)
    }
}
