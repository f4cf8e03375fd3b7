use crate::normalize::{clean, normalize};

/// Immutable views of a user query, computed once per resolution call.
///
/// - `raw`: the text exactly as received (sent to the generative tier)
/// - `normalized`: [`normalize`] output
/// - `cleaned`: [`clean`] output (NER and heuristic tiers)
/// - `folded`: lower-cased `cleaned` (deterministic and fuzzy tiers)
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NormalizedQuery {
    raw: String,
    normalized: String,
    cleaned: String,
    folded: String,
}

impl NormalizedQuery {
    pub fn new(raw: &str) -> Self {
        let cleaned = clean(raw);
        let folded = cleaned.to_lowercase();
        Self {
            raw: raw.to_string(),
            normalized: normalize(raw),
            cleaned,
            folded,
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    pub fn cleaned(&self) -> &str {
        &self.cleaned
    }

    pub fn folded(&self) -> &str {
        &self.folded
    }

    /// True when nothing matchable survives cleaning.
    pub fn is_blank(&self) -> bool {
        self.cleaned.is_empty()
    }
}
