//! Shared examples catalog for the speech inpainting showcase.
//!
//! This crate owns the shape of `public/data/examples.json` and is used by
//! both `client` (to render the page) and `server` (to check the document at
//! startup). Parsing is strict about the three gap-duration keys and lenient
//! about individual example fields: a missing or `null` caption or URL becomes
//! an empty string so the page renders an empty media element instead of
//! failing.

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;

pub mod paths;

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Error returned by [`parse_document`].
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The document is not valid JSON, or a value has the wrong type.
    #[error("malformed examples document: {0}")]
    Json(#[from] serde_json::Error),
    /// One of the fixed gap-duration keys is absent.
    #[error("examples document is missing category \"{0}\"")]
    MissingCategory(&'static str),
}

// =============================================================================
// CATEGORIES
// =============================================================================

/// Gap-duration bucket an example belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GapCategory {
    Quarter,
    Half,
    Full,
}

impl GapCategory {
    /// All categories in page order.
    pub const ALL: [Self; 3] = [Self::Quarter, Self::Half, Self::Full];

    /// JSON key used in the examples document.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Quarter => "0.25sec",
            Self::Half => "0.5sec",
            Self::Full => "1sec",
        }
    }

    /// Human-readable gap length shown in section headers.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Quarter => "0.25 seconds",
            Self::Half => "0.5 seconds",
            Self::Full => "1 second",
        }
    }

    fn index(self) -> usize {
        match self {
            Self::Quarter => 0,
            Self::Half => 1,
            Self::Full => 2,
        }
    }
}

// =============================================================================
// SIGNALS
// =============================================================================

/// One of the three signal variants shown on every card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SignalKind {
    /// Input with the gap cut out.
    Masked,
    /// Model reconstruction.
    Inpainted,
    /// Ground truth.
    Target,
}

impl SignalKind {
    /// All signal kinds in card order.
    pub const ALL: [Self; 3] = [Self::Masked, Self::Inpainted, Self::Target];

    #[must_use]
    pub fn heading(self) -> &'static str {
        match self {
            Self::Masked => "Masked Signal",
            Self::Inpainted => "Inpainted Signal",
            Self::Target => "Target Signal",
        }
    }

    /// Alt text for the spectrogram image.
    #[must_use]
    pub fn spectrogram_alt(self) -> &'static str {
        match self {
            Self::Masked => "Masked Spectrogram",
            Self::Inpainted => "Inpainted Spectrogram",
            Self::Target => "Target Spectrogram",
        }
    }

    /// Lowercase slug used for CSS modifiers.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Masked => "masked",
            Self::Inpainted => "inpainted",
            Self::Target => "target",
        }
    }
}

// =============================================================================
// EXAMPLE
// =============================================================================

/// A single masked / inpainted / target triplet.
///
/// Field names on the wire keep the capitalised `Inpainted*` keys used by the
/// published data files.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Example {
    #[serde(deserialize_with = "null_as_empty")]
    pub id: String,
    #[serde(rename = "maskedText", deserialize_with = "null_as_empty")]
    pub masked_text: String,
    #[serde(rename = "InpaintedText", deserialize_with = "null_as_empty")]
    pub inpainted_text: String,
    #[serde(rename = "targetText", deserialize_with = "null_as_empty")]
    pub target_text: String,
    #[serde(rename = "maskedAudio", deserialize_with = "null_as_empty")]
    pub masked_audio: String,
    #[serde(rename = "InpaintedAudio", deserialize_with = "null_as_empty")]
    pub inpainted_audio: String,
    #[serde(rename = "targetAudio", deserialize_with = "null_as_empty")]
    pub target_audio: String,
    #[serde(rename = "maskedSpectrogram", deserialize_with = "null_as_empty")]
    pub masked_spectrogram: String,
    #[serde(rename = "InpaintedSpectrogram", deserialize_with = "null_as_empty")]
    pub inpainted_spectrogram: String,
    #[serde(rename = "targetSpectrogram", deserialize_with = "null_as_empty")]
    pub target_spectrogram: String,
}

/// `null` reads the same as an absent field.
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Borrowed view of one signal variant of an [`Example`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SignalAssets<'a> {
    pub kind: SignalKind,
    pub caption: &'a str,
    pub audio: &'a str,
    pub spectrogram: &'a str,
}

impl Example {
    #[must_use]
    pub fn signal(&self, kind: SignalKind) -> SignalAssets<'_> {
        let (caption, audio, spectrogram) = match kind {
            SignalKind::Masked => (&self.masked_text, &self.masked_audio, &self.masked_spectrogram),
            SignalKind::Inpainted => {
                (&self.inpainted_text, &self.inpainted_audio, &self.inpainted_spectrogram)
            }
            SignalKind::Target => (&self.target_text, &self.target_audio, &self.target_spectrogram),
        };
        SignalAssets { kind, caption, audio, spectrogram }
    }

    /// The three signal variants in card order.
    #[must_use]
    pub fn signals(&self) -> [SignalAssets<'_>; 3] {
        SignalKind::ALL.map(|kind| self.signal(kind))
    }
}

// =============================================================================
// DOCUMENT
// =============================================================================

/// Parsed examples document: one ordered example list per category.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExamplesDocument {
    categories: [Vec<Example>; 3],
}

/// Per-category example counts, keyed by document key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CatalogSummary {
    pub total: usize,
    pub categories: BTreeMap<&'static str, usize>,
}

impl ExamplesDocument {
    /// Build a document from explicit per-category lists.
    #[must_use]
    pub fn new(quarter: Vec<Example>, half: Vec<Example>, full: Vec<Example>) -> Self {
        Self { categories: [quarter, half, full] }
    }

    #[must_use]
    pub fn examples(&self, category: GapCategory) -> &[Example] {
        &self.categories[category.index()]
    }

    /// Categories with their examples, in page order. Empty categories are included.
    pub fn sections(&self) -> impl Iterator<Item = (GapCategory, &[Example])> {
        GapCategory::ALL.into_iter().map(|c| (c, self.examples(c)))
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.categories.iter().map(Vec::len).sum()
    }

    #[must_use]
    pub fn summary(&self) -> CatalogSummary {
        let categories = self.sections().map(|(c, list)| (c.key(), list.len())).collect();
        CatalogSummary { total: self.total(), categories }
    }

    /// Ids that occur more than once anywhere in the document, sorted.
    #[must_use]
    pub fn duplicate_ids(&self) -> Vec<String> {
        let mut seen = BTreeMap::<&str, usize>::new();
        for (_, list) in self.sections() {
            for example in list {
                *seen.entry(example.id.as_str()).or_insert(0) += 1;
            }
        }
        seen.into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(id, _)| id.to_owned())
            .collect()
    }
}

/// Parse the examples document.
///
/// Keys other than the three category keys are ignored.
///
/// # Errors
///
/// Returns [`CatalogError::Json`] for malformed JSON or wrongly typed values
/// and [`CatalogError::MissingCategory`] when a category key is absent.
pub fn parse_document(raw: &str) -> Result<ExamplesDocument, CatalogError> {
    let mut root: Map<String, Value> = serde_json::from_str(raw)?;

    let mut categories: [Vec<Example>; 3] = Default::default();
    for category in GapCategory::ALL {
        let value = root
            .remove(category.key())
            .ok_or(CatalogError::MissingCategory(category.key()))?;
        categories[category.index()] = serde_json::from_value(value)?;
    }

    Ok(ExamplesDocument { categories })
}
