#[cfg(test)]
#[path = "showcase_test.rs"]
mod showcase_test;

use catalog::ExamplesDocument;

use crate::net::api::LoadError;

/// What the showcase page is currently able to show.
///
/// `Ready` is terminal. A failed fetch leaves the page in `Loading`; the
/// failure has already been logged by the loader.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ViewState {
    #[default]
    Loading,
    Ready(ExamplesDocument),
}

impl ViewState {
    /// Derive the view state from the one-shot fetch result.
    ///
    /// `None` means the fetch is still outstanding.
    pub fn from_fetch(result: Option<Result<ExamplesDocument, LoadError>>) -> Self {
        match result {
            Some(Ok(doc)) => Self::Ready(doc),
            Some(Err(_)) | None => Self::Loading,
        }
    }
}
