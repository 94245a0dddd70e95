//! Shared application state.

use std::sync::Arc;

use crate::explain::ExplanationRequestor;

/// State shared across all request handlers. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<Inner>,
}

struct Inner {
    explainer: ExplanationRequestor,
}

impl AppState {
    pub fn new(explainer: ExplanationRequestor) -> Self {
        Self {
            inner: Arc::new(Inner { explainer }),
        }
    }

    pub fn explainer(&self) -> &ExplanationRequestor {
        &self.inner.explainer
    }
}
