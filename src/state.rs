use std::{ops::Deref, sync::Arc};

use crate::{
    error::{ErrorVerbosity, ErrorVerbosityProvider},
    store::BookStore,
};

#[derive(Clone)]
pub struct ApiState {
    inner: Arc<ApiStateInner>,
}

impl ApiState {
    pub fn new<B: BookStore + 'static>(error_verbosity: ErrorVerbosity, store: B) -> Self {
        Self {
            inner: Arc::new(ApiStateInner {
                error_verbosity,
                store: Box::new(store),
            }),
        }
    }
}

impl Deref for ApiState {
    type Target = ApiStateInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

pub struct ApiStateInner {
    error_verbosity: ErrorVerbosity,
    store: Box<dyn BookStore>,
}

impl ApiStateInner {
    pub fn store(&self) -> &dyn BookStore {
        self.store.as_ref()
    }
}

impl ErrorVerbosityProvider for ApiState {
    fn error_verbosity(&self) -> ErrorVerbosity {
        self.error_verbosity
    }
}
