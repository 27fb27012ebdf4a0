//! Process-wide cache of compiler handles keyed by format.

use std::{
    collections::HashMap,
    sync::{Arc, LazyLock, Mutex, PoisonError},
};

use super::CompilerHandle;
use crate::bundler::InstallerFormat;

static GLOBAL: LazyLock<HandleRegistry> = LazyLock::new(HandleRegistry::new);

/// Returns the registry shared by every creator in this process.
///
/// Created on first use and never torn down.
pub fn registry() -> &'static HandleRegistry {
    &GLOBAL
}

/// Lazily creates and hands out one [`CompilerHandle`] per format.
///
/// The map is mutex-guarded, so concurrent first requests for the same
/// format still create exactly one handle.
#[derive(Debug, Default)]
pub struct HandleRegistry {
    handles: Mutex<HashMap<InstallerFormat, Arc<CompilerHandle>>>,
}

impl HandleRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the handle for `format`, creating it on first request.
    pub fn get_handle(&self, format: InstallerFormat) -> Arc<CompilerHandle> {
        let mut handles = self.handles.lock().unwrap_or_else(PoisonError::into_inner);
        handles
            .entry(format)
            .or_insert_with(|| {
                log::debug!("Creating shared compiler handle for {}", format);
                Arc::new(CompilerHandle::new(format))
            })
            .clone()
    }

    /// Number of handles created so far.
    pub fn len(&self) -> usize {
        self.handles
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether no handle has been created yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
