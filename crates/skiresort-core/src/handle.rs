// crates/skiresort-core/src/handle.rs
use crate::error::Result;
use crate::loader::LoadOptions;
use crate::model::ResortTable;
use once_cell::sync::OnceCell;
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

// Single in-process handle so the bundled dataset is only loaded once.
static GLOBAL: OnceCell<TableHandle> = OnceCell::new();

/// Shared, swappable reference to the current annotated table.
///
/// Readers take a cheap `Arc` clone and keep using it for as long as they
/// like; a reload builds the new table completely before swapping it in, so
/// no reader ever observes a partially built table.
#[derive(Debug)]
pub struct TableHandle {
    current: RwLock<Arc<ResortTable>>,
}

impl TableHandle {
    pub fn new(table: ResortTable) -> Self {
        Self {
            current: RwLock::new(Arc::new(table)),
        }
    }

    pub fn open(path: impl AsRef<Path>, options: &LoadOptions) -> Result<Self> {
        ResortTable::load_from_path(path, options).map(Self::new)
    }

    /// The process-wide handle over the bundled dataset.
    pub fn global() -> Result<&'static TableHandle> {
        GLOBAL.get_or_try_init(|| {
            Self::open(ResortTable::default_dataset_path(), &LoadOptions::default())
        })
    }

    pub fn current(&self) -> Arc<ResortTable> {
        // The lock only guards an Arc swap, so a poisoned lock still holds a
        // complete table.
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Swap in `table`, returning the previous one.
    pub fn replace(&self, table: ResortTable) -> Arc<ResortTable> {
        let next = Arc::new(table);
        let mut guard = self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, next)
    }

    /// Rebuild from `path` and swap the result in. On failure the current
    /// table stays in place.
    pub fn reload(&self, path: impl AsRef<Path>, options: &LoadOptions) -> Result<Arc<ResortTable>> {
        let table = ResortTable::load_from_path(path, options)?;
        self.replace(table);
        tracing::info!("resort table reloaded");
        Ok(self.current())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Resort;
    use crate::traits::ResortSearch;

    fn table(names: &[&str]) -> ResortTable {
        ResortTable::from_resorts(
            names
                .iter()
                .map(|n| Resort::sample(n, "Norway", "Europe"))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn readers_keep_their_snapshot_across_replace() {
        let handle = TableHandle::new(table(&["A"]));
        let before = handle.current();
        let previous = handle.replace(table(&["A", "B"]));

        assert!(Arc::ptr_eq(&before, &previous));
        assert_eq!(before.len(), 1);
        assert_eq!(handle.current().len(), 2);
        assert!(handle.current().lookup("B").is_ok());
    }

    #[test]
    fn failed_reload_keeps_current_table() {
        let handle = TableHandle::new(table(&["A"]));
        let missing = std::env::temp_dir().join("skiresort-no-such-file.csv");
        assert!(handle
            .reload(&missing, &LoadOptions::default())
            .is_err());
        assert_eq!(handle.current().len(), 1);
    }
}
