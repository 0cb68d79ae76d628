//! Facade that coordinates workbook state, persistence, and backups.

use tracing::{info, warn};

use washbook_core::storage::{workbook_warnings, WorkbookStorage};
use washbook_core::CoreError;
use washbook_domain::Workbook;

/// Metadata describing the outcome of a load operation.
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub name: String,
    /// Read-time anomalies (dangling customer refs, unparseable dates).
    /// Advisory only; the load itself succeeded.
    pub warnings: Vec<String>,
}

/// Holds the currently open workbook and the storage backend behind it.
///
/// The composition root for embedders: presentation layers keep one of
/// these and route every mutation through it.
pub struct WorkbookManager {
    current: Option<Workbook>,
    current_name: Option<String>,
    storage: Box<dyn WorkbookStorage>,
}

impl WorkbookManager {
    pub fn new(storage: Box<dyn WorkbookStorage>) -> Self {
        Self {
            current: None,
            current_name: None,
            storage,
        }
    }

    pub fn storage(&self) -> &dyn WorkbookStorage {
        self.storage.as_ref()
    }

    pub fn current_name(&self) -> Option<&str> {
        self.current_name.as_deref()
    }

    /// The open workbook, or [`CoreError::WorkbookNotLoaded`].
    pub fn workbook(&self) -> Result<&Workbook, CoreError> {
        self.current.as_ref().ok_or(CoreError::WorkbookNotLoaded)
    }

    pub fn workbook_mut(&mut self) -> Result<&mut Workbook, CoreError> {
        self.current.as_mut().ok_or(CoreError::WorkbookNotLoaded)
    }

    /// Creates a fresh workbook, persists it, and makes it current.
    pub fn create(&mut self, name: &str) -> Result<(), CoreError> {
        let workbook = Workbook::new(name);
        self.storage.save_workbook(name, &workbook)?;
        info!(workbook = name, "created workbook");
        self.current = Some(workbook);
        self.current_name = Some(name.to_string());
        Ok(())
    }

    /// Loads a stored workbook and makes it current, surfacing read-time
    /// warnings.
    pub fn load(&mut self, name: &str) -> Result<LoadOutcome, CoreError> {
        let workbook = self.storage.load_workbook(name)?;
        let warnings = workbook_warnings(&workbook);
        if !warnings.is_empty() {
            warn!(
                workbook = name,
                count = warnings.len(),
                "workbook loaded with warnings"
            );
        }
        info!(
            workbook = name,
            invoices = workbook.invoices.len(),
            customers = workbook.customers.len(),
            "loaded workbook"
        );
        self.current = Some(workbook);
        self.current_name = Some(name.to_string());
        Ok(LoadOutcome {
            name: name.to_string(),
            warnings,
        })
    }

    /// Persists the open workbook under its current name.
    pub fn save(&mut self) -> Result<(), CoreError> {
        let name = self
            .current_name
            .clone()
            .ok_or(CoreError::WorkbookNotLoaded)?;
        let workbook = self.current.as_ref().ok_or(CoreError::WorkbookNotLoaded)?;
        self.storage.save_workbook(&name, workbook)?;
        info!(workbook = %name, "saved workbook");
        Ok(())
    }

    pub fn close(&mut self) {
        self.current = None;
        self.current_name = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use washbook_storage_json::JsonWorkbookStorage;

    fn manager_in(dir: &tempfile::TempDir) -> WorkbookManager {
        let storage =
            JsonWorkbookStorage::new(dir.path().join("workbooks"), dir.path().join("backups"))
                .expect("create storage");
        WorkbookManager::new(Box::new(storage))
    }

    #[test]
    fn workbook_access_requires_a_loaded_workbook() {
        let dir = tempdir().expect("tempdir");
        let manager = manager_in(&dir);
        assert!(matches!(
            manager.workbook(),
            Err(CoreError::WorkbookNotLoaded)
        ));
    }

    #[test]
    fn create_save_load_cycle_keeps_the_name() {
        let dir = tempdir().expect("tempdir");
        let mut manager = manager_in(&dir);
        manager.create("shine").expect("create");
        manager.save().expect("save");
        manager.close();

        let outcome = manager.load("shine").expect("load");
        assert_eq!(outcome.name, "shine");
        assert!(outcome.warnings.is_empty());
        assert_eq!(manager.current_name(), Some("shine"));
    }
}
