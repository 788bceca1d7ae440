//! Directory-backed table store, one JSON file per table.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use super::{Scope, TABLE_EXTENSION, TableStore};
use crate::builtin;
use crate::error::{TableError, TableResult};
use crate::table::ProbabilityTable;

/// Stores tables as `<dir>/<name>.json`, with one directory per scope.
///
/// The conventional layout under a data root is `tables/` for the standard
/// scope and `custom_tables/` for the custom scope.
#[derive(Debug, Clone)]
pub struct DirTableStore {
    standard: PathBuf,
    custom: PathBuf,
}

impl DirTableStore {
    /// Store rooted at `root`, using `root/tables` and `root/custom_tables`.
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self::with_dirs(root.join("tables"), root.join("custom_tables"))
    }

    /// Store with explicit scope directories.
    pub fn with_dirs(standard: impl Into<PathBuf>, custom: impl Into<PathBuf>) -> Self {
        Self {
            standard: standard.into(),
            custom: custom.into(),
        }
    }

    /// The directory holding a scope's tables.
    pub fn dir(&self, scope: Scope) -> &Path {
        match scope {
            Scope::Standard => &self.standard,
            Scope::Custom => &self.custom,
        }
    }

    /// Create both scope directories if they are missing.
    pub fn ensure_dirs(&self) -> TableResult<()> {
        for scope in Scope::ALL {
            let dir = self.dir(scope);
            fs::create_dir_all(dir).map_err(|source| TableError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
        }
        Ok(())
    }

    /// Write the built-in tables into the standard scope.
    ///
    /// Existing files are left alone unless `overwrite` is set. Returns the
    /// number of tables written.
    pub fn install_builtin(&mut self, overwrite: bool) -> TableResult<usize> {
        let mut written = 0;
        for (name, table) in builtin::builtin_tables()? {
            if !overwrite && self.locate(name, Scope::Standard).is_some() {
                tracing::debug!(table = name, "keeping existing standard table");
                continue;
            }
            self.save_table(name, &table, Scope::Standard)?;
            written += 1;
        }
        Ok(written)
    }

    /// Path of an existing table file: `<name>.json` first, then `<name>`.
    fn locate(&self, name: &str, scope: Scope) -> Option<PathBuf> {
        let dir = self.dir(scope);
        let with_ext = dir.join(format!("{name}.{TABLE_EXTENSION}"));
        if with_ext.is_file() {
            return Some(with_ext);
        }
        let bare = dir.join(name);
        bare.is_file().then_some(bare)
    }
}

impl TableStore for DirTableStore {
    fn load_table(&self, name: &str, scope: Scope) -> TableResult<ProbabilityTable> {
        let path = self
            .locate(name, scope)
            .ok_or_else(|| TableError::NotFound {
                name: name.to_string(),
                scope,
            })?;
        let json = fs::read_to_string(&path).map_err(|source| TableError::Io {
            path: path.clone(),
            source,
        })?;
        let table = ProbabilityTable::from_json(&json, &path.display().to_string())?;
        tracing::debug!(table = name, %scope, entries = table.entries.len(), "loaded table");
        Ok(table)
    }

    fn save_table(
        &mut self,
        name: &str,
        table: &ProbabilityTable,
        scope: Scope,
    ) -> TableResult<()> {
        let dir = self.dir(scope).to_path_buf();
        fs::create_dir_all(&dir).map_err(|source| TableError::Io {
            path: dir.clone(),
            source,
        })?;

        let file_name = if name.ends_with(".json") {
            name.to_string()
        } else {
            format!("{name}.{TABLE_EXTENSION}")
        };
        let path = dir.join(file_name);

        let json = table.to_json()?;
        fs::write(&path, json).map_err(|source| TableError::Io {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(table = name, %scope, path = %path.display(), "saved table");
        Ok(())
    }

    fn list_tables(&self, scope: Scope) -> TableResult<BTreeSet<String>> {
        let dir = self.dir(scope);
        if !dir.exists() {
            return Ok(BTreeSet::new());
        }
        let entries = fs::read_dir(dir).map_err(|source| TableError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        Ok(entries
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == TABLE_EXTENSION))
            .filter_map(|p| p.file_stem().map(|s| s.to_string_lossy().into_owned()))
            .collect())
    }
}
