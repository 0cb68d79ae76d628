//! washbook-storage-json
//!
//! Filesystem-backed JSON persistence for workbooks and their backups.
//! Writes are atomic (tmp file + rename) and every overwrite of an
//! existing workbook file leaves a timestamped backup behind.

use std::{
    cmp::Reverse,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use chrono::{DateTime, NaiveDateTime, Utc};
use washbook_core::{
    storage::{WorkbookBackupInfo, WorkbookStorage},
    AnalyticsService, CoreError,
};
use washbook_domain::Workbook;

const FILE_EXTENSION: &str = "json";
const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M";
const TMP_SUFFIX: &str = "tmp";
const DEFAULT_RETENTION: usize = 5;

/// Filesystem-backed JSON persistence for workbooks and their backups.
#[derive(Clone)]
pub struct JsonWorkbookStorage {
    workbooks_dir: PathBuf,
    backups_dir: PathBuf,
    retention: usize,
}

impl JsonWorkbookStorage {
    pub fn new(workbooks_dir: PathBuf, backups_dir: PathBuf) -> Result<Self, CoreError> {
        Self::with_retention(workbooks_dir, backups_dir, DEFAULT_RETENTION)
    }

    pub fn with_retention(
        workbooks_dir: PathBuf,
        backups_dir: PathBuf,
        retention: usize,
    ) -> Result<Self, CoreError> {
        fs::create_dir_all(&workbooks_dir)?;
        fs::create_dir_all(&backups_dir)?;
        Ok(Self {
            workbooks_dir,
            backups_dir,
            retention: retention.max(1),
        })
    }

    pub fn workbook_path(&self, name: &str) -> PathBuf {
        self.workbooks_dir
            .join(format!("{}.{}", canonical_name(name), FILE_EXTENSION))
    }

    /// Summary rows for every stored workbook, sorted by display name.
    pub fn list_workbook_metadata(&self) -> Result<Vec<WorkbookMetadata>, CoreError> {
        let mut entries = Vec::new();
        for slug in self.list_workbooks()? {
            let workbook = self.load_workbook(&slug)?;
            let summary = AnalyticsService::summarize(&workbook.invoices);
            entries.push(WorkbookMetadata {
                slug: slug.clone(),
                name: workbook.name.clone(),
                path: self.workbook_path(&slug),
                created_at: workbook.created_at,
                updated_at: workbook.updated_at,
                invoice_count: workbook.invoices.len(),
                customer_count: workbook.customers.len(),
                pending_order_count: workbook.pending_orders.len(),
                total_revenue: summary.total_revenue,
                outstanding_balance: summary.unpaid_balance,
            });
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn backup_dir(&self, name: &str) -> PathBuf {
        self.backups_dir.join(canonical_name(name))
    }

    fn write_backup_file(
        &self,
        workbook: &Workbook,
        name: &str,
        note: Option<&str>,
    ) -> Result<WorkbookBackupInfo, CoreError> {
        let dir = self.backup_dir(name);
        fs::create_dir_all(&dir)?;
        let timestamp = Utc::now().format(BACKUP_TIMESTAMP_FORMAT).to_string();
        let mut stem = format!("{}_{}", canonical_name(name), timestamp);
        if let Some(label) = sanitize_backup_note(note) {
            stem.push('_');
            stem.push_str(&label);
        }
        let file_name = format!("{}.{}", stem, FILE_EXTENSION);
        let path = dir.join(&file_name);
        write_file(&path, &serialize_workbook(workbook)?)?;
        self.prune_backups(name)?;
        Ok(WorkbookBackupInfo {
            workbook: canonical_name(name),
            id: file_name,
            created_at: timestamp,
            path,
        })
    }

    fn backup_existing_file(&self, name: &str, path: &Path) -> Result<(), CoreError> {
        if !path.exists() {
            return Ok(());
        }
        let dir = self.backup_dir(name);
        fs::create_dir_all(&dir)?;
        let timestamp = Utc::now().format(BACKUP_TIMESTAMP_FORMAT).to_string();
        let file_name = format!("{}_{}.{}", canonical_name(name), timestamp, FILE_EXTENSION);
        fs::copy(path, dir.join(file_name))?;
        self.prune_backups(name)?;
        Ok(())
    }

    fn prune_backups(&self, name: &str) -> Result<(), CoreError> {
        let mut entries = self.list_backups(name)?;
        entries.sort_by_key(|info| Reverse(parse_backup_timestamp(&info.id)));
        for entry in entries.into_iter().skip(self.retention) {
            let _ = fs::remove_file(entry.path);
        }
        Ok(())
    }
}

impl WorkbookStorage for JsonWorkbookStorage {
    fn save_workbook(&self, name: &str, workbook: &Workbook) -> Result<(), CoreError> {
        let path = self.workbook_path(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        if path.exists() {
            self.backup_existing_file(name, &path)?;
        }
        let tmp = tmp_path(&path);
        write_file(&tmp, &serialize_workbook(workbook)?)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn load_workbook(&self, name: &str) -> Result<Workbook, CoreError> {
        let path = self.workbook_path(name);
        if !path.exists() {
            return Err(CoreError::WorkbookNotFound(name.to_string()));
        }
        load_workbook_from_path(&path)
    }

    fn list_workbooks(&self) -> Result<Vec<String>, CoreError> {
        if !self.workbooks_dir.exists() {
            return Ok(Vec::new());
        }
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.workbooks_dir)? {
            let path = entry?.path();
            if !path.is_file()
                || path.extension().and_then(|ext| ext.to_str()) != Some(FILE_EXTENSION)
            {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    fn delete_workbook(&self, name: &str) -> Result<(), CoreError> {
        let path = self.workbook_path(name);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    fn save_workbook_to_path(&self, workbook: &Workbook, path: &Path) -> Result<(), CoreError> {
        save_workbook_to_path(workbook, path)
    }

    fn load_workbook_from_path(&self, path: &Path) -> Result<Workbook, CoreError> {
        load_workbook_from_path(path)
    }

    fn backup_workbook(
        &self,
        name: &str,
        workbook: &Workbook,
        note: Option<&str>,
    ) -> Result<WorkbookBackupInfo, CoreError> {
        self.write_backup_file(workbook, name, note)
    }

    fn list_backups(&self, name: &str) -> Result<Vec<WorkbookBackupInfo>, CoreError> {
        let dir = self.backup_dir(name);
        if !dir.exists() {
            return Ok(Vec::new());
        }
        let slug = canonical_name(name);
        let mut entries = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(FILE_EXTENSION) {
                continue;
            }
            if let Some(file_name) = path.file_name().and_then(|name| name.to_str()) {
                entries.push(WorkbookBackupInfo {
                    workbook: slug.clone(),
                    id: file_name.to_string(),
                    created_at: file_name.to_string(),
                    path: path.clone(),
                });
            }
        }
        entries.sort_by_key(|info| Reverse(parse_backup_timestamp(&info.id)));
        Ok(entries)
    }

    fn restore_backup(&self, backup: &WorkbookBackupInfo) -> Result<Workbook, CoreError> {
        if !backup.path.exists() {
            return Err(CoreError::Storage(format!(
                "backup `{}` not found",
                backup.id
            )));
        }
        let target = self.workbook_path(&backup.workbook);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(&backup.path, &target)?;
        load_workbook_from_path(&target)
    }
}

/// Saves a workbook to an arbitrary path on disk.
pub fn save_workbook_to_path(workbook: &Workbook, path: &Path) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp = tmp_path(path);
    write_file(&tmp, &serialize_workbook(workbook)?)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

/// Loads a workbook from the provided filesystem path.
pub fn load_workbook_from_path(path: &Path) -> Result<Workbook, CoreError> {
    let data = fs::read_to_string(path)?;
    serde_json::from_str(&data).map_err(|err| CoreError::Serde(err.to_string()))
}

/// Summary row describing a stored workbook.
#[derive(Debug, Clone)]
pub struct WorkbookMetadata {
    pub slug: String,
    pub name: String,
    pub path: PathBuf,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub invoice_count: usize,
    pub customer_count: usize,
    pub pending_order_count: usize,
    pub total_revenue: f64,
    pub outstanding_balance: f64,
}

fn canonical_name(name: &str) -> String {
    let sanitized: String = name
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' => c,
            _ => '_',
        })
        .collect();
    if sanitized.trim_matches('_').is_empty() {
        "workbook".into()
    } else {
        sanitized
    }
}

fn sanitize_backup_note(note: Option<&str>) -> Option<String> {
    let raw = note?.trim();
    if raw.is_empty() {
        return None;
    }
    let mut sanitized = String::new();
    let mut last_dash = false;
    for ch in raw.chars() {
        if ch.is_ascii_alphanumeric() {
            sanitized.push(ch.to_ascii_lowercase());
            last_dash = false;
        } else if (ch.is_whitespace() || matches!(ch, '-' | '.'))
            && !sanitized.is_empty()
            && !last_dash
        {
            sanitized.push('-');
            last_dash = true;
        }
    }
    let trimmed = sanitized.trim_matches('-').to_string();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

fn parse_backup_timestamp(name: &str) -> Option<DateTime<Utc>> {
    let trimmed = name.strip_suffix(&format!(".{}", FILE_EXTENSION))?;
    let mut segments = trimmed.split('_').collect::<Vec<_>>();
    let time = segments.pop()?;
    let date = segments.pop()?;
    if !is_digits(date, 8) || !is_digits(time, 4) {
        return None;
    }
    NaiveDateTime::parse_from_str(&format!("{}{}", date, time), "%Y%m%d%H%M")
        .ok()
        .map(|naive| DateTime::from_naive_utc_and_offset(naive, Utc))
}

fn is_digits(value: &str, len: usize) -> bool {
    value.len() == len && value.chars().all(|c| c.is_ascii_digit())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_file(path: &Path, data: &str) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

fn serialize_workbook(workbook: &Workbook) -> Result<String, CoreError> {
    serde_json::to_string_pretty(workbook).map_err(|err| CoreError::Serde(err.to_string()))
}
