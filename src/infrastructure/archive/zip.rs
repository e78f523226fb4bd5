//! Zip Archiver
//!
//! Creates the archive on first use and updates it in place afterwards:
//! unchanged entries are copied without recompression, changed files are
//! re-compressed, new files are appended, and entries whose file has since
//! disappeared are kept. The archive is rewritten through a temporary file
//! in the same directory and renamed over the original, keeping the
//! original's permissions (a new archive gets the usual umask-derived mode).

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::{Datelike, Local, Timelike};
use ignore::overrides::{Override, OverrideBuilder};
use ignore::WalkBuilder;
use tempfile::NamedTempFile;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use crate::domain::entities::ArchiveReport;
use crate::domain::ports::{ArchiveRequest, Archiver, ARCHIVE_EXCLUDES, ARCHIVE_INCLUDES};
use crate::error::ArchiveError;

/// Archiver writing deflate-compressed zip files
#[derive(Debug, Clone, Default)]
pub struct ZipArchiver;

/// A file selected for the archive
struct Candidate {
    path: PathBuf,
    size: u64,
    modified: zip::DateTime,
}

impl ZipArchiver {
    pub fn new() -> Self {
        Self
    }

    /// Files under `request.source_dir` that belong in the archive, keyed by entry name
    fn select(&self, request: &ArchiveRequest) -> Result<BTreeMap<String, Candidate>, ArchiveError> {
        let selection = selection(&request.source_dir)?;
        let mut selected = BTreeMap::new();

        let walker = WalkBuilder::new(&request.source_dir)
            .standard_filters(false)
            .follow_links(false)
            .build();
        for entry in walker {
            let entry = entry?;
            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }
            let path = entry.path();
            if !selection.matched(path, false).is_whitelist() {
                continue;
            }
            let Ok(relative) = path.strip_prefix(&request.source_dir) else {
                continue;
            };

            let metadata = entry.metadata()?;
            let modified = metadata.modified().map(zip_time).unwrap_or_default();
            selected.insert(
                request.entry_name(relative),
                Candidate {
                    path: path.to_path_buf(),
                    size: metadata.len(),
                    modified,
                },
            );
        }

        Ok(selected)
    }
}

impl Archiver for ZipArchiver {
    fn archive(&self, request: &ArchiveRequest) -> Result<ArchiveReport, ArchiveError> {
        if !request.source_dir.is_dir() {
            return Err(ArchiveError::MissingSource(request.source_dir.clone()));
        }
        let mut candidates = self.select(request)?;

        let created = !request.archive_path.exists();
        let mut report = ArchiveReport::new(&request.archive_path, created);

        let dir = match request.archive_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir)?;

        let existing_permissions = if created {
            None
        } else {
            Some(fs::metadata(&request.archive_path)?.permissions())
        };

        let mut temp = temp_file_in(&dir)?;
        let mut writer = ZipWriter::new(temp.as_file_mut());
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        let mut existing = if created {
            None
        } else {
            Some(ZipArchive::new(File::open(&request.archive_path)?)?)
        };

        if let Some(archive) = existing.as_mut() {
            for index in 0..archive.len() {
                let entry = archive.by_index_raw(index)?;
                let name = entry.name().to_string();

                match candidates.remove(&name) {
                    Some(candidate)
                        if candidate.size == entry.size()
                            && entry
                                .last_modified()
                                .is_some_and(|t| same_time(&t, &candidate.modified)) =>
                    {
                        writer.raw_copy_file(entry)?;
                        report.unchanged += 1;
                    }
                    Some(candidate) => {
                        drop(entry);
                        write_entry(&mut writer, &name, &candidate, options)?;
                        report.updated += 1;
                    }
                    None => {
                        tracing::debug!(entry = %name, "keeping archive entry");
                        writer.raw_copy_file(entry)?;
                    }
                }
            }
        }

        for (name, candidate) in &candidates {
            write_entry(&mut writer, name, candidate, options)?;
            report.added += 1;
        }

        writer.set_comment(request.comment.clone());
        writer.finish()?;
        drop(existing);

        if let Some(permissions) = existing_permissions {
            fs::set_permissions(temp.path(), permissions)?;
        }
        temp.persist(&request.archive_path)?;
        Ok(report)
    }
}

/// Temporary archive beside the target, opened with the mode a plain
/// create would get
#[cfg(unix)]
fn temp_file_in(dir: &Path) -> std::io::Result<NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;

    tempfile::Builder::new()
        .prefix(".hgsync-")
        .suffix(".zip.tmp")
        .permissions(fs::Permissions::from_mode(0o666))
        .tempfile_in(dir)
}

#[cfg(not(unix))]
fn temp_file_in(dir: &Path) -> std::io::Result<NamedTempFile> {
    tempfile::Builder::new()
        .prefix(".hgsync-")
        .suffix(".zip.tmp")
        .tempfile_in(dir)
}

fn selection(root: &Path) -> Result<Override, ArchiveError> {
    let mut builder = OverrideBuilder::new(root);
    for pattern in ARCHIVE_INCLUDES {
        builder
            .add(pattern)
            .map_err(|e| ArchiveError::Pattern(e.to_string()))?;
    }
    // later globs take precedence, so excludes go last
    for pattern in ARCHIVE_EXCLUDES {
        builder
            .add(&format!("!{}", pattern))
            .map_err(|e| ArchiveError::Pattern(e.to_string()))?;
    }
    builder
        .build()
        .map_err(|e| ArchiveError::Pattern(e.to_string()))
}

fn write_entry<W>(
    writer: &mut ZipWriter<W>,
    name: &str,
    candidate: &Candidate,
    options: SimpleFileOptions,
) -> Result<(), ArchiveError>
where
    W: std::io::Write + std::io::Seek,
{
    writer.start_file(name, options.last_modified_time(candidate.modified))?;
    let mut file = File::open(&candidate.path)?;
    std::io::copy(&mut file, writer)?;
    Ok(())
}

/// Local wall-clock time in zip's MS-DOS representation
fn zip_time(time: SystemTime) -> zip::DateTime {
    let local: chrono::DateTime<Local> = time.into();
    let (Ok(year), Ok(month), Ok(day), Ok(hour), Ok(minute), Ok(second)) = (
        u16::try_from(local.year()),
        u8::try_from(local.month()),
        u8::try_from(local.day()),
        u8::try_from(local.hour()),
        u8::try_from(local.minute()),
        u8::try_from(local.second()),
    ) else {
        return zip::DateTime::default();
    };
    zip::DateTime::from_date_and_time(year, month, day, hour, minute, second).unwrap_or_default()
}

/// Equal at zip's two-second resolution
fn same_time(a: &zip::DateTime, b: &zip::DateTime) -> bool {
    a.year() == b.year()
        && a.month() == b.month()
        && a.day() == b.day()
        && a.hour() == b.hour()
        && a.minute() == b.minute()
        && a.second() / 2 == b.second() / 2
}
