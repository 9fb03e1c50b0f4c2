use chrono::NaiveDate;

use verlog_core::{ChangeCategory, ChangelogEntry, DATE_FORMAT, VersionRecord};

use crate::error::{ChangelogError, Result};

/// Insert a fresh changelog entry for `version`, stamped with the
/// record's current release date. An existing entry for the same version
/// string is overwritten wholesale; there is no merging.
pub fn open_entry(record: &mut VersionRecord, version: &str, description: &str) {
    let entry = ChangelogEntry::new(record.release_date.clone(), description);
    record.changelog.insert(version.to_string(), entry);
}

/// Append one change line to a category of an existing entry.
///
/// # Errors
///
/// Returns `ChangelogError::VersionNotFound` if `version` has no entry;
/// the record is left unchanged.
pub fn append_change(
    record: &mut VersionRecord,
    version: &str,
    category: ChangeCategory,
    text: &str,
) -> Result<()> {
    let entry = entry_mut(record, version)?;
    entry.changes_mut(category).push(text.to_string());
    Ok(())
}

/// Replace the description of an existing entry.
///
/// # Errors
///
/// Returns `ChangelogError::VersionNotFound` if `version` has no entry.
pub fn set_description(record: &mut VersionRecord, version: &str, text: &str) -> Result<()> {
    let entry = entry_mut(record, version)?;
    entry.description = text.to_string();
    Ok(())
}

/// Set the release date of an existing entry.
///
/// # Errors
///
/// Returns `ChangelogError::InvalidDate` unless `date` is a real calendar
/// date written exactly as `DD/MM/YYYY`, and
/// `ChangelogError::VersionNotFound` if `version` has no entry.
pub fn set_release_date(record: &mut VersionRecord, version: &str, date: &str) -> Result<()> {
    if !is_well_formed_date(date) {
        return Err(ChangelogError::InvalidDate {
            input: date.to_string(),
        });
    }

    let entry = entry_mut(record, version)?;
    entry.release_date = date.to_string();
    Ok(())
}

fn entry_mut<'a>(
    record: &'a mut VersionRecord,
    version: &str,
) -> Result<&'a mut ChangelogEntry> {
    record
        .changelog
        .get_mut(version)
        .ok_or_else(|| ChangelogError::VersionNotFound {
            version: version.to_string(),
        })
}

/// `chrono` alone would accept unpadded days and months, so check the
/// textual shape as well as calendar validity.
fn is_well_formed_date(date: &str) -> bool {
    let bytes = date.as_bytes();
    let shape_ok = bytes.len() == 10
        && bytes[2] == b'/'
        && bytes[5] == b'/'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| matches!(i, 2 | 5) || b.is_ascii_digit());

    shape_ok && NaiveDate::parse_from_str(date, DATE_FORMAT).is_ok()
}
