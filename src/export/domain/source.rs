//! Source artifact selection.

use super::ExportDomainError;
use std::path::Path;

/// File extensions `ovftool` accepts as an export source.
pub const SOURCE_EXTENSIONS: [&str; 3] = ["vmx", "ovf", "ova"];

/// Returns the first artifact file `ovftool` can read.
///
/// Files are checked in the order given; extensions match
/// case-insensitively.
///
/// # Errors
///
/// Returns [`ExportDomainError::NoSourceArtifact`] when no file has a
/// `.vmx`, `.ovf` or `.ova` extension.
pub fn select_source_artifact<S: AsRef<str>>(files: &[S]) -> Result<&str, ExportDomainError> {
    files
        .iter()
        .map(S::as_ref)
        .find(|file| is_source_artifact(file))
        .ok_or(ExportDomainError::NoSourceArtifact(files.len()))
}

fn is_source_artifact(file: &str) -> bool {
    Path::new(file)
        .extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| {
            SOURCE_EXTENSIONS
                .iter()
                .any(|candidate| extension.eq_ignore_ascii_case(candidate))
        })
}
