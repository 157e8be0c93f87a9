/// Resolver module - maps import references to on-disk data files
use std::path::{Path, PathBuf};

use crate::importer::error::ImportError;
use crate::importer::{ContainingDocument, ImportContext};

/// Outcome of a resolution attempt. Declining a reference is not a failure:
/// the host tries its remaining importers when it sees `NotClaimed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Claimed(PathBuf),
    NotClaimed,
}

/// Resolve an import reference against the directory of its containing
/// document, mirroring the compiler's own partial/extension/index rules.
///
/// Precedence, first success wins:
/// 1. with a legacy `@import` context, the stem suffixed with `.import`
/// 2. the plain stem
/// 3. a directory of the reference's name holding an `index` file
///    (`index.import` first under a legacy context)
///
/// A reference carrying a recognized extension is resolved against that
/// extension alone and never falls back to a directory index.
pub fn resolve(
    reference: &str,
    context: &ImportContext,
    extensions: &[String],
) -> Result<Resolution, ImportError> {
    let containing = match &context.containing {
        Some(ContainingDocument::Path(path)) => path,
        // In-memory documents and non-filesystem sources are never claimed
        _ => return Ok(Resolution::NotClaimed),
    };

    let base_dir = containing.parent().unwrap_or_else(|| Path::new(""));
    let target = base_dir.join(reference);

    let name = match target.file_name() {
        Some(name) => name.to_string_lossy().to_string(),
        None => return Ok(Resolution::NotClaimed),
    };
    let dir = target.parent().map(Path::to_path_buf).unwrap_or_default();

    // A recognized extension pins resolution to that extension only
    let recognized = extensions.iter().find_map(|ext| {
        name.strip_suffix(ext.as_str())
            .filter(|stem| !stem.is_empty())
            .map(|stem| (stem.to_string(), ext.as_str()))
    });

    if let Some((stem, ext)) = recognized {
        let only = [ext];
        if context.from_import {
            if let Some(path) = try_stem(&dir, &format!("{}.import", stem), &only)? {
                return Ok(Resolution::Claimed(path));
            }
        }
        if let Some(path) = try_stem(&dir, &stem, &only)? {
            return Ok(Resolution::Claimed(path));
        }
        return Ok(Resolution::NotClaimed);
    }

    let all_exts: Vec<&str> = extensions.iter().map(String::as_str).collect();

    if context.from_import {
        if let Some(path) = try_stem(&dir, &format!("{}.import", name), &all_exts)? {
            return Ok(Resolution::Claimed(path));
        }
    }
    if let Some(path) = try_stem(&dir, &name, &all_exts)? {
        return Ok(Resolution::Claimed(path));
    }

    if target.is_dir() {
        if context.from_import {
            if let Some(path) = try_stem(&target, "index.import", &all_exts)? {
                return Ok(Resolution::Claimed(path));
            }
        }
        if let Some(path) = try_stem(&target, "index", &all_exts)? {
            return Ok(Resolution::Claimed(path));
        }
    }

    Ok(Resolution::NotClaimed)
}

/// Probe one disambiguation step: the partial (`_stem.ext`) and plain
/// (`stem.ext`) form for every extension, gathered into one candidate list
/// and filtered in a single existence pass.
///
/// Exactly one surviving candidate wins; two or more is a fatal ambiguity.
fn try_stem(dir: &Path, stem: &str, extensions: &[&str]) -> Result<Option<PathBuf>, ImportError> {
    let mut candidates = Vec::with_capacity(extensions.len() * 2);
    for ext in extensions {
        candidates.push(dir.join(format!("_{}{}", stem, ext)));
        candidates.push(dir.join(format!("{}{}", stem, ext)));
    }

    let mut matches: Vec<PathBuf> = candidates
        .into_iter()
        .filter(|candidate| candidate.is_file())
        .collect();

    match matches.len() {
        0 => Ok(None),
        1 => Ok(Some(matches.remove(0))),
        _ => Err(ImportError::AmbiguousMatch(matches)),
    }
}
