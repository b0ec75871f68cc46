use crate::*;
use std::{
    fmt,
    path::{Path, PathBuf},
};
use tracing::warn;

const FALLBACK_EXTENSION: &str = "png";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tag {
    Base,
    Diff,
}

impl Tag {
    pub const ALL: [Tag; 2] = [Tag::Base, Tag::Diff];

    pub fn as_str(self) -> &'static str {
        match self {
            Tag::Base => "BASE",
            Tag::Diff => "DIFF",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `dir/name.ext` -> `dir/name.TAG.ext`
pub fn output_path(path: &Path, tag: Tag) -> Result<PathBuf> {
    let stem = path
        .file_stem()
        .ok_or_else(|| DifferError::naming(format!("{} has no file name", path.display())))?;

    let ext = match path.extension() {
        Some(ext) => ext.to_string_lossy(),
        None => {
            warn!(
                "{} has no extension, assuming .{} for output",
                path.display(),
                FALLBACK_EXTENSION
            );

            FALLBACK_EXTENSION.into()
        }
    };

    let name = format!("{}.{}.{}", stem.to_string_lossy(), tag, ext);

    Ok(path.with_file_name(name))
}

/// `dir/name.TAG.ext` -> `dir/name.ext`
pub fn original_path(path: &Path) -> Result<PathBuf> {
    let ext = path.extension().ok_or_else(|| {
        DifferError::naming(format!("{} is missing an extension", path.display()))
    })?;

    let stem = path
        .file_stem()
        .map(|stem| stem.to_string_lossy())
        .unwrap_or_default();

    let name = Tag::ALL
        .iter()
        .find_map(|tag| stem.strip_suffix(&format!(".{}", tag)))
        .unwrap_or_else(|| {
            warn!(
                "{} doesn't have an expected .BASE or .DIFF suffix",
                path.display()
            );

            &stem[..]
        });

    if name.is_empty() {
        return Err(DifferError::naming(format!(
            "couldn't determine original name for {}",
            path.display()
        )));
    }

    Ok(path.with_file_name(format!("{}.{}", name, ext.to_string_lossy())))
}

pub fn has_tag(path: &Path, tag: Tag) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().contains(&format!(".{}.", tag)))
        .unwrap_or(false)
}
