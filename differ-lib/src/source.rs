use crate::*;
use std::path::PathBuf;

/// Ordered list of input paths, as given on the command line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Source {
    paths: Vec<PathBuf>,
}

impl Source {
    /// Expands every argument containing glob metacharacters (sorted), and
    /// passes literal paths through untouched so that missing files surface
    /// as load errors later on.
    pub fn from_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut paths = Vec::new();

        for arg in args {
            let arg = arg.as_ref();

            if !is_pattern(arg) {
                paths.push(PathBuf::from(arg));
                continue;
            }

            let matches = glob::glob(arg)
                .map_err(|err| DifferError::pattern(format!("{}: {}", arg, err)))?
                .map(|entry| {
                    entry.map_err(|err| {
                        let path = err.path().to_owned();

                        DifferError::file_access(path, err.into())
                    })
                })
                .collect::<Result<Vec<_>>>()?;

            if matches.is_empty() {
                return Err(DifferError::pattern(format!("{}: no files matched", arg)));
            }

            paths.extend(matches);
        }

        Ok(Self { paths })
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl From<Vec<PathBuf>> for Source {
    fn from(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }
}

fn is_pattern(arg: &str) -> bool {
    arg.contains(['*', '?', '['])
}
