use std::{io, path::PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum GenError {
    #[error("{} not found", .path.display())]
    NotFound { path: PathBuf },

    #[error("could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not parse JSON from {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// `animations` exists but is not an object.
    #[error("'animations' in {} is not a mapping", .path.display())]
    InvalidAnimations { path: PathBuf },

    #[error("spine_json reference on line {line} of {} has no quoted path", .path.display())]
    MalformedReference { path: PathBuf, line: usize },

    #[error("could not walk {}: {source}", .path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl GenError {
    /// Maps a read failure to `NotFound` or `Io`.
    pub fn from_read(path: impl Into<PathBuf>, err: io::Error) -> Self {
        let path = path.into();
        match err.kind() {
            io::ErrorKind::NotFound => GenError::NotFound { path },
            _ => GenError::Io { path, source: err },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_errors_split_on_kind() {
        let missing = io::Error::new(io::ErrorKind::NotFound, "gone");
        assert!(matches!(
            GenError::from_read("a.json", missing),
            GenError::NotFound { .. }
        ));

        let denied = io::Error::new(io::ErrorKind::PermissionDenied, "nope");
        assert!(matches!(
            GenError::from_read("a.json", denied),
            GenError::Io { .. }
        ));
    }

    #[test]
    fn display_names_the_file() {
        let e = GenError::NotFound {
            path: PathBuf::from("data/hero.json"),
        };
        assert_eq!(e.to_string(), "data/hero.json not found");

        let e = GenError::MalformedReference {
            path: PathBuf::from("hero.spinescene"),
            line: 3,
        };
        let msg = e.to_string();
        assert!(msg.contains("hero.spinescene"));
        assert!(msg.contains("line 3"));
    }
}
