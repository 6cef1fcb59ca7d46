//! Error types for maze generation and tile rendering

use std::fmt;
use std::path::PathBuf;

/// Main error type for all generation and rendering operations
#[derive(Debug)]
pub enum MazeError {
    /// Failed to load a tile strip from the filesystem
    TilesetLoad {
        /// Path to the tile strip file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Tile strip geometry doesn't meet renderer requirements
    InvalidTileset {
        /// Description of what's wrong with the strip
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save the rendered maze to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TilesetLoad { path, source } => {
                write!(f, "Failed to load tile strip '{}': {source}", path.display())
            }
            Self::InvalidTileset { reason } => {
                write!(f, "Invalid tile strip: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for MazeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TilesetLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for generation and rendering results
pub type Result<T> = std::result::Result<T, MazeError>;

impl From<std::io::Error> for MazeError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MazeError {
    MazeError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid tile strip error
pub fn invalid_tileset(reason: impl Into<String>) -> MazeError {
    MazeError::InvalidTileset {
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_display() {
        let err = invalid_parameter("size", &2, &"too small");
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'size' = '2': too small"
        );
    }

    #[test]
    fn test_filesystem_error_keeps_source() {
        use std::error::Error;

        let err = MazeError::FileSystem {
            path: PathBuf::from("out/maze.png"),
            operation: "create directory",
            source: std::io::Error::other("disk full"),
        };

        assert!(err.source().is_some());
        assert!(err.to_string().contains("create directory"));
    }
}
