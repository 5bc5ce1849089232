// Error raised while reading or parsing packing input

use std::path::PathBuf;

/// Any problem with the input that aborts a batch.
///
/// Display strings are the user-facing messages.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("File path is empty")]
    EmptyPath,

    #[error("File doesn't exist: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Target package weight should not be more than {0}")]
    CapacityLimit(u32),

    #[error("Items in line should not be more than {0}")]
    ItemCountLimit(usize),

    #[error("Line \"{0}\" format is incorrect")]
    MalformedLine(String),

    #[error("Item weight should not be more than {0}")]
    ItemWeightLimit(u32),

    #[error("Item cost should not be more than {0}")]
    ItemCostLimit(u32),
}

pub type Result<T> = std::result::Result<T, FormatError>;
