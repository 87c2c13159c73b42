//! Error types
//!
//! Defines domain-specific error types for each module of the file manager.

use std::fmt;
use std::io;

use zip::result::ZipError;

/// Path resolution and file name validation errors
#[derive(Debug)]
pub enum PathError {
    InvalidDirectory(String),
    InvalidFileName(String),
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::InvalidDirectory(p) => write!(f, "Invalid directory: {}", p),
            PathError::InvalidFileName(n) => write!(f, "Invalid file name: {}", n),
        }
    }
}

impl std::error::Error for PathError {}

/// Storage module errors
#[derive(Debug)]
pub enum StorageError {
    FileNotFound(String),
    FileAlreadyExists(String),
    PermissionDenied(String),
    NotAFile(String),
    Archive(ZipError),
    IoError(io::Error),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::FileNotFound(p) => write!(f, "File not found: {}", p),
            StorageError::FileAlreadyExists(p) => write!(f, "File already exists: {}", p),
            StorageError::PermissionDenied(p) => write!(f, "Permission denied: {}", p),
            StorageError::NotAFile(p) => write!(f, "Not a file: {}", p),
            StorageError::Archive(e) => write!(f, "Archive error: {}", e),
            StorageError::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<io::Error> for StorageError {
    fn from(error: io::Error) -> Self {
        StorageError::IoError(error)
    }
}

impl From<ZipError> for StorageError {
    fn from(error: ZipError) -> Self {
        StorageError::Archive(error)
    }
}

/// Record codec errors
#[derive(Debug)]
pub enum CodecError {
    WrongFileType { path: String, expected: &'static str },
    MalformedContent(String),
    IoError(io::Error),
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::WrongFileType { path, expected } => {
                write!(f, "File {} is not a .{} file", path, expected)
            }
            CodecError::MalformedContent(msg) => write!(f, "Malformed content: {}", msg),
            CodecError::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for CodecError {}

impl From<io::Error> for CodecError {
    fn from(error: io::Error) -> Self {
        CodecError::IoError(error)
    }
}

/// Menu input errors
#[derive(Debug, PartialEq)]
pub enum MenuError {
    NotANumber(String),
}

impl fmt::Display for MenuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuError::NotANumber(s) => write!(f, "Not a number: {}", s),
        }
    }
}

impl std::error::Error for MenuError {}
