//! Error types for anchor resolution and layout documents

use crate::anchor::Category;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Invalid format: {message}")]
    InvalidFormat { message: String },

    #[error("Unknown view '{name}' in rule {rule}")]
    UnknownView { rule: usize, name: String },

    #[error("Unknown anchor '{name}' in rule {rule}")]
    UnknownAnchor { rule: usize, name: String },

    #[error("Invalid rule {rule}: {message}")]
    InvalidRule { rule: usize, message: String },

    #[error("Cannot pair {first} anchor '{first_name}' with {second} anchor '{second_name}'")]
    CategoryMismatch {
        first: Category,
        first_name: String,
        second: Category,
        second_name: String,
    },

    #[error("Unknown constraint set: {name}")]
    UnknownSet { name: String },
}

pub type Result<T> = std::result::Result<T, LayoutError>;

impl LayoutError {
    pub fn unknown_view(rule: usize, name: impl Into<String>) -> Self {
        Self::UnknownView {
            rule,
            name: name.into(),
        }
    }

    pub fn unknown_anchor(rule: usize, name: impl Into<String>) -> Self {
        Self::UnknownAnchor {
            rule,
            name: name.into(),
        }
    }

    pub fn invalid_rule(rule: usize, message: impl Into<String>) -> Self {
        Self::InvalidRule {
            rule,
            message: message.into(),
        }
    }

    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::InvalidFormat {
            message: message.into(),
        }
    }
}
