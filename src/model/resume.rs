//! Screening inputs: the job description and the uploaded resumes.

use std::fs;
use std::path::Path;

use crate::detect::validate_upload;
use crate::error::{Error, Result};

/// The job description resumes are ranked against.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JobDescription(String);

impl JobDescription {
    /// Wrap a job description string.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The raw text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the description is empty or whitespace-only.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<&str> for JobDescription {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for JobDescription {
    fn from(text: String) -> Self {
        Self(text)
    }
}

/// An uploaded resume: display name plus raw PDF bytes.
///
/// The name is only used for presentation and is not guaranteed unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeDocument {
    /// Display name (usually the uploaded file name)
    pub name: String,
    /// Raw PDF content
    pub data: Vec<u8>,
}

impl ResumeDocument {
    /// Create a resume from a name and raw bytes.
    pub fn new(name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
        }
    }

    /// Read a resume from disk, validating it at the upload boundary.
    ///
    /// The file must carry a `.pdf` extension and start with a PDF header.
    /// The display name is the file name without its directory.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| {
                Error::InvalidUpload(format!("'{}' is not a file", path.display()))
            })?;

        let data = fs::read(path)?;
        validate_upload(&name, &data)?;

        Ok(Self { name, data })
    }
}

/// Text extracted from a resume, paired with its display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedResume {
    /// Display name carried over from the [`ResumeDocument`]
    pub name: String,
    /// Page-concatenated plain text
    pub text: String,
}

impl ExtractedResume {
    /// Create an extracted resume.
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}
