//! Error types for resumerank.

use std::fmt;
use std::io;
use thiserror::Error;

/// Result type alias for resumerank operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Which screening input was missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingInput {
    /// No job description was supplied
    JobDescription,
    /// No resumes were supplied
    Resumes,
    /// Neither was supplied
    Both,
}

impl MissingInput {
    /// Classify the inputs, returning `None` when both are present.
    pub fn check(has_job_description: bool, has_resumes: bool) -> Option<Self> {
        match (has_job_description, has_resumes) {
            (true, true) => None,
            (false, true) => Some(MissingInput::JobDescription),
            (true, false) => Some(MissingInput::Resumes),
            (false, false) => Some(MissingInput::Both),
        }
    }
}

impl fmt::Display for MissingInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingInput::JobDescription => {
                write!(f, "Please enter a job description to rank the resumes")
            }
            MissingInput::Resumes => write!(f, "Please upload resumes to rank"),
            MissingInput::Both => write!(
                f,
                "Please enter a job description and upload resumes to rank"
            ),
        }
    }
}

/// Error types that can occur while screening resumes.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The data is not recognized as PDF.
    #[error("Unknown file format: not a valid PDF")]
    UnknownFormat,

    /// The PDF version is not supported.
    #[error("Unsupported PDF version: {0}")]
    UnsupportedVersion(String),

    /// Error parsing PDF structure.
    #[error("PDF parsing error: {0}")]
    PdfParse(String),

    /// The PDF document is encrypted.
    #[error("Document is encrypted")]
    Encrypted,

    /// Error extracting text content from a page.
    #[error("Text extraction error: {0}")]
    TextExtract(String),

    /// The document parsed but contains no extractable text.
    #[error("Document contains no extractable text")]
    NoText,

    /// A resume in the batch could not be extracted.
    #[error("Failed to extract text from '{name}': {source}")]
    Extraction {
        /// Display name of the failing resume
        name: String,
        /// Underlying cause
        #[source]
        source: Box<Error>,
    },

    /// A required screening input is missing.
    #[error("{0}")]
    EmptyInput(MissingInput),

    /// No resume survived extraction.
    #[error("No resumes were successfully processed. Please check the PDF files")]
    NoProcessableResumes,

    /// The vector space could not be built from the inputs.
    #[error("Vectorization error: {0}")]
    Vectorization(String),

    /// A file was rejected at the input boundary.
    #[error("Invalid upload: {0}")]
    InvalidUpload(String),

    /// CSV reading or writing failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Error during rendering (table, CSV, JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}

impl Error {
    /// Wrap a per-document failure with the document's display name.
    pub fn extraction(name: impl Into<String>, source: Error) -> Self {
        Error::Extraction {
            name: name.into(),
            source: Box::new(source),
        }
    }

    /// Whether this error is a user-facing warning rather than a hard failure.
    pub fn is_warning(&self) -> bool {
        matches!(self, Error::EmptyInput(_) | Error::NoProcessableResumes)
    }
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::PdfParse(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Encrypted;
        assert_eq!(err.to_string(), "Document is encrypted");

        let err = Error::extraction("a.pdf", Error::NoText);
        assert_eq!(
            err.to_string(),
            "Failed to extract text from 'a.pdf': Document contains no extractable text"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_lopdf_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::UnexpectedEof, "truncated");
        assert!(matches!(Error::from(lopdf::Error::IO(io_err)), Error::Io(_)));
    }

    #[test]
    fn test_missing_input_check() {
        assert_eq!(MissingInput::check(true, true), None);
        assert_eq!(
            MissingInput::check(false, true),
            Some(MissingInput::JobDescription)
        );
        assert_eq!(MissingInput::check(true, false), Some(MissingInput::Resumes));
        assert_eq!(MissingInput::check(false, false), Some(MissingInput::Both));
    }

    #[test]
    fn test_missing_input_messages_are_distinct() {
        let messages: Vec<String> = [
            MissingInput::JobDescription,
            MissingInput::Resumes,
            MissingInput::Both,
        ]
        .iter()
        .map(|m| Error::EmptyInput(*m).to_string())
        .collect();

        assert_ne!(messages[0], messages[1]);
        assert_ne!(messages[1], messages[2]);
        assert_ne!(messages[0], messages[2]);
    }

    #[test]
    fn test_warning_classification() {
        assert!(Error::EmptyInput(MissingInput::Both).is_warning());
        assert!(Error::NoProcessableResumes.is_warning());
        assert!(!Error::extraction("x.pdf", Error::UnknownFormat).is_warning());
        assert!(!Error::Vectorization("empty vocabulary".into()).is_warning());
    }
}
