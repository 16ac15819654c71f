/// Failure kinds raised while parsing a pasted catalog.
///
/// A single failing block aborts the whole parse call, so every variant carries
/// the offending line or block text for display back to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Paste one or more section blocks before adding to the list.")]
    EmptyCatalog,

    #[error("No section blocks found in the pasted catalog.")]
    NoBlocksFound,

    #[error("Header line is malformed: \"{0}\"")]
    MalformedHeader(String),

    #[error("Section has no meeting lines: \"{0}\"")]
    NoMeetingLines(String),

    #[error("Meeting time has non-positive duration: \"{0}\"")]
    NonPositiveDuration(String),

    #[error("Meta line not found for section: \"{0}\"")]
    MissingMetadata(String),

    #[error("Meta line is malformed: \"{0}\"")]
    MalformedMetadata(String),

    #[error("Unknown day token: \"{0}\"")]
    UnknownDayToken(String),

    #[error("Invalid time token: \"{0}\"")]
    InvalidTimeToken(String),
}

/// Fieldless discriminant of [`ParseError`], for matching without destructuring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    EmptyCatalog,
    NoBlocksFound,
    MalformedHeader,
    NoMeetingLines,
    NonPositiveDuration,
    MissingMetadata,
    MalformedMetadata,
    UnknownDayToken,
    InvalidTimeToken,
}

impl ParseError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::EmptyCatalog => ErrorKind::EmptyCatalog,
            ParseError::NoBlocksFound => ErrorKind::NoBlocksFound,
            ParseError::MalformedHeader(_) => ErrorKind::MalformedHeader,
            ParseError::NoMeetingLines(_) => ErrorKind::NoMeetingLines,
            ParseError::NonPositiveDuration(_) => ErrorKind::NonPositiveDuration,
            ParseError::MissingMetadata(_) => ErrorKind::MissingMetadata,
            ParseError::MalformedMetadata(_) => ErrorKind::MalformedMetadata,
            ParseError::UnknownDayToken(_) => ErrorKind::UnknownDayToken,
            ParseError::InvalidTimeToken(_) => ErrorKind::InvalidTimeToken,
        }
    }

    /// The line or block text that triggered the failure. Empty for the
    /// whole-input kinds.
    pub fn offending_text(&self) -> &str {
        match self {
            ParseError::EmptyCatalog | ParseError::NoBlocksFound => "",
            ParseError::MalformedHeader(text)
            | ParseError::NoMeetingLines(text)
            | ParseError::NonPositiveDuration(text)
            | ParseError::MissingMetadata(text)
            | ParseError::MalformedMetadata(text)
            | ParseError::UnknownDayToken(text)
            | ParseError::InvalidTimeToken(text) => text,
        }
    }
}

pub type Result<T> = std::result::Result<T, ParseError>;
