use std::fmt;

#[derive(Debug, Clone)]
pub enum SnaplinkError {
    EmptyUrl(String),
    InvalidUrlFormat(String),
    InvalidExpiration(String),
    InvalidAliasLength(String),
    AliasTaken(String),
    NotFound(String),
    Expired(String),
    FileOperation(String),
    Serialization(String),
    DateParse(String),
}

impl SnaplinkError {
    pub fn code(&self) -> &'static str {
        match self {
            SnaplinkError::EmptyUrl(_) => "E001",
            SnaplinkError::InvalidUrlFormat(_) => "E002",
            SnaplinkError::InvalidExpiration(_) => "E003",
            SnaplinkError::InvalidAliasLength(_) => "E004",
            SnaplinkError::AliasTaken(_) => "E005",
            SnaplinkError::NotFound(_) => "E006",
            SnaplinkError::Expired(_) => "E007",
            SnaplinkError::FileOperation(_) => "E008",
            SnaplinkError::Serialization(_) => "E009",
            SnaplinkError::DateParse(_) => "E010",
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            SnaplinkError::EmptyUrl(_) => "Empty URL",
            SnaplinkError::InvalidUrlFormat(_) => "Invalid URL Format",
            SnaplinkError::InvalidExpiration(_) => "Invalid Expiration",
            SnaplinkError::InvalidAliasLength(_) => "Invalid Alias Length",
            SnaplinkError::AliasTaken(_) => "Alias Already Taken",
            SnaplinkError::NotFound(_) => "Short Link Not Found",
            SnaplinkError::Expired(_) => "Short Link Expired",
            SnaplinkError::FileOperation(_) => "File Operation Error",
            SnaplinkError::Serialization(_) => "Serialization Error",
            SnaplinkError::DateParse(_) => "Date Parse Error",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            SnaplinkError::EmptyUrl(msg) => msg,
            SnaplinkError::InvalidUrlFormat(msg) => msg,
            SnaplinkError::InvalidExpiration(msg) => msg,
            SnaplinkError::InvalidAliasLength(msg) => msg,
            SnaplinkError::AliasTaken(msg) => msg,
            SnaplinkError::NotFound(msg) => msg,
            SnaplinkError::Expired(msg) => msg,
            SnaplinkError::FileOperation(msg) => msg,
            SnaplinkError::Serialization(msg) => msg,
            SnaplinkError::DateParse(msg) => msg,
        }
    }

    /// Colored output for the CLI surface
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for SnaplinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for SnaplinkError {}

impl SnaplinkError {
    pub fn empty_url<T: Into<String>>(msg: T) -> Self {
        SnaplinkError::EmptyUrl(msg.into())
    }

    pub fn invalid_url_format<T: Into<String>>(msg: T) -> Self {
        SnaplinkError::InvalidUrlFormat(msg.into())
    }

    pub fn invalid_expiration<T: Into<String>>(msg: T) -> Self {
        SnaplinkError::InvalidExpiration(msg.into())
    }

    pub fn invalid_alias_length<T: Into<String>>(msg: T) -> Self {
        SnaplinkError::InvalidAliasLength(msg.into())
    }

    pub fn alias_taken<T: Into<String>>(msg: T) -> Self {
        SnaplinkError::AliasTaken(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        SnaplinkError::NotFound(msg.into())
    }

    pub fn expired<T: Into<String>>(msg: T) -> Self {
        SnaplinkError::Expired(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        SnaplinkError::FileOperation(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        SnaplinkError::Serialization(msg.into())
    }

    pub fn date_parse<T: Into<String>>(msg: T) -> Self {
        SnaplinkError::DateParse(msg.into())
    }
}

impl From<std::io::Error> for SnaplinkError {
    fn from(err: std::io::Error) -> Self {
        SnaplinkError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for SnaplinkError {
    fn from(err: serde_json::Error) -> Self {
        SnaplinkError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for SnaplinkError {
    fn from(err: chrono::ParseError) -> Self {
        SnaplinkError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SnaplinkError>;
