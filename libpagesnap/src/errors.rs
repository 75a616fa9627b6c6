use std::fmt::Formatter;

#[derive(Debug, PartialEq)]
pub enum SnapError {
    ErrorCreatingDestinationDirectory(String),
    /// parameters are file path, additional error message
    FileOperationError {
        file_name: String,
        message: String,
    },
    NetworkError(String),
    ErrorStatusCode {
        status_code: String,
        url: String,
    },
    InvalidUrl(String),
    /// Parameter is the url whose path yields no usable file name
    UnnameableResource(String),
}

impl std::fmt::Display for SnapError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let str = match self {
            SnapError::ErrorCreatingDestinationDirectory(err) => {
                format!("error creating destination directory. {err}")
            }
            SnapError::FileOperationError { file_name, message } => {
                format!("{message} : {file_name}")
            }
            SnapError::NetworkError(err) => format!("error connecting to internet. {err}"),
            SnapError::ErrorStatusCode { status_code, url } => {
                format!("server returned an error response. {url} => {status_code}")
            }
            SnapError::InvalidUrl(url) => format!("Invalid url received : {url}"),
            SnapError::UnnameableResource(url) => {
                format!("no file name can be derived from the url path. {url}")
            }
        };
        write!(f, "{str}")
    }
}

impl std::error::Error for SnapError {}
