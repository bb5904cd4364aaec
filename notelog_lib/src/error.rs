use snafu::Snafu;

#[derive(Debug, Snafu)]
pub enum NotelogError {
    #[snafu(transparent)]
    IoError { source: std::io::Error },
    #[snafu(transparent)]
    JsonError { source: serde_json::Error },
    #[snafu(display("{summary}: {}", details.as_deref().unwrap_or("no details")))]
    LogSetupFailed {
        summary: String,
        details: Option<String>,
    },
    #[snafu(display("could not determine a config directory"))]
    NoConfigDir,
    #[snafu(display("notelog encountered an error: {msg}"))]
    GenericError { msg: String },
}

/// Folds any error into [`NotelogError::GenericError`] with a caller-built message.
pub trait ResultExt<T, E> {
    fn with_generic<F>(self, f: F) -> Result<T, NotelogError>
    where
        F: FnOnce(E) -> String;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    fn with_generic<F>(self, f: F) -> Result<T, NotelogError>
    where
        F: FnOnce(E) -> String,
    {
        match self {
            Ok(ok) => Ok(ok),
            Err(e) => Err(NotelogError::GenericError { msg: f(e) }),
        }
    }
}
