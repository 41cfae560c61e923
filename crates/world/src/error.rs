use std::error::Error;
use std::fmt;

/// The viewer's few validated inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerError {
    /// Animation duration must be at least one frame.
    InvalidDuration(u32),
    /// A scene part expected at load time could not be resolved.
    ComponentNotFound(&'static str),
}

impl fmt::Display for ViewerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDuration(frames) => {
                write!(f, "invalid animation duration: {frames} frames")
            }
            Self::ComponentNotFound(name) => write!(f, "scene component not found: {name}"),
        }
    }
}

impl Error for ViewerError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failing_input() {
        let err = ViewerError::InvalidDuration(0);
        assert!(err.to_string().contains("0 frames"));

        let err = ViewerError::ComponentNotFound("fan assembly");
        assert!(err.to_string().contains("fan assembly"));
    }
}
