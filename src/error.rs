use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building or advancing a simulation.
#[derive(Debug, Error)]
pub enum Error {
    /// Timestep is negative, NaN or infinite (or zero where a clock needs progress).
    #[error("invalid timestep: {0} s")]
    InvalidTimestep(f64),

    /// Invalid user or API parameter.
    #[error("invalid parameter: {0}")]
    InvalidParam(String),

    /// A body with this name is already registered on the clock.
    #[error("duplicate body name: {0}")]
    DuplicateName(String),

    /// No body with this name is registered on the clock.
    #[error("unknown body name: {0}")]
    UnknownName(String),

    /// Propagated I/O errors from trajectory/summary export.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_is_informative() {
        let e = Error::InvalidTimestep(-0.5);
        let msg = format!("{e}");
        assert!(msg.contains("invalid timestep"));
        assert!(msg.contains("-0.5"));

        let e = Error::DuplicateName("golf_ball_one".into());
        assert!(format!("{e}").contains("golf_ball_one"));
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        let e: Error = io.into();
        assert!(matches!(e, Error::Io(_)));
        assert!(format!("{e}").contains("disk full"));
    }
}
