use thiserror::Error;

pub type SimResult<T> = Result<T, SimError>;

/// Construction-time validation failures. Once a session is built, ticking
/// it never fails.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("non-finite value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("{what} must be positive, got {value}")]
    NonPositive { what: &'static str, value: f64 },

    #[error("trace capacity must be nonzero")]
    ZeroCapacity,
}

pub(crate) fn ensure_finite(what: &'static str, value: f64) -> SimResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SimError::NonFinite { what, value })
    }
}

pub(crate) fn ensure_positive(what: &'static str, value: f64) -> SimResult<()> {
    ensure_finite(what, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(SimError::NonPositive { what, value })
    }
}

#[cfg(test)]
mod tests {
    use super::{ensure_finite, ensure_positive};

    #[test]
    fn finite_values_pass() {
        assert!(ensure_finite("x", 1.5).is_ok());
        assert!(ensure_finite("x", -3.0).is_ok());
    }

    #[test]
    fn nan_and_infinities_are_rejected() {
        assert!(ensure_finite("x", f64::NAN).is_err());
        assert!(ensure_finite("x", f64::INFINITY).is_err());
        assert!(ensure_finite("x", f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn positivity_rejects_zero_and_negatives() {
        assert!(ensure_positive("mass", 10.0).is_ok());
        assert!(ensure_positive("mass", 0.0).is_err());
        assert!(ensure_positive("mass", -1.0).is_err());
    }
}
