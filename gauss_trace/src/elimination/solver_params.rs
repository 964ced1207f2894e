use super::{error::SolveError, pivot::PivotPolicy};

/// Engine settings. Rendering precision is not one of them; it belongs to
/// the sinks that print.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverParams {
    pub pivot_policy: PivotPolicy,
    // finite and >= 0, checked in `with_zero_tolerance`
    zero_tolerance: f64,
}

impl SolverParams {
    pub fn new(pivot_policy: PivotPolicy) -> Self {
        Self {
            pivot_policy,
            ..Default::default()
        }
    }

    /// Entries with `|v| <= zero_tolerance` count as zero pivots. A
    /// negative or non-finite tolerance would let zero pivots through, so
    /// it is refused.
    pub fn with_zero_tolerance(self, zero_tolerance: f64) -> Result<Self, SolveError> {
        if !zero_tolerance.is_finite() || zero_tolerance < 0.0 {
            return Err(SolveError::InvalidZeroTolerance);
        }
        Ok(Self {
            zero_tolerance,
            ..self
        })
    }

    pub fn zero_tolerance(&self) -> f64 {
        self.zero_tolerance
    }

    pub fn is_zero(&self, value: f64) -> bool {
        value.abs() <= self.zero_tolerance
    }
}

impl Default for SolverParams {
    fn default() -> Self {
        Self {
            pivot_policy: PivotPolicy::default(),
            zero_tolerance: 0.0,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_tolerance_is_exact_zero() {
        let params = SolverParams::default();
        assert_eq!(params.zero_tolerance(), 0.0);
        assert!(params.is_zero(0.0));
        assert!(params.is_zero(-0.0));
        assert!(!params.is_zero(f64::MIN_POSITIVE));
    }

    #[test]
    fn accepts_non_negative_tolerance() {
        let params = SolverParams::default().with_zero_tolerance(1e-12).unwrap();
        assert_eq!(params.zero_tolerance(), 1e-12);
        assert!(params.is_zero(-1e-13));
        assert!(!params.is_zero(1e-11));
    }

    #[test]
    fn refuses_negative_and_non_finite_tolerance() {
        for bad in [-1.0, -f64::MIN_POSITIVE, f64::NAN, f64::INFINITY] {
            assert_eq!(
                SolverParams::default().with_zero_tolerance(bad),
                Err(SolveError::InvalidZeroTolerance),
                "{bad}"
            );
        }
    }
}
