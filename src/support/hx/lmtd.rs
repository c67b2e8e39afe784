use thiserror::Error;
use uom::{
    ConstZero,
    si::{f64::TemperatureInterval, ratio::ratio},
};

/// Errors from [`log_mean_temperature_difference`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum LmtdError {
    /// One of the approach temperatures is zero, negative, or not a number.
    ///
    /// The logarithmic mean is only defined when both approaches are strictly
    /// positive. A non-positive approach means the streams cross.
    #[error("approach temperatures must both be positive: first={first:?}, second={second:?}")]
    NonPositiveApproach {
        first: TemperatureInterval,
        second: TemperatureInterval,
    },
}

/// Computes the log-mean temperature difference of two terminal approaches.
///
/// With `dt1` and `dt2` the hot-minus-cold temperature differences at either
/// end of an exchanger, the result is `(dt1 - dt2) / ln(dt1 / dt2)`.
/// When `dt1 == dt2` the expression is `0 / 0` and the limit, `dt1`, is
/// returned exactly.
///
/// # Errors
///
/// Returns [`LmtdError::NonPositiveApproach`] unless both approaches are
/// strictly positive.
pub fn log_mean_temperature_difference(
    [dt1, dt2]: [TemperatureInterval; 2],
) -> Result<TemperatureInterval, LmtdError> {
    // Written as negated comparisons so NaN is rejected too.
    if !(dt1 > TemperatureInterval::ZERO && dt2 > TemperatureInterval::ZERO) {
        return Err(LmtdError::NonPositiveApproach {
            first: dt1,
            second: dt2,
        });
    }

    if dt1 == dt2 {
        return Ok(dt1);
    }

    let log_ratio = (dt1 / dt2).get::<ratio>().ln();
    Ok((dt1 - dt2) / log_ratio)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::temperature_interval::kelvin;

    fn dt(value: f64) -> TemperatureInterval {
        TemperatureInterval::new::<kelvin>(value)
    }

    #[test]
    fn equal_approaches_return_the_approach() {
        let lmtd = log_mean_temperature_difference([dt(15.0), dt(15.0)]).unwrap();
        assert_eq!(lmtd, dt(15.0));
    }

    #[test]
    fn unequal_approaches() {
        let lmtd = log_mean_temperature_difference([dt(36.0), dt(15.0)]).unwrap();
        assert_relative_eq!(lmtd.get::<kelvin>(), 23.987_150_087_703_19, epsilon = 1e-10);
    }

    #[test]
    fn symmetric_in_its_arguments() {
        let a = log_mean_temperature_difference([dt(15.0), dt(8.0)]).unwrap();
        let b = log_mean_temperature_difference([dt(8.0), dt(15.0)]).unwrap();
        assert_relative_eq!(a.get::<kelvin>(), b.get::<kelvin>(), epsilon = 1e-12);
    }

    #[test]
    fn lies_between_the_approaches() {
        let pairs = [(36.0, 15.0), (15.0, 8.0), (0.5, 40.0), (100.0, 99.0), (1e-3, 1e3)];
        for (a, b) in pairs {
            let lmtd = log_mean_temperature_difference([dt(a), dt(b)])
                .unwrap()
                .get::<kelvin>();
            assert!(
                lmtd > a.min(b) && lmtd < a.max(b),
                "lmtd {lmtd} not strictly between {a} and {b}"
            );
        }
    }

    #[test]
    fn rejects_non_positive_approaches() {
        for (a, b) in [(10.0, -5.0), (-5.0, 10.0), (0.0, 10.0), (10.0, 0.0), (-1.0, -2.0)] {
            assert_eq!(
                log_mean_temperature_difference([dt(a), dt(b)]),
                Err(LmtdError::NonPositiveApproach {
                    first: dt(a),
                    second: dt(b),
                })
            );
        }
    }

    #[test]
    fn rejects_nan() {
        assert!(log_mean_temperature_difference([dt(f64::NAN), dt(10.0)]).is_err());
    }
}
