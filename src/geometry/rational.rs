use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

/// Greatest common divisor of the absolute values; `gcd(0, 0) == 0`
#[inline]
const fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Exact fraction, always kept in lowest terms with a positive denominator.
///
/// Equality is structural, which matches value equality because every
/// constructor reduces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Fraction {
    numer: i64,
    denom: i64,
}

impl Fraction {
    pub const ZERO: Fraction = Fraction { numer: 0, denom: 1 };

    /// Build `numer / denom` in lowest terms.
    ///
    /// # Panics
    /// A zero denominator is a broken contract and aborts the caller.
    pub fn new(numer: i64, denom: i64) -> Self {
        assert!(denom != 0, "fraction with zero denominator ({numer}/0)");
        let d = gcd(numer, denom);
        let (mut numer, mut denom) = (numer / d, denom / d);
        if denom < 0 {
            numer = -numer;
            denom = -denom;
        }
        Self { numer, denom }
    }

    #[inline]
    pub const fn numer(self) -> i64 {
        self.numer
    }

    #[inline]
    pub const fn denom(self) -> i64 {
        self.denom
    }
}

impl From<i64> for Fraction {
    #[inline]
    fn from(value: i64) -> Self {
        Self {
            numer: value,
            denom: 1,
        }
    }
}

impl Add for Fraction {
    type Output = Fraction;

    fn add(self, rhs: Fraction) -> Fraction {
        Fraction::new(
            self.numer * rhs.denom + rhs.numer * self.denom,
            self.denom * rhs.denom,
        )
    }
}

impl Sub for Fraction {
    type Output = Fraction;

    fn sub(self, rhs: Fraction) -> Fraction {
        Fraction::new(
            self.numer * rhs.denom - rhs.numer * self.denom,
            self.denom * rhs.denom,
        )
    }
}

impl Mul for Fraction {
    type Output = Fraction;

    fn mul(self, rhs: Fraction) -> Fraction {
        Fraction::new(self.numer * rhs.numer, self.denom * rhs.denom)
    }
}

impl Div for Fraction {
    type Output = Fraction;

    /// Dividing by zero yields a zero denominator and panics in `Fraction::new`.
    fn div(self, rhs: Fraction) -> Fraction {
        Fraction::new(self.numer * rhs.denom, self.denom * rhs.numer)
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        debug_assert!(self.denom > 0 && other.denom > 0);
        // widen so the cross products cannot overflow
        let lhs = i128::from(self.numer) * i128::from(other.denom);
        let rhs = i128::from(other.numer) * i128::from(self.denom);
        lhs.cmp(&rhs)
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denom == 1 {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_reduced(f: Fraction) -> bool {
        if f.numer() == 0 {
            f.denom() == 1
        } else {
            f.denom() > 0 && gcd(f.numer(), f.denom()) == 1
        }
    }

    #[test]
    fn test_fraction_reduces_and_normalizes_sign() {
        let f = Fraction::new(6, -8);
        assert_eq!(f.numer(), -3);
        assert_eq!(f.denom(), 4);

        let z = Fraction::new(0, -7);
        assert_eq!(z, Fraction::ZERO);
        assert_eq!(z.denom(), 1);

        assert_eq!(Fraction::new(-4, -2), Fraction::from(2));
    }

    #[test]
    #[should_panic(expected = "zero denominator")]
    fn test_zero_denominator_panics() {
        let _ = Fraction::new(3, 0);
    }

    #[test]
    #[should_panic(expected = "zero denominator")]
    fn test_division_by_zero_panics() {
        let _ = Fraction::new(1, 2) / Fraction::ZERO;
    }

    #[test]
    fn test_fraction_arithmetic() {
        let half = Fraction::new(1, 2);
        let third = Fraction::new(1, 3);

        assert_eq!(half + third, Fraction::new(5, 6));
        assert_eq!(half - third, Fraction::new(1, 6));
        assert_eq!(third - half, Fraction::new(-1, 6));
        assert_eq!(half * third, Fraction::new(1, 6));
        assert_eq!(half / third, Fraction::new(3, 2));
        assert_eq!(half + half, Fraction::from(1));
    }

    #[test]
    fn test_fraction_display() {
        assert_eq!(Fraction::new(2, 4).to_string(), "1/2");
        assert_eq!(Fraction::new(-9, 3).to_string(), "-3");
    }

    #[test]
    fn test_sampled_fractions_stay_reduced() {
        let mut rng = fastrand::Rng::with_seed(2008);
        for _ in 0..2_000 {
            let n = rng.i64(-500..=500);
            let d = loop {
                let d = rng.i64(-500..=500);
                if d != 0 {
                    break d;
                }
            };
            let f = Fraction::new(n, d);
            assert!(is_reduced(f), "{n}/{d} -> {f:?}");

            let g = Fraction::new(rng.i64(-50..=50), rng.i64(1..=50));
            assert!(is_reduced(f + g));
            assert!(is_reduced(f - g));
            assert!(is_reduced(f * g));
        }
    }

    #[test]
    fn test_sampled_ordering_matches_real_values() {
        let mut rng = fastrand::Rng::with_seed(42);
        let mut nonzero = || loop {
            let d = rng.i64(-60..=60);
            if d != 0 {
                break d;
            }
        };
        let mut rng2 = fastrand::Rng::with_seed(7);
        for _ in 0..2_000 {
            let (n1, d1) = (rng2.i64(-60..=60), nonzero());
            let (n2, d2) = (rng2.i64(-60..=60), nonzero());

            // compare n1/d1 against n2/d2 without division: multiply through by d1*d2
            // and flip when that product is negative
            let lhs = n1 * d2;
            let rhs = n2 * d1;
            let expected = if d1 * d2 > 0 {
                lhs.cmp(&rhs)
            } else {
                rhs.cmp(&lhs)
            };

            let got = Fraction::new(n1, d1).cmp(&Fraction::new(n2, d2));
            assert_eq!(got, expected, "{n1}/{d1} vs {n2}/{d2}");
        }
    }

    #[test]
    fn test_quarter_threshold_ordering() {
        let quarter = Fraction::new(1, 4);
        assert!(Fraction::new(1, 5) <= quarter);
        assert!(Fraction::new(2, 8) <= quarter);
        assert!(Fraction::new(26, 100) > quarter);
        assert!(Fraction::ZERO < quarter);
    }
}
