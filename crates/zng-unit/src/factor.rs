use std::{fmt, ops};

use serde::{Deserialize, Serialize};

use crate::{about_eq, about_eq_hash, Px, EQ_EPSILON};

/// Normalized multiplication factor.
///
/// Values of this type are usually in between `-1.0` and `1.0` to indicate a fraction
/// of a unit, but are not clamped to this range.
///
/// You can use the *suffix method* `1.0.fct()` to init a factor, see [`FactorUnits`] for more details.
///
/// # Equality
///
/// Equality is determined using [`about_eq`] with `0.00001` epsilon.
#[derive(Copy, Clone, Default, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Factor(pub f32);
impl Factor {
    /// Maps a signed factor in `[-1.0..=1.0]` to the normal `[0.0..=1.0]` range.
    pub fn to_normal(self) -> Factor {
        Factor((self.0 + 1.0) / 2.0)
    }
}
impl std::hash::Hash for Factor {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        about_eq_hash(self.0, EQ_EPSILON, state)
    }
}
impl PartialEq for Factor {
    fn eq(&self, other: &Self) -> bool {
        about_eq(self.0, other.0, EQ_EPSILON)
    }
}
impl fmt::Debug for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.debug_tuple("Factor").field(&self.0).finish()
        } else {
            write!(f, "{}.fct()", self.0)
        }
    }
}
impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl From<f32> for Factor {
    fn from(value: f32) -> Self {
        Factor(value)
    }
}
impl ops::Neg for Factor {
    type Output = Factor;

    fn neg(self) -> Factor {
        Factor(-self.0)
    }
}
impl ops::Mul<Factor> for Px {
    type Output = Px;

    fn mul(self, rhs: Factor) -> Px {
        self * rhs.0
    }
}

/// Extension methods for initializing factor units.
///
/// # Examples
///
/// ```
/// # use zng_unit::*;
/// let half = 0.5.fct();
/// let start = (-1).fct();
/// assert_eq!(Factor(-1.0), start);
/// # let _ = half;
/// ```
pub trait FactorUnits {
    /// Factor.
    fn fct(self) -> Factor;
}
impl FactorUnits for f32 {
    fn fct(self) -> Factor {
        Factor(self)
    }
}
impl FactorUnits for i32 {
    fn fct(self) -> Factor {
        Factor(self as f32)
    }
}
