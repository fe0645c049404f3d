use crate::F64;

/// Maps any NaN produced by the native FPU to the canonical NaN, so the
/// hardware's payload propagation is never observable.
fn canonicalize(result: f64) -> F64 {
    if result.is_nan() {
        F64::NAN
    } else {
        F64::from_float(result)
    }
}

#[allow(clippy::should_implement_trait)]
impl F64 {
    // ───────────────────────────── Arithmetic ───────────────────────────────

    pub fn add(self, rhs: Self) -> Self {
        canonicalize(self.to_float() + rhs.to_float())
    }

    pub fn sub(self, rhs: Self) -> Self {
        canonicalize(self.to_float() - rhs.to_float())
    }

    pub fn mul(self, rhs: Self) -> Self {
        canonicalize(self.to_float() * rhs.to_float())
    }

    pub fn div(self, rhs: Self) -> Self {
        canonicalize(self.to_float() / rhs.to_float())
    }

    pub fn sqrt(self) -> Self {
        canonicalize(self.to_float().sqrt())
    }

    // ────────────────────────────── Rounding ────────────────────────────────

    pub fn ceil(self) -> Self {
        Self::from_float(self.to_float().ceil())
    }

    pub fn floor(self) -> Self {
        Self::from_float(self.to_float().floor())
    }

    /// Rounds toward zero. Both zeros come back with their sign intact.
    pub fn trunc(self) -> Self {
        let x = self.to_float();
        if x == 0.0 {
            self
        } else if x < 0.0 {
            self.ceil()
        } else {
            self.floor()
        }
    }

    /// Rounds to the nearest integer, ties to even. Both zeros come back
    /// with their sign intact.
    pub fn nearest(self) -> Self {
        let x = self.to_float();
        if x == 0.0 {
            return self;
        }
        let up = x.ceil();
        let down = x.floor();
        let to_up = (up - x).abs();
        let to_down = (x - down).abs();
        let rounded = if to_up < to_down {
            up
        } else if to_down < to_up {
            down
        } else if is_even(up) {
            up
        } else {
            down
        };
        Self::from_float(rounded)
    }

    // ──────────────────────────── Min / Max ─────────────────────────────────

    /// The lesser operand; `-0.0` wins over `+0.0`. NaN in, canonical NaN out.
    pub fn min(self, rhs: Self) -> Self {
        let (x, y) = (self.to_float(), rhs.to_float());
        if x == y {
            Self::from_bits(self.to_bits() | rhs.to_bits())
        } else if x < y {
            self
        } else if y < x {
            rhs
        } else {
            Self::NAN
        }
    }

    /// The greater operand; `+0.0` wins over `-0.0`. NaN in, canonical NaN out.
    pub fn max(self, rhs: Self) -> Self {
        let (x, y) = (self.to_float(), rhs.to_float());
        if x == y {
            Self::from_bits(self.to_bits() & rhs.to_bits())
        } else if x > y {
            self
        } else if y > x {
            rhs
        } else {
            Self::NAN
        }
    }
}

fn is_even(integral: f64) -> bool {
    let half = integral / 2.0;
    half.floor() == half
}
