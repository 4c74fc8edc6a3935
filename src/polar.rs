//! Exact polar-to-rectangular rendering for the question bank.
//!
//! Angles are restricted to a 16-entry table of special angles, so both
//! coordinates of `r(cos θ + i sin θ)` stay exact surd quantities and the
//! emitted LaTeX never contains a rounded float.

use crate::error::{MillError, Result};

/// One exact coordinate of a rectangular form, `k·√s / d`.
///
/// `s` is 1, 2, or 3 and `d` is 1 or 2, which covers every value a
/// special angle can produce once scaled by an integer modulus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Surd {
    k: i64,
    s: i64,
    d: i64,
}

const fn surd(k: i64, s: i64, d: i64) -> Surd {
    Surd { k, s, d }
}

/// Degrees, cosine, and sine for each supported angle index.
const ANGLE_TABLE: [(i64, Surd, Surd); 16] = [
    (0, surd(1, 1, 1), surd(0, 1, 1)),
    (30, surd(1, 3, 2), surd(1, 1, 2)),
    (45, surd(1, 2, 2), surd(1, 2, 2)),
    (60, surd(1, 1, 2), surd(1, 3, 2)),
    (90, surd(0, 1, 1), surd(1, 1, 1)),
    (120, surd(-1, 1, 2), surd(1, 3, 2)),
    (135, surd(-1, 2, 2), surd(1, 2, 2)),
    (150, surd(-1, 3, 2), surd(1, 1, 2)),
    (180, surd(-1, 1, 1), surd(0, 1, 1)),
    (210, surd(-1, 3, 2), surd(-1, 1, 2)),
    (225, surd(-1, 2, 2), surd(-1, 2, 2)),
    (240, surd(-1, 1, 2), surd(-1, 3, 2)),
    (270, surd(0, 1, 1), surd(-1, 1, 1)),
    (300, surd(1, 1, 2), surd(-1, 3, 2)),
    (315, surd(1, 2, 2), surd(-1, 2, 2)),
    (330, surd(1, 3, 2), surd(-1, 1, 2)),
];

fn entry(angle_index: i64) -> Result<&'static (i64, Surd, Surd)> {
    usize::try_from(angle_index)
        .ok()
        .and_then(|i| ANGLE_TABLE.get(i))
        .ok_or(MillError::InvalidAngleIndex { index: angle_index })
}

/// The angle in degrees for a table index, for use in question wording.
pub fn angle_degrees(angle_index: i64) -> Result<i64> {
    Ok(entry(angle_index)?.0)
}

impl Surd {
    fn is_zero(self) -> bool {
        self.k == 0
    }

    /// Multiplies by an integer factor and reduces the result.
    fn scaled(self, factor: i64) -> Surd {
        let mut k = self.k * factor;
        let mut d = self.d;
        if d == 2 && k % 2 == 0 {
            k /= 2;
            d = 1;
        }
        if k == 0 {
            return surd(0, 1, 1);
        }
        surd(k, self.s, d)
    }

    /// Renders the magnitude, ignoring sign. For the imaginary coordinate
    /// the unit `i` sits inside the numerator of any fraction.
    fn render_magnitude(self, imaginary: bool) -> String {
        let k = self.k.abs();
        let mut numerator = Vec::new();
        if k != 1 || (self.s == 1 && !imaginary) {
            numerator.push(k.to_string());
        }
        if self.s > 1 {
            numerator.push(format!("\\sqrt{{{}}}", self.s));
        }
        if imaginary {
            numerator.push("i".to_string());
        }
        let numerator = numerator.join(" ");
        if self.d == 2 {
            format!("\\frac{{{numerator}}}{{2}}")
        } else {
            numerator
        }
    }
}

fn render_signed(part: Surd, imaginary: bool) -> String {
    if part.k < 0 {
        format!("- {}", part.render_magnitude(imaginary))
    } else {
        part.render_magnitude(imaginary)
    }
}

/// Renders `modulus · (cos θ + i sin θ)` in rectangular form as LaTeX.
///
/// Zero coordinates are omitted, coefficients of 1 are implicit, and the
/// real part always comes first, so `(1, 4)` renders as plain `i` and
/// `(2, 1)` as `\sqrt{3} + i`.
pub fn rectangular_form(modulus: i64, angle_index: i64) -> Result<String> {
    let &(_, cos, sin) = entry(angle_index)?;
    let re = cos.scaled(modulus);
    let im = sin.scaled(modulus);
    Ok(match (re.is_zero(), im.is_zero()) {
        (true, true) => "0".to_string(),
        (false, true) => render_signed(re, false),
        (true, false) => render_signed(im, true),
        (false, false) => {
            let sep = if im.k < 0 { " - " } else { " + " };
            format!(
                "{}{}{}",
                render_signed(re, false),
                sep,
                im.render_magnitude(true)
            )
        }
    })
}
