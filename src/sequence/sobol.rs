use tracing::debug;

use crate::error::{Result, SequenceError};

/// Largest dimension covered by the Joe–Kuo direction-number set.
pub const MAX_DIMENSION: usize = 21201;

/// Dimensions available from the built-in direction numbers.
pub const SUPPORTED_DIMENSION: usize = DIRECTION_TABLE.len() + 1;

/// Bits of precision per coordinate.
const BITS: usize = 52;

/// `2^-52`.
const SCALE: f64 = 1.0 / (1_u64 << BITS) as f64;

/// Joe–Kuo primitive polynomial degree `s`, coefficient bits `a` and initial
/// direction integers `m`, for dimensions 2 onwards.
const DIRECTION_TABLE: [(usize, u64, &[u64]); 20] = [
    (1, 0, &[1]),
    (2, 1, &[1, 3]),
    (3, 1, &[1, 3, 1]),
    (3, 2, &[1, 1, 1]),
    (4, 1, &[1, 1, 3, 3]),
    (4, 4, &[1, 3, 5, 13]),
    (5, 2, &[1, 1, 5, 5, 17]),
    (5, 4, &[1, 1, 5, 5, 5]),
    (5, 7, &[1, 1, 7, 11, 19]),
    (5, 11, &[1, 1, 5, 1, 1]),
    (5, 13, &[1, 1, 1, 3, 11]),
    (5, 14, &[1, 3, 5, 5, 31]),
    (6, 1, &[1, 3, 3, 9, 7, 49]),
    (6, 13, &[1, 1, 1, 15, 21, 21]),
    (6, 16, &[1, 3, 1, 13, 27, 49]),
    (6, 19, &[1, 1, 1, 15, 7, 5]),
    (6, 22, &[1, 3, 1, 15, 13, 25]),
    (6, 25, &[1, 1, 5, 5, 19, 61]),
    (7, 1, &[1, 3, 7, 11, 23, 15, 103]),
    (7, 4, &[1, 3, 7, 13, 13, 15, 69]),
];

/// Sobol low-discrepancy point generator over `[0, 1)^dimension`.
///
/// Points are produced in Gray-code order, so each one differs from its
/// predecessor by a single XOR per coordinate. The first point is the
/// origin.
#[derive(Debug, Clone)]
pub struct Sobol {
    /// Direction integers per dimension, indexed `1..=BITS`.
    direction: Vec<[u64; BITS + 1]>,
    x: Vec<u64>,
    count: u64,
}

impl Sobol {
    /// Creates a generator for `dimension`-dimensional points.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidDimension`] if `dimension` is zero or
    /// exceeds the available direction numbers.
    pub fn new(dimension: usize) -> Result<Self> {
        let max = if dimension > MAX_DIMENSION {
            MAX_DIMENSION
        } else {
            SUPPORTED_DIMENSION
        };
        if dimension == 0 || dimension > max {
            return Err(SequenceError::InvalidDimension { dimension, max }.into());
        }

        let mut direction = Vec::with_capacity(dimension);
        let mut first = [0; BITS + 1];
        for (i, v) in first.iter_mut().enumerate().skip(1) {
            *v = 1 << (BITS - i);
        }
        direction.push(first);
        for &(s, a, m) in &DIRECTION_TABLE[..dimension - 1] {
            direction.push(direction_numbers(s, a, m));
        }
        debug!(dimension, "sobol generator ready");

        Ok(Self {
            direction,
            x: vec![0; dimension],
            count: 0,
        })
    }

    #[must_use]
    pub fn dimension(&self) -> usize {
        self.x.len()
    }

    /// Number of points generated so far.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.count
    }

    #[allow(clippy::cast_precision_loss)]
    fn next_vector(&mut self) -> Vec<f64> {
        if self.count > 0 {
            // Index of the lowest zero bit of count - 1, 1-based. The
            // sequence repeats after 2^52 points.
            let c = ((self.count - 1).trailing_ones() as usize + 1).min(BITS);
            for (x, v) in self.x.iter_mut().zip(&self.direction) {
                *x ^= v[c];
            }
        }
        self.count += 1;
        self.x.iter().map(|&x| x as f64 * SCALE).collect()
    }
}

impl Iterator for Sobol {
    type Item = Vec<f64>;

    fn next(&mut self) -> Option<Vec<f64>> {
        Some(self.next_vector())
    }
}

/// Expands one dimension's initial direction integers to all `BITS` bits
/// with the recurrence of its primitive polynomial.
fn direction_numbers(s: usize, a: u64, m: &[u64]) -> [u64; BITS + 1] {
    let mut v = [0; BITS + 1];
    for i in 1..=s {
        v[i] = m[i - 1] << (BITS - i);
    }
    for i in s + 1..=BITS {
        v[i] = v[i - s] ^ (v[i - s] >> s);
        for k in 1..s {
            if (a >> (s - 1 - k)) & 1 == 1 {
                v[i] ^= v[i - k];
            }
        }
    }
    v
}
