//! 3D simplex noise over a seeded permutation table
//!
//! Classic Gustavson-style simplex noise: skew into the simplex lattice,
//! rank the fractional coordinates to find the containing tetrahedron, and
//! sum the four corner contributions through a hashed gradient table.

/// Skew factor for 3D: (sqrt(4) - 1) / 3
const F3: f64 = 1.0 / 3.0;
/// Unskew factor for 3D
const G3: f64 = 1.0 / 6.0;

/// The twelve edge-midpoint gradients of a cube
const GRAD3: [[f64; 3]; 12] = [
    [1.0, 1.0, 0.0],
    [-1.0, 1.0, 0.0],
    [1.0, -1.0, 0.0],
    [-1.0, -1.0, 0.0],
    [1.0, 0.0, 1.0],
    [-1.0, 0.0, 1.0],
    [1.0, 0.0, -1.0],
    [-1.0, 0.0, -1.0],
    [0.0, 1.0, 1.0],
    [0.0, -1.0, 1.0],
    [0.0, 1.0, -1.0],
    [0.0, -1.0, -1.0],
];

/// Seed used when a caller passes a non-finite value (e.g. NaN from a
/// corrupted descriptor). Normalizing here keeps every downstream sample
/// finite and bounded.
pub(crate) const FALLBACK_SEED: f64 = 0.0;

/// A seeded, immutable noise field.
///
/// The permutation table is built once in [`NoiseField::new`] and never
/// mutated afterwards, so a field can be shared read-only across threads.
/// The same seed always rebuilds an identical table.
#[derive(Debug, Clone)]
pub struct NoiseField {
    perm: [u8; 512],
    perm_mod12: [u8; 512],
}

impl NoiseField {
    /// Build a field from a seed.
    ///
    /// The base table is the identity permutation of 0..=255 shuffled by a
    /// small linear-congruential generator, then doubled to 512 entries to
    /// avoid index wrapping during lookup. Non-finite seeds normalize to a
    /// fixed fallback rather than propagating NaN.
    pub fn new(seed: f64) -> Self {
        let mut p: [u8; 256] = [0; 256];
        for (i, slot) in p.iter_mut().enumerate() {
            *slot = i as u8;
        }

        let mut state = if seed.is_finite() { seed } else { FALLBACK_SEED };
        let mut next = || {
            state = (state * 9301.0 + 49297.0) % 233280.0;
            state / 233280.0
        };

        // Fisher-Yates, high to low
        for i in (1..256usize).rev() {
            let j = (next() * (i + 1) as f64) as usize;
            p.swap(i, j);
        }

        let mut perm = [0u8; 512];
        let mut perm_mod12 = [0u8; 512];
        for i in 0..512 {
            perm[i] = p[i & 255];
            perm_mod12[i] = perm[i] % 12;
        }

        Self { perm, perm_mod12 }
    }

    /// 3D simplex noise in [-1, 1].
    pub fn simplex3(&self, x: f64, y: f64, z: f64) -> f64 {
        // Skew the input space to find the containing simplex cell
        let s = (x + y + z) * F3;
        let i = (x + s).floor() as i64;
        let j = (y + s).floor() as i64;
        let k = (z + s).floor() as i64;
        let t = (i + j + k) as f64 * G3;

        // Distances from the unskewed cell origin
        let x0 = x - (i as f64 - t);
        let y0 = y - (j as f64 - t);
        let z0 = z - (k as f64 - t);

        // Rank the coordinates to pick the tetrahedron traversal order
        let (i1, j1, k1, i2, j2, k2) = if x0 >= y0 {
            if y0 >= z0 {
                (1, 0, 0, 1, 1, 0)
            } else if x0 >= z0 {
                (1, 0, 0, 1, 0, 1)
            } else {
                (0, 0, 1, 1, 0, 1)
            }
        } else if y0 < z0 {
            (0, 0, 1, 0, 1, 1)
        } else if x0 < z0 {
            (0, 1, 0, 0, 1, 1)
        } else {
            (0, 1, 0, 1, 1, 0)
        };

        let x1 = x0 - i1 as f64 + G3;
        let y1 = y0 - j1 as f64 + G3;
        let z1 = z0 - k1 as f64 + G3;
        let x2 = x0 - i2 as f64 + 2.0 * G3;
        let y2 = y0 - j2 as f64 + 2.0 * G3;
        let z2 = z0 - k2 as f64 + 2.0 * G3;
        let x3 = x0 - 1.0 + 3.0 * G3;
        let y3 = y0 - 1.0 + 3.0 * G3;
        let z3 = z0 - 1.0 + 3.0 * G3;

        let ii = (i & 255) as usize;
        let jj = (j & 255) as usize;
        let kk = (k & 255) as usize;

        let gi0 = self.perm_mod12[ii + self.perm[jj + self.perm[kk] as usize] as usize] as usize;
        let gi1 = self.perm_mod12
            [ii + i1 + self.perm[jj + j1 + self.perm[kk + k1] as usize] as usize]
            as usize;
        let gi2 = self.perm_mod12
            [ii + i2 + self.perm[jj + j2 + self.perm[kk + k2] as usize] as usize]
            as usize;
        let gi3 =
            self.perm_mod12[ii + 1 + self.perm[jj + 1 + self.perm[kk + 1] as usize] as usize]
                as usize;

        let n0 = corner(GRAD3[gi0], x0, y0, z0);
        let n1 = corner(GRAD3[gi1], x1, y1, z1);
        let n2 = corner(GRAD3[gi2], x2, y2, z2);
        let n3 = corner(GRAD3[gi3], x3, y3, z3);

        // 32.0 scales the sum to stay just inside [-1, 1]
        32.0 * (n0 + n1 + n2 + n3)
    }

    /// Fractal Brownian motion: `octaves` layers of [`Self::simplex3`] at
    /// geometrically increasing frequency and decreasing amplitude,
    /// normalized by the total amplitude and shifted to roughly [0, 1].
    pub fn fbm(
        &self,
        x: f64,
        y: f64,
        z: f64,
        octaves: u32,
        persistence: f64,
        lacunarity: f64,
    ) -> f64 {
        // Zero octaves carry no signal; return the midpoint rather than
        // dividing by a zero amplitude sum.
        if octaves == 0 {
            return 0.5;
        }

        let mut total = 0.0;
        let mut frequency = 1.0;
        let mut amplitude = 1.0;
        let mut max_value = 0.0;

        for _ in 0..octaves {
            total += self.simplex3(x * frequency, y * frequency, z * frequency) * amplitude;
            max_value += amplitude;
            amplitude *= persistence;
            frequency *= lacunarity;
        }

        total / max_value + 0.5
    }
}

fn corner(g: [f64; 3], x: f64, y: f64, z: f64) -> f64 {
    let t = 0.6 - x * x - y * y - z * z;
    if t < 0.0 {
        0.0
    } else {
        let t2 = t * t;
        t2 * t2 * (g[0] * x + g[1] * y + g[2] * z)
    }
}
