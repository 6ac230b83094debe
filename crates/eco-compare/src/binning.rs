//! Log2 histograms of abundance data.
//!
//! Bins are half-open `[lo, hi)` except the last, which is closed; values
//! outside the edge range are not counted. Because abundances are integers,
//! the Preston edges below make each bin effectively exclusive of its lower
//! octave boundary and inclusive of its upper one.

use eco_core::{ensure, sample, Real, Result, Size};

/// Counts per bin and the `counts.len() + 1` bin edges.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Histogram {
    /// Number of values falling in each bin.
    pub counts: Vec<Size>,
    /// Strictly increasing bin edges.
    pub edges: Vec<Real>,
}

impl Histogram {
    /// Count `data` into the bins delimited by `edges`.
    pub fn from_edges(data: &[Real], edges: Vec<Real>) -> Result<Self> {
        ensure!(edges.len() >= 2, "a histogram needs at least two edges, got {}", edges.len());
        ensure!(
            edges.windows(2).all(|w| w[0] < w[1]),
            "histogram edges must be strictly increasing"
        );
        let mut counts = vec![0; edges.len() - 1];
        let last = edges[edges.len() - 1];
        for &x in data {
            if x < edges[0] || x > last || x.is_nan() {
                continue;
            }
            // first edge strictly above x, less one; the top edge closes the last bin
            let bin = (edges.partition_point(|&e| e <= x) - 1).min(counts.len() - 1);
            counts[bin] += 1;
        }
        Ok(Self { counts, edges })
    }

    /// Number of bins.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// `true` when there are no bins.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// ceil(log2(max_num)), which must be non-negative.
fn octaves(max_num: Real) -> Result<u32> {
    ensure!(
        max_num.is_finite() && max_num >= 1.0,
        "max_num must be a finite value of at least 1, got {max_num}"
    );
    Ok(max_num.log2().ceil() as u32)
}

/// Plain log2 histogram with edges `1, 2, 4, …, 2^ceil(log2 max_num)`.
///
/// When `max_num` is 1 the single bin is `[0, 1]`.
pub fn log2_bin(data: &[Real], max_num: Real) -> Result<Histogram> {
    sample::check_finite(data)?;
    let edges = match octaves(max_num)? {
        0 => vec![0.0, 1.0],
        top => (0..=top).map(|i| Real::powi(2.0, i as i32)).collect(),
    };
    Histogram::from_edges(data, edges)
}

/// Preston's log2 binning (Preston 1962).
///
/// Starting from the octave edges `1, 2, 4, …, 2^ceil(log2 max_num)`, an
/// extra edge is inserted at 3 and every edge from that position on is
/// shifted up by one, giving bins for `1`, `2`, `3–4`, `5–8`, `9–16`, ….
/// For `max_num` of 1 the edges are `[0, 1]`; for 2 they are `[1, 2, 3]`.
pub fn preston_bin(data: &[Real], max_num: Real) -> Result<Histogram> {
    sample::check_finite(data)?;
    let edges = match octaves(max_num)? {
        0 => vec![0.0, 1.0],
        1 => vec![1.0, 2.0, 3.0],
        top => {
            let mut edges: Vec<Real> = (0..=top).map(|i| Real::powi(2.0, i as i32)).collect();
            edges.insert(2, 3.0);
            for e in &mut edges[3..] {
                *e += 1.0;
            }
            edges
        }
    };
    Histogram::from_edges(data, edges)
}
