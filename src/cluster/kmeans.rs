use nalgebra::SVector;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, trace};

use crate::error::{ClusterError, Result};

/// Distance used to assign points to centroids.
pub type DistanceFn<const D: usize> = fn(&SVector<f64, D>, &SVector<f64, D>) -> f64;

/// Squared Euclidean distance, the default assignment metric.
#[must_use]
pub fn squared_euclidean<const D: usize>(a: &SVector<f64, D>, b: &SVector<f64, D>) -> f64 {
    (a - b).norm_squared()
}

/// One cluster of a k-means result.
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster<const D: usize> {
    /// Final centroid.
    pub centroid: SVector<f64, D>,
    /// Indices into the input points, ascending.
    pub members: Vec<usize>,
    /// The member points, in the order of `members`.
    pub points: Vec<SVector<f64, D>>,
}

impl<const D: usize> Cluster<D> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// How a run of Lloyd iterations ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stop {
    /// No centroid moved on this pass.
    Converged { iteration: usize },
    IterationLimit,
}

/// Partitions points into as many clusters as initial centroids are given.
pub struct KMeans<'a, const D: usize> {
    points: &'a [SVector<f64, D>],
    centroids: Vec<SVector<f64, D>>,
    max_iterations: usize,
    distance: DistanceFn<D>,
    seed: Option<u64>,
}

impl<'a, const D: usize> KMeans<'a, D> {
    pub const DEFAULT_MAX_ITERATIONS: usize = 300;

    /// Creates a new `KMeans` operation.
    #[must_use]
    pub fn new(points: &'a [SVector<f64, D>], centroids: Vec<SVector<f64, D>>) -> Self {
        Self {
            points,
            centroids,
            max_iterations: Self::DEFAULT_MAX_ITERATIONS,
            distance: squared_euclidean,
            seed: None,
        }
    }

    #[must_use]
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    #[must_use]
    pub fn distance(mut self, distance: DistanceFn<D>) -> Self {
        self.distance = distance;
        self
    }

    /// Seeds the generator used to re-seed centroids after an empty cluster.
    /// Unseeded runs draw from OS entropy.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Runs Lloyd iterations until no centroid moves or the iteration limit
    /// is reached.
    ///
    /// Clusters are returned in the order of the initial centroids.
    ///
    /// # Errors
    ///
    /// Returns [`ClusterError::InsufficientPoints`] if there are fewer points
    /// than centroids.
    pub fn execute(&self) -> Result<Vec<Cluster<D>>> {
        let k = self.centroids.len();
        let n = self.points.len();
        if k == 0 {
            return Ok(Vec::new());
        }
        if n < k {
            return Err(ClusterError::InsufficientPoints {
                points: n,
                clusters: k,
            }
            .into());
        }

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut centroids = self.centroids.clone();
        let mut assignment = vec![0; n];

        match self.lloyd(&mut centroids, &mut assignment, &mut rng) {
            Stop::Converged { iteration } => debug!(iteration, "k-means converged"),
            Stop::IterationLimit => {
                debug!(
                    iterations = self.max_iterations,
                    "k-means stopped at iteration limit"
                );
            }
        }

        self.assign(&centroids, &mut assignment);
        let mut clusters: Vec<Cluster<D>> = centroids
            .into_iter()
            .map(|centroid| Cluster {
                centroid,
                members: Vec::new(),
                points: Vec::new(),
            })
            .collect();
        for (i, (&c, p)) in assignment.iter().zip(self.points).enumerate() {
            clusters[c].members.push(i);
            clusters[c].points.push(*p);
        }
        Ok(clusters)
    }

    /// Moves `centroids` to the means of their members until nothing moves,
    /// re-seeding them all from random input points whenever a cluster
    /// empties.
    fn lloyd(
        &self,
        centroids: &mut Vec<SVector<f64, D>>,
        assignment: &mut [usize],
        rng: &mut StdRng,
    ) -> Stop {
        let k = centroids.len();
        let n = self.points.len();
        for iteration in 1..=self.max_iterations {
            self.assign(centroids, assignment);

            let Some(next) = self.means(assignment, k) else {
                debug!(iteration, "empty cluster, re-seeding all centroids");
                *centroids = rand::seq::index::sample(rng, n, k)
                    .into_iter()
                    .map(|i| self.points[i])
                    .collect();
                continue;
            };

            let moved = next.iter().zip(centroids.iter()).any(|(a, b)| a != b);
            *centroids = next;
            trace!(iteration, moved, "k-means pass");
            if !moved {
                return Stop::Converged { iteration };
            }
        }
        Stop::IterationLimit
    }

    /// Assigns every point to its nearest centroid; ties go to the lowest
    /// centroid index.
    fn assign(&self, centroids: &[SVector<f64, D>], assignment: &mut [usize]) {
        for (slot, p) in assignment.iter_mut().zip(self.points) {
            let mut best = 0;
            let mut best_distance = f64::INFINITY;
            for (j, c) in centroids.iter().enumerate() {
                let d = (self.distance)(p, c);
                if d < best_distance {
                    best = j;
                    best_distance = d;
                }
            }
            *slot = best;
        }
    }

    /// Member means per cluster, or `None` if some cluster has no members.
    fn means(&self, assignment: &[usize], k: usize) -> Option<Vec<SVector<f64, D>>> {
        let mut sums = vec![SVector::<f64, D>::zeros(); k];
        let mut counts = vec![0_usize; k];
        for (p, &c) in self.points.iter().zip(assignment) {
            sums[c] += p;
            counts[c] += 1;
        }
        if counts.contains(&0) {
            return None;
        }
        #[allow(clippy::cast_precision_loss)]
        let means = sums
            .into_iter()
            .zip(counts)
            .map(|(sum, count)| sum / count as f64)
            .collect();
        Some(means)
    }
}
