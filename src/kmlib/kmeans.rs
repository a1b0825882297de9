use crate::kmlib::metrics::euclidean;
use crate::kmlib::KMParams;
use ordered_float::OrderedFloat;
use rand::Rng;
use thiserror::Error;

pub type Point = Vec<f32>;
pub type Centroid = Point;

#[derive(Error, Debug)]
pub enum KMeansError {
    #[error("cannot cluster an empty dataset")]
    EmptyDataset,

    #[error("k must be at least 1")]
    ZeroClusters,

    #[error("cannot draw {k} distinct centroids from {n} points")]
    NotEnoughPoints { k: usize, n: usize },

    #[error("row {row} has {found} fields, expected {expected}")]
    DimensionMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("centroids still moving after {iterations} iterations")]
    DidNotConverge { iterations: usize },
}

/// What to do with a cluster that finishes an iteration with no members.
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OnEmptyCluster {
    /// Forget the cluster; later iterations run with one fewer centroid
    Drop,
    /// Replace the centroid with a random point from the dataset
    Reinitialize,
    /// Carry the previous centroid forward unchanged
    KeepPrevious,
}

#[derive(Debug)]
pub struct Cluster {
    pub centroid: Centroid,
    pub points: Vec<Point>,
    pub points_idx: Vec<usize>,
}

impl Cluster {
    fn new(centroid: Centroid) -> Self {
        Self {
            centroid,
            points: Vec::new(),
            points_idx: Vec::new(),
        }
    }
}

/// A finished run: the stable centroids, the final assignment built from
/// them, and how many assign/update iterations it took to get there.
#[derive(Debug)]
pub struct KMeansFit {
    pub centroids: Vec<Centroid>,
    pub clusters: Vec<Cluster>,
    pub iterations: usize,
}

/// Draws k distinct indices uniformly at random and returns the points at
/// those indices, in draw order, as the starting centroids. Points that are
/// equal by value but sit at distinct indices may both be selected.
pub fn initialize<R: Rng>(
    k: usize,
    data: &[Point],
    rng: &mut R,
) -> Result<Vec<Centroid>, KMeansError> {
    if k > data.len() {
        return Err(KMeansError::NotEnoughPoints { k, n: data.len() });
    }

    let mut drawn = Vec::with_capacity(k);
    let mut centroids = Vec::with_capacity(k);
    while drawn.len() < k {
        let idx = rng.gen_range(0..data.len());
        if !drawn.contains(&idx) {
            drawn.push(idx);
            centroids.push(data[idx].clone());
        }
    }

    Ok(centroids)
}

/// Buckets every point into the cluster of its nearest centroid, one bucket
/// per centroid in centroid order. A point equidistant to several centroids
/// goes to the lowest centroid index.
pub fn assign(centroids: &[Centroid], data: &[Point]) -> Vec<Cluster> {
    let mut clusters: Vec<Cluster> = centroids
        .iter()
        .map(|centroid| Cluster::new(centroid.clone()))
        .collect();

    for (idx, point) in data.iter().enumerate() {
        let nearest = centroids
            .iter()
            .enumerate()
            .min_by_key(|(_, centroid)| OrderedFloat(euclidean(point, centroid)))
            .map(|(i, _)| i)
            .unwrap();

        clusters[nearest].points.push(point.clone());
        clusters[nearest].points_idx.push(idx);
    }

    clusters
}

/// Computes the next centroid set: each non-empty cluster yields the
/// coordinate-wise mean of its members. Empty clusters follow `policy`.
pub fn update<R: Rng>(
    clusters: &[Cluster],
    data: &[Point],
    policy: OnEmptyCluster,
    rng: &mut R,
) -> Vec<Centroid> {
    let mut centroids = Vec::with_capacity(clusters.len());

    for cluster in clusters {
        if cluster.points.is_empty() {
            match policy {
                OnEmptyCluster::Drop => {}
                OnEmptyCluster::Reinitialize => {
                    centroids.push(data[rng.gen_range(0..data.len())].clone())
                }
                OnEmptyCluster::KeepPrevious => centroids.push(cluster.centroid.clone()),
            }
            continue;
        }

        let dim = cluster.points[0].len();
        let mut centroid = vec![0.0; dim];

        for point in &cluster.points {
            for (coord, &value) in centroid.iter_mut().zip(point) {
                *coord += value;
            }
        }

        for coord in &mut centroid {
            *coord /= cluster.points.len() as f32;
        }

        centroids.push(centroid);
    }

    centroids
}

/// True when every coordinate of every centroid moved by at most `epsilon`.
/// With the default epsilon of 0 the comparison is exact. Centroid sets of
/// different lengths never compare as converged.
pub fn converged(previous: &[Centroid], current: &[Centroid], epsilon: f32) -> bool {
    if previous.len() != current.len() {
        return false;
    }

    previous
        .iter()
        .zip(current)
        .all(|(p, c)| p.iter().zip(c).all(|(a, b)| (a - b).abs() <= epsilon))
}

/// Runs the assign/update cycle from random starting centroids until the
/// centroids stop moving, then performs one final assignment pass with the
/// stable centroids to produce the reported clusters.
pub fn kmeans<R: Rng>(
    data: &[Point],
    params: &KMParams,
    rng: &mut R,
) -> Result<KMeansFit, KMeansError> {
    if data.is_empty() {
        return Err(KMeansError::EmptyDataset);
    }
    if params.k == 0 {
        return Err(KMeansError::ZeroClusters);
    }

    let dim = data[0].len();
    if let Some(row) = data.iter().position(|point| point.len() != dim) {
        return Err(KMeansError::DimensionMismatch {
            row: row + 1,
            expected: dim,
            found: data[row].len(),
        });
    }

    let mut centroids = initialize(params.k, data, rng)?;
    let mut iterations = 0;

    loop {
        let clusters = assign(&centroids, data);
        let next = update(&clusters, data, params.on_empty, rng);
        iterations += 1;

        if next.len() < centroids.len() {
            warn!(
                "{} cluster(s) went empty on iteration {}",
                centroids.len() - next.len(),
                iterations
            );
        }
        trace!("iteration {} centroids {:?}", iterations, next);

        if converged(&centroids, &next, params.epsilon) {
            centroids = next;
            break;
        }
        centroids = next;

        if params.max_iterations != 0 && iterations >= params.max_iterations {
            return Err(KMeansError::DidNotConverge { iterations });
        }
    }

    let clusters = assign(&centroids, data);
    Ok(KMeansFit {
        centroids,
        clusters,
        iterations,
    })
}
