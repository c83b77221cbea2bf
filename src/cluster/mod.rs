mod kmeans;

pub use kmeans::{squared_euclidean, Cluster, DistanceFn, KMeans};
