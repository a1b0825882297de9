mod cli;
pub use crate::kmlib::cli::{ArgParser, IOParams, KMParams};

mod kmeans;
pub use crate::kmlib::kmeans::{
    assign, converged, initialize, kmeans, update, Centroid, Cluster, KMeansError, KMeansFit,
    OnEmptyCluster, Point,
};

mod metrics;
pub use crate::kmlib::metrics::euclidean;

mod reader;
pub use crate::kmlib::reader::{read_dataset, DatasetError};

mod writer;
pub use crate::kmlib::writer::{write_clusters, OutputError};
