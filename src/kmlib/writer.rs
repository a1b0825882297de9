use crate::kmlib::Cluster;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("unable to write {}: {}", .path.display(), .source)]
    DestinationUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Writes each cluster's members to `cluster_<n>.txt` (1-based n) under
/// `out_dir`, creating or overwriting the files. Every coordinate of a row
/// except the last is written followed by ", ", then a newline; the final
/// coordinate of a row is never written.
pub fn write_clusters(clusters: &[Cluster], out_dir: &Path) -> Result<(), OutputError> {
    for (number, cluster) in clusters.iter().enumerate() {
        let path = out_dir.join(format!("cluster_{}.txt", number + 1));
        let unavailable = |source| OutputError::DestinationUnavailable {
            path: path.clone(),
            source,
        };

        let mut out = BufWriter::new(File::create(&path).map_err(unavailable)?);
        for row in &cluster.points {
            for coord in &row[..row.len().saturating_sub(1)] {
                write!(out, "{}, ", coord).map_err(unavailable)?;
            }
            writeln!(out).map_err(unavailable)?;
        }
        out.flush().map_err(unavailable)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kmlib::{assign, Point};
    use std::fs;

    fn clusters_of(points: Vec<Point>) -> Vec<Cluster> {
        // One centroid per point keeps each row in its own bucket
        assign(&points, &points)
    }

    #[test]
    fn rows_lose_their_final_coordinate() {
        let dir = tempfile::tempdir().unwrap();
        let clusters = assign(
            &[vec![0.0, 0.0, 0.0]],
            &[vec![1.5, 2.5, 3.5], vec![4.0, 5.0, 6.0]],
        );
        write_clusters(&clusters, dir.path()).unwrap();

        let body = fs::read_to_string(dir.path().join("cluster_1.txt")).unwrap();
        assert_eq!(body, "1.5, 2.5, \n4, 5, \n");
    }

    #[test]
    fn single_coordinate_rows_write_only_a_newline() {
        let dir = tempfile::tempdir().unwrap();
        let clusters = assign(&[vec![0.0]], &[vec![7.0]]);
        write_clusters(&clusters, dir.path()).unwrap();

        let body = fs::read_to_string(dir.path().join("cluster_1.txt")).unwrap();
        assert_eq!(body, "\n");
    }

    #[test]
    fn files_are_numbered_from_one_in_cluster_order() {
        let dir = tempfile::tempdir().unwrap();
        let clusters = clusters_of(vec![vec![0.0, 0.0], vec![10.0, 10.0]]);
        write_clusters(&clusters, dir.path()).unwrap();

        assert!(dir.path().join("cluster_1.txt").exists());
        assert!(dir.path().join("cluster_2.txt").exists());
        assert!(!dir.path().join("cluster_3.txt").exists());
    }

    #[test]
    fn written_rows_round_trip_all_but_the_last_coordinate() {
        let dir = tempfile::tempdir().unwrap();
        let rows = vec![vec![1.0, 2.0, 3.0], vec![4.5, 5.5, 6.5]];
        let clusters = assign(&[vec![0.0, 0.0, 0.0]], &rows);
        write_clusters(&clusters, dir.path()).unwrap();

        let body = fs::read_to_string(dir.path().join("cluster_1.txt")).unwrap();
        for (line, row) in body.lines().zip(&rows) {
            let fields: Vec<f32> = line
                .split(", ")
                .filter(|f| !f.is_empty())
                .map(|f| f.parse().unwrap())
                .collect();
            assert_eq!(fields, row[..row.len() - 1]);
        }
    }

    #[test]
    fn unwritable_destination_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let clusters = clusters_of(vec![vec![0.0, 0.0]]);
        let missing = dir.path().join("no_such_subdir");
        let err = write_clusters(&clusters, &missing).unwrap_err();
        assert!(matches!(err, OutputError::DestinationUnavailable { .. }));
    }
}
