use crate::kmlib::Point;
use std::{
    fs::File,
    io::{self, BufRead},
    path::{Path, PathBuf},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("unable to read {}: {}", .path.display(), .source)]
    SourceUnavailable {
        path: PathBuf,
        source: io::Error,
    },

    #[error("line {line} field {field}: {value:?} is not a number")]
    Format {
        line: usize,
        field: usize,
        value: String,
    },
}

/// Reads a comma delimited text file into points, one row per line. Fields
/// are trimmed of surrounding whitespace before parsing. Rows are not
/// checked for a uniform number of fields.
pub fn read_dataset(path: &Path) -> Result<Vec<Point>, DatasetError> {
    let file = File::open(path).map_err(|source| DatasetError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    let mut dataset = Vec::new();
    for (lineno, line) in io::BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|source| DatasetError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;

        let row = line
            .split(',')
            .enumerate()
            .map(|(fieldno, field)| {
                field.trim().parse::<f32>().map_err(|_| DatasetError::Format {
                    line: lineno + 1,
                    field: fieldno + 1,
                    value: field.to_string(),
                })
            })
            .collect::<Result<Point, DatasetError>>()?;

        dataset.push(row);
    }

    Ok(dataset)
}
