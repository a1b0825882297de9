/// Computes the Euclidean distance between two rows of coordinates.
/// Both rows are assumed to have the same length.
///
/// # Parameters
/// - `a`: A slice of floating-point numbers representing the first row.
/// - `b`: A slice of floating-point numbers representing the second row.
///
/// # Returns
/// The square root of the sum of squared per-coordinate differences.
pub fn euclidean(a: &[f32], b: &[f32]) -> f32 {
    a.iter()
        .zip(b)
        .map(|(&x, &y)| (x - y).powi(2))
        .sum::<f32>()
        .sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_to_self_is_zero() {
        let a = vec![1.5, -2.0, 3.25];
        assert_eq!(euclidean(&a, &a), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = vec![0.0, 1.0, 2.0];
        let b = vec![4.0, -1.0, 0.5];
        assert_eq!(euclidean(&a, &b), euclidean(&b, &a));
    }

    #[test]
    fn distance_is_non_negative() {
        let a = vec![-3.0, -4.0];
        let b = vec![3.0, 4.0];
        assert!(euclidean(&a, &b) >= 0.0);
    }

    #[test]
    fn known_hypotenuse() {
        let a = vec![0.0, 0.0];
        let b = vec![3.0, 4.0];
        assert_eq!(euclidean(&a, &b), 5.0);
    }
}
