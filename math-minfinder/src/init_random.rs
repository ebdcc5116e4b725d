use ndarray::Array1;
use rand::Rng;

/// Draws a point whose coordinates are independent and uniform in `[lower, upper)`.
pub fn sample_point<R: Rng + ?Sized>(dimension: usize, bounds: (f64, f64), rng: &mut R) -> Array1<f64> {
    let (lower, upper) = bounds;
    Array1::from_shape_fn(dimension, |_| {
        let u: f64 = rng.random::<f64>();
        lower + u * (upper - lower)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_points_within_bounds() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..500 {
            let p = sample_point(3, (-5.0, 5.0), &mut rng);
            assert_eq!(p.len(), 3);
            assert!(p.iter().all(|&x| (-5.0..5.0).contains(&x)));
        }
    }

    #[test]
    fn test_same_seed_same_points() {
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        for _ in 0..10 {
            assert_eq!(
                sample_point(2, (-1.0, 1.0), &mut a),
                sample_point(2, (-1.0, 1.0), &mut b)
            );
        }
    }

    #[test]
    fn test_coordinates_cover_interval() {
        let mut rng = StdRng::seed_from_u64(17);
        let samples: Vec<f64> = (0..2000)
            .map(|_| sample_point(1, (0.0, 10.0), &mut rng)[0])
            .collect();
        let below = samples.iter().filter(|&&x| x < 5.0).count();
        assert!(below > 800 && below < 1200, "below = {}", below);
    }
}
