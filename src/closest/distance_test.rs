#[cfg(test)]
mod tests {
    use crate::closest::Point;
    use crate::closest::distance::euclidean;

    #[test]
    fn test_euclidean() {
        let p1 = Point([0.0, 0.0]);
        let p2 = Point([3.0, 4.0]);
        assert_eq!(euclidean(&p1, &p2), 5.0);
        assert_eq!(euclidean(&p2, &p1), 5.0);
        assert_eq!(euclidean(&p1, &p1), 0.0);
        assert_eq!(euclidean(&p2, &p2), 0.0);
    }

    #[test]
    fn test_euclidean_negative_coordinates() {
        let p1 = Point([-1.0, -1.0]);
        let p2 = Point([2.0, 3.0]);
        assert_eq!(euclidean(&p1, &p2), 5.0);
        assert!((euclidean(&Point([0.0, 0.0]), &Point([1.0, 1.0])) - 2.0_f64.sqrt()).abs() < 1e-15);
    }

    #[test]
    fn test_point_dist_matches_euclidean() {
        let p1 = Point([10.0, 10.0]);
        let p2 = Point([10.5, 10.5]);
        assert_eq!(p1.dist(&p2), euclidean(&p1, &p2));
        assert!((p1.dist(&p2) - 0.5_f64.sqrt()).abs() < 1e-12);
    }
}
