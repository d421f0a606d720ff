#[cfg(test)]
mod tests {
    use crate::closest::Point;
    use crate::input::{InputError, PointFormat, random_points, read_points};
    use std::fs;
    use std::path::PathBuf;

    /// Writes `contents` to a scratch file, reads it back and removes the file
    fn read_str(name: &str, contents: &str, format: PointFormat) -> Result<Vec<Point>, InputError> {
        let path = PathBuf::from(name);
        fs::write(&path, contents).expect("Failed to create test file");
        let result = read_points(&path, format);
        fs::remove_file(&path).ok();
        result
    }

    #[test]
    fn test_read_columns() {
        let points = read_str(
            "test_input_columns.txt",
            "0,3,1,6\n0,4,1,6\n",
            PointFormat::Columns,
        )
        .expect("Failed to read points");

        assert_eq!(
            points,
            vec![
                Point::new(0.0, 0.0),
                Point::new(3.0, 4.0),
                Point::new(1.0, 1.0),
                Point::new(6.0, 6.0),
            ]
        );
    }

    #[test]
    fn test_read_columns_with_spaces_and_reals() {
        let points = read_str(
            "test_input_columns_spaces.txt",
            "0, 10, 10.5\n0, 10, 10.5",
            PointFormat::Columns,
        )
        .expect("Failed to read points");

        assert_eq!(points.len(), 3);
        assert_eq!(points[2], Point::new(10.5, 10.5));
    }

    #[test]
    fn test_read_columns_mismatched() {
        let err = read_str(
            "test_input_columns_mismatched.txt",
            "1,2,3\n4,5\n",
            PointFormat::Columns,
        )
        .unwrap_err();

        assert!(matches!(err, InputError::MismatchedColumns { xs: 3, ys: 2 }));
        assert_eq!(err.to_string(), "Got 3 x coordinates but 2 y coordinates");
    }

    #[test]
    fn test_read_columns_missing_row() {
        let err = read_str("test_input_columns_missing.txt", "1,2,3\n", PointFormat::Columns)
            .unwrap_err();
        assert!(matches!(err, InputError::MissingRow));
    }

    #[test]
    fn test_read_columns_invalid_number() {
        let err = read_str(
            "test_input_columns_invalid.txt",
            "1,2,3\n4,five,6\n",
            PointFormat::Columns,
        )
        .unwrap_err();

        match err {
            InputError::InvalidNumber {
                line,
                column,
                value,
            } => {
                assert_eq!(line, 2);
                assert_eq!(column, 2);
                assert_eq!(value, "five");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_read_rows_with_header() {
        let points = read_str(
            "test_input_rows_header.csv",
            "x,y,label\n0,0,a\n3,4,b\n1.5,-2,c\n",
            PointFormat::Rows,
        )
        .expect("Failed to read points");

        assert_eq!(
            points,
            vec![
                Point::new(0.0, 0.0),
                Point::new(3.0, 4.0),
                Point::new(1.5, -2.0),
            ]
        );
    }

    #[test]
    fn test_read_rows_without_header() {
        let points = read_str("test_input_rows.csv", "5,5\n5,5\n", PointFormat::Rows)
            .expect("Failed to read points");
        assert_eq!(points, vec![Point::new(5.0, 5.0), Point::new(5.0, 5.0)]);
    }

    #[test]
    fn test_read_rows_short_and_non_finite() {
        let err = read_str("test_input_rows_short.csv", "1,2\n3\n", PointFormat::Rows).unwrap_err();
        assert!(matches!(err, InputError::ShortRow { line: 2 }));

        let err =
            read_str("test_input_rows_nan.csv", "1,2\nNaN,4\n", PointFormat::Rows).unwrap_err();
        assert!(matches!(err, InputError::NonFinite { line: 2 }));
    }

    #[test]
    fn test_read_empty_file() {
        let points = read_str("test_input_empty.txt", "", PointFormat::Columns)
            .expect("Failed to read points");
        assert!(points.is_empty());
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_points(&PathBuf::from("no_such_points_file.txt"), PointFormat::Rows)
            .unwrap_err();
        assert!(matches!(err, InputError::Io(_)));
    }

    #[test]
    fn test_random_points() {
        let a = random_points(500, 10000.0, 1);
        let b = random_points(500, 10000.0, 1);
        let c = random_points(500, 10000.0, 2);

        assert_eq!(a.len(), 500);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(
            a.iter()
                .all(|p| (0.0..=10000.0).contains(&p.x()) && (0.0..=10000.0).contains(&p.y()))
        );
    }
}
