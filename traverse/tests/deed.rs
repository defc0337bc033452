use approx::assert_abs_diff_eq;
use deed_traverse::{
    closure_error, parse_all, parse_all_collecting_errors, parse_schedule, resolve, Course,
    ParseCourseError, Point, Quadrant, ScheduleFormat,
};

/// A small lot described by five courses which close up to a few centimeters,
/// as it is usual for the older deeds.
const LOT: &str = "\
# quadrant,deg,min,sec,distance
1, 12, 30, 0, 215.40
2, 78, 15, 30, 180.25
3, 25, 44, 10, 160.00
3, 80, 5, 0, 120.75
4, 40, 0, 0, 75.10
";

#[test]
fn square_parcel_closes() {
    let records = [
        ["1", "0", "0", "0", "100"],
        ["2", "90", "0", "0", "100"],
        ["3", "0", "0", "0", "100"],
        ["4", "90", "0", "0", "100"],
    ];
    let courses = parse_all(&records).unwrap();
    let traverse = resolve(Point::default(), &courses);

    assert_eq!(traverse.len(), records.len() + 1);
    let error = closure_error(&traverse);
    assert_abs_diff_eq!(error.northing, 0.0, epsilon = 1e-6);
    assert_abs_diff_eq!(error.easting, 0.0, epsilon = 1e-6);
}

#[test]
fn schedule_text_to_vertices() {
    let courses = parse_schedule(LOT, &ScheduleFormat::default()).unwrap();
    assert_eq!(courses.len(), 5);

    let origin = Point::new(4_432_100.0, 451_200.0);
    let traverse = resolve(origin, &courses);
    assert_eq!(traverse.origin(), origin);
    assert_eq!(traverse.len(), 6);

    for ((begin, end), course) in traverse.legs().zip(&courses) {
        assert_abs_diff_eq!(begin.distance_to(end), course.distance(), epsilon = 1e-6);
    }

    let total: f64 = courses.iter().map(Course::distance).sum();
    assert_abs_diff_eq!(traverse.perimeter(), total, epsilon = 1e-6);
}

#[test]
fn first_course_by_hand() {
    let courses = parse_schedule("1,12,30,0,215.40", &ScheduleFormat::default()).unwrap();
    let traverse = resolve(Point::default(), &courses);

    let angle = 12.5_f64.to_radians();
    assert_abs_diff_eq!(traverse.end().northing, 215.40 * angle.cos(), epsilon = 1e-9);
    assert_abs_diff_eq!(traverse.end().easting, 215.40 * angle.sin(), epsilon = 1e-9);
}

#[test]
fn lenient_batch_skips_bad_records() {
    let records = vec![
        vec!["1", "10", "0", "0", "50"],
        vec!["5", "10", "0", "0", "50"],
        vec!["1", "10", "0", "0", "-5"],
        vec!["2", "10", "0"],
    ];
    let (courses, errors) = parse_all_collecting_errors(&records);
    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].quadrant(), Quadrant::NE);

    let indices: Vec<_> = errors.iter().map(|(index, _)| *index).collect();
    assert_eq!(indices, [2, 3, 4]);
    assert!(matches!(errors[0].1, ParseCourseError::InvalidQuadrant(_)));
    assert!(matches!(errors[1].1, ParseCourseError::InvalidDistance(_)));
    assert_eq!(errors[2].1, ParseCourseError::MalformedRecord { found: 3 });

    let traverse = resolve(Point::default(), &courses);
    assert_eq!(traverse.len(), 2);
}

#[test]
fn notation_and_records_agree() {
    let from_record = Course::from_record(&["3", "25", "44", "10", "160"]).unwrap();
    let from_notation: Course = "S 25°44′10″ W 160".parse().unwrap();
    assert_eq!(from_record, from_notation);
}
