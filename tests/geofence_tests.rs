use geoclock::core::calculator::geofence::{
    EARTH_RADIUS_METERS, GeofenceConfig, distance_meters, evaluate,
};
use geoclock::models::coordinate::Coordinate;
use geoclock::models::gps_status::GpsStatus;

fn office() -> Coordinate {
    Coordinate::new(40.7128, -74.0060)
}

fn fence(radius: f64) -> GeofenceConfig {
    GeofenceConfig::new(office(), radius)
}

/// Point `meters` north of the office.
fn north_of_office(meters: f64) -> Coordinate {
    let deg = meters / (EARTH_RADIUS_METERS * std::f64::consts::PI / 180.0);
    Coordinate::new(office().latitude + deg, office().longitude)
}

#[test]
fn test_distance_to_self_is_zero() {
    assert_eq!(distance_meters(office(), office()), 0.0);
}

#[test]
fn test_one_degree_of_latitude() {
    let d = distance_meters(Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 0.0));
    assert!((d - 111_194.93).abs() < 1.0, "got {d}");
}

#[test]
fn test_distance_is_symmetric() {
    let a = office();
    let b = Coordinate::new(51.5074, -0.1278);
    assert!((distance_meters(a, b) - distance_meters(b, a)).abs() < 1e-6);
}

#[test]
fn test_antipodal_distance_is_finite() {
    let d = distance_meters(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 180.0));
    assert!(d.is_finite());
    assert!((d - EARTH_RADIUS_METERS * std::f64::consts::PI).abs() < 1.0);
}

#[test]
fn test_no_position_is_searching() {
    assert_eq!(evaluate(None, &fence(100.0)), GpsStatus::Searching);
}

#[test]
fn test_inside_radius_is_ok() {
    assert_eq!(
        evaluate(Some(north_of_office(50.0)), &fence(100.0)),
        GpsStatus::Ok
    );
    assert_eq!(evaluate(Some(office()), &fence(100.0)), GpsStatus::Ok);
}

#[test]
fn test_outside_radius_is_out_of_range() {
    assert_eq!(
        evaluate(Some(north_of_office(150.0)), &fence(100.0)),
        GpsStatus::OutOfRange
    );
}

#[test]
fn test_classification_flips_at_radius() {
    let p = north_of_office(100.0);
    let exact = distance_meters(p, office());

    // inclusive boundary
    assert_eq!(evaluate(Some(p), &fence(exact)), GpsStatus::Ok);
    assert_eq!(evaluate(Some(p), &fence(exact + 1e-6)), GpsStatus::Ok);
    assert_eq!(evaluate(Some(p), &fence(exact - 1e-6)), GpsStatus::OutOfRange);

    // same flip when the point moves across a fixed radius
    assert_eq!(
        evaluate(Some(north_of_office(99.99)), &fence(100.0)),
        GpsStatus::Ok
    );
    assert_eq!(
        evaluate(Some(north_of_office(100.01)), &fence(100.0)),
        GpsStatus::OutOfRange
    );
}

#[test]
fn test_zero_radius_only_accepts_the_office() {
    assert_eq!(evaluate(Some(office()), &fence(0.0)), GpsStatus::Ok);
    assert_eq!(
        evaluate(Some(north_of_office(1.0)), &fence(0.0)),
        GpsStatus::OutOfRange
    );
}

#[test]
fn test_malformed_position_is_out_of_range() {
    let f = fence(100.0);
    for p in [
        Coordinate::new(f64::NAN, -74.0060),
        Coordinate::new(40.7128, f64::INFINITY),
        Coordinate::new(91.0, -74.0060),
        Coordinate::new(40.7128, -180.5),
    ] {
        assert_eq!(evaluate(Some(p), &f), GpsStatus::OutOfRange, "{p:?}");
    }
}

#[test]
fn test_from_parts_requires_both_values() {
    assert_eq!(Coordinate::from_parts(None, None).ok(), Some(None));
    assert!(Coordinate::from_parts(Some(1.0), None).is_err());
    assert!(Coordinate::from_parts(None, Some(1.0)).is_err());
    assert_eq!(
        Coordinate::from_parts(Some(1.0), Some(2.0)).ok(),
        Some(Some(Coordinate::new(1.0, 2.0)))
    );
}
