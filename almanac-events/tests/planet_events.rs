mod common;

use almanac_core::AstroError;
use almanac_events::{
    angle_from_sun, next_planet_apsis, search_max_elongation, search_peak_magnitude,
    search_planet_apsis, search_relative_longitude, ApsisKind, Body, IlluminationSource,
    Visibility,
};
use almanac_time::AstroTime;
use common::{relative_longitude, ToySky, MARS_ECC};

#[test]
fn mars_opposition_by_relative_longitude() {
    let start = AstroTime::from_ut(50.0);
    let t = search_relative_longitude(&ToySky, Body::Mars, 180.0, start).unwrap();
    assert!(t.ut > start.ut);
    // At opposition the Earth leads Mars by exactly 180 degrees of
    // heliocentric longitude.
    let rlon = relative_longitude(&ToySky, Body::Mars, t).unwrap();
    assert!((rlon.abs() - 180.0).abs() < 1e-3, "rlon = {}", rlon);
    // Mars then stands opposite the Sun in the sky.
    let sep = angle_from_sun(&ToySky, Body::Mars, t).unwrap();
    assert!(sep > 179.0, "sep = {}", sep);
}

#[test]
fn venus_inferior_conjunction_by_relative_longitude() {
    let start = AstroTime::from_ut(50.0);
    let t = search_relative_longitude(&ToySky, Body::Venus, 0.0, start).unwrap();
    let rlon = relative_longitude(&ToySky, Body::Venus, t).unwrap();
    assert!(rlon.abs() < 1e-3, "rlon = {}", rlon);
    // Venus sits between the Earth and the Sun.
    let sep = angle_from_sun(&ToySky, Body::Venus, t).unwrap();
    assert!(sep < 1.0, "sep = {}", sep);
}

#[test]
fn relative_longitude_guards() {
    let t = AstroTime::from_ut(0.0);
    assert!(matches!(
        search_relative_longitude(&ToySky, Body::Earth, 0.0, t),
        Err(AstroError::EarthNotAllowed)
    ));
    assert!(matches!(
        search_relative_longitude(&ToySky, Body::Moon, 0.0, t),
        Err(AstroError::InvalidBody { .. })
    ));
    assert!(matches!(
        search_relative_longitude(&ToySky, Body::Sun, 0.0, t),
        Err(AstroError::InvalidBody { .. })
    ));
}

#[test]
fn venus_max_elongation_matches_circular_geometry() {
    // For circular coplanar orbits the greatest elongation of an inner
    // planet is asin of the radius ratio: asin(0.723) = 46.3 degrees.
    let evt = search_max_elongation(&ToySky, Body::Venus, AstroTime::from_ut(100.0)).unwrap();
    assert!(
        (evt.elongation - 46.3).abs() < 0.5,
        "elongation = {}",
        evt.elongation
    );
    assert!(evt.time.ut >= 100.0);
    // Visibility matches the side of the Sun.
    let rlon = relative_longitude(&ToySky, Body::Venus, evt.time).unwrap();
    let expected = if rlon > 0.0 {
        Visibility::Morning
    } else {
        Visibility::Evening
    };
    assert_eq!(evt.visibility, expected);
    assert!(evt.ecliptic_separation > 0.0 && evt.ecliptic_separation <= 180.0);
}

#[test]
fn mercury_max_elongation_matches_circular_geometry() {
    let evt = search_max_elongation(&ToySky, Body::Mercury, AstroTime::from_ut(10.0)).unwrap();
    // asin(0.387) = 22.8 degrees.
    assert!(
        (evt.elongation - 22.8).abs() < 0.5,
        "elongation = {}",
        evt.elongation
    );
}

#[test]
fn max_elongation_rejects_outer_planets() {
    assert!(matches!(
        search_max_elongation(&ToySky, Body::Mars, AstroTime::from_ut(0.0)),
        Err(AstroError::InvalidBody { .. })
    ));
}

#[test]
fn successive_max_elongations_alternate_sides() {
    let first = search_max_elongation(&ToySky, Body::Venus, AstroTime::from_ut(0.0)).unwrap();
    let second =
        search_max_elongation(&ToySky, Body::Venus, first.time.add_days(1.0)).unwrap();
    assert_ne!(first.visibility, second.visibility);
    assert!(second.time.ut > first.time.ut);
}

#[test]
fn mars_apsides_alternate_with_modulated_distances() {
    let a = 1.524;
    let mut apsis = search_planet_apsis(&ToySky, Body::Mars, AstroTime::from_ut(5.0)).unwrap();
    for _ in 0..4 {
        match apsis.kind {
            ApsisKind::Pericenter => assert!(
                (apsis.dist_au - a * (1.0 - MARS_ECC)).abs() < 1e-4,
                "perihelion at {}",
                apsis.dist_au
            ),
            ApsisKind::Apocenter => assert!(
                (apsis.dist_au - a * (1.0 + MARS_ECC)).abs() < 1e-4,
                "aphelion at {}",
                apsis.dist_au
            ),
        }
        let next = next_planet_apsis(&ToySky, Body::Mars, &apsis).unwrap();
        assert_ne!(next.kind, apsis.kind);
        let gap = next.time.ut - apsis.time.ut;
        assert!((gap - 686.980 / 2.0).abs() < 2.0, "gap = {} days", gap);
        apsis = next;
    }
}

#[test]
fn planet_apsis_rejects_sun_and_moon() {
    assert!(matches!(
        search_planet_apsis(&ToySky, Body::Moon, AstroTime::from_ut(0.0)),
        Err(AstroError::InvalidBody { .. })
    ));
    assert!(matches!(
        search_planet_apsis(&ToySky, Body::Sun, AstroTime::from_ut(0.0)),
        Err(AstroError::InvalidBody { .. })
    ));
}

#[test]
fn venus_peak_magnitude_lands_at_the_model_minimum() {
    let start = AstroTime::from_ut(200.0);
    let t = search_peak_magnitude(&ToySky, &ToySky, start).unwrap();
    assert!(t.ut >= start.ut);
    let rlon = relative_longitude(&ToySky, Body::Venus, t).unwrap();
    // The toy magnitude model is brightest 20 degrees from conjunction.
    assert!((rlon.abs() - 20.0).abs() < 0.1, "rlon = {}", rlon);
    let info = ToySky.illumination(Body::Venus, t).unwrap();
    assert!((info.mag + 4.0).abs() < 1e-4, "mag = {}", info.mag);
}
