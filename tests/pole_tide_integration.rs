//! End-to-end: finals2000A text -> table -> pole resolution -> correction.

use pole_tide::{
    eop::parse::parse_finals, get_pole_coordinates, polar_motion_correction,
    polar_motion_correction_scalar, EarthOrientationTable, EopConfig, EopRecord, EopSnapshots,
    Finality, GravityResult, Samples, StationLocation, TableProvider,
};

fn finals_line(mjd: &str, flag: u8, xp: &str, yp: &str) -> String {
    let mut line = vec![b' '; 188];
    line[7..7 + mjd.len()].copy_from_slice(mjd.as_bytes());
    line[16] = flag;
    line[18..18 + xp.len()].copy_from_slice(xp.as_bytes());
    line[37..37 + yp.len()].copy_from_slice(yp.as_bytes());
    String::from_utf8(line).unwrap()
}

fn sample_feed() -> String {
    [
        finals_line("60000.00", b'I', "  0.05000", "  0.35000"),
        finals_line("60001.00", b'I', "  0.05200", "  0.34800"),
        finals_line("60002.00", b'I', "  0.05400", "  0.34600"),
        finals_line("60003.00", b'P', "  0.05600", "  0.34400"),
        finals_line("60004.00", b'P', "  0.05800", "  0.34200"),
    ]
    .join("\n")
}

#[test]
fn parse_resolve_correct_pipeline() {
    let records = parse_finals(&sample_feed()).unwrap();
    assert_eq!(records.len(), 5);

    let table = EarthOrientationTable::new(records);
    let station = StationLocation::from_degrees(55.0, 37.6).unwrap();

    // Observation epochs straddle the final/predicted transition.
    let epochs = Samples::from(vec![60000.5, 60002.0, 60003.5]);
    let resolution = get_pole_coordinates(&table, &epochs).unwrap();

    let advisory = resolution.advisory.expect("predicted points present");
    assert_eq!(advisory.total, 3);
    assert_eq!(advisory.non_final, 1);

    let g = polar_motion_correction(
        &resolution.x_p,
        &resolution.y_p,
        &Samples::from(station.latitude),
        &Samples::from(station.longitude),
    )
    .unwrap();

    assert_eq!(g.len(), 3);
    for value in g.iter() {
        // Pole tide corrections are at the tens-of-nanogal level.
        assert!(value.is_finite());
        assert!(value.abs() < 1e-6);
        assert!(value.abs() > 1e-12);
    }
}

#[test]
fn interpolated_values_match_hand_computation() {
    let records = parse_finals(&sample_feed()).unwrap();
    let table = EarthOrientationTable::new(records);

    let resolution = get_pole_coordinates(&table, &Samples::from(60000.5)).unwrap();
    let x_p = resolution.x_p.as_scalar().unwrap();
    let y_p = resolution.y_p.as_scalar().unwrap();

    assert!((x_p - 0.051).abs() < 1e-12);
    assert!((y_p - 0.349).abs() < 1e-12);

    let g = polar_motion_correction_scalar(x_p, y_p, 45.0, 0.0).unwrap();
    let expected = -1.164 * 7.292115e-5_f64.powi(2) * 6378136.0 * (x_p / 3600.0).to_radians();
    assert!((g - expected).abs() < 1e-18);
}

#[test]
fn refresh_by_replacement_is_visible_to_new_readers_only() {
    struct FeedProvider {
        body: String,
    }

    impl TableProvider for FeedProvider {
        fn fetch_table(&self) -> GravityResult<Vec<EopRecord>> {
            parse_finals(&self.body)
        }
    }

    let snapshots = EopSnapshots::new(EopConfig::default().with_max_staleness(10.0));

    let initial = FeedProvider {
        body: sample_feed(),
    };
    snapshots.refresh_from(&initial, 60004.0).unwrap();
    assert!(!snapshots.is_stale(60010.0));
    assert!(snapshots.is_stale(60020.0));

    let old_table = snapshots.table().unwrap();
    let old_pole = old_table.lookup(60003.0).unwrap();
    assert_eq!(old_pole.finality, Finality::Predicted);

    // The provider now reports the same epoch as finalized with revised values.
    let revised = FeedProvider {
        body: [
            finals_line("60003.00", b'I', "  0.05650", "  0.34380"),
            finals_line("60004.00", b'I', "  0.05820", "  0.34190"),
        ]
        .join("\n"),
    };
    snapshots.refresh_from(&revised, 60020.0).unwrap();

    // Prior snapshot is untouched; new snapshot carries the revision.
    assert_eq!(old_table.lookup(60003.0).unwrap(), old_pole);
    let new_pole = snapshots.table().unwrap().lookup(60003.0).unwrap();
    assert_eq!(new_pole.finality, Finality::Final);
    assert!((new_pole.x_p - 0.0565).abs() < 1e-12);
}

#[test]
fn extrapolated_epoch_still_produces_a_correction() {
    let records = parse_finals(&sample_feed()).unwrap();
    let table = EarthOrientationTable::new(records);

    // Well past the table's end: boundary values, non-final, no error.
    let resolution = get_pole_coordinates(&table, &Samples::from(60100.0)).unwrap();
    assert!(resolution.advisory.is_some());

    let g = polar_motion_correction(
        &resolution.x_p,
        &resolution.y_p,
        &Samples::from(-20.0),
        &Samples::from(150.0),
    )
    .unwrap();
    assert!(g.as_scalar().unwrap().is_finite());
}
