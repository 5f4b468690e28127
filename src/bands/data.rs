//! Adaptive threshold ranges, stratified by (age group, skill level).
//! Range values are domain data carried digit-for-digit from the
//! published tables. Each range expands into five zone rows: the
//! optimal zone, one suboptimal zone per side spanning one range-width,
//! and open-ended critical zones beyond those.

use super::Band;
use crate::types::profile::Profile;

struct AdaptiveRanges {
    metric: &'static str,
    // One (min, max) per profile, age-major, in `Profile::all()` order.
    ranges: [(f64, f64); 15],
}

const ADAPTIVE: &[AdaptiveRanges] = &[
    AdaptiveRanges {
        metric: "Knee Lift Height Adaptive",
        ranges: [
            (45.0, 60.0),
            (50.0, 65.0),
            (55.0, 70.0),
            (50.0, 65.0),
            (60.0, 75.0),
            (70.0, 90.0),
            (55.0, 70.0),
            (65.0, 80.0),
            (75.0, 90.0),
            (50.0, 65.0),
            (60.0, 75.0),
            (65.0, 80.0),
            (45.0, 60.0),
            (50.0, 65.0),
            (55.0, 70.0),
        ],
    },
    AdaptiveRanges {
        metric: "Balance Duration Adaptive",
        ranges: [
            (0.6, 0.8),
            (0.5, 0.7),
            (0.4, 0.6),
            (0.5, 0.7),
            (0.4, 0.6),
            (0.3, 0.5),
            (0.5, 0.7),
            (0.4, 0.6),
            (0.3, 0.5),
            (0.6, 0.8),
            (0.5, 0.7),
            (0.4, 0.6),
            (0.7, 0.9),
            (0.6, 0.8),
            (0.5, 0.7),
        ],
    },
    AdaptiveRanges {
        metric: "Trunk Rotation",
        ranges: [
            (0.0, 5.0),
            (0.0, 10.0),
            (5.0, 15.0),
            (0.0, 10.0),
            (5.0, 15.0),
            (10.0, 20.0),
            (5.0, 15.0),
            (10.0, 20.0),
            (15.0, 25.0),
            (0.0, 10.0),
            (5.0, 15.0),
            (10.0, 20.0),
            (0.0, 5.0),
            (0.0, 10.0),
            (5.0, 15.0),
        ],
    },
    AdaptiveRanges {
        metric: "Weight Distribution Windup",
        ranges: [
            (85.0, 95.0),
            (85.0, 90.0),
            (80.0, 90.0),
            (85.0, 90.0),
            (80.0, 90.0),
            (80.0, 85.0),
            (80.0, 90.0),
            (80.0, 85.0),
            (75.0, 85.0),
            (85.0, 90.0),
            (80.0, 90.0),
            (80.0, 85.0),
            (85.0, 95.0),
            (85.0, 90.0),
            (80.0, 90.0),
        ],
    },
    AdaptiveRanges {
        metric: "Stride Length Adaptive",
        ranges: [
            (60.0, 65.0),
            (65.0, 70.0),
            (68.0, 73.0),
            (65.0, 70.0),
            (70.0, 80.0),
            (78.0, 88.0),
            (70.0, 75.0),
            (75.0, 85.0),
            (80.0, 90.0),
            (65.0, 75.0),
            (70.0, 80.0),
            (75.0, 85.0),
            (60.0, 70.0),
            (65.0, 75.0),
            (70.0, 80.0),
        ],
    },
    AdaptiveRanges {
        metric: "Stride Direction Adaptive",
        ranges: [
            (5.0, 10.0),
            (3.0, 8.0),
            (2.0, 7.0),
            (3.0, 8.0),
            (2.0, 7.0),
            (0.0, 5.0),
            (3.0, 8.0),
            (2.0, 7.0),
            (0.0, 5.0),
            (3.0, 8.0),
            (2.0, 7.0),
            (0.0, 5.0),
            (5.0, 10.0),
            (3.0, 8.0),
            (2.0, 7.0),
        ],
    },
    AdaptiveRanges {
        metric: "Knee Flexion at Peak",
        ranges: [
            (45.0, 55.0),
            (42.0, 52.0),
            (40.0, 50.0),
            (43.0, 53.0),
            (40.0, 50.0),
            (37.0, 47.0),
            (42.0, 52.0),
            (38.0, 48.0),
            (35.0, 45.0),
            (43.0, 53.0),
            (40.0, 50.0),
            (38.0, 48.0),
            (45.0, 55.0),
            (43.0, 53.0),
            (40.0, 50.0),
        ],
    },
    AdaptiveRanges {
        metric: "Hip-Shoulder Separation at Foot Contact",
        ranges: [
            (15.0, 20.0),
            (18.0, 23.0),
            (20.0, 25.0),
            (20.0, 25.0),
            (25.0, 30.0),
            (30.0, 40.0),
            (25.0, 30.0),
            (30.0, 40.0),
            (40.0, 50.0),
            (20.0, 25.0),
            (25.0, 35.0),
            (30.0, 40.0),
            (15.0, 20.0),
            (20.0, 30.0),
            (25.0, 35.0),
        ],
    },
    AdaptiveRanges {
        metric: "Shoulder External Rotation Adaptive",
        ranges: [
            (145.0, 155.0),
            (150.0, 160.0),
            (155.0, 165.0),
            (150.0, 160.0),
            (160.0, 170.0),
            (165.0, 180.0),
            (155.0, 165.0),
            (165.0, 175.0),
            (170.0, 185.0),
            (150.0, 160.0),
            (160.0, 170.0),
            (165.0, 175.0),
            (145.0, 155.0),
            (150.0, 160.0),
            (155.0, 165.0),
        ],
    },
    AdaptiveRanges {
        metric: "Ball Velocity",
        ranges: [
            (35.0, 45.0),
            (45.0, 55.0),
            (55.0, 65.0),
            (50.0, 65.0),
            (65.0, 80.0),
            (80.0, 95.0),
            (60.0, 75.0),
            (75.0, 90.0),
            (90.0, 100.0),
            (55.0, 70.0),
            (70.0, 85.0),
            (85.0, 95.0),
            (50.0, 60.0),
            (60.0, 75.0),
            (75.0, 85.0),
        ],
    },
    AdaptiveRanges {
        metric: "Spin Rate Adaptive",
        ranges: [
            (1000.0, 1400.0),
            (1200.0, 1600.0),
            (1400.0, 1800.0),
            (1300.0, 1700.0),
            (1600.0, 2000.0),
            (1900.0, 2400.0),
            (1500.0, 1900.0),
            (1800.0, 2200.0),
            (2100.0, 2500.0),
            (1400.0, 1800.0),
            (1700.0, 2100.0),
            (2000.0, 2400.0),
            (1300.0, 1700.0),
            (1600.0, 2000.0),
            (1800.0, 2200.0),
        ],
    },
];

pub(super) fn standard_bands() -> Vec<Band> {
    let mut bands = Vec::with_capacity(ADAPTIVE.len() * 15 * 5);
    for table in ADAPTIVE {
        let profiles: Vec<Profile> = Profile::all().collect();
        for (profile, &(min, max)) in profiles.into_iter().zip(table.ranges.iter()) {
            let width = max - min;
            let profile = Some(profile);
            bands.push(Band::range(table.metric, "Optimal", min, max, profile));
            bands.push(Band::range(
                table.metric,
                "Suboptimal Low",
                min - width,
                min,
                profile,
            ));
            bands.push(Band::range(
                table.metric,
                "Suboptimal High",
                max,
                max + width,
                profile,
            ));
            bands.push(Band::at_most(
                table.metric,
                "Critical Low",
                min - width,
                profile,
            ));
            bands.push(Band::at_least(
                table.metric,
                "Critical High",
                max + width,
                profile,
            ));
        }
    }
    bands
}
