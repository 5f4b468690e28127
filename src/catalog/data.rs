//! Built-in metric table. Threshold values are domain data taken from
//! the published biomechanics tables; they are carried digit-for-digit
//! and never adjusted here, including rows whose stored thresholds fail
//! the ordering checks (those reject at scoring time).

use super::{MetricDefinition, ParameterSource, Phase, ScoringKind, Thresholds};

const fn optimal(
    name: &'static str,
    unit: &'static str,
    phase: Phase,
    min: f64,
    max: f64,
    bad_low: Option<f64>,
    bad_high: Option<f64>,
    description: &'static str,
) -> MetricDefinition {
    MetricDefinition {
        name,
        unit,
        description,
        phase,
        kind: ScoringKind::OptimalRange,
        source: ParameterSource::Fixed(Thresholds {
            optimal_min: Some(min),
            optimal_max: Some(max),
            bad_low_threshold: bad_low,
            bad_high_threshold: bad_high,
            ..Thresholds::EMPTY
        }),
    }
}

const fn lower(
    name: &'static str,
    unit: &'static str,
    phase: Phase,
    upper: f64,
    poor: f64,
    description: &'static str,
) -> MetricDefinition {
    MetricDefinition {
        name,
        unit,
        description,
        phase,
        kind: ScoringKind::LowerIsBetter,
        source: ParameterSource::Fixed(Thresholds {
            optimal_upper_bound: Some(upper),
            poor_threshold: Some(poor),
            ..Thresholds::EMPTY
        }),
    }
}

const fn higher(
    name: &'static str,
    unit: &'static str,
    phase: Phase,
    bound: f64,
    description: &'static str,
) -> MetricDefinition {
    MetricDefinition {
        name,
        unit,
        description,
        phase,
        kind: ScoringKind::HigherIsBetter,
        source: ParameterSource::Fixed(Thresholds {
            optimal_lower_bound: Some(bound),
            ..Thresholds::EMPTY
        }),
    }
}

const fn risk(
    name: &'static str,
    unit: &'static str,
    warning: f64,
    critical: f64,
    description: &'static str,
) -> MetricDefinition {
    MetricDefinition {
        name,
        unit,
        description,
        phase: Phase::InjuryRisk,
        kind: ScoringKind::InjuryRisk,
        source: ParameterSource::Fixed(Thresholds {
            warning_threshold: Some(warning),
            critical_threshold: Some(critical),
            ..Thresholds::EMPTY
        }),
    }
}

const fn banded(
    name: &'static str,
    unit: &'static str,
    phase: Phase,
    description: &'static str,
) -> MetricDefinition {
    MetricDefinition {
        name,
        unit,
        description,
        phase,
        kind: ScoringKind::OptimalRange,
        source: ParameterSource::Banded,
    }
}

pub(super) const STANDARD: &[MetricDefinition] = &[
    // Windup
    optimal(
        "Knee Lift Height",
        "°",
        Phase::Windup,
        45.0,
        90.0,
        None,
        None,
        "Hip flexion angle of lead knee at peak lift. Higher is generally better for load.",
    ),
    optimal(
        "Balance Duration",
        "s",
        Phase::Windup,
        0.3,
        0.9,
        None,
        Some(0.8),
        "Time spent at peak knee lift. Optimal is generally shorter for elite, suggesting quick rhythm.",
    ),
    optimal(
        "Trunk Rotation (Windup)",
        "°",
        Phase::Windup,
        15.0,
        25.0,
        None,
        Some(30.0),
        "Initial rotation away from home plate during windup. Allows for counter-rotation.",
    ),
    optimal(
        "Weight Distribution (Windup)",
        "% Back",
        Phase::Windup,
        75.0,
        85.0,
        Some(80.0),
        Some(100.0),
        "Percentage of weight on back leg at maximum knee lift. Critical for momentum generation.",
    ),
    optimal(
        "Weight Distribution",
        "% Back",
        Phase::Windup,
        85.0,
        95.0,
        Some(80.0),
        Some(100.0),
        "Percentage of weight on back leg at maximum knee lift. Critical for momentum generation.",
    ),
    lower(
        "Balance Stability Index",
        "cm deviation",
        Phase::Windup,
        2.0,
        5.0,
        "Quantifies COM maintenance during leg lift (lower deviation is better). Optimal <2cm, poor >5cm.",
    ),
    lower(
        "Posture Alignment (Windup)",
        "° variation",
        Phase::Windup,
        3.0,
        8.0,
        "Spine angle consistency during windup (lower variation is better). Optimal <3°, poor >8°.",
    ),
    lower(
        "Tempo Consistency (Windup)",
        "s",
        Phase::Windup,
        0.05,
        0.2,
        "Variation in timing between pitches during windup. Indicates rhythm consistency. Optimal <0.05s, poor >0.2s.",
    ),
    lower(
        "Head Stability (Windup)",
        "cm displacement",
        Phase::Windup,
        2.0,
        4.0,
        "Movement of head during leg lift (lower displacement is better). Optimal <2cm, poor >4cm.",
    ),
    lower(
        "Lead Leg Path Efficiency",
        "cm lateral deviation",
        Phase::Windup,
        5.0,
        10.0,
        "Directness of knee lift trajectory (lower deviation is better). Optimal <5cm, poor >10cm.",
    ),
    optimal(
        "Lead Knee Elevation",
        "degrees",
        Phase::Windup,
        60.0,
        90.0,
        Some(50.0),
        None,
        "Maximum height of lead knee relative to hip",
    ),
    banded(
        "Knee Lift Height Adaptive",
        "degrees",
        Phase::Windup,
        "Hip flexion angle during leg lift",
    ),
    banded(
        "Balance Duration Adaptive",
        "seconds",
        Phase::Windup,
        "Time spent at peak knee lift",
    ),
    banded(
        "Trunk Rotation",
        "degrees",
        Phase::Windup,
        "Initial rotation away from home plate",
    ),
    banded(
        "Weight Distribution Windup",
        "percentage",
        Phase::Windup,
        "Percentage on back leg during windup",
    ),
    // Stride
    optimal(
        "Stride Length",
        "% Height",
        Phase::Stride,
        80.0,
        90.0,
        Some(70.0),
        Some(95.0),
        "Distance as percentage of pitcher's height. Affects effective velocity and force.",
    ),
    optimal(
        "Stride Direction",
        "° Closed",
        Phase::Stride,
        0.0,
        5.0,
        Some(-10.0),
        Some(10.0),
        "Angle of stride foot relative to center line (0-5° closed is optimal). Aids hip-shoulder separation.",
    ),
    optimal(
        "Knee Flexion at Peak (Stride)",
        "°",
        Phase::Stride,
        35.0,
        45.0,
        Some(25.0),
        Some(60.0),
        "Flexion angle of lead knee during stride. Affects absorption and bracing.",
    ),
    optimal(
        "Hip-Shoulder Separation (Stride FC)",
        "°",
        Phase::Stride,
        40.0,
        50.0,
        Some(30.0),
        Some(60.0),
        "Rotational difference between hips and shoulders at foot contact. Key for elastic energy.",
    ),
    optimal(
        "Pelvic Tilt",
        "° anterior tilt",
        Phase::Stride,
        5.0,
        15.0,
        Some(0.0),
        Some(20.0),
        "Anterior/posterior pelvic positioning (Elite optimal).",
    ),
    lower(
        "Center of Mass Trajectory",
        "cm vertical displacement",
        Phase::Stride,
        3.0,
        6.0,
        "Path of COM during stride (lower displacement is better). Optimal <3cm, poor >6cm.",
    ),
    optimal(
        "Front Foot Landing Pattern",
        "° Closed",
        Phase::Stride,
        10.0,
        20.0,
        Some(0.0),
        Some(30.0),
        "Foot position and angle at contact (10-20° closed is optimal).",
    ),
    optimal(
        "Timing Efficiency (Stride)",
        "s",
        Phase::Stride,
        0.5,
        0.7,
        None,
        Some(0.9),
        "Duration from leg lift to foot contact (Adult Elite optimal).",
    ),
    banded(
        "Stride Length Adaptive",
        "percentage of height",
        Phase::Stride,
        "Distance as percentage of pitcher's height",
    ),
    banded(
        "Stride Direction Adaptive",
        "degrees closed",
        Phase::Stride,
        "Angle toward or away from centerline",
    ),
    banded(
        "Knee Flexion at Peak",
        "degrees",
        Phase::Stride,
        "Degree of lead knee bend during stride",
    ),
    banded(
        "Hip-Shoulder Separation at Foot Contact",
        "degrees",
        Phase::Stride,
        "Rotational difference at foot contact",
    ),
    // Arm cocking
    optimal(
        "Shoulder External Rotation",
        "°",
        Phase::ArmCocking,
        165.0,
        185.0,
        Some(150.0),
        Some(195.0),
        "Shoulder rotation at maximum external rotation (MER).",
    ),
    optimal(
        "Shoulder Abduction (FC)",
        "°",
        Phase::ArmCocking,
        85.0,
        100.0,
        Some(75.0),
        Some(110.0),
        "Shoulder abduction angle at foot contact.",
    ),
    optimal(
        "Elbow Flexion (FC)",
        "°",
        Phase::ArmCocking,
        65.0,
        95.0,
        Some(50.0),
        Some(100.0),
        "Elbow flexion angle at foot contact.",
    ),
    optimal(
        "Hip-Shoulder Separation (Cock)",
        "°",
        Phase::ArmCocking,
        45.0,
        65.0,
        Some(30.0),
        Some(75.0),
        "Peak rotational difference between hips and shoulders.",
    ),
    optimal(
        "Pelvis Rotation Velocity",
        "°/s",
        Phase::ArmCocking,
        700.0,
        850.0,
        Some(500.0),
        Some(1000.0),
        "Angular speed of pelvis rotation.",
    ),
    optimal(
        "Trunk Rotation Velocity",
        "°/s",
        Phase::ArmCocking,
        1100.0,
        1300.0,
        Some(850.0),
        Some(1500.0),
        "Angular speed of trunk rotation.",
    ),
    lower(
        "Arm Slot Consistency (Cock)",
        "°",
        Phase::ArmCocking,
        3.0,
        8.0,
        "Variation in arm position at MER between pitches (lower is better). Optimal <3°, poor >8°.",
    ),
    optimal(
        "Elbow Height (MER)",
        "cm relative to shoulder",
        Phase::ArmCocking,
        -5.0,
        5.0,
        Some(-10.0),
        Some(10.0),
        "Position of elbow relative to shoulder at MER (-5cm to +5cm is optimal).",
    ),
    optimal(
        "Trunk Forward Tilt (MER)",
        "°",
        Phase::ArmCocking,
        20.0,
        30.0,
        Some(15.0),
        Some(40.0),
        "Forward lean from vertical at MER.",
    ),
    optimal(
        "Trunk Lateral Tilt (MER)",
        "°",
        Phase::ArmCocking,
        15.0,
        25.0,
        Some(10.0),
        Some(35.0),
        "Side bend toward non-throwing side at MER.",
    ),
    optimal(
        "Kinetic Chain Sequencing (Timing)",
        "s",
        Phase::ArmCocking,
        0.015,
        0.025,
        Some(0.01),
        Some(0.035),
        "Timing delay between peak segment velocities (e.g., pelvis-trunk, trunk-arm).",
    ),
    lower(
        "Lead Leg Bracing",
        "° knee extension variation",
        Phase::ArmCocking,
        3.0,
        8.0,
        "Stability of lead leg during cocking (lower variation is better). Optimal <3°, poor >8°.",
    ),
    lower(
        "Glove Arm Action",
        "degrees from optimal position",
        Phase::ArmCocking,
        5.0,
        15.0,
        "Position and movement of non-dominant arm",
    ),
    banded(
        "Shoulder External Rotation Adaptive",
        "degrees",
        Phase::ArmCocking,
        "Maximum angle of shoulder external rotation",
    ),
    // Acceleration & release
    optimal(
        "Shoulder Internal Rotation Velocity",
        "°/s",
        Phase::AccelerationRelease,
        7000.0,
        8500.0,
        Some(6000.0),
        Some(9500.0),
        "Angular speed of shoulder internal rotation during acceleration. Optimal 7000-8500°/s.",
    ),
    optimal(
        "Elbow Extension Velocity",
        "°/s",
        Phase::AccelerationRelease,
        2200.0,
        2700.0,
        Some(1800.0),
        Some(3000.0),
        "Speed of elbow straightening during acceleration. Optimal 2200-2700°/s.",
    ),
    optimal(
        "Trunk Forward Tilt (Release)",
        "°",
        Phase::AccelerationRelease,
        38.0,
        48.0,
        Some(30.0),
        Some(55.0),
        "Forward lean from vertical at ball release.",
    ),
    optimal(
        "Trunk Lateral Tilt (Release)",
        "°",
        Phase::AccelerationRelease,
        15.0,
        25.0,
        Some(10.0),
        Some(30.0),
        "Side bend angle toward non-throwing side at ball release.",
    ),
    higher(
        "Pitch Velocity",
        "mph",
        Phase::AccelerationRelease,
        90.0,
        "Speed of the ball at release.",
    ),
    higher(
        "Spin Rate",
        "rpm",
        Phase::AccelerationRelease,
        2100.0,
        "Ball rotation at release (generally higher is better for fastballs).",
    ),
    higher(
        "Extension",
        "ft",
        Phase::AccelerationRelease,
        6.3,
        "Distance from rubber at release.",
    ),
    optimal(
        "Release Height",
        "% of Height",
        Phase::AccelerationRelease,
        81.0,
        86.0,
        Some(75.0),
        Some(88.0),
        "Height of release point as percentage of pitcher's height.",
    ),
    lower(
        "Release Point Consistency",
        "cm",
        Phase::AccelerationRelease,
        2.0,
        5.0,
        "Variation in release position between pitches (lower is better). Optimal <2cm, poor >5cm.",
    ),
    optimal(
        "Arm Slot at Release",
        "° SD",
        Phase::AccelerationRelease,
        1.0,
        2.0,
        Some(0.0),
        Some(4.0),
        "Standard deviation of arm slot at release between pitches. Optimal 1-2° SD, poor >4°.",
    ),
    optimal(
        "Stride Length to Release Distance",
        "% of height",
        Phase::AccelerationRelease,
        85.0,
        95.0,
        Some(80.0),
        Some(100.0),
        "Distance from stride foot to release point as % of pitcher's height.",
    ),
    lower(
        "Trunk Stabilization",
        "° change post-FCP",
        Phase::AccelerationRelease,
        5.0,
        10.0,
        "Trunk acceleration deceleration post-Foot Contact (lower change is better). Optimal <5°, poor >10°.",
    ),
    optimal(
        "Hand Position at Release",
        "° variation",
        Phase::AccelerationRelease,
        1.0,
        2.0,
        Some(0.0),
        Some(5.0),
        "Orientation of hand and fingers at release (lower variation is better). Optimal 1-2° variation, poor >5°.",
    ),
    // Follow-through
    optimal(
        "Balance Recovery Time",
        "s",
        Phase::FollowThrough,
        0.3,
        0.5,
        None,
        Some(0.8),
        "Time to stable fielding-ready position after release.",
    ),
    optimal(
        "Deceleration Path Efficiency",
        "° arc",
        Phase::FollowThrough,
        60.0,
        80.0,
        Some(45.0),
        Some(90.0),
        "Path of arm during deceleration (gradual 60-80° arc is optimal).",
    ),
    optimal(
        "Controlled Eccentricity",
        "% slowdown",
        Phase::FollowThrough,
        25.0,
        35.0,
        Some(15.0),
        Some(50.0),
        "Rate of arm deceleration (25-35% gradual slowdown is optimal).",
    ),
    lower(
        "Balance Retention (Follow-Through)",
        "cm lateral displacement",
        Phase::FollowThrough,
        5.0,
        10.0,
        "COM control during follow-through (lower displacement is better). Optimal <5cm, poor >10cm.",
    ),
    optimal(
        "Front Knee Control",
        "° controlled flexion",
        Phase::FollowThrough,
        10.0,
        20.0,
        Some(0.0),
        Some(30.0),
        "Stability of front leg during follow-through (10-20° controlled flexion is optimal).",
    ),
    optimal(
        "Rotational Completion",
        "° toward target",
        Phase::FollowThrough,
        80.0,
        100.0,
        Some(70.0),
        Some(110.0),
        "Degree of body rotation completion toward target.",
    ),
    lower(
        "Head Position Tracking (Follow-Through)",
        "cm vertical drop",
        Phase::FollowThrough,
        4.0,
        8.0,
        "Head movement during follow-through (lower vertical drop is better). Optimal <4cm, poor >8cm.",
    ),
    optimal(
        "Energy Dissipation Rate",
        "% per 0.1s",
        Phase::FollowThrough,
        30.0,
        40.0,
        Some(10.0),
        Some(60.0),
        "Gradual reduction in system energy (30-40% per 0.1s is optimal).",
    ),
    // Kinetic chain
    optimal(
        "Ground Force Utilization",
        "x Body Weight",
        Phase::KineticChain,
        1.2,
        1.5,
        Some(1.0),
        Some(2.0),
        "Transfer of ground reaction force (1.2-1.5x body weight is optimal).",
    ),
    optimal(
        "Energy Transfer Efficiency",
        "%",
        Phase::KineticChain,
        80.0,
        90.0,
        Some(70.0),
        Some(100.0),
        "Percentage of energy transferred up kinetic chain.",
    ),
    lower(
        "Joint Torque Distribution",
        "% variation",
        Phase::KineticChain,
        25.0,
        40.0,
        "Balanced loading across joints (lower variation is better). Optimal <25%, poor >40%.",
    ),
    lower(
        "Movement Plane Consistency",
        "° deviation",
        Phase::KineticChain,
        5.0,
        10.0,
        "Minimization of out-of-plane motion (lower deviation is better). Optimal <5°, poor >10°.",
    ),
    // Injury risk
    risk(
        "Shoulder Maximum External Rotation (Risk)",
        "°",
        185.0,
        195.0,
        "Excessive shoulder external rotation increases labral tear risk.",
    ),
    risk(
        "Elbow Valgus Torque",
        "Nm",
        40.0,
        55.0,
        "High medial elbow stress increases UCL injury risk.",
    ),
    risk(
        "Lead Knee Extension Rate",
        "°/s",
        250.0,
        350.0,
        "Rapid knee extension creates landing stress (higher is riskier).",
    ),
    risk(
        "Shoulder Horizontal Abduction",
        "° at FC",
        15.0,
        25.0,
        "Extreme layback position stresses posterior capsule (higher is riskier).",
    ),
    risk(
        "Trunk Lateral Tilt Timing (Risk)",
        "° before FC",
        15.0,
        25.0,
        "Early side-bending increases spine stress (higher is riskier).",
    ),
    risk(
        "Deceleration Control (Risk)",
        "% per 0.1s",
        60.0,
        80.0,
        "Abrupt arm deceleration stresses posterior shoulder (higher is riskier).",
    ),
    risk(
        "Premature Trunk Rotation",
        "% before FC",
        30.0,
        50.0,
        "Early trunk rotation reduces kinetic chain efficiency and can increase risk (higher is riskier).",
    ),
    risk(
        "Inverted W Position",
        "severity score (0-10)",
        5.0,
        8.0,
        "Elbow above shoulder with scapular loading",
    ),
    // Pitch specific
    optimal(
        "Four-Seam Fastball Spin Efficiency",
        "percentage",
        Phase::PitchSpecific,
        90.0,
        100.0,
        Some(80.0),
        None,
        "Spin efficiency for four-seam fastball",
    ),
    lower(
        "Four-Seam Fastball Ball Axis",
        "clock position deviation from 12:00-1:00",
        Phase::PitchSpecific,
        1.0,
        2.0,
        "Ball axis orientation",
    ),
    optimal(
        "Two-Seam Fastball Horizontal Movement",
        "inches",
        Phase::PitchSpecific,
        6.0,
        14.0,
        Some(4.0),
        None,
        "Horizontal movement for two-seam fastball",
    ),
    optimal(
        "Changeup Velocity Differential",
        "mph slower than FB",
        Phase::PitchSpecific,
        8.0,
        12.0,
        Some(6.0),
        None,
        "Speed difference from fastball",
    ),
    optimal(
        "Curveball Spin Rate",
        "rpm",
        Phase::PitchSpecific,
        2600.0,
        3000.0,
        Some(2300.0),
        None,
        "Spin rate for curveball",
    ),
    optimal(
        "Slider Gyroscopic Component",
        "percentage",
        Phase::PitchSpecific,
        10.0,
        30.0,
        Some(5.0),
        None,
        "Gyroscopic spin component for slider",
    ),
    // Performance
    banded(
        "Ball Velocity",
        "mph",
        Phase::Performance,
        "Speed at release",
    ),
    banded(
        "Spin Rate Adaptive",
        "rpm",
        Phase::Performance,
        "Ball rotation",
    ),
];
