use glam::Vec3;

use super::eclipse::EclipseKind;

/// Cosine of the largest angle between the two sight lines (about 1.8°).
pub const DIRECTION_DOT_MIN: f32 = 0.9995;
/// Allowed excess of the two-leg path over the direct distance, relative.
pub const COLLINEAR_TOLERANCE: f32 = 0.01;
/// Largest y spread of the three bodies.
pub const PLANE_TOLERANCE: f32 = 0.1;
/// Segments shorter than this cannot give a direction.
pub const MIN_SEGMENT: f32 = 1e-6;

/// Dot product of the two unit sight lines for `kind`, or `None` when
/// either line is too short to have a direction.
///
/// * Solar: Sun→Earth against Sun→Moon.
/// * Lunar: Sun→Earth against Earth→Moon.
pub fn alignment(sun: Vec3, earth: Vec3, moon: Vec3, kind: EclipseKind) -> Option<f32> {
    let (first, second) = match kind {
        EclipseKind::None => return None,
        EclipseKind::Solar => (earth - sun, moon - sun),
        EclipseKind::Lunar => (earth - sun, moon - earth),
    };
    Some(direction(first)?.dot(direction(second)?))
}

fn direction(segment: Vec3) -> Option<Vec3> {
    if segment.length() < MIN_SEGMENT {
        return None;
    }
    segment.try_normalize()
}

/// Whether the three bodies form the syzygy of `kind`.
///
/// Needs matching sight lines, the middle body on the segment between the
/// outer two (within [`COLLINEAR_TOLERANCE`]), and all three in one
/// horizontal plane. Degenerate geometry is never aligned.
pub fn is_aligned(sun: Vec3, earth: Vec3, moon: Vec3, kind: EclipseKind) -> bool {
    let Some(dot) = alignment(sun, earth, moon, kind) else {
        return false;
    };
    if dot <= DIRECTION_DOT_MIN {
        return false;
    }

    let (outer_a, middle, outer_b) = match kind {
        EclipseKind::Solar => (sun, moon, earth),
        EclipseKind::Lunar => (sun, earth, moon),
        EclipseKind::None => return false,
    };
    let direct = outer_a.distance(outer_b);
    let via_middle = outer_a.distance(middle) + middle.distance(outer_b);
    if (via_middle - direct).abs() > direct * COLLINEAR_TOLERANCE {
        return false;
    }

    let min_y = sun.y.min(earth.y).min(moon.y);
    let max_y = sun.y.max(earth.y).max(moon.y);
    max_y - min_y <= PLANE_TOLERANCE
}

/// Where the Moon is drawn during an eclipse of `kind`: on the Sun–Earth
/// line at `moon_radius` from the Earth, sunward for a solar eclipse and
/// in the Earth's shadow for a lunar one. `None` if the Sun and Earth
/// coincide or `kind` is `None`.
pub fn occluder_position(sun: Vec3, earth: Vec3, moon_radius: f32, kind: EclipseKind) -> Option<Vec3> {
    let to_sun = (sun - earth).try_normalize()?;
    match kind {
        EclipseKind::Solar => Some(earth + to_sun * moon_radius),
        EclipseKind::Lunar => Some(earth - to_sun * moon_radius),
        EclipseKind::None => None,
    }
}
