//! Longitude/latitude positions and the quantized movement model.
//!
//! The drone moves in fixed-length steps along headings that are multiples
//! of ten degrees, so every path the planner considers is a finite sequence
//! of discrete moves.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Western edge of the operating area (exclusive).
pub const MIN_LONGITUDE: f64 = -3.192473;
/// Eastern edge of the operating area (exclusive).
pub const MAX_LONGITUDE: f64 = -3.184319;
/// Southern edge of the operating area (exclusive).
pub const MIN_LATITUDE: f64 = 55.942617;
/// Northern edge of the operating area (exclusive).
pub const MAX_LATITUDE: f64 = 55.946233;

/// Length of one discrete move in coordinate units. Two points closer than
/// this count as the same place.
pub const STEP_DISTANCE: f64 = 0.00015;

/// The hub the drone launches from and must return to.
pub const HOME: Position = Position::new(-3.186874, 55.944494);

/// An immutable point in longitude/latitude coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub longitude: f64,
    pub latitude: f64,
}

/// A movement heading quantized to multiples of ten degrees, or the hover
/// sentinel meaning "no movement". Headings are measured anticlockwise from
/// east, so 0 is east and 90 is north.
///
/// Values are checked at construction, which keeps [`Position::step`] total:
/// there is no angle a `Bearing` can hold that the movement model cannot
/// execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Option<i16>", try_from = "Option<i16>")]
pub struct Bearing(Option<i16>);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BearingError {
    #[error("bearing {0} must be a multiple of 10 between 0 and 350")]
    Invalid(i16),
}

impl Bearing {
    pub const HOVER: Bearing = Bearing(None);

    /// A heading in degrees. Anything that is not a multiple of ten in
    /// [0, 350] is a caller error, never silently corrected.
    pub fn from_degrees(degrees: i16) -> Result<Bearing, BearingError> {
        if degrees % 10 != 0 || !(0..=350).contains(&degrees) {
            return Err(BearingError::Invalid(degrees));
        }
        Ok(Bearing(Some(degrees)))
    }

    pub fn is_hover(&self) -> bool {
        self.0.is_none()
    }

    /// The heading in degrees, or `None` for hover.
    pub fn degrees(&self) -> Option<i16> {
        self.0
    }

    /// Rotate by a whole number of ten-degree increments, wrapping into
    /// [0, 350]. Hover stays hover.
    pub fn rotated(self, increments: i32) -> Bearing {
        match self.0 {
            None => Bearing::HOVER,
            Some(degrees) => {
                let wrapped = (i32::from(degrees) + increments * 10).rem_euclid(360);
                Bearing(Some(wrapped as i16))
            }
        }
    }
}

impl From<Bearing> for Option<i16> {
    fn from(bearing: Bearing) -> Self {
        bearing.0
    }
}

impl TryFrom<Option<i16>> for Bearing {
    type Error = BearingError;

    fn try_from(value: Option<i16>) -> Result<Self, Self::Error> {
        match value {
            None => Ok(Bearing::HOVER),
            Some(degrees) => Bearing::from_degrees(degrees),
        }
    }
}

impl fmt::Display for Bearing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            None => write!(f, "hover"),
            Some(degrees) => write!(f, "{degrees}"),
        }
    }
}

impl Position {
    pub const fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// Whether this point lies strictly inside the operating area. Points
    /// exactly on the boundary are not confined.
    pub fn is_confined(&self) -> bool {
        self.longitude > MIN_LONGITUDE
            && self.longitude < MAX_LONGITUDE
            && self.latitude > MIN_LATITUDE
            && self.latitude < MAX_LATITUDE
    }

    /// Euclidean distance in coordinate units. The operating area is small
    /// enough that no geographic projection correction is applied.
    pub fn distance_to(&self, other: Position) -> f64 {
        (self.longitude - other.longitude).hypot(self.latitude - other.latitude)
    }

    /// Whether `other` is within one step of this point.
    pub fn close_to(&self, other: Position) -> bool {
        self.distance_to(other) < STEP_DISTANCE
    }

    /// The discretized heading from this point toward `other`: arctangent of
    /// the coordinate deltas with the quadrant picked by sign comparison, so
    /// the result always lands in [0, 350] before rounding to the nearest
    /// multiple of ten. Returns hover when `other` is within one step.
    pub fn bearing_to(&self, other: Position) -> Bearing {
        if self.close_to(other) {
            return Bearing::HOVER;
        }

        let delta_longitude = other.longitude - self.longitude;
        let delta_latitude = other.latitude - self.latitude;
        let acute = delta_latitude.abs().atan2(delta_longitude.abs()).to_degrees();

        let degrees = if delta_longitude >= 0.0 && delta_latitude >= 0.0 {
            acute
        } else if delta_longitude < 0.0 && delta_latitude >= 0.0 {
            180.0 - acute
        } else if delta_longitude < 0.0 {
            180.0 + acute
        } else {
            360.0 - acute
        };

        let rounded = ((degrees / 10.0).round() as i32 * 10).rem_euclid(360);
        Bearing(Some(rounded as i16))
    }

    /// The position one step away along `bearing`. Hover leaves the point
    /// unchanged. Cardinal headings move exactly along one axis so repeated
    /// axis-aligned moves accumulate no trigonometric drift.
    pub fn step(&self, bearing: Bearing) -> Position {
        let Some(degrees) = bearing.degrees() else {
            return *self;
        };

        match degrees {
            0 => Position::new(self.longitude + STEP_DISTANCE, self.latitude),
            90 => Position::new(self.longitude, self.latitude + STEP_DISTANCE),
            180 => Position::new(self.longitude - STEP_DISTANCE, self.latitude),
            270 => Position::new(self.longitude, self.latitude - STEP_DISTANCE),
            _ => {
                let radians = f64::from(degrees).to_radians();
                Position::new(
                    self.longitude + radians.cos() * STEP_DISTANCE,
                    self.latitude + radians.sin() * STEP_DISTANCE,
                )
            }
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.longitude, self.latitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_moves_exactly_one_step_for_every_heading() {
        let origin = HOME;
        for degrees in (0..360).step_by(10) {
            let bearing = Bearing::from_degrees(degrees as i16).unwrap();
            let next = origin.step(bearing);
            let moved = origin.distance_to(next);
            assert!(
                (moved - STEP_DISTANCE).abs() < 1e-12,
                "heading {degrees} moved {moved}"
            );
        }
    }

    #[test]
    fn hover_step_is_identity() {
        let origin = Position::new(-3.1880, 55.9440);
        assert_eq!(origin.step(Bearing::HOVER), origin);
    }

    #[test]
    fn cardinal_steps_are_exact_axis_moves() {
        let origin = Position::new(-3.1880, 55.9440);
        let west = origin.step(Bearing::from_degrees(180).unwrap());
        assert_eq!(west.latitude, origin.latitude);
        assert_eq!(west.longitude, origin.longitude - STEP_DISTANCE);

        let south = origin.step(Bearing::from_degrees(270).unwrap());
        assert_eq!(south.longitude, origin.longitude);
        assert_eq!(south.latitude, origin.latitude - STEP_DISTANCE);
    }

    #[test]
    fn invalid_bearings_are_rejected() {
        assert_eq!(Bearing::from_degrees(15), Err(BearingError::Invalid(15)));
        assert_eq!(Bearing::from_degrees(360), Err(BearingError::Invalid(360)));
        assert_eq!(Bearing::from_degrees(-10), Err(BearingError::Invalid(-10)));
        assert!(Bearing::from_degrees(350).is_ok());
    }

    #[test]
    fn bearing_picks_the_right_quadrant() {
        let origin = Position::new(-3.1880, 55.9440);
        let east = Position::new(origin.longitude + 0.001, origin.latitude);
        let north = Position::new(origin.longitude, origin.latitude + 0.001);
        let west = Position::new(origin.longitude - 0.001, origin.latitude);
        let south = Position::new(origin.longitude, origin.latitude - 0.001);

        assert_eq!(origin.bearing_to(east).degrees(), Some(0));
        assert_eq!(origin.bearing_to(north).degrees(), Some(90));
        assert_eq!(origin.bearing_to(west).degrees(), Some(180));
        assert_eq!(origin.bearing_to(south).degrees(), Some(270));

        // tan(30) = 0.577, comfortably away from a rounding tie
        let upper_right = Position::new(origin.longitude + 0.001, origin.latitude + 0.000577);
        assert_eq!(origin.bearing_to(upper_right).degrees(), Some(30));
        let lower_left = Position::new(origin.longitude - 0.001, origin.latitude - 0.000577);
        assert_eq!(origin.bearing_to(lower_left).degrees(), Some(210));
    }

    #[test]
    fn bearing_to_a_close_point_is_hover() {
        let origin = Position::new(-3.1880, 55.9440);
        let nearby = Position::new(origin.longitude + 0.0001, origin.latitude);
        assert!(origin.close_to(nearby));
        assert!(origin.bearing_to(nearby).is_hover());
        assert!(origin.bearing_to(origin).is_hover());
    }

    #[test]
    fn walking_toward_a_target_strictly_approaches_it() {
        let mut current = Position::new(-3.1910, 55.9430);
        let target = Position::new(-3.1850, 55.9460);
        let mut remaining = current.distance_to(target);

        while !current.close_to(target) {
            current = current.step(current.bearing_to(target));
            let next_remaining = current.distance_to(target);
            assert!(next_remaining < remaining, "distance must shrink each step");
            remaining = next_remaining;
        }
    }

    #[test]
    fn boundary_points_are_not_confined() {
        assert!(!Position::new(MAX_LONGITUDE, 55.9445).is_confined());
        assert!(!Position::new(-3.1880, MIN_LATITUDE).is_confined());
        assert!(!Position::new(MIN_LONGITUDE, MAX_LATITUDE).is_confined());
        assert!(Position::new(-3.1880, 55.9445).is_confined());
    }

    #[test]
    fn rotation_wraps_into_range() {
        let north = Bearing::from_degrees(90).unwrap();
        assert_eq!(north.rotated(1).degrees(), Some(100));
        assert_eq!(north.rotated(-10).degrees(), Some(350));
        assert_eq!(north.rotated(36).degrees(), Some(90));
        assert!(Bearing::HOVER.rotated(3).is_hover());
    }
}
