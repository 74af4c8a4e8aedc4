use glam::Vec3;
use log::{debug, info, warn};

use crate::error::ConfigError;

use super::alignment::{is_aligned, occluder_position};
use super::body::{advance_orbits, OrbitingBody};
use super::config::{OrbitConfig, OrbitParams};
use super::eclipse::{EclipseKind, EclipseSearch, EclipseState};

/// Upper bound on sub-steps per frame.
const MAX_SUBSTEPS: u32 = 4096;

/// Positions and flags for one frame, read by the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitSnapshot {
    pub sun: Vec3,
    pub earth: Vec3,
    /// Displayed Moon position (the eclipse override while one is active).
    pub moon: Vec3,
    pub mars: Vec3,
    pub time_speed: f32,
    pub eclipse: EclipseState,
    pub search: EclipseSearch,
}

/// Sun at the origin, Earth and Mars around it, Moon around the Earth.
#[derive(Debug, Clone)]
pub struct OrbitalSystem {
    pub earth: OrbitingBody,
    pub moon: OrbitingBody,
    pub mars: OrbitingBody,
    config: OrbitConfig,
    time_speed: f32,
    eclipse: EclipseState,
    search: EclipseSearch,
    moon_override: Option<Vec3>,
}

/// The built-in orrery described by [`OrbitConfig::default`].
impl Default for OrbitalSystem {
    fn default() -> Self {
        let config = OrbitConfig::default();
        let body = |p: &OrbitParams| {
            OrbitingBody::from_trusted(p.semi_major, p.semi_minor, p.angular_speed, p.initial_angle)
        };
        Self {
            earth: body(&config.earth),
            moon: body(&config.moon),
            mars: body(&config.mars),
            time_speed: config.normal_speed,
            config,
            eclipse: EclipseState::default(),
            search: EclipseSearch::None,
            moon_override: None,
        }
    }
}

impl OrbitalSystem {
    pub const SUN: Vec3 = Vec3::ZERO;

    pub fn new(config: OrbitConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            earth: config.earth.build()?,
            moon: config.moon.build()?,
            mars: config.mars.build()?,
            time_speed: config.normal_speed,
            config,
            eclipse: EclipseState::default(),
            search: EclipseSearch::None,
            moon_override: None,
        })
    }

    pub fn config(&self) -> &OrbitConfig {
        &self.config
    }

    pub fn time_speed(&self) -> f32 {
        self.time_speed
    }

    pub fn eclipse(&self) -> EclipseState {
        self.eclipse
    }

    pub fn search(&self) -> EclipseSearch {
        self.search
    }

    /// Advance one frame. Returns the eclipse kind if one was detected.
    ///
    /// Does nothing while an eclipse is active. The capped step is split
    /// so no body turns more than `max_substep_angle` between alignment
    /// tests, which keeps fast searches from stepping over a syzygy.
    pub fn advance(&mut self, dt: f32) -> Option<EclipseKind> {
        if self.eclipse.active || !dt.is_finite() || dt <= 0.0 {
            return None;
        }
        let dt = dt.min(self.config.dt_cap);
        let steps = self.substeps(dt);
        let sub_dt = dt / steps as f32;
        let target = self.search.kind();

        for _ in 0..steps {
            advance_orbits(
                [&mut self.earth, &mut self.moon, &mut self.mars],
                sub_dt,
                self.time_speed,
                self.config.dt_cap,
            );
            if let Some(kind) = target {
                if is_aligned(Self::SUN, self.earth_position(), self.moon_orbit_position(), kind) {
                    self.enter_eclipse(kind);
                    return Some(kind);
                }
            }
        }
        None
    }

    /// Start a search for `kind`, or cancel it if it is already running.
    ///
    /// Ignored while an eclipse is showing or a search for the other kind
    /// is running. Returns whether anything changed.
    pub fn toggle_search(&mut self, kind: EclipseKind) -> bool {
        if kind == EclipseKind::None {
            return false;
        }
        if self.eclipse.active {
            warn!("{} search ignored: eclipse active, resume first", kind.name());
            return false;
        }
        let requested = EclipseSearch::for_kind(kind);
        match self.search {
            EclipseSearch::None => {
                self.search = requested;
                self.time_speed = self.config.search_speed;
                info!("searching for {} eclipse", kind.name());
                true
            }
            current if current == requested => {
                self.search = EclipseSearch::None;
                self.time_speed = self.config.normal_speed;
                info!("{} eclipse search cancelled", kind.name());
                true
            }
            _ => {
                warn!("{} search ignored: another search is running", kind.name());
                false
            }
        }
    }

    /// Leave an eclipse (or a search) and return to normal speed.
    pub fn resume(&mut self) {
        self.eclipse = EclipseState::default();
        self.search = EclipseSearch::None;
        self.time_speed = self.config.normal_speed;
        self.moon_override = None;
    }

    /// Put every body back at its initial angle and resume.
    pub fn reset(&mut self) {
        for body in [&mut self.earth, &mut self.moon, &mut self.mars] {
            body.reset();
        }
        self.resume();
        info!("orbits reset");
    }

    pub fn earth_position(&self) -> Vec3 {
        self.earth.position_around(Self::SUN)
    }

    pub fn mars_position(&self) -> Vec3 {
        self.mars.position_around(Self::SUN)
    }

    /// Moon position from its orbit, ignoring any eclipse override.
    pub fn moon_orbit_position(&self) -> Vec3 {
        self.moon.position_around(self.earth_position())
    }

    /// Where the Moon is drawn.
    pub fn moon_display_position(&self) -> Vec3 {
        self.moon_override.unwrap_or_else(|| self.moon_orbit_position())
    }

    pub fn snapshot(&self) -> OrbitSnapshot {
        OrbitSnapshot {
            sun: Self::SUN,
            earth: self.earth_position(),
            moon: self.moon_display_position(),
            mars: self.mars_position(),
            time_speed: self.time_speed,
            eclipse: self.eclipse,
            search: self.search,
        }
    }

    fn substeps(&self, dt: f32) -> u32 {
        let fastest = [&self.earth, &self.moon, &self.mars]
            .iter()
            .map(|b| b.angular_speed().abs())
            .fold(0.0_f32, f32::max);
        let sweep = fastest * self.time_speed.abs() * dt;
        let steps = (sweep / self.config.max_substep_angle).ceil();
        if steps.is_finite() {
            (steps as u32).clamp(1, MAX_SUBSTEPS)
        } else {
            1
        }
    }

    /// Freeze and snap the Moon onto the Sun-Earth line at its orbit radius.
    fn enter_eclipse(&mut self, kind: EclipseKind) {
        let earth = self.earth_position();
        self.moon_override = occluder_position(Self::SUN, earth, self.moon.semi_major(), kind);
        self.eclipse = EclipseState {
            active: true,
            kind,
            frozen_time_speed: self.time_speed,
        };
        self.time_speed = 0.0;
        self.search = EclipseSearch::None;
        debug!(
            "{} eclipse at earth angle {:.3}, moon angle {:.3}",
            kind.name(),
            self.earth.angle,
            self.moon.angle
        );
    }
}
