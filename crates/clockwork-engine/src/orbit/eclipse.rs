use serde::{Deserialize, Serialize};

/// Which body is in the middle of the syzygy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EclipseKind {
    #[default]
    None,
    /// Moon between Sun and Earth.
    Solar,
    /// Earth between Sun and Moon.
    Lunar,
}

impl EclipseKind {
    pub fn name(self) -> &'static str {
        match self {
            EclipseKind::None => "none",
            EclipseKind::Solar => "solar",
            EclipseKind::Lunar => "lunar",
        }
    }

    /// Wire code for host events.
    pub fn code(self) -> f32 {
        match self {
            EclipseKind::None => 0.0,
            EclipseKind::Solar => 1.0,
            EclipseKind::Lunar => 2.0,
        }
    }
}

/// A detected eclipse and the speed that was in effect when time froze.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EclipseState {
    pub active: bool,
    pub kind: EclipseKind,
    pub frozen_time_speed: f32,
}

/// Fast-forward search currently running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EclipseSearch {
    #[default]
    None,
    Solar,
    Lunar,
}

impl EclipseSearch {
    pub fn for_kind(kind: EclipseKind) -> Self {
        match kind {
            EclipseKind::None => EclipseSearch::None,
            EclipseKind::Solar => EclipseSearch::Solar,
            EclipseKind::Lunar => EclipseSearch::Lunar,
        }
    }

    /// The eclipse kind being searched for, if any.
    pub fn kind(self) -> Option<EclipseKind> {
        match self {
            EclipseSearch::None => None,
            EclipseSearch::Solar => Some(EclipseKind::Solar),
            EclipseSearch::Lunar => Some(EclipseKind::Lunar),
        }
    }

    pub fn is_running(self) -> bool {
        self != EclipseSearch::None
    }
}
