/// Render layer: controls draw order and depth testing.
///
/// Layers are drawn in order: `Background` (skybox, depth writes off),
/// `Objects` (depth tested), then `Overlay` (depth test off, drawn on top
/// of everything, used for the clock hands and hour markers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum RenderLayer {
    Background = 0,
    #[default]
    Objects = 1,
    Overlay = 2,
}

impl RenderLayer {
    pub const COUNT: usize = 3;

    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Background),
            1 => Some(Self::Objects),
            2 => Some(Self::Overlay),
            _ => None,
        }
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Only `Objects` is depth tested.
    pub fn depth_test(self) -> bool {
        self == Self::Objects
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_objects() {
        assert_eq!(RenderLayer::default(), RenderLayer::Objects);
    }

    #[test]
    fn overlay_draws_last_without_depth() {
        assert!(RenderLayer::Background < RenderLayer::Objects);
        assert!(RenderLayer::Objects < RenderLayer::Overlay);
        assert!(!RenderLayer::Overlay.depth_test());
        assert!(!RenderLayer::Background.depth_test());
        assert!(RenderLayer::Objects.depth_test());
    }

    #[test]
    fn u8_conversion() {
        for val in 0..RenderLayer::COUNT as u8 {
            assert_eq!(RenderLayer::from_u8(val).map(RenderLayer::as_u8), Some(val));
        }
        assert!(RenderLayer::from_u8(3).is_none());
    }
}
