#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    PanUp,
    PanDown,
    PanLeft,
    PanRight,
    OrbitLeft,
    OrbitUp,
    HeroLeft,
    HeroRight,
}

impl GameAction {
    pub fn all() -> &'static [GameAction] {
        &[
            GameAction::PanUp,
            GameAction::PanDown,
            GameAction::PanLeft,
            GameAction::PanRight,
            GameAction::OrbitLeft,
            GameAction::OrbitUp,
            GameAction::HeroLeft,
            GameAction::HeroRight,
        ]
    }
}
