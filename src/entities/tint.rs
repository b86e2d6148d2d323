/// Stable colours for everything the game asks the front-end to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tint {
    Player,
    Enemy,
    Bullet,
    Text,
    Alert,
}

impl Tint {
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            Tint::Player => (0, 255, 0),
            Tint::Enemy => (255, 0, 0),
            Tint::Bullet => (255, 255, 0),
            Tint::Text => (255, 255, 255),
            Tint::Alert => (255, 0, 0),
        }
    }
}
