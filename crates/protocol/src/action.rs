//! Turret actions and their byte vectors
//!
//! Each action the turret understands is a fixed 6-byte vector. The byte
//! positions mean {stop, left, right, up, down, fire}; diagonal moves set
//! two position bytes at once and are derived from their orthogonal
//! components rather than written out as independent literals.

/// Length of the action vector at the head of every command.
pub const VECTOR_LEN: usize = 6;

const STOP: [u8; VECTOR_LEN] = [0, 0, 0, 0, 0, 0];
const LEFT: [u8; VECTOR_LEN] = [0, 1, 0, 0, 0, 0];
const RIGHT: [u8; VECTOR_LEN] = [0, 0, 1, 0, 0, 0];
const UP: [u8; VECTOR_LEN] = [0, 0, 0, 1, 0, 0];
const DOWN: [u8; VECTOR_LEN] = [0, 0, 0, 0, 1, 0];
const FIRE: [u8; VECTOR_LEN] = [0, 0, 0, 0, 0, 1];

const UP_LEFT: [u8; VECTOR_LEN] = combine(UP, LEFT);
const UP_RIGHT: [u8; VECTOR_LEN] = combine(UP, RIGHT);
const DOWN_LEFT: [u8; VECTOR_LEN] = combine(DOWN, LEFT);
const DOWN_RIGHT: [u8; VECTOR_LEN] = combine(DOWN, RIGHT);

/// Element-wise sum of two action vectors.
///
/// Only ever used to build diagonals out of orthogonal components.
const fn combine(a: [u8; VECTOR_LEN], b: [u8; VECTOR_LEN]) -> [u8; VECTOR_LEN] {
    let mut out = [0u8; VECTOR_LEN];
    let mut i = 0;
    while i < VECTOR_LEN {
        out[i] = a[i] + b[i];
        i += 1;
    }
    out
}

/// One physical action of the turret: a movement, a stop, or a launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Halt any in-progress movement
    Stop,
    /// Pan left (west)
    Left,
    /// Pan right (east)
    Right,
    /// Tilt up (north)
    Up,
    /// Tilt down (south)
    Down,
    /// Diagonal up + left (northwest)
    UpLeft,
    /// Diagonal up + right (northeast)
    UpRight,
    /// Diagonal down + left (southwest)
    DownLeft,
    /// Diagonal down + right (southeast)
    DownRight,
    /// Launch a missile
    Fire,
}

impl Action {
    /// The 6-byte vector this action puts at the head of the command buffer.
    pub const fn vector(self) -> [u8; VECTOR_LEN] {
        match self {
            Action::Stop => STOP,
            Action::Left => LEFT,
            Action::Right => RIGHT,
            Action::Up => UP,
            Action::Down => DOWN,
            Action::UpLeft => UP_LEFT,
            Action::UpRight => UP_RIGHT,
            Action::DownLeft => DOWN_LEFT,
            Action::DownRight => DOWN_RIGHT,
            Action::Fire => FIRE,
        }
    }

    /// Resolve a direction alias to an action, case-insensitively.
    ///
    /// Each compass direction is reachable through its directional names
    /// ("up", "north", "upleft", "leftup", "northwest"), the matching
    /// abbreviations ("u", "n", "ul", "lu", "nw") and its numpad digit
    /// (1-4 and 6-9; 5 is not a direction). Anything else resolves to
    /// `None` - callers treat that as a no-op, not an error.
    pub fn from_alias(alias: &str) -> Option<Action> {
        let action = match alias.to_lowercase().as_str() {
            "up" | "u" | "north" | "n" | "8" => Action::Up,
            "down" | "d" | "south" | "s" | "2" => Action::Down,
            "left" | "l" | "west" | "w" | "4" => Action::Left,
            "right" | "r" | "east" | "e" | "6" => Action::Right,
            "leftup" | "lu" | "upleft" | "ul" | "northwest" | "nw" | "7" => Action::UpLeft,
            "rightup" | "ru" | "upright" | "ur" | "northeast" | "ne" | "9" => Action::UpRight,
            "leftdown" | "ld" | "downleft" | "dl" | "southwest" | "sw" | "1" => Action::DownLeft,
            "rightdown" | "rd" | "downright" | "dr" | "southeast" | "se" | "3" => Action::DownRight,
            _ => return None,
        };
        Some(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vectors_are_single_position() {
        // Orthogonal vectors and FIRE each set exactly one byte.
        for action in [
            Action::Left,
            Action::Right,
            Action::Up,
            Action::Down,
            Action::Fire,
        ] {
            let ones = action.vector().iter().filter(|&&b| b == 1).count();
            assert_eq!(ones, 1, "{action:?} should set exactly one byte");
        }
        assert_eq!(Action::Stop.vector(), [0; VECTOR_LEN]);
    }

    #[test]
    fn test_diagonals_are_sums_of_orthogonals() {
        let sum = |a: Action, b: Action| {
            let (va, vb) = (a.vector(), b.vector());
            let mut out = [0u8; VECTOR_LEN];
            for i in 0..VECTOR_LEN {
                out[i] = va[i] + vb[i];
            }
            out
        };

        assert_eq!(Action::UpLeft.vector(), sum(Action::Up, Action::Left));
        assert_eq!(Action::UpRight.vector(), sum(Action::Up, Action::Right));
        assert_eq!(Action::DownLeft.vector(), sum(Action::Down, Action::Left));
        assert_eq!(Action::DownRight.vector(), sum(Action::Down, Action::Right));
    }

    #[test]
    fn test_alias_forms_resolve_identically() {
        let groups: [(&[&str], Action); 8] = [
            (&["up", "u", "north", "n", "8"], Action::Up),
            (&["down", "d", "south", "s", "2"], Action::Down),
            (&["left", "l", "west", "w", "4"], Action::Left),
            (&["right", "r", "east", "e", "6"], Action::Right),
            (
                &["leftup", "lu", "upleft", "ul", "northwest", "nw", "7"],
                Action::UpLeft,
            ),
            (
                &["rightup", "ru", "upright", "ur", "northeast", "ne", "9"],
                Action::UpRight,
            ),
            (
                &["leftdown", "ld", "downleft", "dl", "southwest", "sw", "1"],
                Action::DownLeft,
            ),
            (
                &["rightdown", "rd", "downright", "dr", "southeast", "se", "3"],
                Action::DownRight,
            ),
        ];

        for (aliases, expected) in groups {
            for alias in aliases {
                assert_eq!(
                    Action::from_alias(alias),
                    Some(expected),
                    "alias {alias:?} should resolve to {expected:?}"
                );
                assert_eq!(
                    Action::from_alias(alias).map(Action::vector),
                    Some(expected.vector()),
                    "all forms of {expected:?} must share one vector"
                );
            }
        }
    }

    #[test]
    fn test_alias_is_case_insensitive() {
        assert_eq!(Action::from_alias("NORTHEAST"), Some(Action::UpRight));
        assert_eq!(Action::from_alias("Ne"), Some(Action::UpRight));
        assert_eq!(Action::from_alias("UP"), Some(Action::Up));
    }

    #[test]
    fn test_unknown_alias_resolves_to_none() {
        for bad in ["", "5", "42", "sideways", "northnorth", "0", "10"] {
            assert_eq!(Action::from_alias(bad), None, "{bad:?} must not resolve");
        }
    }
}
