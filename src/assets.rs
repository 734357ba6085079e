//! ASCII gallows frames and end-screen emoticons.

/// Gallows stages, fully drawn body first. The frame for a life count is
/// `clamp(life - 1, 0, 6)`, so zero and one life share the final picture.
const GALLOWS: [[&str; 6]; 7] = [
    [
        "*---*   ",
        "|   |   ",
        "|   O   ",
        "|  \\|/  ",
        "|   |   ",
        "|  / \\  ",
    ],
    [
        "*---*   ",
        "|   |   ",
        "|   O   ",
        "|  \\|/  ",
        "|   |   ",
        "|    \\  ",
    ],
    [
        "*---*   ",
        "|   |   ",
        "|   O   ",
        "|  \\|/  ",
        "|   |   ",
        "|       ",
    ],
    [
        "*---*   ",
        "|   |   ",
        "|   O   ",
        "|   |/  ",
        "|   |   ",
        "|       ",
    ],
    [
        "*---*   ",
        "|   |   ",
        "|   O   ",
        "|   |   ",
        "|   |   ",
        "|       ",
    ],
    [
        "*---*   ",
        "|   |   ",
        "|   O   ",
        "|       ",
        "|       ",
        "|       ",
    ],
    [
        "*---*   ",
        "|   |   ",
        "|       ",
        "|       ",
        "|       ",
        "|       ",
    ],
];

const HAPPY: &str = "✺◟(＾∇＾)◞✺";
const SAD: &str = "(づ•́ ᵔ •̀)づ";

/// The gallows frame for the given remaining life count.
pub fn gallows_frame(life: u32) -> &'static [&'static str] {
    let idx = (life.max(1) - 1).min(6) as usize;
    &GALLOWS[idx]
}

pub fn emoticon(won: bool) -> &'static str {
    if won {
        HAPPY
    } else {
        SAD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_clamp_at_both_ends() {
        assert_eq!(gallows_frame(0), gallows_frame(1));
        assert_eq!(gallows_frame(7), gallows_frame(99));
        assert_ne!(gallows_frame(1), gallows_frame(7));
    }

    #[test]
    fn every_life_count_has_a_six_line_frame() {
        for life in 0..10 {
            assert_eq!(gallows_frame(life).len(), 6);
        }
    }

    #[test]
    fn body_parts_disappear_as_life_grows() {
        // Full body at the bitter end, empty gallows on full health.
        assert!(gallows_frame(1).iter().any(|l| l.contains('O')));
        assert!(gallows_frame(7).iter().all(|l| !l.contains('O')));
    }

    #[test]
    fn emoticon_matches_outcome() {
        assert_eq!(emoticon(true), HAPPY);
        assert_eq!(emoticon(false), SAD);
    }
}
