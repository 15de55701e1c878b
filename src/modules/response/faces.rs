use crate::modules::emotion::EmotionLabel;

macro_rules! banner {
    ($caption:literal) => {
        concat!("\n  ╔════════════╗\n  ", $caption, "\n  ╚════════════╝\n    ")
    };
}

pub const HAPPY_FACE: &str = banner!("😄 AWESOME DAY!  ");
pub const SAD_FACE: &str = banner!("😢 TOUGH TIMES?  ");
pub const NEUTRAL_FACE: &str = banner!("😐 HELLO THERE   ");
pub const LOVE_FACE: &str = banner!("😍 LOVELY FEELING!  ");
pub const ANGRY_FACE: &str = banner!("😠 TAKE A DEEP BREATH  ");

/// ASCII-art banner shown for the given emotion.
pub fn face_for(label: EmotionLabel) -> &'static str {
    match label {
        EmotionLabel::Happy => HAPPY_FACE,
        EmotionLabel::Sad => SAD_FACE,
        EmotionLabel::Love => LOVE_FACE,
        EmotionLabel::Angry => ANGRY_FACE,
        EmotionLabel::Neutral => NEUTRAL_FACE,
    }
}
