pub const POSITIVE_WORDS: &[&str] = &[
    "happy", "awesome", "great", "joy", "excited", "good", "wonderful", "fantastic", "amazing", "yay", "ecstatic",
];

pub const NEGATIVE_WORDS: &[&str] = &[
    "sad", "depressed", "angry", "cry", "lonely", "bad", "terrible", "awful", "miserable", "upset", "grief",
];

pub const LOVE_WORDS: &[&str] = &["love", "heart", "adore", "crush", "romance", "affection", "passion"];

pub const ANGRY_WORDS: &[&str] = &["angry", "mad", "furious"];

pub fn to_owned_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
