use emotion_mirror::{EmotionLabel, PhrasePicker};
use mockall::mock;

mock! {
    pub Picker {}

    impl PhrasePicker for Picker {
        fn pick(&mut self, len: usize) -> usize;
    }
}

pub struct TestChatData;

impl TestChatData {
    pub fn labelled_texts() -> Vec<(&'static str, EmotionLabel)> {
        vec![
            ("I'm so happy today!", EmotionLabel::Happy),
            ("This is wonderful news!", EmotionLabel::Happy),
            ("Feeling ecstatic", EmotionLabel::Happy),
            ("I'm feeling depressed", EmotionLabel::Sad),
            ("Such an awful morning", EmotionLabel::Sad),
            ("I have a crush on someone", EmotionLabel::Love),
            ("My passion is painting", EmotionLabel::Love),
            ("I am furious about this situation", EmotionLabel::Angry),
            ("That made me mad", EmotionLabel::Angry),
            ("The meeting is at 3 PM", EmotionLabel::Neutral),
            ("Please review the document", EmotionLabel::Neutral),
        ]
    }

    pub fn sample_config_toml() -> &'static str {
        r#"
[widget]
title = "Mood Mirror"
placeholder = "Say something"

[keywords]
positive = ["sunny", "bright"]
negative = ["rainy"]
love = ["cuddle"]
angry = ["grr"]

[responses]
happy = "Glad to hear it!"
sad_support = ["Hang in there", "Tomorrow is new"]
"#
    }
}
