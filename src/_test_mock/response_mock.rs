use crate::modules::response::PhrasePicker;

/// Replays a fixed sequence of indices (cycling) and counts how often it was asked.
pub struct SequencePicker {
    indices: Vec<usize>,
    calls: usize,
}

impl SequencePicker {
    pub fn new(indices: Vec<usize>) -> Self {
        Self { indices, calls: 0 }
    }

    pub fn calls(&self) -> usize {
        self.calls
    }
}

impl PhrasePicker for SequencePicker {
    fn pick(&mut self, _len: usize) -> usize {
        let index = if self.indices.is_empty() {
            0
        } else {
            self.indices[self.calls % self.indices.len()]
        };
        self.calls += 1;
        index
    }
}

pub struct ChatTestData;

impl ChatTestData {
    pub fn happy_texts() -> Vec<&'static str> {
        vec!["I'm so happy today!", "This is wonderful news!", "What an amazing day", "YAY"]
    }

    pub fn sad_texts() -> Vec<&'static str> {
        vec!["I feel lonely", "Everything is terrible", "I just want to cry", "I am so upset"]
    }

    pub fn love_texts() -> Vec<&'static str> {
        vec!["I love you", "You have my heart", "I adore this", "Pure romance"]
    }

    pub fn angry_texts() -> Vec<&'static str> {
        vec!["I am furious", "This makes me mad", "FURIOUS!!!"]
    }

    pub fn neutral_texts() -> Vec<&'static str> {
        vec!["", "what time is it", "The weather is nice today", "hello there"]
    }
}
