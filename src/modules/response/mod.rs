pub mod faces;
pub mod picker;
pub mod selector;

pub use faces::face_for;
pub use picker::{FixedPicker, PhrasePicker, RandomPicker};
pub use selector::ResponseSelector;
