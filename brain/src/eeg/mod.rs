pub use self::eeg::{Drawable, EEG};

pub mod color;
mod eeg;
