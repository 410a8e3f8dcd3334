use crate::eeg::color::{self, Color};
use log::debug;
use nalgebra::Vector3;
use std::{collections::VecDeque, mem};

/// The debug sink. Behaviors scribble here; the host may render what's left
/// at the end of each tick. Nothing here feeds back into decisions.
pub struct EEG {
    current_time: f32,
    draw_list: Vec<Drawable>,
    pub log: VecDeque<String>,
}

impl Default for EEG {
    fn default() -> Self {
        Self::new()
    }
}

impl EEG {
    /// The most log lines kept in memory.
    const LOG_CAPACITY: usize = 250;

    pub fn new() -> Self {
        Self {
            current_time: 0.0,
            draw_list: Vec::new(),
            log: VecDeque::new(),
        }
    }

    pub fn begin(&mut self, time: f32) {
        self.current_time = time;
    }

    pub fn draw(&mut self, drawable: Drawable) {
        self.draw_list.push(drawable);
    }

    pub fn log(&mut self, source: &str, message: impl Into<String>) {
        let message = format!("[{}] {}", source, message.into());

        debug!("{:>8.3} {}", self.current_time, message);

        self.log.push_back(message);

        // Limit RAM usage
        while self.log.len() > Self::LOG_CAPACITY {
            self.log.pop_front();
        }
    }

    pub fn print_value(&mut self, label: &str, value: impl std::fmt::Display) {
        self.draw(Drawable::print(format!("{}: {}", label, value), color::WHITE));
    }

    /// Hand over everything drawn this tick.
    pub fn show(&mut self) -> Vec<Drawable> {
        mem::replace(&mut self.draw_list, Vec::new())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Drawable {
    Print(String, Color),
    Box3d(Vector3<f32>, Color),
    Polyline(Vec<Vector3<f32>>, Color),
}

impl Drawable {
    pub fn print(text: impl Into<String>, color: Color) -> Drawable {
        Drawable::Print(text.into(), color)
    }
}
