use env_logger::fmt::{Color, Formatter};
use lazy_static::lazy_static;
use log::{Level, Record};
use std::{
    io::{self, Write},
    sync::Mutex,
};

pub struct State {
    pub game_time: Option<f32>,
}

lazy_static! {
    pub static ref STATE: Mutex<State> = Mutex::new(State { game_time: None });
}

pub fn init() {
    env_logger::Builder::from_default_env()
        .format(format)
        .init();
}

/// Stamp subsequent log lines with this game time instead of the wall clock.
pub fn set_game_time(time: f32) {
    if let Ok(mut state) = STATE.lock() {
        state.game_time = Some(time);
    }
}

// env_logger does not expose these bits of the default formatter for
// customization, but at least we have copy and paste :^)
fn format(buf: &mut Formatter, record: &Record<'_>) -> io::Result<()> {
    let level = record.level();
    let mut level_style = buf.style();
    match level {
        Level::Trace => level_style.set_color(Color::White),
        Level::Debug => level_style.set_color(Color::Blue),
        Level::Info => level_style.set_color(Color::Green),
        Level::Warn => level_style.set_color(Color::Yellow),
        Level::Error => level_style.set_color(Color::Red).set_bold(true),
    };
    write!(buf, "{:>5} ", level_style.value(level))?;

    let game_time = STATE.lock().ok().and_then(|state| state.game_time);
    match game_time {
        Some(game_time) => write!(buf, "{:.3}: ", game_time)?,
        None => {
            let timestamp = buf.timestamp();
            write!(buf, "{}: ", timestamp)?
        }
    }

    let mut module_style = buf.style();
    module_style.set_color(Color::Yellow);
    if let Some(module_path) = record.module_path() {
        write!(buf, "{}: ", module_style.value(module_path))?;
    }

    writeln!(buf, "{}", record.args())
}
