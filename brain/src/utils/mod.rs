pub use self::stopwatch::Stopwatch;

mod stopwatch;
