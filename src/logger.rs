use crate::{elapsed, SystemTime};
use std::fmt::Display;

#[derive(Clone, Copy)]
pub struct Chronometer {
    start: SystemTime,
}

impl Chronometer {
    pub fn new() -> Self {
        Self { start: SystemTime::now() }
    }

    pub fn elapsed(&self) -> String {
        let millis = SystemTime::now().duration_since(self.start).unwrap().as_millis() as u64;
        format!("{}.{:03}", elapsed::format(millis), millis % 1_000)
    }
}

#[derive(Clone, Copy)]
pub struct Logger {
    chronometer: Chronometer,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            chronometer: Chronometer::new(),
        }
    }

    pub fn log(&self, value: impl Display) {
        println!("{}", format!("{} ({} elapsed)", value, self.chronometer.elapsed()));
    }
}
