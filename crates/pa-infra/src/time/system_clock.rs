use chrono::{Local, NaiveDate};
use pa_core::ports::ClockPort;

pub struct SystemClock;

impl ClockPort for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
