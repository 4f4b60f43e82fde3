//! Clock and random implementations.

use chrono::{DateTime, Utc};

use crate::infrastructure::ports::{ClockPort, RandomPort};

/// System clock - uses real time.
#[derive(Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl ClockPort for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// System random - uses real randomness.
#[derive(Default)]
pub struct SystemRandom;

impl SystemRandom {
    pub fn new() -> Self {
        Self
    }
}

impl RandomPort for SystemRandom {
    fn gen_range(&self, min: i64, max: i64) -> i64 {
        use rand::Rng;
        rand::thread_rng().gen_range(min..=max)
    }
}

/// Fixed clock test double.
pub struct FixedClock(pub DateTime<Utc>);

impl ClockPort for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Fixed random test double - always returns the same value.
pub struct FixedRandom(pub i64);

impl RandomPort for FixedRandom {
    fn gen_range(&self, _min: i64, _max: i64) -> i64 {
        self.0
    }
}
