use crate::prelude::*;
use std::sync::Mutex;

/// Returns predefined reals in the given order, then repeats the last one.
pub struct FakeRandom {
    reals: Mutex<Vec<Float>>,
}

impl FakeRandom {
    pub fn new(reals: Vec<Float>) -> Self {
        let mut reals = reals;
        reals.reverse();
        Self { reals: Mutex::new(reals) }
    }
}

impl Random for FakeRandom {
    fn uniform_real(&self, min: Float, max: Float) -> Float {
        assert!(min < max);
        let mut reals = self.reals.lock().unwrap();

        if reals.len() > 1 { reals.pop().unwrap() } else { *reals.last().expect("no values") }
    }
}

/// Always returns the same value.
pub struct EchoRandom {
    value: Float,
}

impl EchoRandom {
    pub fn new(value: Float) -> Self {
        Self { value }
    }
}

impl Random for EchoRandom {
    fn uniform_real(&self, _: Float, _: Float) -> Float {
        self.value
    }
}
