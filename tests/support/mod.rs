#![allow(dead_code)]

pub mod fixed_formatter;
pub mod fixtures;
pub mod recording_observer;
