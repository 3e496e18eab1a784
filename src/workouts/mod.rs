//! Workout module for structured interval sessions.

pub mod codec;
pub mod types;

pub use codec::{
    decode_intervals, encode_intervals, load_workout_file, parse_workout_json, workout_to_json,
};
pub use types::{
    total_duration_seconds, Interval, RampInterval, RepeatInterval, SingleInterval, WorkoutError, WorkoutModel,
    WorkoutParseError,
};
