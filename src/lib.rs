pub mod interval;
pub mod just;
pub mod note;
pub mod optimize;
pub mod pairs;
pub mod pitch;
pub mod ratio;
pub mod tuner;
