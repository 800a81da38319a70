pub mod shuffle;

pub use shuffle::ShuffleConfig;
