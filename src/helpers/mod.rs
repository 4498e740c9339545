mod pause;

pub use pause::pause;
