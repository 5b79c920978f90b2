//! Инфраструктурный слой вокруг движка: RNG-реализации для перемешивания.

pub mod rng;

pub use rng::*;
