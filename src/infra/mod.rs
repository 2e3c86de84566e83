//! Инфраструктура вокруг движка стола:
//! - RNG-реализации;
//! - дилеры (источники колод) для боевого режима и для реплея.

pub mod dealer;
pub mod rng;

pub use dealer::*;
pub use rng::*;
