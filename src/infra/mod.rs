//! Инфраструктурный слой вокруг движка:
//! - RNG-реализации для движка;
//! - seed партии и его детерминированное расширение;
//! - JSON-снапшоты состояния для хоста.

pub mod rng;
pub mod rng_seed;
pub mod snapshot;

pub use rng::*;
pub use rng_seed::RngSeed;
pub use snapshot::*;
