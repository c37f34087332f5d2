pub mod explosion;
pub mod particle;
pub mod photon;
pub mod segment;
pub mod tracker;
