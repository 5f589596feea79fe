// Passive event features
pub mod greeting;
