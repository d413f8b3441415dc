/// Adapters - concrete implementations of the port traits
///
/// These modules implement the ports for specific remote services and for
/// local artifact storage.
pub mod services;
pub mod storage;
