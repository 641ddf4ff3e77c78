pub mod circuit;
pub mod family;
pub mod gates;

// Re-export for easier access
pub use circuit::Circuit;
pub use family::GateFamily;
pub use gates::{DrawStyle, Drawer, GateBuilder, GateDescriptor, Generator, MatrixSource};
