mod serial_generator;

pub use serial_generator::SerialGenerator;
