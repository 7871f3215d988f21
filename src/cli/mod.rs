pub mod orchestration;

pub use orchestration::{run_gate, GateArgs, GateReport};
