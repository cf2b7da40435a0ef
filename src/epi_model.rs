pub mod seir_states;
pub use seir_states::*;

pub mod simulator;
pub use simulator::*;

pub mod seir_writer;
pub use seir_writer::*;

pub mod targets;
pub use targets::*;
