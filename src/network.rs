pub mod graph;
pub use graph::*;

pub mod build;
pub use build::*;

pub mod weights;
pub use weights::*;

pub mod clustering;
pub use clustering::*;

pub mod centrality;
pub use centrality::*;
