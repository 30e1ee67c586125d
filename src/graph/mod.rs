//! 图核心模块
//!
//! 定义顶点、共享的图契约和两种存储变体

mod traits;
mod undirected;
mod vertex;
mod weighted;

pub use traits::Graph;
pub use undirected::UndirectedGraph;
pub use vertex::VertexId;
pub use weighted::{CapacityEdge, CapacityGraph};
