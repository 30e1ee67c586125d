//! FlowGraph - 内存图引擎
//!
//! 面向固定顶点集的图抽象，支持：
//! - 无向图（邻接集合）与带权有向图（容量矩阵）两种存储变体
//! - 经过校验的边插入/删除
//! - 确定性的 BFS / DFS 遍历
//! - Edmonds-Karp 最大流（基于残量图的增广路径搜索）

pub mod algorithm;
pub mod error;
pub mod graph;

// 重导出常用类型
pub use algorithm::{EdmondsKarp, FlowAssignment, MaxFlow, Traversal};
pub use error::{Error, Result};
pub use graph::{CapacityEdge, CapacityGraph, Graph, UndirectedGraph, VertexId};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
