//! 图算法模块
//!
//! 包含确定性遍历和最大流算法

mod max_flow;
mod traversal;

pub use max_flow::{max_flow_preserving, EdmondsKarp, FlowAssignment, MaxFlow};
pub use traversal::Traversal;
