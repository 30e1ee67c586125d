//! 图契约
//!
//! 无向图和容量图共享同一组边操作接口，
//! 两种变体在存储布局上完全不同，因此用 trait 而非继承表达

use super::vertex::VertexId;
use crate::error::Result;

/// 通用图接口
///
/// `Edge` 是变体各自的边表示：无向图为顶点对，容量图为带权三元组。
pub trait Graph {
    type Edge;

    /// 顶点总数（构造时固定）
    fn vertex_count(&self) -> usize;

    /// 插入一条边，返回是否新建了边
    ///
    /// 端点越界、自环（以及容量图的零权重）会返回错误；
    /// 边已存在时返回 `Ok(false)` 且不改变任何状态。
    fn add_edge(&mut self, edge: Self::Edge) -> Result<bool>;

    /// 删除一条边，返回是否发生了删除
    fn delete_edge(&mut self, edge: Self::Edge) -> Result<bool>;

    /// 返回从 `vertex` 直接可达的顶点，按升序排列
    ///
    /// 升序保证遍历和增广搜索的确定性。
    fn neighbours(&self, vertex: VertexId) -> Result<Vec<VertexId>>;
}
