//! 无向图
//!
//! 邻接集合存储：`adjacency[v]` 为 v 的邻居集合，
//! 插入和删除在两个方向上同时维护对称性

use super::traits::Graph;
use super::vertex::VertexId;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// 无向图
///
/// 顶点数在构造时固定；`BTreeSet` 保证邻居按升序迭代。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UndirectedGraph {
    /// 顶点总数
    vertex_count: usize,
    /// 每个顶点的邻居集合
    adjacency: Vec<BTreeSet<VertexId>>,
}

impl UndirectedGraph {
    /// 创建指定顶点数的空图
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            adjacency: vec![BTreeSet::new(); vertex_count],
        }
    }

    /// 创建图并批量插入初始边
    ///
    /// 遇到第一条非法边即返回错误。
    pub fn with_edges(vertex_count: usize, edges: &[(usize, usize)]) -> Result<Self> {
        let mut graph = Self::new(vertex_count);
        for &(src, dst) in edges {
            graph.add_edge((VertexId::new(src), VertexId::new(dst)))?;
        }
        Ok(graph)
    }

    /// 获取顶点的度
    pub fn degree(&self, vertex: VertexId) -> Result<usize> {
        self.check_vertex(vertex)?;
        Ok(self.adjacency[vertex.index()].len())
    }

    /// 获取边数量
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(|set| set.len()).sum::<usize>() / 2
    }

    /// 校验顶点下标
    fn check_vertex(&self, vertex: VertexId) -> Result<()> {
        if vertex.index() >= self.vertex_count {
            return Err(Error::InvalidVertex {
                vertex: vertex.index(),
                vertex_count: self.vertex_count,
            });
        }
        Ok(())
    }

    /// 校验边端点：越界或自环均拒绝
    fn check_edge(&self, src: VertexId, dst: VertexId) -> Result<()> {
        if src.index() >= self.vertex_count || dst.index() >= self.vertex_count {
            return Err(Error::InvalidEdge {
                src: src.index(),
                dst: dst.index(),
                vertex_count: self.vertex_count,
            });
        }
        Ok(())
    }
}

impl Graph for UndirectedGraph {
    type Edge = (VertexId, VertexId);

    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// 插入无向边，两侧同时写入
    ///
    /// 两侧均已存在时返回 `Ok(false)`（幂等）。
    fn add_edge(&mut self, edge: Self::Edge) -> Result<bool> {
        let (src, dst) = edge;
        self.check_edge(src, dst)?;
        if src == dst {
            return Err(Error::SelfLoop(src.index()));
        }

        let inserted_fwd = self.adjacency[src.index()].insert(dst);
        let inserted_rev = self.adjacency[dst.index()].insert(src);
        Ok(inserted_fwd | inserted_rev)
    }

    /// 删除无向边，两侧同时移除
    fn delete_edge(&mut self, edge: Self::Edge) -> Result<bool> {
        let (src, dst) = edge;
        self.check_edge(src, dst)?;

        let removed_fwd = self.adjacency[src.index()].remove(&dst);
        let removed_rev = self.adjacency[dst.index()].remove(&src);
        Ok(removed_fwd | removed_rev)
    }

    fn neighbours(&self, vertex: VertexId) -> Result<Vec<VertexId>> {
        self.check_vertex(vertex)?;
        Ok(self.adjacency[vertex.index()].iter().copied().collect())
    }
}
