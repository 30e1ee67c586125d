//! 带权有向图
//!
//! 稠密容量矩阵存储：`matrix[u][v]` 为边 u -> v 的容量，0 表示无边。
//! 正反两个方向的容量相互独立，最大流计算依赖这一点维护残量图。

use super::traits::Graph;
use super::vertex::VertexId;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// 带权有向边
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapacityEdge {
    /// 源顶点
    pub src: VertexId,
    /// 目标顶点
    pub dst: VertexId,
    /// 容量（非负整数，0 等价于无边）
    pub capacity: u64,
}

impl CapacityEdge {
    pub fn new(src: VertexId, dst: VertexId, capacity: u64) -> Self {
        Self { src, dst, capacity }
    }
}

impl From<(usize, usize, u64)> for CapacityEdge {
    fn from((src, dst, capacity): (usize, usize, u64)) -> Self {
        Self::new(VertexId::new(src), VertexId::new(dst), capacity)
    }
}

/// 容量图
///
/// 适用于小而稠密的图；最大流计算会原地改写矩阵（残量状态），
/// 需要保留原始容量的调用方应先 `clone` 一份快照。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapacityGraph {
    /// 顶点总数
    vertex_count: usize,
    /// 容量矩阵
    matrix: Vec<Vec<u64>>,
}

impl CapacityGraph {
    /// 创建指定顶点数的空图
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            matrix: vec![vec![0; vertex_count]; vertex_count],
        }
    }

    /// 创建图并批量插入初始边
    ///
    /// 遇到第一条非法边即返回错误。
    pub fn with_edges(vertex_count: usize, edges: &[(usize, usize, u64)]) -> Result<Self> {
        let mut graph = Self::new(vertex_count);
        for &edge in edges {
            graph.add_edge(CapacityEdge::from(edge))?;
        }
        Ok(graph)
    }

    /// 查询边 src -> dst 的当前容量（无边为 0）
    pub fn capacity(&self, src: VertexId, dst: VertexId) -> Result<u64> {
        self.check_vertex(src)?;
        self.check_vertex(dst)?;
        Ok(self.matrix[src.index()][dst.index()])
    }

    /// 获取顶点的出度（正容量出边数）
    pub fn out_degree(&self, vertex: VertexId) -> Result<usize> {
        self.check_vertex(vertex)?;
        Ok(self.matrix[vertex.index()]
            .iter()
            .filter(|&&capacity| capacity > 0)
            .count())
    }

    /// 获取顶点的入度（正容量入边数）
    pub fn in_degree(&self, vertex: VertexId) -> Result<usize> {
        self.check_vertex(vertex)?;
        Ok(self
            .matrix
            .iter()
            .filter(|row| row[vertex.index()] > 0)
            .count())
    }

    /// 获取边数量（正容量项数）
    pub fn edge_count(&self) -> usize {
        self.matrix
            .iter()
            .map(|row| row.iter().filter(|&&capacity| capacity > 0).count())
            .sum()
    }

    /// 沿边推送流量：正向容量减少，反向容量增加
    ///
    /// 调用方保证 `amount <= matrix[src][dst]`；
    /// `matrix[u][v] + matrix[v][u]` 在调用前后保持不变。
    pub(crate) fn push_flow(&mut self, src: VertexId, dst: VertexId, amount: u64) {
        self.matrix[src.index()][dst.index()] -= amount;
        self.matrix[dst.index()][src.index()] += amount;
    }

    /// 校验顶点下标
    pub(crate) fn check_vertex(&self, vertex: VertexId) -> Result<()> {
        if vertex.index() >= self.vertex_count {
            return Err(Error::InvalidVertex {
                vertex: vertex.index(),
                vertex_count: self.vertex_count,
            });
        }
        Ok(())
    }

    /// 校验边端点
    fn check_endpoints(&self, edge: &CapacityEdge) -> Result<()> {
        if edge.src.index() >= self.vertex_count || edge.dst.index() >= self.vertex_count {
            return Err(Error::InvalidEdge {
                src: edge.src.index(),
                dst: edge.dst.index(),
                vertex_count: self.vertex_count,
            });
        }
        Ok(())
    }

    /// 校验权重参数（0 等价于无边，插入和删除均拒绝）
    fn check_weight(&self, edge: &CapacityEdge) -> Result<()> {
        if edge.capacity == 0 {
            return Err(Error::ZeroWeight {
                src: edge.src.index(),
                dst: edge.dst.index(),
            });
        }
        Ok(())
    }
}

impl Graph for CapacityGraph {
    type Edge = CapacityEdge;

    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// 插入有向边
    ///
    /// 该方向上已有边时返回 `Ok(false)` 且不覆盖原容量。
    fn add_edge(&mut self, edge: Self::Edge) -> Result<bool> {
        self.check_endpoints(&edge)?;
        if edge.src == edge.dst {
            return Err(Error::SelfLoop(edge.src.index()));
        }
        self.check_weight(&edge)?;

        if self.matrix[edge.src.index()][edge.dst.index()] != 0 {
            return Ok(false);
        }
        self.matrix[edge.src.index()][edge.dst.index()] = edge.capacity;
        Ok(true)
    }

    /// 删除有向边
    ///
    /// 无论当前容量为何，存在即清零；边不存在时返回 `Ok(false)`。
    fn delete_edge(&mut self, edge: Self::Edge) -> Result<bool> {
        self.check_endpoints(&edge)?;
        self.check_weight(&edge)?;

        if self.matrix[edge.src.index()][edge.dst.index()] == 0 {
            return Ok(false);
        }
        self.matrix[edge.src.index()][edge.dst.index()] = 0;
        Ok(true)
    }

    /// 正容量出边的目标顶点，矩阵下标扫描天然升序
    fn neighbours(&self, vertex: VertexId) -> Result<Vec<VertexId>> {
        self.check_vertex(vertex)?;
        Ok(self.matrix[vertex.index()]
            .iter()
            .enumerate()
            .filter(|&(_, &capacity)| capacity > 0)
            .map(|(dst, _)| VertexId::new(dst))
            .collect())
    }
}
