//! 最大流算法
//!
//! 实现 Edmonds-Karp 算法（基于 BFS 的 Ford-Fulkerson）：
//! 反复在残量图上搜索增广路径，沿路径推送瓶颈流量，
//! 直到汇点在残量图中不可达

use crate::algorithm::traversal::{bfs_parents, Traversal};
use crate::error::{Error, Result};
use crate::graph::{CapacityGraph, Graph, VertexId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

/// 单条边上的流量分配
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowAssignment {
    /// 源顶点
    pub src: VertexId,
    /// 目标顶点
    pub dst: VertexId,
    /// 实际承载的流量
    pub flow: u64,
}

/// 最大流结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaxFlow {
    /// 最大流量值
    pub value: u64,
    /// 增广轮数
    pub augmentations: usize,
    /// 流量分配（只保留正流量的边）
    pub assignments: Vec<FlowAssignment>,
    /// 最小割的源侧顶点集（残量图中从源点可达的顶点）
    pub source_side: BTreeSet<VertexId>,
}

/// Edmonds-Karp 最大流算法
///
/// 独占借用容量图；计算原地改写容量矩阵，
/// 结束后矩阵停留在残量状态，不会自动恢复。
/// 需要保留原图的调用方使用 [`max_flow_preserving`]。
pub struct EdmondsKarp<'g> {
    graph: &'g mut CapacityGraph,
}

impl<'g> EdmondsKarp<'g> {
    /// 创建算法实例
    pub fn new(graph: &'g mut CapacityGraph) -> Self {
        Self { graph }
    }

    /// 计算从 source 到 sink 的最大流
    ///
    /// 源汇不连通时返回流量为 0 的结果；`source == sink` 是错误。
    pub fn max_flow(&mut self, source: VertexId, sink: VertexId) -> Result<MaxFlow> {
        self.graph.check_vertex(source)?;
        self.graph.check_vertex(sink)?;
        if source == sink {
            return Err(Error::DegenerateFlow(source.index()));
        }

        // 原始容量快照，用于事后从残量状态还原每条边的实际流量
        let original = self.graph.clone();

        let mut value: u64 = 0;
        let mut augmentations = 0;
        while let Some(bottleneck) = self.augment(source, sink)? {
            value += bottleneck;
            augmentations += 1;
            debug!(augmentation = augmentations, bottleneck, total = value, "找到增广路径");
        }

        Ok(MaxFlow {
            value,
            augmentations,
            assignments: self.assignments(&original)?,
            source_side: self.source_side(source)?,
        })
    }

    /// 单轮增广：BFS 找路径、回溯取瓶颈、更新残量图
    ///
    /// 汇点不可达时返回 `Ok(None)`，终止外层循环。
    /// 残量更新只在找到完整路径并算出瓶颈之后发生。
    fn augment(&mut self, source: VertexId, sink: VertexId) -> Result<Option<u64>> {
        // 容量图的 neighbours 只枚举正残量边，BFS 即残量图搜索；
        // 目标出队即停，不要求遍历整个图
        let parents = bfs_parents(&*self.graph, source, sink)?;
        if parents[sink.index()].is_none() {
            return Ok(None);
        }

        // 沿前驱链回溯，瓶颈为路径上的最小残量
        let mut bottleneck = u64::MAX;
        let mut current = sink;
        while let Some(prev) = parents[current.index()] {
            bottleneck = bottleneck.min(self.graph.capacity(prev, current)?);
            current = prev;
        }

        // 第二次回溯：正向扣减瓶颈，反向累加（形成可回退的反向边）
        let mut current = sink;
        while let Some(prev) = parents[current.index()] {
            self.graph.push_flow(prev, current, bottleneck);
            current = prev;
        }

        Ok(Some(bottleneck))
    }

    /// 对比原始容量与残量，还原每条边的正流量
    fn assignments(&self, original: &CapacityGraph) -> Result<Vec<FlowAssignment>> {
        let mut assignments = Vec::new();
        for index in 0..original.vertex_count() {
            let src = VertexId::new(index);
            for dst in original.neighbours(src)? {
                let before = original.capacity(src, dst)?;
                let after = self.graph.capacity(src, dst)?;
                if after < before {
                    assignments.push(FlowAssignment {
                        src,
                        dst,
                        flow: before - after,
                    });
                }
            }
        }
        Ok(assignments)
    }

    /// 最小割的源侧：残量图中从源点可达的顶点集合
    fn source_side(&self, source: VertexId) -> Result<BTreeSet<VertexId>> {
        let order = Traversal::new(&*self.graph).bfs(source)?;
        Ok(order.into_iter().collect())
    }
}

/// 非破坏性变体：在图的快照上计算，调用方的图保持原样
pub fn max_flow_preserving(
    graph: &CapacityGraph,
    source: VertexId,
    sink: VertexId,
) -> Result<MaxFlow> {
    let mut snapshot = graph.clone();
    EdmondsKarp::new(&mut snapshot).max_flow(source, sink)
}
