//! 遍历算法
//!
//! BFS 和 DFS 产生确定性的访问顺序：邻居按升序展开，
//! 结果只取决于最终的邻接状态，与插边历史无关

use crate::error::{Error, Result};
use crate::graph::{Graph, VertexId};
use std::collections::VecDeque;
use tracing::trace;

/// 遍历引擎
///
/// 对任意实现了 [`Graph`] 的存储变体工作。
pub struct Traversal<'g, G: Graph> {
    graph: &'g G,
}

impl<'g, G: Graph> Traversal<'g, G> {
    /// 创建遍历引擎
    pub fn new(graph: &'g G) -> Self {
        Self { graph }
    }

    /// 广度优先遍历，返回出队顺序
    ///
    /// 顶点在入队时标记已访问，保证每个顶点至多入队一次；
    /// 孤立顶点返回单元素序列。
    pub fn bfs(&self, start: VertexId) -> Result<Vec<VertexId>> {
        let (order, _) = bfs_walk(self.graph, start, None)?;
        Ok(order)
    }

    /// 深度优先遍历，返回先序访问顺序
    ///
    /// 显式栈实现，与按升序邻居递归的先序完全一致。
    pub fn dfs(&self, start: VertexId) -> Result<Vec<VertexId>> {
        check_vertex(self.graph, start)?;

        let mut visited = vec![false; self.graph.vertex_count()];
        let mut order = Vec::new();
        let mut stack = vec![start];

        while let Some(current) = stack.pop() {
            if visited[current.index()] {
                continue;
            }
            visited[current.index()] = true;
            order.push(current);

            // 逆序压栈，编号最小的邻居先出栈
            for neighbour in self.graph.neighbours(current)?.into_iter().rev() {
                if !visited[neighbour.index()] {
                    stack.push(neighbour);
                }
            }
        }

        Ok(order)
    }

    /// BFS 最短路径（按边数），返回从 start 到 end 的顶点序列
    ///
    /// 不可达时返回 `Ok(None)`。
    pub fn shortest_path(&self, start: VertexId, end: VertexId) -> Result<Option<Vec<VertexId>>> {
        check_vertex(self.graph, end)?;
        if start == end {
            return Ok(Some(vec![start]));
        }

        let parents = bfs_parents(self.graph, start, end)?;
        if parents[end.index()].is_none() {
            return Ok(None);
        }

        // 沿前驱链回溯并反转
        let mut path = vec![end];
        let mut current = end;
        while let Some(prev) = parents[current.index()] {
            path.push(prev);
            current = prev;
        }
        path.reverse();

        Ok(Some(path))
    }
}

/// BFS 核心：FIFO 队列，入队即标记，记录前驱
///
/// `stop_at` 指定提前终止的目标顶点（在其出队时停止），
/// 这也是最大流增广搜索使用的入口。
fn bfs_walk<G: Graph>(
    graph: &G,
    start: VertexId,
    stop_at: Option<VertexId>,
) -> Result<(Vec<VertexId>, Vec<Option<VertexId>>)> {
    check_vertex(graph, start)?;

    let mut visited = vec![false; graph.vertex_count()];
    let mut parents: Vec<Option<VertexId>> = vec![None; graph.vertex_count()];
    let mut order = Vec::new();
    let mut queue = VecDeque::new();

    visited[start.index()] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        trace!(%current, "出队");
        order.push(current);
        if stop_at == Some(current) {
            break;
        }

        for neighbour in graph.neighbours(current)? {
            if !visited[neighbour.index()] {
                visited[neighbour.index()] = true;
                parents[neighbour.index()] = Some(current);
                queue.push_back(neighbour);
            }
        }
    }

    Ok((order, parents))
}

/// 带前驱记录的 BFS，在目标出队时提前停止
///
/// 最大流的增广搜索复用该入口：容量图的 `neighbours`
/// 只枚举正残量的边，因此搜索天然发生在残量图上。
pub(crate) fn bfs_parents<G: Graph>(
    graph: &G,
    start: VertexId,
    target: VertexId,
) -> Result<Vec<Option<VertexId>>> {
    let (_, parents) = bfs_walk(graph, start, Some(target))?;
    Ok(parents)
}

fn check_vertex<G: Graph>(graph: &G, vertex: VertexId) -> Result<()> {
    if vertex.index() >= graph.vertex_count() {
        return Err(Error::InvalidVertex {
            vertex: vertex.index(),
            vertex_count: graph.vertex_count(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{CapacityGraph, UndirectedGraph};

    fn v(id: usize) -> VertexId {
        VertexId::new(id)
    }

    fn ids(raw: &[usize]) -> Vec<VertexId> {
        raw.iter().map(|&id| v(id)).collect()
    }

    /// 测试图：
    /// ```text
    /// 5 - 2 - 6
    ///     |   |   8
    /// 0 - 1 - 4
    ///         |
    ///         3 - 7
    /// ```
    fn search_fixture() -> UndirectedGraph {
        UndirectedGraph::with_edges(
            9,
            &[(5, 2), (2, 6), (0, 1), (1, 4), (2, 1), (6, 4), (4, 3), (3, 7)],
        )
        .unwrap()
    }

    #[test]
    fn test_bfs_order() {
        let graph = search_fixture();
        let traversal = Traversal::new(&graph);

        assert_eq!(traversal.bfs(v(1)).unwrap(), ids(&[1, 0, 2, 4, 5, 6, 3, 7]));
        assert_eq!(traversal.bfs(v(4)).unwrap(), ids(&[4, 1, 3, 6, 0, 2, 7, 5]));
    }

    #[test]
    fn test_bfs_isolated() {
        let graph = search_fixture();
        assert_eq!(Traversal::new(&graph).bfs(v(8)).unwrap(), ids(&[8]));
    }

    #[test]
    fn test_dfs_order() {
        let graph = search_fixture();
        let traversal = Traversal::new(&graph);

        assert_eq!(traversal.dfs(v(1)).unwrap(), ids(&[1, 0, 2, 5, 6, 4, 3, 7]));
        assert_eq!(traversal.dfs(v(2)).unwrap(), ids(&[2, 1, 0, 4, 3, 7, 6, 5]));
        assert_eq!(traversal.dfs(v(8)).unwrap(), ids(&[8]));
    }

    #[test]
    fn test_invalid_start() {
        let graph = search_fixture();
        let traversal = Traversal::new(&graph);

        let expected = Err(Error::InvalidVertex {
            vertex: 9,
            vertex_count: 9,
        });
        assert_eq!(traversal.bfs(v(9)), expected);
        assert_eq!(traversal.dfs(v(9)), expected);
    }

    #[test]
    fn test_order_independent_of_insertion_history() {
        // 同一邻接状态，不同插边顺序
        let reversed = UndirectedGraph::with_edges(
            9,
            &[(3, 7), (4, 3), (6, 4), (2, 1), (1, 4), (0, 1), (2, 6), (5, 2)],
        )
        .unwrap();
        let graph = search_fixture();

        assert_eq!(
            Traversal::new(&graph).bfs(v(1)).unwrap(),
            Traversal::new(&reversed).bfs(v(1)).unwrap()
        );
        assert_eq!(
            Traversal::new(&graph).dfs(v(2)).unwrap(),
            Traversal::new(&reversed).dfs(v(2)).unwrap()
        );
    }

    #[test]
    fn test_traversal_on_capacity_graph() {
        // 有向链 0 -> 1 -> 2：正向可达，反向不可达
        let graph = CapacityGraph::with_edges(3, &[(0, 1, 5), (1, 2, 5)]).unwrap();
        let traversal = Traversal::new(&graph);

        assert_eq!(traversal.bfs(v(0)).unwrap(), ids(&[0, 1, 2]));
        assert_eq!(traversal.bfs(v(2)).unwrap(), ids(&[2]));
        assert_eq!(traversal.dfs(v(0)).unwrap(), ids(&[0, 1, 2]));
    }

    #[test]
    fn test_shortest_path() {
        let graph = search_fixture();
        let traversal = Traversal::new(&graph);

        assert_eq!(
            traversal.shortest_path(v(0), v(7)).unwrap(),
            Some(ids(&[0, 1, 4, 3, 7]))
        );
        assert_eq!(traversal.shortest_path(v(5), v(5)).unwrap(), Some(ids(&[5])));
        // 顶点 8 孤立，不可达
        assert_eq!(traversal.shortest_path(v(0), v(8)).unwrap(), None);
    }
}
