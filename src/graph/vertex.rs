//! 顶点定义
//!
//! 顶点以稠密下标标识，取值范围为 `[0, vertex_count)`

use serde::{Deserialize, Serialize};
use std::fmt;

/// 顶点 ID（图内下标）
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct VertexId(pub usize);

impl VertexId {
    pub fn new(id: usize) -> Self {
        Self(id)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl From<usize> for VertexId {
    fn from(id: usize) -> Self {
        Self(id)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_id() {
        let v = VertexId::new(3);
        assert_eq!(v.index(), 3);
        assert_eq!(VertexId::from(3), v);
        assert_eq!(v.to_string(), "3");
    }

    #[test]
    fn test_vertex_id_ordering() {
        // BTreeSet 依赖 Ord，保证邻居按升序迭代
        let mut ids = vec![VertexId::new(2), VertexId::new(0), VertexId::new(1)];
        ids.sort();
        assert_eq!(ids, vec![VertexId::new(0), VertexId::new(1), VertexId::new(2)]);
    }
}
