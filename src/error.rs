//! 错误类型定义

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("顶点越界: {vertex}（顶点总数 {vertex_count}）")]
    InvalidVertex { vertex: usize, vertex_count: usize },

    #[error("无效的边: {src} -> {dst}（顶点总数 {vertex_count}）")]
    InvalidEdge {
        src: usize,
        dst: usize,
        vertex_count: usize,
    },

    #[error("不允许自环: {0}")]
    SelfLoop(usize),

    #[error("边权重不能为 0: {src} -> {dst}")]
    ZeroWeight { src: usize, dst: usize },

    #[error("源点和汇点不能相同: {0}")]
    DegenerateFlow(usize),
}
