//! FlowGraph 演示入口
//!
//! 构建经典六顶点流网络，运行遍历和最大流并打印结果

use anyhow::Result;
use clap::Parser;
use flowgraph::algorithm::{max_flow_preserving, Traversal};
use flowgraph::graph::{CapacityGraph, Graph, VertexId};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "flowgraph-demo")]
#[command(about = "FlowGraph 图引擎演示")]
struct Args {
    /// 源点
    #[arg(short, long, default_value = "0")]
    source: usize,

    /// 汇点
    #[arg(short = 't', long, default_value = "5")]
    sink: usize,

    /// 以 JSON 输出最大流结果
    #[arg(long)]
    json: bool,
}

fn format_order(order: &[VertexId]) -> String {
    order
        .iter()
        .map(|vertex| vertex.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    // 经典 Ford-Fulkerson 教科书网络，maxFlow(0, 5) == 23
    let graph = CapacityGraph::with_edges(
        6,
        &[
            (0, 1, 16),
            (0, 2, 13),
            (1, 2, 10),
            (1, 3, 12),
            (2, 1, 4),
            (2, 4, 14),
            (3, 2, 9),
            (3, 5, 20),
            (4, 3, 7),
            (4, 5, 4),
        ],
    )?;

    let source = VertexId::new(args.source);
    let sink = VertexId::new(args.sink);
    let result = max_flow_preserving(&graph, source, sink)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("FlowGraph - 内存图引擎演示");
    println!("==========================");
    println!("顶点数: {}", graph.vertex_count());
    println!("边数: {}", graph.edge_count());

    let traversal = Traversal::new(&graph);
    println!("BFS({}): {}", source, format_order(&traversal.bfs(source)?));
    println!("DFS({}): {}", source, format_order(&traversal.dfs(source)?));

    println!(
        "最大流 {} -> {}: {}（{} 轮增广）",
        source, sink, result.value, result.augmentations
    );
    for assignment in &result.assignments {
        println!(
            "  {} -> {}: {}",
            assignment.src, assignment.dst, assignment.flow
        );
    }
    println!(
        "最小割源侧: {{{}}}",
        result
            .source_side
            .iter()
            .map(|vertex| vertex.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );

    Ok(())
}
