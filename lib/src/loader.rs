// lib/src/loader.rs

//! Edge list loading. Input is headerless CSV where every row with exactly two
//! fields is one undirected edge; any other row is skipped without error.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use log::{debug, info};
use models::{EdgeRecord, GraphResult};

use crate::engine::EdgeListGraph;

/// Counters collected while reading an edge list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    pub rows: usize,
    pub edges: usize,
    pub self_loops: usize,
    pub skipped: usize,
}

fn edge_list_reader<R: Read>(reader: R) -> csv::Reader<R> {
    ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader)
}

/// Feeds every well-formed edge to `sink`, in file order.
fn for_each_edge<R, F>(reader: R, mut sink: F) -> GraphResult<LoadStats>
where
    R: Read,
    F: FnMut(EdgeRecord),
{
    let mut csv_reader = edge_list_reader(reader);
    let mut record = StringRecord::new();
    let mut stats = LoadStats::default();

    while csv_reader.read_record(&mut record)? {
        stats.rows += 1;
        match EdgeRecord::from_fields(record.iter()) {
            Some(edge) => {
                stats.edges += 1;
                if edge.is_self_loop() {
                    stats.self_loops += 1;
                }
                sink(edge);
            }
            None => stats.skipped += 1,
        }
    }

    if stats.skipped > 0 {
        debug!("Skipped {} malformed rows out of {}", stats.skipped, stats.rows);
    }
    Ok(stats)
}

/// Parses an edge list without building a graph.
pub fn read_edge_records<R: Read>(reader: R) -> GraphResult<Vec<EdgeRecord>> {
    let mut edges = Vec::new();
    for_each_edge(reader, |edge| edges.push(edge))?;
    Ok(edges)
}

pub fn load_graph_from_reader<R: Read>(reader: R) -> GraphResult<EdgeListGraph> {
    load_graph_with_stats(reader).map(|(graph, _)| graph)
}

pub fn load_graph_with_stats<R: Read>(reader: R) -> GraphResult<(EdgeListGraph, LoadStats)> {
    let mut graph = EdgeListGraph::new();
    let stats = for_each_edge(reader, |edge| {
        graph.add_record(&edge);
    })?;
    Ok((graph, stats))
}

/// Loads the edge list at `path`. Open failures are returned as `GraphError::Io`.
pub fn load_graph_from_csv<P: AsRef<Path>>(path: P) -> GraphResult<EdgeListGraph> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let (graph, stats) = load_graph_with_stats(file)?;
    info!(
        "Loaded {} ({} rows, {} edges kept, {} self-loops, {} nodes, {} distinct edges)",
        path.display(),
        stats.rows,
        stats.edges,
        stats.self_loops,
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}
