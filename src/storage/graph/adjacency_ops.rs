use std::fmt;

use tracing::trace;

use crate::error::{GraphError, Result};

use super::{AdjacencyRecord, Graph};

impl<T> Graph<T> {
    /// Returns the adjacency record of the vertex equal to `vertex`.
    pub fn adjacency_of(&self, vertex: &T) -> Result<&AdjacencyRecord<T>> {
        self.find_position(vertex)
            .map(|pos| &self.records[pos])
            .ok_or(GraphError::VertexNotFound)
    }

    /// Returns true when `a` has an edge to `b`.
    ///
    /// Missing vertices are simply not adjacent.
    pub fn is_adjacent(&self, a: &T, b: &T) -> bool {
        let Some(src) = self.find_position(a) else {
            return false;
        };
        let Some(dst) = self.find_position(b) else {
            return false;
        };
        self.records[src].has_neighbor(self.records[dst].id)
    }

    /// Payloads of the edge targets of `vertex`, in insertion order.
    pub fn neighbors(&self, vertex: &T) -> Result<impl Iterator<Item = &T> + '_> {
        let record = self.adjacency_of(vertex)?;
        Ok(record
            .neighbors
            .iter()
            .filter_map(move |id| self.vertex(*id)))
    }

    /// Number of outgoing adjacency entries of `vertex`.
    pub fn out_degree(&self, vertex: &T) -> Result<usize> {
        self.adjacency_of(vertex).map(AdjacencyRecord::degree)
    }

    /// Writes every vertex and its adjacency list through the printer capability.
    ///
    /// A summary line with the vertex and edge counts always comes first.
    /// Without a printer capability only that line is written.
    pub fn iterate(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        writeln!(
            out,
            " - graph: (#vertices: {:3}, #edges: {:3}) ",
            self.records.len(),
            self.edge_count
        )?;
        let Some(printer) = self.caps.printer.as_ref() else {
            trace!("graph.iterate.no_printer");
            return Ok(());
        };
        for record in &self.records {
            printer.print_vertex(&record.vertex, out)?;
            for neighbor in record.neighbors.iter().filter_map(|id| self.vertex(*id)) {
                printer.print_neighbor(neighbor, out)?;
            }
            writeln!(out, "]")?;
        }
        Ok(())
    }
}

impl<T> fmt::Display for Graph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.iterate(f)
    }
}
