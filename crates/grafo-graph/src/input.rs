//! Line-format reader.
//!
//! Each line is a chain of vertex ids. Directed lines join ids with `>`,
//! undirected lines with `-`, and mixed lines may use both: inside a `-`
//! separated segment the ids after the first are joined by arcs, while
//! the first id of a segment is joined to the previous vertex by an edge.
//! In directed and undirected lines, blanks between ids act as the
//! delimiter. Text after `#` is ignored. A line holding a single id adds
//! that vertex if it is missing.

use std::io::BufRead;

use grafo_core::{
    DirectedEdgesWriter, GraphError, MixedEdgesWriter, UndirectedEdgesWriter, VertexId,
    VertexWriter,
};
use log::trace;

/// Parses one line of directed input into `graph`.
pub fn read_directed_line<D>(graph: &mut D, line: &str) -> Result<(), GraphError>
where
    D: DirectedEdgesWriter + ?Sized,
{
    read_chain(graph, line, '>', |graph, tail, head| graph.add_arc(tail, head))
        .map_err(|err| wrap(err, "parsing graph arcs from line", line))
}

/// Parses one line of undirected input into `graph`.
pub fn read_undirected_line<D>(graph: &mut D, line: &str) -> Result<(), GraphError>
where
    D: UndirectedEdgesWriter + ?Sized,
{
    read_chain(graph, line, '-', |graph, a, b| graph.add_edge(a, b))
        .map_err(|err| wrap(err, "parsing graph edges from line", line))
}

/// Parses one line of mixed input into `graph`.
pub fn read_mixed_line<D>(graph: &mut D, line: &str) -> Result<(), GraphError>
where
    D: MixedEdgesWriter + ?Sized,
{
    read_mixed_chain(graph, line)
        .map_err(|err| wrap(err, "parsing graph arcs and edges from line", line))
}

/// Reads every line of `reader` as directed input.
pub fn read_directed<R, D>(reader: R, graph: &mut D) -> Result<(), GraphError>
where
    R: BufRead,
    D: DirectedEdgesWriter + ?Sized,
{
    for_each_line(reader, |line| read_directed_line(graph, line))
}

/// Reads every line of `reader` as undirected input.
pub fn read_undirected<R, D>(reader: R, graph: &mut D) -> Result<(), GraphError>
where
    R: BufRead,
    D: UndirectedEdgesWriter + ?Sized,
{
    for_each_line(reader, |line| read_undirected_line(graph, line))
}

/// Reads every line of `reader` as mixed input.
pub fn read_mixed<R, D>(reader: R, graph: &mut D) -> Result<(), GraphError>
where
    R: BufRead,
    D: MixedEdgesWriter + ?Sized,
{
    for_each_line(reader, |line| read_mixed_line(graph, line))
}

fn for_each_line<R, F>(reader: R, mut parse: F) -> Result<(), GraphError>
where
    R: BufRead,
    F: FnMut(&str) -> Result<(), GraphError>,
{
    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = line
            .map_err(|err| GraphError::from(err).with_context("line_number", line_number))?;
        parse(&line).map_err(|err| err.with_context("line_number", line_number))?;
    }
    Ok(())
}

fn wrap(err: GraphError, message: &str, line: &str) -> GraphError {
    GraphError::parse_caused_by(message, err).with_context("line", line.trim_end())
}

// Strips the comment and surrounding blanks.
fn content(line: &str) -> &str {
    let line = match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    };
    line.trim()
}

fn parse_vertex(chunk: &str) -> Result<VertexId, GraphError> {
    let chunk = chunk.trim();
    chunk.parse::<u64>().map(VertexId::from_raw).map_err(|err| {
        GraphError::parse("can't parse vertex id")
            .with_context("chunk", chunk)
            .with_context("reason", err)
    })
}

// A lone id registers an isolated vertex. Returns `true` when the line was one.
fn read_bare_vertex<D: VertexWriter + ?Sized>(
    graph: &mut D,
    line: &str,
) -> Result<bool, GraphError> {
    if line.is_empty() || !line.bytes().all(|byte| byte.is_ascii_digit()) {
        return Ok(false);
    }
    let vertex = parse_vertex(line)?;
    if !graph.check_vertex(vertex) {
        graph.add_vertex(vertex)?;
    }
    Ok(true)
}

fn read_chain<D, F>(
    graph: &mut D,
    line: &str,
    delimiter: char,
    mut connect: F,
) -> Result<(), GraphError>
where
    D: VertexWriter + ?Sized,
    F: FnMut(&mut D, VertexId, VertexId) -> Result<(), GraphError>,
{
    let line = content(line);
    if line.is_empty() || read_bare_vertex(graph, line)? {
        return Ok(());
    }

    let mut previous: Option<VertexId> = None;
    for chunk in line
        .split(delimiter)
        .flat_map(split_blanks)
    {
        let vertex = parse_vertex(chunk)?;
        if let Some(tail) = previous {
            trace!("line connects {tail}{delimiter}{vertex}");
            connect(graph, tail, vertex)?;
        }
        previous = Some(vertex);
    }
    Ok(())
}

// Blanks between two ids stand in for the delimiter. A part that is empty or
// all blanks is kept as one chunk so that `1--2` still fails to parse.
fn split_blanks(part: &str) -> Vec<&str> {
    let pieces: Vec<&str> = part.split_whitespace().collect();
    if pieces.is_empty() {
        vec![part]
    } else {
        pieces
    }
}

fn read_mixed_chain<D>(graph: &mut D, line: &str) -> Result<(), GraphError>
where
    D: MixedEdgesWriter + ?Sized,
{
    let line = content(line);
    if line.is_empty() || read_bare_vertex(graph, line)? {
        return Ok(());
    }

    let mut previous: Option<VertexId> = None;
    for segment in line.split('-') {
        for (index, chunk) in segment.split('>').enumerate() {
            let vertex = parse_vertex(chunk)?;
            if let Some(tail) = previous {
                if index == 0 {
                    graph.add_edge(tail, vertex)?;
                } else {
                    graph.add_arc(tail, vertex)?;
                }
            }
            previous = Some(vertex);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_strips_comments_and_blanks() {
        assert_eq!(content("  1>2 # note\n"), "1>2");
        assert_eq!(content("# only a comment"), "");
        assert_eq!(content("\t\n"), "");
    }

    #[test]
    fn blanks_split_into_ids() {
        assert_eq!(split_blanks(" 1  2 "), vec!["1", "2"]);
        assert_eq!(split_blanks(""), vec![""]);
    }

    #[test]
    fn parse_vertex_reports_chunk() {
        let err = parse_vertex(" x7 ").unwrap_err();
        assert_eq!(err.info().context.get("chunk").map(String::as_str), Some("x7"));
    }
}
