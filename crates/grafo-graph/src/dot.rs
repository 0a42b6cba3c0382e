//! Graphviz DOT output.

use std::collections::BTreeMap;
use std::io::Write;

use grafo_core::{
    DirectedEdges, GraphError, MixedConnectionType, MixedEdges, TypedConnection,
    UndirectedEdges, VertexId, VertexStore,
};

/// Attribute list rendered as `[key="value",...]`.
pub type Style = BTreeMap<String, String>;

/// Attribute callback for vertices.
pub type VertexStyleFn<'a> = &'a dyn Fn(VertexId) -> Style;

/// Attribute callback for connections.
pub type ConnectionStyleFn<'a> = &'a dyn Fn(&TypedConnection) -> Style;

/// Labels every vertex with its id.
pub fn default_vertex_style(vertex: VertexId) -> Style {
    let mut style = Style::new();
    style.insert("label".to_owned(), vertex.to_string());
    style
}

/// Empty style, except `dir="both"` on undirected connections.
pub fn default_connection_style(conn: &TypedConnection) -> Style {
    let mut style = Style::new();
    if conn.kind == MixedConnectionType::Undirected {
        style.insert("dir".to_owned(), "both".to_owned());
    }
    style
}

/// Rendering options shared by the `render_*` functions.
pub struct DotStyle<'a> {
    /// Name written after `digraph`/`graph`.
    pub name: &'a str,
    /// Vertex attributes.
    pub vertex: VertexStyleFn<'a>,
    /// Connection attributes.
    pub connection: ConnectionStyleFn<'a>,
}

impl Default for DotStyle<'_> {
    fn default() -> Self {
        Self {
            name: "messages",
            vertex: &default_vertex_style,
            connection: &default_connection_style,
        }
    }
}

/// Writes `graph` as a `digraph` block.
pub fn render_directed<G, W>(
    graph: &G,
    out: &mut W,
    style: &DotStyle<'_>,
) -> Result<(), GraphError>
where
    G: DirectedEdges + ?Sized,
    W: Write + ?Sized,
{
    writeln!(out, "digraph {} {{", style.name)?;
    write_vertices(graph, out, style)?;
    let arcs = graph
        .arcs()
        .map(|arc| TypedConnection::directed(arc.tail, arc.head));
    write_connections(arcs, "->", out, style)?;
    writeln!(out, "}}")?;
    Ok(())
}

/// Writes `graph` as a `graph` block.
pub fn render_undirected<G, W>(
    graph: &G,
    out: &mut W,
    style: &DotStyle<'_>,
) -> Result<(), GraphError>
where
    G: UndirectedEdges + ?Sized,
    W: Write + ?Sized,
{
    writeln!(out, "graph {} {{", style.name)?;
    write_vertices(graph, out, style)?;
    let edges = graph
        .edges()
        .map(|edge| TypedConnection::undirected(edge.tail, edge.head));
    write_connections(edges, "--", out, style)?;
    writeln!(out, "}}")?;
    Ok(())
}

/// Writes `graph` as a `digraph` block; edges are told apart by their style.
pub fn render_mixed<G, W>(
    graph: &G,
    out: &mut W,
    style: &DotStyle<'_>,
) -> Result<(), GraphError>
where
    G: MixedEdges + ?Sized,
    W: Write + ?Sized,
{
    writeln!(out, "digraph {} {{", style.name)?;
    write_vertices(graph, out, style)?;
    write_connections(graph.typed_connections(), "->", out, style)?;
    writeln!(out, "}}")?;
    Ok(())
}

fn write_vertices<G, W>(graph: &G, out: &mut W, style: &DotStyle<'_>) -> Result<(), GraphError>
where
    G: VertexStore + ?Sized,
    W: Write + ?Sized,
{
    for vertex in graph.vertices() {
        writeln!(out, "n{vertex}{};", attributes(&(style.vertex)(vertex)))?;
    }
    Ok(())
}

fn write_connections<W>(
    connections: impl Iterator<Item = TypedConnection>,
    separator: &str,
    out: &mut W,
    style: &DotStyle<'_>,
) -> Result<(), GraphError>
where
    W: Write + ?Sized,
{
    for conn in connections {
        let (tail, head) = match conn.kind {
            MixedConnectionType::DirectedReversed => (conn.head, conn.tail),
            _ => (conn.tail, conn.head),
        };
        let attrs = attributes(&(style.connection)(&conn));
        writeln!(out, "n{tail}{separator}n{head}{attrs};")?;
    }
    Ok(())
}

fn attributes(style: &Style) -> String {
    let chunks: Vec<String> = style
        .iter()
        .map(|(key, value)| format!("{key}=\"{}\"", value.replace('"', "\\\"")))
        .collect();
    format!("[{}]", chunks.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attributes_are_sorted_and_quoted() {
        let mut style = Style::new();
        style.insert("label".into(), "say \"hi\"".into());
        style.insert("color".into(), "red".into());
        assert_eq!(attributes(&style), r#"[color="red",label="say \"hi\""]"#);
        assert_eq!(attributes(&Style::new()), "[]");
    }
}
