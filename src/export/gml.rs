//! GML (Graph Modelling Language) writer

use crate::graph::SiaGraph;
use crate::{NAME, Result, VERSION};
use std::io::Write;

pub fn write(w: &mut impl Write, graph: &SiaGraph) -> Result<()> {
    writeln!(w, "Creator \"{} {}\"", NAME, VERSION)?;
    writeln!(w, "graph")?;
    writeln!(w, "[")?;
    writeln!(w, "  directed 1")?;
    writeln!(w, "  name {}", quote(&graph.name))?;

    for (id, state) in graph.states() {
        writeln!(w, "  node")?;
        writeln!(w, "  [")?;
        writeln!(w, "    id {}", id)?;
        writeln!(w, "    label {}", quote(&state.label))?;
        writeln!(w, "  ]")?;
    }

    for (source, target, edge) in graph.transitions() {
        writeln!(w, "  edge")?;
        writeln!(w, "  [")?;
        writeln!(w, "    source {}", source)?;
        writeln!(w, "    target {}", target)?;
        writeln!(w, "    action {}", quote(&edge.action))?;
        writeln!(w, "    mode {}", quote(&edge.mode.to_string()))?;
        writeln!(w, "    label {}", quote(&edge.label))?;
        writeln!(w, "  ]")?;
    }

    writeln!(w, "]")?;
    Ok(())
}

/// GML strings cannot contain a raw `"`, entities are used instead
fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('&', "&amp;").replace('"', "&quot;"))
}
