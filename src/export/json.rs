//! JSON writer

use crate::Result;
use crate::graph::SiaGraph;
use serde_json::json;
use std::io::Write;

pub fn write(w: &mut impl Write, graph: &SiaGraph) -> Result<()> {
    let output = json!({
        "name": graph.name,
        "directed": true,
        "nodes": graph.states().map(|(id, state)| {
            json!({
                "id": id,
                "label": state.label,
            })
        }).collect::<Vec<_>>(),
        "edges": graph.transitions().map(|(source, target, edge)| {
            json!({
                "source": source,
                "target": target,
                "action": edge.action,
                "mode": edge.mode,
                "label": edge.label,
            })
        }).collect::<Vec<_>>(),
    });

    serde_json::to_writer_pretty(&mut *w, &output)?;
    writeln!(w)?;
    Ok(())
}
