//! GraphML writer

use crate::Result;
use crate::graph::SiaGraph;
use quick_xml::escape::escape;
use std::io::Write;

const HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<graphml xmlns="http://graphml.graphdrawing.org/xmlns"
         xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
         xsi:schemaLocation="http://graphml.graphdrawing.org/xmlns http://graphml.graphdrawing.org/xmlns/1.0/graphml.xsd">"#;

/// Attribute keys as `(id, domain, name)`
const KEYS: [(&str, &str, &str); 5] = [
    ("g_name", "graph", "name"),
    ("v_label", "node", "label"),
    ("e_action", "edge", "action"),
    ("e_mode", "edge", "mode"),
    ("e_label", "edge", "label"),
];

pub fn write(w: &mut impl Write, graph: &SiaGraph) -> Result<()> {
    writeln!(w, "{}", HEADER)?;
    for (id, domain, name) in KEYS {
        writeln!(
            w,
            r#"  <key id="{}" for="{}" attr.name="{}" attr.type="string"/>"#,
            id, domain, name
        )?;
    }

    writeln!(w, r#"  <graph id="G" edgedefault="directed">"#)?;
    writeln!(w, r#"    <data key="g_name">{}</data>"#, escape(&graph.name))?;

    for (id, state) in graph.states() {
        writeln!(w, r#"    <node id="n{}">"#, id)?;
        writeln!(w, r#"      <data key="v_label">{}</data>"#, escape(&state.label))?;
        writeln!(w, "    </node>")?;
    }

    for (id, (source, target, edge)) in graph.transitions().enumerate() {
        writeln!(
            w,
            r#"    <edge id="e{}" source="n{}" target="n{}">"#,
            id, source, target
        )?;
        writeln!(w, r#"      <data key="e_action">{}</data>"#, escape(&edge.action))?;
        writeln!(
            w,
            r#"      <data key="e_mode">{}</data>"#,
            escape(&edge.mode.to_string())
        )?;
        writeln!(w, r#"      <data key="e_label">{}</data>"#, escape(&edge.label))?;
        writeln!(w, "    </edge>")?;
    }

    writeln!(w, "  </graph>")?;
    writeln!(w, "</graphml>")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::TransitionEdge;
    use crate::model::Mode;

    fn sample_graph() -> SiaGraph {
        let mut graph = SiaGraph::new("Handshake");
        let a = graph.add_state("A");
        let b = graph.add_state("B");
        graph.add_transition(b, a, TransitionEdge::new("t1", Mode('!')));
        graph
    }

    #[test]
    fn test_nodes_and_edges() {
        let mut out = Vec::new();
        write(&mut out, &sample_graph()).unwrap();
        let xml = String::from_utf8(out).unwrap();

        assert!(xml.starts_with("<?xml"));
        assert!(xml.contains(r#"<key id="e_mode" for="edge" attr.name="mode" attr.type="string"/>"#));
        assert!(xml.contains(r#"<graph id="G" edgedefault="directed">"#));
        assert!(xml.contains(r#"<data key="g_name">Handshake</data>"#));
        assert!(xml.contains(r#"<node id="n0">"#));
        assert!(xml.contains(r#"<data key="v_label">B</data>"#));
        assert!(xml.contains(r#"<edge id="e0" source="n1" target="n0">"#));
        assert!(xml.contains(r#"<data key="e_label">t1!</data>"#));
        assert!(xml.trim_end().ends_with("</graphml>"));
    }

    #[test]
    fn test_escaping() {
        assert_eq!(escape("a<b>&\"c'"), "a&lt;b&gt;&amp;&quot;c&apos;");

        let mut graph = SiaGraph::new("P&Q");
        graph.add_state("s");
        let mut out = Vec::new();
        write(&mut out, &graph).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("P&amp;Q"));
    }
}
