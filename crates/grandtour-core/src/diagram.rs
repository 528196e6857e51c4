//! Architecture overview shown by the diagram view.
//!
//! This is a hand-written, illustrative dataset. It is not derived from the
//! code and nothing inspects the source tree at runtime.

use serde::Serialize;

/// Label shown next to every rendering of the dataset.
pub const ILLUSTRATIVE_NOTICE: &str =
    "Illustrative overview, maintained by hand. Not generated from the code.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Layer {
    Shell,
    Core,
    Views,
    Data,
}

impl Layer {
    pub fn all() -> &'static [Layer] {
        &[Layer::Shell, Layer::Core, Layer::Views, Layer::Data]
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Layer::Shell => "Shell",
            Layer::Core => "Navigation core",
            Layer::Views => "View collaborators",
            Layer::Data => "Static data",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Node {
    pub id: &'static str,
    pub label: &'static str,
    pub layer: Layer,
    pub summary: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub from: &'static str,
    pub to: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Diagram {
    pub notice: &'static str,
    pub nodes: &'static [Node],
    pub edges: &'static [Edge],
}

const fn node(id: &'static str, label: &'static str, layer: Layer, summary: &'static str) -> Node {
    Node {
        id,
        label,
        layer,
        summary,
    }
}

const fn edge(from: &'static str, to: &'static str, label: &'static str) -> Edge {
    Edge { from, to, label }
}

static NODES: &[Node] = &[
    node("cli", "grandtour CLI", Layer::Shell, "argument parsing, config, logging"),
    node("tui", "Terminal runtime", Layer::Shell, "event loop, reducer, error boundary"),
    node("controller", "NavigationController", Layer::Core, "owns view, session, login flow"),
    node("router", "RoleRouter", Layer::Core, "role to home view, sentinel for unknown"),
    node("registry", "ViewRegistry", Layer::Core, "view to collaborator and props"),
    node("login", "Login flow", Layer::Core, "credentials, role, 6-digit code"),
    node("landing", "Landing page", Layer::Views, "offers, sign-in entry point"),
    node("portals", "Role portals", Layer::Views, "six dashboards sharing one contract"),
    node("diagram", "Architecture view", Layer::Views, "this overview"),
    node("content", "Portal showcase", Layer::Data, "mock tiles per portal"),
];

static EDGES: &[Edge] = &[
    edge("cli", "tui", "starts"),
    edge("tui", "controller", "dispatches commands"),
    edge("tui", "registry", "looks up collaborator"),
    edge("controller", "router", "resolves role"),
    edge("controller", "registry", "checks guards"),
    edge("controller", "login", "drives steps"),
    edge("registry", "landing", "describes"),
    edge("registry", "portals", "describes"),
    edge("registry", "diagram", "describes"),
    edge("portals", "content", "reads"),
];

static DIAGRAM: Diagram = Diagram {
    notice: ILLUSTRATIVE_NOTICE,
    nodes: NODES,
    edges: EDGES,
};

pub fn architecture() -> &'static Diagram {
    &DIAGRAM
}

impl Diagram {
    pub fn node(&self, id: &str) -> Option<&'static Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn nodes_in(&self, layer: Layer) -> impl Iterator<Item = &'static Node> {
        self.nodes.iter().filter(move |n| n.layer == layer)
    }

    pub fn edges_from(&self, id: &str) -> impl Iterator<Item = &'static Edge> {
        self.edges.iter().filter(move |e| e.from == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_reference_known_nodes() {
        let diagram = architecture();
        for edge in diagram.edges {
            assert!(diagram.node(edge.from).is_some(), "{}", edge.from);
            assert!(diagram.node(edge.to).is_some(), "{}", edge.to);
        }
    }

    #[test]
    fn test_every_layer_is_populated() {
        let diagram = architecture();
        for layer in Layer::all() {
            assert!(diagram.nodes_in(*layer).next().is_some(), "{layer:?}");
        }
    }

    #[test]
    fn test_notice_is_present() {
        assert!(architecture().notice.contains("Illustrative"));
    }
}
