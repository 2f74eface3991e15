/// Node identity as written in the network description
pub type NodeId = i64;
pub type EdgeId = i64;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// A network node with the attributes carried through to the reduced network.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub shared_name: String,
    /// Display name; path tokens and declarations refer to nodes by it
    pub name: String,
    /// Functional category
    pub layer: String,
    pub excluded_from_paths: bool,
    /// `isInPath` as declared by the input file
    pub in_path: bool,
    pub selected: bool,
    pub fold_change: f64,
    pub suid: i64,
    pub prize: i64,
    pub position: Position,
    /// Set when the node lies on a detected path; only these are emitted
    pub emit: bool,
}

impl Node {
    pub fn new(id: NodeId) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }
}

/// A directed edge. Endpoints are not checked against the node set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Edge {
    pub id: EdgeId,
    pub source: NodeId,
    pub target: NodeId,
    pub shared_name: String,
    pub shared_interaction: String,
    pub name: String,
    /// Interaction type, e.g. "activation"
    pub interaction: String,
    pub in_path: bool,
    pub suid: i64,
    /// When the change along this edge was observed
    pub time: String,
    pub selected: bool,
    pub emit: bool,
}

impl Edge {
    pub fn new(id: EdgeId) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    pub fn connects(&self, from: NodeId, to: NodeId) -> bool {
        self.source == from && self.target == to
    }
}

/// One step of a path: the raw token and, after correlation, the node it names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathStep {
    pub token: String,
    pub node: Option<NodeId>,
}

/// An ordered, non-empty source-to-target traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    steps: Vec<PathStep>,
}

impl Path {
    /// Returns `None` for an empty token list.
    pub fn new<I, S>(tokens: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let steps: Vec<PathStep> = tokens
            .into_iter()
            .map(|token| PathStep {
                token: token.into(),
                node: None,
            })
            .collect();

        if steps.is_empty() {
            None
        } else {
            Some(Self { steps })
        }
    }

    pub fn steps(&self) -> &[PathStep] {
        &self.steps
    }

    pub fn steps_mut(&mut self) -> &mut [PathStep] {
        &mut self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.steps.iter().map(|s| s.token.as_str())
    }

    /// Consecutive step pairs whose nodes both resolved.
    pub fn resolved_hops(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.steps
            .windows(2)
            .filter_map(|pair| Some((pair[0].node?, pair[1].node?)))
    }
}
