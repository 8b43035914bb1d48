use serde::Serialize;

use crate::error::EdgeError;

/// An opaque state identifier. Identifiers are ordered so that deterministic
/// tie-break policies can pick the smallest one.
#[derive(Debug, Clone, Eq, Hash, PartialEq, Ord, PartialOrd, Serialize)]
pub struct StateId(String);

impl StateId {
    /// Wrap an identifier.
    pub fn new<S: Into<String>>(s: S) -> Self {
        Self(s.into())
    }

    /// The identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for StateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One endpoint of a transition.
///
/// The diagram syntax uses the same token for the start and end pseudo-state.
/// A marker is a start marker when it appears as a source and an end marker
/// when it appears as a target. It is never stored as a real state.
#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub enum Endpoint {
    /// The `[*]` pseudo-state
    Marker,
    /// A real state
    State(StateId),
}

impl Endpoint {
    /// Textual form of the start/end pseudo-state.
    pub const MARKER: &'static str = "[*]";

    fn parse(text: &str) -> Result<Self, EdgeError> {
        let text = text.trim();

        if text.is_empty() {
            Err(EdgeError::EmptyEndpoint)
        } else if text == Self::MARKER {
            Ok(Endpoint::Marker)
        } else {
            Ok(Endpoint::State(StateId::new(text)))
        }
    }
}

/// A single directed labeled edge of the diagram.
#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub struct Transition {
    from: Endpoint,
    to: Endpoint,
    label: Option<String>,
}

impl Transition {
    /// Validate one raw `(from, to, label)` triple.
    ///
    /// All fields are trimmed. Edges between two states must carry a
    /// non-empty label, edges from or to the marker may omit it. An edge
    /// that connects the marker to itself carries no information and is
    /// rejected.
    pub fn new(from: &str, to: &str, label: Option<&str>) -> Result<Self, EdgeError> {
        let from = Endpoint::parse(from)?;
        let to = Endpoint::parse(to)?;

        if from == Endpoint::Marker && to == Endpoint::Marker {
            return Err(EdgeError::MarkerToMarker);
        }

        let label = label
            .map(str::trim)
            .filter(|label| !label.is_empty())
            .map(str::to_string);

        if label.is_none() && matches!((&from, &to), (Endpoint::State(_), Endpoint::State(_))) {
            return Err(EdgeError::MissingLabel);
        }

        Ok(Self { from, to, label })
    }

    /// Source endpoint.
    pub fn from(&self) -> &Endpoint {
        &self.from
    }

    /// Target endpoint.
    pub fn to(&self) -> &Endpoint {
        &self.to
    }

    /// The regex label, if the edge carries one.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}
