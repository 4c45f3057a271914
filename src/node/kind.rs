use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a node participates in execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    /// A leaf step that is directly executable.
    Terminal,
    /// A directly executable step whose children are scheduled as well.
    NonTerminal,
    /// A leaf that carries information but is never scheduled.
    TerminalNonExecutable,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Terminal => "Terminal",
            NodeKind::NonTerminal => "NonTerminal",
            NodeKind::TerminalNonExecutable => "TerminalNonExecutable",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a node-kind string is none of the three known tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownNodeKind(pub String);

impl FromStr for NodeKind {
    type Err = UnknownNodeKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            NodeKind::Terminal,
            NodeKind::NonTerminal,
            NodeKind::TerminalNonExecutable,
        ]
        .into_iter()
        .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
        .ok_or_else(|| UnknownNodeKind(s.to_string()))
    }
}

/// What a node means. Three identifiers are reserved and override scheduling;
/// everything else names a concrete executable operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperationKind {
    /// `type` marker, a metadata/config value. Also carries the redirect directive.
    Type,
    /// `validate` marker, an assertion block.
    Validate,
    /// `follow_redirect` directive node.
    FollowRedirect,
    /// Any other operation, name kept as authored.
    Operation(String),
}

impl OperationKind {
    pub const TYPE: &'static str = "type";
    pub const VALIDATE: &'static str = "validate";
    pub const FOLLOW_REDIRECT: &'static str = "follow_redirect";

    /// Classifies an operation identifier, matching reserved names case-insensitively.
    pub fn parse(name: &str) -> Self {
        if name.eq_ignore_ascii_case(Self::TYPE) {
            OperationKind::Type
        } else if name.eq_ignore_ascii_case(Self::VALIDATE) {
            OperationKind::Validate
        } else if name.eq_ignore_ascii_case(Self::FOLLOW_REDIRECT) {
            OperationKind::FollowRedirect
        } else {
            OperationKind::Operation(name.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            OperationKind::Type => Self::TYPE,
            OperationKind::Validate => Self::VALIDATE,
            OperationKind::FollowRedirect => Self::FOLLOW_REDIRECT,
            OperationKind::Operation(name) => name,
        }
    }

    /// True for the three reserved structural identifiers.
    pub fn is_reserved(&self) -> bool {
        !matches!(self, OperationKind::Operation(_))
    }
}

impl From<&str> for OperationKind {
    fn from(name: &str) -> Self {
        OperationKind::parse(name)
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
