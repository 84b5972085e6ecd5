use crate::StrError;
use serde::{Deserialize, Serialize};

/// Defines the available 2D triangular element kinds
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
pub enum ElemKind {
    /// Linear triangle with 3 corner nodes
    Tri3,

    /// Quadratic triangle with 3 corner nodes and 3 mid-edge nodes
    Tri6,
}

impl ElemKind {
    /// Returns the total number of nodes
    pub fn nnode(&self) -> usize {
        match self {
            ElemKind::Tri3 => 3,
            ElemKind::Tri6 => 6,
        }
    }

    /// Returns the string identifier of the element kind
    ///
    /// ```
    /// use femprep::base::ElemKind;
    /// assert_eq!(ElemKind::Tri3.to_str(), "D2_nn3_tri");
    /// ```
    pub fn to_str(&self) -> &'static str {
        match self {
            ElemKind::Tri3 => "D2_nn3_tri",
            ElemKind::Tri6 => "D2_nn6_tri",
        }
    }

    /// Parses the string identifier of an element kind
    pub fn from_str(kind: &str) -> Result<ElemKind, StrError> {
        match kind {
            "D2_nn3_tri" => Ok(ElemKind::Tri3),
            "D2_nn6_tri" => Ok(ElemKind::Tri6),
            _ => Err("element kind is not available"),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
