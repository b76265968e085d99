//! Toolkit identity
//!
//! Every peer belongs to exactly one native widget toolkit. The two supported
//! toolkits differ in how input events travel up the widget hierarchy.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The native widget toolkit backing a peer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Toolkit {
    /// Swing-style model: a component with attached mouse listeners stops the
    /// native event from reaching its ancestors.
    Swing,
    /// SWT-style model: native events reach ancestors on their own.
    Swt,
}

impl Toolkit {
    pub const ALL: [Toolkit; 2] = [Toolkit::Swing, Toolkit::Swt];

    /// Whether unconsumed input must be re-dispatched to the parent by hand
    pub fn requires_manual_propagation(self) -> bool {
        matches!(self, Toolkit::Swing)
    }

    pub fn name(self) -> &'static str {
        match self {
            Toolkit::Swing => "swing",
            Toolkit::Swt => "swt",
        }
    }
}

impl fmt::Display for Toolkit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
