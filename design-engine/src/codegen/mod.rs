//! Code generation from extracted styles.
//!
//! - [`markup`]: plain inline-styled HTML, driven by a [`StyleRecord`](crate::style::StyleRecord)
//! - [`react`]: a parameterized React button component, driven by the raw node

pub mod markup;
pub mod react;

use serde::{Deserialize, Serialize};

pub use markup::{render_markup, render_markup_document};
pub use react::{GeneratedComponent, component_identifier, render_react_component};

/// Output flavour requested by callers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeTarget {
    #[default]
    Html,
    #[serde(alias = "tsx", alias = "jsx")]
    React,
}

impl CodeTarget {
    pub fn as_str(self) -> &'static str {
        match self {
            CodeTarget::Html => "html",
            CodeTarget::React => "react",
        }
    }
}

impl std::fmt::Display for CodeTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CodeTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "html" => Ok(CodeTarget::Html),
            "react" | "tsx" | "jsx" => Ok(CodeTarget::React),
            other => Err(format!("unsupported target `{other}` (expected html or react)")),
        }
    }
}
