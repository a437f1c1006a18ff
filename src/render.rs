//! HTML fragments written as the output of a run

use std::fs;
use std::io;
use std::path::Path;

const ERROR_FRAGMENT: &str = r#"
        <div style="display:flex;flex-direction:column;gap:0.5rem;">
            <h2 style="font-weight:bold;">Lexicalized Table</h2>
            <div style="padding:0.5rem;border: 1px solid red;">
                <p style="color:red;">
                    Please provide all the necessary inputs and variables in .env to execute the mantistablex plugin
                </p>
            </div>
        </div>
        "#;

/// A rendered HTML fragment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment(String);

impl Fragment {
    /// The generic "missing inputs" fragment
    pub fn error() -> Self {
        Fragment(ERROR_FRAGMENT.to_string())
    }

    /// Fragment embedding a generated description
    pub fn success(description: &str) -> Self {
        Fragment(format!(
            r#"
<div style="display:flex;flex-direction:column;gap:0.5rem;">
    <h2 style="font-weight:bold;">Lexicalized Table</h2>
    <div style="padding:0.5rem;border: 1px solid #4CAF50;">
        <p>
            {}
        </p>
    </div>
</div>
"#,
            description
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Write the fragment, replacing any previous output
    pub fn write_to(&self, path: &Path) -> io::Result<()> {
        fs::write(path, &self.0)
    }
}
