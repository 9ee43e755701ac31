// SPDX-License-Identifier: MIT OR Apache-2.0

/// Default stack name used when none is configured.
pub const DEFAULT_STACK: &str = "dev";

/// Identifies the deployment that resources are registered into.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StackConfig {
    pub(crate) project: String,
    pub(crate) stack: String,
}

impl StackConfig {
    /// Default config for the given project name.
    pub fn new(project: String) -> Self {
        Self {
            project,
            stack: DEFAULT_STACK.to_string(),
        }
    }

    /// Name of the stack (e.g. `dev`, `prod`) within the project.
    pub fn with_stack(mut self, stack: String) -> Self {
        self.stack = stack;
        self
    }

    pub fn project(&self) -> &str {
        &self.project
    }

    pub fn stack(&self) -> &str {
        &self.stack
    }
}
