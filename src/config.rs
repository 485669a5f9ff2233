//! Options controlling how a run is traced and rendered.

use crate::engine::Scope;

/// Output flavour for matrices and explanations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Style {
    #[default]
    Plain,
    Latex,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TraceConfig {
    pub style: Style,
    /// Drop steps whose matrix equals the previously printed one.
    pub skip_unchanged: bool,
    pub scope: Scope,
    /// Append the solution summary after the trace.
    pub show_solution: bool,
}

impl TraceConfig {
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_skip_unchanged(mut self, skip: bool) -> Self {
        self.skip_unchanged = skip;
        self
    }

    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }

    pub fn with_solution(mut self, show: bool) -> Self {
        self.show_solution = show;
        self
    }
}
