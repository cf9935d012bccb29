//! Expression AST nodes
//!
//! Only the surface the series helpers rely on is modeled here: a node is
//! either a metric name, a function call, or a literal.

use std::fmt;

/// A node of a parsed series expression
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Metric name or glob pattern (`servers.*.cpu`)
    Name(String),
    /// Function call (`sumSeries(a, b)`)
    Func(FuncCall),
    /// Numeric literal
    Const(f64),
    /// String literal
    String(String),
}

/// Function call node
#[derive(Debug, Clone, PartialEq)]
pub struct FuncCall {
    /// Function name
    pub target: String,
    /// Argument nodes in call order
    pub args: Vec<Expr>,
    /// Raw argument text between the parentheses, used for display names
    pub raw_args: String,
}

impl Expr {
    /// Create a metric name reference
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    /// Create a function call, rendering the raw argument text from `args`
    pub fn func(target: impl Into<String>, args: Vec<Expr>) -> Self {
        let raw_args = args
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        Self::Func(FuncCall {
            target: target.into(),
            args,
            raw_args,
        })
    }

    /// Create a function call with explicit raw argument text
    pub fn func_with_raw_args(
        target: impl Into<String>,
        args: Vec<Expr>,
        raw_args: impl Into<String>,
    ) -> Self {
        Self::Func(FuncCall {
            target: target.into(),
            args,
            raw_args: raw_args.into(),
        })
    }

    /// Create a numeric literal
    pub fn constant(value: f64) -> Self {
        Self::Const(value)
    }

    /// Create a string literal
    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    /// Whether this node references a metric by name
    pub fn is_name(&self) -> bool {
        matches!(self, Self::Name(_))
    }

    /// Whether this node is a function call
    pub fn is_func(&self) -> bool {
        matches!(self, Self::Func(_))
    }

    /// Argument nodes; empty for anything but a function call
    pub fn args(&self) -> &[Expr] {
        match self {
            Self::Func(call) => &call.args,
            _ => &[],
        }
    }

    /// Function name for calls, metric pattern for names, empty otherwise
    pub fn target(&self) -> &str {
        match self {
            Self::Func(call) => &call.target,
            Self::Name(name) => name,
            _ => "",
        }
    }

    /// Raw argument text of a function call; empty otherwise
    pub fn raw_args(&self) -> &str {
        match self {
            Self::Func(call) => &call.raw_args,
            _ => "",
        }
    }

    /// Replace the raw argument text of a function call
    ///
    /// Has no effect on non-call nodes.
    pub fn set_raw_args(&mut self, raw_args: impl Into<String>) {
        if let Self::Func(call) = self {
            call.raw_args = raw_args.into();
        }
    }

    /// Metric pattern for name references
    pub fn metric_name(&self) -> Option<&str> {
        match self {
            Self::Name(name) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => f.write_str(name),
            Self::Func(call) => write!(f, "{}({})", call.target, call.raw_args),
            Self::Const(value) => write!(f, "{value}"),
            Self::String(value) => write!(f, "'{value}'"),
        }
    }
}
