//! Logging and debugging facilities for MultiCheck.
//!
//! This module provides:
//! - Target and span names used with the `tracing` crate
//! - [`DebugTree`], a small tree visualizer for dumping control state
//! - [`PerfSpan`], a guard for timing operations
//!
//! # Tracing Integration
//!
//! MultiCheck uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt::init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! Filter by subsystem with the constants in [`targets`], for example
//! `RUST_LOG=multicheck::selection=debug`.

use std::fmt;

/// Span names used throughout MultiCheck for tracing.
pub mod span_names {
    /// Signal emission span.
    pub const SIGNAL: &str = "multicheck::signal";
    /// Column layout computation span.
    pub const LAYOUT: &str = "multicheck::layout";
    /// Text rendering span.
    pub const RENDER: &str = "multicheck::render";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "multicheck_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "multicheck_core::signal";
    /// Selection engine target.
    pub const SELECTION: &str = "multicheck::selection";
    /// Column layout target.
    pub const LAYOUT: &str = "multicheck::layout";
    /// Change notifier target.
    pub const NOTIFIER: &str = "multicheck::notifier";
    /// Construction props loading target.
    pub const PROPS: &str = "multicheck::props";
    /// Performance spans target.
    pub const PERF: &str = "multicheck::perf";
}

/// Style options for tree visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeStyle {
    /// ASCII characters for tree branches.
    Ascii,
    /// Unicode box-drawing characters.
    #[default]
    Unicode,
    /// Indentation with a dash marker per node.
    Compact,
}

/// Configuration for [`DebugTree`] output.
#[derive(Debug, Clone)]
pub struct TreeFormatOptions {
    /// The style of tree visualization.
    pub style: TreeStyle,
    /// Whether to append node details in parentheses.
    pub show_details: bool,
    /// Width of the horizontal connector for each level.
    pub indent_size: usize,
}

impl Default for TreeFormatOptions {
    fn default() -> Self {
        Self {
            style: TreeStyle::default(),
            show_details: true,
            indent_size: 2,
        }
    }
}

impl TreeFormatOptions {
    /// Set the style using builder pattern.
    pub fn with_style(mut self, style: TreeStyle) -> Self {
        self.style = style;
        self
    }
}

/// A labeled tree used to visualize control state.
///
/// ```
/// use multicheck_core::logging::{DebugTree, TreeFormatOptions};
///
/// let tree = DebugTree::new("root")
///     .with_child(DebugTree::new("a"))
///     .with_child(DebugTree::new("b").with_detail("last"));
///
/// assert_eq!(
///     tree.format(&TreeFormatOptions::default()),
///     "root\n├── a\n└── b (last)\n"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugTree {
    label: String,
    detail: Option<String>,
    children: Vec<DebugTree>,
}

impl DebugTree {
    /// Create a leaf node.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            detail: None,
            children: Vec::new(),
        }
    }

    /// Attach a detail string shown when `show_details` is enabled.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Append a child using builder pattern.
    pub fn with_child(mut self, child: DebugTree) -> Self {
        self.children.push(child);
        self
    }

    /// Append a child.
    pub fn push(&mut self, child: DebugTree) {
        self.children.push(child);
    }

    /// The node label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The node children.
    pub fn children(&self) -> &[DebugTree] {
        &self.children
    }

    /// Format the tree with the given options.
    pub fn format(&self, options: &TreeFormatOptions) -> String {
        let mut output = String::new();
        self.format_into(options, 0, "", true, &mut output);
        output
    }

    fn format_into(
        &self,
        options: &TreeFormatOptions,
        depth: usize,
        ancestors: &str,
        is_last: bool,
        output: &mut String,
    ) {
        if depth > 0 {
            output.push_str(ancestors);
            output.push_str(&connector(options, is_last));
        }
        output.push_str(&self.label);
        if options.show_details {
            if let Some(detail) = &self.detail {
                output.push_str(&format!(" ({detail})"));
            }
        }
        output.push('\n');

        let child_ancestors = if depth == 0 {
            String::new()
        } else {
            format!("{ancestors}{}", continuation(options, is_last))
        };

        let child_count = self.children.len();
        for (i, child) in self.children.iter().enumerate() {
            child.format_into(options, depth + 1, &child_ancestors, i + 1 == child_count, output);
        }
    }
}

impl fmt::Display for DebugTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(&TreeFormatOptions::default()))
    }
}

/// The connector drawn in front of a node.
fn connector(options: &TreeFormatOptions, is_last: bool) -> String {
    let (corner, last_corner, line) = match options.style {
        TreeStyle::Ascii => ("+", "`", "-"),
        TreeStyle::Unicode => ("\u{251c}", "\u{2514}", "\u{2500}"),
        TreeStyle::Compact => return "- ".to_string(),
    };
    let mut s = String::from(if is_last { last_corner } else { corner });
    s.push_str(&line.repeat(options.indent_size));
    s.push(' ');
    s
}

/// The prefix contributed by an ancestor to the lines below it.
fn continuation(options: &TreeFormatOptions, is_last: bool) -> String {
    let branch = match options.style {
        TreeStyle::Ascii => "|",
        TreeStyle::Unicode => "\u{2502}",
        TreeStyle::Compact => return " ".repeat(options.indent_size),
    };
    let padding = " ".repeat(options.indent_size + 1);
    if is_last {
        format!(" {padding}")
    } else {
        format!("{branch}{padding}")
    }
}

/// A guard that keeps a tracing span entered until dropped.
///
/// This is useful for tracking the duration of operations.
#[derive(Debug)]
pub struct PerfSpan {
    _span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: "multicheck::perf", "perf", operation = name);
        Self {
            _span: span.entered(),
        }
    }
}
