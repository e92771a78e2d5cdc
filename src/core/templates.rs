//! Template system for the text shown on screen and after dispatch.
//!
//! Templates are plain strings with `{placeholder}` markers that are filled in a
//! single pass. Substituted values are inserted literally and never re-scanned, so a
//! commit message containing braces renders unchanged.
//!
//! # Public API
//! - [`Templates`]: Template definitions for every rendered line
//! - [`TemplateContext`]: Values available to templates
//! - [`TEMPLATES`]: Global template instance
//! - [`render_template`]: Fill a template from a context

use std::fmt::Write;

/// Template definitions for all text output
pub struct Templates {
    // Header templates
    pub header_branch: &'static str,
    pub command_preview: &'static str,

    // Pre-filled field values
    pub commit_prefill: &'static str,

    // Messages printed after dispatch
    pub success_branch: &'static str,
    pub success_commit: &'static str,
}

/// Global templates instance
pub static TEMPLATES: Templates = Templates {
    header_branch: "Branch: {branch_name}",
    command_preview: "git commit -m \"{message}\" {flags}",
    commit_prefill: "[{branch_type}] [{ticket_id}] ",
    success_branch: "Created and switched to branch '{branch_name}'",
    success_commit: "Committed {n} staged file(s)",
};

/// Context for template rendering
#[derive(Debug, Default)]
pub struct TemplateContext<'a> {
    pub branch_name: Option<&'a str>,
    pub branch_type: Option<&'a str>,
    pub ticket_id: Option<&'a str>,
    pub message: Option<&'a str>,
    pub flags: Option<&'a str>,
    pub n: Option<usize>,
}

/// Render a template with context
pub fn render_template(template: &str, context: &TemplateContext) -> String {
    let estimated_capacity = template.len()
        + context.branch_name.map_or(0, str::len)
        + context.branch_type.map_or(0, str::len)
        + context.ticket_id.map_or(0, str::len)
        + context.message.map_or(0, str::len)
        + context.flags.map_or(0, str::len)
        + context.n.map_or(0, |_| 4);

    let mut result = String::with_capacity(estimated_capacity);
    render_template_single_pass(template, context, &mut result);
    result
}

fn render_template_single_pass(template: &str, context: &TemplateContext, output: &mut String) {
    let mut chars = template.chars();

    while let Some(ch) = chars.next() {
        if ch != '{' {
            output.push(ch);
            continue;
        }

        let mut placeholder = String::new();
        let mut found_closing = false;
        for next_ch in chars.by_ref() {
            if next_ch == '}' {
                found_closing = true;
                break;
            }
            placeholder.push(next_ch);
        }

        if !found_closing {
            // No closing brace, treat as literal
            output.push(ch);
            output.push_str(&placeholder);
            continue;
        }

        let value = match placeholder.as_str() {
            "branch_name" => context.branch_name,
            "branch_type" => context.branch_type,
            "ticket_id" => context.ticket_id,
            "message" => context.message,
            "flags" => context.flags,
            "n" => {
                if let Some(n) = context.n {
                    let _ = write!(output, "{n}");
                }
                continue;
            }
            _ => {
                // Unknown placeholder, keep as-is
                output.push('{');
                output.push_str(&placeholder);
                output.push('}');
                continue;
            }
        };

        if let Some(value) = value {
            output.push_str(value);
        }
    }
}
