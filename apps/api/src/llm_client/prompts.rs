// Shared prompt constants.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// Formatting directive appended to every generation prompt.
/// The output is dropped into a Markdown document as-is, so the model must
/// not decorate it.
pub const STYLE_DIRECTIVE: &str = "\
    Formatting rules: do not open with a greeting. Do not add headings. \
    Separate ideas with real paragraph breaks. The text must be ready to \
    paste into a Markdown document as-is. Do not use emoji.";
