mod format;
mod json;
mod table;

pub(crate) use json::{outcomes_json, template_json, tokens_json};
pub(crate) use table::{print_outcomes, render_template_table, render_token_table};
