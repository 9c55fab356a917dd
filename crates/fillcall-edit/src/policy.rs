use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Independent, composable flags controlling synthesis and formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[schemars(deny_unknown_fields)]
pub struct EditPolicy {
    /// Synthesize bare named slots (`name = `) instead of placeholder values.
    #[serde(default)]
    pub omit_default_values: bool,

    /// Skip parameters that declare a default value.
    #[serde(default)]
    pub skip_parameters_with_defaults: bool,

    /// Terminate non-empty argument lists with a trailing comma.
    #[serde(default)]
    pub append_trailing_comma: bool,

    /// Put each argument of a non-empty list on its own line.
    #[serde(default = "default_one_argument_per_line")]
    pub one_argument_per_line: bool,

    /// Register a caret stop per synthesized argument after the edit.
    ///
    /// Only honored in interactive contexts; batch applications never
    /// produce caret regions.
    #[serde(default)]
    pub cycle_placeholders_after_edit: bool,
}

fn default_one_argument_per_line() -> bool {
    true
}

impl Default for EditPolicy {
    fn default() -> Self {
        Self {
            omit_default_values: false,
            skip_parameters_with_defaults: false,
            append_trailing_comma: false,
            one_argument_per_line: true,
            cycle_placeholders_after_edit: false,
        }
    }
}
