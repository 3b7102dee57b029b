//! Single check commands - elem-attr, nested-attrs and attr-pair.

use setmatch::{Check, check};

use crate::cli::{AttrPairArgs, ElemAttrArgs, NestedAttrsArgs};
use crate::commands::load_state;
use crate::output::{OutputFormat, print_outcomes};

impl From<&ElemAttrArgs> for Check {
    fn from(args: &ElemAttrArgs) -> Self {
        Check::ElemAttr {
            resource: args.resource.clone(),
            attr: args.attr.clone(),
            value: args.value.clone(),
        }
    }
}

impl From<&NestedAttrsArgs> for Check {
    fn from(args: &NestedAttrsArgs) -> Self {
        Check::ElemNestedAttrs {
            resource: args.resource.clone(),
            attr: args.attr.clone(),
            values: args.values.iter().cloned().collect(),
        }
    }
}

impl From<&AttrPairArgs> for Check {
    fn from(args: &AttrPairArgs) -> Self {
        Check::ElemAttrPair {
            first: args.first.clone(),
            first_key: args.first_key.clone(),
            second: args.second.clone(),
            second_key: args.second_key.clone(),
        }
    }
}

/// Run a single check, returning whether it passed
pub fn run(
    state_path: &std::path::Path,
    check: Check,
    format: OutputFormat,
) -> Result<bool, Box<dyn std::error::Error>> {
    let state = load_state(state_path)?;
    let outcomes = check::run_all(std::slice::from_ref(&check), &state);
    print_outcomes(&outcomes, format)?;
    Ok(outcomes.iter().all(|o| o.passed))
}
