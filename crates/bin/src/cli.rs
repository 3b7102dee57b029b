//! CLI argument definitions for the setmatch binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

/// Check set elements in flattened resource state
#[derive(Parser, Debug)]
#[command(name = "setmatch")]
#[command(about = "setmatch: find elements of unordered sets in flattened resource state")]
#[command(version)]
pub struct Cli {
    /// State file (JSON) to check against
    #[arg(short, long, env = "SETMATCH_STATE")]
    pub state: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "human", env = "SETMATCH_FORMAT")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check that a set of scalars contains a value
    ElemAttr(ElemAttrArgs),
    /// Check that a set of objects contains an element with the given attributes
    NestedAttrs(NestedAttrsArgs),
    /// Check that a set contains the value of an attribute of another resource
    AttrPair(AttrPairArgs),
    /// Run every check listed in a JSON file
    Run(RunArgs),
    /// List resources in the state file
    Resources,
}

/// Arguments for the elem-attr command
#[derive(clap::Args, Debug)]
pub struct ElemAttrArgs {
    /// Resource name, e.g. aws_instance.web
    pub resource: String,
    /// Attribute pattern ending in `*`, e.g. availability_zones.*
    pub attr: String,
    /// Expected element value
    pub value: String,
}

/// Arguments for the nested-attrs command
#[derive(clap::Args, Debug)]
pub struct NestedAttrsArgs {
    /// Resource name
    pub resource: String,
    /// Attribute pattern ending in `*`, e.g. ingress.*
    pub attr: String,
    /// Expected nested attributes as KEY=VALUE; an empty VALUE is not checked
    #[arg(required = true, value_parser = parse_key_val)]
    pub values: Vec<(String, String)>,
}

/// Arguments for the attr-pair command
#[derive(clap::Args, Debug)]
pub struct AttrPairArgs {
    /// Resource holding the set
    pub first: String,
    /// Attribute pattern ending in `*` in the first resource
    pub first_key: String,
    /// Resource holding the value
    pub second: String,
    /// Exact attribute key in the second resource
    pub second_key: String,
}

/// Arguments for the run command
#[derive(clap::Args, Debug)]
pub struct RunArgs {
    /// JSON file containing an array of checks
    pub checks: PathBuf,
}

/// Splits `KEY=VALUE` at the first `=`.
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("invalid KEY=VALUE: no `=` found in {s:?}"))
}
