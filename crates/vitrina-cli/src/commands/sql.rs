use vitrina_pipeline::sanitizer;

use crate::cli::{GlobalFlags, SqlArgs};
use crate::output;

/// Handle `vitrina sql`. Local only: no model or datastore call.
pub fn handle(args: &SqlArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let query = sanitizer::prepare(&args.raw.join(" "));
    output::output(&query, flags.format)
}
