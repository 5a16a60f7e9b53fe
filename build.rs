use anyhow::Result;
use vergen_gix::{BuildBuilder, Emitter};

fn main() -> Result<()> {
    let build = BuildBuilder::all_build()?;
    Emitter::default().add_instructions(&build)?.emit()
}
