use std::io;

use anyhow::Result;

use solidkit::application::TodoOptions;
use solidkit::presentation::factory::create_todo_use_case;

use super::Context;

pub fn cmd_todo(ctx: &Context, items: Vec<String>, remove: Vec<usize>, list: String) -> Result<()> {
    let use_case = create_todo_use_case();
    let options = TodoOptions {
        name: list,
        add: items,
        remove,
    };
    let saved = use_case.execute(&options)?;

    let mut out = io::stdout().lock();
    ctx.renderer().todo(&mut out, &options.name, &saved)?;
    Ok(())
}
