//! `conlog emit`: write one line through a category.

use std::error::Error;
use std::io::Write;

use conlog::{call_site, format_message, log, Console, Emit, Severity};
use conlog_config::{resolve_category, LogConfig};

use crate::{settings, EmitArgs, GlobalArgs, CLI};

/// Runs the `emit` subcommand against standard output.
pub fn run(args: &EmitArgs, global: &GlobalArgs) -> Result<i32, Box<dyn Error>> {
    let config = settings::load(global)?;
    let console = Console::stdout(settings::color_choice(global, &config));
    emit_to(&console, &config, args)
}

/// Writes the line described by `args` to `console`.
///
/// A category that is declared but inactive in this build writes a warning
/// through the built-in category instead.
pub fn emit_to<W: Write>(
    console: &Console<W>,
    config: &LogConfig,
    args: &EmitArgs,
) -> Result<i32, Box<dyn Error>> {
    let text = args.message.join(" ");
    let severity = Severity::from(args.level);

    match args.category.as_deref() {
        None => CLI.emit(console, severity, call_site!(), || format_message!(text))?,
        Some(key) => match resolve_category(config, key)? {
            Some(category) => {
                category.emit(console, severity, call_site!(), || format_message!(text))?
            }
            None => log!(console, CLI, Warning, "category '", key, "' is inactive, nothing written")?,
        },
    }
    Ok(0)
}
