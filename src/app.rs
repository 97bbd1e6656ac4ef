use std::io::IsTerminal;

use datefmt::{AppError, DateFormatter, Timezone, debug_log};

use crate::batch::{format_batch, read_inputs};
use crate::cli::{Cli, Commands};
use crate::output::{
    outcomes_json, print_outcomes, render_template_table, render_token_table, template_json,
    tokens_json,
};

/// Run the parsed command. `Ok(false)` means some inputs failed to format.
pub(crate) fn run(cli: &Cli) -> Result<bool, AppError> {
    let timezone = Timezone::parse(cli.timezone.as_deref())?;
    let formatter =
        DateFormatter::new(cli.template(), cli.separator()).with_timezone(timezone);
    debug_log!(
        "template={} separator={:?} timezone={}",
        formatter.template(),
        formatter.separator(),
        timezone.name()
    );

    match cli.command {
        Some(Commands::Tokens) => {
            if cli.json {
                println!("{}", tokens_json()?);
            } else {
                println!("{}", render_token_table(cli.use_color()));
            }
            Ok(true)
        }
        Some(Commands::Template) => {
            if cli.json {
                println!("{}", template_json(&formatter)?);
            } else {
                print!("{}", render_template_table(&formatter, cli.use_color()));
            }
            Ok(true)
        }
        None => handle_format(cli, &formatter),
    }
}

fn handle_format(cli: &Cli, formatter: &DateFormatter) -> Result<bool, AppError> {
    let inputs = if cli.dates.is_empty() {
        let stdin = std::io::stdin();
        if stdin.is_terminal() {
            debug_log!("No dates given and stdin is a terminal");
        }
        read_inputs(stdin.lock())?
    } else {
        cli.dates.clone()
    };

    let outcomes = format_batch(formatter, &inputs, cli.millis);
    if cli.json {
        println!("{}", outcomes_json(&outcomes)?);
    } else {
        print_outcomes(&outcomes);
    }
    Ok(outcomes.iter().all(|o| o.is_ok()))
}
