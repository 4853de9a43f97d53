use anyhow::{bail, Context};
use clap::{builder::PossibleValue, Arg, ArgAction, Command};
use dialoguer::{Confirm, Input, Select};

/// Build command line arguments of `cmd` by asking the user.
pub fn interactive_cmd(cmd: &Command) -> anyhow::Result<Vec<String>> {
    let mut cmd_str = Default::default();
    ask_cmd_args(cmd, &mut cmd_str)?;
    Ok(cmd_str)
}

fn ask_cmd_args(cmd: &Command, dst: &mut Vec<String>) -> anyhow::Result<()> {
    dst.push(cmd.get_name().to_string());
    for arg in cmd.get_arguments() {
        ask_arg(arg, dst)?;
    }

    let subcmds: Vec<_> = cmd.get_subcommands().collect();
    if subcmds.is_empty() {
        return Ok(());
    }
    let items: Vec<_> = subcmds
        .iter()
        .map(|c| match c.get_about() {
            Some(about) => format!("{}: {}", c.get_name(), about),
            None => c.get_name().to_string(),
        })
        .collect();
    let selection = Select::new()
        .items(&items)
        .default(0)
        .with_prompt("Select subcommand")
        .interact()?;

    let subcmd = subcmds
        .get(selection)
        .with_context(|| format!("No subcommand at {selection}"))?;
    ask_cmd_args(subcmd, dst)
}

fn ask_arg(arg: &Arg, dst: &mut Vec<String>) -> anyhow::Result<()> {
    let mut ask_msg = "".to_string();
    if let Some(help) = arg.get_help() {
        ask_msg.push_str(&format!("{}. ", help));
    }
    let option = get_option_str(arg)?;
    ask_msg.push_str(&option);

    if matches!(arg.get_action(), ArgAction::SetTrue) {
        let on = Confirm::new()
            .default(false)
            .with_prompt(ask_msg)
            .interact()?;
        if on {
            dst.push(option);
        }
        return Ok(());
    }

    let possible_values = arg.get_possible_values();
    let default = arg.get_default_values().first().and_then(|s| s.to_str());

    let input = if !possible_values.is_empty() {
        ask_enum(&ask_msg, possible_values, !arg.is_required_set())?
    } else {
        let input = Input::<String>::new()
            .allow_empty(true)
            .with_prompt(ask_msg);
        match default {
            Some(default) => input.default(default.to_string()).interact()?,
            None => input.interact()?,
        }
    };

    if input.is_empty() {
        return Ok(());
    }
    dst.push(option);
    dst.push(input.trim().to_string());
    Ok(())
}

fn ask_enum(
    msg: &str,
    possibilities: Vec<PossibleValue>,
    optional: bool,
) -> anyhow::Result<String> {
    let mut items: Vec<_> = possibilities.iter().map(|p| p.get_name()).collect();
    if optional {
        items.push("(skip)");
    }
    let selection = Select::new()
        .items(&items)
        .default(0)
        .with_prompt(msg)
        .interact()?;
    Ok(possibilities
        .get(selection)
        .map(|p| p.get_name().to_string())
        .unwrap_or_default())
}

fn get_option_str(arg: &Arg) -> anyhow::Result<String> {
    if let Some(long) = arg.get_long() {
        Ok(format!("--{long}"))
    } else if let Some(short) = arg.get_short() {
        Ok(format!("-{short}"))
    } else {
        bail!("Positional argument is not supported");
    }
}
