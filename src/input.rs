//! Turning command-line arguments or interactive answers into an [`IconRequest`].

use tracing::{info, warn};

use crate::error::Result;
use crate::icon::{validate_name, Family, IconRequest, Style};

/// Values taken from the command line; all optional.
#[derive(Debug, Clone, Default)]
pub struct IconArgs {
    pub name: Option<String>,
    pub family: Option<Family>,
    pub style: Option<Style>,
}

/// Source of interactive answers.
pub trait Prompt {
    fn ask(&mut self, message: &str) -> Result<String>;
}

/// Terminal prompt backed by `inquire`.
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn ask(&mut self, message: &str) -> Result<String> {
        Ok(inquire::Text::new(message).prompt()?)
    }
}

/// Build the request from `args` when both name and family are present,
/// otherwise ask for everything through `prompt`.
pub fn resolve_request(args: IconArgs, prompt: &mut impl Prompt) -> Result<IconRequest> {
    if let IconArgs {
        name: Some(name),
        family: Some(family),
        style,
    } = args
    {
        return IconRequest::new(&name, family, style);
    }

    info!("No arguments provided. Enter details manually.");
    let name = ask_until_valid(prompt, "Enter icon name (e.g., 'house'):", validate_name)?;
    let family = ask_until_valid(
        prompt,
        &format!("Enter icon family (e.g., {}):", quoted(&Family::names())),
        |answer| answer.parse::<Family>(),
    )?;
    let style = if family.uses_style() {
        let style = ask_until_valid(
            prompt,
            &format!("Enter icon style (e.g., {}):", quoted(&Style::names())),
            |answer| answer.parse::<Style>(),
        )?;
        Some(style)
    } else {
        None
    };

    IconRequest::new(&name, family, style)
}

/// Repeat `message` until `parse` accepts the answer. Only validation errors
/// are retried; anything else (a closed terminal) is returned.
fn ask_until_valid<T>(
    prompt: &mut impl Prompt,
    message: &str,
    parse: impl Fn(&str) -> Result<T>,
) -> Result<T> {
    loop {
        let answer = prompt.ask(message)?;
        match parse(&answer) {
            Ok(value) => return Ok(value),
            Err(err) if err.is_validation() => warn!("{err}"),
            Err(err) => return Err(err),
        }
    }
}

fn quoted(names: &str) -> String {
    names
        .split(", ")
        .map(|name| format!("'{name}'"))
        .collect::<Vec<_>>()
        .join(", ")
}
