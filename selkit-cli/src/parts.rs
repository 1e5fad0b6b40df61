//! Turn `category=value` arguments into a selector.

use anyhow::{Context, Result, bail};
use selkit_common::warning::warn_once;
use selkit_css::{Category, Combinator, Selector};
use strum::IntoEnumIterator;

/// One command-line part: either a selector part or a combinator.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Part<'a> {
    Simple(Category, &'a str),
    Combinator(&'a str),
}

fn category_names() -> String {
    Category::iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn parse_part(arg: &str) -> Result<Part<'_>> {
    if let Some((name, value)) = arg.split_once('=') {
        let category = name.parse::<Category>().with_context(|| {
            format!("unknown part '{name}' (expected one of: {})", category_names())
        })?;
        if value.is_empty() {
            warn_once("cli", &format!("empty value for {category} part"));
        }
        return Ok(Part::Simple(category, value));
    }

    match arg.parse::<Combinator>() {
        Ok(combinator) => Ok(Part::Combinator(combinator.as_str())),
        Err(_) => bail!("'{arg}' is neither <part>=<value> nor a combinator"),
    }
}

/// Build a selector from parts such as `element=div class=x + element=p`.
///
/// Compounds are joined left to right with [`Selector::combine`].
pub fn build_selector(args: &[String]) -> Result<Selector> {
    let mut combined: Option<Selector> = None;
    let mut pending: Option<&str> = None;
    let mut current = Selector::new();

    for arg in args {
        match parse_part(arg)? {
            Part::Simple(category, value) => {
                current = current
                    .append(category, value)
                    .with_context(|| format!("cannot append '{arg}'"))?;
            }
            Part::Combinator(token) => {
                if current.last_category().is_none() {
                    bail!("combinator '{token}' must sit between two compound selectors");
                }
                let compound = std::mem::take(&mut current);
                combined = Some(join(combined, pending.take(), compound));
                pending = Some(token);
            }
        }
    }

    if current.last_category().is_none() {
        match pending {
            Some(token) => bail!("combinator '{token}' must sit between two compound selectors"),
            None => bail!("no selector parts given"),
        }
    }
    Ok(join(combined, pending, current))
}

fn join(left: Option<Selector>, combinator: Option<&str>, right: Selector) -> Selector {
    match (left, combinator) {
        (Some(left), Some(token)) => left.combine(token, right),
        _ => right,
    }
}
