//! Add / edit / delete / fill flows
//!
//! Each flow takes the store plus a `Prompter` and asks only for what the
//! caller did not already supply, so the same code serves both scripted
//! command lines and interactive sessions.

use eyre::Result;
use tracing::debug;

use crate::prompt::Prompter;
use crate::{SkillError, SkillStore, placeholder_count, render};

/// How a mutating flow ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Saved,
    Deleted,
    Cancelled,
}

/// Create a skill, prompting for the name and template when not given.
///
/// Names are trimmed whichever way they arrive. An empty answer at either
/// prompt cancels.
pub fn add_skill(
    store: &mut SkillStore,
    prompter: &mut dyn Prompter,
    name: Option<String>,
    template: Option<String>,
) -> Result<Outcome> {
    let name = match name {
        Some(name) => name.trim().to_string(),
        None => match prompter.prompt_name()?.map(|n| n.trim().to_string()) {
            Some(name) if !name.is_empty() => name,
            _ => return Ok(Outcome::Cancelled),
        },
    };

    // Reject before asking for a template the user would then lose
    if store.get(&name).is_some() {
        return Err(SkillError::DuplicateName(name).into());
    }

    let template = match template {
        Some(template) => template,
        None => match prompter.prompt_template(None)? {
            Some(template) if !template.is_empty() => template,
            _ => return Ok(Outcome::Cancelled),
        },
    };

    store.add(&name, &template)?;
    Ok(Outcome::Saved)
}

/// Replace the template of an existing skill. An empty template is saved as is.
pub fn edit_skill(
    store: &mut SkillStore,
    prompter: &mut dyn Prompter,
    name: &str,
    template: Option<String>,
) -> Result<Outcome> {
    let current = store
        .get(name)
        .ok_or_else(|| SkillError::NotFound(name.to_string()))?
        .to_string();

    let template = match template {
        Some(template) => template,
        None => match prompter.prompt_template(Some(&current))? {
            Some(template) => template,
            None => return Ok(Outcome::Cancelled),
        },
    };

    store.update(name, &template)?;
    Ok(Outcome::Saved)
}

/// Delete a skill after confirmation, unless `assume_yes`
pub fn delete_skill(
    store: &mut SkillStore,
    prompter: &mut dyn Prompter,
    name: &str,
    assume_yes: bool,
) -> Result<Outcome> {
    if store.get(name).is_none() {
        return Err(SkillError::NotFound(name.to_string()).into());
    }

    if !assume_yes && !prompter.confirm(&format!("Delete skill \"{}\"?", name))? {
        return Ok(Outcome::Cancelled);
    }

    store.delete(name)?;
    Ok(Outcome::Deleted)
}

/// Render a skill with inputs supplied up front
pub fn render_skill<S: AsRef<str>>(store: &SkillStore, name: &str, inputs: &[S]) -> Result<String> {
    let template = store.get(name).ok_or_else(|| SkillError::NotFound(name.to_string()))?;
    Ok(render(template, inputs))
}

/// Prompt for one input per placeholder and render. `None` if the user backs out.
pub fn fill_skill(store: &SkillStore, prompter: &mut dyn Prompter, name: &str) -> Result<Option<String>> {
    let template = store.get(name).ok_or_else(|| SkillError::NotFound(name.to_string()))?;
    let total = placeholder_count(template);
    debug!(name, total, "fill_skill: collecting inputs");

    let mut inputs = Vec::with_capacity(total);
    for slot in 1..=total {
        match prompter.prompt_content(slot, total)? {
            Some(text) => inputs.push(text),
            None => return Ok(None),
        }
    }

    Ok(Some(render(template, &inputs)))
}
