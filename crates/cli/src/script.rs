//! Event scripts: recorded input replayed against an [`Editor`].
//!
//! One command per line; blank lines and `#` comments are skipped.
//!
//! ```text
//! tool add @OVAL
//! down 10 10
//! tool select
//! down 15 10 ctrl
//! key g
//! ```

use anyhow::{anyhow, bail, Context, Result};
use canvas::{Editor, Key, Modifiers, Tool};
use sketch_core::Point;

#[derive(Debug, Clone, PartialEq)]
pub enum ToolChoice {
    Idle,
    Select,
    Eraser,
    /// Add-shape tool for the prototype with this tag
    Add(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScriptCommand {
    Tool(ToolChoice),
    Down(Point, Modifiers),
    Up(Point, Modifiers),
    Drag(Point),
    Key(Key),
}

/// A command together with its 1-based source line.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptLine {
    pub line: usize,
    pub command: ScriptCommand,
}

pub fn parse_script(text: &str) -> Result<Vec<ScriptLine>> {
    let mut commands = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let content = raw.split('#').next().unwrap_or("").trim();
        if content.is_empty() {
            continue;
        }

        let command =
            parse_command(content).with_context(|| format!("script line {}: {:?}", line, content))?;
        commands.push(ScriptLine { line, command });
    }

    Ok(commands)
}

fn parse_command(content: &str) -> Result<ScriptCommand> {
    let words: Vec<&str> = content.split_whitespace().collect();

    match words.as_slice() {
        ["tool", "idle"] => Ok(ScriptCommand::Tool(ToolChoice::Idle)),
        ["tool", "select"] => Ok(ScriptCommand::Tool(ToolChoice::Select)),
        ["tool", "eraser"] => Ok(ScriptCommand::Tool(ToolChoice::Eraser)),
        ["tool", "add", tag] => Ok(ScriptCommand::Tool(ToolChoice::Add(tag.to_string()))),
        ["down", x, y, flags @ ..] => Ok(ScriptCommand::Down(point(x, y)?, modifiers(flags)?)),
        ["up", x, y, flags @ ..] => Ok(ScriptCommand::Up(point(x, y)?, modifiers(flags)?)),
        ["drag", x, y] => Ok(ScriptCommand::Drag(point(x, y)?)),
        ["key", keysym] => Key::from_keysym(keysym)
            .map(ScriptCommand::Key)
            .ok_or_else(|| anyhow!("unknown key {:?}", keysym)),
        _ => bail!("unrecognized command"),
    }
}

fn point(x: &str, y: &str) -> Result<Point> {
    let x: f32 = x.parse().with_context(|| format!("{:?} is not a number", x))?;
    let y: f32 = y.parse().with_context(|| format!("{:?} is not a number", y))?;
    Ok(Point::new(x, y))
}

fn modifiers(flags: &[&str]) -> Result<Modifiers> {
    let mut modifiers = Modifiers::NONE;
    for flag in flags {
        match *flag {
            "shift" => modifiers.shift = true,
            "ctrl" => modifiers.ctrl = true,
            other => bail!("unknown modifier {:?}", other),
        }
    }
    Ok(modifiers)
}

/// Feeds every command to `editor` in order.
pub fn replay(editor: &mut Editor, script: &[ScriptLine]) -> Result<()> {
    for ScriptLine { line, command } in script {
        log::debug!("script line {}: {:?}", line, command);
        match command {
            ScriptCommand::Tool(ToolChoice::Idle) => editor.set_tool(Tool::Idle),
            ScriptCommand::Tool(ToolChoice::Select) => editor.set_tool(Tool::select()),
            ScriptCommand::Tool(ToolChoice::Eraser) => editor.set_tool(Tool::eraser()),
            ScriptCommand::Tool(ToolChoice::Add(tag)) => {
                if !editor.set_add_shape_tool(tag) {
                    bail!("script line {}: no prototype for tag {:?}", line, tag);
                }
            }
            ScriptCommand::Down(point, modifiers) => editor.pointer_down(*point, *modifiers),
            ScriptCommand::Up(point, modifiers) => editor.pointer_up(*point, *modifiers),
            ScriptCommand::Drag(point) => editor.pointer_drag(*point),
            ScriptCommand::Key(key) => editor.key(*key),
        }
    }
    Ok(())
}
