// Line-oriented input scripts, used to drive an editor without a window.
use anyhow::{bail, Context, Result};

use crate::{
    color::ColorToken,
    editor::{Editor, Tool},
    input::{InputEvent, Modifiers, PixelCoord},
};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Input(InputEvent),
    SetTool(Tool),
    SelectColor(ColorToken),
    Clear,
    Undo,
    AddSprite,
    SelectSprite(usize),
}

impl Command {
    pub fn apply(self, editor: &mut Editor) {
        match self {
            Command::Input(event) => {
                editor.dispatch(event);
            }
            Command::SetTool(tool) => editor.set_tool(tool),
            Command::SelectColor(color) => editor.select_color(color),
            Command::Clear => editor.clear(),
            Command::Undo => {
                editor.undo();
            }
            Command::AddSprite => editor.add_sprite(),
            Command::SelectSprite(idx) => {
                editor.select_sprite(idx);
            }
        }
    }
}

fn parse_point(args: &[&str]) -> Result<(PixelCoord, PixelCoord)> {
    let [x, y] = args else {
        bail!("expected two coordinates, got {}", args.len());
    };
    Ok((
        x.parse().with_context(|| format!("invalid x coordinate {:?}", x))?,
        y.parse().with_context(|| format!("invalid y coordinate {:?}", y))?,
    ))
}

fn parse_key(chord: &str) -> Result<InputEvent> {
    let mut modifiers = Modifiers::default();
    let mut parts: Vec<&str> = chord.split('+').collect();
    let key = parts.pop().filter(|k| !k.is_empty()).context("missing key")?;
    for part in parts {
        match part.to_ascii_lowercase().as_str() {
            "ctrl" => modifiers.ctrl = true,
            "meta" | "cmd" => modifiers.meta = true,
            "shift" => modifiers.shift = true,
            "alt" => modifiers.alt = true,
            other => bail!("unknown modifier {:?}", other),
        }
    }
    Ok(InputEvent::Key {
        key: key.to_string(),
        modifiers,
    })
}

fn parse_line(line: &str) -> Result<Option<Command>> {
    let line = line.split('#').next().unwrap_or_default().trim();
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = words.collect();
    let no_args = |cmd: Command| -> Result<Option<Command>> {
        if !args.is_empty() {
            bail!("{} takes no arguments", verb);
        }
        Ok(Some(cmd))
    };
    match verb {
        "press" => {
            let (x, y) = parse_point(&args)?;
            Ok(Some(Command::Input(InputEvent::Press { x, y })))
        }
        "move" => {
            let (x, y) = parse_point(&args)?;
            Ok(Some(Command::Input(InputEvent::Move { x, y })))
        }
        "pick" => {
            let (x, y) = parse_point(&args)?;
            Ok(Some(Command::Input(InputEvent::Pick { x, y })))
        }
        "release" => no_args(Command::Input(InputEvent::Release)),
        "key" => match args.as_slice() {
            [chord] => Ok(Some(Command::Input(parse_key(chord)?))),
            _ => bail!("key takes one argument"),
        },
        "pen" => no_args(Command::SetTool(Tool::Pen)),
        "eraser" => no_args(Command::SetTool(Tool::Eraser)),
        "clear" => no_args(Command::Clear),
        "undo" => no_args(Command::Undo),
        "new-sprite" => no_args(Command::AddSprite),
        // '#' starts a comment, so the token is written without it.
        "color" => match args.as_slice() {
            [token] => Ok(Some(Command::SelectColor(ColorToken::new(format!(
                "#{}",
                token.trim_start_matches('#')
            ))))),
            _ => bail!("color takes one argument"),
        },
        "sprite" => match args.as_slice() {
            [n] => {
                let n: usize = n.parse().with_context(|| format!("invalid sprite number {:?}", n))?;
                if n == 0 {
                    bail!("sprites are numbered from 1");
                }
                Ok(Some(Command::SelectSprite(n - 1)))
            }
            _ => bail!("sprite takes one argument"),
        },
        other => bail!("unknown command {:?}", other),
    }
}

pub fn parse_script(script: &str) -> Result<Vec<Command>> {
    let mut commands = vec![];
    for (i, line) in script.lines().enumerate() {
        if let Some(cmd) = parse_line(line).with_context(|| format!("line {}", i + 1))? {
            commands.push(cmd);
        }
    }
    Ok(commands)
}
