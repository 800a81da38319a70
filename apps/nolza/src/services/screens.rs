//! Terminal screens and the command loop that moves between them.
//!
//! Commands: `list`, `home`, `open <slug>`, `shuffle`, `guidelines [n|id]`,
//! `back`, `help`, `quit`. Leaving a game screen for anything other than a
//! shuffle ends the streak.

use std::io::{self, BufRead, Write};

use rand::Rng;

use crate::domain::guidelines::{
    find_guideline, Guideline, GUIDELINES, GUIDELINES_BANNER, GUIDELINES_INTRO, GUIDELINES_TITLE,
};
use crate::services::shuffle_flow::{GameScreen, Navigation, Origin, ShuffleController};

const HELP: &str = "commands: list, home, open <slug>, shuffle, guidelines [n], back, quit";

/// Screen the user is currently looking at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Home,
    Library,
    Guidelines {
        back_to: Box<Screen>,
    },
    Game {
        slug: String,
        origin: Origin,
        back_to: Box<Screen>,
    },
}

impl Screen {
    fn is_game(&self) -> bool {
        matches!(self, Screen::Game { .. })
    }
}

/// Read commands until `quit`, `exit` or end of input.
pub fn run<R: Rng>(
    controller: &ShuffleController<R>,
    input: impl BufRead,
    mut out: impl Write,
) -> io::Result<Screen> {
    let mut screen = Screen::Home;
    render_home(controller, &mut out)?;

    for line in input.lines() {
        let line = line?;
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            continue;
        };
        if matches!(command, "quit" | "exit") {
            break;
        }
        screen = step(controller, screen, command, parts.next(), &mut out)?;
        out.flush()?;
    }
    Ok(screen)
}

/// Apply one command to the current screen and return the next one.
pub fn step<R: Rng>(
    controller: &ShuffleController<R>,
    screen: Screen,
    command: &str,
    arg: Option<&str>,
    out: &mut impl Write,
) -> io::Result<Screen> {
    let next = match (command, screen) {
        ("back", Screen::Game { back_to, .. }) => {
            controller.leave_game();
            *back_to
        }
        ("back", Screen::Guidelines { back_to }) => *back_to,
        ("home", Screen::Game { .. }) => {
            controller.leave_game();
            Screen::Home
        }
        ("home" | "back", _) => Screen::Home,
        ("list", Screen::Game { .. }) => {
            controller.leave_game();
            Screen::Library
        }
        ("list", _) => Screen::Library,
        ("guidelines", screen) => {
            let back_to = match screen {
                Screen::Game { .. } => {
                    controller.leave_game();
                    Screen::Home
                }
                Screen::Guidelines { back_to } => *back_to,
                other => other,
            };
            let expanded = match arg {
                Some(key) => match find_guideline(key) {
                    Some(g) => Some(g),
                    None => {
                        writeln!(out, "no guideline '{key}' (use 1-{})", GUIDELINES.len())?;
                        None
                    }
                },
                None => None,
            };
            render_guidelines(expanded, out)?;
            return Ok(Screen::Guidelines {
                back_to: Box::new(back_to),
            });
        }
        ("open", screen) => {
            let Some(slug) = arg else {
                writeln!(out, "usage: open <slug>")?;
                return Ok(screen);
            };
            if screen.is_game() {
                controller.leave_game();
            }
            let game = controller.enter_game(slug, Origin::Library);
            render_game(&game, out)?;
            return Ok(Screen::Game {
                slug: slug.to_string(),
                origin: Origin::Library,
                back_to: Box::new(Screen::Library),
            });
        }
        ("shuffle", Screen::Game { slug, origin, back_to }) => {
            match controller.shuffle_from_game(&slug, origin) {
                Some(Navigation::Replace { slug, origin }) => {
                    let game = controller.enter_game(&slug, origin);
                    render_game(&game, out)?;
                    return Ok(Screen::Game { slug, origin, back_to });
                }
                _ => {
                    writeln!(out, "No other game to shuffle to.")?;
                    return Ok(Screen::Game { slug, origin, back_to });
                }
            }
        }
        ("shuffle", screen) => match controller.start_from_home() {
            Some(Navigation::Push { slug, origin }) => {
                let game = controller.enter_game(&slug, origin);
                render_game(&game, out)?;
                return Ok(Screen::Game {
                    slug,
                    origin,
                    back_to: Box::new(screen),
                });
            }
            _ => {
                writeln!(out, "The catalog is empty.")?;
                return Ok(screen);
            }
        },
        ("help", screen) => {
            writeln!(out, "{HELP}")?;
            return Ok(screen);
        }
        (other, screen) => {
            writeln!(out, "unknown command '{other}' (try 'help')")?;
            return Ok(screen);
        }
    };

    match &next {
        Screen::Home => render_home(controller, out)?,
        Screen::Library => render_library(controller, out)?,
        Screen::Guidelines { .. } => render_guidelines(None, out)?,
        Screen::Game { .. } => {}
    }
    Ok(next)
}

pub fn render_home<R: Rng>(
    controller: &ShuffleController<R>,
    out: &mut impl Write,
) -> io::Result<()> {
    writeln!(out, "== Nolza ==")?;
    writeln!(out, "Let's Play: 'list' for the game library, 'shuffle' for a random game.")?;
    if !controller.can_shuffle() {
        writeln!(
            out,
            "(in-game shuffle is unavailable: the catalog has fewer than two games)"
        )?;
    }
    writeln!(out, "{GUIDELINES_BANNER}: 'guidelines'")?;
    Ok(())
}

pub fn render_library<R: Rng>(
    controller: &ShuffleController<R>,
    out: &mut impl Write,
) -> io::Result<()> {
    writeln!(out, "== Game Library ==")?;
    for game in controller.catalog().games() {
        writeln!(out, "  {:<16} {}", game.slug, game.title)?;
    }
    Ok(())
}

/// All section titles; the `expanded` one also shows its text.
pub fn render_guidelines(expanded: Option<&Guideline>, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "== {GUIDELINES_TITLE} ==")?;
    writeln!(out, "{GUIDELINES_INTRO}")?;
    for g in &GUIDELINES {
        let open = expanded.is_some_and(|e| e.id == g.id);
        writeln!(out, "{} {}", if open { "v" } else { ">" }, g.title)?;
        if open {
            for paragraph in g.paragraphs {
                writeln!(out, "   {paragraph}")?;
            }
        }
    }
    Ok(())
}

pub fn render_game(screen: &GameScreen, out: &mut impl Write) -> io::Result<()> {
    let Some(game) = &screen.record else {
        writeln!(out, "Game not found")?;
        writeln!(out, "We couldn't find that game. Please go back and try again.")?;
        return Ok(());
    };

    writeln!(out, "== {} ==", game.title)?;
    writeln!(out, "{}", game.tagline)?;
    writeln!(
        out,
        "Players: {} | Drinks: {} | Materials: {}",
        game.overview.players, game.overview.drinks, game.overview.materials
    )?;
    for (n, step) in game.instructions.iter().enumerate() {
        writeln!(out, "{}. {}", n + 1, step.title)?;
        for line in &step.description {
            writeln!(out, "   {line}")?;
        }
    }
    for rule in &game.extended_rules {
        writeln!(out, "+ {}", rule.title)?;
        for line in &rule.description {
            writeln!(out, "   {line}")?;
        }
    }
    if let Some(tip) = &screen.tip {
        writeln!(out, "-- Reminder: {} --", tip.title)?;
        writeln!(out, "{}", tip.body)?;
    }
    Ok(())
}
