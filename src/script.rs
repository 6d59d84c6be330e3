use std::fs;
use std::time::{Duration, Instant};

use log::{debug, warn};
use thiserror::Error;

use crate::controller::{Action, Cursor, InteractionController, PointerEvent};
use crate::types::Point;

/// Simulated time between two consecutive events.
pub const FRAME: Duration = Duration::from_millis(16);

/// Longest single `wait` the simulated clock advances by.
pub const MAX_WAIT: Duration = Duration::from_secs(3600);

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand { line: usize, command: String },
    #[error("line {line}: '{command}' takes {expected} argument(s)")]
    Arity {
        line: usize,
        command: String,
        expected: usize,
    },
    #[error("line {line}: '{value}' is not a number")]
    Number { line: usize, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    Event(PointerEvent),
    Wait(Duration),
}

/// What the host would have observed while the script ran.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ReplaySummary {
    pub events: usize,
    pub renders: usize,
    pub cursor: Option<Cursor>,
}

fn number(line: usize, value: &str) -> Result<f64, ScriptError> {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ScriptError::Number {
            line,
            value: value.to_string(),
        })
}

fn parse_line(line: usize, text: &str) -> Result<Option<Step>, ScriptError> {
    let text = text.split('#').next().unwrap_or("").trim();
    let mut words = text.split_whitespace();
    let Some(command) = words.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = words.collect();
    let arity = |n: usize| {
        if args.len() == n {
            Ok(())
        } else {
            Err(ScriptError::Arity {
                line,
                command: command.to_string(),
                expected: n,
            })
        }
    };
    let point = |args: &[&str]| -> Result<Point, ScriptError> {
        Ok(Point::new(number(line, args[0])?, number(line, args[1])?))
    };

    let step = match command.to_ascii_lowercase().as_str() {
        "wheel" => {
            arity(1)?;
            Step::Event(PointerEvent::Wheel {
                delta_y: number(line, args[0])?,
            })
        }
        "down" => {
            arity(2)?;
            Step::Event(PointerEvent::Down(point(&args)?))
        }
        "move" => {
            arity(2)?;
            Step::Event(PointerEvent::Move(point(&args)?))
        }
        "up" => {
            arity(0)?;
            Step::Event(PointerEvent::Up)
        }
        "leave" => {
            arity(0)?;
            Step::Event(PointerEvent::Leave)
        }
        "dblclick" => {
            arity(0)?;
            Step::Event(PointerEvent::DoubleClick)
        }
        "wait" => {
            arity(1)?;
            let ms = number(line, args[0])?;
            let wait = Duration::try_from_secs_f64(ms / 1000.0).map_err(|_| ScriptError::Number {
                line,
                value: args[0].to_string(),
            })?;
            Step::Wait(wait)
        }
        other => {
            return Err(ScriptError::UnknownCommand {
                line,
                command: other.to_string(),
            });
        }
    };
    Ok(Some(step))
}

pub fn parse_script(text: &str) -> Result<Vec<Step>, ScriptError> {
    let mut steps = Vec::new();
    for (i, line) in text.lines().enumerate() {
        if let Some(step) = parse_line(i + 1, line)? {
            steps.push(step);
        }
    }
    Ok(steps)
}

pub fn load_script(path: &str) -> Result<Vec<Step>, ScriptError> {
    let text = fs::read_to_string(path).map_err(|source| ScriptError::Io {
        path: path.to_string(),
        source,
    })?;
    parse_script(&text)
}

/// Feed `steps` through the controller on a simulated clock starting at `start`.
pub fn replay(
    controller: &mut InteractionController,
    steps: &[Step],
    start: Instant,
) -> ReplaySummary {
    let mut now = start;
    let mut summary = ReplaySummary::default();
    for step in steps {
        match *step {
            Step::Event(event) => {
                now = now.checked_add(FRAME).unwrap_or(now);
                summary.events += 1;
                for action in controller.handle(event, now) {
                    match action {
                        Action::RenderNeeded => summary.renders += 1,
                        Action::SetCursor(c) => summary.cursor = Some(c),
                    }
                }
            }
            Step::Wait(d) => {
                if d > MAX_WAIT {
                    warn!("wait of {d:?} capped at {MAX_WAIT:?}");
                }
                now = now.checked_add(d.min(MAX_WAIT)).unwrap_or(now);
                controller.tick(now);
            }
        }
    }
    debug!(
        "replayed {} events, {} renders requested",
        summary.events, summary.renders
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::SkyScene;
    use crate::test_utils::{approx, make_config, sirius};
    use crate::tooltip::PageGeometry;

    fn controller() -> InteractionController {
        let cfg = make_config(|cfg| {
            cfg.width = 400;
            cfg.height = 400;
        });
        InteractionController::new(
            SkyScene::new(vec![sirius()], cfg),
            PageGeometry::unscaled(400, 400),
        )
    }

    #[test]
    fn parses_every_command() {
        let steps = parse_script(
            "# warm up\n\nwheel -120\ndown 10 20\nmove 15.5 25\nUP\nleave\ndblclick # reset\nwait 250\n",
        )
        .expect("parse");
        assert_eq!(
            steps,
            vec![
                Step::Event(PointerEvent::Wheel { delta_y: -120.0 }),
                Step::Event(PointerEvent::Down(Point::new(10.0, 20.0))),
                Step::Event(PointerEvent::Move(Point::new(15.5, 25.0))),
                Step::Event(PointerEvent::Up),
                Step::Event(PointerEvent::Leave),
                Step::Event(PointerEvent::DoubleClick),
                Step::Wait(Duration::from_millis(250)),
            ]
        );
    }

    #[test]
    fn errors_carry_line_numbers() {
        let err = parse_script("up\n\njump 1").expect_err("unknown command");
        assert!(matches!(err, ScriptError::UnknownCommand { line: 3, .. }));

        let err = parse_script("move 1").expect_err("arity");
        assert!(matches!(err, ScriptError::Arity { line: 1, expected: 2, .. }));

        let err = parse_script("up\nwheel lots").expect_err("number");
        assert_eq!(err.to_string(), "line 2: 'lots' is not a number");

        assert!(parse_script("wait -5").is_err());
        assert!(parse_script("wheel NaN").is_err());
    }

    #[test]
    fn replay_drives_the_controller() {
        let mut c = controller();
        let steps = parse_script("wheel -1\nwheel -1\ndown 0 0\nmove 20 0\nup\n").expect("parse");
        let summary = replay(&mut c, &steps, Instant::now());
        assert_eq!(summary.events, 5);
        assert_eq!(summary.renders, 3);
        assert_eq!(summary.cursor, Some(Cursor::Grab));
        assert!(approx(c.viewport().zoom, 1.2, 1e-12));
        assert_eq!(c.viewport().pan, Point::new(20.0, 0.0));
    }

    #[test]
    fn wait_runs_the_tooltip_release() {
        let mut c = controller();
        let steps = parse_script("move 200 280\nmove 20 20\nwait 50\n").expect("parse");
        replay(&mut c, &steps, Instant::now());
        assert!(c.tooltip().release_pending());

        let mut c = controller();
        let steps = parse_script("move 200 280\nmove 20 20\nwait 150\n").expect("parse");
        replay(&mut c, &steps, Instant::now());
        assert!(!c.tooltip().release_pending());
        assert!(c.tooltip().positioner().is_none());
    }

    #[test]
    fn oversized_waits_are_rejected_or_capped() {
        let err = parse_script("up\nwait 1e30").expect_err("too long for a duration");
        assert!(matches!(err, ScriptError::Number { line: 2, .. }));

        let mut c = controller();
        let steps = parse_script("move 200 280\nmove 20 20\nwait 1e22\nwheel -1\n").expect("parse");
        assert_eq!(steps[2], Step::Wait(Duration::from_secs_f64(1e19)));
        let summary = replay(&mut c, &steps, Instant::now());
        assert_eq!(summary.events, 3);
        assert!(c.tooltip().positioner().is_none());
        assert!(approx(c.viewport().zoom, 1.1, 1e-12));
    }

    #[test]
    fn missing_script_reports_path() {
        let err = load_script("/no/such/events.txt").expect_err("missing");
        assert!(err.to_string().contains("/no/such/events.txt"));
    }
}
