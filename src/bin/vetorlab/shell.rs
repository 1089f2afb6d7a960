use std::io::{BufRead, Write};

use anyhow::Context as _;

use vetorlab::{
    Choice, CpuBackend, Dimension, QUESTIONNAIRE_TITLE, QuestionnaireSession, RenderBackend,
    ViewController, VetorError, write_png,
};

const HELP: &str = "\
commands:
  dim 2|3             switch dimension (resets the form)
  v 1,0               set the vector
  m 2,0;0,3           set the matrix, rows separated by ';'
  ve <i> <value>      set vector entry i (1-based)
  me <r> <c> <value>  set matrix entry (r, c) (1-based)
  speed <0.5..3.0>    animation speed
  step on|off         step-by-step animation
  apply               apply the transformation
  random              generate a random exercise
  survey              answer the evaluation questionnaire
  render <file.png>   write the current plot
  show                print the form
  help                this text
  quit                leave";

enum Flow {
    Continue,
    Quit,
}

/// Line-oriented front end over a [`ViewController`].
///
/// Errors are printed as `<dialog title>: <message>` and the loop carries on.
pub fn run_shell<R: BufRead, W: Write>(
    controller: &mut ViewController,
    mut input: R,
    out: &mut W,
) -> anyhow::Result<()> {
    let mut backend: Option<CpuBackend> = None;
    writeln!(out, "VetorLab shell, type 'help' for commands")?;
    loop {
        write!(out, "{}> ", controller.form().dimension())?;
        out.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line).context("read command")? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match dispatch(controller, &mut backend, line, &mut input, out) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(e) => writeln!(out, "{}: {e}", e.dialog_title())?,
        }
    }
    Ok(())
}

fn dispatch<R: BufRead, W: Write>(
    controller: &mut ViewController,
    backend: &mut Option<CpuBackend>,
    line: &str,
    input: &mut R,
    out: &mut W,
) -> Result<Flow, VetorError> {
    let (cmd, rest) = line
        .split_once(char::is_whitespace)
        .map(|(c, r)| (c, r.trim()))
        .unwrap_or((line, ""));

    match cmd {
        "quit" | "exit" | "q" => return Ok(Flow::Quit),
        "help" | "?" => writeln!(out, "{HELP}").map_err(io_err)?,
        "dim" => {
            let dim: Dimension = rest.parse()?;
            controller.set_dimension(dim);
            writeln!(out, "dimension set to {dim}").map_err(io_err)?;
        }
        "v" => controller.form_mut().set_vector_text(rest)?,
        "m" => controller.form_mut().set_matrix_text(rest)?,
        "ve" => {
            let (i, value) = split_index(rest)?;
            controller.form_mut().set_vector_entry(i, value)?;
        }
        "me" => {
            let (r, rest) = split_index(rest)?;
            let (c, value) = split_index(rest)?;
            controller.form_mut().set_matrix_entry(r, c, value)?;
        }
        "speed" => {
            let value = vetorlab::parse_component(rest)?;
            let speed = controller.form_mut().set_speed(value);
            writeln!(out, "speed {:.2}", speed.get()).map_err(io_err)?;
        }
        "step" => {
            let on = match rest {
                "on" | "1" | "true" => true,
                "off" | "0" | "false" => false,
                other => {
                    return Err(VetorError::validation(format!(
                        "expected 'on' or 'off', got '{other}'"
                    )));
                }
            };
            controller.form_mut().set_step_by_step(on);
        }
        "apply" => {
            controller.apply()?;
            writeln!(out, "{}", controller.explanation()).map_err(io_err)?;
            play_animation(controller, out)?;
            writeln!(out, "{}", controller.status()).map_err(io_err)?;
        }
        "random" => {
            let ex = controller.generate_exercise(&mut rand::thread_rng())?;
            writeln!(out, "v = {}\nA =\n{}", ex.vector, ex.matrix).map_err(io_err)?;
            writeln!(out, "{}", controller.explanation()).map_err(io_err)?;
            writeln!(out, "{}", controller.status()).map_err(io_err)?;
        }
        "survey" => run_survey(input, out)?,
        "render" => {
            if rest.is_empty() {
                return Err(VetorError::validation("usage: render <file.png>"));
            }
            if backend.is_none() {
                *backend = Some(CpuBackend::new(controller.settings().render.clone())?);
            }
            if let Some(b) = backend.as_mut() {
                let frame = b.render_scene(controller.scene())?;
                write_png(&frame, std::path::Path::new(rest))?;
                writeln!(out, "wrote {rest}").map_err(io_err)?;
            }
        }
        "show" => show(controller, out)?,
        other => {
            return Err(VetorError::validation(format!(
                "unknown command '{other}', type 'help'"
            )));
        }
    }
    Ok(Flow::Continue)
}

/// Drives the running animation to its end, one timer interval per tick.
fn play_animation<W: Write>(
    controller: &mut ViewController,
    out: &mut W,
) -> Result<(), VetorError> {
    let Some(interval) = controller.animation().map(|h| h.interval()) else {
        return Ok(());
    };
    let mut frames = 1u32;
    while controller.is_animating() {
        if controller.tick(interval).is_some() {
            frames += 1;
        }
    }
    writeln!(
        out,
        "animated {frames} frames at {:.1} ms per frame",
        interval.as_secs_f64() * 1000.0
    )
    .map_err(io_err)
}

fn show<W: Write>(controller: &ViewController, out: &mut W) -> Result<(), VetorError> {
    let form = controller.form();
    let n = form.dimension().len();
    let vector: Vec<&str> = (0..n).filter_map(|i| form.vector_entry(i)).collect();
    writeln!(out, "dimension: {}", form.dimension()).map_err(io_err)?;
    writeln!(out, "vector: {}", vector.join(", ")).map_err(io_err)?;
    writeln!(out, "matrix:").map_err(io_err)?;
    for r in 0..n {
        let row: Vec<&str> = (0..n).filter_map(|c| form.matrix_entry(r, c)).collect();
        writeln!(out, "  {}", row.join(", ")).map_err(io_err)?;
    }
    writeln!(
        out,
        "speed: {:.2}  step-by-step: {}",
        form.speed().get(),
        if form.step_by_step() { "on" } else { "off" }
    )
    .map_err(io_err)?;
    writeln!(out, "status: {}", controller.status()).map_err(io_err)
}

/// Asks the questionnaire on `input`.
///
/// Invalid letters are re-asked and an empty line skips a question. While answers are missing
/// the validation message is shown and the skipped questions are asked again; running out of
/// input returns that message as the error.
pub fn run_survey<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<(), VetorError> {
    let mut session = QuestionnaireSession::new();
    writeln!(out, "{QUESTIONNAIRE_TITLE}").map_err(io_err)?;
    let mut pending: Vec<usize> = (0..session.questions().len()).collect();
    loop {
        for i in pending {
            if !ask_question(&mut session, i, input, out)? {
                let thanks = session.submit()?;
                return writeln!(out, "{thanks}").map_err(io_err);
            }
        }
        match session.submit() {
            Ok(thanks) => return writeln!(out, "{thanks}").map_err(io_err),
            Err(e) => writeln!(out, "{e}").map_err(io_err)?,
        }
        pending = session.unanswered().into_iter().map(|n| n - 1).collect();
    }
}

/// Returns `false` once `input` is exhausted.
fn ask_question<R: BufRead, W: Write>(
    session: &mut QuestionnaireSession,
    i: usize,
    input: &mut R,
    out: &mut W,
) -> Result<bool, VetorError> {
    let q = &session.questions()[i];
    writeln!(out, "{}", q.prompt).map_err(io_err)?;
    for c in Choice::ALL {
        writeln!(out, "  {}", q.option_line(c)).map_err(io_err)?;
    }
    loop {
        write!(out, "answer> ").map_err(io_err)?;
        out.flush().map_err(io_err)?;
        let mut line = String::new();
        if input.read_line(&mut line).map_err(io_err)? == 0 {
            return Ok(false);
        }
        if line.trim().is_empty() {
            return Ok(true);
        }
        match line.parse::<Choice>() {
            Ok(choice) => {
                session.answer(i, choice)?;
                return Ok(true);
            }
            Err(e) => writeln!(out, "{e}").map_err(io_err)?,
        }
    }
}

fn split_index(text: &str) -> Result<(usize, &str), VetorError> {
    let (head, tail) = text
        .split_once(char::is_whitespace)
        .ok_or_else(|| VetorError::validation("expected an index followed by a value"))?;
    let i: usize = head
        .parse()
        .map_err(|_| VetorError::validation(format!("'{head}' is not an index")))?;
    if i == 0 {
        return Err(VetorError::validation("indices start at 1"));
    }
    Ok((i - 1, tail.trim()))
}

fn io_err(e: std::io::Error) -> VetorError {
    VetorError::Other(anyhow::Error::new(e).context("write shell output"))
}

#[cfg(test)]
#[path = "../../../tests/unit/bin/shell.rs"]
mod tests;
