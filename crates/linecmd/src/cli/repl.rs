//! Interactive loop: prompt, read one line, print its response

use std::io::{self, BufRead, Write};

use linecmd_core::{config::ReplConfig, Interpreter};

/// Run until `input` reaches EOF.
///
/// The prompt switches to `error_prompt` after a rejected line and back
/// after the next line that is not rejected.
///
/// # Errors
/// Returns an error if reading input or writing output fails
pub fn run<R: BufRead, W: Write>(
    interpreter: &Interpreter,
    prompts: &ReplConfig,
    input: R,
    mut output: W,
) -> io::Result<()> {
    let mut failed = false;
    let mut lines = input.lines();

    loop {
        let prompt = if failed {
            &prompts.error_prompt
        } else {
            &prompts.prompt
        };
        output.write_all(prompt.as_bytes())?;
        output.flush()?;

        let Some(line) = lines.next().transpose()? else {
            tracing::debug!("end of input");
            return Ok(());
        };

        let evaluation = interpreter.run(line.trim_end_matches('\r'));
        output.write_all(evaluation.render().as_bytes())?;
        failed = evaluation.is_failure();
    }
}
