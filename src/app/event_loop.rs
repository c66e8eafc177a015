use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use tracing::debug;

use crate::app::input::TokenReader;
use crate::app::{App, Message, Model, Notice, NoticeLevel, update};
use crate::editor::Session;

impl App {
    /// Run the menu loop on the process's stdin and stdout.
    ///
    /// # Errors
    /// Returns an error only if the terminal streams themselves fail.
    pub fn run(&self) -> Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(stdin.lock(), stdout.lock())?;
        Ok(())
    }

    /// Run the menu loop over arbitrary streams and return the final state.
    ///
    /// End of input is treated as an exit request.
    ///
    /// # Errors
    /// Returns an error if reading `input` or writing `out` fails.
    pub fn run_with<R: BufRead, W: Write>(&self, input: R, mut out: W) -> Result<Model> {
        let mut model = Model::new(Session::with_policy(self.redo_policy), self.quiet);
        let mut tokens = TokenReader::new(input);

        while !model.should_quit {
            let msg = self
                .read_message(&model, &mut tokens, &mut out)?
                .unwrap_or(Message::Exit);
            debug!(?msg, "menu message");

            model = update(model, msg.clone());
            self.handle_message_side_effects(&mut model, &msg);

            for notice in model.take_notices() {
                write_notice(&mut out, &notice)?;
            }
        }
        out.flush().context("Failed to flush output")?;
        Ok(model)
    }
}

fn write_notice(out: &mut impl Write, notice: &Notice) -> Result<()> {
    if notice.level != NoticeLevel::Info {
        debug!(level = ?notice.level, text = %notice.text, "notice");
    }
    writeln!(out, "{}", notice.text).context("Failed to write output")
}
