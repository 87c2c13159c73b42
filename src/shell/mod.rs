//! Interactive shell
//!
//! Owns the top-level menu loop. Single-threaded and blocking: every
//! operation runs to completion before the next prompt is shown.

pub mod prompt;

use log::info;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::menu::{self, MenuResult, TopChoice};
use prompt::Prompter;

pub struct Shell<R, W> {
    prompter: Prompter<R, W>,
    default_dir: PathBuf,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, default_dir: PathBuf) -> Self {
        Self {
            prompter: Prompter::new(input, output),
            default_dir,
        }
    }

    /// Runs the menu loop until the exit choice or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        info!(
            "File manager ready (default directory {})",
            self.default_dir.display()
        );

        loop {
            self.print_options()?;

            let choice = match self.prompter.ask_choice() {
                Ok(choice) => choice,
                Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => break,
                Err(e) => return Err(e),
            };

            match menu::handle_top_choice(
                TopChoice::from(choice),
                &mut self.prompter,
                &self.default_dir,
            ) {
                Ok(MenuResult::Exit) => break,
                Ok(MenuResult::Continue) => {}
                Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => break,
                Err(e) => return Err(e),
            }
        }

        info!("File manager exiting");
        Ok(())
    }

    fn print_options(&mut self) -> io::Result<()> {
        self.prompter.say("Choose an action")?;
        self.prompter.say("Create file (1)")?;
        self.prompter.say("Volume info (2)")?;
        self.prompter.say("Select file (3)")?;
        self.prompter.say("Exit (0)")
    }
}
