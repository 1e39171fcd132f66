/*!
 * Runtime context handed to transpiled code
 *
 * Bundles the argument state, the `Math.random` generator and the console so
 * generated code receives them explicitly instead of through globals.
 * Construction is the initialisation step, so nothing can be used before it.
 */

use std::ffi::OsStr;
use std::io::Write;
use std::process::ExitCode;

use crate::console::{Console, Loggable, StdoutWriter};
use crate::math::JsRandom;
use crate::process::Process;
use crate::utils::trace;

pub struct Runtime<W: Write = StdoutWriter> {
    process: Process,
    random: JsRandom,
    console: Console<W>,
}

impl Runtime<StdoutWriter> {
    /// Capture `args` and seed `Math.random` from the wall clock
    pub fn setargs<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        Self::from_parts(Process::setargs(args), JsRandom::from_clock(), Console::stdout())
    }

    /// Like [`Runtime::setargs`] with a fixed seed
    pub fn with_seed<I, S>(args: I, seed: u64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        Self::from_parts(Process::setargs(args), JsRandom::with_seed(seed), Console::stdout())
    }

    /// Entry point for emitted programs: initialise from the OS arguments,
    /// run `body`, exit with status 0.
    pub fn main(body: impl FnOnce(&mut Runtime)) -> ExitCode {
        let mut runtime = Self::setargs(std::env::args_os());
        body(&mut runtime);
        trace!("program body finished");
        ExitCode::SUCCESS
    }
}

impl<W: Write> Runtime<W> {
    pub fn from_parts(process: Process, random: JsRandom, console: Console<W>) -> Self {
        trace!(
            "runtime initialised: argc {}, seed {}",
            process.argc(),
            random.seed()
        );
        Runtime {
            process,
            random,
            console,
        }
    }

    pub fn process(&self) -> &Process {
        &self.process
    }

    /// `Math.random()`
    pub fn random(&mut self) -> f64 {
        self.random.random()
    }

    /// `console.log(value)`
    pub fn log(&mut self, value: impl Into<Loggable>) {
        self.console.log(value);
    }

    pub fn console(&self) -> &Console<W> {
        &self.console
    }

    pub fn into_console(self) -> Console<W> {
        self.console
    }
}
