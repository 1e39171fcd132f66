/*!
 * `process.argv` / `process.argc`
 *
 * Argument slots are shifted by one: the OS argument `i` lands in slot
 * `i + 1`, and slot 0 is reserved for a program name that is never written
 * unless the caller opts in with [`Process::with_program_name`]. The stored
 * count is therefore always one more than the number of supplied arguments.
 */

use std::ffi::OsStr;

use crate::utils::trace;

/// Command-line state captured once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Process {
    program: Option<String>,
    args: Vec<String>,
}

impl Process {
    /// Capture `args` into slots `1..=args.len()`.
    ///
    /// Any bytes are accepted; invalid UTF-8 is replaced with U+FFFD.
    pub fn setargs<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let args: Vec<String> = args
            .into_iter()
            .map(|arg| arg.as_ref().to_string_lossy().into_owned())
            .collect();
        trace!("process.argv captured: {} supplied, argc {}", args.len(), args.len() + 1);
        Process { program: None, args }
    }

    /// Capture the arguments of the running executable.
    ///
    /// The executable path is OS argument 0 and so sits in slot 1.
    pub fn from_env() -> Self {
        Self::setargs(std::env::args_os())
    }

    /// Fill the reserved slot 0
    pub fn with_program_name(mut self, name: impl Into<String>) -> Self {
        self.program = Some(name.into());
        self
    }

    /// Number of slots, reserved slot 0 included
    pub fn argc(&self) -> usize {
        self.args.len() + 1
    }

    /// Slot `index`; `None` for the unwritten slot 0 or past the end
    pub fn arg(&self, index: usize) -> Option<&str> {
        match index {
            0 => self.program.as_deref(),
            i => self.args.get(i - 1).map(String::as_str),
        }
    }

    /// All slots in order, slot 0 as `None` when unwritten
    pub fn argv(&self) -> impl Iterator<Item = Option<&str>> + '_ {
        std::iter::once(self.program.as_deref()).chain(self.args.iter().map(|a| Some(a.as_str())))
    }

    /// The supplied arguments, without the reserved slot
    pub fn supplied(&self) -> &[String] {
        &self.args
    }
}
