/*!
 * The `console` namespace
 *
 * `console.log` accepts an integer or a string and prints it followed by a
 * newline (`%d\n` / `%s\n`). Write errors are swallowed: a closed pipe must
 * not bring the program down.
 */

use std::fmt;
use std::io::{self, Write};

use wasm_bindgen::prelude::*;

/// A value `console.log` knows how to print
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Loggable {
    Int(i32),
    Text(String),
}

impl fmt::Display for Loggable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Loggable::Int(x) => write!(f, "{}", x),
            Loggable::Text(s) => f.write_str(s),
        }
    }
}

impl From<i32> for Loggable {
    fn from(x: i32) -> Self {
        Loggable::Int(x)
    }
}

impl From<&str> for Loggable {
    fn from(s: &str) -> Self {
        Loggable::Text(s.to_owned())
    }
}

impl From<String> for Loggable {
    fn from(s: String) -> Self {
        Loggable::Text(s)
    }
}

impl From<&String> for Loggable {
    fn from(s: &String) -> Self {
        Loggable::Text(s.clone())
    }
}

/// Line-oriented console over any writer
pub struct Console<W: Write> {
    out: W,
}

/// Writer behind [`Console::stdout`]: the process's stdout natively, the
/// host console under wasm
#[cfg(not(target_arch = "wasm32"))]
pub type StdoutWriter = io::Stdout;

#[cfg(target_arch = "wasm32")]
pub type StdoutWriter = HostConsole;

/// Line-buffered writer that hands each complete line to the host's
/// `console.log`
#[derive(Debug, Default)]
pub struct HostConsole {
    pending: Vec<u8>,
}

impl HostConsole {
    pub fn new() -> Self {
        HostConsole::default()
    }

    fn emit(line: &[u8]) {
        let text = String::from_utf8_lossy(line);

        #[cfg(target_arch = "wasm32")]
        {
            web_sys::console::log_1(&JsValue::from_str(&text));
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            println!("{}", text);
        }
    }
}

impl Write for HostConsole {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.pending.extend_from_slice(buf);
        while let Some(pos) = self.pending.iter().position(|&b| b == b'\n') {
            let line: Vec<u8> = self.pending.drain(..=pos).collect();
            Self::emit(&line[..line.len() - 1]);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if !self.pending.is_empty() {
            let line = std::mem::take(&mut self.pending);
            Self::emit(&line);
        }
        Ok(())
    }
}

impl Console<StdoutWriter> {
    /// Console bound to standard output
    pub fn stdout() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            Console { out: HostConsole::new() }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Console { out: io::stdout() }
        }
    }
}

impl<W: Write> Console<W> {
    pub fn new(out: W) -> Self {
        Console { out }
    }

    /// Print `value` and a newline
    pub fn log(&mut self, value: impl Into<Loggable>) {
        let _ = writeln!(self.out, "{}", value.into());
        let _ = self.out.flush();
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// `console.log` on standard output
pub fn log(value: impl Into<Loggable>) {
    Console::stdout().log(value);
}

/// wasm export of [`log`] for integers
#[wasm_bindgen(js_name = logInt)]
pub fn js_log_int(x: i32) {
    log(x);
}

/// wasm export of [`log`] for strings
#[wasm_bindgen(js_name = logText)]
pub fn js_log_text(s: &str) {
    log(s);
}
