//! rotor-machine: command-line front end for the rotor cipher machine.
//!
//! Settings come from flags, or from the classic prompt-by-prompt dialogue
//! with `--interactive`. Encoding is reciprocal, so the same command with
//! the same settings decodes a ciphertext.

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use rotor_machine::config::{self, MachineConfig};
use rotor_machine::presets::{ReflectorModel, RotorModel};
use rotor_machine::Message;

/// rotor-machine: encode or decode a message with a rotor cipher machine
#[derive(Parser, Debug)]
#[command(name = "rotor-machine")]
#[command(about = "Rotor cipher machine with odometer stepping and a reflector")]
struct Args {
    /// Rotor models, leftmost first (I, II, III, IV, V)
    #[arg(short, long, default_value = "I,II,III")]
    rotors: String,

    /// Initial rotor positions 0-25, leftmost first [default: all 0]
    #[arg(short, long)]
    positions: Option<String>,

    /// Rotor increments 0-25, leftmost first [default: all 1]
    #[arg(short, long)]
    increments: Option<String>,

    /// Reflector model (A, B, C)
    #[arg(long, default_value = "B")]
    reflector: ReflectorModel,

    /// Passes through the rotor chain per direction per character
    #[arg(long, default_value_t = 1)]
    repeat: usize,

    /// Prompt for positions, increments, repeat and message
    #[arg(long)]
    interactive: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Message words; one line is read from stdin when omitted
    message: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level)?;

    let models = config::parse_rotor_list(&args.rotors).context("invalid --rotors")?;

    let (machine, raw) = if args.interactive {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut dialogue = Dialogue::new(stdin.lock(), stdout.lock());
        dialogue.run(&models, args.reflector)?
    } else {
        let machine = config_from_flags(&args, &models)?;
        let raw = if args.message.is_empty() {
            read_message_line(io::stdin().lock())?
        } else {
            args.message.join(" ")
        };
        (machine, raw)
    };

    let message = Message::parse(&raw).context("message rejected")?;
    let mut rotor_set = machine.build().context("failed to assemble rotor set")?;

    info!(
        rotors = %args.rotors,
        reflector = %machine.reflector,
        repeat = machine.repeat,
        length = message.len(),
        "encoding message"
    );
    let encoded = rotor_set.encode(&message);
    debug!(positions = ?rotor_set.positions(), "final rotor positions");

    println!("Encoded message: {}", encoded);
    Ok(())
}

fn init_tracing(default_level: &str) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .context("invalid log filter")?;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;
    Ok(())
}

fn config_from_flags(args: &Args, models: &[RotorModel]) -> anyhow::Result<MachineConfig> {
    let positions = match &args.positions {
        Some(list) => config::parse_settings_list(list).context("invalid --positions")?,
        None => vec![0; models.len()],
    };
    let increments = match &args.increments {
        Some(list) => config::parse_settings_list(list).context("invalid --increments")?,
        None => vec![1; models.len()],
    };
    MachineConfig::from_parts(models, &positions, &increments, args.reflector, args.repeat)
        .context("invalid machine settings")
}

/// Reads one line and strips the line ending; spaces are kept.
fn read_message_line<R: BufRead>(mut input: R) -> anyhow::Result<String> {
    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("failed to read message from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

// ──────── Interactive dialogue ────────

/// Prompt-by-prompt settings dialogue.
///
/// Numbers are read as whitespace-separated tokens, so a rotor's position
/// and increment may share a line or span two.
struct Dialogue<R, W> {
    input: R,
    output: W,
    /// Unread remainder of the current line, line ending stripped.
    line: String,
}

impl<R: BufRead, W: Write> Dialogue<R, W> {
    fn new(input: R, output: W) -> Self {
        Dialogue {
            input,
            output,
            line: String::new(),
        }
    }

    fn run(
        &mut self,
        models: &[RotorModel],
        reflector: ReflectorModel,
    ) -> anyhow::Result<(MachineConfig, String)> {
        let mut positions = Vec::with_capacity(models.len());
        let mut increments = Vec::with_capacity(models.len());
        for i in 0..models.len() {
            self.prompt(&format!(
                "Enter rotor {} position and increment (0 - 25): ",
                i
            ))?;
            positions.push(self.next_setting("rotor position")?);
            increments.push(self.next_setting("rotor increment")?);
        }

        self.prompt("Enter repeat: ")?;
        let repeat = self.next_setting("repeat")?;

        let machine = MachineConfig::from_parts(models, &positions, &increments, reflector, repeat)
            .context("invalid machine settings")?;

        self.prompt("Enter message: ")?;
        let message = self.read_message()?;
        Ok((machine, message))
    }

    fn prompt(&mut self, text: &str) -> anyhow::Result<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    fn next_token(&mut self) -> anyhow::Result<String> {
        loop {
            if let Some(start) = self.line.find(|c: char| !c.is_whitespace()) {
                let end = self.line[start..]
                    .find(char::is_whitespace)
                    .map_or(self.line.len(), |len| start + len);
                let token = self.line[start..end].to_string();
                self.line.drain(..end);
                return Ok(token);
            }
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                bail!("unexpected end of input");
            }
            self.line = line.trim_end_matches(['\r', '\n']).to_string();
        }
    }

    fn next_setting(&mut self, what: &str) -> anyhow::Result<usize> {
        let token = self.next_token()?;
        token
            .parse()
            .with_context(|| format!("{} must be a non-negative integer, got {:?}", what, token))
    }

    /// Rest of the current line if anything is left on it, else the next line.
    ///
    /// The one separator after the repeat value is dropped; the rest of the
    /// line is kept verbatim.
    fn read_message(&mut self) -> anyhow::Result<String> {
        let rest = std::mem::take(&mut self.line);
        let mut chars = rest.chars();
        match chars.next() {
            Some(_) if !chars.as_str().is_empty() => Ok(chars.as_str().to_string()),
            _ => read_message_line(&mut self.input),
        }
    }
}
