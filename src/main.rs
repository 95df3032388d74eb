//! Purpose: `confix` CLI entry point and command dispatch bootstrap.
//! Role: Binary crate root; parses args, runs commands, emits output on stdout.
//! Invariants: Commands emit stable stdout formats (human or JSON by command/flags).
//! Invariants: Non-interactive errors are emitted as JSON on stderr.
//! Invariants: Process exit code is derived from `api::to_exit_code`.
//! Invariants: Notices go to stderr and never alter stdout payloads.
use std::error::Error as StdError;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};

use clap::{CommandFactory, Parser, Subcommand, ValueEnum, ValueHint};
use clap_complete::aot::Shell;
use serde::Serialize;
use serde_json::{Map, Value, json};

mod color_json;
mod command_dispatch;

use color_json::colorize_json;
use confix::api::{
    Error, ErrorKind, get, normalized, parse_text, read_document, read_source, remove, set,
    strip_comments, to_exit_code, write_document, write_source,
};
use confix::notice::{Notice, notice_json};

#[derive(Copy, Clone, Debug)]
struct RunOutcome {
    exit_code: i32,
}

impl RunOutcome {
    fn ok() -> Self {
        Self { exit_code: 0 }
    }
}

fn main() {
    let exit_code = match run() {
        Ok(outcome) => outcome.exit_code,
        Err((err, color_mode)) => {
            emit_error(&err, color_mode);
            to_exit_code(err.kind())
        }
    };
    std::process::exit(exit_code);
}

fn run() -> Result<RunOutcome, (Error, ColorMode)> {
    let cli = Cli::parse();
    let color_mode = cli.color;
    command_dispatch::dispatch_command(cli.command, color_mode).map_err(|err| (err, color_mode))
}

#[derive(Parser)]
#[command(
    name = "confix",
    about = "Strip, normalize, and edit JSON-with-comments configuration files",
    arg_required_else_help = true
)]
struct Cli {
    #[arg(
        long,
        default_value = "auto",
        value_enum,
        help = "Colorize stderr diagnostics and pretty JSON output: auto|always|never"
    )]
    color: ColorMode,

    #[command(subcommand)]
    command: Command,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum ColorMode {
    Auto,
    Always,
    Never,
}

impl ColorMode {
    fn use_color(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    #[command(
        about = "Print a file with comments removed",
        long_about = r#"Remove // and /* */ comments from a JSON-with-comments file.

Every non-comment character is preserved verbatim; the result is not
reparsed or reformatted. Comment markers inside string literals are
left alone."#,
        after_help = r#"EXAMPLES
  $ confix strip tsconfig.json
  $ confix strip tsconfig.json --write
  $ cat tsconfig.json | confix strip -"#
    )]
    Strip {
        #[arg(value_hint = ValueHint::FilePath, help = "File to strip, or `-` for stdin")]
        file: String,
        #[arg(long, help = "Rewrite the file in place instead of printing")]
        write: bool,
    },
    #[command(
        about = "Verify files parse as JSON after comment removal",
        after_help = r#"EXAMPLES
  $ confix check tsconfig.json
  $ confix check tsconfig.json tsconfig.app.json

NOTES
  - One JSON report line per file on stdout; the first failure stops the run."#
    )]
    Check {
        #[arg(required = true, value_hint = ValueHint::FilePath)]
        files: Vec<PathBuf>,
    },
    #[command(
        about = "Normalize files to pretty JSON (two-space indent, trailing newline)",
        long_about = r#"Parse each file (comments allowed) and render the canonical
serialization: two-space indentation plus a trailing newline.

Comments do not survive normalization; use `strip` to keep layout."#,
        after_help = r#"EXAMPLES
  $ confix fmt tsconfig.json
  $ confix fmt --write tsconfig.json tsconfig.app.json"#
    )]
    Fmt {
        #[arg(required = true, value_hint = ValueHint::FilePath)]
        files: Vec<PathBuf>,
        #[arg(long, help = "Rewrite files in place; unchanged files are left alone")]
        write: bool,
    },
    #[command(
        about = "Print the value at a JSON pointer",
        after_help = r#"EXAMPLES
  $ confix get package.json /name
  $ confix get tsconfig.json /compilerOptions/paths"#
    )]
    Get {
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        #[arg(help = "JSON pointer, e.g. /compilerOptions/baseUrl")]
        pointer: String,
    },
    #[command(
        about = "Assign a value at a JSON pointer and write the file back",
        long_about = r#"Assign a JSON value at a pointer, creating missing parent objects
along the way, then write the document back in normalized form.

Writing back re-serializes the document, so comments in the edited
file are dropped."#,
        after_help = r#"EXAMPLES
  $ confix set tsconfig.json /compilerOptions/baseUrl '"."'
  $ confix set tsconfig.json /compilerOptions/paths '{"@/*": ["./src/*"]}'
  $ confix set package.json /lint-staged '{"*": "prettier --write --ignore-unknown"}'"#
    )]
    Set {
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        #[arg(help = "JSON pointer, e.g. /compilerOptions/baseUrl")]
        pointer: String,
        #[arg(help = "New value as JSON text (quote strings)")]
        value: String,
    },
    #[command(
        about = "Remove the value at a JSON pointer and write the file back",
        after_help = r#"EXAMPLES
  $ confix unset package.json /scripts/postinstall"#
    )]
    Unset {
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        #[arg(help = "JSON pointer, e.g. /scripts/postinstall")]
        pointer: String,
    },
    #[command(about = "Generate shell completions")]
    Completion {
        #[arg(value_enum)]
        shell: Shell,
    },
    #[command(about = "Print version information")]
    Version,
}

#[derive(Serialize)]
struct CheckReport<'a> {
    file: &'a str,
    ok: bool,
}

#[derive(Copy, Clone)]
enum AnsiColor {
    Red,
    Yellow,
}

fn colorize_label(label: &str, use_color: bool, color: AnsiColor) -> String {
    if !use_color {
        return label.to_string();
    }
    let code = match color {
        AnsiColor::Red => "31",
        AnsiColor::Yellow => "33",
    };
    format!("\x1b[{code}m{label}\x1b[0m")
}

fn emit_json(value: Value, color_mode: ColorMode) {
    let is_tty = io::stdout().is_terminal();
    if is_tty {
        println!("{}", colorize_json(&value, color_mode.use_color(is_tty)));
    } else {
        let line = serde_json::to_string(&value).unwrap_or_else(|_| "null".to_string());
        println!("{line}");
    }
}

fn emit_value(value: &Value, color_mode: ColorMode) {
    let is_tty = io::stdout().is_terminal();
    println!("{}", colorize_json(value, color_mode.use_color(is_tty)));
}

fn emit_version_output(color_mode: ColorMode) {
    if io::stdout().is_terminal() {
        println!("confix {}", env!("CARGO_PKG_VERSION"));
    } else {
        emit_json(json!({ "version": env!("CARGO_PKG_VERSION") }), color_mode);
    }
}

fn emit_error(err: &Error, color_mode: ColorMode) {
    let is_tty = io::stderr().is_terminal();
    if is_tty {
        eprintln!("{}", error_text(err, color_mode.use_color(is_tty)));
        return;
    }

    let value = error_json(err);
    let line = serde_json::to_string(&value).unwrap_or_else(|_| {
        "{\"error\":{\"kind\":\"Internal\",\"message\":\"json encode failed\"}}".to_string()
    });
    eprintln!("{line}");
}

fn error_message(err: &Error) -> String {
    match err.message() {
        Some(message) => message.to_string(),
        None => format!("{:?}", err.kind()),
    }
}

fn error_causes(err: &Error) -> Vec<String> {
    let mut causes = Vec::new();
    let mut source = StdError::source(err);
    while let Some(cause) = source {
        causes.push(cause.to_string());
        source = cause.source();
    }
    causes
}

fn error_json(err: &Error) -> Value {
    let mut inner = Map::new();
    inner.insert("kind".to_string(), json!(format!("{:?}", err.kind())));
    inner.insert("message".to_string(), json!(error_message(err)));
    if let Some(hint) = err.hint() {
        inner.insert("hint".to_string(), json!(hint));
    }
    if let Some(path) = err.path() {
        inner.insert("path".to_string(), json!(path.display().to_string()));
    }
    if let Some(pointer) = err.pointer() {
        inner.insert("pointer".to_string(), json!(pointer));
    }
    let causes = error_causes(err);
    if !causes.is_empty() {
        inner.insert("causes".to_string(), json!(causes));
    }

    let mut outer = Map::new();
    outer.insert("error".to_string(), Value::Object(inner));
    Value::Object(outer)
}

fn error_text(err: &Error, use_color: bool) -> String {
    let mut lines = Vec::new();
    lines.push(format!(
        "{} {}",
        colorize_label("error:", use_color, AnsiColor::Red),
        error_message(err)
    ));

    if let Some(hint) = err.hint() {
        lines.push(format!(
            "{} {hint}",
            colorize_label("hint:", use_color, AnsiColor::Yellow)
        ));
    }
    if let Some(path) = err.path() {
        lines.push(format!(
            "{} {}",
            colorize_label("path:", use_color, AnsiColor::Yellow),
            path.display()
        ));
    }
    if let Some(pointer) = err.pointer() {
        lines.push(format!(
            "{} {pointer}",
            colorize_label("pointer:", use_color, AnsiColor::Yellow)
        ));
    }
    for cause in error_causes(err) {
        lines.push(format!(
            "{} {cause}",
            colorize_label("cause:", use_color, AnsiColor::Yellow)
        ));
    }

    lines.join("\n")
}

fn notice_time_now() -> Option<String> {
    use time::format_description::well_known::Rfc3339;
    time::OffsetDateTime::now_utc().format(&Rfc3339).ok()
}

fn new_notice(
    kind: &str,
    cmd: &str,
    file: &str,
    message: String,
    details: Map<String, Value>,
) -> Notice {
    Notice {
        kind: kind.to_string(),
        time: notice_time_now().unwrap_or_default(),
        cmd: cmd.to_string(),
        file: file.to_string(),
        message,
        details,
    }
}

fn emit_notice(notice: &Notice, color_mode: ColorMode) {
    let is_tty = io::stderr().is_terminal();
    if is_tty {
        let label = colorize_label("notice:", color_mode.use_color(is_tty), AnsiColor::Yellow);
        if notice.file.is_empty() {
            eprintln!("{label} {}", notice.message);
        } else {
            eprintln!("{label} {} (file: {})", notice.message, notice.file);
        }
        return;
    }

    let line = serde_json::to_string(&notice_json(notice)).unwrap_or_else(|_| "{}".to_string());
    eprintln!("{line}");
}

fn read_stdin() -> Result<String, Error> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| {
        Error::new(ErrorKind::Io)
            .with_message("failed to read stdin")
            .with_source(err)
    })?;
    Ok(buffer)
}
