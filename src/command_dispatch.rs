//! Purpose: Hold top-level CLI command dispatch for `confix`.
//! Exports: `dispatch_command`.
//! Role: Keep `main.rs` focused on parse/bootstrap and delegate command execution.
//! Invariants: Command behavior, output envelopes, and exit code semantics stay stable.
//! Invariants: Emission helpers in `main.rs` remain the single output path.

use super::*;

pub(super) fn dispatch_command(
    command: Command,
    color_mode: ColorMode,
) -> Result<RunOutcome, Error> {
    match command {
        Command::Strip { file, write } => run_strip(&file, write),
        Command::Check { files } => run_check(&files),
        Command::Fmt { files, write } => run_fmt(&files, write, color_mode),
        Command::Get { file, pointer } => run_get(&file, &pointer, color_mode),
        Command::Set {
            file,
            pointer,
            value,
        } => run_set(&file, &pointer, &value, color_mode),
        Command::Unset { file, pointer } => run_unset(&file, &pointer, color_mode),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            clap_complete::aot::generate(shell, &mut cmd, "confix", &mut io::stdout());
            Ok(RunOutcome::ok())
        }
        Command::Version => {
            emit_version_output(color_mode);
            Ok(RunOutcome::ok())
        }
    }
}

fn run_strip(file: &str, write: bool) -> Result<RunOutcome, Error> {
    if file == "-" {
        if write {
            return Err(Error::new(ErrorKind::Usage)
                .with_message("--write cannot be combined with stdin input")
                .with_hint("Pass a file path to rewrite in place."));
        }
        let text = read_stdin()?;
        print!("{}", strip_comments(&text));
        return Ok(RunOutcome::ok());
    }

    let path = PathBuf::from(file);
    let text = read_source(&path)?;
    let stripped = strip_comments(&text);
    if write {
        if stripped != text {
            write_source(&path, &stripped)?;
        }
    } else {
        print!("{stripped}");
    }
    Ok(RunOutcome::ok())
}

fn run_check(files: &[PathBuf]) -> Result<RunOutcome, Error> {
    for path in files {
        read_document(path)?;
        let file = path.to_string_lossy();
        let report = CheckReport {
            file: file.as_ref(),
            ok: true,
        };
        let line =
            serde_json::to_string(&report).unwrap_or_else(|_| "{\"ok\":false}".to_string());
        println!("{line}");
    }
    Ok(RunOutcome::ok())
}

fn run_fmt(files: &[PathBuf], write: bool, color_mode: ColorMode) -> Result<RunOutcome, Error> {
    let mut rewritten = 0usize;
    for path in files {
        let text = read_source(path)?;
        let value = parse_text(&text, Some(path))?;
        let pretty = normalized(&value);
        if write {
            if pretty != text {
                write_source(path, &pretty)?;
                rewritten += 1;
            }
        } else {
            print!("{pretty}");
        }
    }

    if write && files.len() > 1 {
        let mut details = Map::new();
        details.insert("rewritten".to_string(), Value::from(rewritten));
        details.insert("total".to_string(), Value::from(files.len()));
        let notice = new_notice(
            "fmt-write",
            "fmt",
            "",
            format!("rewrote {rewritten} of {} files", files.len()),
            details,
        );
        emit_notice(&notice, color_mode);
    }
    Ok(RunOutcome::ok())
}

fn run_get(path: &Path, pointer: &str, color_mode: ColorMode) -> Result<RunOutcome, Error> {
    let doc = read_document(path)?;
    match get(&doc, pointer).map_err(|err| err.with_path(path))? {
        Some(value) => {
            emit_value(value, color_mode);
            Ok(RunOutcome::ok())
        }
        None => Err(Error::new(ErrorKind::NotFound)
            .with_message("no value at pointer")
            .with_path(path)
            .with_pointer(pointer)),
    }
}

fn run_set(
    path: &Path,
    pointer: &str,
    raw_value: &str,
    color_mode: ColorMode,
) -> Result<RunOutcome, Error> {
    let new_value: Value = serde_json::from_str(raw_value).map_err(|err| {
        Error::new(ErrorKind::Usage)
            .with_message("value argument is not valid JSON")
            .with_hint(r#"Quote strings: confix set tsconfig.json /compilerOptions/baseUrl '"."'."#)
            .with_source(err)
    })?;

    let mut doc = read_document(path)?;
    let outcome = set(&mut doc, pointer, new_value).map_err(|err| err.with_path(path))?;
    write_document(path, &doc)?;

    if outcome.created_parents > 0 {
        let suffix = if outcome.created_parents == 1 { "" } else { "s" };
        let mut details = Map::new();
        details.insert(
            "created_parents".to_string(),
            Value::from(outcome.created_parents),
        );
        let notice = new_notice(
            "created-parents",
            "set",
            path.to_string_lossy().as_ref(),
            format!(
                "created {} missing parent object{suffix}",
                outcome.created_parents
            ),
            details,
        );
        emit_notice(&notice, color_mode);
    }

    emit_json(
        json!({
            "file": path.to_string_lossy(),
            "pointer": pointer,
            "created_parents": outcome.created_parents,
        }),
        color_mode,
    );
    Ok(RunOutcome::ok())
}

fn run_unset(path: &Path, pointer: &str, color_mode: ColorMode) -> Result<RunOutcome, Error> {
    let mut doc = read_document(path)?;
    let removed = remove(&mut doc, pointer).map_err(|err| err.with_path(path))?;
    write_document(path, &doc)?;

    emit_json(
        json!({
            "file": path.to_string_lossy(),
            "pointer": pointer,
            "removed": removed,
        }),
        color_mode,
    );
    Ok(RunOutcome::ok())
}
