use std::fs;
use std::path::{Path, PathBuf};
use sug::convert::{ConvertOptions, FileOutcome, convert_file, convert_files};
use sug::{ConversionError, Error, RenderOptions, languages};

const SCRIPT: &str = "// # Greeter\n//\n// Says hello.\nfunction greet(name) {\n  return 'hi ' + name\n}\n";

fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn options(output_dir: &Path) -> ConvertOptions {
    ConvertOptions {
        output_dir: output_dir.to_path_buf(),
        ..ConvertOptions::default()
    }
}

#[test]
fn converts_a_batch_into_the_output_dir() {
    let src = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let js = write(src.path(), "greet.js", SCRIPT);
    let py = write(src.path(), "tool.py", "# Tool\nprint('x')\n");

    let outcomes = convert_files(&[&js, &py], languages(), &options(out.path()), |_| {}).unwrap();

    assert!(outcomes.iter().all(FileOutcome::is_converted));
    let greet = fs::read_to_string(out.path().join("greet.md")).unwrap();
    assert_eq!(
        greet,
        "# Greeter\n\nSays hello.\n\n```js\nfunction greet(name) {\n  return 'hi ' + name\n}\n \n```\n"
    );
    let tool = fs::read_to_string(out.path().join("tool.md")).unwrap();
    assert_eq!(tool, "Tool\n\n```python\nprint('x')\n \n```\n");
}

#[test]
fn unsupported_files_do_not_stop_the_batch() {
    let src = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let sql = write(src.path(), "schema.sql", "-- tables\n");
    let js = write(src.path(), "greet.js", SCRIPT);

    let mut seen = Vec::new();
    let outcomes = convert_files(&[&sql, &js], languages(), &options(out.path()), |o| {
        seen.push(o.input().to_path_buf())
    })
    .unwrap();

    assert_eq!(seen, vec![sql.clone(), js.clone()]);
    assert!(matches!(
        &outcomes[0],
        FileOutcome::Failed { error: ConversionError::UnhandledFile(path), .. } if *path == sql
    ));
    assert!(outcomes[1].is_converted());
    assert!(out.path().join("greet.md").exists());
    assert!(!out.path().join("schema.md").exists());
}

#[test]
fn unknown_forced_language_fails_every_file() {
    let src = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let js = write(src.path(), "greet.js", SCRIPT);

    let opts = ConvertOptions {
        language: Some("cobol".to_string()),
        ..options(out.path())
    };
    let outcomes = convert_files(&[&js], languages(), &opts, |_| {}).unwrap();

    match &outcomes[0] {
        FileOutcome::Failed { error, .. } => {
            assert_eq!(error.to_string(), "Language <cobol> not supported.")
        }
        other => panic!("expected failure, got {:?}", other),
    }
}

#[test]
fn forced_language_overrides_extension() {
    let src = tempfile::tempdir().unwrap();
    let script = write(src.path(), "build", "# Build it\nmake all\n");

    let markdown = convert_file(&script, Some("bash"), languages(), RenderOptions::default()).unwrap();
    assert_eq!(markdown, "Build it\n\n```bash\nmake all\n \n```\n");
}

#[test]
fn doc_only_keeps_just_the_prose() {
    let src = tempfile::tempdir().unwrap();
    let js = write(src.path(), "greet.js", SCRIPT);

    let markdown = convert_file(&js, None, languages(), RenderOptions { doc_only: true }).unwrap();
    assert_eq!(markdown, "# Greeter\n\nSays hello.");
}

#[test]
fn missing_file_aborts_the_batch() {
    let out = tempfile::tempdir().unwrap();
    let missing = out.path().join("gone.js");

    let result = convert_files(&[&missing], languages(), &options(out.path()), |_| {});
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn creates_missing_output_dir() {
    let src = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let nested = out.path().join("docs").join("api");
    let js = write(src.path(), "greet.js", SCRIPT);

    let outcomes = convert_files(&[&js], languages(), &options(&nested), |_| {}).unwrap();

    match &outcomes[0] {
        FileOutcome::Converted { output, .. } => assert_eq!(*output, nested.join("greet.md")),
        other => panic!("expected conversion, got {:?}", other),
    }
    assert!(nested.join("greet.md").is_file());
}

#[test]
fn crlf_input_renders_like_lf() {
    let src = tempfile::tempdir().unwrap();
    let lf = write(src.path(), "lf.js", "// doc\nvar a = 1\n");
    let crlf = write(src.path(), "crlf.js", "// doc\r\nvar a = 1\r\n");

    let render = |p: &Path| convert_file(p, None, languages(), RenderOptions::default()).unwrap();
    assert_eq!(render(&lf), render(&crlf));
}
