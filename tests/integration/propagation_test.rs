use frametrail::{
    bail_context, chain_context_error, context_error, here, try_context, wrap_context_error,
    Cause, ContextError, OptionExt, ResultExt,
};
use std::collections::HashMap;
use std::io;

fn read_block(fail: bool) -> Result<Vec<u8>, io::Error> {
    if fail {
        Err(io::Error::new(io::ErrorKind::Other, "disk err"))
    } else {
        Ok(vec![1, 2, 3])
    }
}

fn load_page(fail: bool) -> Result<Vec<u8>, ContextError> {
    let block = try_context!(read_block(fail), "page read failed", 5);
    Ok(block)
}

fn open_table(fail: bool) -> Result<usize, ContextError> {
    load_page(fail)
        .map(|page| page.len())
        .map_err(|e| wrap_context_error!(e, "open table failed"))
}

fn start(fail: bool) -> Result<usize, ContextError> {
    let mut pending = open_table(fail).err();
    pending = chain_context_error!(pending, "startup aborted", 1);
    match pending {
        Some(err) => Err(err),
        None => Ok(0),
    }
}

#[test]
fn test_layered_propagation_success() {
    assert_eq!(open_table(false).unwrap(), 3);
    assert_eq!(start(false).unwrap(), 0);
}

#[test]
fn test_layered_propagation_trail() {
    let err = start(true).unwrap_err();

    assert_eq!(err.message(), "startup aborted");
    assert_eq!(err.code(), 1);
    assert_eq!(err.function(), "start");
    assert_eq!(err.file(), "propagation_test.rs");

    let report = err.detailed_message();
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].ends_with("| start() | [code=1] startup aborted"));
    assert!(lines[1].starts_with("    propagation_test.rs:"));
    assert!(lines[1].ends_with("| open_table() | open table failed"));
    assert!(lines[2].ends_with("| load_page() | [code=5] page read failed, disk err"));
}

#[test]
fn test_empty_slot_stays_empty() {
    let slot: Option<ContextError> = None;
    assert!(chain_context_error!(slot, "never raised").is_none());
}

fn lookup(map: &HashMap<&str, u32>, key: &str) -> Result<u32, ContextError> {
    let value = map.get(key).copied().context_at(here!(), format!("no entry for {}", key))?;
    if value == 0 {
        bail_context!("zero is reserved", 22);
    }
    Ok(value)
}

#[test]
fn test_option_and_bail() {
    let mut map = HashMap::new();
    map.insert("a", 1);
    map.insert("z", 0);

    assert_eq!(lookup(&map, "a").unwrap(), 1);

    let err = lookup(&map, "b").unwrap_err();
    assert_eq!(err.message(), "no entry for b");
    assert_eq!(err.function(), "lookup");

    let err = lookup(&map, "z").unwrap_err();
    assert_eq!(err.code(), 22);
    assert!(err.summary().ends_with("| lookup() | [code=22] zero is reserved"));
}

#[test]
fn test_wrap_foreign_text() {
    let err = wrap_context_error!(io::Error::new(io::ErrorKind::Other, "disk err"), "flush failed");
    assert_eq!(err.message(), "flush failed, disk err");
    assert_eq!(err.detailed_message().lines().count(), 1);
}

#[test]
fn test_wrap_same_kind_counts_lines() {
    let mut inner = context_error!("inner");
    inner.merge(context_error!("deeper"));
    inner.merge(context_error!("deepest"));

    let err = wrap_context_error!(inner, "outer", 9);
    assert_eq!(err.code(), 9);
    assert_eq!(err.detailed_message().lines().count(), 1 + 1 + 2);
}

#[test]
fn test_result_ext_on_boxed_errors() {
    fn erased() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        Err(Box::new(context_error!("typed below")))
    }

    let err = erased()
        .map_err(Cause::from_boxed)
        .context_at(here!(), "erased above")
        .unwrap_err();
    let lines: Vec<String> = err.detailed_message().lines().map(String::from).collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[1].ends_with("| erased() | typed below"));
}

#[derive(Debug)]
enum AppError {
    Flush,
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Flush => write!(f, "buffer not flushed"),
        }
    }
}

impl std::error::Error for AppError {}

#[test]
fn test_wrap_caller_defined_error() {
    let err = wrap_context_error!(AppError::Flush, "flush failed");
    assert_eq!(err.message(), "flush failed, buffer not flushed");
    assert_eq!(err.detailed_message().lines().count(), 1);
}

#[test]
fn test_try_context_on_env_lookup() {
    fn home() -> Result<String, ContextError> {
        let value = try_context!(std::env::var("FRAMETRAIL_TEST_UNSET_VARIABLE"), "env lookup failed");
        Ok(value)
    }

    let err = home().unwrap_err();
    assert_eq!(err.message(), "env lookup failed, environment variable not found");
    assert_eq!(err.function(), "home");
}

#[test]
fn test_question_mark_into_cause() {
    fn inner() -> Result<(), ContextError> {
        Err(context_error!("inner"))
    }
    fn outer() -> Result<(), ContextError> {
        inner().context_code_at(here!(), "outer", 3)?;
        Ok(())
    }

    let err = outer().unwrap_err();
    assert_eq!(err.code(), 3);
    assert!(matches!(Cause::from(err), Cause::Structured(_)));
}
