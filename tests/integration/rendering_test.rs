use frametrail::output::{create_formatter, render_summary};
use frametrail::{ContextError, Frame, Location, RenderSettings};

#[test]
fn test_summary_contract() {
    let err = ContextError::new("disk full", 28, Location::new("io.cc", 42, "Flush"));
    assert_eq!(err.summary(), "io.cc:42 | Flush() | [code=28] disk full");
    assert_eq!(render_summary(err.base_frame()), err.summary());
    assert_eq!(err.to_string(), "io.cc:42 | Flush() | [code=28] disk full");
}

#[test]
fn test_detailed_contract() {
    let e1 = ContextError::new("open failed", 0, Location::new("db.cc", 10, "Open"));
    let mut e2 = ContextError::new("init failed", 0, Location::new("main.cc", 5, "Main"));
    e2.merge(e1);

    assert_eq!(
        e2.detailed_message(),
        "main.cc:5 | Main() | init failed\n    db.cc:10 | Open() | open failed"
    );
    assert_eq!(format!("{:#}", e2), e2.detailed_message());
}

#[test]
fn test_zero_code_is_not_rendered() {
    let frame = Frame::new("quiet", 0, Location::new("q.rs", 3, "quiet"));
    assert_eq!(frame.code(), 0);
    assert!(!render_summary(&frame).contains("[code="));
}

#[test]
fn test_configured_formatter() {
    let mut err = ContextError::new("top", 0, Location::new("t.rs", 1, "top"));
    for i in 0..5 {
        err.merge(ContextError::new("below", 0, Location::new("b.rs", i, "below")));
    }

    let settings = RenderSettings {
        indent: 2,
        use_colors: false,
        max_child_frames: Some(2),
    };
    let report = create_formatter(&settings).format(&err);
    assert_eq!(
        report,
        "t.rs:1 | top() | top\n  b.rs:0 | below() | below\n  b.rs:1 | below() | below\n  ... 3 more frames"
    );
}

#[test]
fn test_error_trait_object() {
    let err: Box<dyn std::error::Error + Send + Sync> =
        Box::new(ContextError::new("boxed", 0, Location::new("x.rs", 1, "x")));
    assert_eq!(err.to_string(), "x.rs:1 | x() | boxed");
    assert!(err.source().is_none());
}
