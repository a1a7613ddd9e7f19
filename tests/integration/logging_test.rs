use frametrail::logging::{report, report_warning};
use frametrail::{context_error, wrap_context_error};
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Captured {
    type Writer = Captured;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[test]
fn test_report_emits_trail_fields() {
    let captured = Captured::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(captured.clone())
        .with_ansi(false)
        .finish();

    let err = wrap_context_error!(context_error!("inner", 4), "outer", 2);
    tracing::subscriber::with_default(subscriber, || {
        report(&err);
        report_warning(&err);
    });

    let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
    assert!(output.contains("ERROR"));
    assert!(output.contains("WARN"));
    assert!(output.contains("outer"));
    assert!(output.contains("code=2"));
    assert!(output.contains("test_report_emits_trail_fields"));
    assert!(output.contains("[code=4] inner"));
}
