use std::cell::RefCell;
use std::fmt;
use std::io::{self, Write};
use std::rc::Rc;

/// A writable destination for classified output
///
/// Sinks are cheap to clone and every clone writes into the same underlying
/// writer, so the stdout and stderr routes of one invocation can alias a single
/// pager input. All output of a top-level invocation happens on one thread,
/// hence `Rc` rather than `Arc`.
#[derive(Clone)]
pub struct Sink {
    inner: Rc<RefCell<Box<dyn Write>>>,
}

impl Sink {
    pub fn new(writer: impl Write + 'static) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Box::new(writer))),
        }
    }

    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }

    /// Drops the underlying writer; later writes are discarded.
    ///
    /// Closing an external pager's stdin is what tells it that input ended,
    /// regardless of how many clones of this sink are still alive.
    pub fn close(&self) -> io::Result<()> {
        let mut writer = self.inner.borrow_mut();
        writer.flush()?;
        *writer = Box::new(io::sink());
        Ok(())
    }

    pub fn aliases(&self, other: &Sink) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Write for Sink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.borrow_mut().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.borrow_mut().flush()
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sink")
            .field("writers", &Rc::strong_count(&self.inner))
            .finish()
    }
}

/// In-memory sink used to capture the text output of an invocation
#[derive(Debug, Clone, Default)]
pub struct CaptureBuffer {
    bytes: Rc<RefCell<Vec<u8>>>,
}

impl CaptureBuffer {
    pub fn sink(&self) -> Sink {
        Sink::new(self.clone())
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.borrow()).into_owned()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.borrow().is_empty()
    }
}

impl Write for CaptureBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
