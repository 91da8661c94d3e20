//! Concurrent logging through one console.

use std::collections::HashMap;
use std::io::{self, Write};
use std::thread;

use conlog::{declare_category, log, CategoryColors, ColorChoice, Console, Severity};

declare_category! {
    static WORKER {
        name: "Worker",
        severities: All,
        enabled: true,
        debug_only: false,
        timestamp: false,
        colors: CategoryColors::DEFAULT,
    }
}

declare_category! {
    static AUDIT {
        name: "Audit",
        severities: Error,
        enabled: true,
        debug_only: false,
        timestamp: false,
        colors: CategoryColors::PLAIN,
    }
}

/// Writes one byte per call so that any unserialized writer would interleave.
struct ByteWriter(Vec<u8>);

impl Write for ByteWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match buf.first() {
            Some(&byte) => {
                self.0.push(byte);
                thread::yield_now();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

const THREADS: usize = 8;
const LINES: usize = 50;

#[test]
fn lines_never_interleave() {
    let console = Console::new(ByteWriter(Vec::new()), ColorChoice::Never);

    thread::scope(|scope| {
        for id in 0..THREADS {
            let console = &console;
            scope.spawn(move || {
                for n in 0..LINES {
                    if id % 2 == 0 {
                        log!(console, WORKER, Info, "thread ", id, " line ", n).unwrap();
                    } else {
                        log!(console, AUDIT, Error, "thread ", id, " line ", n).unwrap();
                    }
                }
            });
        }
    });

    let output = String::from_utf8(console.into_inner().0).unwrap();
    let mut per_thread: HashMap<usize, Vec<usize>> = HashMap::new();
    for line in output.lines() {
        let body = line
            .strip_prefix("Worker: [INFO]: thread ")
            .or_else(|| line.strip_prefix("Audit: [ERROR]: thread "))
            .unwrap_or_else(|| panic!("malformed line: {line:?}"));
        let (id, n) = body.split_once(" line ").unwrap();
        per_thread
            .entry(id.parse().unwrap())
            .or_default()
            .push(n.parse().unwrap());
    }

    assert_eq!(per_thread.len(), THREADS);
    for lines in per_thread.values() {
        assert_eq!(lines, &(0..LINES).collect::<Vec<_>>());
    }
}

#[test]
fn colored_lines_keep_their_reset() {
    let console = Console::new(Vec::new(), ColorChoice::Always);

    thread::scope(|scope| {
        for _ in 0..4 {
            let console = &console;
            scope.spawn(move || {
                for _ in 0..25 {
                    log!(console, WORKER, Warning, "tick").unwrap();
                }
            });
        }
    });

    let output = String::from_utf8(console.into_inner()).unwrap();
    // One segment per line: its tag plus the tag, message and reset colors.
    let segments: Vec<&str> = output.split("Worker: ").skip(1).collect();
    assert_eq!(segments.len(), 100);
    for segment in segments {
        assert_eq!(segment.matches("[WARNING]").count(), 1);
        assert_eq!(segment.matches('\u{1b}').count(), 6);
    }
    assert!(WORKER.can_accept(Severity::Warning));
}
