//! Logging through declared categories, end to end.

use std::cell::Cell;
use std::fmt;
use std::net::{Ipv4Addr, SocketAddr};

use conlog::{
    declare_category, format_message, impl_loggable, log, log_error, log_info, log_warning, CategoryColors, ColorChoice,
    Console, FixedClock, FormattedMessage, Severity, WideString,
};

declare_category! {
    static NET {
        name: "Net",
        severities: All,
        enabled: true,
        debug_only: false,
        timestamp: false,
        colors: CategoryColors::PLAIN,
    }
}

declare_category! {
    static DISK {
        name: "Disk",
        severities: Warning,
        enabled: true,
        debug_only: false,
        timestamp: true,
        colors: CategoryColors::DEFAULT,
    }
}

declare_category! {
    static SILENT {
        name: "Silent",
        severities: All,
        enabled: false,
        debug_only: false,
        timestamp: true,
        colors: CategoryColors::DEFAULT,
    }
}

fn console() -> Console<Vec<u8>> {
    Console::new(Vec::new(), ColorChoice::Never).with_clock(FixedClock::new("08:00:00"))
}

fn text(console: Console<Vec<u8>>) -> String {
    String::from_utf8(console.into_inner()).unwrap()
}

#[test]
fn line_layout() {
    let console = console();
    log!(console, NET, Info, "peer ", 7, " connected").unwrap();
    log!(console, DISK, Warning, "usage at ", 91.5, "%").unwrap();
    assert_eq!(
        text(console),
        "Net: [INFO]: peer 7 connected\n08:00:00 Disk: [WARNING]: usage at 91.5%\n"
    );
}

#[test]
fn accepts_console_by_reference() {
    let console = console();
    let shared = &console;
    log!(shared, NET, Error, "fatal").unwrap();
    assert_eq!(text(console), "Net: [ERROR]: fatal\n");
}

#[test]
fn wide_argument_is_written_as_text() {
    let console = console();
    let name = WideString::from("Zoë");
    log!(console, NET, Info, "user ", name, " logged in").unwrap();
    assert_eq!(text(console), "Net: [INFO]: user Zoë logged in\n");
}

#[test]
fn format_message_width() {
    let narrow = format_message!("a", 1, "b").unwrap();
    assert_eq!(narrow, FormattedMessage::Narrow("a1b".to_string()));

    let wide = format_message!(WideString::from("a"), 1, WideString::from("b")).unwrap();
    assert_eq!(wide, FormattedMessage::Wide(WideString::from("a1b")));

    let empty = format_message!().unwrap();
    assert_eq!(empty.as_narrow(), Some(""));
}

#[test]
fn disabled_category_does_not_evaluate_arguments() {
    let console = console();
    let evaluated = Cell::new(false);
    let expensive = || {
        evaluated.set(true);
        "payload"
    };
    for _ in 0..3 {
        log!(console, SILENT, Error, "value: ", expensive()).unwrap();
    }
    assert!(!SILENT.is_enabled());
    assert!(!evaluated.get());
    assert_eq!(text(console), "");
}

#[test]
fn enabled_category_evaluates_arguments_once() {
    let console = console();
    let calls = Cell::new(0);
    let counted = || {
        calls.set(calls.get() + 1);
        calls.get()
    };
    log!(console, NET, Info, "call ", counted()).unwrap();
    assert_eq!(calls.get(), 1);
    assert_eq!(text(console), "Net: [INFO]: call 1\n");
}

#[test]
fn rejected_severity_names_category_and_call_site() {
    let console = console();
    let line = line!() + 1;
    let err = log!(console, DISK, Info, "ignored").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("'Disk'"), "{message}");
    assert!(message.contains(file!()), "{message}");
    assert!(message.contains(&format!("line: {line}")), "{message}");
    assert_eq!(text(console), "");
}

#[test]
fn severity_all_is_rejected_even_by_all_categories() {
    let console = console();
    assert!(log!(console, NET, All, "x").is_err());
}

#[test]
fn core_convenience_forms() {
    let console = console();
    log_info!(console, "starting ", 2, " workers").unwrap();
    log_warning!(console, "queue ", "full").unwrap();
    log_error!(console, "worker ", 1, " died").unwrap();

    let output = text(console);
    if conlog::CORE.is_enabled() {
        assert_eq!(
            output,
            "08:00:00 Core: [INFO]: starting 2 workers\n\
             08:00:00 Core: [WARNING]: queue full\n\
             08:00:00 Core: [ERROR]: worker 1 died\n"
        );
    } else {
        assert_eq!(output, "");
    }
}

#[test]
fn colored_output_contains_tag_between_commands() {
    let console = Console::new(Vec::new(), ColorChoice::Always);
    log!(console, DISK, Warning, "hot").unwrap();
    let output = String::from_utf8(console.into_inner()).unwrap();
    let tag = output.find("[WARNING]").unwrap();
    assert!(output[..tag].contains('\u{1b}'));
    assert!(output[tag..].contains(": hot\n"));
    assert!(output.ends_with('m'));
    assert_eq!(output.matches('\u{1b}').count(), 6);
}

#[test]
fn category_accessors() {
    assert_eq!(DISK.accepted(), Severity::Warning);
    assert!(DISK.can_accept(Severity::Warning));
    assert!(!DISK.can_accept(Severity::Info));
    assert!(NET.can_accept(Severity::Error));
}

#[derive(Clone, Copy)]
enum Phase {
    Handshake,
    Transfer,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Phase::Handshake => "handshake",
            Phase::Transfer => "transfer",
        })
    }
}

impl_loggable!(Phase);

#[test]
fn display_types_are_logged_directly() {
    let console = console();
    let peer: SocketAddr = "10.0.0.2:7000".parse().unwrap();
    log!(console, NET, Info, "ip ", Ipv4Addr::LOCALHOST, " peer ", peer).unwrap();
    log!(console, NET, Warning, Phase::Handshake, " -> ", Phase::Transfer).unwrap();
    log!(console, NET, Error, "level ", Severity::Error).unwrap();
    assert_eq!(
        text(console),
        "Net: [INFO]: ip 127.0.0.1 peer 10.0.0.2:7000\n\
         Net: [WARNING]: handshake -> transfer\n\
         Net: [ERROR]: level error\n"
    );
}
