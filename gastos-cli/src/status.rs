//! User-visible status lines: plain text plus an ok/error/neutral
//! classifier. Errors go to stderr, everything else to stdout.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Ok,
    Error,
    Neutral,
}

pub fn report(kind: StatusKind, message: &str) {
    match kind {
        StatusKind::Ok => println!("ok: {message}"),
        StatusKind::Error => eprintln!("error: {message}"),
        StatusKind::Neutral => println!("{message}"),
    }
}
