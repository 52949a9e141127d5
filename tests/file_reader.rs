use joined_line_reader::{FileLineReader, LineError, LineReader, Source};
use std::io::{BufReader, Write};
use tempfile::tempdir;

const SAMPLE: &str = "\
@read1 desc
ACGTN
+
!!!!!";

#[test]
fn reads_lines_from_bufread() {
    let rdr = BufReader::new(SAMPLE.as_bytes());
    let mut lines = FileLineReader::from_bufread(rdr);
    let mut line = String::new();

    assert!(lines.read_line(&mut line).unwrap());
    assert_eq!(line, "@read1 desc");
    assert!(lines.read_line(&mut line).unwrap());
    assert_eq!(line, "ACGTN");
    assert!(lines.read_line(&mut line).unwrap());
    assert_eq!(line, "+");
    // last line has no terminator
    assert!(lines.read_line(&mut line).unwrap());
    assert_eq!(line, "!!!!!");

    assert!(!lines.read_line(&mut line).unwrap());
    assert!(line.is_empty());
    assert_eq!(lines.line_num(), 4);
    assert_eq!(lines.byte_pos(), SAMPLE.len() as u64);
    assert!(matches!(lines.source(), Source::Reader));
}

#[test]
fn strips_crlf_but_keeps_inner_cr() {
    let rdr = BufReader::new("a\r\nb\rc\n\r\n".as_bytes());
    let lines: Vec<String> = FileLineReader::from_bufread(rdr)
        .map(|l| l.unwrap())
        .collect();
    assert_eq!(lines, vec!["a", "b\rc", ""]);
}

#[test]
fn from_path_reads_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("reads.txt");
    {
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "first").unwrap();
        writeln!(f, "second").unwrap();
    }

    let mut lines = FileLineReader::from_path(&path, 16).expect("open file");
    assert_eq!(lines.source().path(), Some(path.as_path()));

    // through the trait object, as the joined reader sees it
    let dyn_rdr: &mut dyn LineReader = &mut lines;
    let mut line = String::new();
    assert!(dyn_rdr.read_line(&mut line).unwrap());
    assert_eq!(line, "first");
    assert!(dyn_rdr.read_line(&mut line).unwrap());
    assert_eq!(line, "second");
    assert!(!dyn_rdr.read_line(&mut line).unwrap());
}

#[test]
fn from_path_missing_is_open_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nope.txt");

    match FileLineReader::from_path(&path, 1024) {
        Err(LineError::Open { path: p, source }) => {
            assert_eq!(p, path);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        Err(other) => panic!("expected open error, got {other:?}"),
        Ok(_) => panic!("missing file opened"),
    }
}

#[test]
fn invalid_utf8_reports_position() {
    let rdr = BufReader::new(&b"good\n\xc3\x28\n"[..]);
    let mut lines = FileLineReader::from_bufread(rdr);
    assert_eq!(lines.next().unwrap().unwrap(), "good");

    let err = lines.next().unwrap().unwrap_err();
    match err {
        LineError::Read { path, ctx, .. } => {
            assert!(path.is_none());
            assert_eq!(ctx.line_num, 1);
            assert_eq!(ctx.byte_pos, 5);
        }
        other => panic!("expected read error, got {other:?}"),
    }
}
