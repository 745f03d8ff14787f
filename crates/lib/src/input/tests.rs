use crate::env::Size;

use super::{ErrorKind, IStr};

#[test]
fn test_lines() {
    let mut input = IStr::new(b"..1\n\n*..", Size::ZERO);

    assert_eq!(input.try_line::<&str>().unwrap(), Some("..1"));
    assert_eq!(input.try_line::<&str>().unwrap(), Some(""));
    assert_eq!(input.try_line::<&str>().unwrap(), Some("*.."));
    assert_eq!(input.try_line::<&str>().unwrap(), None);
    assert!(input.is_empty());
}

#[test]
fn test_expected_line() {
    let mut input = IStr::new(b"", Size::ZERO);
    let error = input.line::<&str>().unwrap_err();
    assert_eq!(error.kind(), ErrorKind::ExpectedLine);
}

#[test]
fn test_not_utf8() {
    let mut input = IStr::new(b"abc\n\xff\xfe\n", Size::ZERO);

    assert_eq!(input.line::<&str>().unwrap(), "abc");
    let error = input.line::<&str>().unwrap_err();
    assert_eq!(error.kind(), ErrorKind::NotUtf8);
    assert_eq!(error.span, Size::new(4)..Size::new(6));
}
