use std::convert::TryFrom;

use crate::{error::ErrorKind, Tag};

mod display;

macro_rules! check_tags {
    {$($tag:ident = $val:literal),* $(,)?} => {
        $(
            assert_eq!(u8::from(Tag::$tag), $val);
            assert_eq!(Tag::try_from($val).unwrap(), Tag::$tag);
        )*
    };
}

#[test]
fn exhaustive_tag_check() {
    check_tags! {
        End = 0,
        Byte = 1,
        Short = 2,
        Int = 3,
        Long = 4,
        Float = 5,
        Double = 6,
        ByteArray = 7,
        String = 8,
        List = 9,
        Compound = 10,
    }

    for value in 11..=u8::MAX {
        let err = Tag::try_from(value).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::InvalidTag);
    }
}
