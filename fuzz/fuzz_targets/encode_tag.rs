#![no_main]
use libfuzzer_sys::fuzz_target;

use nbtag::error::ErrorKind;
use nbtag::{to_bytes_with_opts, EncOpts, NamedTag};

fuzz_target!(|tag: NamedTag| {
    match to_bytes_with_opts(&tag, EncOpts::new().max_depth(64)) {
        Ok(bs) => {
            // Tag byte, name length and name always come first.
            assert_eq!(bs[0], u8::from(tag.tag()));
            assert_eq!(&bs[3..3 + tag.name().len()], tag.name().as_bytes());
        }
        // Unchecked strings inside lists and deep trees are the only ways to fail.
        Err(e) => assert!(matches!(
            e.kind(),
            ErrorKind::LengthOverflow | ErrorKind::DepthLimit
        )),
    }
});
