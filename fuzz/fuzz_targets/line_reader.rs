#![no_main]

use std::io::Cursor;

use libfuzzer_sys::fuzz_target;
use splitrs::LineReader;

fuzz_target!(|data: Vec<u8>| {
    for encoding in [encoding_rs::UTF_8, encoding_rs::SHIFT_JIS, encoding_rs::EUC_JP] {
        let reader = LineReader::new(Cursor::new(data.clone()), encoding);
        let lines: Vec<String> = reader.map(|line| line.unwrap()).collect();

        // Verify: no emitted line carries a terminator
        for line in &lines {
            assert!(!line.contains('\n'));
        }

        // Verify: the line count matches the newline count, give or take the
        // unterminated tail
        let newlines = data.iter().filter(|&&b| b == b'\n').count();
        if encoding == encoding_rs::UTF_8 {
            assert!(lines.len() == newlines || lines.len() == newlines + 1);
        }
    }
});
