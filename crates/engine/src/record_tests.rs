// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn empty_records_render_nothing() {
    assert_eq!(format_records(&[]), "");
}

#[test]
fn records_render_in_order() {
    let records = vec![
        ExecutionRecord::new(SimpleCommand::new(["echo", "hi there"]), b"hi there\n".to_vec(), vec![], 0),
        ExecutionRecord::new(SimpleCommand::new(["false"]), vec![], b"oops".to_vec(), 1),
    ];

    assert_eq!(
        format_records(&records),
        "Command 0: \"echo\" \"hi there\"\n\
         Command 0 Result: 0\n\
         Command 0 Output:\nhi there\n\n\n\
         Command 0 Stderr:\n\n\n\
         Command 1: \"false\"\n\
         Command 1 Result: 1\n\
         Command 1 Output:\n\n\n\
         Command 1 Stderr:\noops\n\n"
    );
}

#[test]
fn negative_codes_and_invalid_utf8() {
    let record = ExecutionRecord::new(SimpleCommand::new(["crash"]), vec![0xff, b'x'], vec![], -11);
    let text = format_records(&[record]);
    assert!(text.contains("Command 0 Result: -11\n"), "{text}");
    assert!(text.contains("Command 0 Output:\n\u{fffd}x\n\n"), "{text}");
}
