// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Table-style parser tests.

/// `name: "input" => pipelines: N`
macro_rules! parse_tests {
    ($($name:ident: $input:expr => pipelines: $count:expr),* $(,)?) => {$(
        #[test]
        fn $name() {
            let node = super::helpers::parse($input);
            assert_eq!(node.pipelines().len(), $count, "input: {:?}", $input);
        }
    )*};
}

/// `name: "input" => ErrorPattern`
macro_rules! parse_error_tests {
    ($($name:ident: $input:expr => $error:pat),* $(,)?) => {$(
        #[test]
        fn $name() {
            let result = Parser::parse_str($input);
            assert!(matches!(result, Err($error)), "{:?} => {:?}", $input, result);
        }
    )*};
}

/// `name: "input" => ["argv", ...]` for a single command.
macro_rules! simple_cmd_tests {
    ($($name:ident: $input:expr => [$($arg:expr),* $(,)?]),* $(,)?) => {$(
        #[test]
        fn $name() {
            let node = super::helpers::parse($input);
            let expected: Vec<&str> = vec![$($arg),*];
            assert_eq!(super::helpers::single_command(&node).args, expected, "input: {:?}", $input);
        }
    )*};
}

pub(crate) use {parse_error_tests, parse_tests, simple_cmd_tests};
