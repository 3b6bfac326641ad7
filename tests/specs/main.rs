//! Black-box specs for the `rigor` binary.

mod prelude;

mod cli {
    mod help;
    mod parse;
    mod run;
}

mod shell {
    mod pipelines;
    mod redirects;
    mod sequences;
}

mod strategies {
    mod external;
    mod tcl;
}
