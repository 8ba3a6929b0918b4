//! Build-time configuration constants generated by `build.rs`.

include!(concat!(env!("OUT_DIR"), "/env.rs"));
